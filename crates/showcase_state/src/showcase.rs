crate::selection_ids! {
    /// Tabs of the "Component Examples" card.
    pub enum ExampleTab: "tab" {
        /// Button variants and sizes.
        Buttons => ("buttons", "Buttons"),
        /// The example sign-up form.
        Forms => ("forms", "Forms"),
        /// Alerts and progress.
        Feedback => ("feedback", "Feedback"),
    }
}

crate::selection_ids! {
    /// Items of the "Documentation Quick Links" accordion.
    pub enum DocsItem: "accordion item" {
        /// Setup guide.
        GettingStarted => ("item-1", "Getting Started"),
        /// Component reference.
        Components => ("item-2", "Components"),
        /// Hosting guide.
        Deployment => ("item-3", "Deployment"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SelectionId;

    #[test]
    fn example_tab_keys() {
        let keys: Vec<_> = ExampleTab::ALL.iter().map(|tab| tab.key()).collect();
        assert_eq!(keys, ["buttons", "forms", "feedback"]);
    }

    #[test]
    fn docs_item_keys() {
        let keys: Vec<_> = DocsItem::ALL.iter().map(|item| item.key()).collect();
        assert_eq!(keys, ["item-1", "item-2", "item-3"]);
    }

    #[test]
    fn example_tab_rejects_undeclared_key() {
        assert!("dialogs".parse::<ExampleTab>().is_err());
    }
}
