use crate::SelectionId;

/// Input accepted by [`AccordionSelection::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccordionEvent<T> {
    /// The trigger of the given item was activated.
    Toggle(T),
}

/// At most one expanded item out of a declared set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccordionSelection<T: SelectionId> {
    expanded: Option<T>,
    collapsible: bool,
}

/// One row produced by [`AccordionSelection::items`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccordionEntry<T> {
    /// The item this row belongs to.
    pub id: T,
    /// Text shown on the trigger.
    pub label: &'static str,
    /// Whether the item's content is visible.
    pub expanded: bool,
}

impl<T: SelectionId> AccordionSelection<T> {
    /// A collapsible selection with nothing expanded.
    pub fn new() -> Self {
        Self {
            expanded: None,
            collapsible: true,
        }
    }

    /// Sets whether re-activating the expanded item collapses it.
    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    /// Whether re-activating the expanded item collapses it.
    pub fn is_collapsible(&self) -> bool {
        self.collapsible
    }

    /// The expanded item, if any.
    pub fn expanded(&self) -> Option<T> {
        self.expanded
    }

    /// Whether `id` is the expanded item.
    pub fn is_expanded(&self, id: T) -> bool {
        self.expanded == Some(id)
    }

    /// Applies an event and returns the next selection.
    ///
    /// Toggling the expanded item collapses it (or keeps it open when not
    /// collapsible); toggling any other item expands it in place of the
    /// current one.
    pub fn apply(self, event: AccordionEvent<T>) -> Self {
        match event {
            AccordionEvent::Toggle(id) => {
                let expanded = match self.expanded {
                    Some(current) if current == id && self.collapsible => None,
                    _ => Some(id),
                };

                Self { expanded, ..self }
            }
        }
    }

    /// Rows for every declared item, in declaration order.
    pub fn items(&self) -> impl Iterator<Item = AccordionEntry<T>> + '_ {
        T::ALL.iter().map(|id| AccordionEntry {
            id: *id,
            label: id.label(),
            expanded: self.is_expanded(*id),
        })
    }
}

impl<T: SelectionId> Default for AccordionSelection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocsItem;

    fn toggle(selection: AccordionSelection<DocsItem>, id: DocsItem) -> AccordionSelection<DocsItem> {
        selection.apply(AccordionEvent::Toggle(id))
    }

    #[test]
    fn starts_with_nothing_expanded() {
        let selection = AccordionSelection::<DocsItem>::default();
        assert_eq!(selection.expanded(), None);
        assert!(selection.is_collapsible());
    }

    #[test]
    fn toggling_twice_collapses() {
        let selection = toggle(AccordionSelection::new(), DocsItem::Components);
        assert_eq!(selection.expanded(), Some(DocsItem::Components));

        let selection = toggle(selection, DocsItem::Components);
        assert_eq!(selection.expanded(), None);
    }

    #[test]
    fn toggling_another_item_moves_expansion() {
        let selection = toggle(AccordionSelection::new(), DocsItem::GettingStarted);
        let selection = toggle(selection, DocsItem::Deployment);

        assert!(selection.is_expanded(DocsItem::Deployment));
        assert!(!selection.is_expanded(DocsItem::GettingStarted));
    }

    #[test]
    fn non_collapsible_keeps_item_open() {
        let selection = AccordionSelection::new().collapsible(false);
        let selection = toggle(selection, DocsItem::GettingStarted);
        let selection = toggle(selection, DocsItem::GettingStarted);

        assert_eq!(selection.expanded(), Some(DocsItem::GettingStarted));
    }

    #[test]
    fn items_report_at_most_one_expanded() {
        let selection = toggle(AccordionSelection::new(), DocsItem::Components);
        let items: Vec<_> = selection.items().collect();

        assert_eq!(items.len(), DocsItem::ALL.len());
        assert_eq!(items.iter().filter(|item| item.expanded).count(), 1);
        assert_eq!(items[1].label, "Components");
        assert!(items[1].expanded);
    }
}
