use gpui::{Context, IntoElement, ParentElement, Render, Styled, Window, div, px};
use showcase_state::{AccordionEvent, AccordionSelection, DocsItem, SelectionId};

use crate::{
    components::{Accordion, Badge, BadgeVariant, card},
    views::content,
};

/// "Documentation Quick Links" card; at most one item is expanded.
pub struct DocsPanel {
    selection: AccordionSelection<DocsItem>,
}

impl DocsPanel {
    pub fn new() -> Self {
        Self {
            selection: AccordionSelection::new(),
        }
    }

    pub fn expanded(&self) -> Option<DocsItem> {
        self.selection.expanded()
    }

    pub fn apply(&mut self, event: AccordionEvent<DocsItem>, cx: &mut Context<Self>) {
        self.selection = self.selection.apply(event);

        tracing::debug!(
            expanded = self.selection.expanded().map(|item| item.key()),
            "docs accordion changed"
        );
        cx.notify();
    }
}

impl Default for DocsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for DocsPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        card()
            .title(content::DOCS_TITLE)
            .description(content::DOCS_DESCRIPTION)
            .w_full()
            .child(
                Accordion::new("docs-accordion", self.selection)
                    .on_toggle(cx.listener(|this, event, _window, cx| this.apply(*event, cx)))
                    .content(|item, _window, _cx| {
                        let (sentence, file) = content::docs_entry(item);

                        div()
                            .flex()
                            .flex_col()
                            .items_start()
                            .gap(px(8.))
                            .child(sentence)
                            .child(Badge::new(file).variant(BadgeVariant::Outline))
                            .into_any_element()
                    }),
            )
    }
}
