use gpui::{
    AnyElement, AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
    div, px,
};
use showcase_state::{ExampleTab, SelectionId, TabEvent, TabSelection};

use crate::{
    components::{
        Alert, AlertVariant, Button, ButtonSize, ButtonVariant, Label, Progress, Separator, Tabs,
        card,
    },
    views::{FormPanel, content},
};

/// "Component Examples" card with one tab per [`ExampleTab`].
pub struct ExamplesPanel {
    selection: TabSelection<ExampleTab>,
    form: Entity<FormPanel>,
}

impl ExamplesPanel {
    pub fn new(cx: &mut Context<Self>) -> Self {
        Self {
            selection: TabSelection::default(),
            form: cx.new(FormPanel::new),
        }
    }

    pub fn active(&self) -> ExampleTab {
        self.selection.active()
    }

    pub fn form(&self) -> &Entity<FormPanel> {
        &self.form
    }

    pub fn apply(&mut self, event: TabEvent<ExampleTab>, cx: &mut Context<Self>) {
        let previous = self.selection.active();
        self.selection = self.selection.apply(event);

        if previous != self.selection.active() {
            tracing::debug!(
                from = previous.key(),
                to = self.selection.active().key(),
                "example tab changed"
            );
            cx.notify();
        }
    }
}

impl Render for ExamplesPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let form = self.form.clone();

        card()
            .title(content::EXAMPLES_TITLE)
            .description(content::EXAMPLES_DESCRIPTION)
            .w_full()
            .child(
                Tabs::new("examples-tabs", self.selection)
                    .on_change(cx.listener(|this, event, _window, cx| this.apply(*event, cx)))
                    .content(move |tab, _window, _cx| match tab {
                        ExampleTab::Buttons => buttons_example(),
                        ExampleTab::Forms => form.into_any_element(),
                        ExampleTab::Feedback => feedback_example(),
                    }),
            )
    }
}

fn buttons_example() -> AnyElement {
    let variants = [
        ("Default", ButtonVariant::Primary),
        ("Secondary", ButtonVariant::Secondary),
        ("Destructive", ButtonVariant::Destructive),
        ("Outline", ButtonVariant::Outline),
        ("Ghost", ButtonVariant::Ghost),
        ("Link", ButtonVariant::Link),
    ];

    let sizes = [
        ("Small", ButtonSize::Sm),
        ("Default", ButtonSize::Md),
        ("Large", ButtonSize::Lg),
    ];

    div()
        .flex()
        .flex_col()
        .gap(px(16.))
        .child(
            div()
                .flex()
                .flex_wrap()
                .gap(px(12.))
                .children(variants.into_iter().enumerate().map(|(ix, (text, variant))| {
                    Button::new(("example-variant", ix)).text(text).variant(variant)
                })),
        )
        .child(Separator::horizontal())
        .child(
            div()
                .flex()
                .flex_wrap()
                .items_center()
                .gap(px(12.))
                .children(sizes.into_iter().enumerate().map(|(ix, (text, size))| {
                    Button::new(("example-size", ix)).text(text).size(size)
                })),
        )
        .into_any_element()
}

fn feedback_example() -> AnyElement {
    div()
        .flex()
        .flex_col()
        .gap(px(16.))
        .child(
            Alert::new(content::SUCCESS_TITLE)
                .description(content::SUCCESS_DESCRIPTION)
                .variant(AlertVariant::Success),
        )
        .child(
            Alert::new(content::ERROR_TITLE)
                .description(content::ERROR_DESCRIPTION)
                .variant(AlertVariant::Destructive),
        )
        .child(
            div()
                .flex()
                .flex_col()
                .gap(px(8.))
                .child(Label::new("loading-label", content::LOADING_LABEL))
                .child(Progress::new(content::LOADING_VALUE)),
        )
        .into_any_element()
}
