use std::{f32::consts::PI, rc::Rc, time::Duration};

use gpui::{
    AnyElement, App, Component, CursorStyle, Div, ElementId, InteractiveElement, IntoElement,
    ParentElement, Radians, RenderOnce, Stateful, Styled, Window, div, prelude::FluentBuilder,
    px,
};
use gpui_squircle::SquircleStyled;
use showcase_state::{AccordionEntry, AccordionEvent, AccordionSelection, SelectionId};

use crate::{
    IconKind,
    components::{Icon, Separator},
    primitives::FocusRing,
    theme::{ThemeExt, ThemeTextSizeKind},
    utils::{ElementIdExt, Interaction, goal_transition},
};

type OnToggle<T> = Rc<dyn Fn(&AccordionEvent<T>, &mut Window, &mut App) + 'static>;
type RenderContent<T> = Box<dyn FnOnce(T, &mut Window, &mut App) -> AnyElement + 'static>;

/// Stack of collapsible items, one per declared id.
///
/// Only the expanded item's content is built; its trigger chevron points up.
pub struct Accordion<T: SelectionId> {
    id: ElementId,
    selection: AccordionSelection<T>,
    on_toggle: Option<OnToggle<T>>,
    content: Option<RenderContent<T>>,
}

impl<T: SelectionId> Accordion<T> {
    pub fn new(id: impl Into<ElementId>, selection: AccordionSelection<T>) -> Self {
        Self {
            id: id.into(),
            selection,
            on_toggle: None,
            content: None,
        }
    }

    pub fn on_toggle(
        mut self,
        on_toggle: impl Fn(&AccordionEvent<T>, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_toggle = Some(Rc::new(on_toggle));
        self
    }

    /// Builds the body of the expanded item.
    pub fn content(
        mut self,
        content: impl FnOnce(T, &mut Window, &mut App) -> AnyElement + 'static,
    ) -> Self {
        self.content = Some(Box::new(content));
        self
    }
}

impl<T: SelectionId> IntoElement for Accordion<T> {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}

impl<T: SelectionId> RenderOnce for Accordion<T> {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let mut content = self.content;
        let item_count = T::ALL.len();

        let items = self
            .selection
            .items()
            .enumerate()
            .map(|(ix, entry)| {
                let body = entry
                    .expanded
                    .then(|| content.take())
                    .flatten()
                    .map(|content| content(entry.id, window, cx));

                div()
                    .w_full()
                    .flex()
                    .flex_col()
                    .child(render_trigger(&self.id, entry, self.on_toggle.clone(), window, cx))
                    .children(body.map(|body| div().w_full().pb(px(16.)).child(body)))
                    .when(ix + 1 < item_count, |this| this.child(Separator::horizontal()))
                    .into_any_element()
            })
            .collect::<Vec<_>>();

        div()
            .id(self.id.clone())
            .w_full()
            .flex()
            .flex_col()
            .children(items)
    }
}

fn render_trigger<T: SelectionId>(
    accordion_id: &ElementId,
    entry: AccordionEntry<T>,
    on_toggle: Option<OnToggle<T>>,
    window: &mut Window,
    cx: &mut App,
) -> Stateful<Div> {
    let id = accordion_id.with_suffix(entry.id.key());
    let (primary_text_color, secondary_text_color) =
        cx.get_theme().variants.active(cx).colors.text.all();
    let font_family = cx.get_theme().layout.text.default_font.family[0].clone();
    let text_size = ThemeTextSizeKind::Body.resolve(cx);
    let corner_radius = cx.get_theme().layout.corner_radii.sm;

    let interaction = Interaction::use_keyed(&id, window, cx);
    let is_hover = interaction.is_hover(cx);

    let chevron_transition = goal_transition(
        id.with_suffix("state:transition:chevron"),
        window,
        cx,
        Duration::from_millis(200),
        entry.expanded as u8 as f32,
    );
    let chevron_delta = *chevron_transition.evaluate(window, cx);

    let element = div()
        .id(id.clone())
        .w_full()
        .flex()
        .items_center()
        .justify_between()
        .py(px(16.))
        .cursor(CursorStyle::PointingHand)
        .font_family(font_family)
        .text_size(text_size)
        .font_weight(gpui::FontWeight::MEDIUM)
        .text_color(primary_text_color)
        .when(is_hover, |this| this.underline())
        .child(
            FocusRing::new(id.with_suffix("focus_ring"), interaction.focus_handle().clone())
                .rounded(corner_radius),
        )
        .child(entry.label)
        .child(
            Icon::new(IconKind::ChevronDown)
                .size(px(16.))
                .color(secondary_text_color)
                .rotate(Radians(PI * chevron_delta)),
        );

    let item = entry.id;
    interaction.bind(element, window, false, move |_event, window, cx| {
        tracing::debug!(item = item.key(), "accordion trigger activated");

        if let Some(on_toggle) = &on_toggle {
            (on_toggle)(&AccordionEvent::Toggle(item), window, cx);
        }
    })
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::theme::Theme;
    use gpui::{Modifiers, TestAppContext, point};
    use showcase_state::DocsItem;

    struct AccordionTestView {
        selection: AccordionSelection<DocsItem>,
        rendered: Rc<RefCell<Vec<DocsItem>>>,
    }

    impl gpui::Render for AccordionTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            let rendered = self.rendered.clone();

            div().w(px(600.)).child(
                Accordion::new("docs", self.selection)
                    .on_toggle(cx.listener(|this, event, _window, cx| {
                        this.selection = this.selection.apply(*event);
                        cx.notify();
                    }))
                    .content(move |item, _window, _cx| {
                        rendered.borrow_mut().push(item);
                        div().child(item.label()).into_any_element()
                    }),
            )
        }
    }

    fn add_view(
        cx: &mut TestAppContext,
        rendered: Rc<RefCell<Vec<DocsItem>>>,
    ) -> (gpui::Entity<AccordionTestView>, &mut gpui::VisualTestContext) {
        cx.update(|cx| cx.set_theme(Theme::DEFAULT));
        cx.add_window_view(move |_window, _cx| AccordionTestView {
            selection: AccordionSelection::default(),
            rendered,
        })
    }

    #[gpui::test]
    fn test_collapsed_accordion_builds_no_content(cx: &mut TestAppContext) {
        let rendered = Rc::new(RefCell::new(Vec::new()));
        let (view, cx) = add_view(cx, rendered.clone());

        cx.run_until_parked();

        view.read_with(cx, |view, _cx| assert_eq!(view.selection.expanded(), None));
        assert!(rendered.borrow().is_empty());
    }

    #[gpui::test]
    fn test_clicking_trigger_twice_collapses(cx: &mut TestAppContext) {
        let rendered = Rc::new(RefCell::new(Vec::new()));
        let (view, cx) = add_view(cx, rendered.clone());

        // First trigger row.
        cx.simulate_click(point(px(100.), px(20.)), Modifiers::none());
        view.read_with(cx, |view, _cx| {
            assert_eq!(view.selection.expanded(), Some(DocsItem::GettingStarted))
        });

        cx.run_until_parked();
        assert!(rendered.borrow().iter().all(|item| *item == DocsItem::GettingStarted));

        cx.simulate_click(point(px(100.), px(20.)), Modifiers::none());
        view.read_with(cx, |view, _cx| assert_eq!(view.selection.expanded(), None));
    }
}
