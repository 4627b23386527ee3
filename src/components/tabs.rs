use std::{rc::Rc, time::Duration};

use gpui::{
    AnyElement, App, Component, CursorStyle, Div, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, Stateful, Styled, Window, div, px,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::TransitionExt;
use showcase_state::{SelectionId, TabEvent, TabSelection, TabTrigger};

use crate::{
    conditional_transition,
    primitives::FocusRing,
    theme::{ThemeExt, ThemeTextSizeKind},
    utils::{ElementIdExt, Interaction, RgbaExt},
};

type OnChange<T> = Rc<dyn Fn(&TabEvent<T>, &mut Window, &mut App) + 'static>;
type RenderContent<T> = Box<dyn FnOnce(T, &mut Window, &mut App) -> AnyElement + 'static>;

/// Trigger strip over a content region.
///
/// One trigger is generated per declared id; only the active id's content
/// is built.
pub struct Tabs<T: SelectionId> {
    id: ElementId,
    selection: TabSelection<T>,
    on_change: Option<OnChange<T>>,
    content: Option<RenderContent<T>>,
}

impl<T: SelectionId> Tabs<T> {
    pub fn new(id: impl Into<ElementId>, selection: TabSelection<T>) -> Self {
        Self {
            id: id.into(),
            selection,
            on_change: None,
            content: None,
        }
    }

    /// Called when a trigger is activated.
    pub fn on_change(
        mut self,
        on_change: impl Fn(&TabEvent<T>, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(on_change));
        self
    }

    /// Builds the content region for the active id.
    pub fn content(
        mut self,
        content: impl FnOnce(T, &mut Window, &mut App) -> AnyElement + 'static,
    ) -> Self {
        self.content = Some(Box::new(content));
        self
    }
}

impl<T: SelectionId> IntoElement for Tabs<T> {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}

impl<T: SelectionId> RenderOnce for Tabs<T> {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let strip_color = cx.get_theme().variants.active(cx).colors.background.tertiary;
        let corner_radius = cx.get_theme().layout.corner_radii.md;
        let padding = cx.get_theme().layout.padding.lg;

        let triggers = self
            .selection
            .triggers()
            .map(|trigger| {
                render_trigger(&self.id, trigger, self.on_change.clone(), window, cx)
                    .into_any_element()
            })
            .collect::<Vec<_>>();

        let active = self.selection.active();
        let content = self.content.map(|content| content(active, window, cx));

        div()
            .id(self.id.clone())
            .w_full()
            .flex()
            .flex_col()
            .gap(padding)
            .child(
                div()
                    .w_full()
                    .flex()
                    .p(px(4.))
                    .gap(px(4.))
                    .rounded(corner_radius)
                    .bg(strip_color)
                    .children(triggers),
            )
            .children(content)
    }
}

fn render_trigger<T: SelectionId>(
    tabs_id: &ElementId,
    trigger: TabTrigger<T>,
    on_change: Option<OnChange<T>>,
    window: &mut Window,
    cx: &mut App,
) -> Stateful<Div> {
    let id = tabs_id.with_suffix(trigger.id.key());
    let colors = &cx.get_theme().variants.active(cx).colors;
    let (primary_text_color, secondary_text_color) = colors.text.all();
    let active_color = colors.background.secondary;
    let font_family = cx.get_theme().layout.text.default_font.family[0].clone();
    let text_size = ThemeTextSizeKind::Body.resolve(cx);
    let corner_radius = cx.get_theme().layout.corner_radii.sm;

    let interaction = Interaction::use_keyed(&id, window, cx);
    let is_hover = interaction.is_hover(cx);
    let is_active = trigger.active;

    let bg_color_transition = conditional_transition!(
        id.with_suffix("state:transition:bg_color"),
        window,
        cx,
        Duration::from_millis(250),
        {
            is_active => active_color,
            _ => active_color.alpha(0.)
        }
    );

    let text_color_transition = conditional_transition!(
        id.with_suffix("state:transition:text_color"),
        window,
        cx,
        Duration::from_millis(250),
        {
            is_active || is_hover => primary_text_color,
            _ => secondary_text_color
        }
    );
    let text_color = *text_color_transition.evaluate(window, cx);

    let element = div()
        .id(id.clone())
        .flex_1()
        .flex()
        .justify_center()
        .py(px(6.))
        .cursor(CursorStyle::PointingHand)
        .font_family(font_family)
        .text_size(text_size)
        .font_weight(gpui::FontWeight::MEDIUM)
        .text_color(text_color)
        .child(
            FocusRing::new(id.with_suffix("focus_ring"), interaction.focus_handle().clone())
                .rounded(corner_radius),
        )
        .child(
            squircle()
                .absolute_expand()
                .rounded(corner_radius)
                .with_transitions(bg_color_transition, |_cx, this, bg_color| this.bg(bg_color)),
        )
        .child(trigger.label);

    let tab = trigger.id;
    interaction.bind(element, window, false, move |_event, window, cx| {
        tracing::debug!(tab = tab.key(), "tab trigger activated");

        if let Some(on_change) = &on_change {
            (on_change)(&TabEvent::Activate(tab), window, cx);
        }
    })
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::theme::Theme;
    use gpui::{Modifiers, TestAppContext, point};
    use showcase_state::ExampleTab;

    struct TabsTestView {
        selection: TabSelection<ExampleTab>,
        rendered: Rc<RefCell<Vec<ExampleTab>>>,
    }

    impl gpui::Render for TabsTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            let rendered = self.rendered.clone();

            div().w(px(600.)).child(
                Tabs::new("tabs", self.selection)
                    .on_change(cx.listener(|this, event, _window, cx| {
                        this.selection = this.selection.apply(*event);
                        cx.notify();
                    }))
                    .content(move |tab, _window, _cx| {
                        rendered.borrow_mut().push(tab);
                        div().child(tab.label()).into_any_element()
                    }),
            )
        }
    }

    #[gpui::test]
    fn test_only_active_content_is_built(cx: &mut TestAppContext) {
        cx.update(|cx| cx.set_theme(Theme::DEFAULT));
        let rendered = Rc::new(RefCell::new(Vec::new()));
        let (view, cx) = cx.add_window_view({
            let rendered = rendered.clone();
            move |_window, _cx| TabsTestView {
                selection: TabSelection::default(),
                rendered,
            }
        });

        cx.run_until_parked();

        view.read_with(cx, |view, _cx| {
            assert_eq!(view.selection.active(), ExampleTab::Buttons);
        });
        assert!(!rendered.borrow().is_empty());
        assert!(rendered.borrow().iter().all(|tab| *tab == ExampleTab::Buttons));
    }

    #[gpui::test]
    fn test_clicking_trigger_activates_tab(cx: &mut TestAppContext) {
        cx.update(|cx| cx.set_theme(Theme::DEFAULT));
        let (view, cx) = cx.add_window_view(|_window, _cx| TabsTestView {
            selection: TabSelection::default(),
            rendered: Rc::default(),
        });

        // Three equal triggers across 600px; the last one starts past 400px.
        cx.simulate_click(point(px(500.), px(16.)), Modifiers::none());

        view.read_with(cx, |view, _cx| {
            assert_eq!(view.selection.active(), ExampleTab::Feedback);
        });
    }
}
