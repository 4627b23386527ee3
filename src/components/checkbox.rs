use std::time::Duration;

use gpui::{
    App, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window, div, prelude::FluentBuilder, px, relative, svg,
};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    IconKind, conditional_transition,
    primitives::FocusRing,
    theme::{ThemeExt, ThemeLayerKind},
    utils::{
        ElementIdExt, Interaction, RgbaExt, SquircleExt, checked_transition, disabled_transition,
    },
};

type OnToggle = Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    icon: SharedString,
    layer: ThemeLayerKind,
    checked: bool,
    disabled: bool,
    on_click: Option<OnToggle>,
}

impl Checkbox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            icon: IconKind::Checkmark.into(),
            layer: ThemeLayerKind::Tertiary,
            checked: false,
            disabled: false,
            on_click: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn layer(mut self, layer: ThemeLayerKind) -> Self {
        self.layer = layer;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called with the value the checkbox should take next.
    pub fn on_click(mut self, on_click: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let size = cx.get_theme().layout.size.sm;
        let corner_radius = cx.get_theme().layout.corner_radii.sm;
        let primary_accent_color = cx.get_theme().variants.active(cx).colors.accent.primary;
        let primary_text_color = cx.get_theme().variants.active(cx).colors.text.primary;
        let check_color = cx.get_theme().variants.active(cx).colors.text.on_accent;
        let background_color = self.layer.resolve(cx);
        let border_color = self.layer.next().resolve(cx);
        let border_hover_color = border_color.mix(&primary_text_color, 0.12);
        let border_click_down_color = border_color.mix(&primary_text_color, 0.24);

        let checked_transition = checked_transition(
            self.id.clone(),
            window,
            cx,
            Duration::from_millis(285),
            self.checked,
        );

        let interaction = Interaction::use_keyed(&self.id, window, cx);
        let is_hover = interaction.is_hover(cx);
        let is_click_down = interaction.is_click_down(cx);
        let is_focus = interaction.is_focus(window);
        let is_disabled = self.disabled;

        let disabled_transition = disabled_transition(self.id.clone(), window, cx, is_disabled);

        let border_color_transition = conditional_transition!(
            self.id.with_suffix("state:transition:border_color"),
            window,
            cx,
            Duration::from_millis(365),
            {
                is_focus => primary_accent_color,
                is_click_down => border_click_down_color,
                is_hover => border_hover_color,
                _ => border_color
            }
        );

        let checked_delta = *checked_transition.evaluate(window, cx);

        let element = div()
            .id(self.id.clone())
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .size(size)
            .min_w(size)
            .min_h(size)
            .flex()
            .flex_none()
            .items_center()
            .justify_center()
            .opacity(*disabled_transition.evaluate(window, cx))
            .child(
                FocusRing::new(
                    self.id.with_suffix("focus_ring"),
                    interaction.focus_handle().clone(),
                )
                .rounded(corner_radius),
            )
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .bg(background_color)
                    .border(px(1.))
                    .border_inside()
                    .border_color(*border_color_transition.evaluate(window, cx)),
            )
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .border(px(1.))
                    .border_inside()
                    .bg(primary_accent_color.alpha(checked_delta))
                    .border_highlight(checked_delta * 0.15),
            )
            .child(
                svg()
                    .map(|mut this| {
                        this.style().aspect_ratio = Some(1.);
                        this
                    })
                    .size(relative(0.7))
                    .text_color(check_color.alpha(checked_delta))
                    .path(self.icon.clone()),
            );

        let next = !self.checked;
        let on_click = self.on_click;
        interaction.bind(element, window, is_disabled, move |_event, window, cx| {
            if let Some(on_click) = &on_click {
                (on_click)(&next, window, cx);
            }
        })
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use gpui::{AppContext, Modifiers, TestAppContext, VisualTestContext, point};

    #[gpui::test]
    fn test_checkbox_creation(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let checkbox = Checkbox::new("test-checkbox");
            assert!(!checkbox.checked, "Checkbox should start unchecked");
            assert!(!checkbox.disabled, "Checkbox should start enabled");
            assert_eq!(checkbox.icon, IconKind::Checkmark.path());
        });
    }

    #[gpui::test]
    fn test_checkbox_builder_chain(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let checkbox = Checkbox::new("test-checkbox")
                .checked(true)
                .disabled(true)
                .layer(ThemeLayerKind::Secondary);

            assert!(checkbox.checked, "Checkbox should be checked");
            assert!(checkbox.disabled, "Checkbox should be disabled");
            assert_eq!(checkbox.layer, ThemeLayerKind::Secondary);
        });
    }

    #[gpui::test]
    fn test_checkbox_click_reports_next_value(cx: &mut TestAppContext) {
        cx.update(|cx| cx.set_theme(Theme::DEFAULT));
        let (view, cx) =
            cx.add_window_view(|_window, _cx| CheckboxTestView { checked: false });

        cx.simulate_click(point(px(8.), px(8.)), Modifiers::none());
        assert!(view.read_with(cx, |view, _cx| view.checked));

        cx.simulate_click(point(px(8.), px(8.)), Modifiers::none());
        assert!(!view.read_with(cx, |view, _cx| view.checked));
    }

    #[gpui::test]
    fn test_checkbox_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| CheckboxTestView { checked: false })
            })
            .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    struct CheckboxTestView {
        checked: bool,
    }

    impl gpui::Render for CheckboxTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div().size_full().child(
                Checkbox::new("test-checkbox")
                    .checked(self.checked)
                    .on_click(cx.listener(|view, checked, _window, cx| {
                        view.checked = *checked;
                        cx.notify();
                    })),
            )
        }
    }
}
