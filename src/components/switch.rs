use std::time::Duration;

use gpui::{
    App, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    Styled, Window, div, px,
};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    conditional_transition,
    primitives::FocusRing,
    theme::{ThemeExt, ThemeLayerKind},
    utils::{
        ElementIdExt, Interaction, RgbaExt, SquircleExt, checked_transition, disabled_transition,
    },
};

type OnToggle = Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>;

/// Knob growth while focused or pressed.
const KNOB_PRESS_MULT: f32 = 1.25;

#[derive(IntoElement)]
pub struct Switch {
    id: ElementId,
    layer: ThemeLayerKind,
    checked: bool,
    disabled: bool,
    on_click: Option<OnToggle>,
}

impl Switch {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            layer: ThemeLayerKind::Tertiary,
            checked: false,
            disabled: false,
            on_click: None,
        }
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

    /// Called with the value the switch should take next.
    pub fn on_click(mut self, on_click: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }
}

impl RenderOnce for Switch {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let knob_size = cx.get_theme().layout.size.sm;
        let padding = cx.get_theme().layout.padding.md;
        let width = (knob_size * 2.) + (padding * 2.);
        let height = knob_size + (padding * 2.);
        let (start_offset, end_offset) = (
            padding.to_f64() as f32,
            (width - knob_size - padding).to_f64() as f32,
        );
        let primary_accent_color = cx.get_theme().variants.active(cx).colors.accent.primary;
        let primary_text_color = cx.get_theme().variants.active(cx).colors.text.primary;
        let knob_color = cx.get_theme().variants.active(cx).colors.background.secondary;
        let background_color = self.layer.next().resolve(cx);
        let border_color = self.layer.next().resolve(cx);
        let border_hover_color = border_color.mix(&primary_text_color, 0.12);
        let border_click_down_color = border_color.mix(&primary_text_color, 0.24);

        let checked_transition = checked_transition(
            self.id.clone(),
            window,
            cx,
            Duration::from_millis(200),
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

        let knob_width_transition = conditional_transition!(
            self.id.with_suffix("state:transition:knob_width"),
            window,
            cx,
            Duration::from_millis(185),
            {
                is_focus || is_click_down => px((knob_size.to_f64() as f32 * KNOB_PRESS_MULT).floor()),
                _ => knob_size
            }
        );

        let checked_delta = *checked_transition.evaluate(window, cx);
        let knob_width = *knob_width_transition.evaluate(window, cx);
        let offset = remap(checked_delta, 0., 1., start_offset, end_offset);
        // Wider knob grows towards the track's center.
        let width_diff = (knob_width - knob_size) * checked_delta;

        let element = div()
            .id(self.id.clone())
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .flex_none()
            .w(width)
            .min_w(width)
            .h(height)
            .min_h(height)
            .opacity(*disabled_transition.evaluate(window, cx))
            .child(
                FocusRing::new(
                    self.id.with_suffix("focus_ring"),
                    interaction.focus_handle().clone(),
                )
                .rounded(px(100.)),
            )
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(px(100.))
                    .bg(background_color)
                    .border(px(1.))
                    .border_inside()
                    .border_color(*border_color_transition.evaluate(window, cx)),
            )
            .child(
                squircle()
                    .absolute_expand()
                    .bg(primary_accent_color.alpha(checked_delta))
                    .rounded(px(100.))
                    .border_inside()
                    .border(px(1.))
                    .border_highlight(0.15 * checked_delta),
            )
            .child(
                div()
                    .absolute()
                    .w(knob_width)
                    .h(knob_size)
                    .top(padding)
                    .left(px(offset) - width_diff)
                    .bg(knob_color)
                    .rounded(px(100.)),
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

/// Maps `value` from one range onto another.
pub fn remap(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    (value - from_min) / (from_max - from_min) * (to_max - to_min) + to_min
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use gpui::{AppContext, Modifiers, TestAppContext, VisualTestContext, point};

    #[test]
    fn remap_maps_endpoints() {
        assert_eq!(remap(0., 0., 1., 3., 19.), 3.);
        assert_eq!(remap(1., 0., 1., 3., 19.), 19.);
        assert_eq!(remap(0.5, 0., 1., 3., 19.), 11.);
    }

    #[gpui::test]
    fn test_switch_creation(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let switch = Switch::new("test-switch");
            assert!(!switch.checked, "Switch should start unchecked");
            assert!(!switch.disabled, "Switch should start enabled");
            assert!(switch.on_click.is_none());
        });
    }

    #[gpui::test]
    fn test_switch_builder_chain(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let switch = Switch::new("test-switch")
                .checked(true)
                .disabled(true)
                .layer(ThemeLayerKind::Primary)
                .on_click(|_, _, _| {});

            assert!(switch.checked);
            assert!(switch.disabled);
            assert_eq!(switch.layer, ThemeLayerKind::Primary);
            assert!(switch.on_click.is_some());
        });
    }

    #[gpui::test]
    fn test_switch_click_toggles(cx: &mut TestAppContext) {
        cx.update(|cx| cx.set_theme(Theme::DEFAULT));
        let (view, cx) = cx.add_window_view(|_window, _cx| SwitchTestView {
            checked: false,
            disabled: false,
        });

        cx.simulate_click(point(px(10.), px(10.)), Modifiers::none());
        assert!(view.read_with(cx, |view, _cx| view.checked));
    }

    #[gpui::test]
    fn test_disabled_switch_ignores_clicks(cx: &mut TestAppContext) {
        cx.update(|cx| cx.set_theme(Theme::DEFAULT));
        let (view, cx) = cx.add_window_view(|_window, _cx| SwitchTestView {
            checked: false,
            disabled: true,
        });

        cx.simulate_click(point(px(10.), px(10.)), Modifiers::none());
        assert!(!view.read_with(cx, |view, _cx| view.checked));
    }

    #[gpui::test]
    fn test_switch_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| SwitchTestView {
                    checked: true,
                    disabled: false,
                })
            })
            .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    struct SwitchTestView {
        checked: bool,
        disabled: bool,
    }

    impl gpui::Render for SwitchTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div().size_full().child(
                Switch::new("test-switch")
                    .checked(self.checked)
                    .disabled(self.disabled)
                    .on_click(cx.listener(|view, checked, _window, cx| {
                        view.checked = *checked;
                        cx.notify();
                    })),
            )
        }
    }
}
