use std::time::Duration;

use gpui::{
    App, ElementId, Entity, FocusHandle, Focusable, InteractiveElement, IntoElement, Length,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder, px, relative,
};
use gpui_primitives::input::{Input as PrimitiveInput, InputState};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    conditional_transition,
    primitives::FocusRing,
    theme::{ThemeExt, ThemeLayerKind},
    utils::{ElementIdExt, PixelsExt, RgbaExt, disabled_transition},
};

/// Character drawn in place of each character of a masked value.
pub const MASK_CHAR: char = '•';

/// Single-line text field over the primitive text input.
///
/// The value lives in the [`InputState`] entity; observe it to react to edits.
#[derive(IntoElement)]
pub struct TextField {
    id: ElementId,
    state: Entity<InputState>,
    placeholder: SharedString,
    masked: bool,
    disabled: bool,
    layer: ThemeLayerKind,
    width: Length,
}

impl TextField {
    pub fn new(id: impl Into<ElementId>, state: Entity<InputState>) -> Self {
        Self {
            id: id.into(),
            state,
            placeholder: SharedString::default(),
            masked: false,
            disabled: false,
            layer: ThemeLayerKind::Secondary,
            width: relative(1.).into(),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Draws every character as [`MASK_CHAR`]; the stored value is unchanged.
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn layer(mut self, layer: ThemeLayerKind) -> Self {
        self.layer = layer;
        self
    }

    pub fn w(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn read_text(&self, cx: &App) -> SharedString {
        self.state.read(cx).value()
    }
}

impl Focusable for TextField {
    fn focus_handle(&self, cx: &App) -> FocusHandle {
        self.state.read(cx).focus_handle.clone()
    }
}

impl RenderOnce for TextField {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let (primary_text_color, secondary_text_color) =
            cx.get_theme().variants.active(cx).colors.text.all();
        let primary_accent_color = cx.get_theme().variants.active(cx).colors.accent.primary;
        let background_color = self.layer.resolve(cx);
        let border_color = self.layer.next().resolve(cx);
        let border_hover_color = border_color.mix(&primary_text_color, 0.12);
        let font_family = cx.get_theme().layout.text.default_font.family[0].clone();
        let line_height = cx.get_theme().layout.text.default_font.line_height;
        let text_size = cx.get_theme().layout.text.default_font.sizes.body;
        let corner_radius = cx.get_theme().layout.corner_radii.md;
        let horizontal_padding = cx.get_theme().layout.padding.lg;
        let vertical_padding = cx
            .get_theme()
            .layout
            .size
            .lg
            .padding_needed_for_height(window, text_size, line_height);

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx);

        let focus_handle = self.focus_handle(cx);
        let is_focus = focus_handle.is_focused(window);

        let is_disabled = self.disabled;
        let disabled_transition = disabled_transition(self.id.clone(), window, cx, is_disabled);

        if is_focus && is_disabled {
            window.blur();
        }

        let border_color_transition = conditional_transition!(
            self.id.with_suffix("state:transition:border_color"),
            window,
            cx,
            Duration::from_millis(400),
            {
                is_focus => primary_accent_color,
                is_hover => border_hover_color,
                _ => border_color
            }
        );

        let input = PrimitiveInput::new(self.id.with_suffix("input"), self.state.clone())
            .placeholder(self.placeholder)
            .w_full()
            .text_size(text_size)
            .font_family(font_family)
            .text_color(primary_text_color)
            .placeholder_text_color(secondary_text_color)
            .selection_color(primary_accent_color.alpha(0.3))
            .line_height(line_height)
            .disabled(is_disabled)
            .when(self.masked, |this| this.transform_text(|_| MASK_CHAR));

        div()
            .id(self.id.clone())
            .w(self.width)
            .px(horizontal_padding)
            .py(vertical_padding)
            .flex()
            .items_center()
            .opacity(*disabled_transition.evaluate(window, cx))
            .child(
                FocusRing::new(self.id.with_suffix("focus_ring"), focus_handle)
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
            .child(input)
            .when(!is_disabled, |this| {
                this.on_hover(move |hover, _window, cx| {
                    is_hover_state.update(cx, |this, cx| {
                        *this = *hover;
                        cx.notify();
                    });
                })
            })
    }
}
