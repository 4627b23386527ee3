use gpui::{IntoElement, ParentElement, RenderOnce, Styled, div, px, relative};

use crate::theme::{ThemeAccentKind, ThemeExt};

/// Horizontal bar filled to a percentage.
#[derive(IntoElement)]
pub struct Progress {
    value: f32,
    accent: ThemeAccentKind,
}

impl Progress {
    /// `value` is a percentage, clamped to `0..=100`.
    pub fn new(value: f32) -> Self {
        Self {
            value: clamp_percent(value),
            accent: ThemeAccentKind::Primary,
        }
    }

    pub fn accent(mut self, accent: ThemeAccentKind) -> Self {
        self.accent = accent;
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}

fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.
    } else {
        value.clamp(0., 100.)
    }
}

impl RenderOnce for Progress {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let track_color = cx.get_theme().variants.active(cx).colors.background.quaternary;
        let fill_color = self.accent.resolve(cx);

        div()
            .w_full()
            .h(px(8.))
            .rounded(px(100.))
            .overflow_hidden()
            .bg(track_color)
            .child(
                div()
                    .h_full()
                    .w(relative(self.value / 100.))
                    .rounded(px(100.))
                    .bg(fill_color),
            )
    }
}
