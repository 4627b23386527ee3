use gpui::{IntoElement, RenderOnce, Styled, div, px};

use crate::theme::ThemeExt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// One pixel divider line.
#[derive(IntoElement, Default)]
pub struct Separator {
    orientation: Orientation,
}

impl Separator {
    pub fn horizontal() -> Self {
        Self {
            orientation: Orientation::Horizontal,
        }
    }

    pub fn vertical() -> Self {
        Self {
            orientation: Orientation::Vertical,
        }
    }
}

impl RenderOnce for Separator {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let color = cx.get_theme().variants.active(cx).colors.background.quaternary;

        let line = div().flex_none().bg(color);
        match self.orientation {
            Orientation::Horizontal => line.w_full().h(px(1.)),
            Orientation::Vertical => line.h_full().w(px(1.)),
        }
    }
}
