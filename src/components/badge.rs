use gpui::{App, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled, div, px};

use crate::{
    theme::{ThemeExt, ThemeTextSizeKind},
    utils::RgbaExt,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Destructive,
}

impl BadgeVariant {
    /// Background, border and text colors.
    fn colors(&self, cx: &App) -> (Rgba, Rgba, Rgba) {
        let colors = &cx.get_theme().variants.active(cx).colors;

        match self {
            BadgeVariant::Default => (
                colors.accent.primary,
                colors.accent.primary,
                colors.text.on_accent,
            ),
            BadgeVariant::Secondary => (
                colors.background.quaternary,
                colors.background.quaternary,
                colors.text.primary,
            ),
            BadgeVariant::Outline => (
                colors.background.quaternary.alpha(0.),
                colors.background.quinary,
                colors.text.primary,
            ),
            BadgeVariant::Destructive => (
                colors.accent.destructive,
                colors.accent.destructive,
                colors.text.on_accent,
            ),
        }
    }
}

/// Small pill of caption text.
#[derive(IntoElement)]
pub struct Badge {
    text: SharedString,
    variant: BadgeVariant,
}

impl Badge {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            variant: BadgeVariant::default(),
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let (bg, border, text) = self.variant.colors(cx);
        let text_size = ThemeTextSizeKind::Caption.resolve(cx);
        let font_family = cx.get_theme().layout.text.default_font.family[0].clone();

        div()
            .flex_none()
            .px(px(10.))
            .py(px(2.))
            .rounded(px(100.))
            .bg(bg)
            .border_1()
            .border_color(border)
            .font_family(font_family)
            .text_size(text_size)
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .text_color(text)
            .child(self.text)
    }
}
