use gpui::{
    App, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled, div,
    prelude::FluentBuilder, px,
};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    IconKind,
    components::Icon,
    primitives::min_w0_wrapper,
    theme::{ThemeExt, ThemeLayoutSizeKind, ThemeTextSizeKind},
    utils::RgbaExt,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertVariant {
    #[default]
    Default,
    Info,
    Destructive,
    Success,
}

impl AlertVariant {
    fn tint(&self, cx: &App) -> Rgba {
        let colors = &cx.get_theme().variants.active(cx).colors;

        match self {
            AlertVariant::Default => colors.text.primary,
            AlertVariant::Info => colors.accent.primary,
            AlertVariant::Destructive => colors.accent.destructive,
            AlertVariant::Success => colors.accent.constructive,
        }
    }

    pub fn default_icon(&self) -> IconKind {
        match self {
            AlertVariant::Default | AlertVariant::Info => IconKind::Info,
            AlertVariant::Destructive => IconKind::CircleAlert,
            AlertVariant::Success => IconKind::CircleCheck,
        }
    }
}

/// Callout with an icon, a title and a description.
#[derive(IntoElement)]
pub struct Alert {
    title: SharedString,
    description: Option<SharedString>,
    icon: Option<SharedString>,
    variant: AlertVariant,
}

impl Alert {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            description: None,
            icon: None,
            variant: AlertVariant::default(),
        }
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the variant's icon.
    pub fn icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }
}

impl RenderOnce for Alert {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let tint = self.variant.tint(cx);
        let (primary_text_color, secondary_text_color) =
            cx.get_theme().variants.active(cx).colors.text.all();
        let surface = cx.get_theme().variants.active(cx).colors.background.secondary;
        let corner_radius = cx.get_theme().layout.corner_radii.md;
        let padding = cx.get_theme().layout.padding.lg;
        let icon_size = ThemeLayoutSizeKind::Sm.resolve(cx);
        let font_family = cx.get_theme().layout.text.default_font.family[0].clone();
        let title_size = ThemeTextSizeKind::Sm.resolve(cx);
        let title_weight = ThemeTextSizeKind::Sm.weight(cx);

        let is_default = self.variant == AlertVariant::Default;
        let icon = self
            .icon
            .unwrap_or_else(|| self.variant.default_icon().into());

        div()
            .w_full()
            .flex()
            .items_start()
            .gap(px(12.))
            .p(padding)
            .font_family(font_family)
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .bg(if is_default { surface } else { surface.mix(&tint, 0.08) })
                    .border(px(1.))
                    .border_inside()
                    .border_color(tint.alpha(if is_default { 0.15 } else { 0.35 })),
            )
            .child(Icon::new(icon).size(icon_size).color(tint))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(4.))
                    .min_w_0()
                    .child(
                        div()
                            .text_size(title_size)
                            .font_weight(gpui::FontWeight(title_weight))
                            .text_color(if is_default { primary_text_color } else { tint })
                            .child(self.title),
                    )
                    .when_some(self.description, |this, description| {
                        this.child(
                            min_w0_wrapper()
                                .text_size(ThemeTextSizeKind::Body)
                                .text_color(secondary_text_color)
                                .child(description),
                        )
                    }),
            )
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    #[gpui::test]
    fn test_alert_builder(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let alert = Alert::new("Welcome")
                .description("Explore the components.")
                .variant(AlertVariant::Info);

            assert_eq!(alert.title, SharedString::from("Welcome"));
            assert!(alert.description.is_some());
            assert!(alert.icon.is_none());
            assert_eq!(alert.variant, AlertVariant::Info);
        });
    }

    #[gpui::test]
    fn test_alert_tints_follow_accents(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let accent = cx.get_theme().variants.active(cx).colors.accent.clone();

            assert_eq!(AlertVariant::Success.tint(cx), accent.constructive);
            assert_eq!(AlertVariant::Destructive.tint(cx), accent.destructive);
            assert_eq!(AlertVariant::Info.tint(cx), accent.primary);
        });
    }

    #[test]
    fn default_icons_match_variants() {
        assert_eq!(AlertVariant::Success.default_icon(), IconKind::CircleCheck);
        assert_eq!(AlertVariant::Destructive.default_icon(), IconKind::CircleAlert);
        assert_eq!(AlertVariant::Info.default_icon(), IconKind::Info);
    }

    #[gpui::test]
    fn test_alerts_render_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| AlertTestView))
                .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    struct AlertTestView;

    impl gpui::Render for AlertTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div()
                .flex()
                .flex_col()
                .child(Alert::new("Default"))
                .child(Alert::new("Success").variant(AlertVariant::Success))
                .child(
                    Alert::new("Error")
                        .description("Something went wrong.")
                        .variant(AlertVariant::Destructive),
                )
        }
    }
}
