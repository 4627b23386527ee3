use gpui::{
    Hsla, IntoElement, Length, Radians, RenderOnce, SharedString, Styled, Transformation,
    prelude::FluentBuilder, px, svg,
};

use crate::theme::ThemeExt;

/// An SVG icon tinted with a single color.
#[derive(IntoElement)]
pub struct Icon {
    path: SharedString,
    size: Option<Length>,
    rotate: Radians,
    color: Option<Hsla>,
}

impl Icon {
    /// Creates an icon from an SVG asset path or an [`IconKind`](crate::IconKind).
    pub fn new(path: impl Into<SharedString>) -> Self {
        Self {
            path: path.into(),
            size: None,
            rotate: Radians(0.),
            color: None,
        }
    }

    /// Sets width and height. Defaults to 14px.
    pub fn size(mut self, size: impl Into<Length>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Overrides the theme's primary text color.
    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn rotate(mut self, rotate: impl Into<Radians>) -> Self {
        self.rotate = rotate.into();
        self
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let primary_text_color = cx.get_theme().variants.active(cx).colors.text.primary;
        let size = self.size.unwrap_or(px(14.).into());

        svg()
            .path(self.path)
            .text_color(primary_text_color)
            .flex_none()
            .w(size)
            .min_w(size)
            .h(size)
            .min_h(size)
            .with_transformation(Transformation::rotate(self.rotate))
            .when_some(self.color, |this, color| this.text_color(color))
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::{IconKind, theme::Theme};
    use gpui::{AppContext, ParentElement, TestAppContext, VisualTestContext, div, hsla};

    #[gpui::test]
    fn test_icon_creation(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let icon = Icon::new(IconKind::Package);
            assert_eq!(icon.path, SharedString::from("icons/package.svg"));
            assert!(icon.color.is_none(), "Icon should start with no color");
            assert!(icon.size.is_none(), "Icon should start with the default size");
            assert_eq!(icon.rotate.0, 0.0, "Icon should start with no rotation");
        });
    }

    #[gpui::test]
    fn test_icon_builder_chain(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let icon = Icon::new("icons/test.svg")
                .size(px(24.))
                .color(hsla(0.5, 0.5, 0.5, 1.0))
                .rotate(Radians(std::f32::consts::PI));

            assert!(icon.size.is_some());
            assert!(icon.color.is_some());
            assert_eq!(icon.rotate.0, std::f32::consts::PI);
        });
    }

    #[gpui::test]
    fn test_icon_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| IconTestView))
                .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    struct IconTestView;

    impl gpui::Render for IconTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div()
                .child(Icon::new(IconKind::ChevronDown).rotate(Radians(std::f32::consts::PI)))
                .child(Icon::new(IconKind::Palette).size(px(20.)))
        }
    }
}
