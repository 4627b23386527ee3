use gpui::{
    AnyElement, IntoElement, ParentElement, RenderOnce, SharedString, StyleRefinement, Styled,
    div, prelude::FluentBuilder, px,
};
use gpui_squircle::{SquircleStyled, squircle};
use smallvec::SmallVec;

use crate::{
    primitives::min_w0_wrapper,
    theme::{ThemeExt, ThemeLayerKind, ThemeTextSizeKind},
};

/// Bordered surface with optional header, body and footer sections.
///
/// Children added with [`ParentElement`] form the body.
#[derive(IntoElement)]
pub struct Card {
    title: Option<SharedString>,
    description: Option<SharedString>,
    title_size: ThemeTextSizeKind,
    leading: Option<AnyElement>,
    children: SmallVec<[AnyElement; 2]>,
    footer: SmallVec<[AnyElement; 2]>,
    layer: ThemeLayerKind,
    style: StyleRefinement,
}

impl Card {
    pub fn new() -> Self {
        Self {
            title: None,
            description: None,
            title_size: ThemeTextSizeKind::Md,
            leading: None,
            children: SmallVec::new(),
            footer: SmallVec::new(),
            layer: ThemeLayerKind::Secondary,
            style: StyleRefinement::default(),
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn title_size(mut self, title_size: ThemeTextSizeKind) -> Self {
        self.title_size = title_size;
        self
    }

    /// Element shown above the title, such as an icon tile.
    pub fn leading(mut self, leading: impl IntoElement) -> Self {
        self.leading = Some(leading.into_any_element());
        self
    }

    pub fn footer(mut self, footer: impl IntoElement) -> Self {
        self.footer.push(footer.into_any_element());
        self
    }

    pub fn layer(mut self, layer: ThemeLayerKind) -> Self {
        self.layer = layer;
        self
    }

    fn has_header(&self) -> bool {
        self.title.is_some() || self.description.is_some() || self.leading.is_some()
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let (primary_text_color, secondary_text_color) =
            cx.get_theme().variants.active(cx).colors.text.all();
        let background_color = self.layer.resolve(cx);
        let border_color = self.layer.next().resolve(cx);
        let corner_radius = cx.get_theme().layout.corner_radii.lg;
        let padding = cx.get_theme().layout.padding.xl;
        let font_family = cx.get_theme().layout.text.default_font.family[0].clone();
        let title_size = self.title_size.resolve(cx);
        let title_weight = self.title_size.weight(cx);
        let body_size = ThemeTextSizeKind::Body.resolve(cx);
        let has_header = self.has_header();

        div()
            .flex()
            .flex_col()
            .gap(padding)
            .p(padding)
            .font_family(font_family)
            .text_size(body_size)
            .text_color(secondary_text_color)
            .map(|mut this| {
                this.style().refine(&self.style);
                this
            })
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .bg(background_color)
                    .border(px(1.))
                    .border_inside()
                    .border_color(border_color),
            )
            .when(has_header, |this| {
                this.child(
                    div()
                        .flex()
                        .flex_col()
                        .gap(px(6.))
                        .children(self.leading)
                        .when_some(self.title, |this, title| {
                            this.child(
                                div()
                                    .text_size(title_size)
                                    .font_weight(gpui::FontWeight(title_weight))
                                    .text_color(primary_text_color)
                                    .child(title),
                            )
                        })
                        .when_some(self.description, |this, description| {
                            this.child(min_w0_wrapper().child(description))
                        }),
                )
            })
            .children(self.children)
            .when(!self.footer.is_empty(), |this| {
                this.child(div().flex().flex_wrap().gap(px(12.)).children(self.footer))
            })
    }
}

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl Styled for Card {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

pub fn card() -> Card {
    Card::new()
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    #[gpui::test]
    fn test_card_header_detection(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            assert!(!card().has_header());
            assert!(card().title("Components").has_header());
            assert!(card().description("Only a description").has_header());
            assert!(card().leading(div()).has_header());
        });
    }

    #[gpui::test]
    fn test_card_collects_body_and_footer(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let card = card()
                .child(div())
                .child(div())
                .footer(div())
                .layer(ThemeLayerKind::Tertiary);

            assert_eq!(card.children.len(), 2);
            assert_eq!(card.footer.len(), 1);
            assert_eq!(card.layer, ThemeLayerKind::Tertiary);
        });
    }

    #[gpui::test]
    fn test_card_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| CardTestView))
                .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    struct CardTestView;

    impl gpui::Render for CardTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            card()
                .title("Ready to Build?")
                .description("Start building your next project.")
                .child("Body")
                .footer(div().child("Footer"))
        }
    }
}
