#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::time::Duration;

use enum_assoc::Assoc;
use gpui::{
    App, ClickEvent, CursorStyle, ElementId, InteractiveElement, IntoElement, Length,
    ParentElement, RenderOnce, Rgba, SharedString, Styled, Window, div, prelude::FluentBuilder, px,
    relative,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::TransitionExt;

use crate::{
    components::Icon,
    conditional_transition,
    primitives::FocusRing,
    theme::{ThemeAccentKind, ThemeExt, ThemeLayoutPaddingKind, ThemeLayoutSizeKind},
    utils::{ElementIdExt, Interaction, PixelsExt, RgbaExt, SquircleExt, disabled_transition},
};

const HOVER_STRENGTH: f32 = 0.12;
const PRESS_STRENGTH: f32 = 0.22;

type OnClick = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled with the primary accent.
    #[default]
    Primary,
    Secondary,
    /// Filled with the destructive accent.
    Destructive,
    /// Transparent with a visible border.
    Outline,
    /// Transparent until hovered.
    Ghost,
    /// Accent colored text, underlined on hover.
    Link,
}

#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn height(&self) -> ThemeLayoutSizeKind)]
#[func(pub fn horizontal_padding(&self) -> ThemeLayoutPaddingKind)]
pub enum ButtonSize {
    #[assoc(height = ThemeLayoutSizeKind::Md)]
    #[assoc(horizontal_padding = ThemeLayoutPaddingKind::Lg)]
    Sm,
    #[default]
    #[assoc(height = ThemeLayoutSizeKind::Lg)]
    #[assoc(horizontal_padding = ThemeLayoutPaddingKind::Lg)]
    Md,
    #[assoc(height = ThemeLayoutSizeKind::Xl)]
    #[assoc(horizontal_padding = ThemeLayoutPaddingKind::Xl)]
    Lg,
}

/// Resolved colors for one variant against the active theme.
struct ButtonColors {
    bg: Rgba,
    bg_hover: Rgba,
    bg_press: Rgba,
    text: Rgba,
    /// Solid border; `None` draws the highlight gradient instead.
    border: Option<Rgba>,
    highlight_alpha: f32,
    ring: ThemeAccentKind,
    underline_on_hover: bool,
}

impl ButtonVariant {
    fn colors(&self, cx: &App) -> ButtonColors {
        let colors = &cx.get_theme().variants.active(cx).colors;
        let page = colors.background.primary;
        let text = colors.text.primary;

        let filled = |fill: Rgba, ring: ThemeAccentKind| ButtonColors {
            bg: fill,
            bg_hover: fill.mix(&page, HOVER_STRENGTH),
            bg_press: fill.mix(&page, PRESS_STRENGTH),
            text: colors.text.on_accent,
            border: None,
            highlight_alpha: 0.15,
            ring,
            underline_on_hover: false,
        };

        let hover_surface = colors.background.quaternary;

        match self {
            ButtonVariant::Primary => filled(colors.accent.primary, ThemeAccentKind::Primary),
            ButtonVariant::Destructive => {
                filled(colors.accent.destructive, ThemeAccentKind::Destructive)
            }
            ButtonVariant::Secondary => ButtonColors {
                bg: colors.background.tertiary,
                bg_hover: colors.background.tertiary.mix(&text, HOVER_STRENGTH / 2.),
                bg_press: colors.background.tertiary.mix(&text, PRESS_STRENGTH / 2.),
                text,
                border: None,
                highlight_alpha: 0.04,
                ring: ThemeAccentKind::Primary,
                underline_on_hover: false,
            },
            ButtonVariant::Outline => ButtonColors {
                bg: colors.background.secondary,
                bg_hover: colors.background.tertiary,
                bg_press: hover_surface,
                text,
                border: Some(colors.background.quaternary),
                highlight_alpha: 0.,
                ring: ThemeAccentKind::Primary,
                underline_on_hover: false,
            },
            ButtonVariant::Ghost => ButtonColors {
                bg: hover_surface.alpha(0.),
                bg_hover: hover_surface.alpha(0.6),
                bg_press: hover_surface,
                text,
                border: Some(hover_surface.alpha(0.)),
                highlight_alpha: 0.,
                ring: ThemeAccentKind::Primary,
                underline_on_hover: false,
            },
            ButtonVariant::Link => ButtonColors {
                bg: page.alpha(0.),
                bg_hover: page.alpha(0.),
                bg_press: page.alpha(0.),
                text: colors.accent.primary,
                border: Some(page.alpha(0.)),
                highlight_alpha: 0.,
                ring: ThemeAccentKind::Primary,
                underline_on_hover: true,
            },
        }
    }
}

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    text: SharedString,
    icon: Option<SharedString>,
    variant: ButtonVariant,
    size: ButtonSize,
    width: Length,
    flex_1: bool,
    disabled: bool,
    on_click: Option<OnClick>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            text: SharedString::from("Button"),
            icon: None,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            width: Length::Auto,
            flex_1: false,
            disabled: false,
            on_click: None,
        }
    }

    pub fn text(mut self, text: impl Into<SharedString>) -> Self {
        self.text = text.into();
        self
    }

    /// Leading icon, drawn in the text color.
    pub fn icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn w_full(mut self) -> Self {
        self.width = relative(1.).into();
        self
    }

    pub fn flex_1(mut self) -> Self {
        self.flex_1 = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = self.variant.colors(cx);

        let font_family = cx.get_theme().layout.text.default_font.family[0].clone();
        let line_height = cx.get_theme().layout.text.default_font.line_height;
        let text_size = cx.get_theme().layout.text.default_font.sizes.body;
        let font_weight = cx.get_theme().layout.text.default_font.weights.heading_sm;
        let corner_radius = self.size.height().corner_radii().resolve(cx);
        let icon_size = ThemeLayoutSizeKind::Sm.resolve(cx);
        let horizontal_padding = self.size.horizontal_padding().resolve(cx);
        let vertical_padding = self
            .size
            .height()
            .resolve(cx)
            .padding_needed_for_height(window, text_size, line_height);

        let interaction = Interaction::use_keyed(&self.id, window, cx);
        let is_hover = interaction.is_hover(cx);
        let is_click_down = interaction.is_click_down(cx);
        let is_focus = interaction.is_focus(window);
        let is_disabled = self.disabled;

        let disabled_transition = disabled_transition(self.id.clone(), window, cx, is_disabled);

        let bg_color_transition = conditional_transition!(
            self.id.with_suffix("state:transition:bg_color"),
            window,
            cx,
            Duration::from_millis(365),
            {
                is_click_down => colors.bg_press,
                is_hover || is_focus => colors.bg_hover,
                _ => colors.bg
            }
        );

        let text_color_transition = conditional_transition!(
            self.id.with_suffix("state:transition:text_color"),
            window,
            cx,
            Duration::from_millis(365),
            colors.text
        );
        let text_color = *text_color_transition.evaluate(window, cx);

        let border = colors.border;
        let highlight_alpha = colors.highlight_alpha;

        let element = div()
            .id(self.id.clone())
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .w(self.width)
            .when(self.flex_1, |this| this.flex_1())
            .flex_shrink_0()
            .px(horizontal_padding)
            .py(vertical_padding)
            .flex()
            .items_center()
            .justify_center()
            .with_transitions(disabled_transition, |_cx, this, opacity| {
                this.opacity(opacity)
            })
            .child(
                FocusRing::new(
                    self.id.with_suffix("focus_ring"),
                    interaction.focus_handle().clone(),
                )
                .accent(colors.ring)
                .rounded(corner_radius),
            )
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .border(px(1.))
                    .border_inside()
                    .with_transitions(bg_color_transition, move |_cx, this, bg_color| {
                        let this = this.bg(bg_color);
                        match border {
                            Some(border) => this.border_color(border),
                            None => this.border_highlight(highlight_alpha),
                        }
                    }),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(8.))
                    .font_family(font_family)
                    .text_size(text_size)
                    .line_height(line_height)
                    .font_weight(gpui::FontWeight(font_weight))
                    .text_color(text_color)
                    .when(colors.underline_on_hover && is_hover, |this| this.underline())
                    .when_some(self.icon, |this, icon| {
                        this.child(Icon::new(icon).size(icon_size).color(text_color))
                    })
                    .child(self.text),
            );

        let on_click = self.on_click;
        interaction.bind(element, window, is_disabled, move |event, window, cx| {
            if let Some(on_click) = &on_click {
                (on_click)(event, window, cx);
            }
        })
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    #[gpui::test]
    fn test_button_defaults(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let button = Button::new("test-button");
            assert_eq!(button.variant, ButtonVariant::Primary);
            assert_eq!(button.size, ButtonSize::Md);
            assert!(!button.disabled, "Button should start enabled");
            assert!(button.on_click.is_none());
        });
    }

    #[gpui::test]
    fn test_button_builder_chain(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let button = Button::new("test-button")
                .text("Delete")
                .variant(ButtonVariant::Destructive)
                .size(ButtonSize::Lg)
                .w_full()
                .disabled(true)
                .on_click(|_, _, _| {});

            assert_eq!(button.text, SharedString::from("Delete"));
            assert_eq!(button.variant, ButtonVariant::Destructive);
            assert_eq!(button.size, ButtonSize::Lg);
            assert!(matches!(button.width, Length::Definite(_)));
            assert!(button.disabled);
            assert!(button.on_click.is_some());
        });
    }

    #[gpui::test]
    fn test_sizes_grow(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            let sm = ButtonSize::Sm.height().resolve(cx);
            let md = ButtonSize::Md.height().resolve(cx);
            let lg = ButtonSize::Lg.height().resolve(cx);

            assert!(sm < md && md < lg);
        });
    }

    #[gpui::test]
    fn test_variant_colors(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let accent = cx.get_theme().variants.active(cx).colors.accent.clone();

            let primary = ButtonVariant::Primary.colors(cx);
            assert_eq!(primary.bg, accent.primary);
            assert_ne!(primary.bg_hover, primary.bg);

            let destructive = ButtonVariant::Destructive.colors(cx);
            assert_eq!(destructive.bg, accent.destructive);
            assert_eq!(destructive.ring, ThemeAccentKind::Destructive);

            let ghost = ButtonVariant::Ghost.colors(cx);
            assert_eq!(ghost.bg.a, 0.);
            assert!(ghost.bg_hover.a > 0.);

            let link = ButtonVariant::Link.colors(cx);
            assert_eq!(link.text, accent.primary);
            assert!(link.underline_on_hover);

            assert!(ButtonVariant::Outline.colors(cx).border.is_some());
        });
    }

    #[gpui::test]
    fn test_every_variant_renders(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| ButtonTestView))
                .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    struct ButtonTestView;

    impl gpui::Render for ButtonTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            let variants = [
                ButtonVariant::Primary,
                ButtonVariant::Secondary,
                ButtonVariant::Destructive,
                ButtonVariant::Outline,
                ButtonVariant::Ghost,
                ButtonVariant::Link,
            ];

            div()
                .flex()
                .children(variants.into_iter().enumerate().map(|(ix, variant)| {
                    Button::new(("variant", ix)).variant(variant).text("Button")
                }))
                .child(Button::new("small").size(ButtonSize::Sm))
                .child(Button::new("large").size(ButtonSize::Lg).disabled(true))
        }
    }
}
