use gpui::{
    App, AppContext, Context, Div, Entity, FocusHandle, InteractiveElement, IntoElement,
    ParentElement, Render, StatefulInteractiveElement, Styled, Subscription, Window, div, px,
};

use crate::{
    IconKind,
    components::{
        Alert, AlertVariant, Badge, BadgeVariant, Button, ButtonVariant, Card, Icon, Progress,
        Separator, card,
    },
    theme::{Appearance, ThemeExt, ThemeTextSizeKind},
    utils::RgbaExt,
    views::{DocsPanel, ExamplesPanel, content},
};

/// The whole showcase page.
///
/// Static sections are rebuilt on every render; the examples and docs
/// panels are child entities that own their selection state.
pub struct ShowcaseView {
    focus_handle: FocusHandle,
    examples: Entity<ExamplesPanel>,
    docs: Entity<DocsPanel>,
    _appearance_subscription: Subscription,
}

impl ShowcaseView {
    pub fn new(appearance: Appearance, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let variant = cx.apply_appearance(appearance, window.appearance());
        tracing::debug!(?variant, "theme variant applied");

        let _appearance_subscription =
            cx.observe_window_appearance(window, move |_this, window, cx| {
                let variant = cx.apply_appearance(appearance, window.appearance());
                tracing::debug!(?variant, "window appearance changed");
                cx.notify();
            });

        Self {
            focus_handle: cx.focus_handle(),
            examples: cx.new(ExamplesPanel::new),
            docs: cx.new(|_cx| DocsPanel::new()),
            _appearance_subscription,
        }
    }

    pub fn examples(&self) -> &Entity<ExamplesPanel> {
        &self.examples
    }

    pub fn docs(&self) -> &Entity<DocsPanel> {
        &self.docs
    }
}

impl Render for ShowcaseView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        crate::init_for_window(window, cx);

        let theme = cx.get_theme();
        let background_color = theme.variants.active(cx).colors.background.primary;
        let font_family = theme.layout.text.default_font.family[0].clone();
        let text_size = theme.layout.text.default_font.sizes.body;
        let gap = theme.layout.padding.xl;

        div()
            .id("showcase")
            .tab_group()
            .track_focus(&self.focus_handle)
            .size_full()
            .overflow_y_scroll()
            .bg(background_color)
            .font_family(font_family)
            .text_size(text_size)
            .flex()
            .flex_col()
            .items_center()
            .child(header(cx))
            .child(
                div()
                    .w_full()
                    .max_w(px(1024.))
                    .px(px(16.))
                    .py(px(32.))
                    .flex()
                    .flex_col()
                    .gap(gap)
                    .child(
                        Alert::new(content::HERO_TITLE)
                            .description(content::HERO_DESCRIPTION)
                            .variant(AlertVariant::Info),
                    )
                    .child(feature_cards(cx))
                    .child(self.examples.clone())
                    .child(self.docs.clone())
                    .child(call_to_action()),
            )
            .child(footer(cx))
    }
}

fn header(cx: &App) -> Div {
    let colors = &cx.get_theme().variants.active(cx).colors;
    let (primary_text_color, secondary_text_color) = colors.text.all();
    let brand_color = colors.accent.primary;
    let on_accent_color = colors.text.on_accent;
    let surface_color = colors.background.secondary;
    let title_size = ThemeTextSizeKind::Xl.resolve(cx);
    let title_weight = ThemeTextSizeKind::Xl.weight(cx);
    let subtitle_size = ThemeTextSizeKind::Body.resolve(cx);
    let corner_radius = cx.get_theme().layout.corner_radii.lg;

    div()
        .w_full()
        .flex()
        .flex_col()
        .items_center()
        .bg(surface_color.alpha(0.8))
        .child(
            div()
                .w_full()
                .max_w(px(1024.))
                .px(px(16.))
                .py(px(24.))
                .flex()
                .items_center()
                .justify_between()
                .child(
                    div()
                        .flex()
                        .items_center()
                        .gap(px(12.))
                        .child(
                            div()
                                .size(px(40.))
                                .flex()
                                .items_center()
                                .justify_center()
                                .rounded(corner_radius)
                                .bg(brand_color)
                                .child(
                                    Icon::new(IconKind::Sparkle)
                                        .size(px(24.))
                                        .color(on_accent_color),
                                ),
                        )
                        .child(
                            div()
                                .flex()
                                .flex_col()
                                .child(
                                    div()
                                        .text_size(title_size)
                                        .font_weight(gpui::FontWeight(title_weight))
                                        .text_color(primary_text_color)
                                        .child(content::TITLE),
                                )
                                .child(
                                    div()
                                        .text_size(subtitle_size)
                                        .text_color(secondary_text_color)
                                        .child(content::SUBTITLE),
                                ),
                        ),
                )
                .child(
                    div()
                        .flex()
                        .items_center()
                        .gap(px(8.))
                        .child(Badge::new(content::VERSION_BADGE))
                        .child(
                            Badge::new(content::FRAMEWORK_BADGE).variant(BadgeVariant::Secondary),
                        ),
                ),
        )
        .child(Separator::horizontal())
}

fn feature_cards(cx: &App) -> Div {
    let corner_radius = cx.get_theme().layout.corner_radii.lg;

    div()
        .w_full()
        .flex()
        .gap(px(24.))
        .children(content::FEATURES.iter().map(|feature| {
            let tint = feature.tint.resolve(cx);

            card()
                .flex_1()
                .min_w_0()
                .title(feature.title)
                .description(feature.description)
                .leading(
                    div()
                        .size(px(48.))
                        .flex()
                        .items_center()
                        .justify_center()
                        .rounded(corner_radius)
                        .bg(tint.alpha(0.12))
                        .child(Icon::new(feature.icon).size(px(24.)).color(tint)),
                )
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .gap(px(8.))
                        .child(Progress::new(100.).accent(feature.tint))
                        .child(feature.caption),
                )
        }))
}

fn call_to_action() -> Card {
    card()
        .w_full()
        .title(content::CTA_TITLE)
        .description(content::CTA_DESCRIPTION)
        .child(content::CTA_BODY)
        .footer(
            Button::new("cta-docs")
                .text("View Docs")
                .icon(IconKind::Code)
                .flex_1()
                .on_click(|_event, _window, _cx| tracing::debug!("view docs pressed")),
        )
        .footer(
            Button::new("cta-components")
                .text("Components")
                .icon(IconKind::Package)
                .variant(ButtonVariant::Outline)
                .flex_1()
                .on_click(|_event, _window, _cx| tracing::debug!("components pressed")),
        )
}

fn footer(cx: &App) -> Div {
    let colors = &cx.get_theme().variants.active(cx).colors;
    let caption_size = ThemeTextSizeKind::Body.resolve(cx);

    div()
        .w_full()
        .mt(px(48.))
        .flex()
        .flex_col()
        .bg(colors.background.secondary.alpha(0.8))
        .child(Separator::horizontal())
        .child(
            div()
                .w_full()
                .py(px(24.))
                .flex()
                .justify_center()
                .text_size(caption_size)
                .text_color(colors.text.secondary)
                .child(content::FOOTER),
        )
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::{Theme, ThemeVariantKind};
    use gpui::TestAppContext;
    use showcase_state::{AccordionEvent, DocsItem, ExampleTab, FormEvent, TabEvent};

    fn add_showcase<'a>(
        cx: &'a mut TestAppContext,
        appearance: Appearance,
    ) -> (Entity<ShowcaseView>, &'a mut gpui::VisualTestContext) {
        cx.update(|cx| {
            crate::init(cx);
            cx.set_theme(Theme::DEFAULT);
        });
        cx.add_window_view(move |window, cx| ShowcaseView::new(appearance, window, cx))
    }

    #[gpui::test]
    fn test_default_state_on_mount(cx: &mut TestAppContext) {
        let (view, cx) = add_showcase(cx, Appearance::System);
        cx.run_until_parked();

        view.read_with(cx, |view, cx| {
            assert_eq!(view.examples().read(cx).active(), ExampleTab::Buttons);
            assert_eq!(view.docs().read(cx).expanded(), None);
        });
    }

    #[gpui::test]
    fn test_explicit_appearance_selects_variant(cx: &mut TestAppContext) {
        let (_view, cx) = add_showcase(cx, Appearance::Dark);

        cx.update(|_window, cx| {
            assert_eq!(cx.get_theme().variants.active(cx).kind, ThemeVariantKind::Dark);
        });
    }

    #[gpui::test]
    fn test_panels_do_not_share_state(cx: &mut TestAppContext) {
        let (view, cx) = add_showcase(cx, Appearance::Light);
        let (examples, docs) =
            view.read_with(cx, |view, _cx| (view.examples().clone(), view.docs().clone()));

        examples.update(cx, |panel, cx| {
            panel.apply(TabEvent::Activate(ExampleTab::Feedback), cx)
        });
        docs.update(cx, |panel, cx| {
            panel.apply(AccordionEvent::Toggle(DocsItem::Components), cx)
        });
        cx.run_until_parked();

        examples.read_with(cx, |panel, _cx| assert_eq!(panel.active(), ExampleTab::Feedback));
        docs.read_with(cx, |panel, _cx| {
            assert_eq!(panel.expanded(), Some(DocsItem::Components))
        });

        let form = examples.read_with(cx, |panel, _cx| panel.form().clone());
        form.update(cx, |form, cx| form.apply(FormEvent::NotificationsToggled(true), cx));
        cx.run_until_parked();

        examples.read_with(cx, |panel, _cx| assert_eq!(panel.active(), ExampleTab::Feedback));
        form.read_with(cx, |form, _cx| {
            assert!(form.form().notifications());
            assert!(!form.form().accept_terms());
        });
    }
}
