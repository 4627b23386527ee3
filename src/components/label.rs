use gpui::{
    App, ClickEvent, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder,
};

use crate::theme::{ThemeExt, ThemeTextSizeKind};

type OnClick = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Caption for a form control. Clicking it runs `on_click`, which forms use
/// to toggle the control it names.
#[derive(IntoElement)]
pub struct Label {
    id: ElementId,
    text: SharedString,
    disabled: bool,
    on_click: Option<OnClick>,
}

impl Label {
    pub fn new(id: impl Into<ElementId>, text: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            disabled: false,
            on_click: None,
        }
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

impl RenderOnce for Label {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let text_color = cx.get_theme().variants.active(cx).colors.text.primary;
        let font_family = cx.get_theme().layout.text.default_font.family[0].clone();
        let text_size = ThemeTextSizeKind::Body.resolve(cx);
        let is_disabled = self.disabled;

        div()
            .id(self.id)
            .font_family(font_family)
            .text_size(text_size)
            .font_weight(gpui::FontWeight::MEDIUM)
            .text_color(text_color)
            .when(is_disabled, |this| this.opacity(0.45))
            .child(self.text)
            .when_some(
                self.on_click.filter(|_| !is_disabled),
                |this, on_click| {
                    this.cursor(CursorStyle::PointingHand)
                        .on_click(move |event, window, cx| {
                            window.prevent_default();
                            (on_click)(event, window, cx);
                        })
                },
            )
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use gpui::{AppContext, Modifiers, TestAppContext, point, px};

    #[gpui::test]
    fn test_label_builder(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let label = Label::new("terms-label", "Accept terms and conditions");
            assert_eq!(label.text, SharedString::from("Accept terms and conditions"));
            assert!(label.on_click.is_none());
            assert!(!label.disabled);
        });
    }

    #[gpui::test]
    fn test_label_click_runs_handler(cx: &mut TestAppContext) {
        cx.update(|cx| cx.set_theme(Theme::DEFAULT));
        let (view, cx) = cx.add_window_view(|_window, _cx| LabelTestView { clicks: 0 });

        cx.simulate_click(point(px(4.), px(4.)), Modifiers::none());
        assert_eq!(view.read_with(cx, |view, _cx| view.clicks), 1);
    }

    struct LabelTestView {
        clicks: usize,
    }

    impl gpui::Render for LabelTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div().size_full().child(
                Label::new("label", "Enable notifications").on_click(cx.listener(
                    |view, _event, _window, cx| {
                        view.clicks += 1;
                        cx.notify();
                    },
                )),
            )
        }
    }
}
