use gpui::{
    AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Subscription, Window,
    div, px,
};
use gpui_primitives::input::InputState;
use showcase_state::{FormEvent, FormState};

use crate::components::{Button, Checkbox, Label, Switch, TextField};

/// The example sign-up form: two text fields, two toggles and a submit button.
///
/// Text values are pulled from the observed input entities, so the held
/// email and password always match what the fields contain.
pub struct FormPanel {
    form: FormState,
    email: Entity<InputState>,
    password: Entity<InputState>,
    _subscriptions: [Subscription; 2],
}

impl FormPanel {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let email = cx.new(|cx| InputState::new(cx));
        let password = cx.new(|cx| InputState::new(cx));

        Self::with_inputs(email, password, cx)
    }

    pub fn with_inputs(
        email: Entity<InputState>,
        password: Entity<InputState>,
        cx: &mut Context<Self>,
    ) -> Self {
        let _subscriptions = [
            cx.observe(&email, |this, email, cx| {
                let value = email.read(cx).value();
                if &*value != this.form.email() {
                    this.apply(FormEvent::EmailChanged(value.to_string()), cx);
                }
            }),
            cx.observe(&password, |this, password, cx| {
                let value = password.read(cx).value();
                if &*value != this.form.password() {
                    this.apply(FormEvent::PasswordChanged(value.to_string()), cx);
                }
            }),
        ];

        let mut this = Self {
            form: FormState::new(),
            email,
            password,
            _subscriptions,
        };

        // Inputs may be seeded with an initial value.
        this.form = std::mem::take(&mut this.form)
            .apply(FormEvent::EmailChanged(this.email.read(cx).value().to_string()))
            .apply(FormEvent::PasswordChanged(this.password.read(cx).value().to_string()));

        this
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn apply(&mut self, event: FormEvent, cx: &mut Context<Self>) {
        match &event {
            FormEvent::EmailChanged(value) => {
                tracing::debug!(field = "email", len = value.len(), "form field changed")
            }
            // The password itself never reaches the log.
            FormEvent::PasswordChanged(value) => {
                tracing::debug!(field = "password", len = value.len(), "form field changed")
            }
            FormEvent::TermsToggled(checked) => {
                tracing::debug!(field = "terms", checked, "form toggle changed")
            }
            FormEvent::NotificationsToggled(checked) => {
                tracing::debug!(field = "notifications", checked, "form toggle changed")
            }
            FormEvent::Submitted => tracing::debug!(
                accept_terms = self.form.accept_terms(),
                notifications = self.form.notifications(),
                "form submitted"
            ),
        }

        self.form = std::mem::take(&mut self.form).apply(event);
        cx.notify();
    }
}

fn field_row(label_id: &'static str, label: &'static str, field: impl IntoElement) -> gpui::Div {
    div()
        .flex()
        .flex_col()
        .gap(px(8.))
        .child(Label::new(label_id, label))
        .child(field)
}

impl Render for FormPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let accept_terms = self.form.accept_terms();
        let notifications = self.form.notifications();

        div()
            .w_full()
            .max_w(px(384.))
            .flex()
            .flex_col()
            .gap(px(12.))
            .child(field_row(
                "form-email-label",
                "Email",
                TextField::new("form-email", self.email.clone()).placeholder("email@example.com"),
            ))
            .child(field_row(
                "form-password-label",
                "Password",
                TextField::new("form-password", self.password.clone())
                    .placeholder("••••••••")
                    .masked(true),
            ))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(8.))
                    .child(Checkbox::new("form-terms").checked(accept_terms).on_click(
                        cx.listener(|this, checked, _window, cx| {
                            this.apply(FormEvent::TermsToggled(*checked), cx)
                        }),
                    ))
                    .child(
                        Label::new("form-terms-label", "Accept terms and conditions").on_click(
                            cx.listener(move |this, _event, _window, cx| {
                                this.apply(FormEvent::TermsToggled(!accept_terms), cx)
                            }),
                        ),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(8.))
                    .child(
                        Switch::new("form-notifications")
                            .checked(notifications)
                            .on_click(cx.listener(|this, checked, _window, cx| {
                                this.apply(FormEvent::NotificationsToggled(*checked), cx)
                            })),
                    )
                    .child(
                        Label::new("form-notifications-label", "Enable notifications").on_click(
                            cx.listener(move |this, _event, _window, cx| {
                                this.apply(FormEvent::NotificationsToggled(!notifications), cx)
                            }),
                        ),
                    ),
            )
            .child(
                Button::new("form-submit")
                    .text("Submit")
                    .w_full()
                    .on_click(cx.listener(|this, _event, _window, cx| {
                        this.apply(FormEvent::Submitted, cx)
                    })),
            )
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::{Theme, ThemeExt};
    use gpui::TestAppContext;

    fn add_panel<'a>(
        cx: &'a mut TestAppContext,
        email: &'static str,
        password: &'static str,
    ) -> (
        Entity<FormPanel>,
        Entity<InputState>,
        Entity<InputState>,
        &'a mut gpui::VisualTestContext,
    ) {
        cx.update(|cx| cx.set_theme(Theme::DEFAULT));
        let email = cx.new(|cx| InputState::new(cx).initial_value(email));
        let password = cx.new(|cx| InputState::new(cx).initial_value(password));

        let (panel, cx) = cx.add_window_view({
            let email = email.clone();
            let password = password.clone();
            move |_window, cx| FormPanel::with_inputs(email, password, cx)
        });

        (panel, email, password, cx)
    }

    #[gpui::test]
    fn test_form_starts_empty(cx: &mut TestAppContext) {
        let (panel, _, _, cx) = add_panel(cx, "", "");

        panel.read_with(cx, |panel, _cx| assert_eq!(panel.form(), &FormState::new()));
    }

    #[gpui::test]
    fn test_fields_echo_input_values(cx: &mut TestAppContext) {
        let (panel, email, password, cx) = add_panel(cx, "me@example.com", "hunter2");

        panel.read_with(cx, |panel, _cx| {
            assert_eq!(panel.form().email(), "me@example.com");
            assert_eq!(panel.form().password(), "hunter2");
        });

        email.update(cx, |state, cx| {
            state.clear();
            cx.notify();
        });
        cx.run_until_parked();

        panel.read_with(cx, |panel, _cx| {
            assert_eq!(panel.form().email(), "");
            assert_eq!(panel.form().password(), "hunter2");
        });

        password.update(cx, |state, cx| {
            state.clear();
            cx.notify();
        });
        cx.run_until_parked();

        panel.read_with(cx, |panel, _cx| assert_eq!(panel.form().password(), ""));
    }

    #[gpui::test]
    fn test_toggles_are_independent(cx: &mut TestAppContext) {
        let (panel, _, _, cx) = add_panel(cx, "", "");

        panel.update(cx, |panel, cx| panel.apply(FormEvent::TermsToggled(true), cx));
        panel.read_with(cx, |panel, _cx| {
            assert!(panel.form().accept_terms());
            assert!(!panel.form().notifications());
        });

        panel.update(cx, |panel, cx| {
            panel.apply(FormEvent::NotificationsToggled(true), cx);
            panel.apply(FormEvent::TermsToggled(false), cx);
        });
        panel.read_with(cx, |panel, _cx| {
            assert!(!panel.form().accept_terms());
            assert!(panel.form().notifications());
        });
    }

    #[gpui::test]
    fn test_submit_keeps_values(cx: &mut TestAppContext) {
        let (panel, _, _, cx) = add_panel(cx, "me@example.com", "");

        panel.update(cx, |panel, cx| panel.apply(FormEvent::TermsToggled(true), cx));
        let before = panel.read_with(cx, |panel, _cx| panel.form().clone());

        panel.update(cx, |panel, cx| panel.apply(FormEvent::Submitted, cx));
        panel.read_with(cx, |panel, _cx| assert_eq!(panel.form(), &before));
    }
}
