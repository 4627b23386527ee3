/// Input accepted by [`FormState::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    /// The email field now holds this text.
    EmailChanged(String),
    /// The password field now holds this text.
    PasswordChanged(String),
    /// The terms checkbox was set to this value.
    TermsToggled(bool),
    /// The notifications switch was set to this value.
    NotificationsToggled(bool),
    /// The submit button was pressed. Has no effect on the held values.
    Submitted,
}

/// Values held by the example sign-up form.
///
/// Fields are independent of each other and carry no validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    email: String,
    password: String,
    accept_terms: bool,
    notifications: bool,
}

impl FormState {
    /// An empty form with both toggles off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the email field.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Literal text of the password field (the view masks it).
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Whether the terms checkbox is checked.
    pub fn accept_terms(&self) -> bool {
        self.accept_terms
    }

    /// Whether the notifications switch is on.
    pub fn notifications(&self) -> bool {
        self.notifications
    }

    /// Applies an event and returns the next state.
    pub fn apply(mut self, event: FormEvent) -> Self {
        match event {
            FormEvent::EmailChanged(email) => self.email = email,
            FormEvent::PasswordChanged(password) => self.password = password,
            FormEvent::TermsToggled(checked) => self.accept_terms = checked,
            FormEvent::NotificationsToggled(checked) => self.notifications = checked,
            FormEvent::Submitted => {}
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let form = FormState::new();
        assert_eq!(form.email(), "");
        assert_eq!(form.password(), "");
        assert!(!form.accept_terms());
        assert!(!form.notifications());
    }

    #[test]
    fn text_fields_hold_latest_value() {
        let form = FormState::new()
            .apply(FormEvent::EmailChanged("a@".into()))
            .apply(FormEvent::EmailChanged("a@b.dev".into()))
            .apply(FormEvent::PasswordChanged("hunter2".into()));

        assert_eq!(form.email(), "a@b.dev");
        assert_eq!(form.password(), "hunter2");
    }

    #[test]
    fn toggles_are_independent() {
        let form = FormState::new().apply(FormEvent::TermsToggled(true));
        assert!(form.accept_terms());
        assert!(!form.notifications());

        let form = form.apply(FormEvent::NotificationsToggled(true));
        let form = form.apply(FormEvent::TermsToggled(false));
        assert!(!form.accept_terms());
        assert!(form.notifications());
    }

    #[test]
    fn submit_changes_nothing() {
        let form = FormState::new()
            .apply(FormEvent::EmailChanged("me@example.com".into()))
            .apply(FormEvent::TermsToggled(true));

        assert_eq!(form.clone().apply(FormEvent::Submitted), form);
    }
}
