//! Client-side state of the sign-in form.
//!
//! There is no authentication behind the form. Submitting records what was
//! entered (minus the password) in the log and hands back a redacted summary.

use std::fmt;

use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    username: String,
    password: String,
    remember_me: bool,
    show_password: bool,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("remember_me", &self.remember_me)
            .field("show_password", &self.show_password)
            .finish()
    }
}

/// What a submit recorded. Never carries the password itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSubmission {
    pub username: String,
    pub password_len: usize,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    /// `type` attribute for the password input.
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password {
            "text"
        } else {
            "password"
        }
    }

    pub fn set_field(&mut self, field: LoginField, value: impl Into<String>) {
        match field {
            LoginField::Username => self.username = value.into(),
            LoginField::Password => self.password = value.into(),
        }
    }

    pub fn set_remember_me(&mut self, remember_me: bool) {
        self.remember_me = remember_me;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Records the current input. Performs no validation and keeps the fields.
    pub fn submit(&self) -> LoginSubmission {
        let submission = LoginSubmission {
            username: self.username.trim().to_string(),
            password_len: self.password.chars().count(),
            remember_me: self.remember_me,
        };
        info!(
            username = %submission.username,
            password_len = submission.password_len,
            remember_me = submission.remember_me,
            "login form submitted"
        );
        submission
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn submit_redacts_password() {
        let mut form = LoginForm::new();
        form.set_field(LoginField::Username, "  avery.m ");
        form.set_field(LoginField::Password, "hunter2hunter2");
        form.set_remember_me(true);

        let submission = form.submit();
        assert_eq!(
            submission,
            LoginSubmission {
                username: "avery.m".to_string(),
                password_len: 14,
                remember_me: true,
            }
        );
        assert!(!format!("{submission:?}").contains("hunter2"));
        assert!(!format!("{form:?}").contains("hunter2"));
    }

    #[test]
    fn empty_form_submits_without_validation() {
        let submission = LoginForm::new().submit();
        assert_eq!(submission.username, "");
        assert_eq!(submission.password_len, 0);
        assert!(!submission.remember_me);
    }

    #[test]
    fn visibility_toggle_switches_input_type() {
        let mut form = LoginForm::new();
        assert_eq!(form.password_input_type(), "password");
        form.toggle_password_visibility();
        assert_eq!(form.password_input_type(), "text");
        form.toggle_password_visibility();
        assert!(!form.show_password());
    }

    #[test]
    fn submit_keeps_entered_values() {
        let mut form = LoginForm::new();
        form.set_field(LoginField::Username, "jordan");
        form.set_field(LoginField::Password, "pw");
        let _ = form.submit();
        assert_eq!(form.username(), "jordan");
        assert_eq!(form.password(), "pw");
    }
}
