//! Login form state.

use super::InputEdit;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

/// Credentials ready for the authentication exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Username is required")]
    MissingUsername,
    #[error("Password is required")]
    MissingPassword,
    #[error("Login already in progress")]
    InFlight,
    #[error("Already logged in")]
    AlreadyAuthenticated,
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    username: String,
    password: String,
    focus: LoginField,
    submitting: bool,
    error: Option<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            focus: LoginField::Username,
            submitting: false,
            error: None,
        }
    }
}

impl LoginForm {
    /// A form pre-filled with both fields.
    pub fn with_credentials(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn edit(&mut self, edit: InputEdit) {
        if self.submitting {
            return;
        }
        match self.focus {
            LoginField::Username => edit.apply(&mut self.username),
            LoginField::Password => edit.apply(&mut self.password),
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    /// Validates the required fields and starts the exchange.
    ///
    /// While an exchange is in flight further submits are refused.
    pub fn submit(&mut self) -> Result<LoginRequest, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        let rejection = if self.username.is_empty() {
            Some(SubmitError::MissingUsername)
        } else if self.password.is_empty() {
            Some(SubmitError::MissingPassword)
        } else {
            None
        };
        if let Some(e) = rejection {
            self.error = Some(e.to_string());
            return Err(e);
        }

        self.submitting = true;
        self.error = None;
        Ok(LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// Ends a failed exchange. The typed fields are kept.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_len(&self) -> usize {
        self.password.chars().count()
    }

    pub fn focus(&self) -> LoginField {
        self.focus
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut LoginForm, text: &str) {
        for c in text.chars() {
            form.edit(InputEdit::Insert(c));
        }
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        let mut form = LoginForm::default();
        assert_eq!(form.submit(), Err(SubmitError::MissingUsername));
        assert_eq!(form.error(), Some("Username is required"));

        type_text(&mut form, "admin");
        assert_eq!(form.submit(), Err(SubmitError::MissingPassword));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_submit_yields_request_and_blocks_resubmit() {
        let mut form = LoginForm::default();
        type_text(&mut form, "admin");
        form.toggle_focus();
        type_text(&mut form, "secret");

        let request = form.submit().unwrap();
        assert_eq!(request.username, "admin");
        assert_eq!(request.password, "secret");
        assert!(form.is_submitting());
        assert_eq!(form.submit(), Err(SubmitError::InFlight));
    }

    #[test]
    fn test_failure_keeps_fields_and_allows_new_submit() {
        let mut form = LoginForm::with_credentials("admin", "wrong");
        form.submit().unwrap();
        form.fail("HTTP error with status 401: Invalid credentials");

        assert!(!form.is_submitting());
        assert_eq!(form.username(), "admin");
        assert_eq!(form.password_len(), 5);
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_debug_hides_password() {
        let request = LoginRequest {
            username: "admin".into(),
            password: "secret".into(),
        };
        assert!(!format!("{:?}", request).contains("secret"));
    }
}
