//! Login form state

use tracing::info;

use crate::auth::{GatewayError, LoginRequest};

/// Fallback shown when the platform rejects a login without a message
pub const GENERIC_LOGIN_ERROR: &str = "An unexpected error occurred.";

/// Single-step credential form with submit gating
#[derive(Debug, Default)]
pub struct LoginForm {
    email: String,
    password: String,
    submitting: bool,
    error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Editing either field clears the failure message
    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.error = None;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.error = None;
    }

    /// Submit is enabled only when both fields are filled and no request is
    /// in flight
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty() && !self.submitting
    }

    /// Gate and start a submission. Returns the request payload when
    /// permitted, `None` otherwise.
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if !self.can_submit() {
            return None;
        }
        self.submitting = true;
        info!(email = %self.email, "Submitting login");
        Some(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    pub fn submit_succeeded(&mut self) {
        self.submitting = false;
    }

    /// Surface the failure and leave the form editable with values retained
    pub fn submit_failed(&mut self, error: &GatewayError) {
        self.submitting = false;
        self.error = Some(error.user_message(GENERIC_LOGIN_ERROR));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> LoginForm {
        let mut form = LoginForm::new();
        form.set_email("owner@example.com".to_string());
        form.set_password("hunter22".to_string());
        form
    }

    #[test]
    fn test_empty_fields_block_submit() {
        let mut form = LoginForm::new();
        assert!(!form.can_submit());
        assert!(form.begin_submit().is_none());

        form.set_email("owner@example.com".to_string());
        assert!(!form.can_submit());

        form.set_password("hunter22".to_string());
        assert!(form.can_submit());
    }

    #[test]
    fn test_begin_submit_hands_back_credentials() {
        let mut form = filled_form();

        let request = form.begin_submit().unwrap();
        assert_eq!(request.email, "owner@example.com");
        assert_eq!(request.password, "hunter22");
        assert!(form.is_submitting());
    }

    #[test]
    fn test_no_second_submit_while_in_flight() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_some());

        assert!(!form.can_submit());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_failure_retains_values_and_sets_message() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_some());

        let err = GatewayError::rejected(401, Some("invalid credentials".to_string()));
        form.submit_failed(&err);

        assert_eq!(form.error(), Some("invalid credentials"));
        assert_eq!(form.email(), "owner@example.com");
        assert_eq!(form.password(), "hunter22");
        // Editable again
        assert!(form.can_submit());
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_some());

        form.submit_failed(&GatewayError::network("connection refused"));
        assert_eq!(form.error(), Some(GENERIC_LOGIN_ERROR));
    }

    #[test]
    fn test_edit_clears_failure_message() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_some());
        form.submit_failed(&GatewayError::rejected(401, None));
        assert!(form.error().is_some());

        form.set_password("hunter23".to_string());
        assert!(form.error().is_none());
    }

    #[test]
    fn test_success_clears_in_flight_flag() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_some());

        form.submit_succeeded();
        assert!(!form.is_submitting());
        assert!(form.error().is_none());
    }
}
