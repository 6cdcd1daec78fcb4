//! Two-step signup wizard state machine

use tracing::{debug, info};

use super::types::{SignupDraft, SignupField, ValidationErrors};
use super::validate::{validate_account_info, validate_restaurant_info};
use crate::auth::{GatewayError, SignupRequest};

/// Fallback shown when the platform rejects a signup without a message
pub const GENERIC_SIGNUP_ERROR: &str = "An unexpected error occurred during sign up.";

/// Steps in the signup process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupStep {
    /// Step 1: restaurant profile
    RestaurantInfo,
    /// Step 2: owner and account credentials
    AccountInfo,
    /// Request in flight; inputs disabled
    Submitting,
    /// Account created
    Done,
}

/// Result of an advance attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SignupAdvance {
    /// Validation failed, or the wizard is mid-submit; stay put
    Stay,
    /// Moved from restaurant info to account info
    Continue,
    /// Both steps valid; payload ready for the gateway
    Submit(SignupRequest),
}

/// Wizard state: current step, draft, and outstanding errors
pub struct SignupForm {
    step: SignupStep,
    draft: SignupDraft,
    errors: ValidationErrors,
    submit_error: Option<String>,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            step: SignupStep::RestaurantInfo,
            draft: SignupDraft::default(),
            errors: ValidationErrors::new(),
            submit_error: None,
        }
    }

    pub fn step(&self) -> SignupStep {
        self.step
    }

    pub fn draft(&self) -> &SignupDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, field: SignupField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Message captured from the last failed submission, if any
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.step == SignupStep::Submitting
    }

    /// Validation-gated advance. The error map is recomputed wholesale on
    /// every attempt; on success the wizard moves forward and on the final
    /// step hands back the request payload.
    pub fn advance(&mut self) -> SignupAdvance {
        match self.step {
            SignupStep::RestaurantInfo => {
                let errors = validate_restaurant_info(&self.draft);
                if errors.is_empty() {
                    self.errors.clear();
                    self.step = SignupStep::AccountInfo;
                    debug!("Signup wizard advanced to account info");
                    SignupAdvance::Continue
                } else {
                    debug!(fields = errors.len(), "Restaurant info failed validation");
                    self.errors = errors;
                    SignupAdvance::Stay
                }
            }
            SignupStep::AccountInfo => {
                let errors = validate_account_info(&self.draft);
                if errors.is_empty() {
                    self.errors.clear();
                    self.step = SignupStep::Submitting;
                    info!(restaurant = %self.draft.restaurant_name, "Submitting signup");
                    SignupAdvance::Submit(self.draft.to_request())
                } else {
                    debug!(fields = errors.len(), "Account info failed validation");
                    self.errors = errors;
                    SignupAdvance::Stay
                }
            }
            SignupStep::Submitting | SignupStep::Done => SignupAdvance::Stay,
        }
    }

    /// Step back from account info to restaurant info. Always permitted,
    /// keeps every entered value. Returns false when there is nowhere to go
    /// (the caller decides what leaving step 1 means).
    pub fn back(&mut self) -> bool {
        if self.step == SignupStep::AccountInfo {
            self.step = SignupStep::RestaurantInfo;
            true
        } else {
            false
        }
    }

    /// Write a text field. Clears that field's validation error and any
    /// outstanding submission failure.
    pub fn set_text(&mut self, field: SignupField, value: String) {
        match field {
            SignupField::RestaurantName => self.draft.restaurant_name = value,
            SignupField::RestaurantType => self.draft.restaurant_type = value,
            SignupField::Address => self.draft.address = value,
            SignupField::City => self.draft.city = value,
            SignupField::ZipCode => self.draft.zip_code = value,
            SignupField::Phone => self.draft.phone = value,
            SignupField::OwnerName => self.draft.owner_name = value,
            SignupField::Email => self.draft.email = value,
            SignupField::Password => self.draft.password = value,
            SignupField::ConfirmPassword => self.draft.confirm_password = value,
            SignupField::AgreeToTerms | SignupField::AgreeToMarketing => return,
        }
        self.note_edit(field);
    }

    /// Write one of the consent flags, with the same error-clearing side
    /// effect as a text edit.
    pub fn set_flag(&mut self, field: SignupField, value: bool) {
        match field {
            SignupField::AgreeToTerms => self.draft.agree_to_terms = value,
            SignupField::AgreeToMarketing => self.draft.agree_to_marketing = value,
            _ => return,
        }
        self.note_edit(field);
    }

    fn note_edit(&mut self, field: SignupField) {
        self.errors.remove(&field);
        self.submit_error = None;
    }

    /// The gateway accepted the signup
    pub fn submit_succeeded(&mut self) {
        if self.step == SignupStep::Submitting {
            self.step = SignupStep::Done;
            info!("Signup complete");
        }
    }

    /// The gateway rejected the signup: return to step 2 with every value
    /// intact and a user-facing message
    pub fn submit_failed(&mut self, error: &GatewayError) {
        if self.step == SignupStep::Submitting {
            self.step = SignupStep::AccountInfo;
            self.submit_error = Some(error.user_message(GENERIC_SIGNUP_ERROR));
        }
    }
}
