//! Form state for signup and login, decoupled from rendering
//!
//! Validation is pure (`draft -> ValidationErrors`); the effectful submission
//! half lives with the caller, which feeds gateway outcomes back in through
//! `submit_succeeded` / `submit_failed`.

pub mod login;
pub mod signup;
pub mod types;
pub mod validate;

pub use login::{LoginForm, GENERIC_LOGIN_ERROR};
pub use signup::{SignupAdvance, SignupForm, SignupStep, GENERIC_SIGNUP_ERROR};
pub use types::{RestaurantType, SignupDraft, SignupField, ValidationErrors};
pub use validate::{validate_account_info, validate_restaurant_info};
