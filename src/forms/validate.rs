//! Pure validation for the signup wizard.
//!
//! Both predicates recompute the error map wholesale; callers replace any
//! previous map with the returned one. Messages are the platform's Persian
//! strings.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{RestaurantType, SignupDraft, SignupField, ValidationErrors};

/// The platform's email shape: a non-space run, `@`, a non-space run with an
/// interior dot, found anywhere in the string.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// Step-1 predicate: the restaurant profile fields.
///
/// Zip code is optional and never produces an error.
pub fn validate_restaurant_info(draft: &SignupDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.restaurant_name.trim().is_empty() {
        errors.insert(
            SignupField::RestaurantName,
            "نام رستوران الزامی است".to_string(),
        );
    }
    if RestaurantType::from_label(&draft.restaurant_type).is_none() {
        errors.insert(
            SignupField::RestaurantType,
            "لطفا نوع رستوران را انتخاب کنید".to_string(),
        );
    }
    if draft.address.trim().is_empty() {
        errors.insert(SignupField::Address, "آدرس الزامی است".to_string());
    }
    if draft.city.trim().is_empty() {
        errors.insert(SignupField::City, "شهر الزامی است".to_string());
    }
    if draft.phone.trim().is_empty() {
        errors.insert(SignupField::Phone, "شماره تلفن الزامی است".to_string());
    }

    errors
}

/// Step-2 predicate: the owner and account fields.
pub fn validate_account_info(draft: &SignupDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.owner_name.trim().is_empty() {
        errors.insert(SignupField::OwnerName, "نام شما الزامی است".to_string());
    }

    if draft.email.trim().is_empty() {
        errors.insert(SignupField::Email, "ایمیل الزامی است".to_string());
    } else if !is_email_like(&draft.email) {
        errors.insert(
            SignupField::Email,
            "لطفا ایمیل معتبر وارد کنید".to_string(),
        );
    }

    if draft.password.is_empty() {
        errors.insert(SignupField::Password, "رمز عبور الزامی است".to_string());
    } else if draft.password.chars().count() < 8 {
        errors.insert(
            SignupField::Password,
            "رمز عبور باید حداقل 8 کاراکتر باشد".to_string(),
        );
    }

    // Mismatch is reported on the confirmation field, even when the password
    // itself is empty
    if draft.confirm_password != draft.password {
        errors.insert(
            SignupField::ConfirmPassword,
            "رمز عبور و تکرار آن مطابقت ندارد".to_string(),
        );
    }

    if !draft.agree_to_terms {
        errors.insert(
            SignupField::AgreeToTerms,
            "باید شرایط و قوانین را بپذیرید".to_string(),
        );
    }

    errors
}

fn is_email_like(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_step1_draft() -> SignupDraft {
        SignupDraft {
            restaurant_name: "Cafe Shemroon".to_string(),
            restaurant_type: "فست فود".to_string(),
            address: "Main St".to_string(),
            city: "Tehran".to_string(),
            phone: "09120000000".to_string(),
            ..SignupDraft::default()
        }
    }

    fn valid_step2_draft() -> SignupDraft {
        SignupDraft {
            owner_name: "Sara".to_string(),
            email: "sara@example.com".to_string(),
            password: "abcdefgh".to_string(),
            confirm_password: "abcdefgh".to_string(),
            agree_to_terms: true,
            ..valid_step1_draft()
        }
    }

    #[test]
    fn test_empty_name_fails_only_on_name() {
        let draft = SignupDraft {
            restaurant_name: String::new(),
            ..valid_step1_draft()
        };

        let errors = validate_restaurant_info(&draft);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&SignupField::RestaurantName));
    }

    #[test]
    fn test_whitespace_name_counts_as_empty() {
        let draft = SignupDraft {
            restaurant_name: "   ".to_string(),
            ..valid_step1_draft()
        };

        let errors = validate_restaurant_info(&draft);
        assert!(errors.contains_key(&SignupField::RestaurantName));
    }

    #[test]
    fn test_type_outside_category_set_is_rejected() {
        let draft = SignupDraft {
            restaurant_type: "steakhouse".to_string(),
            ..valid_step1_draft()
        };

        let errors = validate_restaurant_info(&draft);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&SignupField::RestaurantType));
    }

    #[test]
    fn test_empty_draft_fails_every_required_step1_field() {
        let errors = validate_restaurant_info(&SignupDraft::default());
        assert_eq!(errors.len(), 5);
        // Zip code is optional
        assert!(!errors.contains_key(&SignupField::ZipCode));
    }

    #[test]
    fn test_valid_step1_draft_passes() {
        assert!(validate_restaurant_info(&valid_step1_draft()).is_empty());
    }

    #[test]
    fn test_bad_email_and_short_password() {
        let draft = SignupDraft {
            email: "bad-email".to_string(),
            password: "short".to_string(),
            confirm_password: "short".to_string(),
            ..valid_step2_draft()
        };

        let errors = validate_account_info(&draft);
        assert_eq!(errors.get(&SignupField::Email).map(String::as_str), Some("لطفا ایمیل معتبر وارد کنید"));
        assert_eq!(
            errors.get(&SignupField::Password).map(String::as_str),
            Some("رمز عبور باید حداقل 8 کاراکتر باشد")
        );
    }

    #[test]
    fn test_empty_email_reports_required_not_pattern() {
        let draft = SignupDraft {
            email: String::new(),
            ..valid_step2_draft()
        };

        let errors = validate_account_info(&draft);
        assert_eq!(
            errors.get(&SignupField::Email).map(String::as_str),
            Some("ایمیل الزامی است")
        );
    }

    #[test]
    fn test_password_mismatch_reported_on_confirmation() {
        let draft = SignupDraft {
            confirm_password: "abcdefgX".to_string(),
            ..valid_step2_draft()
        };

        let errors = validate_account_info(&draft);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&SignupField::ConfirmPassword));
    }

    #[test]
    fn test_mismatch_checked_even_with_empty_password() {
        let draft = SignupDraft {
            password: String::new(),
            confirm_password: "something".to_string(),
            ..valid_step2_draft()
        };

        let errors = validate_account_info(&draft);
        assert!(errors.contains_key(&SignupField::Password));
        assert!(errors.contains_key(&SignupField::ConfirmPassword));
    }

    #[test]
    fn test_terms_must_be_accepted() {
        let draft = SignupDraft {
            agree_to_terms: false,
            ..valid_step2_draft()
        };

        let errors = validate_account_info(&draft);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&SignupField::AgreeToTerms));
    }

    #[test]
    fn test_marketing_consent_is_never_validated() {
        let draft = SignupDraft {
            agree_to_marketing: false,
            ..valid_step2_draft()
        };
        assert!(validate_account_info(&draft).is_empty());

        let draft = SignupDraft {
            agree_to_marketing: true,
            ..valid_step2_draft()
        };
        assert!(validate_account_info(&draft).is_empty());
    }

    #[test]
    fn test_valid_step2_draft_passes() {
        assert!(validate_account_info(&valid_step2_draft()).is_empty());
    }

    #[test]
    fn test_email_shape() {
        assert!(is_email_like("a@b.c"));
        assert!(is_email_like("owner@menuza.app"));
        // The check searches anywhere in the string
        assert!(is_email_like("name surname@example.com"));

        assert!(!is_email_like("bad-email"));
        assert!(!is_email_like("a@b"));
        assert!(!is_email_like("@b.c"));
        assert!(!is_email_like("a@.c"));
        assert!(!is_email_like("a@b."));
        assert!(!is_email_like("a @b.c "));
    }
}
