//! Registration field rules.

use std::sync::LazyLock;

use regex::Regex;

use graphview_core::config::AuthConfig;

use super::FieldErrors;
use super::fields;
use super::form::RegistrationForm;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_-]+(\.[A-Za-z0-9_-]+)*@[A-Za-z0-9-]+(\.[A-Za-z0-9]+)*(\.[A-Za-z]{2,})$")
        .unwrap_or_else(|e| unreachable!("email pattern is a valid regex: {e}"))
});

/// Whether `email` looks like a mail address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks the stateless rules: presence, email shape, password length and
/// confirmation. Uniqueness needs the user store and is checked by the
/// service.
#[derive(Debug, Clone)]
pub struct RegistrationValidator {
    min_password_length: usize,
}

impl RegistrationValidator {
    /// Creates a validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_password_length: config.password_min_length,
        }
    }

    /// Returns every violated field with its message. Empty means valid.
    pub fn validate(&self, form: &RegistrationForm) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let mut reject = |field: &str, message: String| {
            errors.insert(field.to_string(), message);
        };

        if form.name().is_none() {
            reject(fields::NAME, "Please enter name.".to_string());
        }

        match form.email() {
            None => reject(fields::EMAIL, "Please enter e-mail address.".to_string()),
            Some(email) if !is_valid_email(email) => {
                reject(fields::EMAIL, "Please enter valid e-mail address.".to_string())
            }
            Some(_) => {}
        }

        if form.username().is_none() {
            reject(fields::USERNAME, "Please enter username.".to_string());
        }

        match form.password() {
            None => reject(fields::PASSWORD, "Please enter password.".to_string()),
            Some(password) if password.chars().count() < self.min_password_length => reject(
                fields::PASSWORD,
                format!(
                    "Passwords must be at least {} characters long.",
                    self.min_password_length
                ),
            ),
            Some(_) => {}
        }

        match (form.password(), form.password_check()) {
            (_, None) => reject(fields::PASSWORD_CHECK, "Please repeat password.".to_string()),
            (Some(password), Some(check)) if password != check => {
                reject(fields::PASSWORD_CHECK, "Passwords must be equal.".to_string())
            }
            _ => {}
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> RegistrationValidator {
        RegistrationValidator::new(&AuthConfig::default())
    }

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            name: Some("Ada Lovelace".into()),
            email: Some("ada@example.com".into()),
            username: Some("ada".into()),
            password: Some("engine".into()),
            password_check: Some("engine".into()),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validator().validate(&valid_form()).is_empty());
    }

    #[test]
    fn test_empty_form_reports_all_five_fields() {
        let errors = validator().validate(&RegistrationForm::default());
        let keys: Vec<&str> = errors.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["email", "name", "password", "passwordCheck", "username"]
        );
    }

    #[test]
    fn test_email_shapes() {
        for ok in ["a@b.co", "first.last@sub.example.org", "x+tag@mail.io", "a_b-c@d-e.com"] {
            assert!(is_valid_email(ok), "{ok} should be valid");
        }
        for bad in ["plain", "@example.com", "a@", "a@b", "a@b.c", "a b@c.com", "a..b@c.com"] {
            assert!(!is_valid_email(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_short_password() {
        let form = RegistrationForm {
            password: Some("abcd".into()),
            password_check: Some("abcd".into()),
            ..valid_form()
        };
        let errors = validator().validate(&form);
        assert_eq!(
            errors.get("password").map(String::as_str),
            Some("Passwords must be at least 5 characters long.")
        );
        assert!(!errors.contains_key("passwordCheck"));
    }

    #[test]
    fn test_mismatched_confirmation() {
        let form = RegistrationForm {
            password_check: Some("engines".into()),
            ..valid_form()
        };
        let errors = validator().validate(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("passwordCheck").map(String::as_str),
            Some("Passwords must be equal.")
        );
    }

    #[test]
    fn test_configured_minimum_length() {
        let validator = RegistrationValidator::new(&AuthConfig {
            password_min_length: 8,
        });
        let errors = validator.validate(&valid_form());
        assert!(errors.contains_key("password"));
    }
}
