//! Submitted registration form.

use serde::Deserialize;

/// Registration form as posted. Every field is optional on the wire so that
/// missing fields become validation messages rather than rejections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    /// Full name.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Login name.
    pub username: Option<String>,
    /// Password.
    pub password: Option<String>,
    /// Password confirmation.
    pub password_check: Option<String>,
}

impl RegistrationForm {
    /// Name, trimmed; `None` if missing or blank.
    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    /// Email, trimmed; `None` if missing or blank.
    pub fn email(&self) -> Option<&str> {
        present(&self.email)
    }

    /// Username, trimmed; `None` if missing or blank.
    pub fn username(&self) -> Option<&str> {
        present(&self.username)
    }

    /// Password as typed; `None` if missing or empty.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }

    /// Confirmation as typed; `None` if missing or empty.
    pub fn password_check(&self) -> Option<&str> {
        self.password_check.as_deref().filter(|p| !p.is_empty())
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
