//! User self-registration.

pub mod form;
pub mod service;
pub mod validator;

use std::collections::BTreeMap;

pub use form::RegistrationForm;
pub use service::{RegistrationError, RegistrationService};
pub use validator::RegistrationValidator;

/// Field name to user-facing message, one entry per violated field.
pub type FieldErrors = BTreeMap<String, String>;

/// Form field names as they appear on the wire.
pub mod fields {
    /// Full name.
    pub const NAME: &str = "name";
    /// Email address.
    pub const EMAIL: &str = "email";
    /// Login name.
    pub const USERNAME: &str = "username";
    /// Password.
    pub const PASSWORD: &str = "password";
    /// Password confirmation.
    pub const PASSWORD_CHECK: &str = "passwordCheck";
}
