//! # graphview-auth
//!
//! Argon2id password hashing and self-registration: field validation with
//! all violations reported together, uniqueness checks, and user creation.

pub mod password;
pub mod registration;

pub use password::PasswordHasher;
pub use registration::{FieldErrors, RegistrationError, RegistrationForm, RegistrationService};
