//! Registration flow: validate, check uniqueness, hash, persist.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use graphview_core::config::AuthConfig;
use graphview_core::error::{AppError, ErrorKind};
use graphview_core::types::SessionId;
use graphview_database::UserStore;
use graphview_entity::{NewUser, User};

use super::fields;
use super::form::RegistrationForm;
use super::validator::RegistrationValidator;
use super::FieldErrors;
use crate::password::PasswordHasher;

const EMAIL_TAKEN: &str = "E-mail already exists.";
const USERNAME_TAKEN: &str = "Nickname already exists.";

/// Why a registration did not produce a user.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The submitted form violates one or more field rules.
    #[error("registration form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),

    /// Storage or hashing failed.
    #[error(transparent)]
    Internal(#[from] AppError),
}

/// Registers users against a [`UserStore`].
#[derive(Debug, Clone)]
pub struct RegistrationService {
    users: Arc<dyn UserStore>,
    validator: RegistrationValidator,
    hasher: PasswordHasher,
}

impl RegistrationService {
    /// Creates a registration service.
    pub fn new(users: Arc<dyn UserStore>, config: &AuthConfig) -> Self {
        Self {
            users,
            validator: RegistrationValidator::new(config),
            hasher: PasswordHasher::new(),
        }
    }

    /// Validates the form, reporting all violations at once, and creates the
    /// user with `session` attached.
    pub async fn register(
        &self,
        form: RegistrationForm,
        session: SessionId,
    ) -> Result<User, RegistrationError> {
        let mut errors = self.validator.validate(&form);

        if !errors.contains_key(fields::EMAIL) {
            if let Some(email) = form.email() {
                if self.users.email_exists(email).await? {
                    errors.insert(fields::EMAIL.to_string(), EMAIL_TAKEN.to_string());
                }
            }
        }
        if let Some(username) = form.username() {
            if self.users.username_exists(username).await? {
                errors.insert(fields::USERNAME.to_string(), USERNAME_TAKEN.to_string());
            }
        }

        if !errors.is_empty() {
            return Err(RegistrationError::Invalid(errors));
        }

        let (Some(name), Some(email), Some(username), Some(password)) =
            (form.name(), form.email(), form.username(), form.password())
        else {
            return Err(AppError::internal("validated form is missing a field").into());
        };

        let new_user = NewUser {
            name: name.to_string(),
            email: email.to_string(),
            username: username.to_string(),
            password_hash: self.hasher.hash_password(password)?,
            session_id: session,
        };

        match self.users.create(new_user).await {
            Ok(user) => {
                info!(user_id = %user.user_id(), session_id = %session, "User registered");
                Ok(user)
            }
            Err(e) if e.kind == ErrorKind::Conflict => {
                warn!(session_id = %session, error = %e, "Registration lost a uniqueness race");
                Err(RegistrationError::Invalid(
                    self.conflicting_fields(email, username).await?,
                ))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Field errors for a store-level conflict, found after the fact.
    async fn conflicting_fields(&self, email: &str, username: &str) -> Result<FieldErrors, AppError> {
        let mut errors = FieldErrors::new();
        if self.users.email_exists(email).await? {
            errors.insert(fields::EMAIL.to_string(), EMAIL_TAKEN.to_string());
        }
        if self.users.username_exists(username).await? {
            errors.insert(fields::USERNAME.to_string(), USERNAME_TAKEN.to_string());
        }
        if errors.is_empty() {
            errors.insert(fields::EMAIL.to_string(), EMAIL_TAKEN.to_string());
        }
        Ok(errors)
    }
}
