//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use graphview_core::types::{SessionId, UserId};

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Email address, unique case-insensitively.
    pub email: String,
    /// Login name, unique case-insensitively.
    pub username: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Browser session the user registered from.
    pub session_id: Option<Uuid>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Returns the typed user identifier.
    pub fn user_id(&self) -> UserId {
        UserId::from(self.id)
    }
}

/// Data required to insert a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Login name.
    pub username: String,
    /// Already-hashed password.
    pub password_hash: String,
    /// Session attached at registration time.
    pub session_id: SessionId,
}

impl NewUser {
    /// Materializes the record with a fresh id and creation timestamp.
    pub fn into_user(self) -> User {
        User {
            id: Uuid::new_v4(),
            name: self.name,
            email: self.email,
            username: self.username,
            password_hash: self.password_hash,
            session_id: Some(self.session_id.into_uuid()),
            created_at: Utc::now(),
        }
    }
}
