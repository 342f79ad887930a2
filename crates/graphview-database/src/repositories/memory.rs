//! In-memory user store for deployments without a database, and for tests.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use graphview_core::error::AppError;
use graphview_core::result::AppResult;
use graphview_entity::{NewUser, User};

use super::UserStore;

/// Users keyed by id, with lowercase email and username indexes.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: DashMap<Uuid, User>,
    emails: DashMap<String, Uuid>,
    usernames: DashMap<String, Uuid>,
}

impl MemoryUserRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserRepository {
    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        Ok(self.emails.contains_key(&email.to_lowercase()))
    }

    async fn username_exists(&self, username: &str) -> AppResult<bool> {
        Ok(self.usernames.contains_key(&username.to_lowercase()))
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let user = user.into_user();

        let email = match self.emails.entry(user.email.to_lowercase()) {
            Entry::Occupied(_) => return Err(AppError::conflict("Email already exists")),
            Entry::Vacant(slot) => {
                slot.insert(user.id);
                user.email.to_lowercase()
            }
        };
        match self.usernames.entry(user.username.to_lowercase()) {
            Entry::Occupied(_) => {
                self.emails.remove(&email);
                return Err(AppError::conflict("Username already exists"));
            }
            Entry::Vacant(slot) => {
                slot.insert(user.id);
            }
        }

        self.users.insert(user.id, user.clone());
        Ok(user)
    }
}
