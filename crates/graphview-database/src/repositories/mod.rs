//! User storage used by registration.

pub mod memory;
pub mod user;

use async_trait::async_trait;

use graphview_core::result::AppResult;
use graphview_entity::{NewUser, User};

pub use memory::MemoryUserRepository;
pub use user::PgUserRepository;

/// Persistence operations registration needs.
///
/// Email and username comparisons are case-insensitive.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Whether a user with this email exists.
    async fn email_exists(&self, email: &str) -> AppResult<bool>;

    /// Whether a user with this username exists.
    async fn username_exists(&self, username: &str) -> AppResult<bool>;

    /// Inserts a user. Fails with a conflict if email or username is taken.
    async fn create(&self, user: NewUser) -> AppResult<User>;
}
