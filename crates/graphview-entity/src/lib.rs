//! # graphview-entity
//!
//! Domain records shared by the storage, auth, and API crates.

pub mod diagram;
pub mod user;

pub use diagram::SessionDiagram;
pub use user::{NewUser, User};
