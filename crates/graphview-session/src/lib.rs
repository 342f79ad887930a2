//! # graphview-session
//!
//! Session Diagram Store: holds the last diagram uploaded into each browser
//! session. Writes replace the previous diagram wholesale; entries expire
//! after the configured idle period.

pub mod store;

pub use store::DiagramSessionStore;
