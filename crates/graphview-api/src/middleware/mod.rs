//! Middleware layers.

pub mod cors;
pub mod logging;
pub mod session;
