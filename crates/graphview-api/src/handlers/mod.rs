//! Request handlers.

pub mod diagram;
pub mod health;
pub mod modules;
pub mod register;
pub mod upload;
