//! Response bodies.

pub mod response;

pub use response::{FieldErrorsResponse, HealthResponse, SessionDiagramResponse};
