//! Response DTOs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A converted session diagram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDiagramResponse {
    /// Canonical graph JSON, as a string.
    pub graph_json: String,
    /// Display filename of the upload.
    pub name: Option<String>,
}

/// Per-field validation messages, rendered as `{"error": {field: message}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldErrorsResponse {
    /// Field name to message.
    pub error: BTreeMap<String, String>,
}

impl From<BTreeMap<String, String>> for FieldErrorsResponse {
    fn from(error: BTreeMap<String, String>) -> Self {
        Self { error }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the server answers.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Number of registered conversion modules.
    pub modules: usize,
}
