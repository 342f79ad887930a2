//! Conversion module configuration.

use serde::{Deserialize, Serialize};

/// Conversion module configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModulesConfig {
    /// Directory scanned for module shared libraries.
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Whether to load shared-library modules on startup.
    #[serde(default = "default_true")]
    pub auto_load: bool,
    /// Upper bound on a single conversion, applied by the HTTP layer.
    #[serde(default = "default_invocation_timeout")]
    pub invocation_timeout_seconds: u64,
}

impl Default for ModulesConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            auto_load: default_true(),
            invocation_timeout_seconds: default_invocation_timeout(),
        }
    }
}

fn default_directory() -> String {
    "./modules".to_string()
}

fn default_true() -> bool {
    true
}

fn default_invocation_timeout() -> u64 {
    30
}
