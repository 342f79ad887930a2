//! Diagram held in a browser session.

use serde::{Deserialize, Serialize};

/// The last diagram uploaded into a browser session.
///
/// One instance per session; a new upload replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDiagram {
    /// Diagram text as uploaded.
    pub content: String,
    /// Declared format type key (`raw` for canonical JSON).
    pub format_type: Option<String>,
    /// Display filename, if the upload carried one.
    pub filename: Option<String>,
}

impl SessionDiagram {
    /// Creates a diagram with a declared format type.
    pub fn new(
        content: impl Into<String>,
        format_type: impl Into<String>,
        filename: Option<String>,
    ) -> Self {
        Self {
            content: content.into(),
            format_type: Some(format_type.into()),
            filename,
        }
    }

    /// Returns the content and format type when both are usable for conversion.
    ///
    /// Empty content or a missing type means there is nothing to convert.
    pub fn convertible(&self) -> Option<(&str, &str)> {
        if self.content.is_empty() {
            return None;
        }
        self.format_type
            .as_deref()
            .map(|format_type| (self.content.as_str(), format_type))
    }
}
