//! Edge-list parse errors.

use thiserror::Error;

/// A line of the edge list could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An edge is missing its source or target vertex.
    #[error("line {line}: edge is missing a {side} vertex")]
    MissingEndpoint {
        /// 1-based line number.
        line: usize,
        /// `"source"` or `"target"`.
        side: &'static str,
    },

    /// A label separator appeared on a line without an edge.
    #[error("line {line}: label given without an edge")]
    LabelWithoutEdge {
        /// 1-based line number.
        line: usize,
    },

    /// More than one arrow on a single line.
    #[error("line {line}: only one edge per line is allowed")]
    ChainedEdge {
        /// 1-based line number.
        line: usize,
    },

    /// The input had no statements.
    #[error("edge list contains no vertices")]
    Empty,
}
