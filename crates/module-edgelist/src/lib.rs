//! # Edge-list module
//!
//! Converts a line-oriented edge list into canonical graph JSON.
//!
//! ```text
//! # comments and blank lines are ignored
//! Parser
//! Parser -> Lexer
//! Parser -> Ast : builds
//! ```
//!
//! Vertices are numbered in order of first appearance. The arrow token is
//! read from the module namespace symbol [`ARROW_SYMBOL`].

pub mod error;
pub mod graph;
pub mod module;
pub mod parser;

pub use error::ParseError;
pub use graph::{Edge, Graph, Vertex};
pub use module::{ARROW_SYMBOL, DEFAULT_ARROW, EdgeListModule, MODULE_KEY, descriptor};
