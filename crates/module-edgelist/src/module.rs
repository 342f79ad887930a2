//! Conversion module wiring.

use anyhow::Context;
use tracing::debug;

use graphview_module::prelude::*;

use crate::parser;

/// Format type key the module registers under.
pub const MODULE_KEY: &str = "edgelist";

/// Namespace symbol holding the edge token.
pub const ARROW_SYMBOL: &str = "edgelist.arrow";

/// Edge token used when the namespace does not define one.
pub const DEFAULT_ARROW: &str = "->";

/// Edge-list to canonical JSON converter.
#[derive(Debug, Default)]
pub struct EdgeListModule;

impl ConversionModule for EdgeListModule {
    fn convert(&mut self, input: &str) -> Result<String> {
        let arrow = resolve::<String>(ARROW_SYMBOL);
        let arrow = arrow
            .as_deref()
            .map(String::as_str)
            .filter(|arrow| !arrow.trim().is_empty())
            .unwrap_or(DEFAULT_ARROW);

        let graph = parser::parse(input, arrow)?;
        debug!(
            vertices = graph.vertices.len(),
            edges = graph.edges.len(),
            "Parsed edge list"
        );

        serde_json::to_string(&graph).context("failed to serialize graph")
    }
}

/// Descriptor registering the module under [`MODULE_KEY`] with its own
/// namespace.
pub fn descriptor() -> ModuleDescriptor {
    ModuleDescriptor::of::<EdgeListModule>(MODULE_KEY, "Edge list").with_namespace(
        Namespace::new(MODULE_KEY).with_symbol(ARROW_SYMBOL, DEFAULT_ARROW.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use graphview_module::{ConverterDispatcher, FailureKind, ModuleRegistry};
    use serde_json::{Value, json};

    use super::*;

    fn dispatcher(descriptor: ModuleDescriptor) -> ConverterDispatcher {
        let mut builder = ModuleRegistry::builder();
        builder.register(descriptor);
        ConverterDispatcher::new(Arc::new(builder.build()))
    }

    #[test]
    fn test_converts_to_canonical_json() {
        let outcome = dispatcher(descriptor()).dispatch(MODULE_KEY, "A -> B : uses\nC");
        let json: Value = serde_json::from_str(&outcome.into_json().unwrap()).unwrap();
        assert_eq!(
            json,
            json!({
                "vertices": [
                    {"id": 0, "name": "A"},
                    {"id": 1, "name": "B"},
                    {"id": 2, "name": "C"}
                ],
                "edges": [
                    {"id": 0, "from": 0, "to": 1, "label": "uses"}
                ]
            })
        );
    }

    #[test]
    fn test_arrow_comes_from_namespace() {
        let custom = ModuleDescriptor::of::<EdgeListModule>(MODULE_KEY, "Edge list")
            .with_namespace(Namespace::new("custom").with_symbol(ARROW_SYMBOL, "=>".to_string()));
        let outcome = dispatcher(custom).dispatch(MODULE_KEY, "A => B");
        let json: Value = serde_json::from_str(&outcome.into_json().unwrap()).unwrap();
        assert_eq!(json["edges"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_blank_arrow_falls_back_to_default() {
        let blank = ModuleDescriptor::of::<EdgeListModule>(MODULE_KEY, "Edge list")
            .with_namespace(Namespace::new("blank").with_symbol(ARROW_SYMBOL, String::new()));
        let outcome = dispatcher(blank).dispatch(MODULE_KEY, "A -> B");
        let json: Value = serde_json::from_str(&outcome.into_json().unwrap()).unwrap();
        assert_eq!(json["vertices"].as_array().unwrap().len(), 2);
        assert_eq!(json["edges"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_input_is_invocation_failure() {
        let outcome = dispatcher(descriptor()).dispatch(MODULE_KEY, "A -> B -> C");
        assert_eq!(outcome.failure_kind(), Some(FailureKind::InvocationFailed));
    }
}
