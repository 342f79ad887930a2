//! Canonical graph representation.

use std::collections::HashMap;

use serde::Serialize;

/// A graph vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vertex {
    /// Sequential id.
    pub id: usize,
    /// Vertex name as written.
    pub name: String,
}

/// A directed edge between two vertex ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Sequential id.
    pub id: usize,
    /// Source vertex id.
    pub from: usize,
    /// Target vertex id.
    pub to: usize,
    /// Optional edge label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Canonical graph: vertices and edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    /// Vertices in order of first appearance.
    pub vertices: Vec<Vertex>,
    /// Edges in input order.
    pub edges: Vec<Edge>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Graph {
    /// Returns the id of `name`, adding the vertex if it is new.
    pub fn vertex(&mut self, name: &str) -> usize {
        if let Some(id) = self.index.get(name) {
            return *id;
        }
        let id = self.vertices.len();
        self.vertices.push(Vertex {
            id,
            name: name.to_string(),
        });
        self.index.insert(name.to_string(), id);
        id
    }

    /// Appends an edge, adding its endpoints if needed.
    pub fn edge(&mut self, from: &str, to: &str, label: Option<&str>) {
        let from = self.vertex(from);
        let to = self.vertex(to);
        self.edges.push(Edge {
            id: self.edges.len(),
            from,
            to,
            label: label.map(str::to_string),
        });
    }
}
