//! Line parser for the edge-list format.

use crate::error::ParseError;
use crate::graph::Graph;

const COMMENT: char = '#';
const LABEL_SEPARATOR: char = ':';

/// Parses edge-list text into a graph, using `arrow` as the edge token.
pub fn parse(input: &str, arrow: &str) -> Result<Graph, ParseError> {
    let mut graph = Graph::default();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let statement = raw.trim();
        if statement.is_empty() || statement.starts_with(COMMENT) {
            continue;
        }

        let Some((source, rest)) = statement.split_once(arrow) else {
            if statement.contains(LABEL_SEPARATOR) {
                return Err(ParseError::LabelWithoutEdge { line });
            }
            graph.vertex(statement);
            continue;
        };

        if rest.contains(arrow) {
            return Err(ParseError::ChainedEdge { line });
        }

        let (target, label) = match rest.split_once(LABEL_SEPARATOR) {
            Some((target, label)) => (target.trim(), Some(label.trim()).filter(|l| !l.is_empty())),
            None => (rest.trim(), None),
        };
        let source = source.trim();

        if source.is_empty() {
            return Err(ParseError::MissingEndpoint { line, side: "source" });
        }
        if target.is_empty() {
            return Err(ParseError::MissingEndpoint { line, side: "target" });
        }

        graph.edge(source, target, label);
    }

    if graph.vertices.is_empty() {
        return Err(ParseError::Empty);
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_and_edges() {
        let graph = parse("A\nA -> B\nB -> C : calls\n", "->").unwrap();
        let names: Vec<&str> = graph.vertices.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(graph.edges.len(), 2);
        assert_eq!(graph.edges[1].from, 1);
        assert_eq!(graph.edges[1].to, 2);
        assert_eq!(graph.edges[1].label.as_deref(), Some("calls"));
    }

    #[test]
    fn test_comments_and_blank_lines_ignored() {
        let graph = parse("# header\n\n   \nX -> Y\n", "->").unwrap();
        assert_eq!(graph.vertices.len(), 2);
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn test_self_loop_reuses_vertex() {
        let graph = parse("A -> A", "->").unwrap();
        assert_eq!(graph.vertices.len(), 1);
        assert_eq!(graph.edges[0].from, graph.edges[0].to);
    }

    #[test]
    fn test_custom_arrow() {
        let graph = parse("A => B", "=>").unwrap();
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        assert_eq!(
            parse("A -> B\n -> C", "->"),
            Err(ParseError::MissingEndpoint { line: 2, side: "source" })
        );
        assert_eq!(
            parse("A ->", "->"),
            Err(ParseError::MissingEndpoint { line: 1, side: "target" })
        );
        assert_eq!(
            parse("A -> B -> C", "->"),
            Err(ParseError::ChainedEdge { line: 1 })
        );
        assert_eq!(
            parse("A : orphan", "->"),
            Err(ParseError::LabelWithoutEdge { line: 1 })
        );
        assert_eq!(parse("# nothing\n", "->"), Err(ParseError::Empty));
    }
}
