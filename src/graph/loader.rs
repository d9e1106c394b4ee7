//! Text loader for edge-list graph files.
//!
//! The format is a vertex count followed by whitespace-separated
//! `source destination weight` triples:
//!
//! ```text
//! 4
//! 0 1 5
//! 0 2 3
//! 2 1 1
//! 1 3 2
//! ```
//!
//! Line breaks are not significant beyond error reporting.

use std::fs;
use std::path::Path;

use log::debug;

use crate::graph::{DirectedGraph, Graph, Weight};
use crate::{Error, Result};

/// Reads and parses a graph file
pub fn load_graph<W, P>(path: P) -> Result<DirectedGraph<W>>
where
    W: Weight,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let graph = parse_graph(&text)?;
    debug!(
        "Loaded graph from {}: {} vertices, {} edges",
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Parses a graph from its textual edge-list form
pub fn parse_graph<W>(text: &str) -> Result<DirectedGraph<W>>
where
    W: Weight,
{
    let mut tokens = text
        .lines()
        .enumerate()
        .flat_map(|(index, line)| line.split_whitespace().map(move |token| (index + 1, token)));

    let (line, token) = tokens.next().ok_or(Error::Parse {
        line: 1,
        message: "missing vertex count".to_string(),
    })?;
    let vertices = parse_index(line, token, "vertex count")?;
    let mut graph = DirectedGraph::with_vertices(vertices);

    while let Some((line, token)) = tokens.next() {
        let from = parse_index(line, token, "source vertex")?;
        let (line, token) = tokens.next().ok_or_else(|| truncated(line))?;
        let to = parse_index(line, token, "destination vertex")?;
        let (line, token) = tokens.next().ok_or_else(|| truncated(line))?;
        let weight = W::from_str_radix(token, 10).map_err(|_| Error::Parse {
            line,
            message: format!("invalid weight '{}'", token),
        })?;

        graph.add_edge(from, to, weight).map_err(|err| Error::Parse {
            line,
            message: err.to_string(),
        })?;
    }

    Ok(graph)
}

fn parse_index(line: usize, token: &str, what: &str) -> Result<usize> {
    token.parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid {} '{}'", what, token),
    })
}

fn truncated(line: usize) -> Error {
    Error::Parse {
        line,
        message: "incomplete edge, expected 'source destination weight'".to_string(),
    }
}
