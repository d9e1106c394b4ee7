//! Word Paths - shortest paths over weighted digraphs and word ladders
//!
//! Two independent search engines live here:
//!
//! * [`Dijkstra`] computes single-source shortest distances and predecessor
//!   links over a directed graph with non-negative integer weights.
//! * [`WordLadder`] finds a shortest sequence of dictionary words connecting a
//!   start and goal word, where consecutive words are one edit apart.
//!
//! Neither engine performs I/O. Graphs and dictionaries are built up front
//! (see [`graph::loader`] and [`Dictionary`]) and are never mutated by a query.

use std::time::Duration;

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod ladder;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use ladder::{is_adjacent, Dictionary, LadderPath, NeighborStrategy, WordLadder};

/// Which search bound stopped a word ladder search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBound {
    /// The next BFS level would exceed the configured ladder length
    LadderLength(usize),
    /// The configured time budget elapsed
    Time(Duration),
}

impl std::fmt::Display for SearchBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchBound::LadderLength(max) => write!(f, "ladder length limit of {} words", max),
            SearchBound::Time(limit) => write!(f, "time limit of {:?}", limit),
        }
    }
}

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid source vertex: {0}")]
    InvalidSource(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(String),

    #[error("Goal word '{0}' is not in the dictionary")]
    GoalNotInDictionary(String),

    #[error("Search exhausted its {bound} after visiting {visited} words")]
    SearchExhausted { bound: SearchBound, visited: usize },

    #[error("No word ladder exists from '{start}' to '{goal}'")]
    NoLadderExists { start: String, goal: String },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
