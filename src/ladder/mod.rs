//! Shortest word ladders over a dictionary.
//!
//! Words are nodes of an implicit graph; two words share an edge when their
//! Levenshtein distance is exactly one. [`WordLadder`] searches that graph
//! breadth-first, so the first ladder it finds has the fewest words.

pub mod adjacency;
pub mod dictionary;
pub mod search;

pub use adjacency::{edit_distance, edit_distance_within, fold, is_adjacent};
pub use dictionary::Dictionary;
pub use search::{generate_ladder, LadderConfig, LadderPath, NeighborStrategy, WordLadder};
