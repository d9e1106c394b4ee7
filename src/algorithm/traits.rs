use log::warn;
use serde::Serialize;

use crate::graph::{Graph, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex; `W::infinity()` marks unreachable vertices
    pub distances: Vec<W>,

    /// Predecessor vertices in the shortest path tree; `None` for the source and unreached vertices
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Returns the shortest distance to `vertex`, or `None` if it is unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|distance| !distance.is_infinite())
    }

    /// Returns true if `vertex` can be reached from the source
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| !d.is_infinite()).count()
    }

    /// Walks predecessor links back from `destination` and returns the
    /// vertices in source-to-destination order.
    ///
    /// Returns an empty path if `destination` is unreachable or out of range.
    pub fn extract_path(&self, destination: usize) -> Vec<usize> {
        if !self.is_reachable(destination) {
            return Vec::new();
        }

        let mut path = Vec::new();
        let mut current = Some(destination);
        while let Some(vertex) = current {
            path.push(vertex);
            // A well-formed predecessor table is a tree rooted at the source
            if path.len() > self.predecessors.len() {
                warn!("Predecessor cycle detected while extracting path to {}", destination);
                return Vec::new();
            }
            current = self.predecessors[vertex];
        }

        path.reverse();
        path
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Vec<usize> {
        result.extract_path(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ShortestPathResult<u32> {
        // 0 -> 2 -> 1, vertex 3 unreachable
        ShortestPathResult {
            distances: vec![0, 5, 2, u32::MAX],
            predecessors: vec![None, Some(2), Some(0), None],
            source: 0,
        }
    }

    #[test]
    fn extracts_path_in_source_order() {
        assert_eq!(sample().extract_path(1), vec![0, 2, 1]);
        assert_eq!(sample().extract_path(0), vec![0]);
    }

    #[test]
    fn unreachable_or_unknown_vertices_give_empty_paths() {
        let result = sample();
        assert!(result.extract_path(3).is_empty());
        assert!(result.extract_path(42).is_empty());
        assert_eq!(result.distance(3), None);
        assert_eq!(result.reachable_count(), 3);
    }

    #[test]
    fn predecessor_cycle_is_not_followed_forever() {
        let result = ShortestPathResult {
            distances: vec![0u32, 1, 1],
            predecessors: vec![None, Some(2), Some(1)],
            source: 0,
        };
        assert!(result.extract_path(1).is_empty());
    }
}
