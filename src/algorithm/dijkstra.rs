use log::{debug, trace};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinFrontier;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Uses lazy deletion: an improved vertex is pushed again under its new
/// distance and the stale entry is skipped once the vertex is finalized.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidSource(source));
        }

        let n = graph.vertex_count();

        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut finalized = vec![false; n];

        distances[source] = W::zero();

        let mut frontier = MinFrontier::new();
        frontier.push(source, W::zero());

        while let Some((u, dist_u)) = frontier.pop() {
            if finalized[u] {
                trace!("Skipping stale entry for vertex {} at distance {}", u, dist_u);
                continue;
            }
            finalized[u] = true;

            for (v, weight) in graph.outgoing_edges(u) {
                let new_dist = dist_u.saturating_add(weight);
                if new_dist < distances[v] {
                    distances[v] = new_dist;
                    predecessors[v] = Some(u);
                    frontier.push(v, new_dist);
                }
            }
        }

        debug!(
            "Dijkstra from {}: {} of {} vertices finalized, {} frontier pushes",
            source,
            finalized.iter().filter(|&&done| done).count(),
            n,
            frontier.total_pushes()
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
