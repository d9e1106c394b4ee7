use crate::graph::DirectedGraph;
use rand::prelude::*;

/// Generates a random directed graph with roughly `edge_factor * n` edges.
///
/// Weights are drawn uniformly from `0..=max_weight`, so zero-weight edges
/// appear. Self-loops and parallel edges are allowed.
pub fn generate_random<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: u64,
    rng: &mut R,
) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::with_vertices(n);
    if n == 0 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = rng.gen_range(0..=max_weight);
        // Endpoints are in range and weights unsigned, so this cannot fail
        let _ = graph.add_edge(u, v, weight);
    }

    graph
}

/// Generates a `width * height` grid with unit-weight edges to the four
/// cardinal neighbors. Vertex `(x, y)` has index `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::with_vertices(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                let _ = graph.add_edge(vertex, vertex + 1, 1);
                let _ = graph.add_edge(vertex + 1, vertex, 1);
            }
            if y + 1 < height {
                let _ = graph.add_edge(vertex, vertex + width, 1);
                let _ = graph.add_edge(vertex + width, vertex, 1);
            }
        }
    }

    graph
}
