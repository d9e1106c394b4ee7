use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists
///
/// Vertices are `0..vertex_count`. Each vertex keeps its outgoing edges in
/// insertion order; parallel edges and self-loops are kept as given.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new directed graph with the specified number of vertices and no edges
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: vec![Vec::new(); vertices],
        }
    }

    /// Builds a graph from `(from, to, weight)` triples.
    ///
    /// Fails on the first edge that references a vertex outside
    /// `0..vertices` or carries a negative weight.
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_vertices(vertices);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Adds a directed edge. Only used while the graph is being built.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight(weight.to_string()));
        }

        self.outgoing_edges[from].push((to, weight));
        Ok(())
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_endpoints() {
        let mut graph: DirectedGraph<u32> = DirectedGraph::with_vertices(2);
        assert!(matches!(graph.add_edge(0, 2, 1), Err(Error::InvalidEdge(0, 2))));
        assert!(matches!(graph.add_edge(5, 1, 1), Err(Error::InvalidEdge(5, 1))));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn rejects_negative_weights() {
        let result = DirectedGraph::<i64>::from_edges(3, vec![(0, 1, 4), (1, 2, -1)]);
        assert!(matches!(result, Err(Error::NegativeWeight(ref w)) if w == "-1"));
    }

    #[test]
    fn cheapest_parallel_edge_wins() {
        let graph = DirectedGraph::<u32>::from_edges(2, vec![(0, 1, 9), (0, 1, 3), (0, 1, 5)]).unwrap();
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.get_edge_weight(0, 1), Some(3));
        assert_eq!(graph.get_edge_weight(1, 0), None);
        assert_eq!(graph.path_weight(&[0, 1]), Some(3));
        assert_eq!(graph.path_weight(&[1, 0]), None);
        assert_eq!(graph.path_weight(&[1]), Some(0));
    }
}
