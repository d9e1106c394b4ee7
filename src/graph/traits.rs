use std::fmt::{Debug, Display};
use num_traits::PrimInt;

/// Edge weight type: any primitive integer.
///
/// `max_value()` doubles as the "infinite" distance sentinel, so no finite
/// path sum is ever allowed to reach it (relaxation saturates).
pub trait Weight: PrimInt + Debug + Display + Send + Sync + 'static {
    /// Sentinel distance for vertices that cannot be reached
    fn infinity() -> Self {
        Self::max_value()
    }

    /// Returns true if this value is the unreachable sentinel
    fn is_infinite(self) -> bool {
        self == Self::max_value()
    }
}

impl<T> Weight for T where T: PrimInt + Debug + Display + Send + Sync + 'static {}

/// Trait representing a read-only weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of the cheapest edge from `from` to `to`, if any
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }

    /// Sums the cheapest edge along each hop of `path`.
    ///
    /// Returns `None` if some hop has no edge. A single-vertex path costs zero.
    fn path_weight(&self, path: &[usize]) -> Option<W> {
        if path.is_empty() {
            return None;
        }
        path.windows(2).try_fold(W::zero(), |total, hop| {
            self.get_edge_weight(hop[0], hop[1])
                .map(|weight| total.saturating_add(weight))
        })
    }
}
