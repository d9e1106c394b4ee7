use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority frontier for shortest path relaxation
///
/// The same item may be pushed several times under different priorities;
/// nothing is deduplicated. Callers discard superseded entries on pop.
/// Ties on priority pop the smaller item first.
#[derive(Debug)]
pub struct MinFrontier<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
    /// Total pushes since creation, including superseded duplicates
    pushes: usize,
}

impl<V, P> MinFrontier<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        MinFrontier {
            heap: BinaryHeap::new(),
            pushes: 0,
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of pending entries, duplicates included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns how many entries have ever been pushed
    pub fn total_pushes(&self) -> usize {
        self.pushes
    }

    /// Pushes an item with the given priority
    pub fn push(&mut self, item: V, priority: P) {
        self.pushes += 1;
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, item))| (item, priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap.peek().map(|Reverse((priority, item))| (*item, *priority))
    }
}

impl<V, P> Default for MinFrontier<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
