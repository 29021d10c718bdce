//! Per-run search state.

use std::cmp::Ordering;

use crate::grid::NodeId;
use crate::heap::HeapStore;

/// Search bookkeeping for one cell during one run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct SearchNode {
    pub g_cost: u32, // Cost from start
    pub h_cost: u32, // Estimate to target
    pub parent: Option<NodeId>,
    pub heap_index: Option<usize>,
    pub closed: bool,
}

impl SearchNode {
    #[inline]
    pub fn f_cost(&self) -> u32 {
        self.g_cost + self.h_cost
    }
}

/// Search records for every cell of a grid, indexed by [`NodeId`].
///
/// Allocated fresh for each run, so nothing carries over between searches.
pub(super) struct SearchSpace {
    nodes: Vec<SearchNode>,
}

impl SearchSpace {
    pub fn new(cell_count: usize) -> Self {
        Self {
            nodes: vec![SearchNode::default(); cell_count],
        }
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl HeapStore<NodeId> for SearchSpace {
    #[inline]
    fn heap_index(&self, item: NodeId) -> Option<usize> {
        self.nodes[item].heap_index
    }

    #[inline]
    fn set_heap_index(&mut self, item: NodeId, index: Option<usize>) {
        self.nodes[item].heap_index = index;
    }

    /// Lower f first, then lower h
    #[inline]
    fn compare(&self, a: NodeId, b: NodeId) -> Ordering {
        let (a, b) = (&self.nodes[a], &self.nodes[b]);
        a.f_cost()
            .cmp(&b.f_cost())
            .then_with(|| a.h_cost.cmp(&b.h_cost))
    }
}
