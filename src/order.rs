//! Vertex reordering: degree-descending permutation used to build the
//! bit-graph in search-friendly coordinates.
//!
//! Sorting key: primary `-degree(v)` ascending (higher degree first);
//! tie-break: lower original id first. This reproduces the reference
//! solver's `true ^ (a < b || (a == b && ...))` comparator idiom — the
//! natural idiomatic spelling of the same total order is a key of
//! `(Reverse(degree), id)` sorted ascending.

use std::cmp::Reverse;

use crate::dimacs::Graph;

/// A vertex permutation: `order[i]` is the original id placed at internal
/// rank `i`; `invorder[u]` is the internal rank of original id `u`.
/// Invariant: `order[invorder[u]] == u` for every `u`.
#[derive(Debug, Clone)]
pub struct Order {
    order: Vec<usize>,
    invorder: Vec<usize>,
}

impl Order {
    /// Computes the degree-descending, id-ascending-tie-break order for
    /// `graph`.
    pub fn compute(graph: &Graph) -> Self {
        let n = graph.size();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by_key(|&v| (Reverse(graph.neighbors(v).len()), v));

        let mut invorder = vec![0usize; n];
        for (rank, &original) in order.iter().enumerate() {
            invorder[original] = rank;
        }

        Self { order, invorder }
    }

    /// Original vertex id placed at internal rank `i`.
    pub fn original_of(&self, rank: usize) -> usize {
        self.order[rank]
    }

    /// Internal rank of original vertex id `u`.
    pub fn rank_of(&self, u: usize) -> usize {
        self.invorder[u]
    }

    /// Translates a set of internal ranks back to original vertex ids.
    pub fn translate_to_original(&self, ranks: &[usize]) -> Vec<usize> {
        ranks.iter().map(|&r| self.original_of(r)).collect()
    }
}
