use std::ops::AddAssign;

use serde::Serialize;

/// Work done by a search engine. Diagnostic only: it never influences results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SearchStats {
    pub nodes_visited: u64,
    pub leaf_nodes_evaluated: u64,
    pub cutoffs: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes_visited += rhs.nodes_visited;
        self.leaf_nodes_evaluated += rhs.leaf_nodes_evaluated;
        self.cutoffs += rhs.cutoffs;
    }
}
