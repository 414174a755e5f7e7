//! Per-side record of nodes the walk has already descended through.

use indextree::NodeId;

/// Presence flags indexed by NodeId, for O(1) checks.
///
/// One registry per tree side per run; it only ever grows.
#[derive(Debug, Clone, Default)]
pub struct VisitedRegistry {
    seen: Vec<bool>,
    count: usize,
}

impl VisitedRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty registry sized for a tree of `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            // NodeIds are 1-based
            seen: vec![false; nodes + 1],
            count: 0,
        }
    }

    /// Mark `node` visited. Returns `false` if it already was.
    #[inline]
    pub fn mark(&mut self, node: NodeId) -> bool {
        let idx = usize::from(node);
        if idx >= self.seen.len() {
            self.seen.resize(idx + 1, false);
        }
        if self.seen[idx] {
            return false;
        }
        self.seen[idx] = true;
        self.count += 1;
        true
    }

    /// Whether `node` has been marked.
    #[inline(always)]
    pub fn contains(&self, node: NodeId) -> bool {
        self.seen.get(usize::from(node)).copied().unwrap_or(false)
    }

    /// Number of marked nodes.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether nothing has been marked.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
