//! Lowest common ancestor and ancestor queries on a [`StaticTree`].
//!
//! The lowest common ancestor of `a` and `b` is the shallowest node of the
//! Euler tour between their first occurrences, found in constant time with
//! the sparse table built over the tour depths. Component separators carry a
//! depth below every node, so a query spanning two components lands on a
//! separator and reports `None`.
//!
//! Ancestor jumps follow heavy paths: the nodes of a heavy path have
//! consecutive first occurrences in the tour, so a jump within one path is a
//! single array lookup and any root-to-node path crosses `O(log n)` of them.

use crate::tree::StaticTree;
use crate::{NodeIndex, Weight};

impl<W> StaticTree<W> {
    /// Given two nodes, returns their lowest common ancestor.
    ///
    /// If the nodes are not in the same tree, returns `None`.
    ///
    /// # Panics
    ///
    /// Panics if either node is out of range.
    ///
    /// Complexity: O(1)
    pub fn lca(&self, a: NodeIndex, b: NodeIndex) -> Option<NodeIndex> {
        let mut first = self.first_occurrence(a);
        let mut second = self.first_occurrence(b);
        if first > second {
            std::mem::swap(&mut first, &mut second);
        }
        let position = self.tour_rmq().query_index(first..second + 1);
        self.euler_tour()[position]
    }

    /// Returns `true` if `a` is an ancestor of `b`.
    ///
    /// Every node is its own ancestor.
    ///
    /// Complexity: O(1)
    #[inline]
    pub fn is_ancestor(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.tour_start(a) <= self.tour_start(b) && self.tour_start(b) < self.tour_end(a)
    }

    /// Returns `true` if `x` lies on the path between `a` and `b`, endpoints
    /// included.
    ///
    /// Complexity: O(1)
    pub fn on_path(&self, x: NodeIndex, a: NodeIndex, b: NodeIndex) -> bool {
        (self.is_ancestor(x, a) || self.is_ancestor(x, b))
            && self.lca(a, b).is_some_and(|top| self.is_ancestor(top, x))
    }

    /// Returns the number of edges on the path between two nodes.
    ///
    /// If the nodes are not in the same tree, returns `None`.
    ///
    /// Complexity: O(1)
    pub fn dist(&self, a: NodeIndex, b: NodeIndex) -> Option<usize> {
        let top = self.lca(a, b)?;
        Some(self.depth(a) + self.depth(b) - 2 * self.depth(top))
    }

    /// Returns the root of the tree containing `node`.
    ///
    /// Complexity: O(log n)
    pub fn root(&self, node: NodeIndex) -> NodeIndex {
        let mut u = node;
        loop {
            let top = self.heavy_root(u);
            match self.parent(top) {
                Some(parent) => u = parent,
                None => return top,
            }
        }
    }

    /// Returns the ancestor `k` edges above `node`.
    ///
    /// `kth_ancestor(node, 0)` is `node` itself. If `k` exceeds the depth of
    /// the node, returns `None`.
    ///
    /// Complexity: O(log n)
    pub fn kth_ancestor(&self, node: NodeIndex, mut k: usize) -> Option<NodeIndex> {
        let mut u = node;
        loop {
            let top = self.heavy_root(u);
            let climb = self.depth(u) - self.depth(top);
            if k <= climb {
                // The heavy path from `top` to `u` is contiguous in the tour.
                return self.euler_tour()[self.tour_start(u) - k];
            }
            k -= climb + 1;
            u = self.parent(top)?;
        }
    }

    /// Returns the node `k` edges along the path from `a` towards `b`.
    ///
    /// Position `0` is `a` and position `dist(a, b)` is `b`. Returns `None`
    /// if the nodes are not in the same tree or if `k` is past the end of the
    /// path.
    ///
    /// Complexity: O(log n)
    pub fn kth_node_on_path(&self, a: NodeIndex, b: NodeIndex, k: usize) -> Option<NodeIndex> {
        let top = self.lca(a, b)?;
        let first_half = self.depth(a) - self.depth(top);
        let second_half = self.depth(b) - self.depth(top);
        if k > first_half + second_half {
            None
        } else if k < first_half {
            self.kth_ancestor(a, k)
        } else {
            self.kth_ancestor(b, first_half + second_half - k)
        }
    }

    /// Returns the node where the paths between three nodes meet.
    ///
    /// This is the deepest of the pairwise lowest common ancestors, and the
    /// node minimizing the sum of distances to all three. Returns `None`
    /// unless all three nodes are in the same tree.
    ///
    /// Complexity: O(1)
    pub fn common_node(&self, a: NodeIndex, b: NodeIndex, c: NodeIndex) -> Option<NodeIndex> {
        let x = self.lca(a, b)?;
        let y = self.lca(b, c)?;
        let z = self.lca(c, a)?;
        // Two of the pairwise ancestors always coincide and cancel out.
        Some(NodeIndex::new(x.index() ^ y.index() ^ z.index()))
    }

    /// Returns the child of `a` whose subtree contains `b`.
    ///
    /// Returns `None` unless `a` is a strict ancestor of `b`.
    ///
    /// Complexity: O(1)
    pub fn child_ancestor(&self, a: NodeIndex, b: NodeIndex) -> Option<NodeIndex> {
        if a == b || !self.is_ancestor(a, b) {
            return None;
        }
        // Ties resolve to the last occurrence of `a` before `b`, which is
        // directly followed by the child we are looking for.
        let position = self
            .tour_rmq()
            .query_index(self.first_occurrence(a)..self.first_occurrence(b) + 1);
        self.euler_tour()[position + 1]
    }
}

impl<W: Weight> StaticTree<W> {
    /// Returns the sum of edge weights on the path between two nodes.
    ///
    /// If the nodes are not in the same tree, returns `None`.
    ///
    /// Complexity: O(1)
    pub fn weighted_dist(&self, a: NodeIndex, b: NodeIndex) -> Option<W> {
        let top = self.lca(a, b)?;
        Some(self.weighted_depth(a) + self.weighted_depth(b) - self.weighted_depth(top).double())
    }
}
