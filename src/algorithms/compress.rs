//! Virtual trees: the minimal subtree spanning a set of nodes.

use itertools::Itertools;

use crate::tree::StaticTree;
use crate::NodeIndex;

impl<W> StaticTree<W> {
    /// Computes the minimal subtree connecting the given nodes.
    ///
    /// The result contains the given nodes and the lowest common ancestors
    /// needed to connect them, at most `2k - 1` nodes for `k` inputs, listed in
    /// tour order. Each node is paired with its parent in the compressed tree,
    /// which is its nearest ancestor among the returned nodes. The first node
    /// is the root of the compressed tree and has no parent; when the input
    /// spans several components, the first node of each component has no
    /// parent either.
    ///
    /// Duplicate inputs are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use statictree::{NodeIndex, TreeBuilder};
    ///
    /// let n = NodeIndex::new;
    /// let mut builder = TreeBuilder::new(5);
    /// // 0 -> {1 -> {2, 3}, 4}
    /// for (a, b) in [(0, 1), (1, 2), (1, 3), (0, 4)] {
    ///     builder.add_edge(n(a), n(b), 1i32).unwrap();
    /// }
    /// let tree = builder.build(Some(n(0))).unwrap();
    ///
    /// let compressed = tree.compress([n(3), n(2)]);
    /// assert_eq!(compressed, vec![(n(1), None), (n(2), Some(n(1))), (n(3), Some(n(1)))]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if any of the nodes is out of range.
    ///
    /// Complexity: O(k log k)
    pub fn compress(
        &self,
        nodes: impl IntoIterator<Item = NodeIndex>,
    ) -> Vec<(NodeIndex, Option<NodeIndex>)> {
        let mut nodes: Vec<NodeIndex> = nodes.into_iter().collect();
        nodes.sort_unstable_by_key(|&node| self.tour_start(node));

        // Consecutive pairs in tour order are enough to introduce every
        // branching node of the compressed tree.
        let mut ancestors: Vec<NodeIndex> = nodes
            .iter()
            .tuple_windows()
            .filter_map(|(&a, &b)| self.lca(a, b))
            .collect();
        ancestors.sort_unstable_by_key(|&node| self.tour_start(node));

        let mut previous = None;
        nodes
            .into_iter()
            .merge_by(ancestors, |&a, &b| self.tour_start(a) <= self.tour_start(b))
            .dedup()
            .map(|node| {
                let parent = previous.and_then(|prev| self.lca(prev, node));
                previous = Some(node);
                (node, parent)
            })
            .collect()
    }
}
