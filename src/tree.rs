//! The immutable, preprocessed tree index.
//!
//! A [`StaticTree`] is produced by [`TreeBuilder::build`]. Building roots every
//! component, reorders children heaviest-first, lays the forest out as an
//! Euler tour and prepares a sparse table over the tour depths. The query
//! operations are defined in the [`algorithms`] module.
//!
//! [`TreeBuilder::build`]: crate::TreeBuilder::build
//! [`algorithms`]: crate::algorithms

mod rooting;
mod tour;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::builder::{Edge, TreeError};
use crate::node_map::NodeMap;
use crate::rmq::SparseTable;
use crate::{NodeIndex, Weight};

use rooting::{Children, Rooting};
use tour::Tour;

/// A rooted forest with precomputed ancestor and tour data.
///
/// All queries take `&self`; once built the structure never changes, so it
/// can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct StaticTree<W> {
    parent: NodeMap<Option<NodeIndex>>,
    depth: NodeMap<usize>,
    weighted_depth: NodeMap<W>,
    parent_weight: NodeMap<W>,
    subtree_size: NodeMap<usize>,
    children: NodeMap<Children>,
    roots: Vec<NodeIndex>,
    tour_start: NodeMap<usize>,
    tour_end: NodeMap<usize>,
    preorder: NodeMap<usize>,
    postorder: NodeMap<usize>,
    heavy_root: NodeMap<NodeIndex>,
    euler: Vec<Option<NodeIndex>>,
    /// Minimum queries over the depth of each tour position.
    rmq: SparseTable<Option<usize>>,
}

impl<W: Weight> StaticTree<W> {
    pub(crate) fn new(adjacency: &[Vec<Edge<W>>], root: Option<NodeIndex>) -> Result<Self, TreeError> {
        let rooting = Rooting::new(adjacency, root)?;
        let tour = Tour::new(&rooting);
        let Rooting {
            parent,
            depth,
            weighted_depth,
            parent_weight,
            subtree_size,
            children,
            roots,
        } = rooting;
        let Tour {
            euler,
            depths,
            tour_start,
            tour_end,
            preorder,
            postorder,
            heavy_root,
        } = tour;

        tracing::debug!(
            nodes = adjacency.len(),
            components = roots.len(),
            "built static tree"
        );

        Ok(Self {
            parent,
            depth,
            weighted_depth,
            parent_weight,
            subtree_size,
            children,
            roots,
            tour_start,
            tour_end,
            preorder,
            postorder,
            heavy_root,
            euler,
            rmq: SparseTable::min(depths),
        })
    }
}

impl<W> StaticTree<W> {
    /// Returns the number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if `node` is a node of this tree.
    #[inline]
    pub fn contains_node(&self, node: NodeIndex) -> bool {
        node.index() < self.node_count()
    }

    /// Returns an iterator over all nodes.
    pub fn nodes_iter(&self) -> impl ExactSizeIterator<Item = NodeIndex> + Clone {
        (0..self.node_count()).map(NodeIndex::new)
    }

    /// Returns the number of connected components.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.roots.len()
    }

    /// Returns the root of every component, in tour order.
    ///
    /// If a root was requested when building, it comes first.
    #[inline]
    pub fn roots(&self) -> &[NodeIndex] {
        &self.roots
    }

    /// Returns `true` if the node is the root of its component.
    #[inline]
    pub fn is_root(&self, node: NodeIndex) -> bool {
        self.parent[node].is_none()
    }

    /// Returns the parent of a node, or `None` for roots.
    #[inline]
    pub fn parent(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.parent[node]
    }

    /// Returns the children of a node, the child with the largest subtree
    /// first.
    ///
    /// The order among children with equal subtree sizes is unspecified.
    #[inline]
    pub fn children(&self, node: NodeIndex) -> &[NodeIndex] {
        &self.children[node]
    }

    /// Returns the number of edges incident to a node.
    #[inline]
    pub fn degree(&self, node: NodeIndex) -> usize {
        self.children[node].len() + usize::from(self.parent[node].is_some())
    }

    /// Returns the number of edges between a node and its component's root.
    #[inline]
    pub fn depth(&self, node: NodeIndex) -> usize {
        self.depth[node]
    }

    /// Returns the number of nodes in the subtree rooted at `node`.
    #[inline]
    pub fn subtree_size(&self, node: NodeIndex) -> usize {
        self.subtree_size[node]
    }

    /// Returns the position of the node's first occurrence in the Euler tour.
    #[inline]
    pub fn tour_start(&self, node: NodeIndex) -> usize {
        self.tour_start[node]
    }

    /// Returns the position just past the node's last occurrence in the Euler
    /// tour.
    ///
    /// The subtree of `node` occupies exactly `tour_start(node)..tour_end(node)`.
    #[inline]
    pub fn tour_end(&self, node: NodeIndex) -> usize {
        self.tour_end[node]
    }

    /// Returns the position of the node's first occurrence in the Euler tour.
    ///
    /// Same as [`StaticTree::tour_start`].
    #[inline]
    pub fn first_occurrence(&self, node: NodeIndex) -> usize {
        self.tour_start[node]
    }

    /// Returns the rank of the node in a preorder traversal of the forest.
    #[inline]
    pub fn preorder_rank(&self, node: NodeIndex) -> usize {
        self.preorder[node]
    }

    /// Returns the rank of the node in a postorder traversal of the forest.
    #[inline]
    pub fn postorder_rank(&self, node: NodeIndex) -> usize {
        self.postorder[node]
    }

    /// Returns the topmost node of the heavy path containing `node`.
    #[inline]
    pub fn heavy_root(&self, node: NodeIndex) -> NodeIndex {
        self.heavy_root[node]
    }

    /// Returns the Euler tour.
    ///
    /// Each node appears once on entry and once after returning from each of
    /// its children; `None` terminates each component. The tour has exactly
    /// `2 * node_count()` entries.
    #[inline]
    pub fn euler_tour(&self) -> &[Option<NodeIndex>] {
        &self.euler
    }

    /// Minimum queries over the depths of the Euler tour positions.
    #[inline]
    pub(crate) fn tour_rmq(&self) -> &SparseTable<Option<usize>> {
        &self.rmq
    }

    /// Iterates the nodes in preorder.
    pub fn preorder(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.euler
            .iter()
            .enumerate()
            .filter_map(|(position, &node)| node.filter(|&v| self.tour_start[v] == position))
    }
}

impl<W: Weight> StaticTree<W> {
    /// Returns the sum of edge weights between a node and its component's
    /// root.
    #[inline]
    pub fn weighted_depth(&self, node: NodeIndex) -> W {
        self.weighted_depth[node]
    }

    /// Returns the weight of the edge to the node's parent, zero for roots.
    #[inline]
    pub fn parent_weight(&self, node: NodeIndex) -> W {
        self.parent_weight[node]
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::TreeBuilder;
    use rstest::{fixture, rstest};

    #[cfg(feature = "serde")]
    pub fn ser_roundtrip<T: Serialize + serde::de::DeserializeOwned>(value: &T) -> T {
        let v = rmp_serde::to_vec_named(value).unwrap();
        rmp_serde::from_slice(&v[..]).unwrap()
    }

    fn n(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    /// 0 -> {1 -> {3, 4}, 2}, 5 -> 6, and an isolated 7.
    #[fixture]
    fn forest() -> StaticTree<i64> {
        let mut builder = TreeBuilder::new(8);
        for (a, b, w) in [(0, 1, 2), (0, 2, 7), (1, 3, 1), (4, 1, 5), (5, 6, 3)] {
            builder.add_edge(n(a), n(b), w).unwrap();
        }
        builder.build(None).unwrap()
    }

    #[rstest]
    fn structure(forest: StaticTree<i64>) {
        assert_eq!(forest.node_count(), 8);
        assert_eq!(forest.component_count(), 3);
        assert_eq!(forest.roots(), &[n(0), n(5), n(7)]);
        assert!(forest.is_root(n(5)));
        assert!(!forest.is_root(n(6)));

        assert_eq!(forest.parent(n(4)), Some(n(1)));
        assert_eq!(forest.children(n(0)), &[n(1), n(2)]);
        assert_eq!(forest.degree(n(1)), 3);
        assert_eq!(forest.degree(n(7)), 0);
        assert_eq!(forest.depth(n(4)), 2);
        assert_eq!(forest.weighted_depth(n(4)), 7);
        assert_eq!(forest.parent_weight(n(2)), 7);
        assert_eq!(forest.parent_weight(n(0)), 0);
        assert_eq!(forest.subtree_size(n(1)), 3);
        assert_eq!(forest.heavy_root(n(3)), n(0));
        assert_eq!(forest.heavy_root(n(4)), n(4));
        assert!(forest.contains_node(n(7)));
        assert!(!forest.contains_node(n(8)));
    }

    #[rstest]
    fn tour_invariants(forest: StaticTree<i64>) {
        assert_eq!(forest.euler_tour().len(), 2 * forest.node_count());
        for node in forest.nodes_iter() {
            assert!(forest.tour_start(node) < forest.tour_end(node));
            assert_eq!(
                forest.tour_end(node),
                forest.tour_start(node) + 2 * forest.subtree_size(node) - 1
            );
            assert_eq!(forest.first_occurrence(node), forest.tour_start(node));
            assert_eq!(forest.euler_tour()[forest.tour_start(node)], Some(node));
        }
        assert_eq!(forest.euler_tour().iter().filter(|v| v.is_none()).count(), 3);
    }

    #[rstest]
    fn traversal_orders(forest: StaticTree<i64>) {
        let preorder: Vec<_> = forest.preorder().map(NodeIndex::index).collect();
        assert_eq!(preorder, vec![0, 1, 3, 4, 2, 5, 6, 7]);
        for (rank, &node) in preorder.iter().enumerate() {
            assert_eq!(forest.preorder_rank(n(node)), rank);
        }
        let mut postorder: Vec<_> = forest.nodes_iter().collect();
        postorder.sort_by_key(|&v| forest.postorder_rank(v));
        assert_eq!(
            postorder.into_iter().map(NodeIndex::index).collect::<Vec<_>>(),
            vec![3, 4, 1, 2, 0, 6, 5, 7]
        );
    }

    #[test]
    fn empty_tree() {
        let tree = TreeBuilder::<i32>::new(0).build(None).unwrap();
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.component_count(), 0);
        assert!(tree.euler_tour().is_empty());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialization(forest: StaticTree<i64>) {
        let tree = ser_roundtrip(&forest);
        assert_eq!(tree, forest);
        assert_eq!(tree.lca(n(3), n(2)), Some(n(0)));
        assert_eq!(tree.weighted_dist(n(3), n(4)), Some(6));

        let empty = TreeBuilder::<i32>::new(0).build(None).unwrap();
        assert_eq!(ser_roundtrip(&empty), empty);
    }
}
