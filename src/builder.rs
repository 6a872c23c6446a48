//! Accumulation of weighted edges before a [`StaticTree`] is built.
//!
//! The [`TreeBuilder`] is the only mutable stage of the crate. It stores an
//! undirected adjacency list and hands out immutable [`StaticTree`]s via
//! [`TreeBuilder::build`]. Building never modifies the stored edges, so the
//! same builder may be rooted at different nodes.
//!
//! [`StaticTree`]: crate::tree::StaticTree

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tree::StaticTree;
use crate::{NodeIndex, Weight};

/// A weighted half-edge stored in a node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Edge<W> {
    /// The node at the other end of the edge.
    pub node: NodeIndex,
    /// The weight of the edge.
    pub weight: W,
}

impl<W> Edge<W> {
    /// Creates a new half-edge towards `node`.
    #[inline]
    pub fn new(node: NodeIndex, weight: W) -> Self {
        Self { node, weight }
    }
}

/// Undirected adjacency store for a forest with a fixed number of nodes.
///
/// # Example
///
/// ```
/// use statictree::{NodeIndex, TreeBuilder};
///
/// let n = NodeIndex::new;
/// let mut builder = TreeBuilder::new(3);
/// builder.add_edge(n(0), n(1), 5i64).unwrap();
/// builder.add_edge(n(1), n(2), 2).unwrap();
///
/// let tree = builder.build(Some(n(0))).unwrap();
/// assert_eq!(tree.weighted_dist(n(0), n(2)), Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct TreeBuilder<W> {
    adjacency: Vec<Vec<Edge<W>>>,
    edge_count: usize,
}

impl<W: Weight> TreeBuilder<W> {
    /// Creates a builder for `node_count` isolated nodes.
    ///
    /// # Panics
    ///
    /// Panics if `node_count` exceeds the number of representable
    /// [`NodeIndex`]es.
    pub fn new(node_count: usize) -> Self {
        assert!(
            node_count <= NodeIndex::MAX + 1,
            "cannot allocate {node_count} nodes"
        );
        Self {
            adjacency: vec![Vec::new(); node_count],
            edge_count: 0,
        }
    }

    /// Creates a builder from prebuilt adjacency lists.
    ///
    /// Every edge must appear in both of its endpoints' lists, with the same
    /// weight. The lists are validated when the tree is built, see
    /// [`TreeError::AsymmetricEdge`].
    ///
    /// # Panics
    ///
    /// Panics if the number of lists exceeds the number of representable
    /// [`NodeIndex`]es.
    pub fn from_adjacency(adjacency: Vec<Vec<Edge<W>>>) -> Self {
        assert!(
            adjacency.len() <= NodeIndex::MAX + 1,
            "cannot allocate {} nodes",
            adjacency.len()
        );
        let half_edges: usize = adjacency.iter().map(Vec::len).sum();
        Self {
            adjacency,
            edge_count: half_edges / 2,
        }
    }

    /// Forgets every edge and resizes the builder to `node_count` nodes.
    ///
    /// # Panics
    ///
    /// Panics if `node_count` exceeds the number of representable
    /// [`NodeIndex`]es.
    pub fn init(&mut self, node_count: usize) {
        *self = Self::new(node_count);
    }

    /// Adds an undirected edge between `a` and `b`.
    ///
    /// Duplicate edges and self-loops are not rejected here; they surface as
    /// [`TreeError::Cycle`] when building.
    ///
    /// # Errors
    ///
    ///  - When either endpoint is not a node of the builder.
    ///  - When the weight is negative.
    pub fn add_edge(&mut self, a: NodeIndex, b: NodeIndex, weight: W) -> Result<(), TreeError> {
        self.check_node(a)?;
        self.check_node(b)?;
        if weight.is_negative() {
            return Err(TreeError::NegativeWeight { a, b });
        }
        self.adjacency[a.index()].push(Edge::new(b, weight));
        self.adjacency[b.index()].push(Edge::new(a, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges added so far.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the half-edges incident to `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    #[inline]
    pub fn neighbours(&self, node: NodeIndex) -> &[Edge<W>] {
        &self.adjacency[node.index()]
    }

    /// Returns an iterator over all nodes of the builder.
    pub fn nodes_iter(&self) -> impl ExactSizeIterator<Item = NodeIndex> + Clone {
        (0..self.node_count()).map(NodeIndex::new)
    }

    /// Roots every component and precomputes the query structures.
    ///
    /// If `root` is given it becomes the root of its component, and that
    /// component is laid out first. Every other component is rooted at its
    /// smallest node.
    ///
    /// # Errors
    ///
    ///  - When `root` or an endpoint stored in the adjacency is out of range.
    ///  - When a stored weight is negative.
    ///  - When a half-edge stored in the adjacency has no mirror.
    ///  - When the edges do not form a forest.
    ///
    /// Complexity: O(n log n)
    pub fn build(&self, root: Option<NodeIndex>) -> Result<StaticTree<W>, TreeError> {
        if let Some(root) = root {
            self.check_node(root)?;
        }
        StaticTree::new(&self.adjacency, root)
    }

    fn check_node(&self, node: NodeIndex) -> Result<(), TreeError> {
        if node.index() < self.node_count() {
            Ok(())
        } else {
            Err(TreeError::NodeOutOfRange {
                node,
                count: self.node_count(),
            })
        }
    }
}

impl<W: Weight> Default for TreeBuilder<W> {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Error generated when adding edges or building a [`StaticTree`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TreeError {
    /// The node is not part of the builder.
    #[error("node {node:?} is out of range for a tree with {count} nodes")]
    NodeOutOfRange {
        /// The offending node.
        node: NodeIndex,
        /// The number of nodes in the builder.
        count: usize,
    },
    /// The edge has a negative weight.
    #[error("edge between {a:?} and {b:?} has a negative weight")]
    NegativeWeight {
        /// First endpoint.
        a: NodeIndex,
        /// Second endpoint.
        b: NodeIndex,
    },
    /// A half-edge from `from` to `to` has no matching half-edge of the same
    /// weight from `to` back to `from`.
    #[error("edge from {from:?} to {to:?} is missing its reverse half-edge")]
    AsymmetricEdge {
        /// Node whose list holds the unmatched half-edge.
        from: NodeIndex,
        /// The other endpoint.
        to: NodeIndex,
    },
    /// The edges contain a cycle, a self-loop, or a duplicate edge.
    #[error("the edges do not form a forest, a cycle passes through {node:?}")]
    Cycle {
        /// A node on the cycle.
        node: NodeIndex,
    },
}
