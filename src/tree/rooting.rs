//! Orients an undirected forest away from its roots.

use std::cmp::Reverse;

use bitvec::vec::BitVec;
use smallvec::SmallVec;

use crate::builder::{Edge, TreeError};
use crate::node_map::NodeMap;
use crate::{NodeIndex, Weight};

/// Ordered child list of a node, heaviest subtree first.
pub(crate) type Children = SmallVec<[NodeIndex; 4]>;

/// Per-node results of the rooting pass.
#[derive(Debug, Clone)]
pub(crate) struct Rooting<W> {
    pub parent: NodeMap<Option<NodeIndex>>,
    pub depth: NodeMap<usize>,
    pub weighted_depth: NodeMap<W>,
    pub parent_weight: NodeMap<W>,
    pub subtree_size: NodeMap<usize>,
    pub children: NodeMap<Children>,
    /// Roots of each component, in discovery order.
    pub roots: Vec<NodeIndex>,
}

impl<W: Weight> Rooting<W> {
    /// Roots each component of the forest described by `adjacency`.
    ///
    /// The traversal keeps its own stack so that degenerate trees (long
    /// paths) do not overflow the call stack. The adjacency lists are only
    /// read; child lists are materialized separately once subtree sizes are
    /// known.
    pub fn new(adjacency: &[Vec<Edge<W>>], root: Option<NodeIndex>) -> Result<Self, TreeError> {
        check_edges(adjacency)?;
        let count = adjacency.len();
        let mut parent = NodeMap::from_elem(count, None);
        let mut depth = NodeMap::from_elem(count, 0);
        let mut weighted_depth = NodeMap::from_elem(count, W::zero());
        let mut parent_weight = NodeMap::from_elem(count, W::zero());
        let mut discovered: BitVec = BitVec::repeat(false, count);

        // Every node appears after its parent in `order`.
        let mut order = Vec::with_capacity(count);
        let mut roots = Vec::new();
        let mut stack = Vec::new();

        for start in root.into_iter().chain((0..count).map(NodeIndex::new)) {
            if discovered.replace(start.index(), true) {
                continue;
            }
            tracing::trace!(root = %start, "rooting component");
            roots.push(start);
            stack.push(start);

            while let Some(node) = stack.pop() {
                order.push(node);
                let mut skipped_parent_edge = false;
                for edge in &adjacency[node.index()] {
                    let child = edge.node;
                    if !skipped_parent_edge && parent[node] == Some(child) {
                        skipped_parent_edge = true;
                        continue;
                    }
                    if discovered.replace(child.index(), true) {
                        return Err(TreeError::Cycle { node: child });
                    }
                    parent[child] = Some(node);
                    depth[child] = depth[node] + 1;
                    weighted_depth[child] = weighted_depth[node] + edge.weight;
                    parent_weight[child] = edge.weight;
                    stack.push(child);
                }
            }
        }

        let mut subtree_size = NodeMap::from_elem(count, 1);
        for &node in order.iter().rev() {
            if let Some(p) = parent[node] {
                subtree_size[p] += subtree_size[node];
            }
        }

        let children = adjacency
            .iter()
            .enumerate()
            .map(|(index, edges)| {
                let node = NodeIndex::new(index);
                let mut children: Children = edges
                    .iter()
                    .map(|edge| edge.node)
                    .filter(|&child| parent[child] == Some(node))
                    .collect();
                // Stable, so equal-sized subtrees keep their adjacency order.
                children.sort_by_key(|&child| Reverse(subtree_size[child]));
                children
            })
            .collect();

        Ok(Self {
            parent,
            depth,
            weighted_depth,
            parent_weight,
            subtree_size,
            children,
            roots,
        })
    }
}

/// Checks that every half-edge is in range, non-negative, and mirrored by a
/// half-edge of the same weight in the other endpoint's list.
fn check_edges<W: Weight>(adjacency: &[Vec<Edge<W>>]) -> Result<(), TreeError> {
    let count = adjacency.len();
    let mut forward = Vec::new();
    let mut backward = Vec::new();
    for (index, edges) in adjacency.iter().enumerate() {
        let node = NodeIndex::new(index);
        for edge in edges {
            if edge.node.index() >= count {
                return Err(TreeError::NodeOutOfRange {
                    node: edge.node,
                    count,
                });
            }
            if edge.weight.is_negative() {
                return Err(TreeError::NegativeWeight { a: node, b: edge.node });
            }
            forward.push((node, edge.node, edge.weight));
            backward.push((edge.node, node, edge.weight));
        }
    }
    forward.sort_unstable();
    backward.sort_unstable();

    // At the first difference, the smaller entry has no mirror.
    match forward.iter().zip(&backward).find(|(f, b)| f != b) {
        None => Ok(()),
        Some((f, b)) if f < b => Err(TreeError::AsymmetricEdge { from: f.0, to: f.1 }),
        // `b` stands for a half-edge from `b.1` to `b.0`.
        Some((_, b)) => Err(TreeError::AsymmetricEdge { from: b.1, to: b.0 }),
    }
}
