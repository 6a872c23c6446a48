//! Weighted diameter and center of the components of a [`StaticTree`].

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tree::StaticTree;
use crate::{NodeIndex, Weight};

/// The longest weighted path of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Diameter<W> {
    /// Sum of the edge weights along the path.
    pub length: W,
    /// The two ends of the path. Both are the same node for a single-node
    /// component.
    pub endpoints: [NodeIndex; 2],
}

impl<W: Weight> StaticTree<W> {
    /// Returns the diameter of the first component in tour order.
    ///
    /// This is the component of the root requested when building, if any.
    /// Returns `None` for an empty tree.
    ///
    /// Complexity: O(n)
    pub fn diameter(&self) -> Option<Diameter<W>> {
        let root = *self.roots().first()?;
        Some(self.component_diameter(root))
    }

    /// Returns the diameter of the component containing `node`.
    ///
    /// Scans the component's Euler tour once, maximizing
    /// `d(u) - 2 d(x) + d(v)` over tour positions `u <= x <= v`, where `d` is
    /// the weighted depth. For the maximizing triple, `x` is the lowest common
    /// ancestor of `u` and `v`.
    ///
    /// Complexity: O(size of the component)
    pub fn component_diameter(&self, node: NodeIndex) -> Diameter<W> {
        let root = self.root(node);
        let span = &self.euler_tour()[self.tour_start(root)..self.tour_end(root)];

        let root_depth = self.weighted_depth(root);
        let mut u_max = (root_depth, root);
        let mut ux_max = (root_depth - root_depth.double(), root);
        let mut uxv_max = (root_depth, [root, root]);

        for &v in span.iter().flatten() {
            let depth = self.weighted_depth(v);
            u_max = u_max.max((depth, v));
            ux_max = ux_max.max((u_max.0 - depth.double(), u_max.1));
            uxv_max = uxv_max.max((ux_max.0 + depth, [ux_max.1, v]));
        }

        Diameter {
            length: uxv_max.0,
            endpoints: uxv_max.1,
        }
    }

    /// Returns the center of the first component in tour order.
    ///
    /// See [`StaticTree::component_center`]. Returns `None` for an empty tree.
    ///
    /// Complexity: O(n)
    pub fn center(&self) -> Option<[NodeIndex; 2]> {
        let root = *self.roots().first()?;
        Some(self.component_center(root))
    }

    /// Returns the weighted middle node(s) of the diameter of the component
    /// containing `node`.
    ///
    /// Walking the diameter path from one end, the midpoint `length / 2` lies
    /// on a node or strictly inside an edge. In the first case that node is
    /// returned twice. Otherwise the edge's end closest to the midpoint is
    /// returned twice, or both ends if they are equally far from it. The
    /// returned nodes minimize the largest weighted distance to any node of
    /// the component.
    ///
    /// Complexity: O(size of the component)
    pub fn component_center(&self, node: NodeIndex) -> [NodeIndex; 2] {
        let Diameter {
            length,
            endpoints: [a, b],
        } = self.component_diameter(node);
        let edges = self
            .dist(a, b)
            .expect("diameter endpoints lie in the same component");
        let offset = |k| {
            let v = self
                .kth_node_on_path(a, b, k)
                .expect("positions on the diameter path are in range");
            let from_a = self
                .weighted_dist(a, v)
                .expect("diameter path nodes lie in the same component");
            (v, from_a)
        };

        // Last position whose offset from `a` does not pass the midpoint.
        let (mut lo, mut hi) = (0, edges);
        while lo < hi {
            let mid = lo + (hi - lo).div_ceil(2);
            if offset(mid).1.double() <= length {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }

        let (near, near_offset) = offset(lo);
        if near_offset.double() == length {
            return [near, near];
        }
        // `near` lies before the midpoint and `far` after it, so their
        // farthest ends are `b` and `a` respectively.
        let (far, far_offset) = offset(lo + 1);
        match (length - near_offset).cmp(&far_offset) {
            Ordering::Less => [near, near],
            Ordering::Greater => [far, far],
            Ordering::Equal => [near, far],
        }
    }
}
