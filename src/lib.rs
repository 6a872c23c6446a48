#![warn(missing_docs)]
//! `statictree` is a query index for weighted trees and forests that do not
//! change once built.
//!
//! Edges are accumulated in a [`TreeBuilder`], which is turned into an
//! immutable [`StaticTree`] by a single preprocessing pass. Building roots
//! every component, orders each node's children heaviest subtree first, lays
//! the forest out as an Euler tour and prepares a sparse table over the tour
//! depths. Afterwards the following queries are answered without touching the
//! structure again:
//!
//! - lowest common ancestors and ancestor tests in constant time,
//! - unweighted and weighted distances in constant time,
//! - `k`-th ancestors and `k`-th nodes on a path in logarithmic time,
//! - the weighted diameter and center of each component in linear time,
//! - the virtual tree spanning any `k` nodes in `O(k log k)`.
//!
//! Nodes are identified by [`NodeIndex`]. Queries involving nodes of different
//! components return `None` instead of failing.
//!
//! # Example
//!
//! ```
//! use statictree::{NodeIndex, TreeBuilder};
//!
//! let n = NodeIndex::new;
//!
//! // A star with center 0 and leaves 1, 2 and 3.
//! let mut builder = TreeBuilder::new(4);
//! builder.add_edge(n(0), n(1), 5i64).unwrap();
//! builder.add_edge(n(0), n(2), 3).unwrap();
//! builder.add_edge(n(0), n(3), 7).unwrap();
//! let tree = builder.build(Some(n(0))).unwrap();
//!
//! assert_eq!(tree.lca(n(1), n(3)), Some(n(0)));
//! assert_eq!(tree.weighted_dist(n(1), n(3)), Some(12));
//! assert_eq!(tree.kth_node_on_path(n(1), n(3), 1), Some(n(0)));
//!
//! let diameter = tree.diameter().unwrap();
//! assert_eq!(diameter.length, 12);
//! ```
//!
//! # Features
//!
//! - `serde` enables serialization and deserialization of builders, trees and
//!   their components.
//! - `proptest` exposes strategies generating random trees and forests.
//!
pub mod algorithms;
pub mod batch;
pub mod builder;
pub mod index;
pub mod node_map;
pub mod rmq;
pub mod tree;
pub mod weight;

#[cfg(feature = "proptest")]
pub mod proptest;

#[doc(inline)]
pub use crate::algorithms::Diameter;
#[doc(inline)]
pub use crate::builder::{Edge, TreeBuilder, TreeError};
#[doc(inline)]
pub use crate::index::{IndexError, NodeIndex};
#[doc(inline)]
pub use crate::tree::StaticTree;
#[doc(inline)]
pub use crate::weight::Weight;
