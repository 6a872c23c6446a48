//! Query algorithms on a [`StaticTree`].
//!
//! Each submodule adds a group of query methods to [`StaticTree`]:
//!
//! - lowest common ancestors, distances and ancestor jumps,
//! - weighted diameter and center of each component,
//! - compression of a node subset into its virtual tree.
//!
//! [`StaticTree`]: crate::tree::StaticTree

mod compress;
mod diameter;
mod lca;

pub use diameter::Diameter;
