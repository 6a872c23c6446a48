//! Numeric requirements on edge weights.

use std::fmt::Debug;
use std::iter::Sum;

use num_traits::Signed;

/// An ordered, additive edge weight.
///
/// Weighted depths and distances are computed by adding and subtracting edge
/// weights, and the diameter scan forms intermediate values of the shape
/// `d(u) - 2 d(x)`, which may be negative even when every weight is not. The
/// weight type is therefore required to be signed. Edge weights themselves
/// must be non-negative, see [`TreeBuilder::add_edge`].
///
/// This trait is implemented for every type satisfying its bounds, in
/// particular all primitive signed integers.
///
/// [`TreeBuilder::add_edge`]: crate::TreeBuilder::add_edge
pub trait Weight: Copy + Ord + Signed + Sum + Debug {
    /// Returns twice the value.
    #[inline]
    fn double(self) -> Self {
        self + self
    }
}

impl<W> Weight for W where W: Copy + Ord + Signed + Sum + Debug {}
