//! Definition of the node identifier used throughout the crate.
use std::num::NonZeroU32;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Index of a node within a tree.
///
/// Restricted to be at most `2^32 - 2`. The representation admits the *null
/// pointer optimization* so that `Option<NodeIndex>` takes as much space as a
/// `NodeIndex` by itself, which the Euler tour relies on for its component
/// separators.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(NonZeroU32);

impl NodeIndex {
    /// Maximum allowed index.
    pub const MAX: usize = (u32::MAX - 1) as usize;

    /// Creates a new node index from a `usize`.
    ///
    /// # Panics
    ///
    /// Panics if the index is greater than [`NodeIndex::MAX`].
    #[inline]
    pub fn new(index: usize) -> Self {
        match Self::try_from(index) {
            Ok(node) => node,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the index as a `usize`.
    #[inline]
    pub fn index(self) -> usize {
        self.into()
    }
}

impl From<NodeIndex> for usize {
    #[inline]
    fn from(index: NodeIndex) -> Self {
        (index.0.get() - 1) as usize
    }
}

impl TryFrom<usize> for NodeIndex {
    type Error = IndexError;

    #[inline]
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index > Self::MAX {
            return Err(IndexError {
                index,
                max: Self::MAX,
            });
        }
        match NonZeroU32::new(index as u32 + 1) {
            Some(raw) => Ok(Self(raw)),
            None => Err(IndexError {
                index,
                max: Self::MAX,
            }),
        }
    }
}

impl std::fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // avoid unnecessary newlines in alternate mode
        write!(f, "NodeIndex({})", self.index())
    }
}

impl std::fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        NodeIndex::new(0)
    }
}

#[cfg(feature = "serde")]
impl Serialize for NodeIndex {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.index().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for NodeIndex {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let index = usize::deserialize(deserializer)?;
        NodeIndex::try_from(index).map_err(serde::de::Error::custom)
    }
}

/// Error returned when trying to create a [`NodeIndex`] from an index that
/// does not fit its representation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("the index {index} is too large, the maximum allowed index is {max}")]
pub struct IndexError {
    index: usize,
    max: usize,
}
