//! A dense map from [`NodeIndex`] to per-node attributes.
//!
//! Every attribute computed while building a [`StaticTree`] (parents, depths,
//! tour positions, ...) is stored in one of these maps. Unlike a plain `Vec`
//! it is indexed directly by [`NodeIndex`], so node ids and tour positions
//! cannot be confused.
//!
//! [`StaticTree`]: crate::tree::StaticTree

use std::{
    iter::{Enumerate, FusedIterator},
    marker::PhantomData,
    ops::{Index, IndexMut},
    slice,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::NodeIndex;

/// A dense map with one value per node of a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeMap<V> {
    data: Vec<V>,
    #[cfg_attr(feature = "serde", serde(skip))]
    phantom: PhantomData<NodeIndex>,
}

impl<V> NodeMap<V> {
    /// Creates a map holding `value` for each of `node_count` nodes.
    #[inline]
    pub fn from_elem(node_count: usize, value: V) -> Self
    where
        V: Clone,
    {
        Self::from_vec(vec![value; node_count])
    }

    /// Creates a map from the values of nodes `0..data.len()`, in order.
    #[inline]
    pub fn from_vec(data: Vec<V>) -> Self {
        Self {
            data,
            phantom: PhantomData,
        }
    }

    /// Returns the number of nodes in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the map holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Immutably borrows the value of a node, if it is in range.
    #[inline]
    pub fn get(&self, node: NodeIndex) -> Option<&V> {
        self.data.get(node.index())
    }

    /// Iterates over the nodes and their values.
    #[inline]
    pub fn iter(&self) -> NodeMapIter<'_, V> {
        NodeMapIter {
            iter: self.data.iter().enumerate(),
        }
    }

    /// Returns the values as a slice ordered by node index.
    #[inline]
    pub fn as_slice(&self) -> &[V] {
        &self.data
    }
}

impl<V> Index<NodeIndex> for NodeMap<V> {
    type Output = V;

    #[inline]
    fn index(&self, node: NodeIndex) -> &Self::Output {
        &self.data[node.index()]
    }
}

impl<V> IndexMut<NodeIndex> for NodeMap<V> {
    #[inline]
    fn index_mut(&mut self, node: NodeIndex) -> &mut Self::Output {
        &mut self.data[node.index()]
    }
}

impl<V> FromIterator<V> for NodeMap<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<V> Default for NodeMap<V> {
    fn default() -> Self {
        Self::from_vec(Vec::new())
    }
}

/// Iterator over the nodes and values of a [`NodeMap`].
#[derive(Debug, Clone)]
pub struct NodeMapIter<'a, V> {
    iter: Enumerate<slice::Iter<'a, V>>,
}

impl<'a, V> Iterator for NodeMapIter<'a, V> {
    type Item = (NodeIndex, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (index, value) = self.iter.next()?;
        Some((NodeIndex::new(index), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<V> DoubleEndedIterator for NodeMapIter<'_, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let (index, value) = self.iter.next_back()?;
        Some((NodeIndex::new(index), value))
    }
}

impl<V> ExactSizeIterator for NodeMapIter<'_, V> {}

impl<V> FusedIterator for NodeMapIter<'_, V> {}
