//! Benchmark tree generators.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statictree::{NodeIndex, StaticTree, TreeBuilder};

/// Create a path of `size` nodes, rooted at one end.
///
/// o -1-> o -2-> o -3-> o   ...
///
pub fn make_path_tree(size: usize) -> TreeBuilder<i64> {
    let mut builder = TreeBuilder::new(size);
    for i in 1..size {
        builder
            .add_edge(NodeIndex::new(i - 1), NodeIndex::new(i), i as i64)
            .unwrap();
    }
    builder
}

/// Create a complete binary tree with `size` nodes.
///
/// Uses a binary heap structure: the node `0` is the root, and each node `i`
/// has `2i + 1` and `2i + 2` as its children (if they exist).
pub fn make_binary_tree(size: usize) -> TreeBuilder<i64> {
    let mut builder = TreeBuilder::new(size);
    for i in 1..size {
        let parent = NodeIndex::new((i - 1) / 2);
        builder
            .add_edge(parent, NodeIndex::new(i), (i % 7) as i64)
            .unwrap();
    }
    builder
}

/// Create an arbitrary but deterministic tree with `size` nodes.
///
/// Each node `i > 0` is attached to a random earlier node, which gives trees
/// of logarithmic expected depth with uneven branching.
pub fn make_random_tree(size: usize) -> TreeBuilder<i64> {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut builder = TreeBuilder::new(size);
    for i in 1..size {
        let parent = rng.random_range(0..i);
        builder
            .add_edge(NodeIndex::new(parent), NodeIndex::new(i), rng.random_range(0..100))
            .unwrap();
    }
    builder
}

/// Builds the random tree of `size` nodes, rooted at node `0`.
pub fn make_static_tree(size: usize) -> StaticTree<i64> {
    make_random_tree(size).build(Some(NodeIndex::new(0))).unwrap()
}

/// Deterministic pairs of nodes to query, `count` of them.
pub fn make_query_pairs(size: usize, count: usize) -> Vec<(NodeIndex, NodeIndex)> {
    let mut rng = StdRng::seed_from_u64(count as u64);
    (0..count)
        .map(|_| {
            let a = rng.random_range(0..size);
            let b = rng.random_range(0..size);
            (NodeIndex::new(a), NodeIndex::new(b))
        })
        .collect()
}
