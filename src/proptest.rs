use crate::{NodeIndex, TreeBuilder};
use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

/// Random weighted edges over a random number of nodes
///
/// Returns a tuple of
///  - `node_count`, between 1 and `max_n_nodes`
///  - `edges`, a list of `(a, b, weight)` triples forming a forest
///
/// Every node but the first is linked to a random earlier node with
/// probability `link_probability`, and node labels are shuffled afterwards so
/// the forest is not laid out in index order.
fn gen_edges(
    max_n_nodes: usize,
    max_weight: i64,
    link_probability: f64,
) -> impl Strategy<Value = (usize, Vec<(NodeIndex, NodeIndex, i64)>)> {
    prop::collection::vec(0..=max_weight, 1..=max_n_nodes).prop_perturb(
        move |weights, mut rng| {
            let node_count = weights.len();
            let mut labels: Vec<NodeIndex> = (0..node_count).map(NodeIndex::new).collect();
            labels.shuffle(&mut rng);

            let mut edges = Vec::with_capacity(node_count);
            for (node, &weight) in weights.iter().enumerate().skip(1) {
                if !rng.random_bool(link_probability) {
                    continue;
                }
                let parent = rng.random_range(0..node);
                let (a, b) = if rng.random_bool(0.5) {
                    (labels[parent], labels[node])
                } else {
                    (labels[node], labels[parent])
                };
                edges.push((a, b, weight));
            }
            edges.shuffle(&mut rng);
            (node_count, edges)
        },
    )
}

fn builder_from_edges(
    node_count: usize,
    edges: Vec<(NodeIndex, NodeIndex, i64)>,
) -> TreeBuilder<i64> {
    let mut builder = TreeBuilder::new(node_count);
    for (a, b, weight) in edges {
        builder
            .add_edge(a, b, weight)
            .expect("generated edges are in range and non-negative");
    }
    builder
}

prop_compose! {
    /// A random non-empty tree
    ///
    /// With at least 1 and at most `max_n_nodes` nodes, and edge weights
    /// between 0 and `max_weight`.
    pub fn gen_tree(max_n_nodes: usize, max_weight: i64)(
        (node_count, edges) in gen_edges(max_n_nodes, max_weight, 1.0)
    ) -> TreeBuilder<i64> {
        builder_from_edges(node_count, edges)
    }
}

prop_compose! {
    /// A random non-empty forest
    ///
    /// With at least 1 and at most `max_n_nodes` nodes, and edge weights
    /// between 0 and `max_weight`. Roughly one node in ten starts a new
    /// component.
    pub fn gen_forest(max_n_nodes: usize, max_weight: i64)(
        (node_count, edges) in gen_edges(max_n_nodes, max_weight, 0.9)
    ) -> TreeBuilder<i64> {
        builder_from_edges(node_count, edges)
    }
}

prop_compose! {
    /// A random non-empty forest together with a node to root it at.
    pub fn gen_rooted_forest(max_n_nodes: usize, max_weight: i64)(
        builder in gen_forest(max_n_nodes, max_weight)
    )(
        root in 0..builder.node_count(),
        builder in Just(builder),
    ) -> (TreeBuilder<i64>, NodeIndex) {
        (builder, NodeIndex::new(root))
    }
}
