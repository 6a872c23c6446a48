#![allow(clippy::unit_arg)] // Required for black_box uses

use criterion::{black_box, criterion_group, Criterion};
use statictree::{NodeIndex, StaticTree, TreeBuilder};

use crate::helpers::*;

// -----------------------------------------------------------------------------
// Benchmark functions
// -----------------------------------------------------------------------------

struct BuildPath {
    builder: TreeBuilder<i64>,
}
impl SizedBenchmark for BuildPath {
    fn name() -> &'static str {
        "build_path_tree"
    }

    fn setup(size: usize) -> Self {
        let builder = make_path_tree(size);
        Self { builder }
    }

    fn run(&self) -> impl Sized {
        self.builder.build(None).unwrap().node_count()
    }
}

struct BuildRandom {
    builder: TreeBuilder<i64>,
}
impl SizedBenchmark for BuildRandom {
    fn name() -> &'static str {
        "build_random_tree"
    }

    fn setup(size: usize) -> Self {
        let builder = make_random_tree(size);
        Self { builder }
    }

    fn run(&self) -> impl Sized {
        self.builder.build(None).unwrap().node_count()
    }
}

struct LcaQueries {
    tree: StaticTree<i64>,
    queries: Vec<(NodeIndex, NodeIndex)>,
}
impl SizedBenchmark for LcaQueries {
    fn name() -> &'static str {
        "lca_and_distance_queries"
    }

    fn setup(size: usize) -> Self {
        let tree = make_static_tree(size);
        let queries = make_query_pairs(size, 1_000);
        Self { tree, queries }
    }

    fn run(&self) -> impl Sized {
        for &(a, b) in &self.queries {
            black_box(self.tree.lca(a, b));
            black_box(self.tree.weighted_dist(a, b));
        }
    }
}

struct PathQueries {
    tree: StaticTree<i64>,
    queries: Vec<(NodeIndex, NodeIndex)>,
}
impl SizedBenchmark for PathQueries {
    fn name() -> &'static str {
        "kth_node_on_path_queries"
    }

    fn setup(size: usize) -> Self {
        let builder = make_binary_tree(size);
        let tree = builder.build(Some(NodeIndex::new(0))).unwrap();
        let queries = make_query_pairs(size, 1_000);
        Self { tree, queries }
    }

    fn run(&self) -> impl Sized {
        for &(a, b) in &self.queries {
            let dist = self.tree.dist(a, b).unwrap();
            black_box(self.tree.kth_node_on_path(a, b, dist / 2));
            black_box(self.tree.kth_ancestor(a, dist / 3));
        }
    }
}

struct Diameter {
    tree: StaticTree<i64>,
}
impl SizedBenchmark for Diameter {
    fn name() -> &'static str {
        "diameter_and_center"
    }

    fn setup(size: usize) -> Self {
        let tree = make_static_tree(size);
        Self { tree }
    }

    fn run(&self) -> impl Sized {
        (self.tree.diameter(), self.tree.center())
    }
}

struct Compress {
    tree: StaticTree<i64>,
    nodes: Vec<NodeIndex>,
}
impl SizedBenchmark for Compress {
    fn name() -> &'static str {
        "compress_node_set"
    }

    fn setup(size: usize) -> Self {
        let tree = make_static_tree(size);
        let nodes = make_query_pairs(size, size / 20 + 1)
            .into_iter()
            .map(|(a, _)| a)
            .collect();
        Self { tree, nodes }
    }

    fn run(&self) -> impl Sized {
        self.tree.compress(self.nodes.iter().copied())
    }
}

// -----------------------------------------------------------------------------
// iai_callgrind definitions
// -----------------------------------------------------------------------------

sized_iai_benchmark!(callgrind_build_path, BuildPath);
sized_iai_benchmark!(callgrind_build_random, BuildRandom);
sized_iai_benchmark!(callgrind_lca_queries, LcaQueries);
sized_iai_benchmark!(callgrind_path_queries, PathQueries);
sized_iai_benchmark!(callgrind_diameter, Diameter);
sized_iai_benchmark!(callgrind_compress, Compress);

iai_callgrind::library_benchmark_group!(
    name = callgrind_group;
    benchmarks =
        callgrind_build_path,
        callgrind_build_random,
        callgrind_lca_queries,
        callgrind_path_queries,
        callgrind_diameter,
        callgrind_compress,
);

// -----------------------------------------------------------------------------
// Criterion definitions
// -----------------------------------------------------------------------------

criterion_group! {
    name = criterion_group;
    config = Criterion::default();
    targets =
        BuildPath::criterion,
        BuildRandom::criterion,
        LcaQueries::criterion,
        PathQueries::criterion,
        Diameter::criterion,
        Compress::criterion,
}
