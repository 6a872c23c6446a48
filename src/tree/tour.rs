//! Euler tour of a rooted forest.

use crate::node_map::NodeMap;
use crate::NodeIndex;

use super::rooting::Rooting;

/// Per-node tour positions and the tour itself.
#[derive(Debug, Clone)]
pub(crate) struct Tour {
    /// Each node on entry and after returning from each child. `None`
    /// separates components.
    pub euler: Vec<Option<NodeIndex>>,
    /// Unweighted depth at each tour position, `None` at separators.
    pub depths: Vec<Option<usize>>,
    pub tour_start: NodeMap<usize>,
    pub tour_end: NodeMap<usize>,
    pub preorder: NodeMap<usize>,
    pub postorder: NodeMap<usize>,
    pub heavy_root: NodeMap<NodeIndex>,
}

/// Traversal frame: a node and the position of its next child to visit.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeIndex,
    next_child: usize,
}

impl Tour {
    /// Walks every component of `rooting` in root order.
    ///
    /// The first child in each child list is the heavy child; it inherits its
    /// parent's heavy path root, so each heavy path occupies consecutive tour
    /// positions starting at its root.
    pub fn new<W>(rooting: &Rooting<W>) -> Self {
        let count = rooting.parent.len();
        let mut tour = Self {
            euler: Vec::with_capacity(2 * count),
            depths: Vec::with_capacity(2 * count),
            tour_start: NodeMap::from_elem(count, 0),
            tour_end: NodeMap::from_elem(count, 0),
            preorder: NodeMap::from_elem(count, 0),
            postorder: NodeMap::from_elem(count, 0),
            heavy_root: (0..count).map(NodeIndex::new).collect(),
        };
        let mut visited = 0;
        let mut finished = 0;
        let mut stack: Vec<Frame> = Vec::new();

        for &root in &rooting.roots {
            debug_assert!(stack.is_empty());
            tour.enter(root, rooting.depth[root], &mut visited);
            stack.push(Frame {
                node: root,
                next_child: 0,
            });

            while let Some(frame) = stack.last_mut() {
                let node = frame.node;
                let position = frame.next_child;
                frame.next_child += 1;

                match rooting.children[node].get(position) {
                    Some(&child) => {
                        if position == 0 {
                            tour.heavy_root[child] = tour.heavy_root[node];
                        }
                        tour.enter(child, rooting.depth[child], &mut visited);
                        stack.push(Frame {
                            node: child,
                            next_child: 0,
                        });
                    }
                    None => {
                        stack.pop();
                        tour.tour_end[node] = tour.euler.len();
                        tour.postorder[node] = finished;
                        finished += 1;
                        if let Some(parent) = stack.last() {
                            tour.euler.push(Some(parent.node));
                            tour.depths.push(Some(rooting.depth[parent.node]));
                        }
                    }
                }
            }

            tour.euler.push(None);
            tour.depths.push(None);
        }

        debug_assert_eq!(tour.euler.len(), 2 * count);
        tour
    }

    fn enter(&mut self, node: NodeIndex, depth: usize, visited: &mut usize) {
        self.tour_start[node] = self.euler.len();
        self.preorder[node] = *visited;
        *visited += 1;
        self.euler.push(Some(node));
        self.depths.push(Some(depth));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::TreeBuilder;

    fn n(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    fn tour_of(builder: &TreeBuilder<i32>, root: Option<NodeIndex>) -> (Rooting<i32>, Tour) {
        let adjacency: Vec<_> = builder
            .nodes_iter()
            .map(|v| builder.neighbours(v).to_vec())
            .collect();
        let rooting = Rooting::new(&adjacency, root).unwrap();
        let tour = Tour::new(&rooting);
        (rooting, tour)
    }

    #[test]
    fn doubled_traversal() {
        // 0 -> {1 -> {3}, 2}, and an isolated 4.
        let mut builder = TreeBuilder::new(5);
        builder.add_edge(n(0), n(1), 1).unwrap();
        builder.add_edge(n(0), n(2), 1).unwrap();
        builder.add_edge(n(1), n(3), 1).unwrap();
        let (rooting, tour) = tour_of(&builder, Some(n(0)));

        let euler: Vec<_> = tour.euler.iter().map(|v| v.map(NodeIndex::index)).collect();
        assert_eq!(
            euler,
            vec![Some(0), Some(1), Some(3), Some(1), Some(0), Some(2), Some(0), None, Some(4), None]
        );
        assert_eq!(
            tour.depths,
            vec![Some(0), Some(1), Some(2), Some(1), Some(0), Some(1), Some(0), None, Some(0), None]
        );
        assert_eq!(tour.tour_start.as_slice(), &[0, 1, 5, 2, 8]);
        assert_eq!(tour.tour_end.as_slice(), &[7, 4, 6, 3, 9]);
        assert_eq!(tour.preorder.as_slice(), &[0, 1, 3, 2, 4]);
        assert_eq!(tour.postorder.as_slice(), &[3, 1, 2, 0, 4]);
        assert_eq!(tour.heavy_root.as_slice(), &[n(0), n(0), n(2), n(0), n(4)]);

        for (node, &start) in tour.tour_start.iter() {
            assert_eq!(tour.tour_end[node], start + 2 * rooting.subtree_size[node] - 1);
        }
    }

    #[test]
    fn requested_root_comes_first() {
        let mut builder = TreeBuilder::new(4);
        builder.add_edge(n(0), n(1), 1).unwrap();
        builder.add_edge(n(2), n(3), 1).unwrap();
        let (rooting, tour) = tour_of(&builder, Some(n(3)));
        assert_eq!(rooting.roots, vec![n(3), n(0)]);
        assert_eq!(tour.euler[0], Some(n(3)));
        assert_eq!(tour.euler[3], None);
        assert_eq!(tour.euler.len(), 8);
    }
}
