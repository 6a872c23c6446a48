//! Line-oriented batch interface for weighted distance queries.
//!
//! The input is a whitespace separated stream of integers:
//!
//! ```text
//! N Q
//! a b w      (N - 1 edges, 1-indexed endpoints, integer weights)
//! a b        (Q queries, 1-indexed)
//! ```
//!
//! The output starts with the weighted diameter of the tree, followed by one
//! line per query with the weighted distance between its two nodes. Pairs in
//! different components are answered with `-1`.
//!
//! # Example
//!
//! ```
//! use statictree::batch::{run_batch, BatchOptions};
//!
//! let input = "3 2\n1 2 4\n2 3 5\n1 3\n2 2\n";
//! let mut output = Vec::new();
//! run_batch(input.as_bytes(), &mut output, &BatchOptions::default()).unwrap();
//! assert_eq!(String::from_utf8(output).unwrap(), "9\n9\n0\n");
//! ```

use std::io::{BufRead, Write};
use std::str::{FromStr, SplitWhitespace};

use thiserror::Error;

use crate::builder::TreeError;
use crate::{NodeIndex, TreeBuilder};

/// Options for [`run_batch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Node to root the tree at, zero-based. Defaults to the smallest node.
    pub root: Option<NodeIndex>,
}

/// Reads a tree and a list of queries from `input` and writes the answers to
/// `output`.
///
/// # Errors
///
///  - When reading or writing fails.
///  - When the input is truncated or contains something other than integers.
///  - When a node is out of range, an edge weight is negative, or the edges
///    contain a cycle.
pub fn run_batch(
    mut input: impl BufRead,
    mut output: impl Write,
    options: &BatchOptions,
) -> Result<(), BatchError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let mut tokens = Tokens::new(&text);

    let node_count: usize = tokens.next("node count")?;
    if node_count > NodeIndex::MAX + 1 {
        return Err(BatchError::InvalidToken {
            expected: "node count",
            token: node_count.to_string(),
        });
    }
    let query_count: usize = tokens.next("query count")?;
    tracing::debug!(node_count, query_count, "reading batch input");

    let mut builder = TreeBuilder::new(node_count);
    for _ in 1..node_count {
        let a = tokens.node(node_count)?;
        let b = tokens.node(node_count)?;
        let weight: i64 = tokens.next("edge weight")?;
        builder.add_edge(a, b, weight)?;
    }
    let tree = builder.build(options.root)?;

    let diameter = tree.diameter().map_or(0, |diameter| diameter.length);
    writeln!(output, "{diameter}")?;

    for _ in 0..query_count {
        let a = tokens.node(node_count)?;
        let b = tokens.node(node_count)?;
        match tree.weighted_dist(a, b) {
            Some(dist) => writeln!(output, "{dist}")?,
            None => writeln!(output, "-1")?,
        }
    }
    output.flush()?;
    Ok(())
}

/// Whitespace separated tokens of the batch input.
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, BatchError> {
        let token = self
            .inner
            .next()
            .ok_or(BatchError::UnexpectedEof { expected })?;
        token.parse().map_err(|_| BatchError::InvalidToken {
            expected,
            token: token.to_string(),
        })
    }

    /// Reads a 1-indexed node id.
    fn node(&mut self, count: usize) -> Result<NodeIndex, BatchError> {
        let id: usize = self.next("node id")?;
        if id == 0 || id > count {
            return Err(BatchError::NodeOutOfRange { node: id, count });
        }
        Ok(NodeIndex::new(id - 1))
    }
}

/// Error generated while running a batch of queries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BatchError {
    /// Reading the input or writing the output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The input ended early.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// What was being read.
        expected: &'static str,
    },
    /// A token could not be parsed.
    #[error("invalid {expected} '{token}'")]
    InvalidToken {
        /// What was being read.
        expected: &'static str,
        /// The offending token.
        token: String,
    },
    /// A 1-indexed node id is outside `1..=count`.
    #[error("node {node} is out of range, expected a value between 1 and {count}")]
    NodeOutOfRange {
        /// The 1-indexed node id.
        node: usize,
        /// The number of nodes.
        count: usize,
    },
    /// The edges do not describe a valid tree.
    #[error(transparent)]
    Tree(#[from] TreeError),
}
