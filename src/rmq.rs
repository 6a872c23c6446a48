//! Static range minimum (or maximum) queries over a fixed sequence.
//!
//! A [`SparseTable`] answers "where is the extremal value in `values[a..b]`"
//! in constant time after an `O(n log n)` preprocessing pass. The table stores
//! indices rather than values, so the position of the extremum is available
//! to callers, which the Euler tour based LCA queries depend on.
//!
//! # Example
//!
//! ```
//! use statictree::rmq::SparseTable;
//!
//! let table = SparseTable::min(vec![4, 1, 3, 1, 5]);
//! // Equal values resolve to the later index.
//! assert_eq!(table.query_index(0..5), 3);
//! assert_eq!(table.query_value(2..3), &3);
//!
//! let table = SparseTable::max(vec![4, 1, 3, 1, 5]);
//! assert_eq!(table.query_index(0..4), 0);
//! ```

use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which extremum a [`SparseTable`] reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum Extremum {
    /// Report the position of the smallest value.
    #[default]
    Minimum,
    /// Report the position of the largest value.
    Maximum,
}

/// A sparse table over an immutable sequence of values.
///
/// `levels[k][i]` holds the index of the best value in the window of length
/// `2^k` starting at `i`. Ties between equal values are broken towards the
/// later index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct SparseTable<T> {
    values: Vec<T>,
    levels: Vec<Vec<usize>>,
    mode: Extremum,
}

impl<T: Ord> SparseTable<T> {
    /// Builds a table reporting minima.
    ///
    /// Complexity: O(n log n)
    pub fn min(values: Vec<T>) -> Self {
        Self::new(values, Extremum::Minimum)
    }

    /// Builds a table reporting maxima.
    ///
    /// Complexity: O(n log n)
    pub fn max(values: Vec<T>) -> Self {
        Self::new(values, Extremum::Maximum)
    }

    /// Builds a table over `values` reporting the given extremum.
    ///
    /// Complexity: O(n log n)
    pub fn new(values: Vec<T>, mode: Extremum) -> Self {
        let n = values.len();
        let mut table = Self {
            values,
            levels: Vec::with_capacity(level_count(n)),
            mode,
        };
        if n == 0 {
            return table;
        }

        table.levels.push((0..n).collect());
        for k in 1..level_count(n) {
            let half = 1 << (k - 1);
            let prev = &table.levels[k - 1];
            let level = (0..=n - (1 << k))
                .map(|i| table.better_index(prev[i], prev[i + half]))
                .collect();
            table.levels.push(level);
        }
        table
    }

    /// Of two positions, returns the one holding the better value.
    ///
    /// When both values are equal, returns `b`.
    #[inline]
    fn better_index(&self, a: usize, b: usize) -> usize {
        let a_wins = match self.mode {
            Extremum::Minimum => self.values[a] < self.values[b],
            Extremum::Maximum => self.values[b] < self.values[a],
        };
        if a_wins {
            a
        } else {
            b
        }
    }

    /// Returns the index of the extremal value within `range`.
    ///
    /// Among several equal extremal values, the largest index is returned.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty or extends beyond the sequence.
    ///
    /// Complexity: O(1)
    pub fn query_index(&self, range: Range<usize>) -> usize {
        let Range { start, end } = range;
        assert!(
            start < end && end <= self.values.len(),
            "invalid query range {start}..{end} over {} values",
            self.values.len()
        );
        let level = (end - start).ilog2() as usize;
        let windows = &self.levels[level];
        self.better_index(windows[start], windows[end - (1 << level)])
    }

    /// Returns the extremal value within `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty or extends beyond the sequence.
    ///
    /// Complexity: O(1)
    #[inline]
    pub fn query_value(&self, range: Range<usize>) -> &T {
        &self.values[self.query_index(range)]
    }
}

impl<T> SparseTable<T> {
    /// Returns the number of values in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the table holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the underlying sequence.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the extremum this table reports.
    #[inline]
    pub fn mode(&self) -> Extremum {
        self.mode
    }
}

/// Number of power-of-two window levels needed for a sequence of length `n`.
#[inline]
fn level_count(n: usize) -> usize {
    match n {
        0 => 0,
        n => n.ilog2() as usize + 1,
    }
}
