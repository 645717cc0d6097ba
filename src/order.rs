//! Orderings for [`BinaryHeap`](crate::binary::BinaryHeap)
//!
//! A heap is parameterized by a comparator implementing [`Compare`]. The
//! comparator returns a three-way [`Ordering`], and the element that compares
//! `Greater` is the one that pops first. There is no "less" predicate whose
//! meaning flips between max-heaps and min-heaps.
//!
//! Three kinds of comparators are available:
//!
//! - [`HeapOrder`]: `Max` or `Min` for any `T: Ord`
//! - closures `Fn(&T, &T) -> Ordering`, for ordering by a key or field
//! - [`ByLess`]: adapts a boolean predicate where `less(a, b)` means
//!   "`a` ranks below `b`"
//!
//! # Example
//!
//! ```rust
//! use ordered_binary_heap::{BinaryHeap, HeapOrder};
//!
//! let mut max = BinaryHeap::new(HeapOrder::Max);
//! let mut min = BinaryHeap::new(HeapOrder::Min);
//! for x in [3, 1, 2] {
//!     max.push(x);
//!     min.push(x);
//! }
//! assert_eq!(max.pop(), Some(3));
//! assert_eq!(min.pop(), Some(1));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::traits::HeapError;

/// A comparator deciding which of two elements sits closer to the root
///
/// `compare(a, b)` returns `Greater` when `a` must be popped before `b`,
/// `Less` when after, and `Equal` when either order is fine. The relation
/// must be a total order over the values stored in the heap; ties are allowed
/// and pop in unspecified order.
pub trait Compare<T: ?Sized> {
    /// Compares `a` against `b` by priority
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Which end of the natural order pops first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapOrder {
    /// Largest element first, like `std::collections::BinaryHeap`
    #[default]
    Max,
    /// Smallest element first
    Min,
}

impl HeapOrder {
    /// Returns the opposite ordering
    pub fn reverse(self) -> Self {
        match self {
            HeapOrder::Max => HeapOrder::Min,
            HeapOrder::Min => HeapOrder::Max,
        }
    }
}

impl<T: Ord + ?Sized> Compare<T> for HeapOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self {
            HeapOrder::Max => a.cmp(b),
            HeapOrder::Min => b.cmp(a),
        }
    }
}

impl fmt::Display for HeapOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapOrder::Max => write!(f, "max"),
            HeapOrder::Min => write!(f, "min"),
        }
    }
}

impl FromStr for HeapOrder {
    type Err = HeapError;

    /// Parses `"max"` or `"min"`, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" | "max-heap" | "maxheap" => Ok(HeapOrder::Max),
            "min" | "min-heap" | "minheap" => Ok(HeapOrder::Min),
            _ => Err(HeapError::UnknownOrder(s.to_string())),
        }
    }
}

/// Adapts a boolean "ranks below" predicate into a [`Compare`]
///
/// `less(a, b)` must return `true` exactly when `a` belongs below `b` in the
/// heap. With `|a, b| a < b` the heap pops the largest element first; with
/// `|a, b| a > b` it pops the smallest first.
///
/// ```rust
/// use ordered_binary_heap::{BinaryHeap, ByLess};
///
/// let mut heap = BinaryHeap::new(ByLess(|a: &i32, b: &i32| a > b));
/// heap.extend([5, 3, 8, 1]);
/// assert_eq!(heap.pop(), Some(1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByLess<F>(pub F);

impl<T: ?Sized, F> Compare<T> for ByLess<F>
where
    F: Fn(&T, &T) -> bool,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if (self.0)(a, b) {
            Ordering::Less
        } else if (self.0)(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
