//! Common traits and errors for heap data structures
//!
//! - [`Heap`]: the operations every priority queue in this crate supports,
//!   so code and tests can be written once and run against
//!   [`BinaryHeap`](crate::binary::BinaryHeap) as well as the standard
//!   library's heap (see [`stdlib_compat`](crate::stdlib_compat)).
//! - [`HeapError`]: failures of the fallible constructors and of parsing a
//!   [`HeapOrder`](crate::order::HeapOrder).

use std::collections::TryReserveError;

use thiserror::Error;

/// Error type for heap operations
///
/// Emptiness is not an error: `peek` and `pop` on an empty heap return `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// Backing storage for the requested elements could not be reserved
    #[error("could not reserve heap storage: {0}")]
    Allocation(#[from] TryReserveError),

    /// The text does not name a heap ordering
    #[error("unknown heap order {0:?}, expected \"max\" or \"min\"")]
    UnknownOrder(String),
}

/// Base trait for heap/priority queue data structures
///
/// The element that pops first is whatever the heap's ordering ranks
/// highest; for the standard library's heap that is the largest element.
///
/// # Example
///
/// ```rust
/// use ordered_binary_heap::{BinaryHeap, Heap, HeapOrder};
///
/// fn drain<H: Heap<i32>>(heap: &mut H) -> Vec<i32> {
///     std::iter::from_fn(|| heap.pop()).collect()
/// }
///
/// let mut heap = BinaryHeap::new(HeapOrder::Min);
/// heap.push(3);
/// heap.push(1);
/// assert_eq!(drain(&mut heap), vec![1, 3]);
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns the number of elements the heap can hold without reallocating
    fn capacity(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) amortized.
    fn push(&mut self, item: T);

    /// Returns the highest-ranked element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the highest-ranked element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}
