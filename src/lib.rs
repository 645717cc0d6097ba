//! Binary Heap with Explicit Ordering
//!
//! This crate provides an array-backed binary heap (priority queue) whose
//! ordering is supplied by the caller when the heap is built, for embedding in
//! schedulers, graph searches and event queues.
//!
//! # Features
//!
//! - **Explicit ordering**: [`HeapOrder::Max`] or [`HeapOrder::Min`], any
//!   `Fn(&T, &T) -> Ordering` closure, or a legacy "less" predicate via [`ByLess`]
//! - **Push / Pop**: O(log n), with amortized `Vec` growth
//! - **Peek / Len / Capacity**: O(1)
//! - **Bulk build**: O(n) bottom-up heapify from a `Vec` or a copied slice
//! - **Fallible construction**: [`BinaryHeap::try_from_slice`] and
//!   [`BinaryHeap::try_with_capacity`] report allocation failure as [`HeapError`]
//!
//! The heap is not synchronized; share it across threads behind a lock.
//!
//! # Example
//!
//! ```rust
//! use ordered_binary_heap::{BinaryHeap, HeapOrder};
//!
//! let mut heap = BinaryHeap::from_slice(HeapOrder::Min, &[5, 3, 8, 1]);
//! heap.push(2);
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.len(), 3);
//! ```

pub mod binary;
pub mod order;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use binary::{BinaryHeap, IntoIterSorted};
pub use order::{ByLess, Compare, HeapOrder};
pub use traits::{Heap, HeapError};
