//! Standard library compatibility layer
//!
//! Implements [`Heap`] for `std::collections::BinaryHeap`, so generic code
//! written against the trait can run on either heap. The standard heap pops
//! its largest element first, which matches
//! [`HeapOrder::Max`](crate::order::HeapOrder::Max); wrap elements in
//! `std::cmp::Reverse` for the `Min` behavior.
//!
//! # Example
//!
//! ```rust
//! use ordered_binary_heap::{BinaryHeap, Heap, HeapOrder};
//!
//! fn top_three<H: Heap<i32>>(mut heap: H, items: &[i32]) -> Vec<i32> {
//!     for &item in items {
//!         heap.push(item);
//!     }
//!     (0..3).filter_map(|_| heap.pop()).collect()
//! }
//!
//! let items = [4, 8, 1, 9, 3];
//! assert_eq!(
//!     top_three(std::collections::BinaryHeap::new(), &items),
//!     top_three(BinaryHeap::new(HeapOrder::Max), &items),
//! );
//! ```

use std::collections::BinaryHeap as StdBinaryHeap;

use crate::traits::Heap;

impl<T: Ord> Heap<T> for StdBinaryHeap<T> {
    fn is_empty(&self) -> bool {
        StdBinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        StdBinaryHeap::len(self)
    }

    fn capacity(&self) -> usize {
        StdBinaryHeap::capacity(self)
    }

    fn push(&mut self, item: T) {
        StdBinaryHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        StdBinaryHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        StdBinaryHeap::pop(self)
    }
}
