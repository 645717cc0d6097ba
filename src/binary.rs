//! Binary Heap implementation
//!
//! An array-backed binary heap whose ordering is chosen by the caller at
//! construction time. The backing `Vec` encodes an implicit complete binary
//! tree: the children of index `i` live at `2i + 1` and `2i + 2`, and no child
//! ever compares `Greater` than its parent under the heap's comparator.
//!
//! # Time Complexity
//!
//! | Operation                 | Complexity         |
//! |---------------------------|--------------------|
//! | `push`                    | O(log n) amortized |
//! | `pop`                     | O(log n)           |
//! | `peek`                    | O(1)               |
//! | `len` / `capacity`        | O(1)               |
//! | `from_vec` / `from_slice` | O(n)               |
//!
//! # Example
//!
//! ```rust
//! use ordered_binary_heap::{BinaryHeap, HeapOrder};
//!
//! let mut heap = BinaryHeap::with_capacity(HeapOrder::Max, 8);
//! for x in [3, 1, 4, 1, 5, 9, 2, 6] {
//!     heap.push(x);
//! }
//!
//! assert_eq!(heap.peek(), Some(&9));
//! assert_eq!(heap.into_sorted_vec(), vec![9, 6, 5, 4, 3, 2, 1, 1]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use log::{trace, warn};

use crate::order::Compare;
use crate::traits::{Heap, HeapError};

/// A binary heap ordered by a caller-supplied comparator
///
/// The element for which `cmp` returns `Greater` against every other element
/// is the root, and is what [`peek`](Self::peek) and [`pop`](Self::pop)
/// return. Use [`HeapOrder`](crate::order::HeapOrder) for plain max/min
/// ordering or a closure to order by a key.
///
/// A heap always has a comparator: there is no way to build one without it.
#[derive(Clone)]
pub struct BinaryHeap<T, C> {
    /// The heap data in implicit-tree order
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Creates an empty heap without allocating
    pub fn new(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty heap with room for at least `capacity` elements
    ///
    /// The capacity is only a hint. If storage for it cannot be reserved, the
    /// hint is logged and ignored, and the heap starts unallocated. It grows
    /// past the hint as needed either way.
    pub fn with_capacity(cmp: C, capacity: usize) -> Self {
        let mut data = Vec::new();
        if let Err(err) = data.try_reserve_exact(capacity) {
            warn!("ignoring heap capacity hint of {} elements: {}", capacity, err);
        }
        Self { data, cmp }
    }

    /// Creates an empty heap with room for at least `capacity` elements,
    /// failing if that storage cannot be reserved
    ///
    /// # Errors
    /// Returns [`HeapError::Allocation`] if the reservation overflows or the
    /// allocator refuses it.
    pub fn try_with_capacity(cmp: C, capacity: usize) -> Result<Self, HeapError> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)?;
        Ok(Self { data, cmp })
    }

    /// Builds a heap from an existing vector, reusing its storage
    ///
    /// Runs in O(n) by sifting down every internal node, starting from the
    /// last one and ending at the root.
    pub fn from_vec(cmp: C, data: Vec<T>) -> Self {
        let mut heap = Self { data, cmp };
        heap.rebuild();
        heap
    }

    /// Builds a heap from a copy of `items`
    ///
    /// ```rust
    /// use ordered_binary_heap::{BinaryHeap, HeapOrder};
    ///
    /// let heap = BinaryHeap::from_slice(HeapOrder::Min, &[5, 3, 8, 1]);
    /// assert_eq!(heap.into_sorted_vec(), vec![1, 3, 5, 8]);
    /// ```
    pub fn from_slice(cmp: C, items: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_vec(cmp, items.to_vec())
    }

    /// Builds a heap from a copy of `items`, failing instead of aborting if
    /// the copy's storage cannot be reserved
    ///
    /// # Errors
    /// Returns [`HeapError::Allocation`] if storage for `items.len()`
    /// elements cannot be reserved.
    pub fn try_from_slice(cmp: C, items: &[T]) -> Result<Self, HeapError>
    where
        T: Clone,
    {
        let mut data = Vec::new();
        data.try_reserve_exact(items.len())?;
        data.extend_from_slice(items);
        Ok(Self::from_vec(cmp, data))
    }

    /// Returns the comparator this heap was built with
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Inserts an element, sifting it up to its place
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the root element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the root element
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if self.data.len() > 1 {
            self.sift_down(0, self.data.len());
        }

        result
    }

    /// Removes all elements, keeping the allocated storage
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns an iterator over the elements in storage order
    ///
    /// Only the first element is guaranteed to be the root; the rest follow
    /// no particular order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning its storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in the order `pop` would
    ///
    /// Sorts in place, so no extra storage is allocated.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            self.sift_down(0, end);
        }
        // In-place heap sort leaves the lowest-ranked element first.
        self.data.reverse();
        self.data
    }

    /// Consumes the heap, returning an iterator that pops each element
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, C> {
        IntoIterSorted { heap: self }
    }

    /// Restores the heap property over the whole storage
    fn rebuild(&mut self) {
        let len = self.data.len();
        trace!("heapifying {} elements", len);
        for index in (0..len / 2).rev() {
            self.sift_down(index, len);
        }
    }

    /// True if the element at `a` must sit above the element at `b`
    fn outranks(&self, a: usize, b: usize) -> bool {
        self.cmp.compare(&self.data[a], &self.data[b]) == Ordering::Greater
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.outranks(index, parent) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property within `..end`
    fn sift_down(&mut self, mut index: usize, end: usize) {
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut top = index;

            if left < end && self.outranks(left, top) {
                top = left;
            }
            if right < end && self.outranks(right, top) {
                top = right;
            }

            if top != index {
                self.data.swap(index, top);
                index = top;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Compare<T>> Heap<T> for BinaryHeap<T, C> {
    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn capacity(&self) -> usize {
        BinaryHeap::capacity(self)
    }

    fn push(&mut self, item: T) {
        BinaryHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        BinaryHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        BinaryHeap::pop(self)
    }
}

impl<T, C: Compare<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("len", &self.data.len())
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(C::default(), iter.into_iter().collect())
    }
}

impl<T, C> IntoIterator for BinaryHeap<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Iterates in storage order; see [`BinaryHeap::into_iter_sorted`] for
    /// pop order
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Iterator popping elements from a [`BinaryHeap`] in priority order
///
/// Created by [`BinaryHeap::into_iter_sorted`].
#[derive(Clone, Debug)]
pub struct IntoIterSorted<T, C> {
    heap: BinaryHeap<T, C>,
}

impl<T, C: Compare<T>> Iterator for IntoIterSorted<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for IntoIterSorted<T, C> {}

impl<T, C: Compare<T>> FusedIterator for IntoIterSorted<T, C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{ByLess, HeapOrder};

    fn assert_heap_property<T, C: Compare<T>>(heap: &BinaryHeap<T, C>) {
        let data = &heap.data;
        for (index, parent) in data.iter().enumerate() {
            for child in [2 * index + 1, 2 * index + 2] {
                if let Some(child) = data.get(child) {
                    assert_ne!(
                        heap.cmp.compare(child, parent),
                        Ordering::Greater,
                        "child of index {} outranks its parent",
                        index
                    );
                }
            }
        }
    }

    #[test]
    fn test_basic_operations() {
        let mut heap = BinaryHeap::new(HeapOrder::Min);

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.push(3);
        heap.push(1);
        heap.push(2);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Some(&1));

        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(2));
        assert_eq!(heap.pop(), Some(3));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_empty_heap() {
        let mut heap: BinaryHeap<i32, _> = BinaryHeap::new(HeapOrder::Max);
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.capacity(), 0);

        let mut heap: BinaryHeap<i32, _> = BinaryHeap::with_capacity(HeapOrder::Max, 16);
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.len(), 0);
        assert!(heap.capacity() >= 16);
    }

    #[test]
    fn test_max_heap_by_less() {
        let mut heap = BinaryHeap::new(ByLess(|a: &i32, b: &i32| a < b));
        for x in [3, 1, 4, 1, 5, 9, 2, 6] {
            heap.push(x);
            assert_heap_property(&heap);
        }

        let popped: Vec<_> = std::iter::from_fn(|| heap.pop()).collect();
        assert_eq!(popped, vec![9, 6, 5, 4, 3, 2, 1, 1]);
    }

    #[test]
    fn test_min_heap_from_slice() {
        let mut heap = BinaryHeap::from_slice(ByLess(|a: &i32, b: &i32| a > b), &[5, 3, 8, 1]);
        assert_heap_property(&heap);

        let popped: Vec<_> = std::iter::from_fn(|| heap.pop()).collect();
        assert_eq!(popped, vec![1, 3, 5, 8]);
    }

    #[test]
    fn test_single_element() {
        let mut heap = BinaryHeap::new(HeapOrder::Max);
        heap.push(42);
        assert_eq!(heap.pop(), Some(42));
        assert_eq!(heap.pop(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_duplicate_priorities() {
        let mut heap = BinaryHeap::new(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));

        heap.push((1, 'a'));
        heap.push((1, 'b'));
        heap.push((1, 'c'));

        assert_eq!(heap.len(), 3);

        // All three should pop with priority 1
        let mut items = Vec::new();
        while let Some((priority, item)) = heap.pop() {
            assert_eq!(priority, 1);
            items.push(item);
        }
        items.sort();
        assert_eq!(items, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_ascending_insertion() {
        let mut heap = BinaryHeap::new(HeapOrder::Min);

        for i in 0..100 {
            heap.push(i);
        }
        assert_heap_property(&heap);

        for i in 0..100 {
            assert_eq!(heap.pop(), Some(i));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = BinaryHeap::new(HeapOrder::Max);

        for i in 0..100 {
            heap.push(i);
        }
        assert_heap_property(&heap);

        for i in (0..100).rev() {
            assert_eq!(heap.pop(), Some(i));
        }
    }

    #[test]
    fn test_heap_property_after_pops() {
        let mut heap = BinaryHeap::from_vec(HeapOrder::Max, (0..64).map(|i| (i * 37) % 64).collect());
        assert_heap_property(&heap);

        for expected_len in (40..64).rev() {
            heap.pop();
            assert_eq!(heap.len(), expected_len);
            assert_heap_property(&heap);
        }
    }

    #[test]
    fn test_from_vec_empty_and_single() {
        let heap: BinaryHeap<i32, _> = BinaryHeap::from_vec(HeapOrder::Min, Vec::new());
        assert!(heap.is_empty());

        let mut heap = BinaryHeap::from_vec(HeapOrder::Min, vec![7]);
        assert_eq!(heap.peek(), Some(&7));
        assert_eq!(heap.pop(), Some(7));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_from_vec_keeps_storage() {
        let mut data = Vec::with_capacity(32);
        data.extend([4, 2, 9]);
        let heap = BinaryHeap::from_vec(HeapOrder::Max, data);
        assert!(heap.capacity() >= 32);
        assert_eq!(heap.peek(), Some(&9));
    }

    #[test]
    fn test_grows_past_capacity_hint() {
        let mut heap = BinaryHeap::with_capacity(HeapOrder::Min, 2);
        for i in (0..10).rev() {
            heap.push(i);
        }
        assert_eq!(heap.len(), 10);
        assert!(heap.capacity() >= 10);
        assert_eq!(heap.peek(), Some(&0));
    }

    #[test]
    fn test_unsatisfiable_capacity_hint() {
        let mut heap: BinaryHeap<u64, _> = BinaryHeap::with_capacity(HeapOrder::Max, usize::MAX);
        assert_eq!(heap.capacity(), 0);
        heap.push(1);
        assert_eq!(heap.pop(), Some(1));

        let err = BinaryHeap::<u64, _>::try_with_capacity(HeapOrder::Max, usize::MAX).unwrap_err();
        assert!(matches!(err, HeapError::Allocation(_)));
    }

    #[test]
    fn test_try_from_slice() {
        let heap = BinaryHeap::try_from_slice(HeapOrder::Max, &[2, 7, 1]).unwrap();
        assert_eq!(heap.into_sorted_vec(), vec![7, 2, 1]);

        let heap = BinaryHeap::<i32, _>::try_from_slice(HeapOrder::Max, &[]).unwrap();
        assert!(heap.is_empty());
    }

    #[test]
    fn test_into_sorted_vec() {
        let heap = BinaryHeap::from_slice(HeapOrder::Min, &[5, 1, 4, 1, 3]);
        assert_eq!(heap.into_sorted_vec(), vec![1, 1, 3, 4, 5]);

        let heap = BinaryHeap::from_slice(HeapOrder::Max, &[5, 1, 4, 1, 3]);
        assert_eq!(heap.into_sorted_vec(), vec![5, 4, 3, 1, 1]);
    }

    #[test]
    fn test_into_iter_sorted() {
        let heap = BinaryHeap::from_slice(HeapOrder::Min, &[3, 2, 1]);
        let mut iter = heap.into_iter_sorted();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut heap = BinaryHeap::from_slice(HeapOrder::Max, &[1, 2, 3, 4]);
        let capacity = heap.capacity();
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.capacity(), capacity);
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_extend_and_collect() {
        let mut heap = BinaryHeap::new(HeapOrder::Min);
        heap.extend(vec![8, 3, 5]);
        heap.extend([1]);
        assert_heap_property(&heap);
        assert_eq!(heap.peek(), Some(&1));

        let heap: BinaryHeap<i32, HeapOrder> = [2, 9, 4].into_iter().collect();
        assert_eq!(heap.comparator(), &HeapOrder::Max);
        assert_eq!(heap.peek(), Some(&9));
    }

    #[test]
    fn test_iter_visits_every_element() {
        let heap = BinaryHeap::from_slice(HeapOrder::Max, &[3, 1, 2]);
        assert_eq!(heap.iter().next(), Some(&3));

        let mut seen: Vec<_> = (&heap).into_iter().copied().collect();
        seen.sort();
        assert_eq!(seen, vec![1, 2, 3]);

        let mut owned = heap.into_iter().collect::<Vec<_>>();
        owned.sort();
        assert_eq!(owned, vec![1, 2, 3]);
    }

    #[test]
    fn test_closure_orders_by_key() {
        let mut heap = BinaryHeap::new(|a: &&str, b: &&str| b.len().cmp(&a.len()));
        heap.extend(["three", "a", "seven!!", "io"]);
        assert_eq!(heap.pop(), Some("a"));
        assert_eq!(heap.pop(), Some("io"));
        assert_eq!(heap.pop(), Some("three"));
        assert_eq!(heap.pop(), Some("seven!!"));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut heap = BinaryHeap::from_slice(HeapOrder::Max, &[1, 5, 3]);
        let copy = heap.clone();
        heap.pop();
        assert_eq!(heap.len(), 2);
        assert_eq!(copy.into_sorted_vec(), vec![5, 3, 1]);
    }

    #[test]
    fn test_debug_output() {
        let heap = BinaryHeap::from_slice(HeapOrder::Max, &[1]);
        assert_eq!(format!("{:?}", heap), "BinaryHeap { len: 1, data: [1], .. }");
    }
}
