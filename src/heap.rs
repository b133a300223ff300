//! A fixed-capacity binary max-heap of integer priorities, stored in an array from index 1.
//!
//! Skipping index 0 keeps the family arithmetic simple: the children of `i` live at `2i` and
//! `2i + 1` and its parent at `i / 2`. Every public index is 1-based and must fall in
//! `[1, size]`.
//!
//! # Examples
//!
//! ```
//! use ordered::heap::BinaryMaxHeap;
//!
//! let mut heap = BinaryMaxHeap::from_slice(&[1, 10, 33, 41, 5, -1, 9, 17]);
//!
//! assert_eq!(heap.size(), 8);
//! assert_eq!(heap.max(), Some(41));
//!
//! assert_eq!(heap.extract_max(), Some(41));
//! assert_eq!(heap.max(), Some(33));
//!
//! heap.insert_priority(99).unwrap();
//! assert_eq!(heap.max(), Some(99));
//!
//! // Sorting drains the heap.
//! assert_eq!(heap.heap_sort(), vec![-1, 1, 5, 9, 10, 17, 33, 99]);
//! assert!(heap.is_empty());
//! ```

use std::mem;

use crate::error::{CapacityExceeded, HeapError, IndexOutOfBounds};
use crate::util::{self, ROOT};

/// The type of value a [`BinaryMaxHeap`] orders.
pub type Priority = i32;

/// A max-heap with room for a fixed number of priorities.
#[derive(Clone, Debug)]
pub struct BinaryMaxHeap {
    /// `max_size + 1` slots. Slot 0 is never read and `[1, size]` holds the live heap.
    heap: Vec<Priority>,
    max_size: usize,
    size: usize,
}

impl BinaryMaxHeap {
    /// Generates a new, empty heap that can hold up to `max_size` priorities.
    ///
    /// # Panics
    ///
    /// If `max_size + 1` slots can't be counted in a `usize` (index 0 is reserved), or allocating
    /// them fails.
    pub fn with_capacity(max_size: usize) -> Self {
        let slots = max_size.checked_add(1).expect("Capacity overflow!");
        Self {
            heap: vec![0; slots],
            max_size,
            size: 0,
        }
    }

    /// Builds a heap out of the (unordered) `source` priorities with room for as many again.
    ///
    /// The priorities are copied in as they are and then every parent, from the last one up to
    /// the root, is sifted down. Equal priorities may end up in a different arrangement than
    /// inserting them one at a time would give.
    pub fn from_slice(source: &[Priority]) -> Self {
        let mut heap = Self::with_capacity(source.len() * 2);
        heap.heap[ROOT..=source.len()].copy_from_slice(source);
        heap.size = source.len();

        for index in (ROOT..=heap.size / 2).rev() {
            heap.sift_down(index);
        }
        heap.check_invariant();
        heap
    }

    /// The number of priorities in the heap.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the heap holds no priorities.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The most priorities this heap can hold.
    pub fn capacity(&self) -> usize {
        self.max_size
    }

    /// The live priorities in storage order: the root first, then each level left to right.
    pub fn as_slice(&self) -> &[Priority] {
        &self.heap[ROOT..=self.size]
    }

    /// Adds `priority` to the bottom of the heap and sifts it up to its place.
    ///
    /// # Errors
    ///
    /// [`HeapError::CapacityExceeded`] if the heap is already full. Nothing is inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered::heap::BinaryMaxHeap;
    ///
    /// let mut heap = BinaryMaxHeap::with_capacity(1);
    ///
    /// assert!(heap.insert_priority(3).is_ok());
    /// assert!(heap.insert_priority(4).unwrap_err().is_capacity_exceeded());
    /// assert_eq!(heap.max(), Some(3));
    /// ```
    pub fn insert_priority(&mut self, priority: Priority) -> Result<(), HeapError> {
        if self.size == self.max_size {
            return Err(CapacityExceeded {
                capacity: self.max_size,
            }
            .into());
        }

        self.size += 1;
        self.heap[self.size] = priority;
        self.sift_up(self.size);
        self.check_invariant();
        Ok(())
    }

    /// The priority stored at `index`.
    ///
    /// # Errors
    ///
    /// [`HeapError::IndexOutOfBounds`] if `index` is outside `[1, size]`.
    pub fn get(&self, index: usize) -> Result<Priority, HeapError> {
        self.check_index(index)?;
        Ok(self.heap[index])
    }

    /// The largest priority, which always sits at the root.
    pub fn max(&self) -> Option<Priority> {
        if self.is_empty() {
            None
        } else {
            Some(self.heap[ROOT])
        }
    }

    /// Removes and returns the largest priority. The last priority takes over the root and is
    /// sifted down.
    pub fn extract_max(&mut self) -> Option<Priority> {
        let max = self.max()?;

        self.heap[ROOT] = self.heap[self.size];
        self.size -= 1;
        self.sift_down(ROOT);
        self.check_invariant();
        Some(max)
    }

    /// Removes the priority at `index` and returns it.
    ///
    /// This behaves as if the slot were overwritten with a value larger than any priority: that
    /// value would always win against its parent, so it is carried all the way to the root and
    /// then extracted. Rather than reserve such a value out of [`Priority`], the slot is moved to
    /// the root unconditionally, which keeps every `i32` a legal priority.
    ///
    /// # Errors
    ///
    /// [`HeapError::IndexOutOfBounds`] if `index` is outside `[1, size]`.
    pub fn remove(&mut self, index: usize) -> Result<Priority, HeapError> {
        self.check_index(index)?;
        let removed = self.heap[index];

        let mut index = index;
        while index > ROOT {
            let parent = util::parent(index);
            self.heap.swap(index, parent);
            index = parent;
        }
        self.extract_max();

        Ok(removed)
    }

    /// Overwrites the priority at `index`. A larger priority can only conflict with its parent,
    /// so it is sifted up; anything else can only conflict with its children and is sifted down.
    ///
    /// # Errors
    ///
    /// [`HeapError::IndexOutOfBounds`] if `index` is outside `[1, size]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered::heap::BinaryMaxHeap;
    ///
    /// let mut heap = BinaryMaxHeap::from_slice(&[3, 2, 1]);
    ///
    /// heap.change_priority(3, 99).unwrap();
    /// assert_eq!(heap.max(), Some(99));
    ///
    /// heap.change_priority(1, 0).unwrap();
    /// assert_eq!(heap.max(), Some(3));
    /// ```
    pub fn change_priority(&mut self, index: usize, priority: Priority) -> Result<(), HeapError> {
        self.check_index(index)?;

        let old_priority = mem::replace(&mut self.heap[index], priority);
        if priority > old_priority {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
        self.check_invariant();
        Ok(())
    }

    /// Sorts the priorities in place and returns them in ascending order.
    ///
    /// The root is repeatedly swapped with the last live slot, which then falls out of the heap,
    /// and the new root is sifted down. This consumes the heap: afterwards it is empty, although
    /// its capacity is unchanged.
    pub fn heap_sort(&mut self) -> Vec<Priority> {
        let len = self.size;

        for end in (ROOT + 1..=len).rev() {
            self.heap.swap(ROOT, end);
            self.size -= 1;
            self.sift_down(ROOT);
        }
        self.size = 0;

        self.heap[ROOT..=len].to_vec()
    }

    /// Checks that no priority is larger than its parent's.
    pub fn is_max_heap(&self) -> bool {
        (ROOT + 1..=self.size).all(|index| self.heap[util::parent(index)] >= self.heap[index])
    }

    fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if (ROOT..=self.size).contains(&index) {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                size: self.size,
            })
        }
    }

    /// Swaps the priority at `index` with its parent until the parent is at least as large.
    fn sift_up(&mut self, mut index: usize) {
        while index > ROOT {
            let parent = util::parent(index);
            if self.heap[index] <= self.heap[parent] {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    /// Swaps the priority at `index` with its larger child until neither child is larger.
    fn sift_down(&mut self, mut index: usize) {
        loop {
            let mut largest = index;
            for child in [util::left(index), util::right(index)] {
                if child <= self.size && self.heap[child] > self.heap[largest] {
                    largest = child;
                }
            }

            if largest == index {
                break;
            }
            self.heap.swap(index, largest);
            index = largest;
        }
    }

    fn check_invariant(&self) {
        // In tests, after every mutation, assert that we've restored/maintained the heap property.
        if cfg!(debug_assertions) {
            assert!(self.is_max_heap());
        }
    }
}

impl FromIterator<Priority> for BinaryMaxHeap {
    fn from_iter<I: IntoIterator<Item = Priority>>(iter: I) -> Self {
        let source: Vec<Priority> = iter.into_iter().collect();
        Self::from_slice(&source)
    }
}
