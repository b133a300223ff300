//! Errors surfaced by [`BinaryMaxHeap`](crate::heap::BinaryMaxHeap). The tree has no error type:
//! a missing key is reported as `false` or `None` instead.

use derive_more::{Display, Error, From, IsVariant};

/// An index outside the live range `[1, size]` of a heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Index {index} out of bounds for heap with {size} elements!")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The number of live elements at the time of the request.
    pub size: usize,
}

/// An insertion into a heap that is already holding `capacity` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Capacity of {capacity} exceeded!")]
pub struct CapacityExceeded {
    /// The fixed capacity of the heap.
    pub capacity: usize,
}

/// Every way a heap operation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum HeapError {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`CapacityExceeded`].
    CapacityExceeded(CapacityExceeded),
}
