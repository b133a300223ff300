//! Index arithmetic for a heap stored from index 1. Slot 0 is never used so the
//! children of `i` are `2i` and `2i + 1` and its parent is `i / 2`.

pub(crate) const ROOT: usize = 1;

pub(crate) fn parent(index: usize) -> usize {
    index / 2
}

pub(crate) fn left(index: usize) -> usize {
    2 * index
}

pub(crate) fn right(index: usize) -> usize {
    2 * index + 1
}
