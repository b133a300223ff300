use ordered::{BinaryMaxHeap, HeapError};
use quickcheck_macros::quickcheck;

use crate::HeapOp;

/// Removes one occurrence of `priority` from the model, returning whether there was one.
fn take(model: &mut Vec<i32>, priority: i32) -> bool {
    match model.iter().position(|p| *p == priority) {
        Some(pos) => {
            model.swap_remove(pos);
            true
        }
        None => false,
    }
}

/// Applies a set of operations to a heap and an unordered `Vec` of the same priorities, checking
/// the heap property and the maximum after every one.
fn do_ops(ops: &[HeapOp], heap: &mut BinaryMaxHeap, model: &mut Vec<i32>) -> bool {
    for op in ops {
        let ok = match *op {
            HeapOp::Insert(p) => match heap.insert_priority(p) {
                Ok(()) => {
                    model.push(p);
                    true
                }
                Err(HeapError::CapacityExceeded(_)) => model.len() == heap.capacity(),
                Err(_) => false,
            },
            HeapOp::ExtractMax => heap.extract_max() == model.iter().max().copied() && {
                model.iter().max().copied().map_or(true, |max| take(model, max))
            },
            HeapOp::Remove(index) => {
                let index = usize::from(index) % (heap.size() + 2);
                match heap.remove(index) {
                    Ok(removed) => take(model, removed),
                    Err(err) => err.is_index_out_of_bounds() && (index == 0 || index > model.len()),
                }
            }
            HeapOp::ChangePriority(index, p) => {
                let index = usize::from(index) % (heap.size() + 2);
                match heap.get(index) {
                    Ok(old) => heap.change_priority(index, p).is_ok() && take(model, old) && {
                        model.push(p);
                        true
                    },
                    Err(_) => heap.change_priority(index, p).is_err(),
                }
            }
        };

        if !ok
            || !heap.is_max_heap()
            || heap.size() != model.len()
            || heap.max() != model.iter().max().copied()
        {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations(initial: Vec<i32>, ops: Vec<HeapOp>) -> bool {
    let mut heap = BinaryMaxHeap::from_slice(&initial);
    let mut model = initial;

    do_ops(&ops, &mut heap, &mut model)
}

#[quickcheck]
fn from_slice_is_a_heap(xs: Vec<i32>) -> bool {
    let heap = BinaryMaxHeap::from_slice(&xs);

    heap.is_max_heap()
        && heap.size() == xs.len()
        && heap.capacity() == 2 * xs.len()
        && heap.max() == xs.iter().max().copied()
}

#[quickcheck]
fn heap_sort_is_sorted(xs: Vec<i32>) -> bool {
    let mut heap = BinaryMaxHeap::from_slice(&xs);
    let mut expected = xs;
    expected.sort();

    heap.heap_sort() == expected && heap.size() == 0
}

#[quickcheck]
fn inserted_heap_sort_is_sorted(xs: Vec<i32>) -> bool {
    let mut heap = BinaryMaxHeap::with_capacity(xs.len());
    for x in &xs {
        heap.insert_priority(*x).unwrap();
    }
    let mut expected = xs;
    expected.sort();

    heap.is_max_heap() && heap.heap_sort() == expected && heap.is_empty()
}
