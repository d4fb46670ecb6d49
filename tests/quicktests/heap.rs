use ordered_containers::error::HeapError;
use ordered_containers::heap::BinaryHeap;

use crate::Op;

/// Whether every element of `data` is at least as large as its children.
fn is_max_heap<T: Ord>(data: &[T]) -> bool {
    (1..data.len()).all(|i| data[(i - 1) / 2] >= data[i])
}

fn drain<T: Ord>(mut heap: BinaryHeap<T>) -> Vec<T> {
    std::iter::from_fn(|| heap.remove().ok()).collect()
}

/// Applies a set of operations to our heap and to the standard library's.
/// After every operation the two must agree on the largest element and our
/// storage must still satisfy the heap property.
#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut heap = BinaryHeap::new();
    let mut model = std::collections::BinaryHeap::new();

    for op in ops {
        match op {
            Op::Add(x) => {
                heap.add(x);
                model.push(x);
            }
            Op::Remove(_) => {
                if heap.remove().ok() != model.pop() {
                    return false;
                }
            }
            Op::Walk => {
                let mut ours = heap.to_vec();
                let mut theirs = model.clone().into_vec();
                ours.sort_unstable();
                theirs.sort_unstable();
                if ours != theirs {
                    return false;
                }
            }
        }

        if !is_max_heap(heap.as_slice()) || heap.peek().ok() != model.peek() {
            return false;
        }
    }

    heap.len() == model.len()
}

#[quickcheck]
fn heapify_is_a_heap(xs: Vec<i8>) -> bool {
    let heap = BinaryHeap::heapify(xs.clone());
    heap.len() == xs.len() && is_max_heap(heap.as_slice())
}

#[quickcheck]
fn heapify_drains_like_sequential_add(xs: Vec<i8>) -> bool {
    let mut added = BinaryHeap::new();
    for x in &xs {
        added.add(*x);
    }

    drain(BinaryHeap::heapify(xs)) == drain(added)
}

#[quickcheck]
fn drains_descending(n: u8) -> bool {
    let heap: BinaryHeap<u8> = (0..n).collect();
    let drained = drain(heap);

    drained.len() == n as usize && drained.windows(2).all(|pair| pair[0] > pair[1])
}

#[quickcheck]
fn empty_errors_leave_heap_empty(xs: Vec<i8>) -> bool {
    let mut heap = BinaryHeap::heapify(xs.clone());
    for _ in &xs {
        heap.remove().unwrap();
    }

    heap.remove() == Err(HeapError::Empty) && heap.peek() == Err(HeapError::Empty) && heap.is_empty()
}
