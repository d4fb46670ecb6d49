use ordered_containers::error::QueueError;
use ordered_containers::priority_queue::PriorityQueue;

use crate::Op;

/// Applies a set of operations to a queue and to a `Vec` of `(priority, item)`
/// pairs kept in insertion order. Removing from the model takes the first pair
/// with the highest priority, which is exactly the queue's contract.
#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op<u8>>) -> bool {
    let mut queue = PriorityQueue::new();
    let mut model: Vec<(u8, usize)> = Vec::new();

    for (item, op) in ops.into_iter().enumerate() {
        match op {
            Op::Add(priority) => {
                // Priorities are squeezed into a few buckets so ties are common.
                let priority = priority % 4;
                queue.add(item, priority);
                model.push((priority, item));
            }
            Op::Remove(_) | Op::Walk => {
                let front = model
                    .iter()
                    .enumerate()
                    .max_by(|(i, (p, _)), (j, (q, _))| p.cmp(q).then(j.cmp(i)))
                    .map(|(pos, _)| pos);
                let expected = front.map(|pos| model.remove(pos).1).ok_or(QueueError::Empty);
                if queue.remove() != expected {
                    return false;
                }
            }
        }
        if queue.len() != model.len() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn equal_priorities_are_fifo(n: u8) -> bool {
    let mut queue = PriorityQueue::new();
    for item in 0..n {
        queue.add(item, ());
    }

    (0..n).all(|item| queue.remove() == Ok(item)) && queue.remove() == Err(QueueError::Empty)
}

#[quickcheck]
fn distinct_priorities_drain_highest_first(priorities: Vec<i16>) -> bool {
    let mut priorities = priorities;
    priorities.sort_unstable();
    priorities.dedup();

    // Add in an order unrelated to priority.
    let mut queue = PriorityQueue::new();
    for (i, &priority) in priorities.iter().enumerate() {
        if i % 2 == 0 {
            queue.add(priority, priority);
        }
    }
    for (i, &priority) in priorities.iter().enumerate() {
        if i % 2 == 1 {
            queue.add(priority, priority);
        }
    }

    priorities.iter().rev().all(|&p| queue.remove() == Ok(p))
}
