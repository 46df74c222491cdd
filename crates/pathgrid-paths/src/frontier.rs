//! Min-priority frontier shared by the uniform-cost and A* searches.
//!
//! `BinaryHeap` alone does not order equal priorities, so every entry carries
//! an insertion sequence number as a secondary key. Equal-priority entries
//! pop in the order they were pushed, which preserves the neighbor
//! expansion order across runs.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use pathgrid_core::CellKey;

/// A frontier record: `priority` is the cumulative cost for uniform-cost
/// search and `f = g + h` for A*; `g` is the cost at push time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) key: CellKey,
    pub(crate) priority: i32,
    pub(crate) g: i32,
    seq: u64,
}

impl Entry {
    fn order_key(&self) -> Reverse<(i32, u64)> {
        Reverse((self.priority, self.seq))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority, then
        // earliest push, first.
        self.order_key().cmp(&other.order_key())
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue with lazy deletion: superseded entries stay in the heap
/// and are recognised by the caller when popped.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: CellKey, priority: i32, g: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            key,
            priority,
            g,
            seq,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
