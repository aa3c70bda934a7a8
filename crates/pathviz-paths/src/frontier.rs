//! The [`Frontier`]: a min-heap of cell indices keyed by `(key, seq)`.
//!
//! `seq` is a per-frontier insertion counter, so among entries with the same
//! key the one pushed first pops first. Ordering never depends on cell
//! identity.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    key: u64,
    seq: u64,
    idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest (key, seq).
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority frontier of flat cell indices.
#[derive(Debug, Default, Clone)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `idx` with priority `key`. Returns the sequence number used.
    pub fn push(&mut self, idx: usize, key: u64) -> u64 {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry { key, seq, idx });
        seq
    }

    /// Push `idx` keyed by its own sequence number, giving plain FIFO order.
    pub fn push_fifo(&mut self, idx: usize) -> u64 {
        let seq = self.seq;
        self.push(idx, seq)
    }

    /// Pop the entry with the smallest `(key, seq)`, returning `(idx, key)`.
    pub fn pop(&mut self) -> Option<(usize, u64)> {
        self.heap.pop().map(|e| (e.idx, e.key))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
