//! Deduplicated, priority-ordered edge queue.

use std::collections::{BinaryHeap, HashSet};

use quacker_core::Point;

use crate::edge::Edge;

/// Heap entry ordered by `priority`, then by insertion sequence.
#[derive(Clone, Copy, Debug)]
struct Entry {
    priority: i32,
    seq: u64,
    edge: Edge,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and among equal priorities the earliest offer.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-priority queue of edges paired with the set of every edge ever
/// offered.
///
/// Each `(from, to)` transition is accepted at most once over the lifetime
/// of the frontier, even after it has been taken. Equal priorities are
/// served first-in, first-out.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    offered: HashSet<Edge>,
    next_seq: u64,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `edge` at `priority` unless its `(from, to)` pair was offered
    /// before. Returns whether the edge was accepted.
    pub fn offer(&mut self, edge: Edge, priority: i32) -> bool {
        if !self.offered.insert(edge) {
            return false;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            edge,
        });
        true
    }

    /// Remove and return the lowest-priority edge, or `None` once exhausted.
    pub fn take(&mut self) -> Option<Edge> {
        self.heap.pop().map(|e| e.edge)
    }

    /// The edge [`take`](Self::take) would return next.
    pub fn peek(&self) -> Option<&Edge> {
        self.heap.peek().map(|e| &e.edge)
    }

    /// Whether the transition `from -> to` has ever been offered.
    pub fn was_offered(&self, from: Point, to: Point) -> bool {
        self.offered.contains(&Edge::new(from, to, 0))
    }

    /// Number of queued edges.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no edges are queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
