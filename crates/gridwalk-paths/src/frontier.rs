//! Discovered-but-unprocessed cells of one search side.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use gridwalk_core::Coord;

use crate::algorithm::Policy;

/// A frontier entry: the cell, the cell it was reached from and the
/// distance it was reached with.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    pub(crate) coord: Coord,
    pub(crate) from: Option<Coord>,
    pub(crate) g: i32,
    /// Priority key; lower pops first. Unused by FIFO/LIFO frontiers.
    pub(crate) key: f64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first, and
        // among equal keys the smallest coordinate.
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.coord.cmp(&self.coord))
            .then_with(|| other.g.cmp(&self.g))
    }
}

#[derive(Debug)]
pub(crate) enum Frontier {
    Queue(VecDeque<Entry>),
    Stack(Vec<Entry>),
    Heap(BinaryHeap<Entry>),
}

impl Frontier {
    pub(crate) fn new(policy: Policy) -> Self {
        match policy {
            Policy::Fifo => Self::Queue(VecDeque::new()),
            Policy::Lifo => Self::Stack(Vec::new()),
            Policy::Distance | Policy::DistanceHeuristic | Policy::Heuristic => {
                Self::Heap(BinaryHeap::new())
            }
        }
    }

    pub(crate) fn push(&mut self, e: Entry) {
        match self {
            Self::Queue(q) => q.push_back(e),
            Self::Stack(s) => s.push(e),
            Self::Heap(h) => h.push(e),
        }
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        match self {
            Self::Queue(q) => q.pop_front(),
            Self::Stack(s) => s.pop(),
            Self::Heap(h) => h.pop(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Queue(q) => q.len(),
            Self::Stack(s) => s.len(),
            Self::Heap(h) => h.len(),
        }
    }
}
