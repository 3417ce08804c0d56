use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use ahash::{HashMap, HashMapExt};

use crate::{
    graphs::{NodeId, Weight},
    search::config::FrontierKind,
};

/// Discovered but not yet finalized nodes, ranked by their current distance.
///
/// `pop` returns the node with the smallest distance; ties go to the smaller
/// node id so that every implementation finalizes nodes in the same order.
pub trait Frontier: Send {
    /// Inserts `node`, or lowers its distance if it is already present.
    fn insert(&mut self, node: NodeId, distance: Weight);

    /// Removes and returns the closest node, or `None` if the frontier is empty.
    fn pop(&mut self) -> Option<(NodeId, Weight)>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn new_frontier(kind: FrontierKind) -> Box<dyn Frontier> {
    match kind {
        FrontierKind::LinearScan => Box::new(LinearScanFrontier::new()),
        FrontierKind::BinaryHeap => Box::new(HeapFrontier::new()),
    }
}

fn frontier_order(a: (NodeId, Weight), b: (NodeId, Weight)) -> Ordering {
    a.1.total_cmp(&b.1).then(a.0.cmp(&b.0))
}

/// Scans every open node on each `pop`. O(n) per pop.
#[derive(Debug, Default)]
pub struct LinearScanFrontier {
    open: HashMap<NodeId, Weight>,
}

impl LinearScanFrontier {
    pub fn new() -> Self {
        LinearScanFrontier {
            open: HashMap::new(),
        }
    }
}

impl Frontier for LinearScanFrontier {
    fn insert(&mut self, node: NodeId, distance: Weight) {
        let entry = self.open.entry(node).or_insert(distance);
        if distance < *entry {
            *entry = distance;
        }
    }

    fn pop(&mut self) -> Option<(NodeId, Weight)> {
        let (node, distance) = self
            .open
            .iter()
            .map(|(&node, &distance)| (node, distance))
            .min_by(|&a, &b| frontier_order(a, b))?;
        self.open.remove(&node);
        Some((node, distance))
    }

    fn len(&self) -> usize {
        self.open.len()
    }
}

#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    node: NodeId,
    distance: Weight,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        frontier_order((self.node, self.distance), (other.node, other.distance))
    }
}

/// Binary heap without decrease-key: lowering a distance pushes a second
/// entry and outdated entries are skipped on `pop`.
#[derive(Debug, Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<Reverse<HeapEntry>>,
    open: HashMap<NodeId, Weight>,
}

impl HeapFrontier {
    pub fn new() -> Self {
        HeapFrontier {
            heap: BinaryHeap::new(),
            open: HashMap::new(),
        }
    }
}

impl Frontier for HeapFrontier {
    fn insert(&mut self, node: NodeId, distance: Weight) {
        match self.open.get(&node) {
            Some(&current) if current <= distance => {}
            _ => {
                self.open.insert(node, distance);
                self.heap.push(Reverse(HeapEntry { node, distance }));
            }
        }
    }

    fn pop(&mut self) -> Option<(NodeId, Weight)> {
        while let Some(Reverse(HeapEntry { node, distance })) = self.heap.pop() {
            if self.open.get(&node) == Some(&distance) {
                self.open.remove(&node);
                return Some((node, distance));
            }
        }
        None
    }

    fn len(&self) -> usize {
        self.open.len()
    }
}
