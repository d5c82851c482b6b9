//! Ordering and membership structures shared by the search strategies.
//!
//! - [`FifoFrontier`] - first-in-first-out, used by breadth-first search
//! - [`LifoFrontier`] - last-in-first-out, used by the depth-first family
//! - [`PriorityFrontier`] - ascending `(key, node)` order with decrease-key,
//!   used by uniform-cost, greedy best-first and A*
//! - [`NodeSet`] - membership checks for explored and queued nodes

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::graph::{Cost, NodeId};

/// Node waiting on a frontier together with the bookkeeping needed to expand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub node: NodeId,
    /// Accumulated path cost from the source.
    pub cost: Cost,
    /// Ordering key for priority frontiers; ignored by FIFO/LIFO.
    pub key: Cost,
    /// Number of edges between the source and this node.
    pub depth: usize,
}

impl FrontierEntry {
    pub fn root(node: NodeId, key: Cost) -> Self {
        Self {
            node,
            cost: 0,
            key,
            depth: 0,
        }
    }
}

/// Container of nodes awaiting expansion.
///
/// Every implementation tracks membership so a node is never queued twice.
pub trait Frontier {
    fn push(&mut self, entry: FrontierEntry);

    fn pop(&mut self) -> Option<FrontierEntry>;

    fn contains(&self, node: NodeId) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the queued entry for `entry.node` when `entry` reaches it more
    /// cheaply. Returns `true` when the replacement happened.
    fn decrease_key(&mut self, _entry: FrontierEntry) -> bool {
        false
    }
}

/// Growable membership set over dense node identifiers.
#[derive(Debug, Clone, Default)]
pub struct NodeSet {
    members: Vec<bool>,
    len: usize,
}

impl NodeSet {
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            members: vec![false; node_count],
            len: 0,
        }
    }

    /// Insert `node`; returns `false` when it was already present.
    pub fn insert(&mut self, node: NodeId) -> bool {
        if node >= self.members.len() {
            self.members.resize(node + 1, false);
        }
        if self.members[node] {
            return false;
        }
        self.members[node] = true;
        self.len += 1;
        true
    }

    /// Remove `node`; returns `false` when it was absent.
    pub fn remove(&mut self, node: NodeId) -> bool {
        match self.members.get_mut(node) {
            Some(member) if *member => {
                *member = false;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.members.get(node).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter_map(|(node, member)| member.then_some(node))
    }

    pub fn to_sorted_set(&self) -> BTreeSet<NodeId> {
        self.iter().collect()
    }
}

/// First-in-first-out frontier.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<FrontierEntry>,
    queued: NodeSet,
}

impl FifoFrontier {
    pub fn new(node_count: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            queued: NodeSet::with_capacity(node_count),
        }
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.queued.insert(entry.node);
        self.queue.push_back(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        let entry = self.queue.pop_front()?;
        self.queued.remove(entry.node);
        Some(entry)
    }

    fn contains(&self, node: NodeId) -> bool {
        self.queued.contains(node)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last-in-first-out frontier.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<FrontierEntry>,
    queued: NodeSet,
}

impl LifoFrontier {
    pub fn new(node_count: usize) -> Self {
        Self {
            stack: Vec::new(),
            queued: NodeSet::with_capacity(node_count),
        }
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.queued.insert(entry.node);
        self.stack.push(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        let entry = self.stack.pop()?;
        self.queued.remove(entry.node);
        Some(entry)
    }

    fn contains(&self, node: NodeId) -> bool {
        self.queued.contains(node)
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    /// A strictly shallower entry replaces the queued one and moves to the top.
    fn decrease_key(&mut self, entry: FrontierEntry) -> bool {
        let Some(index) = self.stack.iter().position(|queued| queued.node == entry.node) else {
            return false;
        };
        if entry.depth >= self.stack[index].depth {
            return false;
        }
        self.stack.remove(index);
        self.stack.push(entry);
        true
    }
}

/// Frontier ordered by `(key, node)` ascending.
///
/// Ties on `key` go to the lower node id, so extraction order is a strict
/// total order and results are reproducible. Decrease-key is a delete of the
/// old keyed entry followed by an insert under the new key.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    entries: BTreeMap<(Cost, NodeId), FrontierEntry>,
    keys: BTreeMap<NodeId, Cost>,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key under which `node` is currently queued.
    pub fn key_of(&self, node: NodeId) -> Option<Cost> {
        self.keys.get(&node).copied()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        if let Some(old_key) = self.keys.insert(entry.node, entry.key) {
            self.entries.remove(&(old_key, entry.node));
        }
        self.entries.insert((entry.key, entry.node), entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        let (_, entry) = self.entries.pop_first()?;
        self.keys.remove(&entry.node);
        Some(entry)
    }

    fn contains(&self, node: NodeId) -> bool {
        self.keys.contains_key(&node)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn decrease_key(&mut self, entry: FrontierEntry) -> bool {
        let Some(old_key) = self.key_of(entry.node) else {
            return false;
        };
        let Some(queued) = self.entries.get(&(old_key, entry.node)) else {
            return false;
        };
        if entry.cost >= queued.cost {
            return false;
        }
        self.entries.remove(&(old_key, entry.node));
        self.entries.insert((entry.key, entry.node), entry);
        self.keys.insert(entry.node, entry.key);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(node: NodeId, cost: Cost, key: Cost) -> FrontierEntry {
        FrontierEntry {
            node,
            cost,
            key,
            depth: 1,
        }
    }

    #[test]
    fn fifo_and_lifo_order() {
        let mut fifo = FifoFrontier::new(3);
        let mut lifo = LifoFrontier::new(3);
        for node in 0..3 {
            fifo.push(entry(node, 0, 0));
            lifo.push(entry(node, 0, 0));
        }

        assert!(fifo.contains(1) && lifo.contains(1));
        let fifo_order: Vec<_> = std::iter::from_fn(|| fifo.pop()).map(|e| e.node).collect();
        let lifo_order: Vec<_> = std::iter::from_fn(|| lifo.pop()).map(|e| e.node).collect();
        assert_eq!(fifo_order, vec![0, 1, 2]);
        assert_eq!(lifo_order, vec![2, 1, 0]);
        assert!(!fifo.contains(1) && lifo.is_empty());
    }

    #[test]
    fn lifo_decrease_key_moves_shallower_entry_to_top() {
        let mut lifo = LifoFrontier::new(3);
        lifo.push(FrontierEntry { depth: 3, ..entry(0, 0, 0) });
        lifo.push(entry(1, 0, 0));

        assert!(!lifo.decrease_key(FrontierEntry { depth: 3, ..entry(0, 0, 0) }));
        assert!(lifo.decrease_key(FrontierEntry { depth: 2, ..entry(0, 0, 0) }));
        assert_eq!(lifo.len(), 2);
        assert_eq!(lifo.pop().map(|e| (e.node, e.depth)), Some((0, 2)));
    }

    #[test]
    fn priority_ties_break_on_node_id() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(entry(4, 2, 2));
        frontier.push(entry(1, 2, 2));
        frontier.push(entry(3, 1, 1));

        let order: Vec<_> = std::iter::from_fn(|| frontier.pop())
            .map(|e| e.node)
            .collect();
        assert_eq!(order, vec![3, 1, 4]);
    }

    #[test]
    fn decrease_key_only_accepts_strictly_cheaper_cost() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(entry(2, 5, 9));
        frontier.push(entry(1, 4, 6));

        assert!(!frontier.decrease_key(entry(2, 5, 7)));
        assert_eq!(frontier.key_of(2), Some(9));

        assert!(frontier.decrease_key(entry(2, 3, 3)));
        assert_eq!(frontier.key_of(2), Some(3));
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop().map(|e| (e.node, e.cost)), Some((2, 3)));

        assert!(!frontier.decrease_key(entry(7, 0, 0)));
    }

    #[test]
    fn node_set_tracks_membership() {
        let mut set = NodeSet::with_capacity(2);
        assert!(set.insert(5));
        assert!(!set.insert(5));
        assert!(set.insert(0));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 5]);
        assert!(set.remove(5));
        assert!(!set.remove(5));
        assert!(!set.contains(9));
    }
}
