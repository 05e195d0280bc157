//! Node identity lookup.
//!
//! Maps caller-supplied `NodeId`s to the arena `Slot` holding the node,
//! so lookups do not scan the node collection.

use std::collections::HashMap;

use cg_core::{NodeId, Slot};

/// Index from node identity to arena slot.
#[derive(Debug, Clone, Default)]
pub struct NodeIndex {
    slots: HashMap<NodeId, Slot>,
}

impl NodeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Slot holding `id`, if indexed.
    pub fn slot(&self, id: NodeId) -> Option<Slot> {
        self.slots.get(&id).copied()
    }

    /// Record `id` at `slot`. Returns false (and leaves the index untouched)
    /// if `id` is already present.
    pub fn insert(&mut self, id: NodeId, slot: Slot) -> bool {
        if self.slots.contains_key(&id) {
            return false;
        }
        self.slots.insert(id, slot);
        true
    }

    /// Drop `id`, returning the slot it occupied.
    pub fn remove(&mut self, id: NodeId) -> Option<Slot> {
        self.slots.remove(&id)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Iterate over all (id, slot) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Slot)> + '_ {
        self.slots.iter().map(|(&id, &slot)| (id, slot))
    }
}
