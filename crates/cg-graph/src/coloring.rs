//! Greedy vertex colouring.

use cg_core::{first_free, Color, UNCOLORED};
use tracing::debug;

use crate::graph::Graph;

impl Graph {
    /// Colour every node greedily, visiting nodes in insertion order.
    ///
    /// Each node gets the smallest positive colour not already held by a
    /// coloured neighbour. The result is a proper colouring using at most
    /// `max degree + 1` colours; it is not guaranteed to be minimal.
    /// Returns the number of colours used.
    pub fn coloring(&mut self) -> Color {
        for &slot in &self.order {
            if let Some(Some(node)) = self.arena.get_mut(slot.index()) {
                node.color = UNCOLORED;
            }
        }

        // Neighbour slots per arena index.
        let mut adjacency = vec![Vec::new(); self.arena.len()];
        for edge in &self.edges {
            if let (Some(a), Some(b)) = (self.index.slot(edge.a), self.index.slot(edge.b)) {
                adjacency[a.index()].push(b);
                adjacency[b.index()].push(a);
            }
        }

        // A greedy colour never exceeds the node count.
        let mut taken = vec![false; self.order.len() + 1];
        let mut used = UNCOLORED;

        for i in 0..self.order.len() {
            let slot = self.order[i];
            taken.fill(false);
            for neighbor in &adjacency[slot.index()] {
                let color = self.node_at(*neighbor).map_or(UNCOLORED, |n| n.color);
                if color != UNCOLORED {
                    if let Some(flag) = taken.get_mut(color as usize) {
                        *flag = true;
                    }
                }
            }

            let color = first_free(&taken);
            if let Some(node) = self.node_at_mut(slot) {
                node.color = color;
            }
            used = used.max(color);
        }

        debug!(nodes = self.order.len(), colors = used, "colored graph");
        used
    }
}
