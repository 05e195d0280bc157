//! Graph validation logic.

use std::collections::HashSet;

use cg_core::{Slot, UNCOLORED};

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// Validate node bookkeeping: arena, insertion order and index agree.
pub(crate) fn validate_nodes(graph: &Graph) -> GraphResult<()> {
    // Every live arena entry must be indexed at its own slot
    let mut live = 0;
    for (i, entry) in graph.arena.iter().enumerate() {
        let Some(node) = entry else { continue };
        live += 1;
        if graph.index.slot(node.id) != Slot::from_index(i) {
            return Err(GraphError::InconsistentIndex { id: node.id });
        }
    }

    // Every indexed id must point at a live node carrying that id
    for (id, slot) in graph.index.iter() {
        match graph.node_at(slot) {
            Some(node) if node.id == id => {}
            _ => return Err(GraphError::InconsistentIndex { id }),
        }
    }

    // Insertion order lists each live slot exactly once
    let mut seen = HashSet::new();
    for &slot in &graph.order {
        let node = graph
            .node_at(slot)
            .ok_or(GraphError::VacantSlot { slot })?;
        if !seen.insert(slot) {
            return Err(GraphError::InconsistentIndex { id: node.id });
        }
    }
    if live != graph.order.len() || live != graph.index.len() {
        let missing = graph
            .arena
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| Some((Slot::from_index(i)?, entry.as_ref()?)))
            .find(|(slot, _)| !seen.contains(slot));
        if let Some((_, node)) = missing {
            return Err(GraphError::InconsistentIndex { id: node.id });
        }
    }

    // Free slots must be vacant
    for &slot in &graph.free {
        if let Some(node) = graph.node_at(slot) {
            return Err(GraphError::InconsistentIndex { id: node.id });
        }
    }

    Ok(())
}

/// Validate edges: no self-loops, no duplicates, no dangling endpoints,
/// and the lookup set mirrors the edge list.
pub(crate) fn validate_edges(graph: &Graph) -> GraphResult<()> {
    let mut seen = HashSet::with_capacity(graph.edges.len());
    for &edge in &graph.edges {
        if edge.is_self_loop() {
            return Err(GraphError::SelfLoop { edge });
        }
        if !seen.insert(edge) {
            return Err(GraphError::DuplicateEdge { edge });
        }
        for id in [edge.a, edge.b] {
            if !graph.contains_node(id) {
                return Err(GraphError::DanglingEdge { edge, id });
            }
        }
        if !graph.edge_set.contains(&edge) {
            return Err(GraphError::InconsistentEdgeIndex { edge });
        }
    }

    if let Some(&edge) = graph.edge_set.iter().find(|e| !seen.contains(*e)) {
        return Err(GraphError::InconsistentEdgeIndex { edge });
    }

    Ok(())
}

/// Validate a colouring: every node coloured, no edge between equal colours.
pub(crate) fn validate_coloring(graph: &Graph) -> GraphResult<()> {
    if let Some(node) = graph.nodes().find(|n| n.color == UNCOLORED) {
        return Err(GraphError::Uncolored { id: node.id });
    }

    for &edge in &graph.edges {
        let a = graph.get_node(edge.a).map(|n| n.color);
        let b = graph.get_node(edge.b).map(|n| n.color);
        match (a, b) {
            (Some(a), Some(b)) if a == b => {
                return Err(GraphError::ImproperColoring { edge, color: a });
            }
            (None, _) => return Err(GraphError::DanglingEdge { edge, id: edge.a }),
            (_, None) => return Err(GraphError::DanglingEdge { edge, id: edge.b }),
            _ => {}
        }
    }

    Ok(())
}
