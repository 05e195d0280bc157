//! Core graph data structures.

use std::collections::HashSet;

use cg_core::{Color, NodeId, Slot, UNCOLORED};
use tracing::{debug, trace, warn};

use crate::config::{DegreePolicy, GraphConfig};
use crate::edge::Edge;
use crate::error::{GraphError, GraphResult};
use crate::indexing::NodeIndex;
use crate::validate;

/// A vertex: caller identity plus its current colour (0 = uncoloured).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub color: Color,
}

impl Node {
    pub fn is_colored(&self) -> bool {
        self.color != UNCOLORED
    }
}

/// A mutable undirected graph.
///
/// The graph stores:
/// - Nodes in an arena addressed by `Slot`, with vacated slots recycled.
/// - The insertion order of live nodes, which drives colouring.
/// - Edges in insertion order, plus a set for symmetric duplicate checks.
///
/// Every stored edge connects two distinct live nodes.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    config: GraphConfig,

    pub(crate) arena: Vec<Option<Node>>,
    pub(crate) free: Vec<Slot>,
    pub(crate) order: Vec<Slot>,
    pub(crate) index: NodeIndex,

    pub(crate) edges: Vec<Edge>,
    pub(crate) edge_set: HashSet<Edge>,
}

impl Graph {
    /// Create an empty graph with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    /// Add a node with colour 0.
    ///
    /// Returns `None` without touching the graph if `id` already exists.
    pub fn add_node(&mut self, id: NodeId) -> Option<&Node> {
        if self.index.contains(id) {
            trace!(node = %id, "node already exists");
            return None;
        }

        let slot = match self.free.pop() {
            Some(slot) => slot,
            None => {
                let Some(slot) = Slot::from_index(self.arena.len()) else {
                    warn!(node = %id, "node arena is full");
                    return None;
                };
                self.arena.push(None);
                slot
            }
        };

        self.arena[slot.index()] = Some(Node {
            id,
            color: UNCOLORED,
        });
        self.order.push(slot);
        self.index.insert(id, slot);
        debug!(node = %id, %slot, "added node");

        self.arena[slot.index()].as_ref()
    }

    /// Add an undirected edge, creating missing endpoints (`a` first).
    ///
    /// Self-loops and edges already present in either orientation are
    /// rejected with `false`.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        if edge.is_self_loop() {
            trace!(%edge, "rejected self-loop");
            return false;
        }
        if self.edge_set.contains(&edge) {
            trace!(%edge, "rejected duplicate edge");
            return false;
        }

        self.add_node(edge.a);
        self.add_node(edge.b);

        self.edges.push(edge);
        self.edge_set.insert(edge);
        debug!(%edge, "added edge");
        true
    }

    /// Add every edge in turn, skipping rejected ones.
    ///
    /// Not atomic: a rejected edge does not stop the rest. Returns how many
    /// edges were inserted.
    pub fn add_multiple_edges(&mut self, edges: impl IntoIterator<Item = Edge>) -> usize {
        let mut inserted = 0;
        for edge in edges {
            if self.add_edge(edge) {
                inserted += 1;
            }
        }
        inserted
    }

    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.node_at(self.index.slot(id)?)
    }

    pub(crate) fn node_at(&self, slot: Slot) -> Option<&Node> {
        self.arena.get(slot.index())?.as_ref()
    }

    pub(crate) fn node_at_mut(&mut self, slot: Slot) -> Option<&mut Node> {
        self.arena.get_mut(slot.index())?.as_mut()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.index.contains(id)
    }

    /// Whether an equal edge (in either orientation) is stored.
    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edge_set.contains(edge)
    }

    /// Remove a node together with every edge incident to it.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<Node> {
        let slot = self
            .index
            .remove(id)
            .ok_or(GraphError::NodeNotFound { id })?;
        let node = self
            .arena
            .get_mut(slot.index())
            .and_then(Option::take)
            .ok_or(GraphError::InconsistentIndex { id })?;

        self.order.retain(|&s| s != slot);
        self.free.push(slot);

        let before = self.edges.len();
        let edge_set = &mut self.edge_set;
        self.edges.retain(|edge| {
            if edge.touches(id) {
                edge_set.remove(edge);
                false
            } else {
                true
            }
        });
        debug!(
            node = %id,
            dropped_edges = before - self.edges.len(),
            "removed node"
        );

        Ok(node)
    }

    /// Remove the stored edge equal to `edge`. Endpoints stay, even if isolated.
    ///
    /// Returns the edge in its stored orientation.
    pub fn remove_edge(&mut self, edge: &Edge) -> GraphResult<Edge> {
        if !self.edge_set.remove(edge) {
            return Err(GraphError::EdgeNotFound { edge: *edge });
        }
        let pos = self
            .edges
            .iter()
            .position(|e| e == edge)
            .ok_or(GraphError::EdgeNotFound { edge: *edge })?;
        let removed = self.edges.remove(pos);
        debug!(edge = %removed, "removed edge");
        Ok(removed)
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of edges incident to `id`.
    ///
    /// Under `DegreePolicy::Strict` a degree of zero is an error for both
    /// missing and isolated nodes. Under `AllowIsolated` isolated nodes
    /// report 0 and only missing nodes fail.
    pub fn node_degree(&self, id: NodeId) -> GraphResult<usize> {
        let degree = self.edges.iter().filter(|edge| edge.touches(id)).count();

        match self.config.degree_policy {
            DegreePolicy::Strict if degree == 0 => Err(GraphError::ZeroDegree { id }),
            DegreePolicy::Strict => Ok(degree),
            DegreePolicy::AllowIsolated if !self.contains_node(id) => {
                Err(GraphError::NodeNotFound { id })
            }
            DegreePolicy::AllowIsolated => Ok(degree),
        }
    }

    /// Maximum node degree; 0 for an empty graph.
    ///
    /// Fails with the first `node_degree` error encountered.
    pub fn graph_degree(&self) -> GraphResult<usize> {
        self.nodes()
            .try_fold(0, |max, node| -> GraphResult<usize> {
                Ok(max.max(self.node_degree(node.id)?))
            })
    }

    /// Live nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.order
            .iter()
            .filter_map(|&slot| self.node_at(slot))
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Nodes adjacent to `id`, in edge insertion order.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.iter().filter_map(move |edge| edge.other(id))
    }

    /// Drop every node and edge. The configuration is kept.
    pub fn clear(&mut self) {
        debug!(
            nodes = self.order.len(),
            edges = self.edges.len(),
            "clearing graph"
        );
        self.arena.clear();
        self.free.clear();
        self.order.clear();
        self.index.clear();
        self.edges.clear();
        self.edge_set.clear();
    }

    /// Check index, arena, order and edge invariants.
    pub fn validate(&self) -> GraphResult<()> {
        validate::validate_nodes(self)?;
        validate::validate_edges(self)
    }

    /// Check that every node is coloured and no edge joins equal colours.
    pub fn validate_coloring(&self) -> GraphResult<()> {
        validate::validate_coloring(self)
    }

    pub fn is_properly_colored(&self) -> bool {
        self.validate_coloring().is_ok()
    }
}

impl Extend<Edge> for Graph {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        self.add_multiple_edges(iter);
    }
}

impl FromIterator<Edge> for Graph {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let mut graph = Graph::new();
        graph.add_multiple_edges(iter);
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn n(raw: u64) -> NodeId {
        NodeId::new(raw)
    }

    fn graph_of(pairs: &[(u64, u64)]) -> Graph {
        pairs.iter().map(|&(a, b)| Edge::new(a, b)).collect()
    }

    #[test]
    fn add_node_twice_is_rejected() {
        let mut graph = Graph::new();
        assert_eq!(graph.add_node(n(4)).map(|node| node.color), Some(UNCOLORED));
        assert!(graph.add_node(n(4)).is_none());
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn add_edge_creates_endpoints_in_order() {
        let mut graph = Graph::new();
        assert!(graph.add_edge(Edge::new(9, 3)));
        let ids: Vec<u64> = graph.nodes().map(|node| node.id.get()).collect();
        assert_eq!(ids, vec![9, 3]);
    }

    #[test]
    fn removed_slot_is_recycled() {
        let mut graph = Graph::new();
        graph.add_node(n(1));
        graph.add_node(n(2));
        let slot = graph.index.slot(n(1)).unwrap();

        graph.remove_node(n(1)).unwrap();
        assert_eq!(graph.free, vec![slot]);

        graph.add_node(n(3));
        assert_eq!(graph.index.slot(n(3)), Some(slot));
        assert!(graph.free.is_empty());
        assert_eq!(graph.arena.len(), 2);

        // Recycling a slot must not disturb insertion order.
        let ids: Vec<u64> = graph.nodes().map(|node| node.id.get()).collect();
        assert_eq!(ids, vec![2, 3]);
        graph.validate().unwrap();
    }

    #[test]
    fn remove_node_cascades_edges() {
        let mut graph = graph_of(&[(1, 2), (2, 3), (3, 1), (3, 4)]);
        let node = graph.remove_node(n(3)).unwrap();
        assert_eq!(node.id, n(3));
        assert_eq!(graph.edges(), &[Edge::new(1, 2)]);
        assert!(!graph.contains_edge(&Edge::new(3, 4)));
        assert!(graph.contains_node(n(4)));
        graph.validate().unwrap();
    }

    #[test]
    fn remove_edge_returns_stored_orientation() {
        let mut graph = graph_of(&[(1, 2)]);
        let removed = graph.remove_edge(&Edge::new(2, 1)).unwrap();
        assert_eq!((removed.a, removed.b), (n(1), n(2)));
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn degree_policies() {
        let mut strict = graph_of(&[(2, 3)]);
        strict.add_node(n(1));
        assert_eq!(strict.node_degree(n(1)), Err(GraphError::ZeroDegree { id: n(1) }));
        assert_eq!(strict.node_degree(n(99)), Err(GraphError::ZeroDegree { id: n(99) }));
        assert!(strict.graph_degree().is_err());

        let mut lenient = Graph::with_config(GraphConfig::allow_isolated());
        lenient.add_node(n(1));
        lenient.add_edge(Edge::new(2, 3));
        assert_eq!(lenient.node_degree(n(1)), Ok(0));
        assert_eq!(
            lenient.node_degree(n(99)),
            Err(GraphError::NodeNotFound { id: n(99) })
        );
        assert_eq!(lenient.graph_degree(), Ok(1));
    }

    #[test]
    fn neighbors_follow_edge_order() {
        let graph = graph_of(&[(1, 2), (3, 1), (2, 3), (1, 4)]);
        let ns: Vec<u64> = graph.neighbors(n(1)).map(NodeId::get).collect();
        assert_eq!(ns, vec![2, 3, 4]);
    }

    #[test]
    fn clear_keeps_config() {
        let mut graph = Graph::with_config(GraphConfig::allow_isolated());
        graph.extend([Edge::new(1, 2), Edge::new(2, 3)]);
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.arena.is_empty());
        assert_eq!(graph.config(), GraphConfig::allow_isolated());
        assert_eq!(graph.graph_degree(), Ok(0));
    }

    proptest! {
        #[test]
        fn mutations_keep_invariants(
            pairs in prop::collection::vec((0_u64..12, 0_u64..12), 0..40),
            removals in prop::collection::vec(0_u64..12, 0..6),
        ) {
            let mut graph = Graph::new();
            graph.add_multiple_edges(pairs.iter().map(|&(a, b)| Edge::new(a, b)));
            for raw in removals {
                let _ = graph.remove_node(n(raw));
                prop_assert!(graph.edges().iter().all(|e| !e.touches(n(raw))));
            }
            prop_assert!(graph.validate().is_ok());
        }

        #[test]
        fn edge_containment_is_symmetric(a in 0_u64..100, b in 0_u64..100) {
            prop_assume!(a != b);
            let mut graph = Graph::new();
            prop_assert!(graph.add_edge(Edge::new(a, b)));
            prop_assert!(graph.contains_edge(&Edge::new(a, b)));
            prop_assert!(graph.contains_edge(&Edge::new(b, a)));
            prop_assert!(!graph.add_edge(Edge::new(b, a)));
            prop_assert_eq!(graph.edge_count(), 1);
        }
    }
}
