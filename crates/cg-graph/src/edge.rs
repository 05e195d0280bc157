//! Undirected edge value.

use core::fmt;
use core::hash::{Hash, Hasher};

use cg_core::NodeId;

/// An undirected connection between two node ids.
///
/// Equality ignores endpoint order: `(a, b) == (b, a)`.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
}

impl Edge {
    pub const fn new(a: u64, b: u64) -> Self {
        Self::between(NodeId::new(a), NodeId::new(b))
    }

    pub const fn between(a: NodeId, b: NodeId) -> Self {
        Self { a, b }
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }

    /// Whether `id` is one of the endpoints.
    pub fn touches(&self, id: NodeId) -> bool {
        self.a == id || self.b == id
    }

    /// The endpoint opposite `id`, if `id` is an endpoint.
    pub fn other(&self, id: NodeId) -> Option<NodeId> {
        if self.a == id {
            Some(self.b)
        } else if self.b == id {
            Some(self.a)
        } else {
            None
        }
    }

    /// Endpoints with the smaller id first.
    pub fn ordered(&self) -> (NodeId, NodeId) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}

impl From<(NodeId, NodeId)> for Edge {
    fn from((a, b): (NodeId, NodeId)) -> Self {
        Self::between(a, b)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}
