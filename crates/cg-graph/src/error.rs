//! Graph-specific error types.

use cg_core::{CgError, Color, NodeId, Slot};
use thiserror::Error;

use crate::edge::Edge;

pub type GraphResult<T> = Result<T, GraphError>;

/// Coarse classification of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Removal or lookup of something that is not in the graph.
    NotFound,
    /// A query produced a value outside the accepted range.
    OutOfRange,
    /// Internal bookkeeping or a colouring does not hold up.
    Invariant,
}

/// Graph mutation, query and validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node {id} not found")]
    NodeNotFound { id: NodeId },

    #[error("Edge {edge} not found")]
    EdgeNotFound { edge: Edge },

    /// Degree of `id` computed to zero: the node is missing or isolated.
    #[error("Degree of node {id} out of range (zero incident edges)")]
    ZeroDegree { id: NodeId },

    #[error("Edge {edge} refers to non-existent node {id}")]
    DanglingEdge { edge: Edge, id: NodeId },

    #[error("Edge {edge} is a self-loop")]
    SelfLoop { edge: Edge },

    #[error("Edge {edge} is stored more than once")]
    DuplicateEdge { edge: Edge },

    /// Node index, arena and insertion order disagree about `id`.
    #[error("Node {id} is inconsistent between index and storage")]
    InconsistentIndex { id: NodeId },

    /// Edge list and edge lookup set disagree about `edge`.
    #[error("Edge {edge} is inconsistent between list and lookup set")]
    InconsistentEdgeIndex { edge: Edge },

    #[error("Arena slot {slot} is listed as live but holds no node")]
    VacantSlot { slot: Slot },

    #[error("Edge {edge} joins two nodes of color {color}")]
    ImproperColoring { edge: Edge, color: Color },

    #[error("Node {id} is uncolored")]
    Uncolored { id: NodeId },
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::NodeNotFound { .. } | GraphError::EdgeNotFound { .. } => {
                ErrorKind::NotFound
            }
            GraphError::ZeroDegree { .. } => ErrorKind::OutOfRange,
            GraphError::DanglingEdge { .. }
            | GraphError::SelfLoop { .. }
            | GraphError::DuplicateEdge { .. }
            | GraphError::InconsistentIndex { .. }
            | GraphError::InconsistentEdgeIndex { .. }
            | GraphError::VacantSlot { .. }
            | GraphError::ImproperColoring { .. }
            | GraphError::Uncolored { .. } => ErrorKind::Invariant,
        }
    }
}

impl From<GraphError> for CgError {
    fn from(err: GraphError) -> Self {
        let what = err.to_string();
        match err.kind() {
            ErrorKind::NotFound => CgError::NotFound { what },
            ErrorKind::OutOfRange => CgError::OutOfRange { what },
            ErrorKind::Invariant => CgError::Invariant { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        let id = NodeId::new(3);
        let edge = Edge::new(1, 2);
        assert_eq!(GraphError::NodeNotFound { id }.kind(), ErrorKind::NotFound);
        assert_eq!(GraphError::EdgeNotFound { edge }.kind(), ErrorKind::NotFound);
        assert_eq!(GraphError::ZeroDegree { id }.kind(), ErrorKind::OutOfRange);
        assert_eq!(GraphError::SelfLoop { edge }.kind(), ErrorKind::Invariant);
    }

    #[test]
    fn converts_into_core_error() {
        let err: CgError = GraphError::EdgeNotFound {
            edge: Edge::new(4, 5),
        }
        .into();
        assert_eq!(
            err,
            CgError::NotFound {
                what: "Edge (4, 5) not found".into()
            }
        );

        let err: CgError = GraphError::ZeroDegree { id: NodeId::new(9) }.into();
        assert!(matches!(err, CgError::OutOfRange { .. }));
        assert!(format!("{err}").contains("Out of range"));
    }
}
