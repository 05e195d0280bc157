//! cg-graph: mutable undirected graph with greedy colouring.
//!
//! Provides:
//! - Node and edge storage with identity lookup (arena + id index)
//! - Structural mutation with cascading cleanup on node removal
//! - Degree queries, governed by a configurable `DegreePolicy`
//! - Greedy vertex colouring in node insertion order
//! - Invariant and colouring validation
//!
//! # Example
//!
//! ```
//! use cg_graph::{Edge, Graph, NodeId};
//!
//! let mut graph: Graph = [Edge::new(1, 2), Edge::new(2, 3), Edge::new(1, 3)]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.node_degree(NodeId::new(2)).unwrap(), 2);
//!
//! assert_eq!(graph.coloring(), 3);
//! assert!(graph.is_properly_colored());
//! ```

mod coloring;
pub mod config;
pub mod edge;
pub mod error;
pub mod graph;
pub mod indexing;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use cg_core::{Color, NodeId, UNCOLORED};
pub use config::{DegreePolicy, GraphConfig};
pub use edge::Edge;
pub use error::{ErrorKind, GraphError, GraphResult};
pub use graph::{Graph, Node};
pub use indexing::NodeIndex;
