//! Graph behaviour configuration.

/// How `node_degree` treats nodes with no incident edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegreePolicy {
    /// A computed degree of zero is an error, whether the node is isolated
    /// or missing. Both surface as `GraphError::ZeroDegree`.
    #[default]
    Strict,
    /// Isolated nodes have degree 0; only missing nodes are an error
    /// (`GraphError::NodeNotFound`).
    AllowIsolated,
}

/// Options fixed at graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    pub degree_policy: DegreePolicy,
}

impl GraphConfig {
    pub fn allow_isolated() -> Self {
        Self {
            degree_policy: DegreePolicy::AllowIsolated,
        }
    }
}
