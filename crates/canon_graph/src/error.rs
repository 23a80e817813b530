use thiserror::Error;

/// Errors that can occur while constructing a [`crate::Graph`].
///
/// The search engine in `canon` never produces one of these: once a `Graph`
/// exists it is assumed valid for the lifetime of a run. Validation happens
/// exactly once, here, at the boundary where raw edges become a `Graph`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("self-loop at vertex {0}: simple graphs may not contain edges from a vertex to itself")]
    SelfLoop(usize),

    #[error("edge ({0}, {1}) is not present in both directions of the adjacency matrix")]
    AsymmetricAdjacency(usize, usize),

    #[error("vertex index {index} out of range for a graph with {node_count} nodes")]
    VertexOutOfRange { index: usize, node_count: usize },
}
