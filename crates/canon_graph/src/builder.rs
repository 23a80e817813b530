use log::debug;

use crate::error::GraphError;
use crate::graph::Graph;

/// A small staged builder for [`Graph`], in the style of this ecosystem's
/// `graph_builder` crate, trimmed down to what a dense, bitset-backed
/// undirected graph actually needs: there is no CSR layout to choose and no
/// file format to select, so a single state is enough.
///
/// # Examples
///
/// ```
/// use canon_graph::prelude::*;
///
/// let graph = GraphBuilder::new(4)
///     .edge(0, 1)
///     .edge(1, 2)
///     .edge(2, 3)
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.node_count(), 4);
/// assert!(graph.is_element(1, 2));
/// ```
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    n: usize,
    edges: Vec<(usize, usize)>,
}

impl GraphBuilder {
    /// Creates a builder for a graph on `n` vertices with no edges yet.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            edges: Vec::new(),
        }
    }

    /// Adds an undirected edge `(u, v)`. Both directions are set when the
    /// graph is built; do not add the reverse edge yourself.
    pub fn edge(mut self, u: usize, v: usize) -> Self {
        self.edges.push((u, v));
        self
    }

    /// Adds every edge in `edges`.
    pub fn edges(mut self, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Validates and builds the graph.
    pub fn build(self) -> Result<Graph, GraphError> {
        debug!(
            "building graph: n={} edges={}",
            self.n,
            self.edges.len()
        );
        Graph::from_edges(self.n, self.edges)
    }
}
