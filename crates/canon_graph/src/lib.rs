//! A bitset-backed adjacency matrix for small, dense, undirected graphs.
//!
//! This crate provides the graph data structure consumed by the `canon`
//! crate's canonical-labeling search. Unlike the CSR graphs in
//! `graph_builder`, which are tuned for large sparse graphs loaded from disk,
//! a canonical-labeling search walks every vertex pair while computing
//! scoped degrees, so a dense bitset adjacency matrix — one machine word of
//! bits per 64 potential neighbors — is the right representation, and is
//! the representation the underlying `nauty`-style algorithm assumes.
//!
//! # What is a graph, here?
//!
//! A [`Graph`] is simple (no self-loops) and undirected (symmetric
//! adjacency): if `(u, v)` is an edge, so is `(v, u)`. It is immutable once
//! built.
//!
//! ```
//! use canon_graph::prelude::*;
//!
//! let graph: Graph = GraphBuilder::new(4)
//!     .edges([(0, 1), (1, 2), (2, 3), (3, 0)])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.degree(0), 2);
//! assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1, 3]);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod prelude;

pub use crate::builder::GraphBuilder;
pub use crate::error::GraphError;
pub use crate::graph::Graph;
