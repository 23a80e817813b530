//! Canonical labeling and automorphism group computation for simple,
//! undirected graphs, by systematic equitable partition refinement and
//! backtracking search over an ordered partition tree — the algorithmic
//! skeleton popularized by McKay's *nauty*.
//!
//! Given a [`canon_graph::Graph`] on `n` vertices, [`canonicalize`] produces:
//!
//! - a permutation realizing the graph's canonical form (the
//!   lexicographically minimal adjacency matrix over an equivalence class
//!   defined by a tie-breaking invariant), and
//! - a generating set for the automorphism group, the orbit partition θ, and
//!   a set of minimum-cell-representatives (MCR).
//!
//! ```
//! use canon::prelude::*;
//! use canon_graph::prelude::*;
//!
//! let path = GraphBuilder::new(3).edges([(0, 1), (1, 2)]).build().unwrap();
//! let result = canonicalize(&path);
//!
//! // vertex 1 (the middle of the path) can never be swapped with an end;
//! // the two ends are interchangeable.
//! assert_eq!(result.mcr, vec![0, 1]);
//! ```
//!
//! This crate covers exactly the search engine: equitable refinement, the
//! partition tree traversal, target-cell selection, leaf invariant
//! comparison, and automorphism/orbit bookkeeping. A CLI driver, graph file
//! I/O, and a future distributed search are out of scope and would be built
//! as separate crates depending on this one.

pub mod config;
pub mod error;
pub mod invariant;
pub mod observer;
pub mod orbit;
pub mod partition;
pub mod prelude;
pub mod refine;
pub mod search;

pub use crate::config::SearchConfig;
pub use crate::error::CanonError;
pub use crate::invariant::Permutation;
pub use crate::observer::{NoopObserver, SearchObserver};
pub use crate::partition::Partition;
pub use crate::search::{canonicalize, canonicalize_with_config, CanonResult};
