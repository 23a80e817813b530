//! Convenience re-exports, in the style of `graph_builder::prelude`.

pub use crate::builder::GraphBuilder;
pub use crate::error::GraphError;
pub use crate::graph::{Graph, Neighbors, WORD_BITS};
