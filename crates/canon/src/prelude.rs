//! Convenience re-exports, in the style of `canon_graph::prelude`.

pub use crate::config::SearchConfig;
pub use crate::invariant::Permutation;
pub use crate::observer::{NoopObserver, SearchObserver};
pub use crate::partition::Partition;
pub use crate::search::{canonicalize, canonicalize_with_config, CanonResult};
