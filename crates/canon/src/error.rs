//! The one fallible boundary the search touches: building the [`Graph`]
//! handed to [`crate::canonicalize`] in the first place (§7). Once a `Graph`
//! value exists it is assumed valid for the run, and nothing inside the
//! search itself can fail — there is no second error type to define here.
//!
//! [`Graph`]: canon_graph::Graph

/// Re-exported under this crate's own name so callers depending only on
/// `canon` (not directly on `canon_graph`) have a stable error type to
/// match on, in the same spirit as `graph_builder::Error` wrapping the
/// lower-level parsing errors it depends on.
pub use canon_graph::GraphError as CanonError;
