//! Sutra Graph
//!
//! An embedded, in-process property graph: a mutable directed multigraph
//! of typed, attributed vertices and edges, with a secondary-index
//! subsystem for accelerated vertex lookup by property value.
//!
//! # Architecture
//!
//! - Dual adjacency representation: forward (origin -> target -> type ->
//!   properties) and reverse (target -> origins) maps, keyed by stable
//!   per-vertex integer handles rather than id strings, so a reused id can
//!   never alias stale entries.
//! - Secondary indices map property values to vertex id sets, giving O(1)
//!   equality lookups and predicate lookups bounded by the number of
//!   distinct values; filters compose by set intersection. Every index is
//!   updated in the same call as the vertex mutation that affects it.
//! - Pure data-structure library: single-threaded, no network layer, no
//!   durable persistence beyond the explicit [`Snapshot`] format.
//!
//! # Example
//!
//! ```rust
//! use sutra::{Graph, PropertyMap, VertexFilter};
//!
//! let mut g = Graph::new();
//! g.set_vertex("ada", "Person", PropertyMap::from([
//!     ("name".to_string(), "Ada".into()),
//! ]));
//! g.set_vertex("acme", "Company", PropertyMap::new());
//! g.set_edge("ada", "acme", "works-at", PropertyMap::new());
//!
//! // accelerated lookups through a secondary index
//! g.add_index("name", None);
//! let hits: Vec<_> = g
//!     .vertices_matching(VertexFilter::new().eq("name", "Ada"))
//!     .collect();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, "ada");
//!
//! // direct adjacency retrieval
//! assert_eq!(g.out_edges("ada").unwrap().count(), 1);
//! ```

#![warn(clippy::all)]

pub mod graph;
pub mod index;
pub mod snapshot;

// Re-export main types for convenience
pub use graph::{
    EdgeType, EdgeView, Edges, Graph, GraphError, GraphResult, PropertyMap, PropertyValue,
    ValueMatch, Vertex, VertexFilter, VertexType, Vertices,
};

pub use index::SecondaryIndex;

pub use snapshot::{EdgeSnapshot, IndexSpec, Snapshot, VertexSnapshot};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
