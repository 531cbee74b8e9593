//! Core property graph implementation
//!
//! This module implements the property graph data model:
//! - Immutable vertex records with a type and a property map
//! - Directed, typed, attributed edges, multiple types per vertex pair
//! - Dual adjacency (forward and reverse) keyed by stable vertex handles
//! - The [`Graph`] facade, which keeps the live secondary indices exactly
//!   consistent with every mutation

mod adjacency;
pub mod edge;
pub mod filter;
pub mod property;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::{EdgeView, Edges};
pub use filter::{ValueMatch, VertexFilter};
pub use property::{PropertyMap, PropertyValue};
pub use store::{Graph, GraphError, GraphResult};
pub use types::{EdgeType, VertexHandle, VertexType};
pub use vertex::{Vertex, Vertices};
