//! Core type definitions for the graph store

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable integer handle for a vertex, valid for the vertex's lifetime.
///
/// A handle is allocated when an id first enters the store and survives
/// in-place replacement of the same id. Removing the vertex retires the
/// handle; re-inserting the id later allocates a fresh one, so adjacency
/// entries can never alias a reused id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexHandle(u64);

impl VertexHandle {
    pub(crate) fn new(handle: u64) -> Self {
        VertexHandle(handle)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexHandle({})", self.0)
    }
}

/// Vertex type (e.g., "Person", "Place")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexType(String);

impl VertexType {
    pub fn new(vertex_type: impl Into<String>) -> Self {
        VertexType(vertex_type.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VertexType {
    fn from(s: String) -> Self {
        VertexType(s)
    }
}

impl From<&str> for VertexType {
    fn from(s: &str) -> Self {
        VertexType(s.to_string())
    }
}

/// Edge type (relationship type, e.g., "friend", "works-at")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeType(String);

impl EdgeType {
    pub fn new(edge_type: impl Into<String>) -> Self {
        EdgeType(edge_type.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EdgeType {
    fn from(s: String) -> Self {
        EdgeType(s)
    }
}

impl From<&str> for EdgeType {
    fn from(s: &str) -> Self {
        EdgeType(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_handle() {
        let h = VertexHandle::new(42);
        assert_eq!(h.as_u64(), 42);
        assert_eq!(format!("{}", h), "VertexHandle(42)");
    }

    #[test]
    fn test_vertex_type() {
        let ty = VertexType::new("Person");
        assert_eq!(ty.as_str(), "Person");
        assert_eq!(format!("{}", ty), "Person");

        let ty2: VertexType = "Animal".into();
        assert_eq!(ty2.as_str(), "Animal");
    }

    #[test]
    fn test_edge_type() {
        let edge_type = EdgeType::new("friend");
        assert_eq!(edge_type.as_str(), "friend");
        assert_eq!(format!("{}", edge_type), "friend");
    }

    #[test]
    fn test_handle_ordering() {
        let h1 = VertexHandle::new(1);
        let h2 = VertexHandle::new(2);
        assert!(h1 < h2);
    }
}
