//! Vertex records and the lazy vertex sequence

use super::property::{PropertyMap, PropertyValue};
use super::types::VertexType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A vertex in the property graph
///
/// Records are immutable once constructed: replacing a vertex's data builds
/// a brand-new record and swaps it wholesale, so a record handed out to a
/// caller is never mutated underneath them.
///
/// `id` and `type` are reserved fields. A caller-supplied property with
/// either name is overridden by the reserved value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier for this vertex
    pub id: String,

    /// Type of this vertex (e.g., "Person", "Place")
    #[serde(rename = "type")]
    pub vertex_type: VertexType,

    /// Properties associated with this vertex, reserved names excluded
    pub properties: PropertyMap,
}

impl Vertex {
    pub(crate) fn new(
        id: String,
        vertex_type: VertexType,
        mut properties: PropertyMap,
    ) -> Self {
        // reserved fields win over caller-supplied properties
        properties.remove("id");
        properties.remove("type");
        Vertex {
            id,
            vertex_type,
            properties,
        }
    }

    /// Look up a property by name.
    ///
    /// The reserved names `"id"` and `"type"` resolve from the vertex's
    /// reserved fields, so indices over either behave like any other
    /// property index.
    pub fn property(&self, name: &str) -> Option<PropertyValue> {
        match name {
            "id" => Some(PropertyValue::String(self.id.clone())),
            "type" => Some(PropertyValue::String(self.vertex_type.as_str().to_string())),
            _ => self.properties.get(name).cloned(),
        }
    }

    /// Check if a property exists (reserved names always do)
    pub fn has_property(&self, name: &str) -> bool {
        matches!(name, "id" | "type") || self.properties.contains_key(name)
    }

    /// Get number of properties, excluding the reserved fields
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

/// Lazy sequence of vertices borrowed from a graph.
///
/// Pull-based: elements are produced on consumption and the sequence may be
/// abandoned at any point with no cleanup obligation.
pub struct Vertices<'g> {
    inner: Box<dyn Iterator<Item = Arc<Vertex>> + 'g>,
}

impl<'g> Vertices<'g> {
    pub(crate) fn new(inner: impl Iterator<Item = Arc<Vertex>> + 'g) -> Self {
        Vertices {
            inner: Box::new(inner),
        }
    }
}

impl Iterator for Vertices<'_> {
    type Item = Arc<Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl fmt::Debug for Vertices<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vertices(..)")
    }
}
