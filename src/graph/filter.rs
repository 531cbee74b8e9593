//! Vertex filter specification
//!
//! The filter argument to [`Graph::vertices_matching`](super::Graph::vertices_matching)
//! is a tagged variant: either a bare vertex type (resolved through the
//! implicit type index) or a set of per-index clauses whose id sets are
//! intersected.

use super::property::PropertyValue;
use super::types::VertexType;
use std::fmt;

/// How a single filter clause matches indexed values.
pub enum ValueMatch {
    /// Exact-value bucket lookup, O(1) amortized.
    Equals(PropertyValue),
    /// Scan the index's distinct values; cost is O(distinct values), not
    /// O(vertex count).
    Predicate(Box<dyn Fn(&PropertyValue) -> bool>),
}

impl fmt::Debug for ValueMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueMatch::Equals(value) => f.debug_tuple("Equals").field(value).finish(),
            ValueMatch::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Filter specification for vertex queries.
#[derive(Debug)]
pub enum VertexFilter {
    /// All vertices of one type, resolved via the implicit type index.
    Type(VertexType),
    /// Intersection of id sets produced by the named secondary indices.
    /// A clause naming an unregistered index is dropped with a warning and
    /// does not narrow the result.
    Indexed(Vec<(String, ValueMatch)>),
}

impl VertexFilter {
    /// Start an empty index-intersection filter.
    ///
    /// With no clauses the filter matches nothing: resolution never falls
    /// back to a full scan.
    pub fn new() -> Self {
        VertexFilter::Indexed(Vec::new())
    }

    /// Add an exact-value clause against the index on `property`.
    pub fn eq(self, property: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.push(property.into(), ValueMatch::Equals(value.into()))
    }

    /// Add a predicate clause against the index on `property`.
    pub fn matches(
        self,
        property: impl Into<String>,
        predicate: impl Fn(&PropertyValue) -> bool + 'static,
    ) -> Self {
        self.push(property.into(), ValueMatch::Predicate(Box::new(predicate)))
    }

    fn push(self, property: String, matcher: ValueMatch) -> Self {
        let mut clauses = match self {
            VertexFilter::Indexed(clauses) => clauses,
            // a type shorthand extends into a clause on the type index
            VertexFilter::Type(vertex_type) => vec![(
                "type".to_string(),
                ValueMatch::Equals(PropertyValue::from(vertex_type.as_str())),
            )],
        };
        clauses.push((property, matcher));
        VertexFilter::Indexed(clauses)
    }
}

impl Default for VertexFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl From<VertexType> for VertexFilter {
    fn from(vertex_type: VertexType) -> Self {
        VertexFilter::Type(vertex_type)
    }
}

impl From<&str> for VertexFilter {
    fn from(vertex_type: &str) -> Self {
        VertexFilter::Type(VertexType::new(vertex_type))
    }
}

impl From<String> for VertexFilter {
    fn from(vertex_type: String) -> Self {
        VertexFilter::Type(VertexType::new(vertex_type))
    }
}
