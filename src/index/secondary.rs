//! Hash-bucket secondary index for fast vertex lookups by property value

use crate::graph::{PropertyValue, Vertex, VertexType};
use rustc_hash::FxHashSet;
use std::collections::HashMap;

/// Index over one property, optionally restricted to one vertex type.
///
/// Maps each distinct property value to the set of vertex ids holding it.
/// The buckets form a disjoint partition: a vertex lacking the property, or
/// failing the type restriction, appears in no bucket.
#[derive(Debug, Clone)]
pub struct SecondaryIndex {
    property: String,
    restriction: Option<VertexType>,
    buckets: HashMap<PropertyValue, FxHashSet<String>>,
}

impl SecondaryIndex {
    pub fn new(property: impl Into<String>, restriction: Option<VertexType>) -> Self {
        Self {
            property: property.into(),
            restriction,
            buckets: HashMap::new(),
        }
    }

    /// Name of the indexed property
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Type restriction, if any
    pub fn restriction(&self) -> Option<&VertexType> {
        self.restriction.as_ref()
    }

    /// Track a vertex. Ignored when the type restriction mismatches or the
    /// vertex lacks the indexed property.
    pub fn add_vertex(&mut self, vertex: &Vertex) {
        if let Some(required) = &self.restriction {
            if vertex.vertex_type != *required {
                return;
            }
        }
        let Some(value) = vertex.property(&self.property) else {
            return;
        };
        self.buckets
            .entry(value)
            .or_default()
            .insert(vertex.id.clone());
    }

    /// Symmetric removal; empty buckets are pruned.
    pub fn remove_vertex(&mut self, vertex: &Vertex) {
        if let Some(required) = &self.restriction {
            if vertex.vertex_type != *required {
                return;
            }
        }
        let Some(value) = vertex.property(&self.property) else {
            return;
        };
        if let Some(ids) = self.buckets.get_mut(&value) {
            ids.remove(&vertex.id);
            if ids.is_empty() {
                self.buckets.remove(&value);
            }
        }
    }

    /// Ids whose indexed property equals `value` exactly. O(1) amortized.
    pub fn eq_ids(&self, value: &PropertyValue) -> impl Iterator<Item = &str> + '_ {
        self.buckets
            .get(value)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Union of ids for every distinct indexed value satisfying the
    /// predicate. Scans values, not vertices: O(distinct values).
    pub fn ids_by_predicate(&self, predicate: impl Fn(&PropertyValue) -> bool) -> FxHashSet<String> {
        let mut ids = FxHashSet::default();
        for (value, bucket) in &self.buckets {
            if predicate(value) {
                ids.extend(bucket.iter().cloned());
            }
        }
        ids
    }

    /// Number of distinct values currently indexed
    pub fn distinct_values(&self) -> usize {
        self.buckets.len()
    }
}
