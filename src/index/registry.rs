//! Live index set for a graph instance
//!
//! Holds the implicit type index plus all explicitly registered indices,
//! and fans every vertex mutation out to each of them. Each graph owns its
//! own registry; there is no process-wide state.

use super::secondary::SecondaryIndex;
use crate::graph::Vertex;
use indexmap::IndexMap;
use tracing::debug;

/// Property name of the implicit type index.
pub(crate) const TYPE_PROPERTY: &str = "type";

#[derive(Debug)]
pub(crate) struct IndexRegistry {
    /// Always present; not droppable through `drop_named`.
    type_index: SecondaryIndex,
    /// Explicit indices in registration order, by property name.
    named: IndexMap<String, SecondaryIndex>,
}

impl IndexRegistry {
    pub(crate) fn new() -> Self {
        Self {
            type_index: SecondaryIndex::new(TYPE_PROPERTY, None),
            named: IndexMap::new(),
        }
    }

    /// Push a new vertex record into every live index.
    pub(crate) fn add_vertex(&mut self, vertex: &Vertex) {
        self.type_index.add_vertex(vertex);
        for index in self.named.values_mut() {
            index.add_vertex(vertex);
        }
    }

    /// Remove an outgoing vertex record from every live index.
    pub(crate) fn remove_vertex(&mut self, vertex: &Vertex) {
        self.type_index.remove_vertex(vertex);
        for index in self.named.values_mut() {
            index.remove_vertex(vertex);
        }
    }

    /// Register an index, backfilling it from the current vertex set.
    /// Re-registering a property name rebuilds that index.
    pub(crate) fn register<'a>(
        &mut self,
        mut index: SecondaryIndex,
        vertices: impl Iterator<Item = &'a Vertex>,
    ) {
        let mut backfilled = 0usize;
        for vertex in vertices {
            index.add_vertex(vertex);
            backfilled += 1;
        }
        debug!(
            property = index.property(),
            restriction = index.restriction().map(|t| t.as_str()),
            backfilled,
            "registered secondary index"
        );
        self.named.insert(index.property().to_string(), index);
    }

    /// Drop an explicit index. The implicit type index is part of the
    /// graph's own lifecycle and cannot be dropped here.
    pub(crate) fn drop_named(&mut self, property: &str) -> bool {
        let dropped = self.named.shift_remove(property).is_some();
        if dropped {
            debug!(property, "dropped secondary index");
        }
        dropped
    }

    /// Resolve a filter key to a live index: an explicit index of that
    /// name, or the implicit type index for the `"type"` key.
    pub(crate) fn resolve(&self, property: &str) -> Option<&SecondaryIndex> {
        self.named
            .get(property)
            .or_else(|| (property == TYPE_PROPERTY).then_some(&self.type_index))
    }

    pub(crate) fn has(&self, property: &str) -> bool {
        self.resolve(property).is_some()
    }

    pub(crate) fn type_index(&self) -> &SecondaryIndex {
        &self.type_index
    }

    /// Explicit indices in registration order, for snapshot export.
    pub(crate) fn named(&self) -> impl Iterator<Item = &SecondaryIndex> {
        self.named.values()
    }
}
