//! The graph facade: vertex arena, adjacency table, and live indices
//!
//! All mutation goes through [`Graph`], which keeps every registered index
//! exactly consistent with the vertex store; there is no deferred
//! re-indexing window. Single-threaded and synchronous: the store,
//! adjacency table, and indices form one shared-mutation unit, and
//! concurrent use requires external mutual exclusion around the whole
//! structure.

use super::adjacency::AdjacencyTable;
use super::edge::{EdgeView, Edges};
use super::filter::{ValueMatch, VertexFilter};
use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeType, VertexHandle, VertexType};
use super::vertex::{Vertex, Vertices};
use crate::index::registry::IndexRegistry;
use crate::index::SecondaryIndex;
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("no existing vertex {0}")]
    VertexNotFound(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug)]
struct VertexEntry {
    handle: VertexHandle,
    record: Arc<Vertex>,
}

/// A mutable directed multigraph of typed, attributed vertices and edges,
/// with secondary indices for accelerated lookup by property value.
#[derive(Debug)]
pub struct Graph {
    /// id -> entry, in insertion order; replacing data keeps the slot
    vertices: IndexMap<String, VertexEntry>,

    /// handle -> current record, for resolving adjacency entries
    by_handle: FxHashMap<VertexHandle, Arc<Vertex>>,

    /// Next vertex handle; never reused within one graph
    next_handle: u64,

    /// Forward and reverse edge maps, keyed by handle
    adjacency: AdjacencyTable,

    /// Implicit type index plus explicitly registered indices
    indices: IndexRegistry,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Graph {
            vertices: IndexMap::new(),
            by_handle: FxHashMap::default(),
            next_handle: 1,
            adjacency: AdjacencyTable::new(),
            indices: IndexRegistry::new(),
        }
    }

    /// Create or replace the vertex with this id.
    ///
    /// Replacing builds a brand-new immutable record and swaps it
    /// wholesale: the slot (and therefore iteration position) and the
    /// vertex's handle are kept, so incident edges survive. The old record
    /// is removed from every index before the new one is added.
    pub fn set_vertex(
        &mut self,
        id: impl Into<String>,
        vertex_type: impl Into<VertexType>,
        properties: PropertyMap,
    ) {
        let id = id.into();
        let record = Arc::new(Vertex::new(id.clone(), vertex_type.into(), properties));
        match self.vertices.get_mut(&id) {
            Some(entry) => {
                self.indices.remove_vertex(&entry.record);
                entry.record = Arc::clone(&record);
                self.by_handle.insert(entry.handle, Arc::clone(&record));
            }
            None => {
                let handle = VertexHandle::new(self.next_handle);
                self.next_handle += 1;
                self.by_handle.insert(handle, Arc::clone(&record));
                self.vertices.insert(
                    id,
                    VertexEntry {
                        handle,
                        record: Arc::clone(&record),
                    },
                );
            }
        }
        self.indices.add_vertex(&record);
    }

    /// Get a vertex record by id
    pub fn vertex(&self, id: &str) -> Option<Arc<Vertex>> {
        self.vertices.get(id).map(|entry| Arc::clone(&entry.record))
    }

    /// Check if a vertex exists
    pub fn has_vertex(&self, id: &str) -> bool {
        self.vertices.contains_key(id)
    }

    /// Remove a vertex, cascading to every incident edge in both
    /// directions and to every index entry. Returns `false` if the id is
    /// absent.
    pub fn remove_vertex(&mut self, id: &str) -> bool {
        let Some(entry) = self.vertices.shift_remove(id) else {
            return false;
        };
        self.indices.remove_vertex(&entry.record);
        self.adjacency.remove_vertex(entry.handle);
        self.by_handle.remove(&entry.handle);
        true
    }

    /// Number of vertices in the store
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of live (origin, target, type) edge triples
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Write or overwrite the edge for (origin, target, type).
    ///
    /// Returns `None` without touching anything if either endpoint is
    /// absent; mutation against stale ids is expected, not exceptional.
    /// The properties payload is stored as an immutable snapshot.
    pub fn set_edge(
        &mut self,
        origin: &str,
        target: &str,
        edge_type: impl Into<EdgeType>,
        properties: PropertyMap,
    ) -> Option<EdgeView> {
        let (origin_handle, origin_record) = self.entry(origin)?;
        let (target_handle, target_record) = self.entry(target)?;
        let edge_type = edge_type.into();
        let properties = Arc::new(properties);
        self.adjacency.set(
            origin_handle,
            target_handle,
            edge_type.clone(),
            Arc::clone(&properties),
        );
        Some(EdgeView {
            origin: origin_record,
            target: target_record,
            edge_type,
            properties,
        })
    }

    /// Remove the edge for (origin, target, type); silent no-op if either
    /// endpoint or the triple is absent.
    pub fn remove_edge(&mut self, origin: &str, target: &str, edge_type: &str) {
        let Some((origin_handle, _)) = self.entry(origin) else {
            return;
        };
        let Some((target_handle, _)) = self.entry(target) else {
            return;
        };
        self.adjacency
            .remove(origin_handle, target_handle, &EdgeType::new(edge_type));
    }

    /// Look up the edge for (origin, target, type); `None` if the triple
    /// does not exist. Never fails.
    pub fn edge(&self, origin: &str, target: &str, edge_type: &str) -> Option<EdgeView> {
        let (origin_handle, origin_record) = self.entry(origin)?;
        let (target_handle, target_record) = self.entry(target)?;
        let edge_type = EdgeType::new(edge_type);
        let properties = self
            .adjacency
            .properties(origin_handle, target_handle, &edge_type)?;
        Some(EdgeView {
            origin: origin_record,
            target: target_record,
            edge_type,
            properties: Arc::clone(properties),
        })
    }

    /// Check if the edge for (origin, target, type) exists
    pub fn has_edge(&self, origin: &str, target: &str, edge_type: &str) -> bool {
        self.edge(origin, target, edge_type).is_some()
    }

    /// Lazy sequence of edges leaving `origin`.
    ///
    /// Fails with [`GraphError::VertexNotFound`] if the id does not exist;
    /// yields an empty sequence if the vertex exists but has no out-edges.
    pub fn out_edges(&self, origin: &str) -> GraphResult<Edges<'_>> {
        let (handle, origin_record) = self.known_entry(origin)?;
        let iter = self
            .adjacency
            .out(handle)
            .filter_map(move |(target, edge_type, properties)| {
                Some(EdgeView {
                    origin: Arc::clone(&origin_record),
                    target: Arc::clone(self.by_handle.get(&target)?),
                    edge_type: edge_type.clone(),
                    properties: Arc::clone(properties),
                })
            });
        Ok(Edges::new(iter))
    }

    /// Lazy sequence of edges arriving at `target`; same failure contract
    /// as [`Graph::out_edges`].
    pub fn in_edges(&self, target: &str) -> GraphResult<Edges<'_>> {
        let (handle, target_record) = self.known_entry(target)?;
        let iter = self
            .adjacency
            .incoming(handle)
            .filter_map(move |(origin, edge_type, properties)| {
                Some(EdgeView {
                    origin: Arc::clone(self.by_handle.get(&origin)?),
                    target: Arc::clone(&target_record),
                    edge_type: edge_type.clone(),
                    properties: Arc::clone(properties),
                })
            });
        Ok(Edges::new(iter))
    }

    /// All edges from `origin` to `target` across types, derived by
    /// filtering [`Graph::out_edges`] on target identity.
    pub fn inter_edges(&self, origin: &str, target: &str) -> GraphResult<Edges<'_>> {
        let target = target.to_string();
        let iter = self
            .out_edges(origin)?
            .filter(move |edge| edge.target.id == target);
        Ok(Edges::new(iter))
    }

    /// Out-edges then in-edges of `id`. A self-loop appears once in each
    /// direction, never deduplicated.
    pub fn all_edges(&self, id: &str) -> GraphResult<Edges<'_>> {
        let out = self.out_edges(id)?;
        let incoming = self.in_edges(id)?;
        Ok(Edges::new(out.chain(incoming)))
    }

    /// Lazy sequence over all vertices in insertion order. Replacing a
    /// vertex's data in place does not move its slot.
    pub fn vertices(&self) -> Vertices<'_> {
        Vertices::new(self.vertices.values().map(|entry| Arc::clone(&entry.record)))
    }

    /// Resolve a filter into an index-driven vertex sequence.
    ///
    /// A type value (or [`VertexFilter::Type`]) resolves through the
    /// implicit type index. Index clauses resolve per key — `eq` through
    /// exact buckets, `matches` by scanning distinct values — and the
    /// resulting id sets are intersected. A clause naming an unregistered
    /// index is reported via [`tracing::warn`] and dropped from
    /// consideration entirely; note this can broaden the result beyond the
    /// caller's intent. If no clause produced a usable id set the sequence
    /// is empty — a query miss, never a full scan. Result order is
    /// unspecified.
    pub fn vertices_matching(&self, filter: impl Into<VertexFilter>) -> Vertices<'_> {
        let ids: Vec<String> = match filter.into() {
            VertexFilter::Type(vertex_type) => self
                .indices
                .type_index()
                .eq_ids(&PropertyValue::from(vertex_type.as_str()))
                .map(str::to_string)
                .collect(),
            VertexFilter::Indexed(clauses) => {
                self.resolve_clauses(&clauses).into_iter().collect()
            }
        };
        Vertices::new(
            ids.into_iter()
                .filter_map(move |id| self.vertex(&id)),
        )
    }

    /// Register a secondary index over `property`, optionally restricted
    /// to one vertex type, and backfill it from all current vertices.
    pub fn add_index(&mut self, property: impl Into<String>, restriction: Option<VertexType>) {
        let index = SecondaryIndex::new(property, restriction);
        self.indices.register(
            index,
            self.vertices.values().map(|entry| entry.record.as_ref()),
        );
    }

    /// Drop the explicit index on `property`; vertex and edge data are
    /// untouched. The implicit type index cannot be dropped. Returns
    /// whether an index was removed.
    pub fn drop_index(&mut self, property: &str) -> bool {
        self.indices.drop_named(property)
    }

    /// Check whether a filter key of this name would resolve to a live
    /// index (an explicit one, or the implicit type index).
    pub fn has_index(&self, property: &str) -> bool {
        self.indices.has(property)
    }

    pub(crate) fn named_indices(&self) -> impl Iterator<Item = &SecondaryIndex> {
        self.indices.named()
    }

    fn entry(&self, id: &str) -> Option<(VertexHandle, Arc<Vertex>)> {
        self.vertices
            .get(id)
            .map(|entry| (entry.handle, Arc::clone(&entry.record)))
    }

    fn known_entry(&self, id: &str) -> GraphResult<(VertexHandle, Arc<Vertex>)> {
        self.entry(id)
            .ok_or_else(|| GraphError::VertexNotFound(id.to_string()))
    }

    fn resolve_clauses(&self, clauses: &[(String, ValueMatch)]) -> FxHashSet<String> {
        let mut intersection: Option<FxHashSet<String>> = None;
        for (name, matcher) in clauses {
            let Some(index) = self.indices.resolve(name) else {
                warn!(index = %name, "filter references an unregistered index; key dropped");
                continue;
            };
            let ids: FxHashSet<String> = match matcher {
                ValueMatch::Equals(value) => index.eq_ids(value).map(str::to_string).collect(),
                ValueMatch::Predicate(predicate) => index.ids_by_predicate(predicate.as_ref()),
            };
            intersection = Some(match intersection {
                None => ids,
                Some(mut acc) => {
                    acc.retain(|id| ids.contains(id));
                    acc
                }
            });
        }
        intersection.unwrap_or_default()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, PropertyValue)]) -> PropertyMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_set_and_get_vertex() {
        let mut g = Graph::new();
        g.set_vertex("foo", "Person", props(&[("name", "foo".into())]));

        assert!(g.has_vertex("foo"));
        assert!(!g.has_vertex("meow"));
        let v = g.vertex("foo").unwrap();
        assert_eq!(v.vertex_type.as_str(), "Person");
        assert_eq!(v.property("name").unwrap().as_string(), Some("foo"));
        assert!(g.vertex("meow").is_none());
    }

    #[test]
    fn test_replace_keeps_slot_and_edges() {
        let mut g = Graph::new();
        g.set_vertex("a", "Person", PropertyMap::new());
        g.set_vertex("b", "Person", PropertyMap::new());
        g.set_vertex("c", "Person", PropertyMap::new());
        g.set_edge("a", "b", "knows", PropertyMap::new());

        g.set_vertex("b", "Robot", props(&[("name", "b2".into())]));

        let order: Vec<String> = g.vertices().map(|v| v.id.clone()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
        assert!(g.has_edge("a", "b", "knows"));
        // edge views resolve to the replacement record
        let edge = g.edge("a", "b", "knows").unwrap();
        assert_eq!(edge.target.vertex_type.as_str(), "Robot");
    }

    #[test]
    fn test_removed_id_gets_fresh_handle() {
        let mut g = Graph::new();
        g.set_vertex("a", "Person", PropertyMap::new());
        g.set_vertex("b", "Person", PropertyMap::new());
        g.set_edge("a", "b", "knows", PropertyMap::new());

        g.remove_vertex("b");
        g.set_vertex("b", "Person", PropertyMap::new());

        // stale adjacency must not resurface under the reused id
        assert!(!g.has_edge("a", "b", "knows"));
        assert_eq!(g.out_edges("a").unwrap().count(), 0);
        assert_eq!(g.in_edges("b").unwrap().count(), 0);
    }

    #[test]
    fn test_edge_endpoints_must_exist() {
        let mut g = Graph::new();
        g.set_vertex("a", "Person", PropertyMap::new());

        assert!(g.set_edge("a", "ghost", "knows", PropertyMap::new()).is_none());
        assert!(g.set_edge("ghost", "a", "knows", PropertyMap::new()).is_none());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_out_edges_of_missing_vertex_fails() {
        let g = Graph::new();
        assert_eq!(
            g.out_edges("ghost").err(),
            Some(GraphError::VertexNotFound("ghost".to_string()))
        );
    }

    #[test]
    fn test_vertices_matching_unknown_index_only_is_empty() {
        let mut g = Graph::new();
        g.set_vertex("a", "Person", props(&[("name", "foo".into())]));

        let hits: Vec<_> = g
            .vertices_matching(VertexFilter::new().eq("name", "foo"))
            .collect();
        assert!(hits.is_empty());
    }
}
