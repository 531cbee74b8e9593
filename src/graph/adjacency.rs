//! Dual adjacency representation keyed by vertex handle
//!
//! Forward map: origin -> target -> edge type -> properties.
//! Reverse map: target -> set of origins holding an edge to it.
//!
//! Keying by handle rather than id string means a removed-then-reinserted
//! id can never be confused with stale entries; deletion explicitly erases
//! every forward and reverse entry referencing the retired handle.

use super::property::PropertyMap;
use super::types::{EdgeType, VertexHandle};
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Live edges for one (origin, target) pair, by edge type.
type TypeSlots = IndexMap<EdgeType, Arc<PropertyMap>>;

#[derive(Debug, Default)]
pub(crate) struct AdjacencyTable {
    forward: FxHashMap<VertexHandle, IndexMap<VertexHandle, TypeSlots>>,
    reverse: FxHashMap<VertexHandle, IndexSet<VertexHandle>>,
}

impl AdjacencyTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Write or overwrite the edge for (origin, target, type).
    pub(crate) fn set(
        &mut self,
        origin: VertexHandle,
        target: VertexHandle,
        edge_type: EdgeType,
        properties: Arc<PropertyMap>,
    ) {
        self.forward
            .entry(origin)
            .or_default()
            .entry(target)
            .or_default()
            .insert(edge_type, properties);
        self.reverse.entry(target).or_default().insert(origin);
    }

    pub(crate) fn properties(
        &self,
        origin: VertexHandle,
        target: VertexHandle,
        edge_type: &EdgeType,
    ) -> Option<&Arc<PropertyMap>> {
        self.forward.get(&origin)?.get(&target)?.get(edge_type)
    }

    /// Delete the single type entry; prune emptied sub-structures so no
    /// empty maps or sets are retained.
    pub(crate) fn remove(
        &mut self,
        origin: VertexHandle,
        target: VertexHandle,
        edge_type: &EdgeType,
    ) {
        let Some(targets) = self.forward.get_mut(&origin) else {
            return;
        };
        let Some(slots) = targets.get_mut(&target) else {
            return;
        };
        if slots.shift_remove(edge_type).is_none() {
            return;
        }
        if slots.is_empty() {
            targets.shift_remove(&target);
            Self::unlink_reverse(&mut self.reverse, target, origin);
        }
        if targets.is_empty() {
            self.forward.remove(&origin);
        }
    }

    /// Erase every forward and reverse entry referencing `handle`.
    ///
    /// Out-edges are discarded in one shot by dropping the forward entry;
    /// in-edges cost O(in-degree) by walking the reverse set.
    pub(crate) fn remove_vertex(&mut self, handle: VertexHandle) {
        if let Some(targets) = self.forward.remove(&handle) {
            for target in targets.keys() {
                Self::unlink_reverse(&mut self.reverse, *target, handle);
            }
        }
        if let Some(origins) = self.reverse.remove(&handle) {
            for origin in origins {
                if let Some(targets) = self.forward.get_mut(&origin) {
                    targets.shift_remove(&handle);
                    if targets.is_empty() {
                        self.forward.remove(&origin);
                    }
                }
            }
        }
    }

    /// Handle-level iteration over out-edges: (target, type, properties).
    pub(crate) fn out(
        &self,
        origin: VertexHandle,
    ) -> impl Iterator<Item = (VertexHandle, &EdgeType, &Arc<PropertyMap>)> + '_ {
        self.forward.get(&origin).into_iter().flat_map(|targets| {
            targets.iter().flat_map(|(&target, slots)| {
                slots
                    .iter()
                    .map(move |(edge_type, properties)| (target, edge_type, properties))
            })
        })
    }

    /// Handle-level iteration over in-edges: (origin, type, properties).
    pub(crate) fn incoming(
        &self,
        target: VertexHandle,
    ) -> impl Iterator<Item = (VertexHandle, &EdgeType, &Arc<PropertyMap>)> + '_ {
        self.reverse.get(&target).into_iter().flat_map(move |origins| {
            origins.iter().flat_map(move |&origin| {
                self.forward
                    .get(&origin)
                    .and_then(|targets| targets.get(&target))
                    .into_iter()
                    .flat_map(move |slots| {
                        slots
                            .iter()
                            .map(move |(edge_type, properties)| (origin, edge_type, properties))
                    })
            })
        })
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.forward
            .values()
            .flat_map(|targets| targets.values())
            .map(|slots| slots.len())
            .sum()
    }

    #[cfg(test)]
    fn is_fully_empty(&self) -> bool {
        self.forward.is_empty() && self.reverse.is_empty()
    }

    fn unlink_reverse(
        reverse: &mut FxHashMap<VertexHandle, IndexSet<VertexHandle>>,
        target: VertexHandle,
        origin: VertexHandle,
    ) {
        if let Some(origins) = reverse.get_mut(&target) {
            origins.shift_remove(&origin);
            if origins.is_empty() {
                reverse.remove(&target);
            }
        }
    }
}
