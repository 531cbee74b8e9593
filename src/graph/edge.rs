//! Edge views and the lazy edge sequence

use super::property::PropertyMap;
use super::types::EdgeType;
use super::vertex::Vertex;
use std::fmt;
use std::sync::Arc;

/// A directed edge resolved to full vertex records.
///
/// Edges are not standalone entities: the store keeps at most one live edge
/// per (origin, target, type) triple, and a view is materialized on lookup.
/// The properties payload is an immutable snapshot shared with the store;
/// re-setting the edge swaps the payload wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeView {
    /// Origin vertex (edge goes FROM this vertex)
    pub origin: Arc<Vertex>,

    /// Target vertex (edge goes TO this vertex)
    pub target: Arc<Vertex>,

    /// Type of relationship (e.g., "friend", "works-at")
    pub edge_type: EdgeType,

    /// Properties associated with this edge
    pub properties: Arc<PropertyMap>,
}

/// Lazy sequence of edge views borrowed from a graph.
///
/// Pull-based and restartable per call: each `out_edges`/`in_edges`
/// invocation produces a fresh sequence. May be abandoned at any point.
pub struct Edges<'g> {
    inner: Box<dyn Iterator<Item = EdgeView> + 'g>,
}

impl<'g> Edges<'g> {
    pub(crate) fn new(inner: impl Iterator<Item = EdgeView> + 'g) -> Self {
        Edges {
            inner: Box::new(inner),
        }
    }
}

impl Iterator for Edges<'_> {
    type Item = EdgeView;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl fmt::Debug for Edges<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Edges(..)")
    }
}
