//! Structural snapshot format and round-trip reconstruction
//!
//! A snapshot is a plain, cycle-free structure: edges reference endpoints
//! by id, never by live handle, and property values serialize as plain
//! JSON. Only explicit indices are exported; the implicit type index is
//! part of every graph's own lifecycle.

use crate::graph::{EdgeType, Graph, PropertyMap, VertexType};
use serde::{Deserialize, Serialize};

/// One registered index: property name plus optional type restriction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSpec {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub vertex_type: Option<VertexType>,
    pub property: String,
}

/// One edge, endpoints referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSnapshot {
    pub origin: String,
    pub target: String,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
    #[serde(default)]
    pub properties: PropertyMap,
}

/// One vertex together with its outgoing edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexSnapshot {
    pub id: String,
    #[serde(rename = "type")]
    pub vertex_type: VertexType,
    #[serde(default)]
    pub properties: PropertyMap,
    #[serde(default)]
    pub edges: Vec<EdgeSnapshot>,
}

/// Full structural snapshot of a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub indices: Vec<IndexSpec>,
    pub vertices: Vec<VertexSnapshot>,
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Snapshot> {
        serde_json::from_str(json)
    }
}

impl Graph {
    /// Export the graph's full content as a plain structural snapshot.
    pub fn to_snapshot(&self) -> Snapshot {
        let indices = self
            .named_indices()
            .map(|index| IndexSpec {
                vertex_type: index.restriction().cloned(),
                property: index.property().to_string(),
            })
            .collect();
        let vertices = self
            .vertices()
            .map(|vertex| VertexSnapshot {
                id: vertex.id.clone(),
                vertex_type: vertex.vertex_type.clone(),
                properties: vertex.properties.clone(),
                edges: self
                    .out_edges(&vertex.id)
                    .map(|edges| {
                        edges
                            .map(|edge| EdgeSnapshot {
                                origin: edge.origin.id.clone(),
                                target: edge.target.id.clone(),
                                edge_type: edge.edge_type.clone(),
                                properties: (*edge.properties).clone(),
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect();
        Snapshot { indices, vertices }
    }

    /// Reconstruct a graph from a snapshot: all vertices first, then the
    /// edges (so both endpoints exist before any edge insert), then the
    /// recorded indices, which backfill from the complete vertex set.
    ///
    /// Edges referencing unknown ids are silently dropped, the same as any
    /// `set_edge` against a stale id. Round-tripping preserves vertex and
    /// edge counts, every vertex's type and properties, and every edge
    /// triple's properties; iteration order is not guaranteed to match the
    /// original.
    pub fn from_snapshot(snapshot: Snapshot) -> Graph {
        let mut graph = Graph::new();
        let mut edges = Vec::new();
        for vertex in snapshot.vertices {
            graph.set_vertex(vertex.id, vertex.vertex_type, vertex.properties);
            edges.extend(vertex.edges);
        }
        for edge in edges {
            graph.set_edge(&edge.origin, &edge.target, edge.edge_type, edge.properties);
        }
        for index in snapshot.indices {
            graph.add_index(index.property, index.vertex_type);
        }
        graph
    }
}
