//! End-to-end coverage of the graph facade: vertex and edge mutation,
//! adjacency retrieval, and the removal cascade.

use sutra::{Graph, GraphError, PropertyMap, PropertyValue};

fn props(pairs: &[(&str, PropertyValue)]) -> PropertyMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn sample_graph() -> Graph {
    let mut g = Graph::new();
    g.set_vertex("foo", "Person", props(&[("name", "foo".into())]));
    g.set_vertex("bar", "Person", props(&[("name", "bar".into())]));
    g.set_vertex("cat", "Animal", props(&[("name", "cat".into())]));
    g.set_vertex("home", "Place", props(&[("name", "Home".into())]));
    g.set_edge("foo", "bar", "friend", PropertyMap::new());
    g.set_edge("bar", "foo", "friend", PropertyMap::new());
    g.set_edge("bar", "cat", "owns-a", PropertyMap::new());
    g.set_edge("bar", "cat", "likes-a", PropertyMap::new());
    g.set_edge(
        "foo",
        "home",
        "visited",
        props(&[("at", 1_700_000_000i64.into())]),
    );
    g
}

#[test]
fn test_has_vertex() {
    let g = sample_graph();
    assert!(g.has_vertex("foo"));
    assert!(g.has_vertex("bar"));
    assert!(g.has_vertex("cat"));
    assert!(!g.has_vertex("meow"));
}

#[test]
fn test_get_vertex() {
    let g = sample_graph();
    let foo = g.vertex("foo").unwrap();
    assert_eq!(foo.property("name").unwrap().as_string(), Some("foo"));
    assert!(g.vertex("meow").is_none());
}

#[test]
fn test_set_vertex_replaces() {
    let mut g = sample_graph();
    g.set_vertex("foo", "Person", props(&[("name", "foo1".into())]));
    let foo = g.vertex("foo").unwrap();
    assert_eq!(foo.property("name").unwrap().as_string(), Some("foo1"));

    g.set_vertex("lolz", "Person", PropertyMap::new());
    assert_eq!(g.vertex("lolz").unwrap().vertex_type.as_str(), "Person");
}

#[test]
fn test_counts() {
    let g = sample_graph();
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 5);
    assert!(!g.is_empty());
}

#[test]
fn test_has_edge() {
    let g = sample_graph();
    assert!(g.has_edge("foo", "bar", "friend"));
    assert!(!g.has_edge("foo", "bar", "hates"));
    assert!(!g.has_edge("foo", "barzor", "hates"));
}

#[test]
fn test_get_edge() {
    let g = sample_graph();
    let edge = g.edge("foo", "bar", "friend").unwrap();
    assert_eq!(edge.origin.property("name").unwrap().as_string(), Some("foo"));
    assert_eq!(edge.target.property("name").unwrap().as_string(), Some("bar"));
    assert_eq!(edge.edge_type.as_str(), "friend");

    assert!(g.edge("foo", "cat", "lolz").is_none());

    let visited = g.edge("foo", "home", "visited").unwrap();
    assert_eq!(
        visited.properties.get("at").unwrap().as_integer(),
        Some(1_700_000_000)
    );
}

#[test]
fn test_set_edge_overwrites() {
    let mut g = sample_graph();
    g.set_edge("foo", "bar", "friend", props(&[("since", 2019i64.into())]));
    g.set_edge("foo", "bar", "friend", props(&[("since", 2021i64.into())]));

    assert_eq!(g.inter_edges("foo", "bar").unwrap().count(), 1);
    let edge = g.edge("foo", "bar", "friend").unwrap();
    assert_eq!(edge.properties.get("since").unwrap().as_integer(), Some(2021));
}

#[test]
fn test_remove_vertex_cascades() {
    let mut g = sample_graph();
    assert!(g.remove_vertex("foo"));
    assert!(!g.has_vertex("foo"));
    assert!(!g.has_edge("foo", "bar", "friend"));
    assert!(!g.has_edge("bar", "foo", "friend"));

    // no dangling adjacency entries remain on the surviving endpoints
    assert_eq!(g.in_edges("bar").unwrap().count(), 0);
    assert!(g
        .out_edges("bar")
        .unwrap()
        .all(|e| e.target.id != "foo"));
    assert_eq!(g.in_edges("home").unwrap().count(), 0);
    assert_eq!(g.edge_count(), 2);

    assert!(!g.remove_vertex("foo"));
}

#[test]
fn test_remove_edge() {
    let mut g = sample_graph();
    g.remove_edge("bar", "cat", "owns-a");
    assert!(!g.has_edge("bar", "cat", "owns-a"));
    assert!(g.has_edge("bar", "cat", "likes-a"));

    // missing endpoints and missing triples are silent no-ops
    g.remove_edge("bar", "car", "owns-a");
    g.remove_edge("nope", "cat", "owns-a");
    g.remove_edge("bar", "cat", "owns-a");
    assert_eq!(g.edge_count(), 4);
}

#[test]
fn test_inter_edges() {
    let g = sample_graph();
    assert_eq!(g.inter_edges("bar", "cat").unwrap().count(), 2);
    assert_eq!(g.inter_edges("bar", "home").unwrap().count(), 0);
}

#[test]
fn test_all_edges() {
    let g = sample_graph();
    assert_eq!(g.all_edges("bar").unwrap().count(), 4);

    let out = g.out_edges("bar").unwrap().count();
    let incoming = g.in_edges("bar").unwrap().count();
    assert_eq!(g.all_edges("bar").unwrap().count(), out + incoming);
}

#[test]
fn test_edge_sequences_fail_on_missing_vertex() {
    let g = sample_graph();
    let missing = GraphError::VertexNotFound("meow".to_string());
    assert_eq!(g.out_edges("meow").err(), Some(missing.clone()));
    assert_eq!(g.in_edges("meow").err(), Some(missing.clone()));
    assert_eq!(g.all_edges("meow").err(), Some(missing.clone()));
    assert_eq!(g.inter_edges("meow", "bar").err(), Some(missing));
}

#[test]
fn test_edgeless_direction_is_empty_not_error() {
    let g = sample_graph();
    // cat has only incoming edges; home only incoming
    assert_eq!(g.out_edges("cat").unwrap().count(), 0);
    assert_eq!(g.out_edges("home").unwrap().count(), 0);
    assert_eq!(g.in_edges("cat").unwrap().count(), 2);
}

#[test]
fn test_sequences_restart_per_call() {
    let g = sample_graph();
    assert_eq!(g.out_edges("bar").unwrap().count(), 3);
    assert_eq!(g.out_edges("bar").unwrap().count(), 3);
}

#[test]
fn test_self_loop_counted_once_per_direction() {
    let mut g = sample_graph();
    g.set_edge("foo", "foo", "self", PropertyMap::new());

    assert_eq!(
        g.out_edges("foo")
            .unwrap()
            .filter(|e| e.edge_type.as_str() == "self")
            .count(),
        1
    );
    assert_eq!(
        g.in_edges("foo")
            .unwrap()
            .filter(|e| e.edge_type.as_str() == "self")
            .count(),
        1
    );
    assert_eq!(
        g.all_edges("foo")
            .unwrap()
            .filter(|e| e.edge_type.as_str() == "self")
            .count(),
        2
    );
}

#[test]
fn test_vertices_iterates_in_insertion_order() {
    let g = sample_graph();
    let ids: Vec<String> = g.vertices().map(|v| v.id.clone()).collect();
    assert_eq!(ids, vec!["foo", "bar", "cat", "home"]);

    let with_a = g
        .vertices()
        .filter(|v| {
            v.property("name")
                .and_then(|n| n.as_string().map(|s| s.contains('a')))
                .unwrap_or(false)
        })
        .count();
    assert_eq!(with_a, 2);
}

#[test]
fn test_vertices_by_type() {
    let g = sample_graph();
    let persons: Vec<String> = g.vertices_matching("Person").map(|v| v.id.clone()).collect();
    assert_eq!(persons.len(), 2);
    assert!(persons.contains(&"foo".to_string()));
    assert!(persons.contains(&"bar".to_string()));

    assert_eq!(g.vertices_matching("Ghost").count(), 0);
}
