//! Unit tests for structural graph operations (remove, isolate, rename, copy, clear).

use dcis_graph::{Direction, Graph, Point};

// a0 -> b0, b0 -> c0, c0 -> a0, a0 -> d0
fn directed_sample() -> Graph {
    let mut graph = Graph::directed();
    for name in ["a0", "b0", "c0", "d0"] {
        graph.add_node(name);
    }
    graph.set_edge("a0", "b0");
    graph.set_edge("b0", "c0");
    graph.set_edge("c0", "a0");
    graph.set_edge("a0", "d0");
    graph
}

fn undirected_star() -> Graph {
    let mut graph = Graph::undirected();
    for name in ["hub", "a0", "b0", "c0"] {
        graph.add_node(name);
    }
    graph.set_edge("hub", "a0");
    graph.set_edge("b0", "hub");
    graph.set_edge("hub", "c0");
    graph
}

fn edge_names(graph: &Graph) -> Vec<(String, String)> {
    graph
        .edges()
        .map(|edge| {
            let (u, v) = edge.names();
            (u.to_string(), v.to_string())
        })
        .collect()
}

#[test]
fn test_remove_node_drops_incident_edges() {
    let mut graph = directed_sample();

    assert!(graph.remove_node("a0"));

    assert!(!graph.has_node("a0"));
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.node_names(), ["b0", "c0", "d0"]);
    assert!(graph.edges().all(|edge| !edge.touches("a0")));
    assert_eq!(edge_names(&graph), vec![("b0".to_string(), "c0".to_string())]);
}

#[test]
fn test_remove_node_updates_neighbor_degrees() {
    let mut graph = directed_sample();
    assert_eq!(graph.get_node("c0").unwrap().out_degree(), 1);
    assert_eq!(graph.get_node("d0").unwrap().in_degree(), 1);

    graph.remove_node("a0");

    assert_eq!(graph.get_node("c0").unwrap().out_degree(), 0);
    assert_eq!(graph.get_node("b0").unwrap().in_degree(), 0);
    assert_eq!(graph.get_node("d0").unwrap().in_degree(), 0);
}

#[test]
fn test_remove_missing_node() {
    let mut graph = directed_sample();
    assert!(!graph.remove_node("ghost"));
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_isolate_node_keeps_node() {
    let mut graph = undirected_star();

    assert!(graph.isolate_node("hub"));

    assert!(graph.has_node("hub"));
    assert_eq!(graph.edge_count(), 0);
    for name in ["hub", "a0", "b0", "c0"] {
        assert_eq!(graph.get_node(name).unwrap().undirected_degree(), 0);
    }
}

#[test]
fn test_isolate_missing_node() {
    let mut graph = undirected_star();
    assert!(!graph.isolate_node("ghost"));
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_rename_preserves_position_and_edges() {
    let mut graph = directed_sample();
    graph.set_node_position("a0", Point::new(12.0, 34.0));

    assert!(graph.set_node_name("a0", "root"));

    assert!(!graph.has_node("a0"));
    let root = graph.get_node("root").unwrap();
    assert_eq!(root.position(), Point::new(12.0, 34.0));
    assert_eq!(root.out_degree(), 2);
    assert_eq!(root.in_degree(), 1);

    assert!(graph.has_edge("root", "b0"));
    assert!(graph.has_edge("root", "d0"));
    assert!(graph.has_edge("c0", "root"));
    assert!(!graph.has_edge("b0", "root"));
    assert_eq!(graph.edge_count(), 4);

    assert_eq!(graph.get_node("c0").unwrap().out_degree(), 1);
    assert_eq!(graph.get_node("b0").unwrap().in_degree(), 1);
}

#[test]
fn test_rename_keeps_insertion_slot() {
    let mut graph = directed_sample();
    graph.set_node_name("b0", "beta");
    assert_eq!(graph.node_names(), ["a0", "beta", "c0", "d0"]);
}

#[test]
fn test_rename_undirected() {
    let mut graph = undirected_star();

    assert!(graph.set_node_name("hub", "center"));

    for leaf in ["a0", "b0", "c0"] {
        assert!(graph.has_edge("center", leaf));
        assert_eq!(graph.get_node(leaf).unwrap().undirected_degree(), 1);
    }
    assert_eq!(graph.get_node("center").unwrap().undirected_degree(), 3);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_rename_rejections() {
    let mut graph = directed_sample();

    assert!(!graph.set_node_name("ghost", "x"));
    assert!(!graph.set_node_name("a0", "b0"));
    assert!(!graph.set_node_name("a0", "a0"));

    assert_eq!(graph.node_names(), ["a0", "b0", "c0", "d0"]);
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_clear_keeps_directedness() {
    let mut graph = directed_sample();

    graph.clear();

    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.node_names().is_empty());
    assert!(graph.is_directed());
}

#[test]
fn test_clone_is_independent() {
    let mut original = directed_sample();
    original.set_node_position("b0", Point::new(5.0, 6.0));

    let copy = original.clone();
    original.remove_node("a0");
    original.add_node("e0");

    assert!(copy.is_directed());
    assert_eq!(copy.node_names(), ["a0", "b0", "c0", "d0"]);
    assert_eq!(copy.edge_count(), 4);
    assert!(copy.has_edge("c0", "a0"));
    assert_eq!(copy.get_node("b0").unwrap().position(), Point::new(5.0, 6.0));
    assert_eq!(copy.get_node("a0").unwrap().out_degree(), 2);
}

#[test]
fn test_neighbors_directed() {
    let graph = directed_sample();

    let mut outgoing = graph.neighbors("a0", Direction::Outgoing).unwrap();
    outgoing.sort_unstable();
    assert_eq!(outgoing, vec!["b0", "d0"]);

    assert_eq!(graph.neighbors("a0", Direction::Incoming).unwrap(), vec!["c0"]);

    let mut both = graph.neighbors("a0", Direction::Both).unwrap();
    both.sort_unstable();
    assert_eq!(both, vec!["b0", "c0", "d0"]);
}

#[test]
fn test_neighbors_deduplicates_two_way_edges() {
    let mut graph = Graph::directed();
    graph.add_node("a0");
    graph.add_node("b0");
    graph.set_edge("a0", "b0");
    graph.set_edge("b0", "a0");

    assert_eq!(graph.neighbors("a0", Direction::Both).unwrap(), vec!["b0"]);
}

#[test]
fn test_neighbors_undirected_ignores_direction() {
    let graph = undirected_star();

    for direction in [Direction::Outgoing, Direction::Incoming, Direction::Both] {
        let mut neighbors = graph.neighbors("hub", direction).unwrap();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec!["a0", "b0", "c0"]);
    }
    assert_eq!(graph.neighbors("b0", Direction::Outgoing).unwrap(), vec!["hub"]);
}

#[test]
fn test_neighbors_missing_node() {
    let graph = undirected_star();
    assert!(graph.neighbors("ghost", Direction::Both).is_none());
}

#[test]
fn test_replace_with_takes_incoming_graph() {
    let mut local = undirected_star();
    let mut incoming = Graph::directed();
    incoming.add_node("x0");

    local.replace_with(incoming);

    assert!(local.is_directed());
    assert_eq!(local.node_names(), ["x0"]);
    assert_eq!(local.edge_count(), 0);
}
