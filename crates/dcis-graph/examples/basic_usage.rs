//! Basic usage example for dcis-graph
//!
//! This example demonstrates:
//! - Creating a graph with generated node names
//! - Adding, renaming, and removing nodes and edges
//! - Saving the graph as a JSON document

use dcis_graph::{Direction, Graph, Point};

fn main() -> dcis_graph::Result<()> {
    let mut graph = Graph::undirected();

    println!("Creating a small network graph...\n");

    for i in 0..4 {
        let name = graph.next_node_name();
        graph.add_node_at(name.as_str(), Point::new(i as f64 * 60.0, 0.0));
        println!("✓ Added node: {name}");
    }

    for (u, v) in [("a0", "b0"), ("b0", "c0"), ("c0", "d0"), ("d0", "a0")] {
        graph.set_edge(u, v);
        println!("✓ Added edge: {u} - {v}");
    }

    graph.set_node_name("a0", "gateway");
    println!("✓ Renamed a0 to gateway");

    let neighbors = graph.neighbors("gateway", Direction::Both).unwrap_or_default();
    println!("\nGateway neighbors: {neighbors:?}");

    graph.remove_node("c0");
    println!("✓ Removed c0");

    println!("\nGraph statistics:");
    println!("  Nodes: {}", graph.node_count());
    println!("  Edges: {}", graph.edge_count());

    let path = std::env::temp_dir().join("dcis_example_graph.json");
    graph.save(&path)?;
    println!("\n✓ Saved to {}", path.display());

    let loaded = Graph::load(&path)?;
    println!("✓ Reloaded {} nodes", loaded.node_count());

    Ok(())
}
