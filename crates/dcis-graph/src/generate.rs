//! Convenience builders for common graph shapes.

use crate::graph::{Graph, Point};
use log::debug;

/// Build a `rows` x `cols` grid.
///
/// Nodes are named with [`Graph::next_node_name`] in row-major order and
/// placed `spacing` apart. Each node is connected to its right and lower
/// neighbor; in a directed graph the edges point right and down.
///
/// An empty graph is returned when either dimension is zero or `spacing`
/// is not finite.
///
/// # Example
///
/// ```
/// use dcis_graph::generate;
///
/// let grid = generate::grid(2, 3, false, 50.0);
/// assert_eq!(grid.node_count(), 6);
/// assert_eq!(grid.edge_count(), 7);
/// ```
pub fn grid(rows: usize, cols: usize, directed: bool, spacing: f64) -> Graph {
    let mut graph = Graph::new(directed);
    if rows == 0 || cols == 0 || !spacing.is_finite() {
        return graph;
    }
    debug!("Generating {rows}x{cols} grid, directed={directed}");

    let mut names = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let name = graph.next_node_name();
            let position = Point::new(col as f64 * spacing, row as f64 * spacing);
            graph.add_node_at(name.clone(), position);
            names.push(name);
        }
    }

    for row in 0..rows {
        for col in 0..cols {
            let here = &names[row * cols + col];
            if col + 1 < cols {
                graph.set_edge(here, &names[row * cols + col + 1]);
            }
            if row + 1 < rows {
                graph.set_edge(here, &names[(row + 1) * cols + col]);
            }
        }
    }

    graph
}
