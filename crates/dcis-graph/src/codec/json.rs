//! JSON graph documents for persistence and network transport.
//!
//! Document shape:
//!
//! ```json
//! {
//!   "directed": false,
//!   "nodes": [{ "name": "a0", "x": 0.0, "y": 0.0 }],
//!   "edges": [{ "start": "a0", "end": "b0" }]
//! }
//! ```
//!
//! Reading is lenient: every node and edge entry is parsed on its own, and
//! entries that are malformed or whose endpoints do not resolve are dropped
//! instead of failing the whole document.

use crate::config::CodecConfig;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, Point};
use log::{info, trace, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// A whole graph as written to JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Whether the graph is directed
    pub directed: bool,
    /// Nodes in the graph's insertion order
    pub nodes: Vec<NodeRecord>,
    /// Edges in edge-set order
    pub edges: Vec<EdgeRecord>,
}

/// One entry of the `nodes` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node name
    pub name: String,
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
}

/// One entry of the `edges` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Start node name
    pub start: String,
    /// End node name
    pub end: String,
}

impl GraphDocument {
    /// Snapshot a graph.
    pub fn from_graph(graph: &Graph) -> Self {
        let nodes = graph
            .nodes()
            .map(|node| NodeRecord {
                name: node.name().to_owned(),
                x: node.x(),
                y: node.y(),
            })
            .collect();

        let edges = graph
            .edges()
            .map(|edge| {
                let (start, end) = edge.names();
                EdgeRecord {
                    start: start.to_owned(),
                    end: end.to_owned(),
                }
            })
            .collect();

        Self {
            directed: graph.is_directed(),
            nodes,
            edges,
        }
    }

    /// Read a document from a parsed JSON value, dropping malformed entries.
    ///
    /// Missing fields default: `directed` to `false`, the arrays to empty.
    /// Coordinates that are missing or not numbers read as `0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] if `value` is not a JSON object.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| GraphError::Serialization {
            message: "Graph document must be a JSON object".to_string(),
            source: None,
        })?;

        let directed = object
            .get("directed")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let nodes = entries(object, "nodes")
            .iter()
            .filter_map(|entry| {
                let record = node_record(entry);
                if record.is_none() {
                    warn!("Dropping malformed node entry: {entry}");
                }
                record
            })
            .collect();

        let edges = entries(object, "edges")
            .iter()
            .filter_map(|entry| {
                let record = edge_record(entry);
                if record.is_none() {
                    warn!("Dropping malformed edge entry: {entry}");
                }
                record
            })
            .collect();

        Ok(Self {
            directed,
            nodes,
            edges,
        })
    }

    /// Build a graph from the document.
    ///
    /// Nodes are added in array order, which becomes the graph's insertion
    /// order. Duplicate node names keep the first entry.
    ///
    /// # Errors
    ///
    /// Only with `strict_edges`: returns [`GraphError::NodeNotFound`] for an
    /// edge naming a missing node, or [`GraphError::InvalidOperation`] for a
    /// self-loop. Otherwise such edges are dropped.
    pub fn into_graph(self, config: &CodecConfig) -> Result<Graph> {
        let mut graph = Graph::new(self.directed);

        for node in self.nodes {
            if graph.has_node(&node.name) {
                warn!("Dropping duplicate node entry: {}", node.name);
                continue;
            }
            graph.add_node_at(node.name, Point::new(node.x, node.y));
        }

        for edge in &self.edges {
            if graph.set_edge(&edge.start, &edge.end) {
                continue;
            }
            if config.strict_edges {
                return Err(edge.rejection(&graph));
            }
            warn!(
                "Dropping edge {} -> {}: self-loop or unknown endpoint",
                edge.start, edge.end
            );
        }

        trace!(
            "Decoded graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl EdgeRecord {
    fn rejection(&self, graph: &Graph) -> GraphError {
        if self.start == self.end {
            return GraphError::InvalidOperation {
                message: format!("Self-loop edge on {}", self.start),
            };
        }
        let missing = if graph.has_node(&self.start) {
            &self.end
        } else {
            &self.start
        };
        GraphError::NodeNotFound {
            name: missing.clone(),
        }
    }
}

/// Serialize a graph into a JSON value.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if encoding fails.
pub fn to_value(graph: &Graph) -> Result<Value> {
    serde_json::to_value(GraphDocument::from_graph(graph))
        .map_err(|e| GraphError::serialization("Failed to serialize graph", Some(e)))
}

/// Serialize a graph to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if encoding fails.
pub fn to_json(graph: &Graph) -> Result<String> {
    to_json_with(graph, &CodecConfig::default())
}

/// Serialize a graph with explicit codec settings.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if encoding fails.
pub fn to_json_with(graph: &Graph, config: &CodecConfig) -> Result<String> {
    let document = GraphDocument::from_graph(graph);
    let encoded = if config.pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    };
    encoded.map_err(|e| GraphError::serialization("Failed to serialize graph", Some(e)))
}

/// Build a graph from a parsed JSON value, leniently.
pub fn from_value(value: &Value) -> Result<Graph> {
    from_value_with(value, &CodecConfig::default())
}

/// Build a graph from a parsed JSON value with explicit codec settings.
pub fn from_value_with(value: &Value, config: &CodecConfig) -> Result<Graph> {
    GraphDocument::from_value(value)?.into_graph(config)
}

/// Parse a graph from JSON text, leniently.
pub fn from_json(text: &str) -> Result<Graph> {
    from_json_with(text, &CodecConfig::default())
}

/// Parse a graph from JSON text with explicit codec settings.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if the text is not JSON or not an
/// object, plus the strict-mode errors of [`GraphDocument::into_graph`].
pub fn from_json_with(text: &str, config: &CodecConfig) -> Result<Graph> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| GraphError::serialization("Failed to parse graph document", Some(e)))?;
    from_value_with(&value, config)
}

/// Write a graph document to a file.
pub fn save(graph: &Graph, path: impl AsRef<Path>) -> Result<()> {
    save_with(graph, path, &CodecConfig::default())
}

/// Write a graph document to a file with explicit codec settings.
///
/// # Errors
///
/// Returns [`GraphError::Io`] if the file cannot be written.
pub fn save_with(graph: &Graph, path: impl AsRef<Path>, config: &CodecConfig) -> Result<()> {
    let path = path.as_ref();
    let text = to_json_with(graph, config)?;
    fs::write(path, text).map_err(|e| {
        GraphError::io(format!("Failed to write graph file: {}", path.display()), e)
    })?;

    info!(
        "Saved graph to {}: {} nodes, {} edges",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(())
}

/// Read a graph document from a file.
pub fn load(path: impl AsRef<Path>) -> Result<Graph> {
    load_with(path, &CodecConfig::default())
}

/// Read a graph document from a file with explicit codec settings.
///
/// # Errors
///
/// Returns [`GraphError::Io`] if the file cannot be read, or the errors of
/// [`from_json_with`].
pub fn load_with(path: impl AsRef<Path>, config: &CodecConfig) -> Result<Graph> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        GraphError::io(format!("Failed to read graph file: {}", path.display()), e)
    })?;

    let graph = from_json_with(&text, config)?;
    info!(
        "Loaded graph from {}: {} nodes, {} edges",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn entries<'a>(object: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    match object.get(key) {
        Some(Value::Array(items)) => items.as_slice(),
        Some(other) => {
            warn!("Ignoring non-array '{key}' field: {other}");
            &[]
        }
        None => &[],
    }
}

fn node_record(entry: &Value) -> Option<NodeRecord> {
    let name = entry.get("name")?.as_str()?.to_owned();
    let coord = |key: &str| entry.get(key).and_then(Value::as_f64).unwrap_or_default();
    Some(NodeRecord {
        name,
        x: coord("x"),
        y: coord("y"),
    })
}

fn edge_record(entry: &Value) -> Option<EdgeRecord> {
    Some(EdgeRecord {
        start: entry.get("start")?.as_str()?.to_owned(),
        end: entry.get("end")?.as_str()?.to_owned(),
    })
}
