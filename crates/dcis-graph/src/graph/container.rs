//! The [`Graph`] container: node storage, edge set, and structural mutation.

use super::types::{Direction, Edge, EdgeKey, Node, Point};
use crate::config::CodecConfig;
use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;

/// An in-memory graph of uniquely named nodes.
///
/// Nodes are keyed by name. Edges are stored as ordered name pairs, so no
/// edge ever holds a reference into node storage and renames or removals
/// cannot leave dangling endpoints behind.
///
/// Mutations report failure by returning `false` and leaving the graph
/// untouched. Directedness is chosen at construction and never changes.
#[derive(Debug)]
pub struct Graph {
    directed: bool,
    nodes: HashMap<String, Node>,
    // Insertion order; always holds exactly the keys of `nodes`.
    order: Vec<String>,
    edges: BTreeSet<EdgeKey>,
}

fn edge_key(u: &str, v: &str) -> EdgeKey {
    (u.to_owned(), v.to_owned())
}

fn candidate_name(i: usize) -> String {
    let letter = char::from(b'a' + (i % 26) as u8);
    format!("{letter}{}", i / 26)
}

impl Graph {
    /// Create an empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: HashMap::new(),
            order: Vec::new(),
            edges: BTreeSet::new(),
        }
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Whether `(u, v)` and `(v, u)` are distinct edges.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    // ===== Nodes =====

    /// Check whether a node with this name exists.
    pub fn has_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Look up a node by name.
    pub fn get_node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Add a node at the origin.
    ///
    /// Returns `false` without changing anything if the name is taken.
    pub fn add_node(&mut self, name: impl Into<String>) -> bool {
        self.add_node_at(name, Point::default())
    }

    /// Add a node at the given position.
    ///
    /// Returns `false` without changing anything if the name is taken or a
    /// coordinate is NaN or infinite.
    pub fn add_node_at(&mut self, name: impl Into<String>, position: Point) -> bool {
        let name = name.into();
        if self.nodes.contains_key(&name) {
            trace!("Rejecting duplicate node {name}");
            return false;
        }
        if !position.is_finite() {
            trace!("Rejecting node {name}: non-finite position");
            return false;
        }

        debug!("Adding node: name={name}, x={}, y={}", position.x, position.y);
        self.order.push(name.clone());
        self.nodes
            .insert(name.clone(), Node::with_position(name, position));
        true
    }

    /// Add a node carrying the name and position of `node`.
    ///
    /// Degree counters on `node` are ignored; the graph keeps its own.
    pub fn insert_node(&mut self, node: Node) -> bool {
        self.add_node_at(node.name(), node.position())
    }

    /// First free name in the sequence `a0, b0, ..., z0, a1, b1, ...`.
    pub fn next_node_name(&self) -> String {
        let count = self.nodes.len();
        (0..count)
            .map(candidate_name)
            .find(|name| !self.has_node(name))
            .unwrap_or_else(|| candidate_name(count))
    }

    /// Move a node.
    ///
    /// Returns `false` if it does not exist or a coordinate is NaN or
    /// infinite.
    pub fn set_node_position(&mut self, name: &str, position: Point) -> bool {
        if !position.is_finite() {
            return false;
        }
        match self.nodes.get_mut(name) {
            Some(node) => {
                node.set_position(position);
                true
            }
            None => false,
        }
    }

    /// Rename a node, keeping its position, its slot in the node order, and
    /// every incident edge with its direction.
    ///
    /// Fails if `old` is absent, `new` is taken, or the names are equal.
    pub fn set_node_name(&mut self, old: &str, new: &str) -> bool {
        let Some(position) = self.nodes.get(old).map(Node::position) else {
            return false;
        };
        if old == new || self.has_node(new) {
            return false;
        }

        debug!("Renaming node: {old} -> {new}");
        let slot = self.order.iter().position(|name| name == old);
        let incident = self.incident_edges(old);

        self.add_node_at(new, position);
        for (u, v) in &incident {
            if u == old {
                self.set_edge(new, v);
            } else {
                self.set_edge(u, new);
            }
        }
        self.remove_node(old);

        if let (Some(slot), Some(renamed)) = (slot, self.order.pop()) {
            self.order.insert(slot, renamed);
        }
        true
    }

    /// Remove every edge touching the node, keeping the node itself.
    ///
    /// Returns `false` if the node does not exist.
    pub fn isolate_node(&mut self, name: &str) -> bool {
        if !self.has_node(name) {
            return false;
        }

        let incident = self.incident_edges(name);
        trace!("Isolating node {name}: {} incident edges", incident.len());
        for (u, v) in &incident {
            self.remove_edge(u, v);
        }
        true
    }

    /// Remove a node together with all of its edges.
    ///
    /// Returns `false` if the node does not exist.
    pub fn remove_node(&mut self, name: &str) -> bool {
        if !self.isolate_node(name) {
            return false;
        }

        debug!("Removing node: name={name}");
        self.nodes.remove(name);
        self.order.retain(|n| n != name);
        true
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.order.iter().filter_map(|name| self.nodes.get(name))
    }

    /// Node names in insertion order.
    pub fn node_names(&self) -> &[String] {
        &self.order
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ===== Edges =====

    /// Connect `u` to `v`.
    ///
    /// Fails for self-loops and unknown endpoints. Setting an edge that already
    /// exists (in an undirected graph, in either orientation) is a successful
    /// no-op.
    pub fn set_edge(&mut self, u: &str, v: &str) -> bool {
        if u == v || !self.has_node(u) || !self.has_node(v) {
            return false;
        }
        if self.has_edge(u, v) {
            return true;
        }

        debug!("Adding edge: {u} -> {v}");
        self.edges.insert(edge_key(u, v));
        self.adjust_degrees(u, v, true);
        true
    }

    /// Check whether `u` and `v` are connected.
    ///
    /// Directed graphs only match `(u, v)`; undirected graphs match either
    /// orientation.
    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.stored_orientation(u, v).is_some()
    }

    /// View of the edge joining `u` and `v`, if any.
    ///
    /// In an undirected graph the view reports the endpoints in their stored
    /// order, which may be `(v, u)`.
    pub fn get_edge(&self, u: &str, v: &str) -> Option<Edge<'_>> {
        let (a, b) = self.stored_orientation(u, v)?;
        Some(Edge::new(self.nodes.get(a)?, self.nodes.get(b)?))
    }

    /// Like [`get_edge`](Self::get_edge), but a missing edge is an error.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if no edge joins the nodes.
    pub fn require_edge(&self, u: &str, v: &str) -> Result<Edge<'_>> {
        self.get_edge(u, v).ok_or_else(|| GraphError::EdgeNotFound {
            start: u.to_owned(),
            end: v.to_owned(),
        })
    }

    /// Disconnect `u` and `v`, updating degree counters.
    ///
    /// Undirected graphs remove the edge whichever orientation it is stored
    /// in. Returns `false` if nothing was removed.
    pub fn remove_edge(&mut self, u: &str, v: &str) -> bool {
        if u == v || !self.has_node(u) || !self.has_node(v) {
            return false;
        }
        let Some((a, b)) = self.stored_orientation(u, v) else {
            return false;
        };

        debug!("Removing edge: {a} -> {b}");
        self.edges.remove(&edge_key(a, b));
        self.adjust_degrees(a, b, false);
        true
    }

    /// Views over every stored edge, in edge-set order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> + '_ {
        self.edges
            .iter()
            .filter_map(|(u, v)| Some(Edge::new(self.nodes.get(u)?, self.nodes.get(v)?)))
    }

    /// Number of stored edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Names of the nodes adjacent to `name`, in edge-set order.
    ///
    /// Undirected graphs ignore `direction`. Returns `None` if the node does
    /// not exist.
    pub fn neighbors(&self, name: &str, direction: Direction) -> Option<Vec<&str>> {
        if !self.has_node(name) {
            return None;
        }

        let follow_out = !self.directed || direction != Direction::Incoming;
        let follow_in = !self.directed || direction != Direction::Outgoing;

        let mut seen = HashSet::new();
        let mut neighbors = Vec::new();
        for (u, v) in &self.edges {
            let other = if follow_out && u == name {
                v.as_str()
            } else if follow_in && v == name {
                u.as_str()
            } else {
                continue;
            };
            if seen.insert(other) {
                neighbors.push(other);
            }
        }
        Some(neighbors)
    }

    // ===== Whole graph =====

    /// Remove all nodes and edges. Directedness is kept.
    pub fn clear(&mut self) {
        debug!(
            "Clearing graph: {} nodes, {} edges",
            self.nodes.len(),
            self.edges.len()
        );
        self.nodes.clear();
        self.order.clear();
        self.edges.clear();
    }

    /// Replace this graph with `other`, typically a document received from a
    /// remote peer. The incoming directedness wins.
    pub fn replace_with(&mut self, other: Graph) {
        debug!(
            "Replacing graph: {} nodes -> {} nodes, directed={}",
            self.nodes.len(),
            other.nodes.len(),
            other.directed
        );
        *self = other;
    }

    // ===== Codec shortcuts =====

    /// Serialize to a pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        crate::codec::json::to_json(self)
    }

    /// Serialize with explicit codec settings.
    pub fn to_json_with(&self, config: &CodecConfig) -> Result<String> {
        crate::codec::json::to_json_with(self, config)
    }

    /// Parse a JSON document, dropping edges whose endpoints do not resolve.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] if the text is not a JSON object.
    pub fn from_json(text: &str) -> Result<Self> {
        crate::codec::json::from_json(text)
    }

    /// Parse with explicit codec settings.
    pub fn from_json_with(text: &str, config: &CodecConfig) -> Result<Self> {
        crate::codec::json::from_json_with(text, config)
    }

    /// Write the graph document to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        crate::codec::json::save(self, path)
    }

    /// Read a graph document from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        crate::codec::json::load(path)
    }

    // Private helper methods

    fn stored_orientation<'a>(&self, u: &'a str, v: &'a str) -> Option<(&'a str, &'a str)> {
        if self.edges.contains(&edge_key(u, v)) {
            Some((u, v))
        } else if !self.directed && self.edges.contains(&edge_key(v, u)) {
            Some((v, u))
        } else {
            None
        }
    }

    // Snapshot so callers can mutate the edge set while walking the result.
    fn incident_edges(&self, name: &str) -> Vec<EdgeKey> {
        self.edges
            .iter()
            .filter(|(u, v)| u == name || v == name)
            .cloned()
            .collect()
    }

    fn adjust_degrees(&mut self, u: &str, v: &str, inserted: bool) {
        let directed = self.directed;
        if let Some(node) = self.nodes.get_mut(u) {
            match (directed, inserted) {
                (true, true) => node.inc_out_degree(),
                (true, false) => node.dec_out_degree(),
                (false, true) => node.inc_undirected_degree(),
                (false, false) => node.dec_undirected_degree(),
            }
        }
        if let Some(node) = self.nodes.get_mut(v) {
            match (directed, inserted) {
                (true, true) => node.inc_in_degree(),
                (true, false) => node.dec_in_degree(),
                (false, true) => node.inc_undirected_degree(),
                (false, false) => node.dec_undirected_degree(),
            }
        }
    }
}

impl Clone for Graph {
    /// Rebuild the graph by name: nodes in order with their positions, then
    /// every edge. Degree counters are recomputed, not copied.
    fn clone(&self) -> Self {
        let mut copy = Graph::new(self.directed);
        for node in self.nodes() {
            copy.add_node_at(node.name(), node.position());
        }
        for (u, v) in &self.edges {
            copy.set_edge(u, v);
        }
        copy
    }
}
