//! Core graph types: positions, nodes, edge views, and enums.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Ordered endpoint-name pair as stored in a graph's edge set.
pub type EdgeKey = (String, String);

/// A 2D layout position.
///
/// Only used to persist where the view placed a node; it has no effect on
/// graph semantics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite (JSON has no NaN or infinity).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Direction for neighbor queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Follow outgoing edges (from this node)
    Outgoing,
    /// Follow incoming edges (to this node)
    Incoming,
    /// Follow edges in both directions
    Both,
}

/// A named vertex.
///
/// The name is the node's identity: equality and hashing look at nothing
/// else. Degree counters are maintained by the owning [`Graph`](crate::Graph).
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    position: Point,
    out_degree: usize,
    in_degree: usize,
    undirected_degree: usize,
}

impl Node {
    /// Create a node at the origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_position(name, Point::default())
    }

    /// Create a node at the given position.
    pub fn with_position(name: impl Into<String>, position: Point) -> Self {
        Self {
            name: name.into(),
            position,
            out_degree: 0,
            in_degree: 0,
            undirected_degree: 0,
        }
    }

    /// The node's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Layout position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Horizontal coordinate.
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Vertical coordinate.
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Move the node.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Number of directed edges leaving this node.
    pub fn out_degree(&self) -> usize {
        self.out_degree
    }

    /// Number of directed edges entering this node.
    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    /// Number of undirected edges touching this node.
    pub fn undirected_degree(&self) -> usize {
        self.undirected_degree
    }

    /// Increment the out-degree counter.
    pub fn inc_out_degree(&mut self) {
        self.out_degree += 1;
    }

    /// Decrement the out-degree counter, saturating at zero.
    pub fn dec_out_degree(&mut self) {
        self.out_degree = self.out_degree.saturating_sub(1);
    }

    /// Increment the in-degree counter.
    pub fn inc_in_degree(&mut self) {
        self.in_degree += 1;
    }

    /// Decrement the in-degree counter, saturating at zero.
    pub fn dec_in_degree(&mut self) {
        self.in_degree = self.in_degree.saturating_sub(1);
    }

    /// Increment the undirected-degree counter.
    pub fn inc_undirected_degree(&mut self) {
        self.undirected_degree += 1;
    }

    /// Decrement the undirected-degree counter, saturating at zero.
    pub fn dec_undirected_degree(&mut self) {
        self.undirected_degree = self.undirected_degree.saturating_sub(1);
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// A view over one stored edge.
///
/// Edges have no storage of their own; the view borrows both endpoints from
/// the graph that produced it.
#[derive(Debug, Clone, Copy)]
pub struct Edge<'g> {
    u: &'g Node,
    v: &'g Node,
}

impl<'g> Edge<'g> {
    pub(crate) fn new(u: &'g Node, v: &'g Node) -> Self {
        Self { u, v }
    }

    /// Start node (the stored first endpoint).
    pub fn u(&self) -> &'g Node {
        self.u
    }

    /// End node (the stored second endpoint).
    pub fn v(&self) -> &'g Node {
        self.v
    }

    /// Endpoint names as `(start, end)`.
    pub fn names(&self) -> (&'g str, &'g str) {
        (self.u.name(), self.v.name())
    }

    /// Whether `name` is either endpoint.
    pub fn touches(&self, name: &str) -> bool {
        self.u.name() == name || self.v.name() == name
    }
}

impl PartialEq for Edge<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.u == other.u && self.v == other.v
    }
}

impl Eq for Edge<'_> {}
