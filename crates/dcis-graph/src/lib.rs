//! # dcis-graph
//!
//! The in-memory graph engine behind the DCIS exploration client: a mutable
//! node/edge container with directed or undirected semantics, plus the JSON
//! document format used for saved graphs and for exchanging graphs with the
//! remote exploration/attack service.
//!
//! ## Core Principles
//!
//! - **Names are identity**: nodes are keyed by name, edges by name pairs
//! - **Quiet failure**: structural mutations return `false` and change nothing
//! - **Lenient input**: documents with dangling edges still load
//!
//! ## Architecture
//!
//! ```text
//! View / network client (external)
//!     ↓
//! Codec (JSON documents, file save/load)
//!     ↓
//! Graph (nodes, edge set, degree bookkeeping)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use dcis_graph::Graph;
//!
//! let mut graph = Graph::undirected();
//! let a = graph.next_node_name();
//! graph.add_node(a.as_str());
//! let b = graph.next_node_name();
//! graph.add_node(b.as_str());
//!
//! assert!(graph.set_edge(&a, &b));
//! assert!(graph.has_edge(&b, &a));
//!
//! let text = graph.to_json().unwrap();
//! let copy = dcis_graph::Graph::from_json(&text).unwrap();
//! assert!(copy.has_edge("a0", "b0"));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod codec;
pub mod config;
pub mod error;
pub mod generate;
pub mod graph;

// Re-export main types
pub use codec::{EdgeRecord, GraphDocument, NodeRecord};
pub use config::CodecConfig;
pub use error::{GraphError, Result};
pub use graph::{Direction, Edge, EdgeKey, Graph, Node, Point};
