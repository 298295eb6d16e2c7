//! Error types for graph and codec operations.
//!
//! Structural mutations on [`Graph`](crate::Graph) report failure with a
//! `bool` and never produce a [`GraphError`]. Errors come from the JSON codec,
//! file persistence, and [`Graph::require_edge`](crate::Graph::require_edge).

use thiserror::Error;

/// Result type alias for dcis-graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for all fallible graph operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node not found in the graph
    #[error("Node not found: {name}")]
    NodeNotFound {
        /// Name of the missing node
        name: String,
    },

    /// No edge joins the two nodes
    #[error("Edge not found: {start} -> {end}")]
    EdgeNotFound {
        /// Name of the start node
        start: String,
        /// Name of the end node
        end: String,
    },

    /// Invalid operation (e.g., a self-loop in a strict document)
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Description of what went wrong
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File I/O error while saving or loading a graph document
    #[error("I/O error: {message}")]
    Io {
        /// Error details
        message: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl GraphError {
    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create an I/O error from a message and its source.
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}
