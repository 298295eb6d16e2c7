//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Node`]: Uniquely named vertex with a position and degree counters
//! - [`Edge`]: Borrowed view over one stored endpoint pair
//! - [`Graph`]: The directed or undirected container owning both

mod container;
mod types;

pub use container::Graph;
pub use types::{Direction, Edge, EdgeKey, Node, Point};
