//! Graph document codecs.
//!
//! - **JSON**: the `directed`/`nodes`/`edges` document used for saved graph
//!   files and for exchanging graphs with the remote exploration service

pub mod json;

pub use json::{EdgeRecord, GraphDocument, NodeRecord};
