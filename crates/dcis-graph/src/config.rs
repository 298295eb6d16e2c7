//! Codec configuration.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};

/// Settings for reading and writing graph documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Pretty-print JSON output
    pub pretty: bool,

    /// Treat unresolved or self-loop edge entries as errors instead of
    /// dropping them
    pub strict_edges: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            strict_edges: false,
        }
    }
}

impl CodecConfig {
    /// Drop bad edge entries silently (the default).
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Reject documents with bad edge entries.
    pub fn strict() -> Self {
        Self {
            strict_edges: true,
            ..Default::default()
        }
    }

    /// Single-line output for sending over the wire.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Default::default()
        }
    }

    /// Enable or disable pretty printing
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Enable or disable strict edge resolution
    pub fn with_strict_edges(mut self, strict_edges: bool) -> Self {
        self.strict_edges = strict_edges;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] if the text is not a valid
    /// configuration object.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| GraphError::serialization("Failed to parse codec config", Some(e)))
    }
}
