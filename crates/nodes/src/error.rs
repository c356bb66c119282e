//! Node-level error type.

use thiserror::Error;

/// Errors returned by the adapt, build and invoke phases of a node.
///
/// None of these are retried locally; each is handed back to the caller.
#[derive(Debug, Error)]
pub enum NodeError {
    /// The input record lacks a required field.
    #[error("input field '{field}' is required")]
    MissingInput { field: &'static str },

    /// The input field exists but holds the wrong kind of value.
    #[error("input field '{field}' must be {expected} but got {actual}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// The configured trim mode is none of the known ones.
    #[error("unsupported trim type: {0}")]
    UnsupportedMode(String),

    /// The schema's config payload does not decode for this node type.
    #[error("invalid config for node type '{node_type}': {source}")]
    InvalidConfig {
        node_type: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// No node kind is registered under the requested type tag.
    #[error("no implementation registered for node_type '{0}'")]
    UnknownNodeType(String),

    /// Declared type conversion failed while adapting.
    #[error(transparent)]
    Schema(#[from] engine::EngineError),
}
