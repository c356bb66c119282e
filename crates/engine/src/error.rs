//! Engine-level error types.

use thiserror::Error;

/// Errors raised while copying a node's declared inputs and outputs onto its
/// schema.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A declared input or output has an empty name.
    #[error("node '{node_id}' declares a {side} field with an empty name")]
    EmptyParameterName {
        node_id: String,
        side: &'static str,
    },

    /// An input parameter has no `input` block at all.
    #[error("node '{node_id}' input parameter '{name}' has no input block")]
    MissingParameterInput { node_id: String, name: String },

    /// A reference input points at no source node.
    #[error("node '{node_id}' input parameter '{name}' references an empty block id")]
    DanglingReference { node_id: String, name: String },

    /// The same field name is declared twice on one side.
    #[error("node '{node_id}' declares {side} field '{name}' more than once")]
    DuplicateField {
        node_id: String,
        name: String,
        side: &'static str,
    },

    /// A list declaration carries no element type.
    #[error("node '{node_id}' list field '{name}' has no element type")]
    MissingElementType { node_id: String, name: String },
}
