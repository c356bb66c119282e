//! `MockNode`: a test double for the node contract.
//!
//! Registers under the `mock` type tag, adapts any definition into a bare
//! schema, and on invoke records its input and returns a canned record.

use std::sync::{Arc, Mutex, PoisonError};

use engine::{NodeDefinition, NodeSchema};

use crate::{
    AdaptOptions, BuildOptions, InvokableNode, NodeAdaptor, NodeBuilder, NodeError, NodeKind,
    Record,
};

/// Type tag of [`MockNode`].
pub const MOCK_NODE_TYPE: &str = "mock";

/// A mock node that records every call it receives.
///
/// Clones share the call log, so a clone handed to a registry can be
/// inspected through the original.
#[derive(Debug, Clone)]
pub struct MockNode {
    /// Record returned by every `invoke`.
    pub output: Record,
    /// All inputs seen by this node (in call order).
    pub calls: Arc<Mutex<Vec<Record>>>,
}

impl MockNode {
    /// Create a mock that always succeeds with `output`.
    pub fn returning(output: Record) -> Self {
        Self {
            output,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times this node has been invoked.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl InvokableNode for MockNode {
    fn invoke(&self, input: &Record) -> Result<Record, NodeError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(input.clone());

        Ok(self.output.clone())
    }
}

impl NodeAdaptor for MockNode {
    fn adapt(&self, node: &NodeDefinition, _opts: &AdaptOptions) -> Result<NodeSchema, NodeError> {
        Ok(NodeSchema::new(
            &node.id,
            MOCK_NODE_TYPE,
            &node.data.node_meta.title,
            serde_json::Value::Null,
        ))
    }
}

impl NodeBuilder for MockNode {
    fn build(
        &self,
        _schema: &NodeSchema,
        _opts: &BuildOptions,
    ) -> Result<Arc<dyn InvokableNode>, NodeError> {
        Ok(Arc::new(self.clone()))
    }
}

impl NodeKind for MockNode {
    fn node_type(&self) -> &'static str {
        MOCK_NODE_TYPE
    }
}
