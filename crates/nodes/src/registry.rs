//! Type-tag dispatch for the adapt and build phases.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{instrument, warn};

use engine::{NodeDefinition, NodeSchema};

use crate::text_trimmer::TextTrimmerNode;
use crate::{AdaptOptions, BuildOptions, InvokableNode, NodeError, NodeKind};

/// Maps `node_type` strings to node kinds.
#[derive(Default, Clone)]
pub struct NodeRegistry {
    kinds: HashMap<&'static str, Arc<dyn NodeKind>>,
}

impl NodeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in node kind.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(TextTrimmerNode);
        registry
    }

    /// Register `kind` under its type tag, replacing any previous entry.
    pub fn register(&mut self, kind: impl NodeKind + 'static) {
        self.kinds.insert(kind.node_type(), Arc::new(kind));
    }

    pub fn get(&self, node_type: &str) -> Option<&Arc<dyn NodeKind>> {
        self.kinds.get(node_type)
    }

    /// Registered type tags, sorted.
    pub fn node_types(&self) -> Vec<&'static str> {
        let mut types: Vec<_> = self.kinds.keys().copied().collect();
        types.sort_unstable();
        types
    }

    fn kind(&self, node_type: &str) -> Result<&Arc<dyn NodeKind>, NodeError> {
        self.get(node_type).ok_or_else(|| {
            warn!("no implementation registered for node_type '{}'", node_type);
            NodeError::UnknownNodeType(node_type.to_owned())
        })
    }

    /// Adapt `node` with the kind registered for its type tag.
    #[instrument(skip_all, fields(node_id = %node.id, node_type = %node.node_type))]
    pub fn adapt(&self, node: &NodeDefinition, opts: &AdaptOptions) -> Result<NodeSchema, NodeError> {
        self.kind(&node.node_type)?.adapt(node, opts)
    }

    /// Build `schema` with the kind registered for its type tag.
    #[instrument(skip_all, fields(key = %schema.key, node_type = %schema.node_type))]
    pub fn build(
        &self,
        schema: &NodeSchema,
        opts: &BuildOptions,
    ) -> Result<Arc<dyn InvokableNode>, NodeError> {
        self.kind(&schema.node_type)?.build(schema, opts)
    }

    /// Adapt then build with default options, returning both the schema and
    /// the built node.
    pub fn adapt_and_build(
        &self,
        node: &NodeDefinition,
    ) -> Result<(NodeSchema, Arc<dyn InvokableNode>), NodeError> {
        let schema = self.adapt(node, &AdaptOptions::default())?;
        let built = self.build(&schema, &BuildOptions::default())?;
        Ok((schema, built))
    }
}

impl std::fmt::Debug for NodeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRegistry")
            .field("node_types", &self.node_types())
            .finish()
    }
}
