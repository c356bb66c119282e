//! The three-phase node contract: adapt, build, invoke.

use std::sync::Arc;

use engine::{NodeDefinition, NodeSchema};

use crate::{NodeError, Record};

/// Options threaded through [`NodeAdaptor::adapt`].
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct AdaptOptions {}

/// Options threaded through [`NodeBuilder::build`].
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct BuildOptions {}

/// Turns an authored graph node into a normalized schema.
pub trait NodeAdaptor {
    fn adapt(&self, node: &NodeDefinition, opts: &AdaptOptions) -> Result<NodeSchema, NodeError>;
}

/// Turns a normalized schema into something that can be invoked.
pub trait NodeBuilder {
    fn build(
        &self,
        schema: &NodeSchema,
        opts: &BuildOptions,
    ) -> Result<Arc<dyn InvokableNode>, NodeError>;
}

/// A built node.
///
/// Implementations are immutable after construction, so one instance may
/// serve any number of concurrent calls.
pub trait InvokableNode: Send + Sync {
    /// Run once against `input` and return a fresh output record.
    fn invoke(&self, input: &Record) -> Result<Record, NodeError>;
}

/// A node type as seen by the registry: one adaptor and one builder under a
/// single type tag.
pub trait NodeKind: NodeAdaptor + NodeBuilder + Send + Sync {
    fn node_type(&self) -> &'static str;
}
