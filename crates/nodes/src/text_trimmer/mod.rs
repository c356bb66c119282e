//! Text trimmer node: strips whitespace or a custom character set from the
//! `text` field of its input and emits the result under `output`.
//!
//! Settings come from the node's `trimParams` bindings:
//! - `trimType`: one of `leadingTrailing`, `all`, `leading`, `trailing`, `custom`
//!   (default `leadingTrailing`).
//! - `customChars`: character set stripped from both ends in `custom` mode.

pub mod config;
pub mod mode;
pub mod trimmer;

use std::sync::Arc;

use tracing::debug;

use engine::{NodeDefinition, NodeSchema};

pub use config::{default_inputs, default_outputs, Config};
pub use mode::TrimMode;
pub use trimmer::TextTrimmer;

use crate::{AdaptOptions, BuildOptions, InvokableNode, NodeAdaptor, NodeBuilder, NodeError, NodeKind};

/// Type tag of the text trimmer in graph definitions and schemas.
pub const NODE_TYPE: &str = "text_trimmer";
/// Input record field holding the text to trim.
pub const INPUT_KEY: &str = "text";
/// Output record field holding the trimmed text.
pub const OUTPUT_KEY: &str = "output";

/// Registry entry for the text trimmer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextTrimmerNode;

impl NodeAdaptor for TextTrimmerNode {
    fn adapt(&self, node: &NodeDefinition, _opts: &AdaptOptions) -> Result<NodeSchema, NodeError> {
        Config::adapt(node)
    }
}

impl NodeBuilder for TextTrimmerNode {
    fn build(
        &self,
        schema: &NodeSchema,
        _opts: &BuildOptions,
    ) -> Result<Arc<dyn InvokableNode>, NodeError> {
        let config: Config = schema
            .config()
            .map_err(|source| NodeError::InvalidConfig { node_type: NODE_TYPE, source })?;
        debug!(key = %schema.key, mode = %config.mode, "building text trimmer");
        Ok(Arc::new(TextTrimmer::from(config)))
    }
}

impl NodeKind for TextTrimmerNode {
    fn node_type(&self) -> &'static str {
        NODE_TYPE
    }
}
