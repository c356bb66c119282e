//! Text trimmer configuration and its adapter.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use engine::models::BlockInput;
use engine::{
    convert, NodeDefinition, NodeSchema, ParamMap, ParameterBinding, VariableMeta, VariableType,
};

use super::{TrimMode, INPUT_KEY, NODE_TYPE, OUTPUT_KEY};
use crate::NodeError;

/// Binding name selecting the trim mode.
pub const TRIM_TYPE_PARAM: &str = "trimType";
/// Binding name carrying the custom character set.
pub const CUSTOM_CHARS_PARAM: &str = "customChars";

/// Resolved text trimmer settings, stored as the schema's config payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(rename = "type")]
    pub mode: TrimMode,
    #[serde(default)]
    pub custom_chars: String,
}

impl Config {
    pub fn new(mode: TrimMode, custom_chars: impl Into<String>) -> Self {
        Self { mode, custom_chars: custom_chars.into() }
    }

    /// Read trim settings out of the node's `trimParams`.
    ///
    /// Absent bindings, bindings without a value and non-string values are
    /// skipped; among repeated names the last string value wins. An empty or
    /// missing mode falls back to
    /// [`TrimMode::LeadingTrailing`]. Unknown mode strings are kept as-is.
    pub fn from_node(node: &NodeDefinition) -> Self {
        let params = node
            .data
            .inputs
            .as_ref()
            .map(|inputs| ParamMap::collect(&inputs.trim_params))
            .unwrap_or_default();

        // An empty mode string counts as unset, like a missing one.
        let mode = params
            .last_str(TRIM_TYPE_PARAM)
            .filter(|s| !s.is_empty())
            .map(TrimMode::from)
            .unwrap_or_default();
        let custom_chars = params
            .last_str(CUSTOM_CHARS_PARAM)
            .unwrap_or_default()
            .to_owned();

        Self { mode, custom_chars }
    }

    /// Build the normalized schema for `node`.
    ///
    /// # Errors
    /// Only the shared input/output conversion can fail; its error is returned
    /// unchanged as [`NodeError::Schema`].
    pub fn adapt(node: &NodeDefinition) -> Result<NodeSchema, NodeError> {
        let config = Self::from_node(node);
        debug!(
            node_id = %node.id,
            mode = %config.mode,
            custom_chars = %config.custom_chars.escape_debug(),
            "adapting text trimmer"
        );

        let configs = json!({
            "type": config.mode.as_str(),
            "customChars": config.custom_chars,
        });
        let mut schema = NodeSchema::new(&node.id, NODE_TYPE, &node.data.node_meta.title, configs);

        convert::set_inputs_for_node_schema(node, &mut schema)?;
        convert::set_output_types_for_node_schema(node, &mut schema)?;

        Ok(schema)
    }

    /// Encode this config as `trimParams` bindings. The custom character set
    /// is only emitted in [`TrimMode::Custom`] and when non-empty.
    pub fn to_trim_params(&self) -> Vec<Option<ParameterBinding>> {
        let mut params = vec![Some(ParameterBinding::literal(
            TRIM_TYPE_PARAM,
            VariableType::String,
            json!(self.mode.as_str()),
        ))];

        if self.mode == TrimMode::Custom && !self.custom_chars.is_empty() {
            params.push(Some(ParameterBinding::literal(
                CUSTOM_CHARS_PARAM,
                VariableType::String,
                json!(self.custom_chars),
            )));
        }

        params
    }
}

/// Input declaration of a text trimmer: a single unbound string field.
pub fn default_inputs() -> Vec<ParameterBinding> {
    vec![ParameterBinding {
        name: INPUT_KEY.into(),
        input: Some(BlockInput {
            var_type: VariableType::String,
            value: None,
        }),
    }]
}

/// Output declaration of a text trimmer: a single string field.
pub fn default_outputs() -> Vec<VariableMeta> {
    vec![VariableMeta::new(OUTPUT_KEY, VariableType::String)]
}
