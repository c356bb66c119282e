//! Graph node definitions as authored on the workflow canvas.
//!
//! These types mirror the JSON the graph layer hands over for a single node.
//! They are read-only input for adapters; nothing here knows about any
//! particular node type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// NodeDefinition
// ---------------------------------------------------------------------------

/// A single node as it appears in the authored graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDefinition {
    /// Identifier within the graph; becomes the schema key.
    pub id: String,
    /// Type tag used to pick an adapter.
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub data: NodeData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    #[serde(default)]
    pub node_meta: NodeMeta,
    #[serde(default)]
    pub inputs: Option<NodeInputs>,
    /// Declared output fields.
    #[serde(default)]
    pub outputs: Vec<VariableMeta>,
}

/// Display metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Input groups of a node.
///
/// `input_parameters` are the generic, typed inputs wired from upstream nodes.
/// `trim_params` carries text-trimmer settings; individual entries may be
/// `null` in legacy graphs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInputs {
    #[serde(default)]
    pub input_parameters: Vec<ParameterBinding>,
    #[serde(default)]
    pub trim_params: Vec<Option<ParameterBinding>>,
}

// ---------------------------------------------------------------------------
// Parameter bindings
// ---------------------------------------------------------------------------

/// A named graph parameter with an optional typed value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterBinding {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub input: Option<BlockInput>,
}

impl ParameterBinding {
    /// Binding carrying a literal JSON value.
    pub fn literal(
        name: impl Into<String>,
        var_type: VariableType,
        content: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            input: Some(BlockInput {
                var_type,
                value: Some(BlockValue::Literal(content)),
            }),
        }
    }

    /// Binding referencing another node's output field.
    pub fn reference(
        name: impl Into<String>,
        var_type: VariableType,
        block_id: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            input: Some(BlockInput {
                var_type,
                value: Some(BlockValue::Ref(ValueReference {
                    block_id: block_id.into(),
                    name: field.into(),
                })),
            }),
        }
    }

    /// Strictly decoded value, or `None` when the binding has no usable value.
    pub fn value(&self) -> Option<ParamValue> {
        self.input.as_ref()?.value.as_ref()?.decode()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockInput {
    #[serde(rename = "type")]
    pub var_type: VariableType,
    #[serde(default)]
    pub value: Option<BlockValue>,
}

/// Value container of a binding: an inline literal or a reference upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum BlockValue {
    Literal(serde_json::Value),
    Ref(ValueReference),
}

impl BlockValue {
    /// Decode into a [`ParamValue`]. Null, array and object literals have no
    /// parameter representation and yield `None`.
    pub fn decode(&self) -> Option<ParamValue> {
        match self {
            Self::Literal(serde_json::Value::String(s)) => Some(ParamValue::String(s.clone())),
            Self::Literal(serde_json::Value::Bool(b)) => Some(ParamValue::Bool(*b)),
            Self::Literal(serde_json::Value::Number(n)) => n.as_f64().map(ParamValue::Number),
            Self::Literal(_) => None,
            Self::Ref(r) => Some(ParamValue::Reference(r.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueReference {
    #[serde(rename = "blockID")]
    pub block_id: String,
    pub name: String,
}

/// A decoded parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ParamValue {
    String(String),
    Number(f64),
    Bool(bool),
    Reference(ValueReference),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ParamMap
// ---------------------------------------------------------------------------

/// Name → decoded values view over an ordered binding list.
///
/// Every decodable value is kept in binding order, so callers can pick the
/// last value of the kind they accept instead of the last value of any kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamMap(BTreeMap<String, Vec<ParamValue>>);

impl ParamMap {
    /// Scan `bindings` in order. Null bindings and bindings without a usable
    /// value are skipped.
    pub fn collect<'a, I>(bindings: I) -> Self
    where
        I: IntoIterator<Item = &'a Option<ParameterBinding>>,
    {
        let mut map: BTreeMap<String, Vec<ParamValue>> = BTreeMap::new();
        for binding in bindings.into_iter().flatten() {
            match binding.value() {
                Some(value) => map.entry(binding.name.clone()).or_default().push(value),
                None => tracing::trace!(param = %binding.name, "skipping binding without value"),
            }
        }
        Self(map)
    }

    /// All values bound to `name`, in binding order.
    pub fn values(&self, name: &str) -> &[ParamValue] {
        self.0.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// The last value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values(name).last()
    }

    /// The last string value bound to `name`; values of other kinds are ignored.
    pub fn last_str(&self, name: &str) -> Option<&str> {
        self.values(name).iter().rev().find_map(ParamValue::as_str)
    }
}

// ---------------------------------------------------------------------------
// Variable declarations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableType {
    String,
    Integer,
    Float,
    Boolean,
    Object,
    List,
}

/// A declared input or output field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableMeta {
    pub name: String,
    #[serde(rename = "type")]
    pub var_type: VariableType,
    #[serde(default)]
    pub required: bool,
    /// Fields of an `object`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schema: Vec<VariableMeta>,
    /// Element type of a `list`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<VariableMeta>>,
}

impl VariableMeta {
    pub fn new(name: impl Into<String>, var_type: VariableType) -> Self {
        Self {
            name: name.into(),
            var_type,
            required: false,
            schema: Vec::new(),
            items: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definition(json: serde_json::Value) -> NodeDefinition {
        serde_json::from_value(json).expect("valid node definition")
    }

    #[test]
    fn deserializes_canvas_json() {
        let node = definition(json!({
            "id": "105",
            "type": "text_trimmer",
            "data": {
                "nodeMeta": { "title": "Trim" },
                "inputs": {
                    "inputParameters": [{
                        "name": "text",
                        "input": {
                            "type": "string",
                            "value": { "type": "ref", "content": { "blockID": "100", "name": "query" } }
                        }
                    }],
                    "trimParams": [
                        { "name": "trimType", "input": { "type": "string", "value": { "type": "literal", "content": "all" } } },
                        null
                    ]
                },
                "outputs": [{ "name": "output", "type": "string" }]
            }
        }));

        assert_eq!(node.id, "105");
        assert_eq!(node.data.node_meta.title, "Trim");
        let inputs = node.data.inputs.expect("inputs present");
        assert_eq!(inputs.trim_params.len(), 2);
        assert!(inputs.trim_params[1].is_none());
        assert_eq!(
            inputs.input_parameters[0].value(),
            Some(ParamValue::Reference(ValueReference {
                block_id: "100".into(),
                name: "query".into(),
            }))
        );
    }

    #[test]
    fn container_literals_do_not_decode() {
        assert_eq!(BlockValue::Literal(json!(null)).decode(), None);
        assert_eq!(BlockValue::Literal(json!([1, 2])).decode(), None);
        assert_eq!(BlockValue::Literal(json!({ "a": 1 })).decode(), None);
        assert_eq!(BlockValue::Literal(json!(2)).decode(), Some(ParamValue::Number(2.0)));
        assert_eq!(BlockValue::Literal(json!(true)).decode(), Some(ParamValue::Bool(true)));
    }

    #[test]
    fn param_map_skips_empty_bindings_and_keeps_every_value() {
        let bindings = vec![
            None,
            Some(ParameterBinding { name: "trimType".into(), input: None }),
            Some(ParameterBinding::literal("trimType", VariableType::String, json!("leading"))),
            Some(ParameterBinding {
                name: "customChars".into(),
                input: Some(BlockInput { var_type: VariableType::String, value: None }),
            }),
            Some(ParameterBinding::literal("trimType", VariableType::String, json!("trailing"))),
            Some(ParameterBinding::literal("trimType", VariableType::Integer, json!(5))),
        ];

        let params = ParamMap::collect(&bindings);
        assert_eq!(params.values("trimType").len(), 3);
        assert_eq!(params.get("trimType"), Some(&ParamValue::Number(5.0)));
        assert_eq!(params.last_str("trimType"), Some("trailing"));
        assert!(params.values("customChars").is_empty());
        assert_eq!(params.last_str("customChars"), None);
    }
}
