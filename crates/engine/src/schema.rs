//! The normalized, engine-ready node schema produced by adapters.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::models::{ParamValue, VariableType};

/// Normalized schema for one node.
///
/// Produced once by an adapter and treated as immutable afterwards. The
/// `configs` payload is opaque to the engine; only the node type that wrote
/// it knows its shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSchema {
    pub key: String,
    pub node_type: String,
    pub name: String,
    pub configs: serde_json::Value,
    #[serde(default)]
    pub input_types: BTreeMap<String, TypeInfo>,
    #[serde(default)]
    pub input_sources: Vec<FieldInfo>,
    #[serde(default)]
    pub output_types: BTreeMap<String, TypeInfo>,
}

impl NodeSchema {
    pub fn new(
        key: impl Into<String>,
        node_type: impl Into<String>,
        name: impl Into<String>,
        configs: serde_json::Value,
    ) -> Self {
        Self {
            key: key.into(),
            node_type: node_type.into(),
            name: name.into(),
            configs,
            input_types: BTreeMap::new(),
            input_sources: Vec::new(),
            output_types: BTreeMap::new(),
        }
    }

    /// Decode the opaque config payload.
    pub fn config<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.configs)
    }
}

/// Resolved type of a declared field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    #[serde(rename = "type")]
    pub var_type: VariableType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, TypeInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elem: Option<Box<TypeInfo>>,
}

/// Where an input field gets its value at run time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub path: String,
    pub source: FieldSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldSource {
    Literal { value: ParamValue },
    Reference { from_node_key: String, from_path: String },
}
