//! `engine` crate: graph node definitions, the normalized node schema, and
//! the shared helpers that copy declared types from one onto the other.

pub mod models;
pub mod schema;
pub mod error;
pub mod convert;

pub use models::{NodeDefinition, ParamMap, ParamValue, ParameterBinding, VariableMeta, VariableType};
pub use schema::{FieldInfo, FieldSource, NodeSchema, TypeInfo};
pub use error::EngineError;
pub use convert::{set_inputs_for_node_schema, set_output_types_for_node_schema};
