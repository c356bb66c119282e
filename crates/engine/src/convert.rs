//! Copies a node's declared inputs and outputs onto its schema.
//!
//! Shared by every adapter. Rules enforced:
//! 1. Declared fields must be named, and names are unique per side.
//! 2. Every input parameter carries an `input` block.
//! 3. References must name a source block.
//! 4. `list` declarations must carry an element type.

use std::collections::BTreeMap;

use crate::models::{BlockValue, NodeDefinition, VariableMeta, VariableType};
use crate::schema::{FieldInfo, FieldSource, NodeSchema, TypeInfo};
use crate::EngineError;

/// Populate `input_types` and `input_sources` from the node's input parameters.
///
/// # Errors
/// - [`EngineError::EmptyParameterName`] for an unnamed parameter.
/// - [`EngineError::DuplicateField`] if a name repeats.
/// - [`EngineError::MissingParameterInput`] if a parameter has no input block.
/// - [`EngineError::DanglingReference`] if a reference has no block id.
pub fn set_inputs_for_node_schema(
    node: &NodeDefinition,
    schema: &mut NodeSchema,
) -> Result<(), EngineError> {
    let Some(inputs) = node.data.inputs.as_ref() else {
        return Ok(());
    };

    for param in &inputs.input_parameters {
        if param.name.is_empty() {
            return Err(EngineError::EmptyParameterName {
                node_id: node.id.clone(),
                side: "input",
            });
        }
        if schema.input_types.contains_key(&param.name) {
            return Err(EngineError::DuplicateField {
                node_id: node.id.clone(),
                name: param.name.clone(),
                side: "input",
            });
        }

        let input = param
            .input
            .as_ref()
            .ok_or_else(|| EngineError::MissingParameterInput {
                node_id: node.id.clone(),
                name: param.name.clone(),
            })?;

        schema.input_types.insert(
            param.name.clone(),
            TypeInfo {
                var_type: input.var_type,
                required: false,
                properties: BTreeMap::new(),
                elem: None,
            },
        );

        // A parameter without a value is declared but left for the engine to fill.
        let source = match &input.value {
            None => continue,
            Some(BlockValue::Ref(r)) => {
                if r.block_id.is_empty() {
                    return Err(EngineError::DanglingReference {
                        node_id: node.id.clone(),
                        name: param.name.clone(),
                    });
                }
                FieldSource::Reference {
                    from_node_key: r.block_id.clone(),
                    from_path: r.name.clone(),
                }
            }
            Some(literal) => match literal.decode() {
                Some(value) => FieldSource::Literal { value },
                None => continue,
            },
        };

        schema.input_sources.push(FieldInfo {
            path: param.name.clone(),
            source,
        });
    }

    Ok(())
}

/// Populate `output_types` from the node's declared outputs.
///
/// # Errors
/// - [`EngineError::EmptyParameterName`] for an unnamed output.
/// - [`EngineError::DuplicateField`] if a name repeats.
/// - [`EngineError::MissingElementType`] for a `list` without `items`.
pub fn set_output_types_for_node_schema(
    node: &NodeDefinition,
    schema: &mut NodeSchema,
) -> Result<(), EngineError> {
    for output in &node.data.outputs {
        if output.name.is_empty() {
            return Err(EngineError::EmptyParameterName {
                node_id: node.id.clone(),
                side: "output",
            });
        }
        if schema.output_types.contains_key(&output.name) {
            return Err(EngineError::DuplicateField {
                node_id: node.id.clone(),
                name: output.name.clone(),
                side: "output",
            });
        }
        let info = type_info(&node.id, output)?;
        schema.output_types.insert(output.name.clone(), info);
    }

    Ok(())
}

fn type_info(node_id: &str, meta: &VariableMeta) -> Result<TypeInfo, EngineError> {
    let mut info = TypeInfo {
        var_type: meta.var_type,
        required: meta.required,
        properties: BTreeMap::new(),
        elem: None,
    };

    match meta.var_type {
        VariableType::Object => {
            for field in &meta.schema {
                info.properties
                    .insert(field.name.clone(), type_info(node_id, field)?);
            }
        }
        VariableType::List => {
            let items = meta
                .items
                .as_ref()
                .ok_or_else(|| EngineError::MissingElementType {
                    node_id: node_id.to_owned(),
                    name: meta.name.clone(),
                })?;
            info.elem = Some(Box::new(type_info(node_id, items)?));
        }
        _ => {}
    }

    Ok(info)
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlockInput, NodeData, NodeInputs, NodeMeta, ParamValue, ParameterBinding};
    use serde_json::json;

    fn make_node(inputs: Vec<ParameterBinding>, outputs: Vec<VariableMeta>) -> NodeDefinition {
        NodeDefinition {
            id: "7".into(),
            node_type: "text_trimmer".into(),
            data: NodeData {
                node_meta: NodeMeta { title: "trim".into(), description: None },
                inputs: Some(NodeInputs {
                    input_parameters: inputs,
                    trim_params: Vec::new(),
                }),
                outputs,
            },
        }
    }

    fn empty_schema() -> NodeSchema {
        NodeSchema::new("7", "text_trimmer", "trim", serde_json::Value::Null)
    }

    #[test]
    fn literal_and_reference_inputs_are_recorded() {
        let node = make_node(
            vec![
                ParameterBinding::reference("text", VariableType::String, "100", "query"),
                ParameterBinding::literal("count", VariableType::Integer, json!(3)),
            ],
            vec![],
        );
        let mut schema = empty_schema();
        set_inputs_for_node_schema(&node, &mut schema).expect("inputs convert");

        assert_eq!(schema.input_types["text"].var_type, VariableType::String);
        assert_eq!(schema.input_types["count"].var_type, VariableType::Integer);
        assert_eq!(
            schema.input_sources,
            vec![
                FieldInfo {
                    path: "text".into(),
                    source: FieldSource::Reference {
                        from_node_key: "100".into(),
                        from_path: "query".into(),
                    },
                },
                FieldInfo {
                    path: "count".into(),
                    source: FieldSource::Literal { value: ParamValue::Number(3.0) },
                },
            ]
        );
    }

    #[test]
    fn input_without_block_is_rejected() {
        let node = make_node(vec![ParameterBinding { name: "text".into(), input: None }], vec![]);
        let err = set_inputs_for_node_schema(&node, &mut empty_schema()).unwrap_err();
        assert!(matches!(err, EngineError::MissingParameterInput { name, .. } if name == "text"));
    }

    #[test]
    fn reference_without_block_id_is_rejected() {
        let node = make_node(
            vec![ParameterBinding::reference("text", VariableType::String, "", "query")],
            vec![],
        );
        let err = set_inputs_for_node_schema(&node, &mut empty_schema()).unwrap_err();
        assert!(matches!(err, EngineError::DanglingReference { .. }));
    }

    #[test]
    fn declared_but_unbound_input_has_no_source() {
        let node = make_node(
            vec![ParameterBinding {
                name: "text".into(),
                input: Some(BlockInput { var_type: VariableType::String, value: None }),
            }],
            vec![],
        );
        let mut schema = empty_schema();
        set_inputs_for_node_schema(&node, &mut schema).expect("inputs convert");
        assert!(schema.input_types.contains_key("text"));
        assert!(schema.input_sources.is_empty());
    }

    #[test]
    fn nested_outputs_are_resolved() {
        let mut list = VariableMeta::new("lines", VariableType::List);
        list.items = Some(Box::new(VariableMeta::new("line", VariableType::String)));
        let mut obj = VariableMeta::new("meta", VariableType::Object);
        obj.schema = vec![VariableMeta::new("len", VariableType::Integer)];

        let node = make_node(vec![], vec![VariableMeta::new("output", VariableType::String), list, obj]);
        let mut schema = empty_schema();
        set_output_types_for_node_schema(&node, &mut schema).expect("outputs convert");

        assert_eq!(schema.output_types.len(), 3);
        assert_eq!(
            schema.output_types["lines"].elem.as_ref().map(|e| e.var_type),
            Some(VariableType::String)
        );
        assert_eq!(
            schema.output_types["meta"].properties["len"].var_type,
            VariableType::Integer
        );
    }

    #[test]
    fn duplicate_output_is_rejected() {
        let node = make_node(
            vec![],
            vec![
                VariableMeta::new("output", VariableType::String),
                VariableMeta::new("output", VariableType::String),
            ],
        );
        let err = set_output_types_for_node_schema(&node, &mut empty_schema()).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateField { side: "output", .. }));
    }

    #[test]
    fn list_without_items_is_rejected() {
        let node = make_node(vec![], vec![VariableMeta::new("lines", VariableType::List)]);
        let err = set_output_types_for_node_schema(&node, &mut empty_schema()).unwrap_err();
        assert!(matches!(err, EngineError::MissingElementType { name, .. } if name == "lines"));
    }
}
