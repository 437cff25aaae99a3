/// Integration tests driving the evaluator from raw snapshot JSON,
/// the same shape the host application exports
use crate::*;
use tokengen_parser::parse;

#[test]
fn test_evaluate_snapshot_from_json() {
    let source = r#"{
        "collections": [
            {
                "id": "VariableCollectionId:1:1",
                "name": "Brand",
                "modes": [{ "modeId": "1:0", "name": "Light" }],
                "variableIds": ["VariableID:1:2", "VariableID:1:3", "VariableID:1:4"]
            }
        ],
        "variables": [
            {
                "id": "VariableID:1:2",
                "name": "primaryColor",
                "resolvedType": "COLOR",
                "variableCollectionId": "VariableCollectionId:1:1",
                "valuesByMode": { "1:0": { "r": 0.2, "g": 0.4, "b": 1.0, "a": 1.0 } }
            },
            {
                "id": "VariableID:1:3",
                "name": "buttonColor",
                "resolvedType": "COLOR",
                "variableCollectionId": "VariableCollectionId:1:1",
                "valuesByMode": { "1:0": { "type": "VARIABLE_ALIAS", "id": "VariableID:1:2" } }
            },
            {
                "id": "VariableID:1:4",
                "name": "spacingBase",
                "resolvedType": "FLOAT",
                "variableCollectionId": "VariableCollectionId:1:1",
                "valuesByMode": { "1:0": 16 }
            }
        ]
    }"#;

    let snapshot = parse(source).expect("Failed to parse snapshot");
    let doc = StyleEvaluator::new()
        .evaluate(&snapshot)
        .expect("Failed to evaluate snapshot");

    assert!(doc.warnings.is_empty());
    assert_eq!(
        doc.variable("VariableID:1:2").unwrap().first_value(),
        "#3366FFFF"
    );
    assert_eq!(
        doc.variable("VariableID:1:3").unwrap().first_value(),
        "var(--primary-color)"
    );
    assert_eq!(
        doc.variable("VariableID:1:4").unwrap().first_value(),
        "1.000rem"
    );
}

#[test]
fn test_evaluate_empty_snapshot() {
    let snapshot = parse(r#"{ "collections": [], "variables": [] }"#).unwrap();
    let doc = StyleEvaluator::new().evaluate(&snapshot).unwrap();

    assert_eq!(doc.collections.len(), 0);
    assert_eq!(doc.variables.len(), 0);
    assert_eq!(doc.warnings.len(), 0);
}
