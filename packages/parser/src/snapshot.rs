use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root snapshot document: the full set of variable collections and
/// variables exported from the host design document in one read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub collections: Vec<VariableCollection>,
    pub variables: Vec<Variable>,
}

/// A named group of variables sharing a set of modes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableCollection {
    pub id: String,
    pub name: String,
    pub modes: Vec<Mode>,
    pub variable_ids: Vec<String>,
}

/// A variant dimension within a collection (e.g., light/dark theme)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    pub mode_id: String,
    pub name: String,
}

/// A single design token with one raw value per mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: String,
    pub name: String,
    pub resolved_type: ResolvedType,
    pub variable_collection_id: String,
    pub values_by_mode: HashMap<String, VariableValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedType {
    #[serde(rename = "COLOR")]
    Color,
    #[serde(rename = "FLOAT")]
    Float,
    #[serde(rename = "STRING")]
    String,
    #[serde(rename = "BOOLEAN")]
    Boolean,
}

/// Raw variable value - a tagged union resolved once at ingestion.
///
/// Alias objects carry a `"type": "VARIABLE_ALIAS"` marker in the host
/// export, which keeps untagged matching unambiguous against color objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Alias(VariableAlias),
    Color(Rgba),
    Boolean(bool),
    Number(f64),
    Text(String),
}

/// Reference to another variable by identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableAlias {
    #[serde(rename = "type")]
    pub kind: AliasKind,
    pub id: String,
}

impl VariableAlias {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            kind: AliasKind::VariableAlias,
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AliasKind {
    #[serde(rename = "VARIABLE_ALIAS")]
    VariableAlias,
}

/// Color value with four floating channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}
