use crate::utils::{css_property_name, px_to_rem, restyle_property_name, rgba_to_hex};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tokengen_parser::{
    ResolvedType, Snapshot, Variable, VariableAlias, VariableCollection, VariableValue,
};
use tracing::{debug, error, info, instrument, warn};

pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("Style evaluation error: {message}")]
    EvaluationError { message: String },
}

/// Default pixel base for rem conversion
pub const DEFAULT_BASE_FONT_SIZE: f64 = 16.0;

/// Non-fatal condition detected while evaluating a snapshot.
///
/// Warnings degrade the output, they never abort it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EvalWarning {
    /// Collection defines more than one mode; only the first mode's value
    /// reaches output
    MultipleModes { collection: String, modes: usize },

    /// Variable points at a collection id missing from the snapshot
    UnknownCollection {
        variable: String,
        collection_id: String,
    },
}

impl fmt::Display for EvalWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalWarning::MultipleModes { collection, modes } => write!(
                f,
                "Collection '{}' has {} modes; multiple modes are not supported yet, only the first mode is emitted",
                collection, modes
            ),
            EvalWarning::UnknownCollection {
                variable,
                collection_id,
            } => write!(
                f,
                "Variable '{}' references unknown collection '{}'",
                variable, collection_id
            ),
        }
    }
}

/// One resolved value string for one mode of a variable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeValue {
    pub mode: String,
    pub value: String,
}

/// A variable paired with its sanitized output names and resolved values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleVariable {
    pub id: String,
    pub name: String,
    pub resolved_type: ResolvedType,
    pub css_property_name: String,
    pub restyle_property_name: String,
    pub values: Vec<ModeValue>,
}

impl StyleVariable {
    /// Value emitted to output: the first mode's resolved string, or empty
    /// when no raw value was present at all
    pub fn first_value(&self) -> &str {
        self.values.first().map(|v| v.value.as_str()).unwrap_or("")
    }
}

/// A collection reduced to what serialization needs: name for ordering,
/// member ids for traversal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleCollection {
    pub id: String,
    pub name: String,
    pub variable_ids: Vec<String>,
}

/// Evaluated snapshot, ready for serialization to any target format
#[derive(Debug, Clone, Serialize)]
pub struct VirtualStyleDocument {
    /// Collections in source order
    pub collections: Vec<StyleCollection>,
    /// Variables keyed by identifier
    pub variables: HashMap<String, StyleVariable>,
    pub warnings: Vec<EvalWarning>,
}

impl VirtualStyleDocument {
    /// Collections sorted lexicographically by name, the stable emission
    /// order shared by every serializer
    pub fn sorted_collections(&self) -> Vec<&StyleCollection> {
        let mut sorted: Vec<&StyleCollection> = self.collections.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    pub fn variable(&self, id: &str) -> Option<&StyleVariable> {
        self.variables.get(id)
    }
}

/// Style evaluator - resolves raw variable values into output strings
pub struct StyleEvaluator {
    base_font_size: f64,
}

impl StyleEvaluator {
    pub fn new() -> Self {
        Self::with_base_font_size(DEFAULT_BASE_FONT_SIZE)
    }

    /// Use an alternate pixel base for rem conversion
    pub fn with_base_font_size(base_font_size: f64) -> Self {
        Self { base_font_size }
    }

    pub fn base_font_size(&self) -> f64 {
        self.base_font_size
    }

    /// Evaluate a snapshot into a [`VirtualStyleDocument`]
    #[instrument(skip(self, snapshot), fields(collections = snapshot.collections.len(), variables = snapshot.variables.len()))]
    pub fn evaluate(&self, snapshot: &Snapshot) -> EvalResult<VirtualStyleDocument> {
        info!("Starting style evaluation");

        let collections_by_id: HashMap<&str, &VariableCollection> = snapshot
            .collections
            .iter()
            .map(|collection| (collection.id.as_str(), collection))
            .collect();
        let variables_by_id: HashMap<&str, &Variable> = snapshot
            .variables
            .iter()
            .map(|variable| (variable.id.as_str(), variable))
            .collect();

        let mut warnings = Vec::new();
        for collection in &snapshot.collections {
            if collection.modes.len() > 1 {
                warn!(
                    collection = %collection.name,
                    modes = collection.modes.len(),
                    "Multiple modes not supported yet"
                );
                warnings.push(EvalWarning::MultipleModes {
                    collection: collection.name.clone(),
                    modes: collection.modes.len(),
                });
            }
        }

        let mut variables = HashMap::new();
        for variable in &snapshot.variables {
            debug!(variable = %variable.name, "Processing variable");
            let style_variable =
                self.evaluate_variable(variable, &collections_by_id, &variables_by_id, &mut warnings);
            variables.insert(style_variable.id.clone(), style_variable);
        }

        let collections = snapshot
            .collections
            .iter()
            .map(|collection| StyleCollection {
                id: collection.id.clone(),
                name: collection.name.clone(),
                variable_ids: collection.variable_ids.clone(),
            })
            .collect();

        info!(variables = variables.len(), warnings = warnings.len(), "Style evaluation complete");
        Ok(VirtualStyleDocument {
            collections,
            variables,
            warnings,
        })
    }

    fn evaluate_variable(
        &self,
        variable: &Variable,
        collections_by_id: &HashMap<&str, &VariableCollection>,
        variables_by_id: &HashMap<&str, &Variable>,
        warnings: &mut Vec<EvalWarning>,
    ) -> StyleVariable {
        let mut values = Vec::new();

        match collections_by_id.get(variable.variable_collection_id.as_str()) {
            Some(collection) => {
                // Walk the collection's mode order so "first mode" is
                // deterministic; only modes with a raw value produce a pair
                for mode in &collection.modes {
                    let Some(raw) = variable.values_by_mode.get(&mode.mode_id) else {
                        debug!(variable = %variable.name, mode = %mode.name, "No raw value for mode");
                        continue;
                    };
                    values.push(ModeValue {
                        mode: mode.name.clone(),
                        value: self.resolve_value(raw, variables_by_id),
                    });
                }
            }
            None => {
                warn!(
                    variable = %variable.name,
                    collection_id = %variable.variable_collection_id,
                    "Variable references unknown collection"
                );
                warnings.push(EvalWarning::UnknownCollection {
                    variable: variable.name.clone(),
                    collection_id: variable.variable_collection_id.clone(),
                });
                // No collection means no mode order to follow; sort by mode
                // id so the degraded output is stable across runs
                let mut raw_values: Vec<(&String, &VariableValue)> =
                    variable.values_by_mode.iter().collect();
                raw_values.sort_by(|a, b| a.0.cmp(b.0));
                for (_, raw) in raw_values {
                    values.push(ModeValue {
                        mode: String::new(),
                        value: self.resolve_value(raw, variables_by_id),
                    });
                }
            }
        }

        StyleVariable {
            id: variable.id.clone(),
            name: variable.name.clone(),
            resolved_type: variable.resolved_type,
            css_property_name: css_property_name(&variable.name),
            restyle_property_name: restyle_property_name(&variable.name),
            values,
        }
    }

    /// Resolve one raw value to its output string. Every branch produces a
    /// string; failures degrade to empty, they never propagate.
    fn resolve_value(
        &self,
        value: &VariableValue,
        variables_by_id: &HashMap<&str, &Variable>,
    ) -> String {
        match value {
            VariableValue::Alias(alias) => self.resolve_alias(alias, variables_by_id),
            VariableValue::Color(color) => rgba_to_hex(color),
            VariableValue::Number(number) => px_to_rem(*number, self.base_font_size),
            VariableValue::Text(text) => format!("'{}'", text),
            VariableValue::Boolean(flag) => format!("'{}'", flag),
        }
    }

    /// Emit a `var()` back-reference to the alias target. The indirection is
    /// always kept for the CSS engine to resolve, never inlined.
    fn resolve_alias(
        &self,
        alias: &VariableAlias,
        variables_by_id: &HashMap<&str, &Variable>,
    ) -> String {
        match variables_by_id.get(alias.id.as_str()) {
            Some(target) => format!("var({})", css_property_name(&target.name)),
            None => {
                error!(target = %alias.id, "Alias target not found");
                String::new()
            }
        }
    }
}

impl Default for StyleEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
