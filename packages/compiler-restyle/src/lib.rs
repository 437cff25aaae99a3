use tokengen_evaluator::{EvalResult, StyleEvaluator, VirtualStyleDocument};
use tokengen_parser::{ResolvedType, Snapshot};

/// Compile a variable snapshot to a Restyle palette module.
///
/// Only COLOR variables make it into the palette; everything else is
/// excluded from this output entirely.
pub fn compile_to_restyle(snapshot: &Snapshot) -> EvalResult<String> {
    let evaluator = StyleEvaluator::new();
    let doc = evaluator.evaluate(snapshot)?;
    Ok(serialize(&doc))
}

/// Serialize an evaluated document as a Restyle palette export
pub fn serialize(doc: &VirtualStyleDocument) -> String {
    let mut palette = String::from("export const palette = {\n");

    for collection in doc.sorted_collections() {
        palette.push_str("  /* ");
        palette.push_str(&collection.name);
        palette.push_str(" */\n");

        for variable_id in &collection.variable_ids {
            let Some(variable) = doc.variable(variable_id) else {
                continue;
            };
            if variable.resolved_type != ResolvedType::Color {
                continue;
            }
            palette.push_str("  \"");
            palette.push_str(&variable.restyle_property_name);
            palette.push_str("\": \"");
            palette.push_str(variable.first_value());
            palette.push_str("\",\n");
        }

        palette.push_str("  /*********************/\n\n");
    }

    palette.push_str("};");
    palette
}
