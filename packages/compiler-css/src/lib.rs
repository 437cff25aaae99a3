use tokengen_evaluator::{EvalResult, StyleEvaluator, VirtualStyleDocument};
use tokengen_parser::Snapshot;

/// Compile a variable snapshot to a `:root` custom-properties stylesheet
pub fn compile_to_css(snapshot: &Snapshot) -> EvalResult<String> {
    let evaluator = StyleEvaluator::new();
    let doc = evaluator.evaluate(snapshot)?;
    Ok(serialize(&doc))
}

/// Compile with an alternate pixel base for rem conversion
pub fn compile_to_css_with_base(snapshot: &Snapshot, base_font_size: f64) -> EvalResult<String> {
    let evaluator = StyleEvaluator::with_base_font_size(base_font_size);
    let doc = evaluator.evaluate(snapshot)?;
    Ok(serialize(&doc))
}

/// Serialize an evaluated document as CSS text.
///
/// Collections emit sorted by name; within a collection, variables follow
/// the collection's own member order. Ids with no matching variable are
/// skipped.
pub fn serialize(doc: &VirtualStyleDocument) -> String {
    let mut css = String::from(":root {\n");

    for collection in doc.sorted_collections() {
        css.push_str("  /* ");
        css.push_str(&collection.name);
        css.push_str(" */\n");

        for variable_id in &collection.variable_ids {
            let Some(variable) = doc.variable(variable_id) else {
                continue;
            };
            css.push_str("  ");
            css.push_str(&variable.css_property_name);
            css.push_str(": ");
            css.push_str(variable.first_value());
            css.push_str(";\n");
        }

        css.push_str("  /*********************/\n\n");
    }

    css.push('}');
    css
}
