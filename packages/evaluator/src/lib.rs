pub mod style_evaluator;
pub mod utils;

#[cfg(test)]
mod tests_integration;

pub use style_evaluator::{
    EvalError, EvalResult, EvalWarning, ModeValue, StyleCollection, StyleEvaluator, StyleVariable,
    VirtualStyleDocument, DEFAULT_BASE_FONT_SIZE,
};
pub use utils::{css_property_name, px_to_rem, restyle_property_name, rgba_to_hex};
