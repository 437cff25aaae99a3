pub mod error;
pub mod snapshot;

pub use error::{ParseError, ParseResult};
pub use snapshot::{
    AliasKind, Mode, ResolvedType, Rgba, Snapshot, Variable, VariableAlias, VariableCollection,
    VariableValue,
};

/// Parse a variable snapshot document from its JSON source
pub fn parse(source: &str) -> ParseResult<Snapshot> {
    let snapshot: Snapshot = serde_json::from_str(source)?;
    Ok(snapshot)
}
