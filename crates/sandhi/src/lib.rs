mod rules;
mod table;

pub use rules::CLASSICAL_RULES;
pub use table::{RuleSpec, SandhiTable, Split};

/// Error type for sandhi table construction.
///
/// All of these are rejected when a table is built; rule application itself
/// never fails.
#[derive(Debug, thiserror::Error)]
pub enum SandhiError {
    #[error("malformed expansion '{0}': expected exactly one '_' separator")]
    MalformedExpansion(String),

    #[error("expansion fragment '{fragment}' is not SLP1: {source}")]
    NonSlp1Fragment {
        fragment: String,
        source: padaccheda_varna::VarnaError,
    },

    #[error("invalid context pattern '{pattern}': {detail}")]
    InvalidContext { pattern: String, detail: String },

    #[error("conflicting rules for trigger '{0}'")]
    ConflictingTrigger(char),
}
