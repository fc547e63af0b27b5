mod builder;
mod kosha;
pub mod tags;

pub use kosha::{Analysis, Kosha, Tag, TagSet};

/// Error type for kosha operations.
#[derive(Debug, thiserror::Error)]
pub enum KoshaError {
    #[error("FST build error: {0}")]
    FstBuild(String),

    #[error("word list is not strictly byte-sorted near '{0}'")]
    UnsortedWords(String),

    #[error("word '{word}' is not SLP1: {source}")]
    NonSlp1Word {
        word: String,
        source: padaccheda_varna::VarnaError,
    },

    #[error("malformed analysis row: '{0}'")]
    MalformedRow(String),

    #[error("empty lexicon")]
    EmptyLexicon,
}

/// The lexical oracle consulted by the splitter and the analysis facade.
///
/// `is_word` is the fast membership predicate used to prune split candidates;
/// `analyse` returns every morphological reading of a surface form, or `None`
/// when the form is unknown. Both take canonical SLP1 text. Implementations
/// must be deterministic and side-effect free: results are cached by callers.
pub trait Lexicon {
    fn is_word(&self, slp1: &str) -> bool;

    fn analyse(&self, slp1: &str) -> Option<Vec<Analysis>>;
}
