use crate::scheme::{LipiError, Scheme, detect_scheme};
use crate::to_slp1;

/// An immutable Sanskrit text carrier: the raw input, its source scheme, and
/// the canonical SLP1 form computed once at construction.
///
/// Everything downstream (splitting, lexicon lookup) consumes only the SLP1
/// form; the raw text is kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pada {
    raw: String,
    scheme: Scheme,
    slp1: String,
}

impl Pada {
    /// Build from text in a known scheme.
    pub fn new(raw: &str, scheme: Scheme) -> Result<Self, LipiError> {
        let slp1 = to_slp1(raw, scheme)?;
        Ok(Pada {
            raw: raw.to_string(),
            scheme,
            slp1,
        })
    }

    /// Build from text of unknown scheme, auto-detecting it.
    pub fn detect(raw: &str) -> Result<Self, LipiError> {
        Self::new(raw, detect_scheme(raw))
    }

    /// Build directly from SLP1 text.
    pub fn from_slp1(raw: &str) -> Result<Self, LipiError> {
        Self::new(raw, Scheme::Slp1)
    }

    /// The original input text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The scheme the input arrived in.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// The canonical SLP1 form.
    pub fn slp1(&self) -> &str {
        &self.slp1
    }
}
