use std::collections::BTreeSet;
use std::fmt;

use fst::Set;

use crate::builder::build_fst_set;
use crate::{KoshaError, Lexicon};

/// Static word list (one SLP1 form per line, byte-sorted).
static WORDS_DATA: &str = include_str!("../../../data/words.txt");

/// Static analyses (tab-separated: form, lemma, comma-joined tag codes).
static ANALYSES_DATA: &str = include_str!("../../../data/analyses.tsv");

/// A morphological tag code, e.g. `na-nom`, `sg`, `v-cj-prim`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn new(code: impl Into<String>) -> Self {
        Tag(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(code: &str) -> Self {
        Tag::new(code)
    }
}

/// A set of tag codes attached to one reading.
pub type TagSet = BTreeSet<Tag>;

/// One morphological reading of a surface form: the lemma plus its tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub lemma: String,
    pub tags: TagSet,
}

impl Analysis {
    pub fn new<'a>(lemma: &str, tags: impl IntoIterator<Item = &'a str>) -> Self {
        Analysis {
            lemma: lemma.to_string(),
            tags: tags.into_iter().map(Tag::from).collect(),
        }
    }
}

/// One row of the analyses table.
#[derive(Debug, Clone)]
struct AnalysisRow {
    form: String,
    analysis: Analysis,
}

/// FST-based Sanskrit lexicon.
///
/// An `fst::Set` answers `is_word` membership checks; a form-sorted row list
/// answers `analyse` lookups by binary search. Both are built from plain text
/// data: a byte-sorted word list and a TSV of readings.
pub struct Kosha {
    fst: Set<Vec<u8>>,
    rows: Vec<AnalysisRow>,
}

impl Kosha {
    /// Build from the bundled data files.
    pub fn new() -> Result<Self, KoshaError> {
        Self::from_data(WORDS_DATA, ANALYSES_DATA)
    }

    /// Build from caller-supplied data in the bundled files' format.
    ///
    /// `words_data` is one SLP1 form per line, strictly byte-sorted (the FST
    /// builder requires sorted keys). `analyses_data` rows are
    /// `form \t lemma \t code,code,...`; a form may repeat, one row per
    /// reading. Malformed input is rejected here, never at lookup time.
    pub fn from_data(words_data: &str, analyses_data: &str) -> Result<Self, KoshaError> {
        let words: Vec<&str> = words_data.lines().filter(|l| !l.is_empty()).collect();
        if words.is_empty() {
            return Err(KoshaError::EmptyLexicon);
        }
        for pair in words.windows(2) {
            if pair[0].as_bytes() >= pair[1].as_bytes() {
                return Err(KoshaError::UnsortedWords(pair[1].to_string()));
            }
        }
        for word in &words {
            padaccheda_varna::validate(word).map_err(|source| KoshaError::NonSlp1Word {
                word: word.to_string(),
                source,
            })?;
        }
        let fst_bytes = build_fst_set(&words)?;
        let fst = Set::new(fst_bytes).map_err(|e| KoshaError::FstBuild(e.to_string()))?;

        let mut rows = Vec::new();
        for line in analyses_data.lines().filter(|l| !l.is_empty()) {
            let mut parts = line.split('\t');
            let (Some(form), Some(lemma), Some(codes)) =
                (parts.next(), parts.next(), parts.next())
            else {
                return Err(KoshaError::MalformedRow(line.to_string()));
            };
            if form.is_empty() || lemma.is_empty() || codes.is_empty() || parts.next().is_some() {
                return Err(KoshaError::MalformedRow(line.to_string()));
            }
            rows.push(AnalysisRow {
                form: form.to_string(),
                analysis: Analysis::new(lemma, codes.split(',')),
            });
        }
        rows.sort_by(|a, b| a.form.as_bytes().cmp(b.form.as_bytes()));

        Ok(Kosha { fst, rows })
    }

    /// Number of word forms in the FST.
    pub fn word_count(&self) -> usize {
        self.fst.len()
    }

    /// Number of analysis rows.
    pub fn analysis_count(&self) -> usize {
        self.rows.len()
    }

    /// All rows for `form`, as a contiguous slice of the sorted row list.
    fn rows_for(&self, form: &str) -> &[AnalysisRow] {
        let start = self
            .rows
            .partition_point(|row| row.form.as_bytes() < form.as_bytes());
        let end = self
            .rows
            .partition_point(|row| row.form.as_bytes() <= form.as_bytes());
        &self.rows[start..end]
    }
}

impl Lexicon for Kosha {
    fn is_word(&self, slp1: &str) -> bool {
        self.fst.contains(slp1)
    }

    fn analyse(&self, slp1: &str) -> Option<Vec<Analysis>> {
        let rows = self.rows_for(slp1);
        if rows.is_empty() {
            return None;
        }
        Some(rows.iter().map(|row| row.analysis.clone()).collect())
    }
}
