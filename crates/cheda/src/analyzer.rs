use rustc_hash::FxHashMap;

use padaccheda_kosha::{Analysis, Lexicon, TagSet};
use padaccheda_lipi::Pada;
use padaccheda_sandhi::{SandhiError, SandhiTable};

use crate::chedaka::Chedaka;
use crate::tree::{flatten, sort_by_longest_segment};

/// Session facade over the splitter and the lexical oracle.
///
/// Owns one `Chedaka` plus a cache of oracle analyses keyed on SLP1 surface
/// forms. Both caches live as long as the analyzer and are never invalidated:
/// for a fixed rule table and lexicon every entry is permanent.
pub struct Analyzer<L: Lexicon> {
    chedaka: Chedaka<L>,
    tag_cache: FxHashMap<String, Option<Vec<Analysis>>>,
}

impl<L: Lexicon> Analyzer<L> {
    pub fn new(table: SandhiTable, lexicon: L) -> Self {
        Analyzer {
            chedaka: Chedaka::new(table, lexicon),
            tag_cache: FxHashMap::default(),
        }
    }

    /// Convenience constructor with the built-in rule set.
    pub fn with_classical(lexicon: L) -> Result<Self, SandhiError> {
        Ok(Self::new(SandhiTable::classical()?, lexicon))
    }

    /// All linear segmentations of `pada`, optionally sorted so sequences
    /// with the longest single segment come first.
    pub fn splits(&mut self, pada: &Pada, sort: bool) -> Vec<Vec<String>> {
        let trees = self.chedaka.possible_splits(pada.slp1());
        let mut flat = flatten(&trees);
        if sort {
            sort_by_longest_segment(&mut flat);
        }
        flat
    }

    /// The oracle's readings for an already-segmented surface form, or
    /// `None` when the form is unknown. Results, including misses, are
    /// cached.
    pub fn tags_of(&mut self, pada: &Pada) -> Option<Vec<Analysis>> {
        let slp1 = pada.slp1();
        if let Some(cached) = self.tag_cache.get(slp1) {
            return cached.clone();
        }
        let result = self.chedaka.lexicon().analyse(slp1);
        self.tag_cache.insert(slp1.to_string(), result.clone());
        result
    }

    /// The readings of `pada` whose lemma equals `lemma` (compared in SLP1)
    /// and whose tags include all of `tags`. At least one filter must be
    /// supplied. An empty selection is `None`, like an unknown form.
    pub fn word_matches(
        &mut self,
        pada: &Pada,
        lemma: Option<&Pada>,
        tags: Option<&TagSet>,
    ) -> Option<Vec<Analysis>> {
        debug_assert!(
            lemma.is_some() || tags.is_some(),
            "word_matches needs a lemma or a tag set to filter by"
        );
        let readings = self.tags_of(pada)?;
        let selected: Vec<Analysis> = readings
            .into_iter()
            .filter(|reading| {
                lemma.is_none_or(|l| reading.lemma == l.slp1())
                    && tags.is_none_or(|t| t.is_subset(&reading.tags))
            })
            .collect();
        if selected.is_empty() { None } else { Some(selected) }
    }
}
