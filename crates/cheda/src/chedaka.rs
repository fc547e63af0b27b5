use std::rc::Rc;

use log::debug;
use rustc_hash::FxHashMap;

use padaccheda_kosha::Lexicon;
use padaccheda_sandhi::{SandhiError, SandhiTable};

use crate::tree::SplitTree;

/// The sandhi-reversing splitter.
///
/// At every position of the input it gathers candidate reverse rule
/// applications from the table, keeps those whose left word the lexicon
/// recognizes, and recurses on the remainder. Results are memoized per
/// remainder in the scoreboard, which persists across calls: entries are
/// pure functions of their key for a fixed table and lexicon.
pub struct Chedaka<L: Lexicon> {
    table: SandhiTable,
    lexicon: L,
    scoreboard: FxHashMap<String, Rc<Vec<SplitTree>>>,
}

impl<L: Lexicon> Chedaka<L> {
    pub fn new(table: SandhiTable, lexicon: L) -> Self {
        Chedaka {
            table,
            lexicon,
            scoreboard: FxHashMap::default(),
        }
    }

    /// Convenience constructor with the built-in rule set.
    pub fn with_classical(lexicon: L) -> Result<Self, SandhiError> {
        Ok(Self::new(SandhiTable::classical()?, lexicon))
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    /// Every hierarchical segmentation of `slp1` into lexicon words.
    ///
    /// Each boundary is licensed by the rule table; each word passes
    /// `is_word`. An unrecognizable input yields an empty list, never an
    /// error. Terminates on every input: every candidate remainder is
    /// strictly shorter than its source string.
    pub fn possible_splits(&mut self, slp1: &str) -> Rc<Vec<SplitTree>> {
        if let Some(hit) = self.scoreboard.get(slp1) {
            debug!("scoreboard hit for '{slp1}'");
            return Rc::clone(hit);
        }
        debug!("splitting '{slp1}'");

        let mut splits = Vec::new();
        for i in 0..slp1.len() {
            for candidate in self.table.candidates_at(slp1, i) {
                debug!(
                    "  boundary {i}: '{}' + '{}' [{}]",
                    candidate.left,
                    candidate.right.as_deref().unwrap_or(""),
                    candidate.citation.unwrap_or("no sandhi"),
                );
                if !self.lexicon.is_word(&candidate.left) {
                    continue;
                }
                match candidate.right {
                    Some(rest) => {
                        let sub = self.possible_splits(&rest);
                        if !sub.is_empty() {
                            splits.push(SplitTree {
                                word: candidate.left,
                                rest: Some(sub),
                            });
                        }
                    }
                    None => splits.push(SplitTree {
                        word: candidate.left,
                        rest: None,
                    }),
                }
            }
        }

        let splits = Rc::new(splits);
        self.scoreboard.insert(slp1.to_string(), Rc::clone(&splits));
        splits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::flatten;
    use padaccheda_kosha::Analysis;

    /// A bare word-set oracle for targeted splitting tests.
    struct WordSet(&'static [&'static str]);

    impl Lexicon for WordSet {
        fn is_word(&self, slp1: &str) -> bool {
            self.0.contains(&slp1)
        }

        fn analyse(&self, _slp1: &str) -> Option<Vec<Analysis>> {
            None
        }
    }

    fn flat(chedaka: &mut Chedaka<WordSet>, input: &str) -> Vec<Vec<String>> {
        let trees = chedaka.possible_splits(input);
        flatten(&trees)
    }

    fn seq(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_anusvara_boundary() {
        let mut chedaka =
            Chedaka::with_classical(WordSet(&["kim", "cit"])).unwrap();
        assert_eq!(flat(&mut chedaka, "kiMcit"), vec![seq(&["kim", "cit"])]);
    }

    #[test]
    fn test_whole_word_requires_final_license() {
        let mut chedaka = Chedaka::with_classical(WordSet(&["rAmaH"])).unwrap();
        assert_eq!(flat(&mut chedaka, "rAmaH"), vec![seq(&["rAmaH"])]);
    }

    #[test]
    fn test_unrecognized_input_is_empty_not_error() {
        let mut chedaka = Chedaka::with_classical(WordSet(&["iti"])).unwrap();
        assert!(flat(&mut chedaka, "kavi").is_empty());
    }

    #[test]
    fn test_scoreboard_is_reused_across_calls() {
        let mut chedaka =
            Chedaka::with_classical(WordSet(&["tat", "tvam", "asi"])).unwrap();
        // Warm the cache with a suffix, then split the longer form.
        let suffix = chedaka.possible_splits("asi");
        assert_eq!(suffix.len(), 1);
        let full = flat(&mut chedaka, "tattvamasi");
        assert_eq!(full, vec![seq(&["tat", "tvam", "asi"])]);
    }

    #[test]
    fn test_subtrees_are_shared() {
        let mut chedaka =
            Chedaka::with_classical(WordSet(&["tat", "tattvam", "tvam", "asi"])).unwrap();
        let trees = chedaka.possible_splits("tattvamasi");
        // Both alternatives end in the memoized "asi" subtree.
        let tat = trees.iter().find(|t| t.word == "tat").unwrap();
        let tattvam = trees.iter().find(|t| t.word == "tattvam").unwrap();
        let tvam = tat.rest.as_ref().unwrap().first().unwrap();
        assert_eq!(tvam.word, "tvam");
        let via_tvam = tvam.rest.as_ref().unwrap();
        let direct = tattvam.rest.as_ref().unwrap();
        assert!(Rc::ptr_eq(via_tvam, direct));
    }
}
