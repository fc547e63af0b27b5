use regex::Regex;
use rustc_hash::FxHashMap;

use crate::SandhiError;
use crate::rules::CLASSICAL_RULES;

/// Declarative source form of one reverse sandhi rule.
///
/// Expansions are `left_right` strings: the underlying tail of the left word
/// and head of the right word that jointly surface as the trigger character.
/// Either side may be empty.
#[derive(Debug, Clone, Copy)]
pub enum RuleSpec {
    /// Expansions licensed at every occurrence of the trigger.
    Plain {
        trigger: char,
        expansions: &'static [&'static str],
        citation: &'static str,
    },
    /// Expansions licensed only where the neighbor contexts match. Context
    /// patterns are single-character classes; a right context of `$` matches
    /// only at the end of the input.
    Context {
        left: Option<&'static str>,
        trigger: char,
        right: Option<&'static str>,
        expansions: &'static [&'static str],
        citation: &'static str,
    },
    /// No boundary may be proposed at the trigger unless some `Context` rule
    /// for it matches.
    Forbidden { trigger: char },
}

/// A parsed expansion: what the left word ends with and the right word
/// starts with underneath the surface character.
#[derive(Debug, Clone)]
struct Expansion {
    left: String,
    right: String,
}

fn parse_expansion(raw: &str) -> Result<Expansion, SandhiError> {
    let mut parts = raw.split('_');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(left), Some(right), None) => {
            for fragment in [left, right] {
                if !fragment.is_empty() {
                    padaccheda_varna::validate(fragment).map_err(|source| {
                        SandhiError::NonSlp1Fragment {
                            fragment: fragment.to_string(),
                            source,
                        }
                    })?;
                }
            }
            Ok(Expansion {
                left: left.to_string(),
                right: right.to_string(),
            })
        }
        _ => Err(SandhiError::MalformedExpansion(raw.to_string())),
    }
}

fn compile_class(pattern: &str) -> Result<Regex, SandhiError> {
    Regex::new(pattern).map_err(|e| SandhiError::InvalidContext {
        pattern: pattern.to_string(),
        detail: e.to_string(),
    })
}

/// Right-context condition of a conditional rule.
enum RightContext {
    /// Matches the first character of the remainder.
    Class(Regex),
    /// Matches only when nothing remains.
    End,
}

struct Conditional {
    left: Option<Regex>,
    right: Option<RightContext>,
    expansions: Vec<Expansion>,
    citation: &'static str,
}

/// What a trigger character licenses on its own, ignoring context.
enum PlainEntry {
    Expansions {
        expansions: Vec<Expansion>,
        citation: &'static str,
    },
    Forbidden,
}

#[derive(Default)]
struct CharRules {
    plain: Option<PlainEntry>,
    conditional: Vec<Conditional>,
}

/// One candidate reverse application: the left word, the remainder (None when
/// the left word exhausts the input), and the citation of the licensing rule
/// (None for the trivial no-sandhi boundary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub left: String,
    pub right: Option<String>,
    pub citation: Option<&'static str>,
}

/// The compiled rule table, indexed by trigger character.
pub struct SandhiTable {
    by_trigger: FxHashMap<char, CharRules>,
}

impl SandhiTable {
    /// Compile a rule set. Malformed expansions, bad context patterns, and
    /// conflicting per-trigger entries are all rejected here; rule
    /// application never fails.
    pub fn new(specs: &[RuleSpec]) -> Result<Self, SandhiError> {
        let mut by_trigger: FxHashMap<char, CharRules> = FxHashMap::default();
        for spec in specs {
            match *spec {
                RuleSpec::Plain {
                    trigger,
                    expansions,
                    citation,
                } => {
                    let entry = by_trigger.entry(trigger).or_default();
                    if entry.plain.is_some() {
                        return Err(SandhiError::ConflictingTrigger(trigger));
                    }
                    let expansions = expansions
                        .iter()
                        .map(|raw| parse_expansion(raw))
                        .collect::<Result<Vec<_>, _>>()?;
                    entry.plain = Some(PlainEntry::Expansions {
                        expansions,
                        citation,
                    });
                }
                RuleSpec::Forbidden { trigger } => {
                    let entry = by_trigger.entry(trigger).or_default();
                    if entry.plain.is_some() {
                        return Err(SandhiError::ConflictingTrigger(trigger));
                    }
                    entry.plain = Some(PlainEntry::Forbidden);
                }
                RuleSpec::Context {
                    left,
                    trigger,
                    right,
                    expansions,
                    citation,
                } => {
                    let left = left.map(compile_class).transpose()?;
                    let right = match right {
                        None => None,
                        Some("$") => Some(RightContext::End),
                        Some(pattern) => Some(RightContext::Class(compile_class(pattern)?)),
                    };
                    let expansions = expansions
                        .iter()
                        .map(|raw| parse_expansion(raw))
                        .collect::<Result<Vec<_>, _>>()?;
                    by_trigger.entry(trigger).or_default().conditional.push(Conditional {
                        left,
                        right,
                        expansions,
                        citation,
                    });
                }
            }
        }
        Ok(SandhiTable { by_trigger })
    }

    /// The built-in classical rule set.
    pub fn classical() -> Result<Self, SandhiError> {
        Self::new(CLASSICAL_RULES)
    }

    /// All candidate reverse applications at byte position `i` of the SLP1
    /// string `s`: which left word / remainder pairs could surface as `s`
    /// with a word boundary right after position `i`.
    ///
    /// Plain candidates come first, then conditional ones in rule order.
    /// Every returned remainder is strictly shorter than `s`, so recursion
    /// over remainders always terminates; this also discards the degenerate
    /// candidates whose remainder equals the input.
    pub fn candidates_at(&self, s: &str, i: usize) -> Vec<Split> {
        debug_assert!(s.is_ascii());
        let c = s.as_bytes()[i] as char;
        let left_part = &s[..=i];
        let rest = &s[i + 1..];
        let mut out = Vec::new();

        let entry = self.by_trigger.get(&c);
        match entry.and_then(|e| e.plain.as_ref()) {
            // Not in the table: the boundary lies exactly after position i.
            None => out.push(Split {
                left: left_part.to_string(),
                right: (!rest.is_empty()).then(|| rest.to_string()),
                citation: None,
            }),
            Some(PlainEntry::Forbidden) => {}
            Some(PlainEntry::Expansions {
                expansions,
                citation,
            }) => {
                for exp in expansions {
                    if rest.is_empty() {
                        // Nothing to prepend the right fragment to; emit the
                        // left word alone, deduplicating.
                        let left = replace_last(left_part, &exp.left);
                        if !out.iter().any(|x: &Split| x.left == left && x.right.is_none()) {
                            out.push(Split {
                                left,
                                right: None,
                                citation: Some(citation),
                            });
                        }
                    } else {
                        let right = format!("{}{}", exp.right, rest);
                        if right.len() < s.len() {
                            out.push(Split {
                                left: replace_last(left_part, &exp.left),
                                right: Some(right),
                                citation: Some(citation),
                            });
                        }
                    }
                }
            }
        }

        for rule in entry.map(|e| e.conditional.as_slice()).unwrap_or_default() {
            let left_ok = match &rule.left {
                None => true,
                Some(re) => i >= 1 && re.is_match(&s[i - 1..i]),
            };
            let right_ok = match &rule.right {
                None => true,
                Some(RightContext::Class(re)) => !rest.is_empty() && re.is_match(&rest[..1]),
                Some(RightContext::End) => rest.is_empty(),
            };
            if !(left_ok && right_ok) {
                continue;
            }
            for exp in &rule.expansions {
                let right = format!("{}{}", exp.right, rest);
                if right.len() < s.len() {
                    out.push(Split {
                        left: replace_last(left_part, &exp.left),
                        right: (!right.is_empty()).then_some(right),
                        citation: Some(rule.citation),
                    });
                }
            }
        }

        out
    }
}

/// The left part with its final character replaced by an expansion fragment.
fn replace_last(left: &str, fragment: &str) -> String {
    let mut out = String::with_capacity(left.len() - 1 + fragment.len());
    out.push_str(&left[..left.len() - 1]);
    out.push_str(fragment);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(splits: &[Split]) -> Vec<(String, Option<String>)> {
        splits.iter().map(|s| (s.left.clone(), s.right.clone())).collect()
    }

    #[test]
    fn test_malformed_expansion_rejected() {
        let spec = [RuleSpec::Plain {
            trigger: 'd',
            expansions: &["td"],
            citation: "",
        }];
        assert!(matches!(
            SandhiTable::new(&spec),
            Err(SandhiError::MalformedExpansion(_))
        ));

        let spec = [RuleSpec::Plain {
            trigger: 'd',
            expansions: &["t__d"],
            citation: "",
        }];
        assert!(matches!(
            SandhiTable::new(&spec),
            Err(SandhiError::MalformedExpansion(_))
        ));
    }

    #[test]
    fn test_invalid_context_rejected() {
        let spec = [RuleSpec::Context {
            left: None,
            trigger: 'A',
            right: Some("[unclosed"),
            expansions: &["a_a"],
            citation: "",
        }];
        assert!(matches!(
            SandhiTable::new(&spec),
            Err(SandhiError::InvalidContext { .. })
        ));
    }

    #[test]
    fn test_conflicting_trigger_rejected() {
        let spec = [
            RuleSpec::Plain {
                trigger: 'd',
                expansions: &["t_"],
                citation: "",
            },
            RuleSpec::Forbidden { trigger: 'd' },
        ];
        assert!(matches!(
            SandhiTable::new(&spec),
            Err(SandhiError::ConflictingTrigger('d'))
        ));
    }

    #[test]
    fn test_classical_compiles() {
        assert!(SandhiTable::classical().is_ok());
    }

    #[test]
    fn test_trivial_boundary_for_uncovered_char() {
        let table = SandhiTable::classical().unwrap();
        // 't' carries no rules: the only candidate is the as-is split.
        let splits = table.candidates_at("tattvamasi", 2);
        assert_eq!(
            pairs(&splits),
            vec![("tat".to_string(), Some("tvamasi".to_string()))]
        );
        assert_eq!(splits[0].citation, None);
    }

    #[test]
    fn test_long_vowel_reversals_in_context() {
        let table = SandhiTable::classical().unwrap();
        let splits = table.candidates_at("gurUpadeSaH", 3);
        let got = pairs(&splits);
        // Trivial split first, then the four savarna-dirgha expansions.
        assert_eq!(got[0], ("gurU".to_string(), Some("padeSaH".to_string())));
        for expected in ["u_u", "u_U", "U_u", "U_U"] {
            let (l, r) = expected.split_once('_').unwrap();
            let left = format!("gur{l}");
            let right = format!("{r}padeSaH");
            assert!(
                got.contains(&(left.clone(), Some(right.clone()))),
                "missing candidate {left} / {right}"
            );
        }
    }

    #[test]
    fn test_vowel_merger_blocked_before_vowel_context() {
        let table = SandhiTable::classical().unwrap();
        // 'A' followed by 'i' fails the [^ieouEOfFxX] right context, so no
        // savarna-dirgha candidates appear; the As_ rule (whose context only
        // excludes voiceless sounds) still fires.
        let splits = table.candidates_at("rAiH", 1);
        assert_eq!(
            pairs(&splits),
            vec![
                ("rA".to_string(), Some("iH".to_string())),
                ("rAs".to_string(), Some("iH".to_string())),
            ]
        );
    }

    #[test]
    fn test_forbidden_sibilant_yields_nothing() {
        let table = SandhiTable::classical().unwrap();
        // 's' before 'y' matches no conditional context and is otherwise
        // forbidden.
        assert!(table.candidates_at("asyati", 1).is_empty());
    }

    #[test]
    fn test_sibilant_licensed_before_voiceless_stop() {
        let table = SandhiTable::classical().unwrap();
        let splits = table.candidates_at("asti", 1);
        let got = pairs(&splits);
        assert!(got.contains(&("as".to_string(), Some("ti".to_string()))));
        assert!(got.contains(&("ar".to_string(), Some("ti".to_string()))));
        assert_eq!(got.len(), 2);
    }

    #[test]
    fn test_final_visarga_candidates() {
        let table = SandhiTable::classical().unwrap();
        let splits = table.candidates_at("rAmaH", 4);
        assert_eq!(
            pairs(&splits),
            vec![
                ("rAmaH".to_string(), None),
                ("rAmas".to_string(), None),
                ("rAmar".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_left_context_requires_preceding_char() {
        let table = SandhiTable::classical().unwrap();
        // 'r' at position 0 cannot satisfy its left contexts; only the
        // trivial boundary remains.
        let splits = table.candidates_at("rAmaH", 0);
        assert_eq!(pairs(&splits), vec![("r".to_string(), Some("AmaH".to_string()))]);

        // After 'a' and before a consonant, 'r' reverses to vocalic r.
        let splits = table.candidates_at("maharzi", 4);
        let got = pairs(&splits);
        assert!(got.contains(&("mahaf".to_string(), Some("zi".to_string()))));
    }

    #[test]
    fn test_anusvara_expansions() {
        let table = SandhiTable::classical().unwrap();
        let splits = table.candidates_at("kiMcit", 2);
        assert_eq!(
            pairs(&splits),
            vec![
                ("kim".to_string(), Some("cit".to_string())),
                ("kiM".to_string(), Some("cit".to_string())),
            ]
        );
    }

    #[test]
    fn test_remainders_always_shorten() {
        let table = SandhiTable::classical().unwrap();
        for s in ["AtmA", "gurUpadeSaH", "tattvamasi", "sUryodayaH", "rAmaH"] {
            for i in 0..s.len() {
                for split in table.candidates_at(s, i) {
                    if let Some(right) = &split.right {
                        assert!(
                            right.len() < s.len(),
                            "candidate remainder '{right}' does not shorten '{s}'"
                        );
                    }
                }
            }
        }
    }
}
