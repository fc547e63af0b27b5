use std::str::FromStr;

/// Transliteration schemes accepted as input.
///
/// SLP1 is the canonical internal form; the other schemes exist only on the
/// way in. All Latin schemes here are alphabets; Devanagari is an abugida
/// and gets inherent-vowel handling during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Devanagari Unicode script.
    Devanagari,
    /// International Alphabet of Sanskrit Transliteration.
    Iast,
    /// Harvard-Kyoto ASCII transliteration.
    HarvardKyoto,
    /// Sanskrit Library Phonetic Basic: one ASCII byte per phoneme.
    Slp1,
}

/// Error type for transliteration operations.
#[derive(Debug, thiserror::Error)]
pub enum LipiError {
    #[error("unknown scheme name '{0}' (supported: devanagari, iast, hk, slp1)")]
    UnknownScheme(String),

    #[error("unmappable character '{c}' in scheme {scheme:?}")]
    UnmappableChar { c: char, scheme: Scheme },
}

impl FromStr for Scheme {
    type Err = LipiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "devanagari" | "deva" => Ok(Scheme::Devanagari),
            "iast" => Ok(Scheme::Iast),
            "hk" | "harvard-kyoto" => Ok(Scheme::HarvardKyoto),
            "slp1" => Ok(Scheme::Slp1),
            _ => Err(LipiError::UnknownScheme(s.to_string())),
        }
    }
}

/// Guess the scheme of the input text.
///
/// Devanagari codepoints win outright; IAST is recognized by its combining
/// diacritics. Bare ASCII is reported as SLP1: Harvard-Kyoto overlaps SLP1
/// on plain lowercase text and cannot be told apart reliably, so HK input
/// must be requested explicitly.
pub fn detect_scheme(input: &str) -> Scheme {
    let mut devanagari_count = 0u32;
    let total = input.chars().count() as u32;

    for c in input.chars() {
        match c {
            '\u{0900}'..='\u{097F}' => devanagari_count += 1,
            // IAST diacritics, precomposed and combining.
            'ā' | 'ī' | 'ū' | 'ṛ' | 'ṝ' | 'ḷ' | 'ḹ' | 'ṃ' | 'ḥ' | 'ṅ' | 'ñ' | 'ṭ' | 'ḍ' | 'ṇ'
            | 'ś' | 'ṣ' | 'ḻ' | '\u{0304}' | '\u{0323}' | '\u{0301}' | '\u{0303}' | '\u{030d}' => {
                return Scheme::Iast;
            }
            _ => {}
        }
    }

    if devanagari_count * 2 > total {
        return Scheme::Devanagari;
    }
    Scheme::Slp1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_devanagari() {
        assert_eq!(detect_scheme("रामः"), Scheme::Devanagari);
    }

    #[test]
    fn test_detect_iast_with_diacritics() {
        assert_eq!(detect_scheme("rāmaḥ"), Scheme::Iast);
    }

    #[test]
    fn test_detect_ascii_defaults_to_slp1() {
        assert_eq!(detect_scheme("tattvamasi"), Scheme::Slp1);
        assert_eq!(detect_scheme("gurUpadeSaH"), Scheme::Slp1);
    }

    #[test]
    fn test_scheme_names_parse() {
        assert_eq!("deva".parse::<Scheme>().unwrap(), Scheme::Devanagari);
        assert_eq!("IAST".parse::<Scheme>().unwrap(), Scheme::Iast);
        assert_eq!("hk".parse::<Scheme>().unwrap(), Scheme::HarvardKyoto);
        assert_eq!("slp1".parse::<Scheme>().unwrap(), Scheme::Slp1);
        assert!(matches!(
            "itrans".parse::<Scheme>(),
            Err(LipiError::UnknownScheme(_))
        ));
    }
}
