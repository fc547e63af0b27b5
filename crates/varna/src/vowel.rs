/// Short (hrasva) vowels: a, i, u, vocalic r, vocalic l.
pub const SHORT_VOWELS: &str = "aiufx";

/// Long (dirgha) counterparts of the short vowels.
pub const LONG_VOWELS: &str = "AIUFX";

/// Diphthongs: e, ai, o, au.
pub const DIPHTHONGS: &str = "eEoO";

/// Every SLP1 vowel.
pub const VOWELS: &str = "aAiIuUfFxXeEoO";

pub fn is_short_vowel(c: char) -> bool {
    SHORT_VOWELS.contains(c)
}

pub fn is_long_vowel(c: char) -> bool {
    LONG_VOWELS.contains(c)
}

/// Check for a simple (non-diphthong) vowel of either length.
pub fn is_simple_vowel(c: char) -> bool {
    is_short_vowel(c) || is_long_vowel(c)
}

pub fn is_diphthong(c: char) -> bool {
    DIPHTHONGS.contains(c)
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_long_pairing() {
        // Each short vowel has a long counterpart at the same index.
        assert_eq!(SHORT_VOWELS.len(), LONG_VOWELS.len());
        for (s, l) in SHORT_VOWELS.chars().zip(LONG_VOWELS.chars()) {
            assert!(is_short_vowel(s), "expected short vowel {s}");
            assert!(is_long_vowel(l), "expected long vowel {l}");
            assert_eq!(s.to_ascii_uppercase(), l);
        }
    }

    #[test]
    fn test_diphthongs_are_vowels_but_not_simple() {
        for c in DIPHTHONGS.chars() {
            assert!(is_vowel(c));
            assert!(!is_simple_vowel(c));
        }
    }

    #[test]
    fn test_consonants_are_not_vowels() {
        for c in "kKgGcCtTpPyrlvSzsh".chars() {
            assert!(!is_vowel(c), "{c} misclassified as vowel");
        }
    }
}
