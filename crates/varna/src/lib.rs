mod alphabet;
mod consonant;
mod vowel;

pub use alphabet::{ALPHABET, is_slp1, validate};
pub use consonant::{
    CLASS_NASALS, CONSONANTS, SEMIVOWELS, SIBILANTS, STOPS, is_anusvara, is_class_nasal,
    is_consonant, is_nasal, is_semivowel, is_sibilant, is_stop, is_visarga,
};
pub use vowel::{
    DIPHTHONGS, LONG_VOWELS, SHORT_VOWELS, VOWELS, is_diphthong, is_long_vowel, is_short_vowel,
    is_simple_vowel, is_vowel,
};

/// Error type for varna operations.
#[derive(Debug, thiserror::Error)]
pub enum VarnaError {
    #[error("not an SLP1 character: '{c}' at byte {offset}")]
    NonSlp1Char { c: char, offset: usize },

    #[error("empty input")]
    EmptyInput,
}
