use padaccheda_varna::{
    ALPHABET, is_consonant, is_diphthong, is_simple_vowel, is_slp1, is_vowel, validate,
};
use proptest::prelude::*;

#[test]
fn alphabet_partitions_into_vowels_consonants_and_signs() {
    for c in ALPHABET.chars() {
        let classes =
            [is_vowel(c), is_consonant(c), c == 'M', c == 'H'].iter().filter(|&&x| x).count();
        assert_eq!(classes, 1, "{c} must fall in exactly one top-level class");
    }
}

#[test]
fn vowel_subclasses_are_disjoint() {
    for c in ALPHABET.chars().filter(|&c| is_vowel(c)) {
        assert!(
            is_simple_vowel(c) != is_diphthong(c),
            "{c} must be simple or diphthong, not both"
        );
    }
}

proptest! {
    // Validation accepts a string iff every char is in the alphabet.
    #[test]
    fn validate_matches_membership(s in "[ -~]{1,24}") {
        let all_slp1 = s.chars().all(is_slp1);
        prop_assert_eq!(validate(&s).is_ok(), all_slp1);
    }

    #[test]
    fn alphabet_strings_always_validate(s in "[aAiIuUfFxXeEoOMHkKgGNcCjJYwWqQRtTdDnpPbBmyrlvSzshL]{1,24}") {
        prop_assert!(validate(&s).is_ok());
    }
}
