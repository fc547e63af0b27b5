use crate::VarnaError;

/// The full SLP1 alphabet: one ASCII byte per phoneme.
///
/// Vowels, anusvara M, visarga H, then the consonants. Every member is a
/// single byte, so byte indexing into validated SLP1 text is always safe.
pub const ALPHABET: &str = "aAiIuUfFxXeEoOMHkKgGNcCjJYwWqQRtTdDnpPbBmyrlvSzshL";

/// Check membership in the SLP1 alphabet.
pub fn is_slp1(c: char) -> bool {
    ALPHABET.contains(c)
}

/// Validate that `text` is nonempty, pure SLP1.
///
/// Reports the first offending character and its byte offset. Whitespace is
/// not SLP1: callers segment one orthographic token at a time.
pub fn validate(text: &str) -> Result<(), VarnaError> {
    if text.is_empty() {
        return Err(VarnaError::EmptyInput);
    }
    for (offset, c) in text.char_indices() {
        if !is_slp1(c) {
            return Err(VarnaError::NonSlp1Char { c, offset });
        }
    }
    Ok(())
}
