use fst::SetBuilder;

use crate::KoshaError;

/// Build an FST Set from a strictly byte-sorted word list.
pub fn build_fst_set(words: &[&str]) -> Result<Vec<u8>, KoshaError> {
    let mut builder = SetBuilder::memory();
    for word in words {
        builder
            .insert(word)
            .map_err(|e| KoshaError::FstBuild(e.to_string()))?;
    }
    builder
        .into_inner()
        .map_err(|e| KoshaError::FstBuild(e.to_string()))
}
