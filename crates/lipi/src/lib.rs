mod mapping;
mod pada;
mod scheme;

pub use pada::Pada;
pub use scheme::{LipiError, Scheme, detect_scheme};

/// Transliterate text from the given scheme into canonical SLP1.
pub fn to_slp1(input: &str, from: Scheme) -> Result<String, LipiError> {
    if input.is_empty() {
        return Ok(String::new());
    }
    mapping::to_slp1_impl(input, from)
}
