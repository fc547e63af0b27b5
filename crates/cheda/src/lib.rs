mod analyzer;
mod chedaka;
mod tree;

pub use analyzer::Analyzer;
pub use chedaka::Chedaka;
pub use tree::{SplitTree, flatten, sort_by_longest_segment};
