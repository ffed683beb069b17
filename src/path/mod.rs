mod error;
mod normalize;

pub use error::{PathError, PathResult};
pub use normalize::{chomp_trailing_slash, require_non_empty};
