use crate::path::{PathError, PathResult};

/// Drops a single trailing `/` unless the path is exactly `/`.
///
/// The trie itself never normalizes; this pre-pass must be applied to both
/// the registration path and the request path by the same layer, or matches
/// silently fail on slash mismatches. The `Router` facade applies it when
/// `RouterOptions::chomp_trailing_slash` is enabled.
#[inline]
pub fn chomp_trailing_slash(path: &str) -> &str {
    if path.len() > 1 && path.ends_with('/') {
        &path[..path.len() - 1]
    } else {
        path
    }
}

#[inline]
pub fn require_non_empty(path: &str) -> PathResult<&str> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }
    Ok(path)
}
