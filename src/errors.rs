use crate::path::PathError;
use crate::pattern::PatternError;
use crate::trie::TrieError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("capacity hint must be positive (got {given})")]
    InvalidCapacity { given: usize },
    #[error("router already released; cannot perform {operation}")]
    Released { operation: &'static str },
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Trie(#[from] TrieError),
}

pub type RouterResult<T> = Result<T, RouterError>;
