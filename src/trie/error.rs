use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrieError {
    #[error(
        "pattern '{pattern}' binds parameter '{incoming}' where '{existing}' already applies; one position holds at most one parameter"
    )]
    ParamConflict {
        pattern: String,
        existing: String,
        incoming: String,
    },
    #[error("route table full: limit {limit}")]
    MaxRoutesExceeded { limit: u16 },
    #[error("matcher state is stale; compile() must run before matching")]
    RecompileRequired,
    #[error("duplicate dispatch byte {byte:#04x} under node {node}; trie is corrupt")]
    CorruptDispatch { byte: u8, node: u32 },
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type TrieResult<T> = Result<T, TrieError>;
