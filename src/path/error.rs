use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
}

pub type PathResult<T> = Result<T, PathError>;
