use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("parameter at offset {offset} in '{pattern}' is missing a name")]
    ParameterMissingName { pattern: String, offset: usize },
    #[error(
        "parameter name '{name}' at offset {offset} in '{pattern}' must start with an alphabetic character or underscore (found '{found}')"
    )]
    ParameterInvalidStart {
        pattern: String,
        name: String,
        offset: usize,
        found: char,
    },
    #[error(
        "parameter name '{name}' at offset {offset} in '{pattern}' contains invalid character '{invalid}'"
    )]
    ParameterInvalidCharacter {
        pattern: String,
        name: String,
        offset: usize,
        invalid: char,
    },
    #[error("parameter '{name}' opened at offset {offset} in '{pattern}' is never terminated")]
    UnterminatedParameter {
        pattern: String,
        name: String,
        offset: usize,
    },
    #[error(
        "constraint for parameter '{name}' opened at offset {offset} in '{pattern}' is never terminated"
    )]
    UnterminatedConstraint {
        pattern: String,
        name: String,
        offset: usize,
    },
    #[error("duplicate parameter name '{name}' in '{pattern}'")]
    DuplicateParameterName { pattern: String, name: String },
    #[error("constraint for parameter '{name}' in '{pattern}' is not a valid regex: {source}")]
    InvalidConstraint {
        pattern: String,
        name: String,
        source: regex::Error,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;
