use thiserror::Error;

/// Contract violations raised before the ranking engine is invoked
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("limit must be zero or greater, got {0}")]
    NegativeLimit(i64),

    #[error("invalid request: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for MatchError {
    fn from(errors: validator::ValidationErrors) -> Self {
        MatchError::Validation(errors.to_string())
    }
}

/// Convert a caller-supplied limit into a result cap, refusing negatives
pub fn checked_limit(limit: i64, max_limit: usize) -> Result<usize, MatchError> {
    let limit = usize::try_from(limit).map_err(|_| MatchError::NegativeLimit(limit))?;
    Ok(limit.min(max_limit))
}
