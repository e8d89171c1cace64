//! Result size limits

/// Maximum triples returned by a query (100)
pub const DEFAULT_RESULT_LIMIT: usize = 100;

/// Triples sampled for the unfiltered overview graph (2000)
pub const OVERVIEW_SAMPLE_LIMIT: usize = 2000;

/// Upper bound accepted for any configured limit (100000)
pub const MAX_RESULT_LIMIT: usize = 100_000;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    ZeroLimit,
    LimitTooLarge { limit: usize, max: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroLimit => write!(f, "Limit must be at least 1"),
            Self::LimitTooLarge { limit, max } => {
                write!(f, "Limit too large: {} (max {})", limit, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a result or sample limit
pub fn validate_limit(limit: usize) -> Result<(), ValidationError> {
    if limit == 0 {
        return Err(ValidationError::ZeroLimit);
    }
    if limit > MAX_RESULT_LIMIT {
        return Err(ValidationError::LimitTooLarge {
            limit,
            max: MAX_RESULT_LIMIT,
        });
    }
    Ok(())
}
