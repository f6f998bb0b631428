//! Station repository error types.

/// Errors raised while building the station collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The caller supplied an argument outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RepositoryError::InvalidArgument("station count must be non-negative, got -1".into());
        assert_eq!(
            err.to_string(),
            "invalid argument: station count must be non-negative, got -1"
        );
    }
}
