use thiserror::Error;

/// Failure reported by an item store adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct StoreError {
    reason: String,
}

impl StoreError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// The only failure a listing can surface. Connectivity, permission and
/// malformed-query faults all collapse into it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("item store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_convert_into_store_unavailable() {
        let error: ListError = StoreError::new("connection reset").into();

        assert_eq!(
            error,
            ListError::StoreUnavailable(StoreError::new("connection reset"))
        );
        assert_eq!(
            error.to_string(),
            "item store unavailable: connection reset"
        );
    }
}
