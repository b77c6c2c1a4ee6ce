use std::error::Error;

/// Base trait for all application errors
pub trait SkiffError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type SkiffResult<T> = Result<T, Box<dyn SkiffError>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::ResolveError;

    #[test]
    fn test_skiff_result() {
        let _result: SkiffResult<i32> = Ok(42);
    }

    #[test]
    fn test_resolve_error_implements_skiff_error() {
        let error = ResolveError::UnknownVariable {
            name: "workspaceFolder".to_string(),
        };
        assert_eq!(error.error_code(), "RESOLVE_UNKNOWN_VARIABLE");
        assert!(error.is_user_error());
    }
}
