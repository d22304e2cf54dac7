//! Generic error handling utilities
//!
//! Provides unified error handling that can work across different error types
//! while maintaining domain-specific error logging patterns.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// User-actionable errors (like a converter shipping a broken panel) carry a
/// specific message that should be shown as-is; system errors (like the
/// discovery subsystem malfunctioning) show generic context with detail
/// demoted to debug level.
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)`; when it returns `false`, `user_message()` must return
/// `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error contains a specific, user-actionable message
    /// that should be displayed directly to the user
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<&str>;
}

/// Log errors with appropriate detail level based on error specificity
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    // Always emit a primary fatal line containing at least some context plus
    // useful detail. If the error is user-actionable we prefer its user message.
    if error.is_user_actionable() {
        if let Some(user_msg) = error.user_message() {
            log::error!("FATAL: {}", user_msg);
        } else {
            log::error!("FATAL: {}", operation_context);
        }
    } else {
        log::error!("FATAL: {}", operation_context);
    }
    // Full detail only at debug level
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct TestUserError {
        message: String,
    }

    impl fmt::Display for TestUserError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.message)
        }
    }

    impl std::error::Error for TestUserError {}

    impl ContextualError for TestUserError {
        fn is_user_actionable(&self) -> bool {
            true
        }

        fn user_message(&self) -> Option<&str> {
            Some(&self.message)
        }
    }

    #[derive(Debug)]
    struct TestSystemError;

    impl fmt::Display for TestSystemError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "internal subsystem failure")
        }
    }

    impl std::error::Error for TestSystemError {}

    impl ContextualError for TestSystemError {
        fn is_user_actionable(&self) -> bool {
            false
        }

        fn user_message(&self) -> Option<&str> {
            None
        }
    }

    #[test]
    fn test_user_actionable_error_contract() {
        let err = TestUserError {
            message: "Converter 'Broken' could not build its panel".to_string(),
        };
        assert!(err.is_user_actionable());
        assert_eq!(
            err.user_message(),
            Some("Converter 'Broken' could not build its panel")
        );
        // Must not panic without an initialised logger
        log_error_with_context(&err, "Converter validation");
    }

    #[test]
    fn test_system_error_contract() {
        let err = TestSystemError;
        assert!(!err.is_user_actionable());
        assert!(err.user_message().is_none());
        log_error_with_context(&err, "Converter discovery");
    }
}
