//! Converter Error Handling
//!
//! Error types for converter discovery and contract validation.

/// Result type alias for converter operations
pub type ConverterResult<T> = std::result::Result<T, ConverterError>;

/// Error types for converter system operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConverterError {
    /// A converter's contract call failed or returned a disallowed value.
    /// These are deterministic packaging defects, never transient conditions.
    #[error("Converter '{converter}' failed during '{operation}': {cause}")]
    ContractViolation {
        converter: String,
        operation: String,
        cause: String,
    },

    /// The discovery subsystem itself could not enumerate converters
    #[error("Converter discovery failed: {cause}")]
    DiscoveryFailed { cause: String },

    /// Generic converter error
    #[error("{message}")]
    Generic { message: String },
}

impl crate::core::error_handling::ContextualError for ConverterError {
    fn is_user_actionable(&self) -> bool {
        match self {
            // Broken panels and discovery malfunctions are packaging/system
            // defects, not something an end user can fix
            ConverterError::ContractViolation { .. } => false,
            ConverterError::DiscoveryFailed { .. } => false,
            ConverterError::Generic { .. } => true,
        }
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            ConverterError::Generic { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error_handling::ContextualError;

    #[test]
    fn test_contract_violation_names_converter() {
        let err = ConverterError::ContractViolation {
            converter: "Broken".to_string(),
            operation: "panel".to_string(),
            cause: "widget construction failed".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("Broken"));
        assert!(message.contains("panel"));
        assert!(message.contains("widget construction failed"));
    }

    #[test]
    fn test_discovery_failure_display() {
        let err = ConverterError::DiscoveryFailed {
            cause: "extension loader malfunction".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Converter discovery failed: extension loader malfunction"
        );
    }

    #[test]
    fn test_contextual_error_classification() {
        let violation = ConverterError::ContractViolation {
            converter: "Spiral".to_string(),
            operation: "panel".to_string(),
            cause: "boom".to_string(),
        };
        assert!(!violation.is_user_actionable());
        assert!(violation.user_message().is_none());

        let generic = ConverterError::Generic {
            message: "something the user can act on".to_string(),
        };
        assert!(generic.is_user_actionable());
        assert_eq!(
            generic.user_message(),
            Some("something the user can act on")
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        let a = ConverterError::DiscoveryFailed {
            cause: "x".to_string(),
        };
        let b = ConverterError::DiscoveryFailed {
            cause: "x".to_string(),
        };
        assert_eq!(a, b);
    }
}
