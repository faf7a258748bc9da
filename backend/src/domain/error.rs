//! Domain-level error taxonomy.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses; the domain only distinguishes the three failure classes the
//! facade has to present differently.

use thiserror::Error;

/// Input validation failures raised before any remote call is attempted.
///
/// Always locally recoverable by correcting the input; never wraps a remote
/// cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A mandatory field was absent or blank after trimming.
    #[error("missing required field: {field}")]
    MissingRequiredField {
        /// Wire name of the offending field.
        field: &'static str,
    },
    /// An office category label is not part of the closed enumeration.
    #[error("invalid office category: {value}")]
    InvalidOfficeCategory {
        /// The rejected label, exactly as supplied.
        value: String,
    },
}

/// Failure taxonomy for registry operations.
///
/// A remote fault is the registry explicitly rejecting an operation and is
/// client-correctable; everything else that goes wrong on the wire
/// (connectivity, timeout, malformed envelope) is a transport failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorizationError {
    /// Input rejected locally before any round trip.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The registry explicitly rejected the operation.
    #[error("registry rejected the operation: {reason} (fault {code})")]
    RemoteFault {
        /// Registry-supplied fault code.
        code: String,
        /// Human-readable fault reason.
        reason: String,
    },
    /// The registry could not be reached or answered with an unusable
    /// envelope.
    #[error("registry transport failed: {message}")]
    Transport {
        /// Description of the underlying failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error display and conversions.

    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let err = ValidationError::MissingRequiredField { field: "loginName" };
        assert_eq!(err.to_string(), "missing required field: loginName");
    }

    #[test]
    fn invalid_category_carries_the_rejected_value() {
        let err = ValidationError::InvalidOfficeCategory {
            value: "bogus".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid office category: bogus");
    }

    #[test]
    fn validation_errors_convert_transparently() {
        let err = AuthorizationError::from(ValidationError::MissingRequiredField {
            field: "applicationId",
        });
        assert_eq!(err.to_string(), "missing required field: applicationId");
        assert!(matches!(err, AuthorizationError::Validation(_)));
    }

    #[test]
    fn remote_fault_display_includes_code_and_reason() {
        let err = AuthorizationError::RemoteFault {
            code: "AUTH-17".to_owned(),
            reason: "operation not permitted".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "registry rejected the operation: operation not permitted (fault AUTH-17)"
        );
    }
}
