//! HTTP error payloads and mapping from the domain taxonomy.
//!
//! Keep the domain free of transport concerns by translating
//! [`AuthorizationError`] and [`ValidationError`] into Actix responses here.
//! The mapping is the facade's presentation policy: local validation is the
//! caller's fault, an explicit registry fault is client-correctable but not
//! malformed, and transport trouble is a retryable upstream outage.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::domain::{AuthorizationError, ValidationError};
use crate::middleware::correlation::{CORRELATION_ID_HEADER, CorrelationId};

/// Stable machine-readable code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The registry explicitly rejected the operation.
    UpstreamRejected,
    /// The registry could not be reached or answered unusably.
    UpstreamUnavailable,
    /// An unexpected error occurred inside the gateway.
    InternalError,
}

/// Standard error envelope returned by the REST facade.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Failure category.
    #[schema(example = "invalid_request")]
    code: ErrorCode,
    /// Human-readable message.
    #[schema(example = "missing required field: applicationId")]
    message: String,
    /// Correlation identifier for this request, when one is in scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,
    /// Supplementary machine-readable details.
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl ApiError {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            correlation_id: CorrelationId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Build an invalid-request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Build an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Attach structured details to the error.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Failure category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary details for clients.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    fn status(&self) -> StatusCode {
        match self.code {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::UpstreamRejected => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        let details = match &err {
            ValidationError::MissingRequiredField { field } => {
                json!({ "field": field, "code": "missing_field" })
            }
            ValidationError::InvalidOfficeCategory { value } => {
                json!({ "value": value, "code": "invalid_office_category" })
            }
        };
        Self::invalid_request(err.to_string()).with_details(details)
    }
}

impl From<AuthorizationError> for ApiError {
    fn from(err: AuthorizationError) -> Self {
        match err {
            AuthorizationError::Validation(validation) => Self::from(validation),
            AuthorizationError::RemoteFault { code, reason } => {
                Self::new(ErrorCode::UpstreamRejected, reason)
                    .with_details(json!({ "faultCode": code }))
            }
            AuthorizationError::Transport { message } => {
                Self::new(ErrorCode::UpstreamUnavailable, message)
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = &self.correlation_id {
            builder.insert_header((CORRELATION_ID_HEADER, id.clone()));
        }
        if matches!(self.code, ErrorCode::InternalError) {
            let mut redacted = self.clone();
            redacted.message = "Internal server error".to_owned();
            redacted.details = None;
            return builder.json(redacted);
        }
        builder.json(self)
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    //! Status mapping and payload shape coverage.

    use actix_web::body::to_bytes;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::validation(
        ApiError::from(ValidationError::MissingRequiredField { field: "applicationId" }),
        StatusCode::BAD_REQUEST
    )]
    #[case::fault(
        ApiError::from(AuthorizationError::RemoteFault {
            code: "AUTH-17".to_owned(),
            reason: "not entitled".to_owned(),
        }),
        StatusCode::UNPROCESSABLE_ENTITY
    )]
    #[case::transport(
        ApiError::from(AuthorizationError::Transport {
            message: "connection refused".to_owned(),
        }),
        StatusCode::BAD_GATEWAY
    )]
    #[case::internal(ApiError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn each_failure_class_maps_to_its_status(#[case] error: ApiError, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[test]
    fn validation_details_name_the_field() {
        let error = ApiError::from(ValidationError::MissingRequiredField {
            field: "requestHost",
        });
        let details = error.details().expect("details are attached");
        assert_eq!(details["field"], json!("requestHost"));
        assert_eq!(details["code"], json!("missing_field"));
    }

    #[test]
    fn fault_details_carry_the_fault_code() {
        let error = ApiError::from(AuthorizationError::RemoteFault {
            code: "AUTH-17".to_owned(),
            reason: "not entitled".to_owned(),
        });
        assert_eq!(error.message(), "not entitled");
        let details = error.details().expect("details are attached");
        assert_eq!(details["faultCode"], json!("AUTH-17"));
    }

    #[tokio::test]
    async fn internal_errors_are_redacted_in_the_response_body() {
        let response = ApiError::internal("secret detail").error_response();
        let body = to_bytes(response.into_body()).await.expect("body is readable");
        let payload: Value = serde_json::from_slice(&body).expect("body is JSON");
        assert_eq!(payload["message"], json!("Internal server error"));
        assert_eq!(payload["code"], json!("internal_error"));
        assert!(payload.get("details").is_none());
    }
}
