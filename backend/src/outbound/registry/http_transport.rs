//! Reqwest-backed transport for the authorization registry.
//!
//! This adapter owns transport details only: the named-operation envelope
//! (operation name as the final URL path segment, bare payload as the JSON
//! document body), the symmetric connect/read timeout, and classification of
//! HTTP outcomes into faults versus transport failures.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

use super::dto::FaultDto;
use crate::domain::ports::{AuthorizationTransport, InvokeError};

/// Timeout applied to both the connect and overall request phases.
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Transport adapter performing one HTTP POST per operation.
pub struct HttpRegistryTransport {
    client: Client,
    endpoint: Url,
}

impl HttpRegistryTransport {
    /// Build an adapter with the default 30 second timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        Self::with_timeout(endpoint, Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
    }

    /// Build an adapter with an explicit timeout, applied symmetrically to
    /// the connect and request phases.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, endpoint })
    }

    fn operation_url(&self, operation: &str) -> Result<Url, InvokeError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| InvokeError::transport("registry endpoint cannot be a base URL"))?
            .pop_if_empty()
            .push("operations")
            .push(operation);
        Ok(url)
    }
}

#[async_trait]
impl AuthorizationTransport for HttpRegistryTransport {
    async fn invoke(&self, operation: &str, payload: Value) -> Result<Value, InvokeError> {
        let url = self.operation_url(operation)?;
        let response = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_request_error)?;
        if !status.is_success() {
            return Err(classify_failure(status, body.as_ref()));
        }
        serde_json::from_slice(body.as_ref())
            .map_err(|err| InvokeError::transport(format!("malformed response document: {err}")))
    }
}

fn map_request_error(error: reqwest::Error) -> InvokeError {
    if error.is_timeout() {
        InvokeError::transport(format!("request timed out: {error}"))
    } else {
        InvokeError::transport(error.to_string())
    }
}

/// Distinguish an explicit registry fault from plain connectivity trouble: a
/// failure status whose body parses as a fault document is a fault; anything
/// else is a transport failure carrying the status and a bounded body
/// preview.
fn classify_failure(status: StatusCode, body: &[u8]) -> InvokeError {
    if let Ok(fault) = serde_json::from_slice::<FaultDto>(body) {
        return fault.into_invoke_error();
    }
    let preview = body_preview(body);
    if preview.is_empty() {
        InvokeError::transport(format!("registry answered status {}", status.as_u16()))
    } else {
        InvokeError::transport(format!(
            "registry answered status {}: {preview}",
            status.as_u16()
        ))
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 120;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview: String = compact.chars().take(PREVIEW_CHAR_LIMIT).collect();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the non-network mapping helpers.

    use rstest::rstest;

    use super::*;

    fn transport_for(endpoint: &str) -> HttpRegistryTransport {
        let endpoint = Url::parse(endpoint).expect("endpoint parses");
        HttpRegistryTransport::new(endpoint).expect("client builds")
    }

    #[rstest]
    #[case::with_trailing_slash("https://registry.example.org/authz/")]
    #[case::without_trailing_slash("https://registry.example.org/authz")]
    fn operation_urls_nest_under_the_endpoint(#[case] endpoint: &str) {
        let transport = transport_for(endpoint);
        let url = transport
            .operation_url("getRoles")
            .expect("operation URL builds");
        assert_eq!(
            url.as_str(),
            "https://registry.example.org/authz/operations/getRoles"
        );
    }

    #[test]
    fn a_fault_document_becomes_a_fault() {
        let body = br#"{"faultCode":"AUTH-17","faultReason":"caller not entitled"}"#;
        let error = classify_failure(StatusCode::BAD_REQUEST, body);
        assert_eq!(
            error,
            InvokeError::fault("AUTH-17", "caller not entitled")
        );
    }

    #[rstest]
    #[case::html_error_page(StatusCode::BAD_GATEWAY, b"<html>upstream down</html>".as_slice())]
    #[case::empty_body(StatusCode::INTERNAL_SERVER_ERROR, b"".as_slice())]
    #[case::json_without_fault_fields(
        StatusCode::SERVICE_UNAVAILABLE,
        br#"{"error":"try later"}"#.as_slice()
    )]
    fn non_fault_failures_stay_transport_errors(#[case] status: StatusCode, #[case] body: &[u8]) {
        let error = classify_failure(status, body);
        match error {
            InvokeError::Transport { message } => {
                assert!(
                    message.contains(&status.as_u16().to_string()),
                    "message should carry the status: {message}"
                );
            }
            InvokeError::Fault { .. } => panic!("must not be classified as a fault"),
        }
    }

    #[test]
    fn body_previews_are_bounded_and_compacted() {
        let long_body = "x ".repeat(400);
        let preview = body_preview(long_body.as_bytes());
        assert!(preview.ends_with("..."));
        assert!(preview.chars().count() <= 123);
        assert!(!preview.contains("  "), "whitespace runs are collapsed");
    }
}
