//! Driven port for invoking named operations on the authorization registry.
//!
//! The registry protocol is synchronous request/response: one payload in,
//! one document out. Wire marshalling and the named-operation envelope live
//! in the adapter behind this trait, so the domain only ever handles bare,
//! already-unwrapped payloads.

use async_trait::async_trait;
use serde_json::Value;

/// Failures surfaced by a transport invocation.
///
/// A fault is the remote party explicitly rejecting the operation, distinct
/// from connectivity trouble or an undecodable response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvokeError {
    /// The registry rejected the operation with a fault document.
    #[error("registry fault {code}: {reason}")]
    Fault {
        /// Registry-supplied fault code.
        code: String,
        /// Human-readable fault reason.
        reason: String,
    },
    /// The invocation failed before a well-formed response was received.
    #[error("transport failed: {message}")]
    Transport {
        /// Description of the connectivity or decoding failure.
        message: String,
    },
}

impl InvokeError {
    /// Build a fault error.
    pub fn fault(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Fault {
            code: code.into(),
            reason: reason.into(),
        }
    }

    /// Build a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

/// Port for one-shot invocations of named registry operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorizationTransport: Send + Sync {
    /// Invoke `operation` with `payload` and return the response document.
    ///
    /// Implementations perform exactly one round trip per call; retry policy
    /// belongs to layers above this one.
    ///
    /// # Errors
    ///
    /// [`InvokeError::Fault`] when the registry rejects the operation;
    /// [`InvokeError::Transport`] for connectivity, timeout, or malformed
    /// responses.
    async fn invoke(&self, operation: &str, payload: Value) -> Result<Value, InvokeError>;
}

/// Fixture transport returning empty documents: healthy, no matches, no
/// values. Wired when no registry endpoint is configured, and used in
/// handler tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureAuthorizationTransport;

#[async_trait]
impl AuthorizationTransport for FixtureAuthorizationTransport {
    async fn invoke(&self, operation: &str, _payload: Value) -> Result<Value, InvokeError> {
        if operation == crate::domain::protocol::operations::IS_HEALTHY {
            return Ok(serde_json::json!({ "healthy": true }));
        }
        Ok(Value::Object(serde_json::Map::new()))
    }
}
