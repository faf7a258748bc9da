//! Middleware attaching a request-scoped correlation identifier.
//!
//! Each request receives a UUID held in tokio task-local storage so that
//! error payloads, log lines, and the response header all agree on one
//! identifier. Task locals are not inherited by spawned tasks; work moved
//! off the request task must capture the identifier explicitly.

use std::future::Future;
use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tokio::task_local;
use tracing::warn;
use uuid::Uuid;

/// Response header carrying the request's correlation identifier.
pub const CORRELATION_ID_HEADER: &str = "correlation-id";

task_local! {
    static CORRELATION_ID: CorrelationId;
}

/// Request-scoped correlation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The identifier for the current request, if one is in scope.
    pub fn current() -> Option<Self> {
        CORRELATION_ID.try_with(|id| *id).ok()
    }

    /// Run `fut` with `id` in scope. The middleware uses this around the
    /// downstream service; tests use it to pin a known identifier.
    pub async fn scope<Fut: Future>(id: Self, fut: Fut) -> Fut::Output {
        CORRELATION_ID.scope(id, fut).await
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Middleware factory; wrap the app with this to correlate logs, error
/// payloads, and responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct Correlate;

impl<S, B> Transform<S, ServiceRequest> for Correlate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = CorrelateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorrelateMiddleware { inner: service }))
    }
}

/// Service wrapper produced by [`Correlate`]; not used directly.
pub struct CorrelateMiddleware<S> {
    inner: S,
}

impl<S, B> Service<ServiceRequest> for CorrelateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let id = CorrelationId::generate();
        let downstream = self.inner.call(req);
        Box::pin(CorrelationId::scope(id, async move {
            let mut res = downstream.await?;
            match HeaderValue::from_str(&id.to_string()) {
                Ok(value) => {
                    res.response_mut()
                        .headers_mut()
                        .insert(HeaderName::from_static(CORRELATION_ID_HEADER), value);
                }
                Err(error) => {
                    warn!(%error, correlation_id = %id, "correlation header not encodable");
                }
            }
            Ok(res)
        }))
    }
}
