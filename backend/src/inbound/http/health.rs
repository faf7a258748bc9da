//! Health endpoints: registry probe plus liveness and readiness probes.
//!
//! ```text
//! GET /api/v1/health        asks the registry whether it is healthy
//! GET /health/live          process liveness, no remote call
//! GET /health/ready         flips once the server finishes wiring
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::inbound::http::state::HttpState;

/// Readiness flag shared between the bootstrap and the readiness probe.
#[derive(Debug, Default)]
pub struct ProbeState {
    ready: AtomicBool,
}

impl ProbeState {
    /// Create a probe state that starts not ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service ready to receive traffic.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Whether the bootstrap reported the service ready.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

/// Registry health report returned by `GET /api/v1/health`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Whether the registry answered its probe positively.
    pub healthy: bool,
    /// Operator-facing summary.
    #[schema(example = "registry is healthy")]
    pub message: String,
}

/// Probe the remote registry.
///
/// The probe never fails upward: any fault or transport outcome is reported
/// as `healthy: false` with a 200 status, so monitoring never has to
/// distinguish probe errors from probe results.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Registry health report", body = HealthResponse)
    ),
    tags = ["health"],
    operation_id = "checkHealth"
)]
#[get("/health")]
pub async fn check_health(state: web::Data<HttpState>) -> HttpResponse {
    let healthy = state.authorization.check_health().await;
    let message = if healthy {
        "registry is healthy"
    } else {
        "registry is not healthy"
    };
    HttpResponse::Ok().json(HealthResponse {
        healthy,
        message: message.to_owned(),
    })
}

fn probe_response(probe_ok: bool) -> HttpResponse {
    let mut response = if probe_ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Liveness probe; 200 while the process is serving.
#[utoipa::path(
    get,
    path = "/health/live",
    responses((status = 200, description = "Server is alive")),
    tags = ["health"],
    operation_id = "liveProbe"
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    probe_response(true)
}

/// Readiness probe; 503 until the bootstrap finishes wiring.
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    ),
    tags = ["health"],
    operation_id = "readyProbe"
)]
#[get("/health/ready")]
pub async fn ready(probe: web::Data<ProbeState>) -> HttpResponse {
    probe_response(probe.is_ready())
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test as actix_test, web};
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::{FixtureAuthorizationTransport, InvokeError, MockAuthorizationTransport};
    use crate::inbound::http::test_utils::state_with;

    #[actix_web::test]
    async fn registry_probe_reports_healthy_through_the_fixture() {
        let app = actix_test::init_service(
            App::new()
                .app_data(state_with(FixtureAuthorizationTransport))
                .service(check_health),
        )
        .await;
        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/health").to_request())
                .await;
        assert!(res.status().is_success());
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["healthy"], json!(true));
    }

    #[actix_web::test]
    async fn registry_probe_downgrades_transport_failure_to_unhealthy() {
        let mut transport = MockAuthorizationTransport::new();
        transport
            .expect_invoke()
            .returning(|_, _| Err(InvokeError::transport("connection refused")));

        let app = actix_test::init_service(
            App::new().app_data(state_with(transport)).service(check_health),
        )
        .await;
        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/health").to_request())
                .await;
        assert!(res.status().is_success(), "the probe must never fail upward");
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["healthy"], json!(false));
    }

    #[actix_web::test]
    async fn readiness_flips_once_marked() {
        let probe = web::Data::new(ProbeState::new());
        let app = actix_test::init_service(
            App::new().app_data(probe.clone()).service(ready).service(live),
        )
        .await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;
        assert_eq!(res.status().as_u16(), 503);

        probe.mark_ready();
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;
        assert!(res.status().is_success());

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/health/live").to_request(),
        )
        .await;
        assert!(res.status().is_success());
    }
}
