//! HTTP server assembly.
//!
//! Translates configuration into a wired application: transport selection,
//! client construction, and route registration. Instances are built once
//! here and handed to handlers by reference; there is no ambient container.

pub mod config;

use std::sync::Arc;

use actix_web::web;
use tracing::warn;
use url::Url;

use crate::domain::ports::{AuthorizationTransport, FixtureAuthorizationTransport};
use crate::inbound::http::{self, health::ProbeState, state::HttpState};
use crate::outbound::registry::HttpRegistryTransport;
use self::config::GatewaySettings;

/// Failures preventing server assembly.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The configured registry endpoint is not a valid URL.
    #[error("invalid registry endpoint: {message}")]
    InvalidEndpoint {
        /// Parser diagnostic.
        message: String,
    },
    /// The outbound HTTP client could not be constructed.
    #[error("failed to build the registry HTTP client: {message}")]
    HttpClient {
        /// Builder diagnostic.
        message: String,
    },
}

/// Choose the transport for the configured registry endpoint.
///
/// With no endpoint configured the fixture transport is wired and a warning
/// logged; the gateway then serves empty results, which keeps local
/// development self-contained.
///
/// # Errors
///
/// [`BuildError::InvalidEndpoint`] for an unparseable endpoint URL;
/// [`BuildError::HttpClient`] when the outbound client cannot be built.
pub fn build_transport(
    settings: &GatewaySettings,
) -> Result<Arc<dyn AuthorizationTransport>, BuildError> {
    match settings.registry_endpoint.as_deref() {
        Some(endpoint) => {
            let endpoint = Url::parse(endpoint).map_err(|err| BuildError::InvalidEndpoint {
                message: err.to_string(),
            })?;
            let transport = HttpRegistryTransport::with_timeout(endpoint, settings.timeout())
                .map_err(|err| BuildError::HttpClient {
                    message: err.to_string(),
                })?;
            Ok(Arc::new(transport))
        }
        None => {
            warn!("no registry endpoint configured; serving with the fixture transport");
            Ok(Arc::new(FixtureAuthorizationTransport))
        }
    }
}

/// Register the facade routes and shared state on an actix app.
///
/// Used by `main` and by integration tests so both wire the same surface.
pub fn configure_app(
    cfg: &mut web::ServiceConfig,
    state: &HttpState,
    probes: &web::Data<ProbeState>,
) {
    cfg.app_data(web::Data::new(state.clone()))
        .app_data(probes.clone())
        .service(
            web::scope("/api/v1")
                .service(http::health::check_health)
                .service(http::identity::search_identity)
                .service(http::identity::advanced_search)
                .service(http::offices::find_offices)
                .service(http::offices::list_office_categories)
                .service(http::users::find_users)
                .service(http::roles::get_roles),
        )
        .service(http::health::live)
        .service(http::health::ready);
}

#[cfg(test)]
mod tests {
    //! Transport selection coverage.

    use super::*;

    fn settings(endpoint: Option<&str>) -> GatewaySettings {
        GatewaySettings {
            bind_addr: None,
            registry_endpoint: endpoint.map(str::to_owned),
            timeout_seconds: None,
        }
    }

    #[test]
    fn no_endpoint_falls_back_to_the_fixture_transport() {
        build_transport(&settings(None)).expect("the fixture fallback always builds");
    }

    #[test]
    fn a_valid_endpoint_builds_the_http_transport() {
        build_transport(&settings(Some("https://registry.example.org/authz")))
            .expect("a valid endpoint builds");
    }

    #[test]
    fn an_unparseable_endpoint_is_rejected() {
        let Err(err) = build_transport(&settings(Some("not a url"))) else {
            panic!("must fail");
        };
        assert!(matches!(err, BuildError::InvalidEndpoint { .. }));
    }
}
