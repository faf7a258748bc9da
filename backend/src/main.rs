//! Gateway entry-point: configuration, transport wiring, REST facade.

use actix_web::{App, HttpServer, web};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use backend::ApiDoc;
use backend::domain::AuthorizationClient;
use backend::inbound::http::health::ProbeState;
use backend::inbound::http::state::HttpState;
use backend::middleware::Correlate;
use backend::server::config::GatewaySettings;
use backend::server::{build_transport, configure_app};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = GatewaySettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load configuration: {err}")))?;
    let transport = build_transport(&settings).map_err(std::io::Error::other)?;
    let state = HttpState::new(AuthorizationClient::new(transport));
    let probes = web::Data::new(ProbeState::new());

    let bind_addr = settings.bind_addr().to_owned();
    info!(%bind_addr, "starting authorization gateway");

    let server_state = state.clone();
    let server_probes = probes.clone();
    let server = HttpServer::new(move || {
        let app = App::new()
            .wrap(Correlate)
            .configure(|cfg| configure_app(cfg, &server_state, &server_probes));
        #[cfg(debug_assertions)]
        let app = app
            .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
        app
    })
    .bind(bind_addr)?;

    probes.mark_ready();
    server.run().await
}
