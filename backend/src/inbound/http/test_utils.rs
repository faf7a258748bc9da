//! Helpers for exercising handlers in-process.

use std::sync::Arc;

use actix_web::web;

use crate::domain::AuthorizationClient;
use crate::domain::ports::AuthorizationTransport;
use crate::inbound::http::state::HttpState;

/// Wrap a transport into handler-injectable state.
pub fn state_with(transport: impl AuthorizationTransport + 'static) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(AuthorizationClient::new(Arc::new(transport))))
}
