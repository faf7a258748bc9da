//! Role lookup endpoint.
//!
//! ```text
//! POST /api/v1/roles {"loginName":"jdoe"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Identity;
use crate::inbound::http::dto::IdentityDto;
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;

/// Identity fragment accepted by the role lookup.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleLookupRequest {
    /// Authentication system identifier; defaults to empty.
    pub authentication_system_id: Option<String>,
    /// Authorization system identifier; defaults to empty.
    pub authorization_system_id: Option<String>,
    /// Login name; mandatory.
    #[schema(example = "jdoe")]
    pub login_name: String,
}

/// Role lookup outcome.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RolesResponse {
    /// The identity the roles belong to: the registry's resolved echo when
    /// it supplies one, otherwise the caller's validated input.
    pub identity: IdentityDto,
    /// Granted role names, in registry order.
    pub roles: Vec<String>,
    /// Operator-facing summary.
    pub message: String,
}

impl RolesResponse {
    fn new(identity: Identity, roles: Vec<String>) -> Self {
        let message = if roles.is_empty() {
            "no roles found for user".to_owned()
        } else {
            format!("found {} role(s) for user", roles.len())
        };
        Self {
            identity: identity.into(),
            roles,
            message,
        }
    }
}

/// Retrieve the roles granted to an identity.
///
/// The registry may echo back a corrected identity; when it does not, the
/// caller's original (validated) identity is considered authoritative and is
/// returned unchanged.
#[utoipa::path(
    post,
    path = "/api/v1/roles",
    request_body = RoleLookupRequest,
    responses(
        (status = 200, description = "Lookup outcome", body = RolesResponse),
        (status = 400, description = "Blank login name", body = ApiError),
        (status = 422, description = "Registry rejected the lookup", body = ApiError),
        (status = 502, description = "Registry unreachable", body = ApiError)
    ),
    tags = ["roles"],
    operation_id = "getRoles"
)]
#[post("/roles")]
pub async fn get_roles(
    state: web::Data<HttpState>,
    payload: web::Json<RoleLookupRequest>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner();
    let identity = Identity::new(
        request.authentication_system_id.as_deref(),
        request.authorization_system_id.as_deref(),
        &request.login_name,
    )?;
    let grant = state.authorization.get_roles(&identity).await?;
    let resolved = grant.identity.unwrap_or(identity);
    Ok(HttpResponse::Ok().json(RolesResponse::new(resolved, grant.roles.to_vec())))
}
