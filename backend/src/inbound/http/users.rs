//! User lookup endpoint.
//!
//! ```text
//! GET /api/v1/users?officeId=O-1&roleName=approver&applicationId=app&requestHost=host
//! ```

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::CallerContext;
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;

/// Query parameters for the user lookup.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UserLookupQuery {
    /// Office whose membership is being queried.
    pub office_id: String,
    /// Role the users must hold.
    pub role_name: String,
    /// Calling application identifier.
    pub application_id: String,
    /// Host the request originates from.
    pub request_host: String,
}

/// User lookup outcome.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    /// Whether any user matched.
    pub found: bool,
    /// Matching user identifiers, in registry order.
    pub users: Vec<String>,
    /// Operator-facing summary.
    pub message: String,
}

impl UsersResponse {
    fn new(users: Vec<String>) -> Self {
        let message = if users.is_empty() {
            "no users found for the given criteria".to_owned()
        } else {
            format!("found {} user(s)", users.len())
        };
        Self {
            found: !users.is_empty(),
            users,
            message,
        }
    }
}

/// Look up users holding a role within an office.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    params(UserLookupQuery),
    responses(
        (status = 200, description = "Lookup outcome", body = UsersResponse),
        (status = 400, description = "Invalid caller context", body = ApiError),
        (status = 422, description = "Registry rejected the lookup", body = ApiError),
        (status = 502, description = "Registry unreachable", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "findUsers"
)]
#[get("/users")]
pub async fn find_users(
    state: web::Data<HttpState>,
    query: web::Query<UserLookupQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let context = CallerContext::new(&query.application_id, &query.request_host)?;
    let users = state
        .authorization
        .find_users_by_criteria(&query.office_id, &query.role_name, &context)
        .await?;
    Ok(HttpResponse::Ok().json(UsersResponse::new(users.to_vec())))
}
