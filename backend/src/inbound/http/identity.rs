//! Identity search endpoints.
//!
//! ```text
//! POST /api/v1/identity/search          {"username":"jdoe"}
//! POST /api/v1/identity/advanced-search {"email":"jdoe@example.org"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{CriterionEntry, Identity, SearchFields};
use crate::inbound::http::dto::IdentityDto;
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;

/// Raw criterion map; each member is one search constraint. Member order is
/// preserved into the registry's ordered entry list.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct CriterionMapBody(
    pub serde_json::Map<String, serde_json::Value>,
);

/// Identity search outcome; `found: false` with no identity is the normal
/// no-match result, not an error.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IdentitySearchResponse {
    /// Whether the registry reported a match.
    pub found: bool,
    /// The matched identity, when found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<IdentityDto>,
    /// Operator-facing summary.
    pub message: String,
}

impl IdentitySearchResponse {
    fn from_match(identity: Option<Identity>) -> Self {
        match identity {
            Some(identity) => Self {
                found: true,
                identity: Some(identity.into()),
                message: "identity found".to_owned(),
            },
            None => Self {
                found: false,
                identity: None,
                message: "no matching identity found".to_owned(),
            },
        }
    }
}

/// Fields accepted by the advanced identity search; all optional, but at
/// least one must be non-blank.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSearchRequest {
    /// Login name fragment.
    pub username: Option<String>,
    /// E-mail address.
    pub email: Option<String>,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Organizational department.
    pub department: Option<String>,
}

/// Search by raw criterion map.
///
/// The map is converted structurally (one entry per member, no trimming)
/// and passed through even when empty; the registry decides what an empty
/// search means.
#[utoipa::path(
    post,
    path = "/api/v1/identity/search",
    request_body = CriterionMapBody,
    responses(
        (status = 200, description = "Search outcome", body = IdentitySearchResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 422, description = "Registry rejected the search", body = ApiError),
        (status = 502, description = "Registry unreachable", body = ApiError)
    ),
    tags = ["identity"],
    operation_id = "searchIdentity"
)]
#[post("/identity/search")]
pub async fn search_identity(
    state: web::Data<HttpState>,
    payload: web::Json<CriterionMapBody>,
) -> ApiResult<HttpResponse> {
    let CriterionMapBody(map) = payload.into_inner();
    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let Some(value) = value.as_str() else {
            return Err(ApiError::invalid_request(format!(
                "criterion {key} must be a string"
            ))
            .with_details(json!({ "field": key, "code": "non_string_criterion" })));
        };
        pairs.push((key, value.to_owned()));
    }
    let entries = CriterionEntry::from_pairs(pairs);
    let identity = state.authorization.find_matching_identity(&entries).await?;
    Ok(HttpResponse::Ok().json(IdentitySearchResponse::from_match(identity)))
}

/// Search by named person fields.
///
/// Blank fields are omitted; an entirely blank request is rejected before
/// any remote call, since the registry requires at least one criterion.
#[utoipa::path(
    post,
    path = "/api/v1/identity/advanced-search",
    request_body = AdvancedSearchRequest,
    responses(
        (status = 200, description = "Search outcome", body = IdentitySearchResponse),
        (status = 400, description = "No usable criterion supplied", body = ApiError),
        (status = 422, description = "Registry rejected the search", body = ApiError),
        (status = 502, description = "Registry unreachable", body = ApiError)
    ),
    tags = ["identity"],
    operation_id = "advancedIdentitySearch"
)]
#[post("/identity/advanced-search")]
pub async fn advanced_search(
    state: web::Data<HttpState>,
    payload: web::Json<AdvancedSearchRequest>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner();
    let fields = SearchFields {
        username: request.username,
        email: request.email,
        first_name: request.first_name,
        last_name: request.last_name,
        department: request.department,
    };
    let entries = fields.criteria();
    if entries.is_empty() {
        return Err(
            ApiError::invalid_request("at least one search criterion must be provided")
                .with_details(json!({ "code": "empty_criteria" })),
        );
    }
    let identity = state.authorization.find_matching_identity(&entries).await?;
    Ok(HttpResponse::Ok().json(IdentitySearchResponse::from_match(identity)))
}
