//! Office lookup endpoints.
//!
//! ```text
//! GET /api/v1/offices?externalId=E1&categories=FSA,FLP&applicationId=app&requestHost=host
//! GET /api/v1/office-categories
//! ```

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{CallerContext, OfficeCategory};
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;

/// Query parameters for the office lookup.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OfficeLookupQuery {
    /// Externally-issued identifier the offices are keyed by.
    pub external_id: String,
    /// Comma-separated category labels; omit for an unfiltered lookup.
    #[serde(default)]
    pub categories: Option<String>,
    /// Calling application identifier.
    pub application_id: String,
    /// Host the request originates from.
    pub request_host: String,
}

/// Office lookup outcome.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfficesResponse {
    /// Whether any office matched.
    pub found: bool,
    /// Matching office identifiers, in registry order.
    pub offices: Vec<String>,
    /// Operator-facing summary.
    pub message: String,
}

impl OfficesResponse {
    fn new(offices: Vec<String>) -> Self {
        let message = if offices.is_empty() {
            "no offices found for the given criteria".to_owned()
        } else {
            format!("found {} office(s)", offices.len())
        };
        Self {
            found: !offices.is_empty(),
            offices,
            message,
        }
    }
}

/// Split a comma-separated label list, dropping separator whitespace and
/// empty segments. Labels themselves stay untouched; matching remains
/// case-sensitive.
fn split_labels(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .collect()
}

/// Look up offices for an externally-issued identifier.
///
/// Category labels and the caller context are validated locally; an invalid
/// label never reaches the registry. An absent or empty category filter is a
/// legitimate, unfiltered lookup.
#[utoipa::path(
    get,
    path = "/api/v1/offices",
    params(OfficeLookupQuery),
    responses(
        (status = 200, description = "Lookup outcome", body = OfficesResponse),
        (status = 400, description = "Invalid category or caller context", body = ApiError),
        (status = 422, description = "Registry rejected the lookup", body = ApiError),
        (status = 502, description = "Registry unreachable", body = ApiError)
    ),
    tags = ["offices"],
    operation_id = "findOffices"
)]
#[get("/offices")]
pub async fn find_offices(
    state: web::Data<HttpState>,
    query: web::Query<OfficeLookupQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let labels = query.categories.as_deref().map(split_labels).unwrap_or_default();
    let categories = OfficeCategory::parse_all(labels)?;
    let context = CallerContext::new(&query.application_id, &query.request_host)?;
    let offices = state
        .authorization
        .find_offices_by_external_id(&query.external_id, &categories, &context)
        .await?;
    Ok(HttpResponse::Ok().json(OfficesResponse::new(offices.to_vec())))
}

/// List the valid office category labels in canonical order.
///
/// Static catalog for client-side display; no remote call involved.
#[utoipa::path(
    get,
    path = "/api/v1/office-categories",
    responses(
        (status = 200, description = "Category labels in canonical order", body = [String])
    ),
    tags = ["offices"],
    operation_id = "listOfficeCategories"
)]
#[get("/office-categories")]
pub async fn list_office_categories() -> HttpResponse {
    let labels: Vec<&'static str> = OfficeCategory::ALL.iter().map(|c| c.label()).collect();
    HttpResponse::Ok().json(labels)
}
