//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates every facade endpoint and the adapter-layer DTO
//! schemas. The generated document is served by Swagger UI in debug builds
//! and exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http;

/// OpenAPI document for the gateway REST facade.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Authorization gateway API",
        description = "Typed REST facade over the remote authorization registry."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        http::health::check_health,
        http::health::live,
        http::health::ready,
        http::identity::search_identity,
        http::identity::advanced_search,
        http::offices::find_offices,
        http::offices::list_office_categories,
        http::users::find_users,
        http::roles::get_roles,
    ),
    components(schemas(
        http::dto::IdentityDto,
        http::error::ApiError,
        http::error::ErrorCode,
        http::health::HealthResponse,
        http::identity::AdvancedSearchRequest,
        http::identity::CriterionMapBody,
        http::identity::IdentitySearchResponse,
        http::offices::OfficesResponse,
        http::roles::RoleLookupRequest,
        http::roles::RolesResponse,
        http::users::UsersResponse,
    )),
    tags(
        (name = "health", description = "Registry and process health probes"),
        (name = "identity", description = "Identity search operations"),
        (name = "offices", description = "Office lookups and the category catalog"),
        (name = "users", description = "User lookups by office and role"),
        (name = "roles", description = "Role retrieval for identities")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! The generated document must reference every facade path.

    use utoipa::OpenApi;

    use super::*;

    #[test]
    fn every_facade_path_is_documented() {
        let document = ApiDoc::openapi();
        let paths: Vec<&String> = document.paths.paths.keys().collect();
        for expected in [
            "/api/v1/health",
            "/health/live",
            "/health/ready",
            "/api/v1/identity/search",
            "/api/v1/identity/advanced-search",
            "/api/v1/offices",
            "/api/v1/office-categories",
            "/api/v1/users",
            "/api/v1/roles",
        ] {
            assert!(
                paths.iter().any(|path| path.as_str() == expected),
                "missing path {expected} in {paths:?}"
            );
        }
    }
}
