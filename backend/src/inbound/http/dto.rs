//! Response DTOs shared between facade endpoints.
//!
//! Domain types stay framework-agnostic; anything that needs an OpenAPI
//! schema is mirrored here in the adapter layer.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Identity;

/// Identity payload returned to facade clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDto {
    /// Authentication system identifier; empty when the registry holds none.
    pub authentication_system_id: String,
    /// Authorization system identifier; empty when the registry holds none.
    pub authorization_system_id: String,
    /// Login name of the principal.
    #[schema(example = "jdoe")]
    pub login_name: String,
}

impl From<Identity> for IdentityDto {
    fn from(identity: Identity) -> Self {
        Self {
            authentication_system_id: identity.authentication_system_id,
            authorization_system_id: identity.authorization_system_id,
            login_name: identity.login_name,
        }
    }
}
