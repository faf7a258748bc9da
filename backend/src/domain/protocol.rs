//! Wire payloads for the registry's named operations.
//!
//! The registry speaks a document-style request/response protocol. These are
//! the hand-defined value structs the client serializes against: the
//! versioned interface contract with the remote schema. The envelope that
//! names an operation is owned entirely by the transport adapter; everything
//! here is the bare payload. Field names follow the registry schema
//! (camelCase).

use serde::{Deserialize, Serialize};

use crate::domain::criteria::CriterionEntry;
use crate::domain::identity::{CallerContext, Identity};
use crate::domain::list::StringList;
use crate::domain::office::OfficeCategory;

/// Operation names understood by the registry.
pub mod operations {
    /// Identity search over ordered criterion entries.
    pub const FIND_MATCHING_IDENTITY: &str = "findMatchingIdentity";
    /// Office lookup by externally-issued identifier.
    pub const FIND_OFFICES_BY_EXTERNAL_ID: &str = "findOfficesByExternalId";
    /// User lookup by office and role.
    pub const FIND_USERS_BY_CRITERIA: &str = "findUsersByCriteria";
    /// Role retrieval for one identity.
    pub const GET_ROLES: &str = "getRoles";
    /// Registry liveness probe.
    pub const IS_HEALTHY: &str = "isHealthy";
}

/// Request payload for [`operations::FIND_MATCHING_IDENTITY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchingIdentityRequest {
    /// Ordered search constraints.
    pub entries: Vec<CriterionEntry>,
}

/// Response payload for [`operations::FIND_MATCHING_IDENTITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchingIdentityResponse {
    /// The matched identity; absent means no match, a normal outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
}

/// Request payload for [`operations::FIND_OFFICES_BY_EXTERNAL_ID`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindOfficesRequest {
    /// Externally-issued identifier the offices are keyed by.
    pub external_id: String,
    /// Category filter; an empty list means an unfiltered lookup.
    pub categories: Vec<OfficeCategory>,
    /// Caller provenance.
    pub context: CallerContext,
}

/// Response payload for [`operations::FIND_OFFICES_BY_EXTERNAL_ID`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindOfficesResponse {
    /// Matching office identifiers; absent is logically empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offices: Option<StringList>,
}

/// Request payload for [`operations::FIND_USERS_BY_CRITERIA`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindUsersRequest {
    /// Office whose membership is being queried.
    pub office_id: String,
    /// Role the users must hold.
    pub role_name: String,
    /// Caller provenance.
    pub context: CallerContext,
}

/// Response payload for [`operations::FIND_USERS_BY_CRITERIA`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindUsersResponse {
    /// Matching user identifiers; absent is logically empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<StringList>,
}

/// Request payload for [`operations::GET_ROLES`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRolesRequest {
    /// Identity whose roles are requested.
    pub identity: Identity,
}

/// Response payload for [`operations::GET_ROLES`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRolesResponse {
    /// Corrected identity echoed back by the registry, when it supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
    /// Granted role names; absent is logically empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<StringList>,
}

/// Request payload for [`operations::IS_HEALTHY`]; carries nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsHealthyRequest {}

/// Response payload for [`operations::IS_HEALTHY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsHealthyResponse {
    /// Whether the registry reports itself able to serve.
    pub healthy: bool,
}
