//! Remote registry client: one round trip per operation, fault translation.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::criteria::CriterionEntry;
use crate::domain::error::AuthorizationError;
use crate::domain::identity::{CallerContext, Identity};
use crate::domain::list::StringList;
use crate::domain::office::OfficeCategory;
use crate::domain::ports::{AuthorizationTransport, InvokeError};
use crate::domain::protocol::{self, operations};

/// Roles granted to an identity, with the registry's identity echo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGrant {
    /// Corrected identity echoed by the registry, when it supplies one; the
    /// caller's original identity is authoritative otherwise.
    pub identity: Option<Identity>,
    /// Granted role names.
    pub roles: StringList,
}

/// Client for the remote authorization registry.
///
/// Holds only a transport handle. Inputs are trusted to have been validated
/// already; every operation performs exactly one remote round trip with no
/// retry, and the client keeps no state across calls, so one instance can be
/// shared freely between concurrent callers.
#[derive(Clone)]
pub struct AuthorizationClient {
    transport: Arc<dyn AuthorizationTransport>,
}

impl AuthorizationClient {
    /// Create a client over the given transport.
    pub fn new(transport: Arc<dyn AuthorizationTransport>) -> Self {
        Self { transport }
    }

    async fn call<Req, Resp>(
        &self,
        operation: &str,
        request: &Req,
    ) -> Result<Resp, AuthorizationError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let payload =
            serde_json::to_value(request).map_err(|err| AuthorizationError::Transport {
                message: format!("failed to encode {operation} payload: {err}"),
            })?;
        let document = self
            .transport
            .invoke(operation, payload)
            .await
            .map_err(map_invoke_error)?;
        serde_json::from_value(document).map_err(|err| AuthorizationError::Transport {
            message: format!("malformed {operation} response: {err}"),
        })
    }

    /// Find the identity matching the given ordered criteria.
    ///
    /// `None` is the normal no-match outcome, not an error; not every
    /// search finds a record.
    ///
    /// # Errors
    ///
    /// [`AuthorizationError::RemoteFault`] when the registry rejects the
    /// search; [`AuthorizationError::Transport`] when it cannot be reached
    /// or answers unusably.
    pub async fn find_matching_identity(
        &self,
        entries: &[CriterionEntry],
    ) -> Result<Option<Identity>, AuthorizationError> {
        debug!(
            entry_count = entries.len(),
            "searching registry for a matching identity"
        );
        let request = protocol::FindMatchingIdentityRequest {
            entries: entries.to_vec(),
        };
        let response: protocol::FindMatchingIdentityResponse =
            self.call(operations::FIND_MATCHING_IDENTITY, &request).await?;
        debug!(found = response.identity.is_some(), "identity search finished");
        Ok(response.identity)
    }

    /// Look up office identifiers for an externally-issued identity id.
    ///
    /// An empty category list is a legitimate, unfiltered lookup.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::find_matching_identity`].
    pub async fn find_offices_by_external_id(
        &self,
        external_id: &str,
        categories: &[OfficeCategory],
        context: &CallerContext,
    ) -> Result<StringList, AuthorizationError> {
        debug!(
            external_id,
            category_count = categories.len(),
            "looking up offices"
        );
        let request = protocol::FindOfficesRequest {
            external_id: external_id.to_owned(),
            categories: categories.to_vec(),
            context: context.clone(),
        };
        let response: protocol::FindOfficesResponse = self
            .call(operations::FIND_OFFICES_BY_EXTERNAL_ID, &request)
            .await?;
        Ok(response.offices.unwrap_or_default())
    }

    /// Look up users holding `role_name` in `office_id`.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::find_matching_identity`].
    pub async fn find_users_by_criteria(
        &self,
        office_id: &str,
        role_name: &str,
        context: &CallerContext,
    ) -> Result<StringList, AuthorizationError> {
        debug!(office_id, role_name, "looking up users");
        let request = protocol::FindUsersRequest {
            office_id: office_id.to_owned(),
            role_name: role_name.to_owned(),
            context: context.clone(),
        };
        let response: protocol::FindUsersResponse =
            self.call(operations::FIND_USERS_BY_CRITERIA, &request).await?;
        Ok(response.users.unwrap_or_default())
    }

    /// Retrieve the roles granted to an identity.
    ///
    /// The registry may echo back a corrected identity; when it does not,
    /// callers should treat their original identity as authoritative.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::find_matching_identity`].
    pub async fn get_roles(&self, identity: &Identity) -> Result<RoleGrant, AuthorizationError> {
        debug!(login_name = %identity.login_name, "retrieving roles");
        let request = protocol::GetRolesRequest {
            identity: identity.clone(),
        };
        let response: protocol::GetRolesResponse =
            self.call(operations::GET_ROLES, &request).await?;
        let roles = response.roles.unwrap_or_default();
        debug!(role_count = roles.count(), "role retrieval finished");
        Ok(RoleGrant {
            identity: response.identity,
            roles,
        })
    }

    /// Probe registry health.
    ///
    /// Every failure, whether fault, transport, or malformed response, is
    /// logged and reported as `false`. This probe never raises to its
    /// caller; that is the contract, not an oversight.
    pub async fn check_health(&self) -> bool {
        let request = protocol::IsHealthyRequest {};
        match self
            .call::<_, protocol::IsHealthyResponse>(operations::IS_HEALTHY, &request)
            .await
        {
            Ok(response) => response.healthy,
            Err(err) => {
                warn!(error = %err, "registry health probe failed");
                false
            }
        }
    }
}

fn map_invoke_error(error: InvokeError) -> AuthorizationError {
    match error {
        InvokeError::Fault { code, reason } => AuthorizationError::RemoteFault { code, reason },
        InvokeError::Transport { message } => AuthorizationError::Transport { message },
    }
}
