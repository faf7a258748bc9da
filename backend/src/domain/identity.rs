//! Principals and caller provenance.
//!
//! Both types are transient per-call value objects. Construction is the only
//! place validation happens; the remote client trusts whatever it receives.

use serde::{Deserialize, Serialize};

use crate::domain::error::ValidationError;

/// A caller-identified principal in the authorization domain.
///
/// ## Invariants
/// - `login_name` is non-empty after trimming.
/// - The two system-identifier fields are empty strings when unsupplied,
///   never absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Identifier of the authentication system that knows this principal.
    #[serde(default)]
    pub authentication_system_id: String,
    /// Identifier of the authorization system that grants this principal
    /// roles.
    #[serde(default)]
    pub authorization_system_id: String,
    /// Login name of the principal.
    pub login_name: String,
}

impl Identity {
    /// Build a validated identity from caller-supplied fragments.
    ///
    /// All fields are trimmed; absent system identifiers become empty
    /// strings.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequiredField`] when `login_name`
    /// is empty after trimming.
    pub fn new(
        authentication_system_id: Option<&str>,
        authorization_system_id: Option<&str>,
        login_name: &str,
    ) -> Result<Self, ValidationError> {
        let login_name = login_name.trim();
        if login_name.is_empty() {
            return Err(ValidationError::MissingRequiredField { field: "loginName" });
        }
        Ok(Self {
            authentication_system_id: authentication_system_id
                .unwrap_or_default()
                .trim()
                .to_owned(),
            authorization_system_id: authorization_system_id
                .unwrap_or_default()
                .trim()
                .to_owned(),
            login_name: login_name.to_owned(),
        })
    }
}

/// Caller provenance attached to every privileged registry call.
///
/// Both fields are mandatory; constructing a context with a blank value
/// fails before any remote call is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerContext {
    /// Identifier of the calling application.
    pub application_id: String,
    /// Host the request originated from.
    pub request_host: String,
}

impl CallerContext {
    /// Build a validated caller context, trimming both fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequiredField`] naming whichever
    /// field is empty after trimming.
    pub fn new(application_id: &str, request_host: &str) -> Result<Self, ValidationError> {
        let application_id = application_id.trim();
        if application_id.is_empty() {
            return Err(ValidationError::MissingRequiredField {
                field: "applicationId",
            });
        }
        let request_host = request_host.trim();
        if request_host.is_empty() {
            return Err(ValidationError::MissingRequiredField {
                field: "requestHost",
            });
        }
        Ok(Self {
            application_id: application_id.to_owned(),
            request_host: request_host.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    //! Constructor validation coverage.

    use rstest::rstest;

    use super::*;
    use crate::domain::error::ValidationError;

    #[test]
    fn identity_defaults_missing_system_ids_to_empty_strings() {
        let identity = Identity::new(None, None, "alice").expect("login name is present");
        assert_eq!(identity.authentication_system_id, "");
        assert_eq!(identity.authorization_system_id, "");
        assert_eq!(identity.login_name, "alice");
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace_only("  ")]
    fn identity_rejects_blank_login_names(#[case] login_name: &str) {
        let err = Identity::new(None, None, login_name).expect_err("blank login must fail");
        assert_eq!(
            err,
            ValidationError::MissingRequiredField { field: "loginName" }
        );
    }

    #[test]
    fn identity_trims_every_field() {
        let identity =
            Identity::new(Some(" auth "), Some(" authz "), " alice ").expect("fields are present");
        assert_eq!(identity.authentication_system_id, "auth");
        assert_eq!(identity.authorization_system_id, "authz");
        assert_eq!(identity.login_name, "alice");
    }

    #[rstest]
    #[case::blank_application("", "host", "applicationId")]
    #[case::blank_host("app", "", "requestHost")]
    #[case::whitespace_application("   ", "host", "applicationId")]
    fn caller_context_rejects_blank_fields(
        #[case] application_id: &str,
        #[case] request_host: &str,
        #[case] expected_field: &'static str,
    ) {
        let err = CallerContext::new(application_id, request_host)
            .expect_err("blank mandatory field must fail");
        assert_eq!(
            err,
            ValidationError::MissingRequiredField {
                field: expected_field
            }
        );
    }

    #[test]
    fn caller_context_trims_both_fields() {
        let context = CallerContext::new(" app ", " host ").expect("fields are present");
        assert_eq!(context.application_id, "app");
        assert_eq!(context.request_host, "host");
    }
}
