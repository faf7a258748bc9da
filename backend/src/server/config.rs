//! Gateway configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Configuration values for the gateway process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GATEWAY")]
pub struct GatewaySettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Base URL of the remote registry. When unset the fixture transport is
    /// wired instead, which keeps local development self-contained.
    pub registry_endpoint: Option<String>,
    /// Connect/read timeout for registry calls, in seconds; one value
    /// applied symmetrically to both phases.
    pub timeout_seconds: Option<u64>,
}

impl GatewaySettings {
    /// Bind address, falling back to the default.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Registry call timeout, falling back to 30 seconds.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }
}

#[cfg(test)]
mod tests {
    //! Configuration parsing under a locked environment.

    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    fn load_from_empty_args() -> GatewaySettings {
        GatewaySettings::load_from_iter([OsString::from("backend")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_configured() {
        let _guard = lock_env([
            ("GATEWAY_BIND_ADDR", None::<String>),
            ("GATEWAY_REGISTRY_ENDPOINT", None::<String>),
            ("GATEWAY_TIMEOUT_SECONDS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080");
        assert_eq!(settings.timeout(), Duration::from_secs(30));
        assert!(settings.registry_endpoint.is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("GATEWAY_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            (
                "GATEWAY_REGISTRY_ENDPOINT",
                Some("https://registry.example.org/authz".to_owned()),
            ),
            ("GATEWAY_TIMEOUT_SECONDS", Some("5".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "127.0.0.1:9090");
        assert_eq!(settings.timeout(), Duration::from_secs(5));
        assert_eq!(
            settings.registry_endpoint.as_deref(),
            Some("https://registry.example.org/authz")
        );
    }
}
