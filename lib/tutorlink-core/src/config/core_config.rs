use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};
use url::Url;

use super::{ConfigError, ConfigParsingError, ConfigValidationError};
use crate::wizard::ValidationPolicy;

/// Runtime configuration of the core. Defaults are embedded; every field
/// can be overridden through `TUTORLINK_`-prefixed environment variables
/// (`TUTORLINK_API__BASE_URL`, `TUTORLINK_API__REQUEST_TIMEOUT_SECS`, ...).
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub wizard_policy: ValidationPolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/v1".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl CoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let config: CoreConfig = Figment::from(Serialized::defaults(CoreConfig::default()))
            .merge(Env::prefixed("TUTORLINK_").split("__"))
            .extract()
            .map_err(ConfigParsingError::from)?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        Url::parse(&self.api.base_url).map_err(|source| {
            ConfigValidationError::InvalidBaseUrl {
                url: self.api.base_url.clone(),
                source,
            }
        })?;

        if self.api.request_timeout_secs == 0 {
            return Err(ConfigValidationError::ZeroTimeout);
        }
        Ok(())
    }
}

impl ApiConfig {
    /// Join an endpoint path onto the configured base url.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CoreConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.validation.wizard_policy, ValidationPolicy::EveryStep);
    }

    #[test]
    fn test_endpoint_joins_without_duplicate_slash() {
        let api = ApiConfig {
            base_url: "https://api.example.com/".to_string(),
            request_timeout_secs: 30,
        };
        assert_eq!(
            api.endpoint("/enquiry/myapplications"),
            "https://api.example.com/enquiry/myapplications"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = CoreConfig {
            api: ApiConfig {
                base_url: "not a url".to_string(),
                request_timeout_secs: 30,
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("TUTORLINK_API__BASE_URL", "https://api.tutorlink.in/v1");
            jail.set_env("TUTORLINK_VALIDATION__WIZARD_POLICY", "\"AT_SUBMIT_ONLY\"");

            let config = CoreConfig::from_env().expect("config loads");
            assert_eq!(config.api.base_url, "https://api.tutorlink.in/v1");
            assert_eq!(
                config.validation.wizard_policy,
                ValidationPolicy::AtSubmitOnly
            );
            Ok(())
        });
    }
}
