//! The environment record consumed by the frontend bootstrap
//!
//! Exactly one variant is compiled into a build: the development one by
//! default, the production one when the `production` feature is enabled.

use crate::auth0::Auth0Config;
use crate::constants::*;
use crate::de::scalar_string;
use crate::error::ConfigurationError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

static ACTIVE: Lazy<Environment> = Lazy::new(Environment::compiled);

/// The variant compiled into this build, created on first access.
pub fn active() -> &'static Environment {
    &ACTIVE
}

/// Build variant an [`Environment`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Mode selected by the `production` feature
    pub const fn compiled() -> Self {
        if cfg!(feature = "production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl FromStr for BuildMode {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigurationError::InvalidBuildMode(other.to_string())),
        }
    }
}

/// Environment configuration for the Coffee Shop frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Whether the build targets production
    pub production: bool,

    /// Base URL of the backend HTTP API
    #[serde(deserialize_with = "scalar_string")]
    pub api_server_url: String,

    /// Identity provider settings
    pub auth0: Auth0Config,
}

impl Environment {
    pub fn development() -> Self {
        Self {
            production: false,
            api_server_url: DEV_API_SERVER_URL.to_string(),
            auth0: Auth0Config {
                url: DEV_AUTH0_URL.to_string(),
                audience: DEV_AUTH0_AUDIENCE.to_string(),
                client_id: DEV_AUTH0_CLIENT_ID.to_string(),
                callback_url: DEV_AUTH0_CALLBACK_URL.to_string(),
            },
        }
    }

    pub fn production() -> Self {
        Self {
            production: true,
            api_server_url: PROD_API_SERVER_URL.to_string(),
            auth0: Auth0Config {
                url: PROD_AUTH0_URL.to_string(),
                audience: PROD_AUTH0_AUDIENCE.to_string(),
                client_id: PROD_AUTH0_CLIENT_ID.to_string(),
                callback_url: PROD_AUTH0_CALLBACK_URL.to_string(),
            },
        }
    }

    pub fn for_mode(mode: BuildMode) -> Self {
        match mode {
            BuildMode::Development => Self::development(),
            BuildMode::Production => Self::production(),
        }
    }

    /// The variant selected for this build
    pub fn compiled() -> Self {
        Self::for_mode(BuildMode::compiled())
    }

    pub fn mode(&self) -> BuildMode {
        if self.production {
            BuildMode::Production
        } else {
            BuildMode::Development
        }
    }

    /// Parsed API base URL
    pub fn api_server_url(&self) -> Result<Url, ConfigurationError> {
        crate::validation::parse_http_url("apiServerUrl", &self.api_server_url)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::compiled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_instance() {
        let env = Environment::development();
        assert!(!env.production);
        assert_eq!(env.api_server_url, "http://127.0.0.1:5000");
        assert_eq!(env.auth0.url, "torquato");
        assert_eq!(env.auth0.audience, "coffee-shop");
        assert_eq!(env.auth0.client_id, "Adxqb4rbqTIoqxsETkJi6crFLk8oTief");
        assert_eq!(env.auth0.callback_url, "http://localhost:4200");
        assert_eq!(env.mode(), BuildMode::Development);
    }

    #[test]
    fn test_production_flag_is_exclusive() {
        assert!(Environment::production().production);
        assert!(!Environment::development().production);
        assert_eq!(Environment::production().mode(), BuildMode::Production);
        assert!(Environment::for_mode(BuildMode::Production).mode().is_production());
    }

    #[test]
    fn test_compiled_matches_feature() {
        let env = Environment::compiled();
        assert_eq!(env.production, cfg!(feature = "production"));
        assert_eq!(env, Environment::default());
    }

    #[test]
    fn test_active_is_stable() {
        let first = active();
        let second = active();
        assert!(std::ptr::eq(first, second));
        assert_eq!(*first, Environment::compiled());
    }

    #[test]
    fn test_build_mode_parsing() {
        assert_eq!("dev".parse::<BuildMode>().unwrap(), BuildMode::Development);
        assert_eq!(
            " Production ".parse::<BuildMode>().unwrap(),
            BuildMode::Production
        );
        assert!(matches!(
            "staging".parse::<BuildMode>(),
            Err(ConfigurationError::InvalidBuildMode(_))
        ));
        assert_eq!(BuildMode::Production.to_string(), "production");
    }

    #[test]
    fn test_api_server_url_parses() {
        let url = Environment::development().api_server_url().unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("127.0.0.1"));
        assert_eq!(url.port(), Some(5000));
    }
}
