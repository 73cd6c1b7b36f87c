//! The record in the shape the single-page application reads

use crate::auth0::Auth0Config;
use crate::error::ConfigurationError;
use crate::Environment;
use serde::{Deserialize, Serialize};

/// Frontend view of an [`Environment`], with the SPA's field names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FrontendEnvironment {
    pub production: bool,
    pub api_server_url: String,
    pub auth0: FrontendAuth0,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FrontendAuth0 {
    pub url: String,
    pub audience: String,
    pub client_id: String,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

impl FrontendEnvironment {
    /// Parse the frontend JSON shape into a validated [`Environment`].
    pub fn from_json(json: &str) -> Result<Environment, ConfigurationError> {
        let frontend: Self =
            serde_json::from_str(json).map_err(|e| ConfigurationError::ParseError {
                details: e.to_string(),
            })?;
        let env = Environment::from(frontend);
        env.validate()?;
        Ok(env)
    }
}

impl From<&Environment> for FrontendEnvironment {
    fn from(env: &Environment) -> Self {
        Self {
            production: env.production,
            api_server_url: env.api_server_url.clone(),
            auth0: FrontendAuth0 {
                url: env.auth0.url.clone(),
                audience: env.auth0.audience.clone(),
                client_id: env.auth0.client_id.clone(),
                callback_url: env.auth0.callback_url.clone(),
            },
        }
    }
}

impl From<FrontendEnvironment> for Environment {
    fn from(frontend: FrontendEnvironment) -> Self {
        Self {
            production: frontend.production,
            api_server_url: frontend.api_server_url,
            auth0: Auth0Config {
                url: frontend.auth0.url,
                audience: frontend.auth0.audience,
                client_id: frontend.auth0.client_id,
                callback_url: frontend.auth0.callback_url,
            },
        }
    }
}

impl Environment {
    pub fn to_frontend(&self) -> FrontendEnvironment {
        FrontendEnvironment::from(self)
    }

    /// Pretty JSON with the SPA's field names
    pub fn to_frontend_json(&self) -> Result<String, ConfigurationError> {
        serde_json::to_string_pretty(&self.to_frontend()).map_err(|e| {
            ConfigurationError::SerializeError {
                details: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    #[test]
    fn test_exact_field_set() {
        let json = Environment::development().to_frontend_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value,
            json!({
                "production": false,
                "apiServerUrl": "http://127.0.0.1:5000",
                "auth0": {
                    "url": "torquato",
                    "audience": "coffee-shop",
                    "clientId": "Adxqb4rbqTIoqxsETkJi6crFLk8oTief",
                    "callbackURL": "http://localhost:4200"
                }
            })
        );
    }

    #[test]
    fn test_from_json_rejects_unknown_and_missing_fields() {
        let extra = r#"{"production":false,"apiServerUrl":"http://a","auth0":{"url":"t","audience":"a","clientId":"c","callbackURL":"http://b"},"debug":true}"#;
        assert!(matches!(
            FrontendEnvironment::from_json(extra),
            Err(ConfigurationError::ParseError { .. })
        ));

        let missing = r#"{"production":false,"apiServerUrl":"http://a","auth0":{"url":"t","audience":"a","callbackURL":"http://b"}}"#;
        assert!(matches!(
            FrontendEnvironment::from_json(missing),
            Err(ConfigurationError::ParseError { .. })
        ));
    }

    #[test]
    fn test_from_json_validates() {
        let empty_client = r#"{"production":true,"apiServerUrl":"https://api.example","auth0":{"url":"t","audience":"a","clientId":"","callbackURL":"https://app.example"}}"#;
        assert_eq!(
            FrontendEnvironment::from_json(empty_client).unwrap_err(),
            ConfigurationError::MissingField {
                field: "auth0.clientId"
            }
        );
    }
}
