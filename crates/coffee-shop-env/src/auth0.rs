//! Auth0 settings and the endpoints derived from them

use crate::constants::{AUTH0_DOMAIN_SUFFIX, SIGNING_ALGORITHMS};
use crate::de::scalar_string;
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Identity provider configuration for the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auth0Config {
    /// Tenant prefix, or a full tenant domain when it contains a dot
    #[serde(deserialize_with = "scalar_string")]
    pub url: String,

    /// API identifier issued tokens must target
    #[serde(deserialize_with = "scalar_string")]
    pub audience: String,

    /// Public client ID of the frontend application
    #[serde(deserialize_with = "scalar_string")]
    pub client_id: String,

    /// Where Auth0 sends the browser back after login
    #[serde(deserialize_with = "scalar_string")]
    pub callback_url: String,
}

impl Auth0Config {
    /// Tenant domain, e.g. `torquato.auth0.com`
    pub fn domain(&self) -> String {
        let url = self.url.as_str();
        if url.contains('.') {
            url.to_string()
        } else {
            format!("{url}.{AUTH0_DOMAIN_SUFFIX}")
        }
    }

    /// Expected `iss` claim of tokens issued by the tenant
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain())
    }

    /// Algorithms access tokens from the tenant are signed with
    pub fn signing_algorithms(&self) -> &'static [&'static str] {
        SIGNING_ALGORITHMS
    }

    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.domain())
    }

    /// Parsed callback URL
    pub fn callback_url(&self) -> Result<Url, ConfigurationError> {
        crate::validation::parse_http_url("auth0.callbackURL", &self.callback_url)
    }

    /// Login link for the implicit flow the frontend starts
    pub fn authorize_url(&self) -> Result<Url, ConfigurationError> {
        let mut url = self.endpoint("authorize")?;
        url.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.callback_url);
        Ok(url)
    }

    pub fn logout_url(&self) -> Result<Url, ConfigurationError> {
        let mut url = self.endpoint("v2/logout")?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("returnTo", &self.callback_url);
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ConfigurationError> {
        let raw = format!("https://{}/{path}", self.domain());
        Url::parse(&raw).map_err(|e| ConfigurationError::InvalidUrl {
            field: "auth0.url",
            value: self.url.clone(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Environment;

    #[test]
    fn test_domain_from_prefix() {
        let auth0 = Environment::development().auth0;
        assert_eq!(auth0.domain(), "torquato.auth0.com");
        assert_eq!(auth0.issuer(), "https://torquato.auth0.com/");
        assert_eq!(
            auth0.jwks_url(),
            "https://torquato.auth0.com/.well-known/jwks.json"
        );
        assert_eq!(auth0.signing_algorithms(), &["RS256"]);
    }

    #[test]
    fn test_domain_kept_when_fully_qualified() {
        let mut auth0 = Environment::development().auth0;
        auth0.url = "coffee.eu.auth0.com".to_string();
        assert_eq!(auth0.domain(), "coffee.eu.auth0.com");
    }

    #[test]
    fn test_authorize_url() {
        let auth0 = Environment::development().auth0;
        let url = auth0.authorize_url().unwrap();

        assert_eq!(url.host_str(), Some("torquato.auth0.com"));
        assert_eq!(url.path(), "/authorize");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("audience".to_string(), "coffee-shop".to_string()),
                ("response_type".to_string(), "token".to_string()),
                (
                    "client_id".to_string(),
                    "Adxqb4rbqTIoqxsETkJi6crFLk8oTief".to_string()
                ),
                (
                    "redirect_uri".to_string(),
                    "http://localhost:4200".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_logout_url() {
        let auth0 = Environment::development().auth0;
        let url = auth0.logout_url().unwrap();
        assert_eq!(url.path(), "/v2/logout");
        assert!(url
            .query_pairs()
            .any(|(k, v)| k == "returnTo" && v == "http://localhost:4200"));
    }

    #[test]
    fn test_invalid_tenant_rejected() {
        let mut auth0 = Environment::development().auth0;
        auth0.url = "bad tenant".to_string();
        let err = auth0.authorize_url().unwrap_err();
        assert_eq!(err.field(), Some("auth0.url"));
    }
}
