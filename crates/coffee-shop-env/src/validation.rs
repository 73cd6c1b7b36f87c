//! Checks consumers run before trusting an [`Environment`]

use crate::auth0::Auth0Config;
use crate::error::ConfigurationError;
use crate::Environment;
use url::Url;

impl Environment {
    /// Validate every field in declaration order, reporting the first failure.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        parse_http_url("apiServerUrl", &self.api_server_url)?;

        require("auth0.url", &self.auth0.url)?;
        validate_tenant(&self.auth0)?;
        require("auth0.audience", &self.auth0.audience)?;
        require("auth0.clientId", &self.auth0.client_id)?;
        parse_http_url("auth0.callbackURL", &self.auth0.callback_url)?;

        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ConfigurationError> {
    if value.trim().is_empty() {
        return Err(ConfigurationError::MissingField { field });
    }
    Ok(())
}

/// The tenant must name exactly the host the derived Auth0 URLs point at.
fn validate_tenant(auth0: &Auth0Config) -> Result<(), ConfigurationError> {
    let value = auth0.url.as_str();
    let invalid = |reason: &str| ConfigurationError::InvalidValue {
        field: "auth0.url",
        value: value.to_string(),
        reason: reason.to_string(),
    };

    if value.contains("://") {
        return Err(invalid("expected a tenant prefix or domain, not a URL"));
    }
    if value.contains('/') {
        return Err(invalid("must not contain a path or trailing slash"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }

    let domain = auth0.domain();
    let url = Url::parse(&format!("https://{domain}/"))
        .map_err(|e| invalid(&format!("not a valid host: {e}")))?;
    let same_host = url
        .host_str()
        .is_some_and(|host| host.eq_ignore_ascii_case(&domain));
    if !same_host
        || !url.username().is_empty()
        || url.password().is_some()
        || url.port().is_some()
        || url.query().is_some()
        || url.fragment().is_some()
    {
        return Err(invalid("not a valid host"));
    }
    Ok(())
}

/// Parse an absolute `http`/`https` URL with a host.
pub(crate) fn parse_http_url(field: &'static str, value: &str) -> Result<Url, ConfigurationError> {
    require(field, value)?;

    let invalid = |reason: String| ConfigurationError::InvalidUrl {
        field,
        value: value.to_string(),
        reason,
    };

    if value.trim() != value {
        return Err(invalid("surrounding whitespace".to_string()));
    }
    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url)
}
