//! URLs of the backend API routes

use crate::error::ConfigurationError;
use crate::Environment;
use std::fmt;
use url::Url;

/// Routes served by the drinks API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiRoute {
    /// `GET /drinks`, public short listing
    ListDrinks,
    /// `GET /drinks-detail`
    DrinksDetail,
    /// `POST /drinks`
    CreateDrink,
    /// `PATCH /drinks/{id}`
    UpdateDrink(u64),
    /// `DELETE /drinks/{id}`
    DeleteDrink(u64),
}

impl ApiRoute {
    pub fn method(&self) -> &'static str {
        match self {
            Self::ListDrinks | Self::DrinksDetail => "GET",
            Self::CreateDrink => "POST",
            Self::UpdateDrink(_) => "PATCH",
            Self::DeleteDrink(_) => "DELETE",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::ListDrinks | Self::CreateDrink => "/drinks".to_string(),
            Self::DrinksDetail => "/drinks-detail".to_string(),
            Self::UpdateDrink(id) | Self::DeleteDrink(id) => format!("/drinks/{id}"),
        }
    }

    /// Permission an access token needs to call the route
    pub fn permission(&self) -> Option<&'static str> {
        match self {
            Self::ListDrinks => None,
            Self::DrinksDetail => Some("get:drinks-detail"),
            Self::CreateDrink => Some("post:drinks"),
            Self::UpdateDrink(_) => Some("patch:drinks"),
            Self::DeleteDrink(_) => Some("delete:drinks"),
        }
    }
}

impl fmt::Display for ApiRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

impl Environment {
    /// Join a relative `path` onto the API base URL, keeping any base path.
    ///
    /// Absolute URLs and paths that climb above the base are rejected.
    pub fn endpoint(&self, path: &str) -> Result<Url, ConfigurationError> {
        let invalid = |reason: String| ConfigurationError::InvalidValue {
            field: "path",
            value: path.to_string(),
            reason,
        };

        if Url::parse(path).is_ok() {
            return Err(invalid("expected a path, not an absolute URL".to_string()));
        }

        let mut base = self.api_server_url()?;
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }

        let joined = base
            .join(path.trim_start_matches('/'))
            .map_err(|e| invalid(e.to_string()))?;
        if joined.origin() != base.origin() || !joined.path().starts_with(base.path()) {
            return Err(invalid("leaves the API base URL".to_string()));
        }
        Ok(joined)
    }

    pub fn route_url(&self, route: &ApiRoute) -> Result<Url, ConfigurationError> {
        self.endpoint(&route.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_on_root_base() {
        let env = Environment::development();
        assert_eq!(
            env.endpoint("/drinks").unwrap().as_str(),
            "http://127.0.0.1:5000/drinks"
        );
        assert_eq!(
            env.endpoint("drinks-detail").unwrap().as_str(),
            "http://127.0.0.1:5000/drinks-detail"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let mut env = Environment::development();
        env.api_server_url = "https://coffee.example/api".to_string();
        assert_eq!(
            env.endpoint("/drinks/3").unwrap().as_str(),
            "https://coffee.example/api/drinks/3"
        );
    }

    #[test]
    fn test_endpoint_stays_under_base() {
        let mut env = Environment::development();
        env.api_server_url = "https://coffee.example/api".to_string();

        for bad in [
            "https://evil.example/x",
            "../admin",
            "drinks/../../admin",
            "%2e%2e/admin",
        ] {
            let err = env.endpoint(bad).unwrap_err();
            assert_eq!(err.field(), Some("path"), "{bad} should be rejected");
        }

        assert_eq!(
            env.endpoint("drinks/../drinks-detail").unwrap().as_str(),
            "https://coffee.example/api/drinks-detail"
        );
    }

    #[test]
    fn test_route_permissions() {
        assert_eq!(ApiRoute::ListDrinks.permission(), None);
        assert_eq!(
            ApiRoute::DrinksDetail.permission(),
            Some("get:drinks-detail")
        );
        assert_eq!(ApiRoute::DeleteDrink(7).permission(), Some("delete:drinks"));
        assert_eq!(ApiRoute::UpdateDrink(7).to_string(), "PATCH /drinks/7");
    }

    #[test]
    fn test_route_url() {
        let env = Environment::development();
        let url = env.route_url(&ApiRoute::DeleteDrink(12)).unwrap();
        assert_eq!(url.path(), "/drinks/12");
    }

    #[test]
    fn test_endpoint_requires_valid_base() {
        let mut env = Environment::development();
        env.api_server_url = "nope".to_string();
        assert_eq!(env.endpoint("/drinks").unwrap_err().field(), Some("apiServerUrl"));
    }
}
