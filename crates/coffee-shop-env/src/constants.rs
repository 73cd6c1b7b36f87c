//! Compiled-in environment values for the Coffee Shop frontend
//!
//! The development values are literals. The production values are read at
//! compile time from `COFFEE_SHOP_PROD_*` variables (see `build.rs`) and fall
//! back to the development literal for any variable left unset.

/// Base URL of the Flask API during local development
pub const DEV_API_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Auth0 tenant prefix
pub const DEV_AUTH0_URL: &str = "torquato";

/// Audience set for the Auth0 API
pub const DEV_AUTH0_AUDIENCE: &str = "coffee-shop";

/// Client ID generated for the Auth0 application
pub const DEV_AUTH0_CLIENT_ID: &str = "Adxqb4rbqTIoqxsETkJi6crFLk8oTief";

/// Base URL of the locally served frontend
pub const DEV_AUTH0_CALLBACK_URL: &str = "http://localhost:4200";

pub const PROD_API_SERVER_URL: &str = or_dev(
    option_env!("COFFEE_SHOP_PROD_API_SERVER_URL"),
    DEV_API_SERVER_URL,
);
pub const PROD_AUTH0_URL: &str = or_dev(option_env!("COFFEE_SHOP_PROD_AUTH0_URL"), DEV_AUTH0_URL);
pub const PROD_AUTH0_AUDIENCE: &str = or_dev(
    option_env!("COFFEE_SHOP_PROD_AUTH0_AUDIENCE"),
    DEV_AUTH0_AUDIENCE,
);
pub const PROD_AUTH0_CLIENT_ID: &str = or_dev(
    option_env!("COFFEE_SHOP_PROD_AUTH0_CLIENT_ID"),
    DEV_AUTH0_CLIENT_ID,
);
pub const PROD_AUTH0_CALLBACK_URL: &str = or_dev(
    option_env!("COFFEE_SHOP_PROD_AUTH0_CALLBACK_URL"),
    DEV_AUTH0_CALLBACK_URL,
);

/// Suffix appended to the tenant prefix to form the Auth0 domain
pub const AUTH0_DOMAIN_SUFFIX: &str = "auth0.com";

/// Algorithms Auth0 signs access tokens with for this tenant
pub const SIGNING_ALGORITHMS: &[&str] = &["RS256"];

/// Prefix of the environment variables that override loaded values
pub const ENV_PREFIX: &str = "COFFEE_SHOP_";

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "coffee-shop.toml";

const fn or_dev(value: Option<&'static str>, fallback: &'static str) -> &'static str {
    match value {
        Some(value) => value,
        None => fallback,
    }
}
