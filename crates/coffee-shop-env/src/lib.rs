//! Environment configuration for the Coffee Shop single-page application
//!
//! The record holds the build-mode flag, the API base URL and the Auth0
//! settings the frontend bootstraps with. One variant is compiled into each
//! build; [`Environment::load`] layers a TOML file and `COFFEE_SHOP_*`
//! variables on top of it.

pub mod api;
pub mod auth0;
pub mod constants;
mod de;
pub mod environment;
pub mod error;
pub mod frontend;
mod loader;
pub mod logging;
mod validation;

pub use api::ApiRoute;
pub use auth0::Auth0Config;
pub use environment::{active, BuildMode, Environment};
pub use error::ConfigurationError;
pub use frontend::FrontendEnvironment;
