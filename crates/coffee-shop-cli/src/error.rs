//! Error types for the coffee-env CLI

use color_eyre::eyre::Report;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or validating the environment failed
    #[error(transparent)]
    Config(#[from] coffee_shop_env::ConfigurationError),

    /// Writing output failed
    #[error("Failed to write output")]
    Io(#[from] std::io::Error),

    /// Everything else
    #[error(transparent)]
    Internal(#[from] Report),
}

pub type Result<T> = std::result::Result<T, CliError>;
