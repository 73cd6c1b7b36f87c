use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the loaded configuration
    Show {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,
    },

    /// Check that the configuration is usable
    Validate,

    /// Write the configuration in the shape the frontend reads
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the Auth0 login link
    LoginUrl,

    /// Print the Auth0 logout link
    LogoutUrl,

    /// Print the API URL for a path
    Endpoint {
        /// Path relative to the API base URL, e.g. /drinks
        path: String,
    },

    /// List the API routes with their URLs and required permissions
    Routes,

    /// Print an example configuration file
    Example,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Toml,
    Json,
}
