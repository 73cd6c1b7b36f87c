use crate::cli::{commands::Commands, handlers};
use crate::error::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use coffee_shop_env::Environment;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// coffee-env - Coffee Shop environment configuration
#[derive(Parser, Debug)]
#[command(
    name = "coffee-env",
    version,
    about = "Inspect, validate and export the Coffee Shop environment configuration",
    long_about = "Inspect, validate and export the Coffee Shop environment configuration.

Values come from the variant compiled into this build, then an optional
coffee-shop.toml file, then COFFEE_SHOP_* environment variables
(nested keys use a double underscore, e.g. COFFEE_SHOP_AUTH0__CLIENT_ID).

EXAMPLES:
  coffee-env show                   # Active configuration as TOML
  coffee-env export -o env.json     # Frontend JSON for the SPA
  coffee-env login-url              # Auth0 login link
  coffee-env endpoint /drinks       # API URL for a path"
)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true, env = "COFFEE_SHOP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Args {
    /// Run the command, writing results to `out`
    pub fn run(self, out: &mut impl Write) -> Result<()> {
        let config = self.config.as_deref();

        match self.command {
            Commands::Example => handlers::handle_example(out),
            Commands::Show { format } => handlers::handle_show(&load(config)?, format, out),
            Commands::Validate => handlers::handle_validate(&load(config)?, out),
            Commands::Export { output } => {
                handlers::handle_export(&load(config)?, output.as_deref(), out)
            }
            Commands::LoginUrl => handlers::handle_login_url(&load(config)?, out),
            Commands::LogoutUrl => handlers::handle_logout_url(&load(config)?, out),
            Commands::Endpoint { path } => handlers::handle_endpoint(&load(config)?, &path, out),
            Commands::Routes => handlers::handle_routes(&load(config)?, out),
        }
    }
}

fn load(config: Option<&Path>) -> Result<Environment> {
    debug!(config = ?config, "Loading environment");
    Ok(Environment::load(config)?)
}
