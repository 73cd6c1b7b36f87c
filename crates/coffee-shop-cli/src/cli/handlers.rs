//! Command handlers for coffee-env

use crate::cli::commands::OutputFormat;
use crate::error::Result;
use coffee_shop_env::{ApiRoute, Environment};
use color_eyre::eyre::eyre;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn handle_show(env: &Environment, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let rendered = match format {
        OutputFormat::Toml => {
            toml::to_string_pretty(env).map_err(|e| eyre!("Failed to render TOML: {e}"))?
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(env).map_err(|e| eyre!("Failed to render JSON: {e}"))?
        }
    };
    writeln!(out, "{}", rendered.trim_end())?;
    Ok(())
}

/// Loading already validated `env`; this reports the result.
pub fn handle_validate(env: &Environment, out: &mut impl Write) -> Result<()> {
    env.validate()?;
    writeln!(out, "ok ({} build)", env.mode())?;
    Ok(())
}

pub fn handle_export(env: &Environment, output: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let json = env.to_frontend_json()?;
    match output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))?;
            info!("Frontend environment written to {}", path.display());
        }
        None => writeln!(out, "{json}")?,
    }
    Ok(())
}

pub fn handle_login_url(env: &Environment, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", env.auth0.authorize_url()?)?;
    Ok(())
}

pub fn handle_logout_url(env: &Environment, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", env.auth0.logout_url()?)?;
    Ok(())
}

pub fn handle_endpoint(env: &Environment, path: &str, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", env.endpoint(path)?)?;
    Ok(())
}

pub fn handle_routes(env: &Environment, out: &mut impl Write) -> Result<()> {
    let routes = [
        ApiRoute::ListDrinks,
        ApiRoute::DrinksDetail,
        ApiRoute::CreateDrink,
        ApiRoute::UpdateDrink(1),
        ApiRoute::DeleteDrink(1),
    ];

    for route in routes {
        writeln!(
            out,
            "{:<7} {:<40} {}",
            route.method(),
            env.route_url(&route)?,
            route.permission().unwrap_or("-")
        )?;
    }
    Ok(())
}

pub fn handle_example(out: &mut impl Write) -> Result<()> {
    write!(out, "{}", Environment::generate_example()?)?;
    Ok(())
}
