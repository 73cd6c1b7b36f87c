//! Logging setup shared by the Coffee Shop binaries
//!
//! The filter is chosen in this order:
//! 1. CLI flags (`-v/-q`)
//! 2. `RUST_LOG`
//! 3. The caller's default

use anyhow::Result;
use clap_verbosity_flag::{LogLevel, Verbosity};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter for the given flags without installing anything.
pub fn build_filter<L: LogLevel>(verbosity: &Verbosity<L>, default_filter: &str) -> Result<EnvFilter> {
    let filter = if verbosity.is_present() {
        EnvFilter::try_new(verbosity.log_level_filter().as_str())?
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(default_filter)?,
        }
    };
    Ok(filter)
}

/// Install a compact fmt subscriber.
///
/// ```no_run
/// use clap::Parser;
/// use clap_verbosity_flag::{Verbosity, WarnLevel};
/// use coffee_shop_env::logging;
///
/// #[derive(Parser)]
/// struct Args {
///     #[clap(flatten)]
///     verbosity: Verbosity<WarnLevel>,
/// }
///
/// let args = Args::parse();
/// logging::init_logging(&args.verbosity, "coffee_shop_env=info").unwrap();
/// ```
pub fn init_logging<L: LogLevel>(verbosity: &Verbosity<L>, default_filter: &str) -> Result<()> {
    let filter = build_filter(verbosity, default_filter)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

/// Initialize logging only when flags or `RUST_LOG` ask for it.
///
/// Returns whether a subscriber was installed.
pub fn init_cli_logging<L: LogLevel>(
    verbosity: &Verbosity<L>,
    default_filter: &str,
) -> Result<bool> {
    if verbosity.is_present() || std::env::var("RUST_LOG").is_ok() {
        init_logging(verbosity, default_filter)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use clap_verbosity_flag::WarnLevel;

    #[derive(Parser)]
    struct Args {
        #[clap(flatten)]
        verbosity: Verbosity<WarnLevel>,
    }

    #[test]
    fn test_flags_build_filter() {
        let args = Args::parse_from(["test", "-vv"]);
        let filter = build_filter(&args.verbosity, "coffee_shop_env=info").unwrap();
        assert!(filter.to_string().eq_ignore_ascii_case("debug"));
    }

    #[test]
    fn test_quiet_turns_logging_off() {
        let args = Args::parse_from(["test", "-qq"]);
        let filter = build_filter(&args.verbosity, "coffee_shop_env=info").unwrap();
        assert!(filter.to_string().eq_ignore_ascii_case("off"));
    }
}
