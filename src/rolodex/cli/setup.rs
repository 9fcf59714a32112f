//! Process setup: logging and configuration.

use super::args::Cli;
use rolodex::config::{BirthdayMode, RolodexConfig};
use rolodex::error::Result;
use tracing_subscriber::EnvFilter;

/// Installs the tracing subscriber.
///
/// Logs go to stderr so they never interleave with menu output. `RUST_LOG` wins when
/// set; otherwise only warnings are shown, or everything from debug up with
/// `--verbose`.
pub(crate) fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Loads the config file (explicit path, else the platform default) and applies
/// command-line overrides.
pub(crate) fn load_config(cli: &Cli) -> Result<RolodexConfig> {
    let path = cli.config.clone().or_else(RolodexConfig::default_path);
    let mut config = match &path {
        Some(path) => RolodexConfig::load(path)?,
        None => RolodexConfig::default(),
    };
    tracing::debug!(path = ?path, ?config, "configuration loaded");

    if cli.calendar_birthdays {
        config.birthday_mode = BirthdayMode::Calendar;
    }
    Ok(config)
}
