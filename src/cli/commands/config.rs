//! Configuration inspection command.

use std::path::Path;

use crate::config::{self, Config, ConfigError};
use crate::error::{Result, ResultExt};

/// Print the effective configuration, optionally writing defaults first
pub fn cmd_config(config: &Config, explicit_path: Option<&Path>, init: bool) -> anyhow::Result<()> {
    let path = match explicit_path {
        Some(path) => Some(path.to_path_buf()),
        None => config::config_path(),
    };

    match &path {
        Some(path) => println!("# Config file: {}", path.display()),
        None => println!("# Config file: (no config directory available)"),
    }

    if init {
        let path = path.as_deref().ok_or(ConfigError::NoConfigDir)?;
        if path.exists() {
            println!("# Already exists, leaving it untouched");
        } else {
            write_defaults(path)?;
            println!("# Wrote default configuration");
        }
    }

    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

fn write_defaults(path: &Path) -> Result<()> {
    config::save_to(&Config::default(), path)
        .map_err(crate::error::Error::from)
        .with_context(format!("initializing {}", path.display()))
}
