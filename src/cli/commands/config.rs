//! Configuration management commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::cli::output::{print_formatted, print_success, OutputFormat};
use crate::config::Config;
use crate::i18n::Locale;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration (file plus environment)
    Show,

    /// Get a specific config value
    Get {
        /// Config key (e.g., "api.base_url", "ui.locale")
        key: String,
    },

    /// Set a config value in the config file
    Set {
        /// Config key (e.g., "api.base_url", "ui.locale")
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

#[derive(Serialize)]
struct ConfigPathResult {
    path: String,
    exists: bool,
}

pub fn run(command: ConfigCommands, config: Config, format: OutputFormat, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => show(&config, format),
        ConfigCommands::Get { key } => get(&config, &key, format),
        ConfigCommands::Set { key, value } => set(&key, &value, quiet),
        ConfigCommands::Path => path(format),
    }
}

fn show(config: &Config, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Text => println!("{}", toml::to_string_pretty(config)?),
    }
    Ok(())
}

fn get(config: &Config, key: &str, format: OutputFormat) -> Result<()> {
    let value = get_config_value(config, key)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&value)?),
        OutputFormat::Text => println!("{}", value),
    }
    Ok(())
}

fn get_config_value(config: &Config, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["api", "base_url"] => Ok(config.api.base_url.clone()),
        ["ui", "locale"] => Ok(config.ui.locale.code().to_string()),
        ["ui", "dark_theme"] => Ok(config.ui.dark_theme.to_string()),
        _ => anyhow::bail!("Unknown config key: {}", key),
    }
}

/// Edits the stored file only; an environment override is not written back
fn set(key: &str, value: &str, quiet: bool) -> Result<()> {
    let mut config = Config::load_file()?;

    set_config_value(&mut config, key, value)?;
    config.save()?;

    print_success(&format!("Set {} = {}", key, value), quiet);
    Ok(())
}

fn set_config_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["api", "base_url"] => {
            let url = value.trim().trim_end_matches('/');
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("Base URL must start with http:// or https://: {}", value);
            }
            config.api.base_url = url.to_string();
        }
        ["ui", "locale"] => {
            config.ui.locale = Locale::parse(value).ok_or_else(|| {
                let known: Vec<&str> = Locale::all().iter().map(|l| l.code()).collect();
                anyhow::anyhow!("Unknown locale '{}' (expected one of: {})", value, known.join(", "))
            })?;
        }
        ["ui", "dark_theme"] => {
            config.ui.dark_theme = value.parse()?;
        }
        _ => anyhow::bail!("Unknown config key: {}", key),
    }

    Ok(())
}

fn path(format: OutputFormat) -> Result<()> {
    let path = Config::config_path()?;
    let exists = path.exists();

    let result = ConfigPathResult {
        path: path.to_string_lossy().to_string(),
        exists,
    };

    print_formatted(&result, format, |r| {
        format!("{}{}", r.path, if r.exists { "" } else { " (not found)" })
    });

    Ok(())
}
