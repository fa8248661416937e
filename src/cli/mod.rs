//! CLI module for Sendform
//!
//! Headless front end over the same validator, controller and client the GUI uses.
//! Running without a subcommand opens the GUI.

mod commands;
mod output;

use clap::{Parser, Subcommand};

use crate::config::Config;

pub use output::{print_error, OutputFormat};

/// Sendform - send a contact message
#[derive(Parser, Debug)]
#[command(name = "sendform")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output formatting options
#[derive(Parser, Debug, Clone)]
pub struct OutputOptions {
    /// Output in JSON format (for machine parsing)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl OutputOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate and submit a message
    Send {
        #[command(flatten)]
        fields: commands::FieldArgs,

        /// API base URL (overrides config and environment)
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Check a message against local validation rules without sending it
    Validate {
        #[command(flatten)]
        fields: commands::FieldArgs,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

/// Run a CLI command with the startup configuration
pub async fn run(command: Commands, config: Config, output: &OutputOptions) -> anyhow::Result<()> {
    let format = output.format();
    let quiet = output.quiet;

    match command {
        Commands::Send { fields, api_url } => {
            commands::send::run(fields, api_url, config, format, quiet).await
        }
        Commands::Validate { fields } => commands::validate::run(fields, &config, format),
        Commands::Config { command } => commands::config::run(command, config, format, quiet),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_gui() {
        let cli = Cli::try_parse_from(["sendform"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_send() {
        let cli = Cli::try_parse_from([
            "sendform",
            "--json",
            "send",
            "--name",
            "Al",
            "--phone",
            "+375291234567",
            "--message",
            "Hi there",
            "--api-url",
            "http://example.org",
        ])
        .unwrap();

        assert_eq!(cli.output.format(), OutputFormat::Json);
        match cli.command {
            Some(Commands::Send { fields, api_url }) => {
                assert_eq!(fields.name, "Al");
                assert_eq!(fields.phone, "+375291234567");
                assert_eq!(api_url.as_deref(), Some("http://example.org"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_fields_default_to_empty() {
        let cli = Cli::try_parse_from(["sendform", "validate", "--name", "Al"]).unwrap();
        match cli.command {
            Some(Commands::Validate { fields }) => {
                assert_eq!(fields.phone, "");
                assert_eq!(fields.message, "");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
