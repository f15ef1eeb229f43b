//! CLI interface module
//!
//! This module provides command-line interface functionality for utm-command.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands, TemplateCommands};
use crate::config::StaticConfig;
use crate::errors::UtmError;
use crate::services::Workspace;
use commands::{
    add_link, config_generate, config_show, copy_link, export_links, list_links, list_templates,
    preview_link, quick_link, save_template, show_campaigns, show_channels, show_dashboard,
    show_stats, show_template,
};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ValidationError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ValidationError(msg) => format!("Invalid input: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ValidationError(msg) => {
                format!("{} {}", "Invalid input:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<UtmError> for CliError {
    fn from(err: UtmError) -> Self {
        match err {
            UtmError::Validation(msg) => CliError::ValidationError(msg),
            UtmError::FileOperation(_) | UtmError::Serialization(_) => {
                CliError::StorageError(err.to_string())
            }
            other => CliError::CommandError(other.to_string()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    // Config commands don't need the workspace
    if let Commands::Config { action } = cmd {
        return match action {
            ConfigCommands::Generate { output_path, force } => config_generate(output_path, force),
            ConfigCommands::Show => config_show(config),
        };
    }

    let mut workspace = Workspace::from_config(config);

    match cmd {
        Commands::Preview {
            base_url,
            utm,
            template,
            copy,
        } => preview_link(&workspace, base_url, &utm, template, copy),

        Commands::Add {
            base_url,
            utm,
            template,
            copy,
        } => add_link(&mut workspace, base_url, &utm, template, copy),

        Commands::Quick {
            base_url,
            source,
            medium,
            campaign,
        } => quick_link(&mut workspace, &base_url, &source, &medium, &campaign),

        Commands::List { limit, json } => list_links(&workspace, limit, json),

        Commands::Copy { id } => copy_link(&workspace, &id),

        Commands::Dashboard => show_dashboard(&workspace, config),

        Commands::Stats { json } => show_stats(&workspace, json),

        Commands::Campaigns { json } => show_campaigns(&workspace, json),

        Commands::Channels { json } => show_channels(&workspace, json),

        Commands::Template { action } => match action {
            TemplateCommands::Save { name, utm } => save_template(&mut workspace, &name, &utm),
            TemplateCommands::List => list_templates(&workspace),
            TemplateCommands::Show { name } => show_template(&workspace, &name),
        },

        Commands::Export {
            file_path,
            stdout,
            copy,
        } => export_links(&workspace, config, file_path, stdout, copy),

        Commands::Config { .. } => unreachable!("handled above"),
    }
}
