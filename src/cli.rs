//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for utm-command using clap's derive macros.

use clap::{Args, Parser, Subcommand};

use crate::utm::{UtmField, UtmParams};

/// utm-command - Build, store and analyze UTM campaign links
#[derive(Parser, Debug)]
#[command(name = "utm-command")]
#[command(version)]
#[command(about = "Build, store and analyze UTM campaign links", long_about = None)]
pub struct Cli {
    /// Configuration file (default: utm-command.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Override the data directory
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// UTM 参数选项
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct UtmArgs {
    /// utm_source value
    #[arg(long)]
    pub source: Option<String>,

    /// utm_medium value
    #[arg(long)]
    pub medium: Option<String>,

    /// utm_campaign value
    #[arg(long)]
    pub campaign: Option<String>,

    /// utm_content value
    #[arg(long)]
    pub content: Option<String>,

    /// utm_term value
    #[arg(long)]
    pub term: Option<String>,
}

impl UtmArgs {
    /// 用命令行里给出的值覆盖 `params`，未给出的字段保持不变
    pub fn overlay(&self, params: &mut UtmParams) {
        let provided = [
            (UtmField::Source, &self.source),
            (UtmField::Medium, &self.medium),
            (UtmField::Campaign, &self.campaign),
            (UtmField::Content, &self.content),
            (UtmField::Term, &self.term),
        ];
        for (field, value) in provided {
            if let Some(value) = value {
                params.set(field, value.as_str());
            }
        }
    }

    pub fn to_params(&self) -> UtmParams {
        let mut params = UtmParams::default();
        self.overlay(&mut params);
        params
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the final URL without saving it
    Preview {
        /// Base URL, e.g. https://example.com/landing
        base_url: String,

        #[command(flatten)]
        utm: UtmArgs,

        /// Start from a saved template (flags override its values)
        #[arg(long, short = 't')]
        template: Option<String>,

        /// Copy the final URL to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Build and save a link
    ///
    /// Usage: add <BASE_URL> --source <S> --medium <M> --campaign <C>
    /// Source, medium and campaign may come from --template instead.
    Add {
        /// Base URL, e.g. https://example.com/landing
        base_url: String,

        #[command(flatten)]
        utm: UtmArgs,

        /// Start from a saved template (flags override its values)
        #[arg(long, short = 't')]
        template: Option<String>,

        /// Copy the final URL to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Quick-create a link from the four required values
    Quick {
        base_url: String,
        source: String,
        medium: String,
        campaign: String,
    },

    /// List saved links, newest first
    List {
        /// Show at most N links
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Copy a saved link's final URL to the clipboard
    Copy {
        /// Link id, or a unique prefix of it (as shown by `list`)
        id: String,
    },

    /// Summary, recent links and workspace info
    Dashboard,

    /// Total clicks, top campaign and unique campaigns
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Clicks per campaign
    Campaigns {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Clicks per medium, highest first
    Channels {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage parameter templates
    Template {
        #[command(subcommand)]
        action: TemplateCommands,
    },

    /// Export links as CSV
    Export {
        /// Output file path (default: utm-links.csv)
        file_path: Option<String>,

        /// Write CSV to stdout instead of a file
        #[arg(long, conflicts_with = "file_path")]
        stdout: bool,

        /// Copy CSV to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Template management commands
#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// Save a template (same name, any case, replaces it)
    Save {
        /// Template name
        name: String,

        #[command(flatten)]
        utm: UtmArgs,
    },

    /// List saved templates
    List,

    /// Show one template by exact name
    Show {
        /// Template name
        name: String,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: utm-command.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_with_flags() {
        let cli = Cli::try_parse_from([
            "utm-command",
            "add",
            "https://x.com",
            "--source",
            "news",
            "--medium",
            "email",
            "--campaign",
            "q3",
            "--term",
            "shoes",
        ])
        .unwrap();

        match cli.command {
            Commands::Add {
                base_url,
                utm,
                template,
                copy,
            } => {
                assert_eq!(base_url, "https://x.com");
                assert_eq!(utm.source.as_deref(), Some("news"));
                assert_eq!(utm.term.as_deref(), Some("shoes"));
                assert_eq!(utm.content, None);
                assert_eq!(template, None);
                assert!(!copy);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_quick_positional() {
        let cli =
            Cli::try_parse_from(["utm-command", "quick", "https://x.com", "fb", "cpc", "spring"])
                .unwrap();
        assert!(matches!(cli.command, Commands::Quick { ref campaign, .. } if campaign == "spring"));
    }

    #[test]
    fn test_parse_copy_id() {
        let cli = Cli::try_parse_from(["utm-command", "copy", "0f8e2c1a"]).unwrap();
        assert!(matches!(cli.command, Commands::Copy { ref id } if id == "0f8e2c1a"));
    }

    #[test]
    fn test_global_data_dir() {
        let cli = Cli::try_parse_from(["utm-command", "stats", "--data-dir", "/tmp/utm"]).unwrap();
        assert_eq!(cli.data_dir.as_deref(), Some("/tmp/utm"));
    }

    #[test]
    fn test_export_stdout_conflicts_with_path() {
        assert!(Cli::try_parse_from(["utm-command", "export", "out.csv", "--stdout"]).is_err());
    }

    #[test]
    fn test_overlay_only_sets_provided_fields() {
        let mut params = UtmParams::new("fb", "cpc", "spring").with_content("banner");
        let args = UtmArgs {
            campaign: Some("fall".into()),
            ..Default::default()
        };
        args.overlay(&mut params);
        assert_eq!(params.source, "fb");
        assert_eq!(params.campaign, "fall");
        assert_eq!(params.content.as_deref(), Some("banner"));
    }
}
