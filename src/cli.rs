//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **list**: browse the approved catalog with search, tag facets and pages (default)
//! - **home**: the most recent approved listings
//! - **tags**: every tag used by an approved listing
//! - **show**: one listing by slug, with recommendations
//! - **submit**: add a listing for review
//! - **approve**: publish a pending listing
//! - **sitemap** / **robots**: crawler exports
//! - **config**: inspect and change settings

use crate::submission::SubmissionForm;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., page_size=12)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., base_url)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Fields of a new listing
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SubmitArgs {
    /// Protocol name
    #[arg(long)]
    pub name: String,

    /// Short description
    #[arg(long)]
    pub description: String,

    /// Features, one per line or comma separated
    #[arg(long)]
    pub features: String,

    /// Who built it
    #[arg(long = "created-by")]
    pub created_by: String,

    /// Contact address for the moderators
    #[arg(long = "contact-email")]
    pub contact_email: String,

    /// Comma separated tags
    #[arg(long, default_value = "")]
    pub tags: String,

    #[arg(long = "github-url", default_value = "")]
    pub github_url: String,

    #[arg(long = "website-link", default_value = "")]
    pub website_link: String,

    #[arg(long = "logo-url", default_value = "")]
    pub logo_url: String,
}

impl From<SubmitArgs> for SubmissionForm {
    fn from(args: SubmitArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            features: args.features,
            tags: args.tags,
            github_url: args.github_url,
            created_by: args.created_by,
            contact_email: args.contact_email,
            website_link: args.website_link,
            logo_url: args.logo_url,
        }
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "protodir")]
#[command(about = "A directory of agent-to-agent protocols", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Store directory (overrides config)
    #[arg(long = "store", value_name = "PATH", global = true)]
    pub store: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Browse the approved catalog (default)
    #[command(visible_alias = "ls")]
    List {
        /// Free-text search over name, description and tags
        query: Option<String>,

        /// Only listings carrying this tag (repeatable)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Page to show, starting at 1
        #[arg(short = 'p', long = "page", default_value_t = 1)]
        page: usize,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the most recent approved listings
    Home,

    /// List every tag used by an approved listing
    Tags,

    /// Show one listing by its slug
    Show {
        /// Listing slug, e.g. Agent-Mesh
        slug: String,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,

        /// Print the page metadata instead of the listing
        #[arg(long)]
        meta: bool,
    },

    /// Submit a listing for review
    Submit(SubmitArgs),

    /// Publish a pending listing
    Approve {
        /// Listing id
        id: u64,
    },

    /// Print sitemap.xml
    Sitemap,

    /// Print robots.txt
    Robots,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to List if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List {
            query: None,
            tags: Vec::new(),
            page: 1,
            json: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_list() {
        let cli = Cli::parse_from(["protodir"]);
        assert!(cli.command.is_none());
        assert!(matches!(cli.get_command(), Commands::List { page: 1, .. }));
    }

    #[test]
    fn test_list_with_filters() {
        let cli = Cli::parse_from(["protodir", "list", "mesh", "-t", "api", "--tag", "chat", "-p", "2"]);
        assert_eq!(
            cli.get_command(),
            Commands::List {
                query: Some("mesh".into()),
                tags: vec!["api".into(), "chat".into()],
                page: 2,
                json: false,
            }
        );
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["protodir", "home", "-q", "--store", "/tmp/store"]);
        assert!(cli.quiet);
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/store")));
    }

    #[test]
    fn test_submit_optional_fields_default_blank() {
        let cli = Cli::parse_from([
            "protodir",
            "submit",
            "--name",
            "Agent Mesh",
            "--description",
            "Routing",
            "--features",
            "Streaming",
            "--created-by",
            "Example Labs",
            "--contact-email",
            "team@example.com",
        ]);
        let Some(Commands::Submit(args)) = cli.command else {
            panic!("expected submit");
        };
        let form = SubmissionForm::from(args);
        assert_eq!(form.name, "Agent Mesh");
        assert!(form.tags.is_empty());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_submit_requires_name() {
        assert!(Cli::try_parse_from(["protodir", "submit", "--description", "x"]).is_err());
    }

    #[test]
    fn test_config_set() {
        let cli = Cli::parse_from(["protodir", "config", "set", "page_size=12"]);
        assert_eq!(
            cli.command,
            Some(Commands::Config(ConfigCommands::Set {
                setting: "page_size=12".into()
            }))
        );
    }
}
