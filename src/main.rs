//! Protodir CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog (default command)
//! protodir
//! protodir list mesh -t streaming -p 2
//!
//! # Look at one listing
//! protodir show Agent-Mesh
//! protodir show Agent-Mesh --meta
//!
//! # Submit, then approve out of band
//! protodir submit --name "Agent Mesh" --description "..." --features "Routing" \
//!     --created-by "Example Labs" --contact-email team@example.com
//! protodir approve 3
//!
//! # Crawler exports
//! protodir sitemap > sitemap.xml
//! ```
//!
//! # Configuration
//!
//! On first run, protodir prompts for the store location and public base URL.
//! Configuration is stored in the user's config directory
//! (`~/.config/protodir/config.toml` on Linux). Set `RUST_LOG` for
//! diagnostics on stderr.

use protodir::{
    DirectoryError,
    cli::{Cli, Commands, ConfigCommands},
    commands::{self, list::ListRequest},
    config::{self, DirectoryConfig},
    model::ProtocolId,
    output,
    store::SledStore,
    submission::SubmissionForm,
};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, DirectoryError>;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn split_setting(setting: &str) -> Result<(&str, &str)> {
    setting
        .split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .ok_or_else(|| DirectoryError::InvalidInput("Invalid format. Use: protodir config set key=value".into()))
}

fn config_value(config: &DirectoryConfig, key: &str) -> Result<String> {
    Ok(match key {
        "store_path" => config.store_path.display().to_string(),
        "base_url" => config.base_url.clone(),
        "page_size" => config.page_size.to_string(),
        "quiet" => config.quiet.to_string(),
        _ => {
            return Err(DirectoryError::InvalidInput(format!(
                "Unknown config key '{key}' (expected one of: {})",
                config::KEYS.join(", ")
            )));
        }
    })
}

fn handle_config_command(mut config: DirectoryConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            for key in config::KEYS {
                println!("{key} = {}", config_value(&config, key)?);
            }
        }
        ConfigCommands::Get { key } => println!("{}", config_value(&config, key)?),
        ConfigCommands::Set { setting } => {
            let (key, value) = split_setting(setting)?;
            config.set(key, value)?;
            config.save()?;
            if !quiet {
                output::success(&format!("Set {key} = {}", config_value(&config, key)?));
            }
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = DirectoryConfig::load_or_setup()?;
    let quiet = cli.quiet || config.quiet;
    let command = cli.get_command();

    match &command {
        Commands::Config(sub) => return handle_config_command(config, sub, quiet),
        Commands::Robots => {
            commands::robots(&config.base_url);
            return Ok(());
        }
        _ => {}
    }

    if let Some(path) = &cli.store {
        config.store_path.clone_from(path);
    }
    let store = SledStore::open(&config.store_path)?;

    match command {
        Commands::List { query, tags, page, json } => {
            let request = ListRequest { query, tags, page };
            commands::list(&store, &request, config.page_size, json, quiet)
        }
        Commands::Home => commands::home(&store, quiet),
        Commands::Tags => commands::tags(&store, quiet),
        Commands::Show { slug, json, meta } => commands::show(&store, &slug, &config.base_url, json, meta, quiet),
        Commands::Submit(args) => commands::submit(&store, &SubmissionForm::from(args), quiet),
        Commands::Approve { id } => commands::approve(&store, ProtocolId(id), quiet),
        Commands::Sitemap => commands::sitemap(&store, &config.base_url),
        Commands::Config(_) | Commands::Robots => Ok(()),
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
