//! Interactive setup wizard for first-time configuration

use super::DirectoryConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

/// Prompt for the store location and public base URL, then save
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read or the configuration
/// cannot be saved.
pub fn first_time_setup() -> Result<DirectoryConfig, ConfigError> {
    println!("Welcome to protodir! Let's set up your directory store.\n");

    let defaults = DirectoryConfig::default();

    let store_path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Store location")
        .default(defaults.store_path.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let base_url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Public base URL")
        .default(defaults.base_url.clone())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = DirectoryConfig {
        store_path: PathBuf::from(store_path),
        base_url: base_url.trim_end_matches('/').to_string(),
        ..defaults
    };
    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
