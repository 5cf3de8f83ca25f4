use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use mineclear_core::GameSettings;

/// Reads settings from `path`, or the built-in defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> Result<GameSettings> {
    let Some(path) = path else {
        return Ok(GameSettings::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    let settings =
        parse_settings(&text).with_context(|| format!("invalid settings in {}", path.display()))?;
    log::debug!("Loaded settings from {}: {:?}", path.display(), settings);
    Ok(settings)
}

pub fn parse_settings(text: &str) -> Result<GameSettings> {
    let settings: GameSettings = toml::from_str(text)?;
    settings.validate()?;
    Ok(settings)
}
