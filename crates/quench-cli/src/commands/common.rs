//! Shared helpers for CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use quench_gym::GymConfig;

/// Load the gym configuration, falling back to defaults plus environment
/// overrides when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<GymConfig> {
    match path {
        Some(path) => GymConfig::load(path)
            .with_context(|| format!("Failed to load configuration: {}", path.display())),
        None => {
            let mut config = GymConfig::default();
            config.apply_env();
            Ok(config)
        }
    }
}

/// Return the default Quench state directory (`~/.quench/`).
pub fn default_state_dir() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
    let state_dir = home.join(".quench");
    if !state_dir.exists() {
        fs::create_dir_all(&state_dir).with_context(|| {
            format!("Failed to create state directory: {}", state_dir.display())
        })?;
    }
    Ok(state_dir)
}
