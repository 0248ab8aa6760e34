//! Movement policy overrides read from a TOML file.

use anyhow::{Context, Result};
use mvh_core::SimConfig;
use std::fs;
use std::path::Path;

/// Absent path means defaults; a present file must parse completely.
pub fn load_sim_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: SimConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}
