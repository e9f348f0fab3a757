//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.cardgrid/config.toml` unless another path is given.
//! A missing file is not an error; `cardgrid --init-config` writes a
//! commented-out default so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::card::layout::{
    BorderGlyphs, CardLayout, DEFAULT_CARDS_PER_ROW, DEFAULT_INTERIOR_WIDTH, DEFAULT_MIN_HEIGHT,
};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CardGridConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub glyphs: GlyphConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LayoutConfig {
    pub interior_width: Option<usize>,
    pub min_height: Option<usize>,
    pub cards_per_row: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GlyphConfig {
    pub footer_right: Option<char>,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub interior_width: Option<usize>,
    pub min_height: Option<usize>,
    pub cards_per_row: Option<usize>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

const DEFAULT_CONFIG: &str = r#"# cardgrid configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [layout]
# interior_width = 15     # CARDGRID_INTERIOR_WIDTH, --width
# min_height = 8          # CARDGRID_MIN_HEIGHT, --min-height
# cards_per_row = 5       # CARDGRID_CARDS_PER_ROW, --per-row

# [glyphs]
# footer_right = "|"      # right border of the id row
"#;

/// Returns the path to `~/.cardgrid/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cardgrid").join("config.toml"))
}

/// Load config from `path`, or the default location when `None`.
///
/// A missing file yields `CardGridConfig::default()`. A file that exists
/// but is malformed returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<CardGridConfig, ConfigError> {
    let path = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CardGridConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file at {}, using defaults", path.display());
        return Ok(CardGridConfig::default());
    }

    let contents = fs::read_to_string(&path)?;
    let config: CardGridConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Write the commented-out default config to `path`.
///
/// Refuses to overwrite an existing file.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} already exists", path.display()),
        )));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG)?;
    info!("Wrote default config to {}", path.display());
    Ok(())
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final layout: defaults → config file → env vars → CLI.
///
/// The result is not validated here; rendering rejects unusable values.
pub fn resolve(config: &CardGridConfig, cli: &CliOverrides) -> CardLayout {
    let interior_width = cli
        .interior_width
        .or_else(|| env_number("CARDGRID_INTERIOR_WIDTH"))
        .or(config.layout.interior_width)
        .unwrap_or(DEFAULT_INTERIOR_WIDTH);

    let min_height = cli
        .min_height
        .or_else(|| env_number("CARDGRID_MIN_HEIGHT"))
        .or(config.layout.min_height)
        .unwrap_or(DEFAULT_MIN_HEIGHT);

    let cards_per_row = cli
        .cards_per_row
        .or_else(|| env_number("CARDGRID_CARDS_PER_ROW"))
        .or(config.layout.cards_per_row)
        .unwrap_or(DEFAULT_CARDS_PER_ROW);

    let mut glyphs = BorderGlyphs::LIGHT;
    if let Some(c) = config.glyphs.footer_right {
        glyphs.footer_right = c;
    }

    CardLayout {
        interior_width,
        min_height,
        cards_per_row,
        glyphs,
    }
}

/// Read a numeric env var. Unparsable values are ignored with a warning.
fn env_number<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {key}={raw:?}: not a number");
            None
        }
    }
}
