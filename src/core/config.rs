//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.stockroom/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Settings only shape presentation and logging; the inventory itself always
//! starts empty and is never written to disk.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StockroomConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub about: AboutConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub show_intro: Option<bool>,
    pub intro_millis: Option<u64>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AboutConfig {
    pub author: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_INTRO_MILLIS: u64 = 3000;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "stockroom.log";
pub const DEFAULT_AUTHOR: &str = "Jericho Mosqueda";

const CONFIG_DIR: &str = ".stockroom";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub show_intro: bool,
    pub intro_duration: Duration,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub author: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.stockroom/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR))
}

/// Returns the path to `~/.stockroom/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.stockroom/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `StockroomConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<StockroomConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(StockroomConfig::default());
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(StockroomConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<StockroomConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: StockroomConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Stockroom Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → CLI flags.

# [general]
# show_intro = true                  # Or pass --skip-intro
# intro_millis = 3000
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"
# log_file = "stockroom.log"         # Path relative to ~/.stockroom/

# [about]
# author = "Jericho Mosqueda"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

/// Opens the log file for writing, creating missing parent directories.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → CLI.
///
/// `skip_intro` comes from the `--skip-intro` flag and always wins.
pub fn resolve(config: &StockroomConfig, skip_intro: bool) -> ResolvedConfig {
    let show_intro = !skip_intro && config.general.show_intro.unwrap_or(true);

    let intro_duration = Duration::from_millis(
        config
            .general
            .intro_millis
            .unwrap_or(DEFAULT_INTRO_MILLIS),
    );

    let log_level = match config.general.log_level.as_deref() {
        Some(level) => LevelFilter::from_str(level).unwrap_or_else(|_| {
            warn!("Unknown log level {:?}, using {}", level, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    // Log file: relative paths live next to the config file
    let log_file = config
        .general
        .log_file
        .as_deref()
        .unwrap_or(DEFAULT_LOG_FILE);
    let log_file = match config_dir() {
        Some(dir) => dir.join(log_file),
        None => PathBuf::from(log_file),
    };

    let author = config
        .about
        .author
        .clone()
        .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

    ResolvedConfig {
        show_intro,
        intro_duration,
        log_level,
        log_file,
        author,
    }
}
