//! Configuration for linebox.
//!
//! Settings are read from `config.toml` in the platform config directory
//! (or the path in `LINEBOX_CONFIG`). Every field is optional; anything
//! missing falls back to the built-in defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use linebox_core::Settings;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "LINEBOX_CONFIG";

/// Default box colors, one node per entry.
pub const DEFAULT_PALETTE: [&str; 5] = ["#1abc9c", "#c0392b", "#8e44ad", "#d35400", "#2ecc71"];

/// Most lines a box may hold.
pub const MAX_LINES: usize = 64;

/// Default background (and line) color.
pub const DEFAULT_BACKGROUND: &str = "#ecf0f1";

/// Errors raised while loading, validating or saving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// User configuration as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Milliseconds between animation ticks.
    pub tick_ms: u64,
    /// Lines drawn inside each box.
    pub lines: usize,
    /// Box colors as `#rrggbb`. The chain has one node per color.
    pub palette: Vec<String>,
    /// Background and line color as `#rrggbb`.
    pub background: String,
    pub size_factor: f32,
    pub line_size_factor: f32,
    pub box_y_factor: f32,
    pub stroke_factor: f32,
    /// Height of a terminal cell relative to its width.
    pub cell_aspect: f32,
}

impl Default for Config {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            tick_ms: settings.tick.as_millis() as u64,
            lines: settings.lines,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            background: DEFAULT_BACKGROUND.to_string(),
            size_factor: settings.size_factor,
            line_size_factor: settings.line_size_factor,
            box_y_factor: settings.box_y_factor,
            stroke_factor: settings.stroke_factor,
            cell_aspect: 2.0,
        }
    }
}

impl Config {
    /// Location of the config file, if one can be determined.
    pub fn file_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("com", "linebox", "linebox")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load the config from its default location.
    ///
    /// A missing file yields the defaults; an unreadable or invalid file is
    /// an error.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::file_path() {
            Some(path) if path.exists() => {
                info!(path = %path.display(), "loading config");
                Self::load_from_file(&path)
            }
            Some(path) => {
                info!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            None => {
                warn!("could not determine config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate the config at `path`.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config to `path` as TOML, creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(io_err)
    }

    /// Check value ranges and colors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(invalid("tick_ms", "must be at least 1"));
        }
        if !(1..=MAX_LINES).contains(&self.lines) {
            return Err(invalid(
                "lines",
                format!("must be between 1 and {MAX_LINES}, got {}", self.lines),
            ));
        }
        if self.palette.is_empty() {
            return Err(invalid("palette", "needs at least one color"));
        }
        for color in self.palette.iter().chain(std::iter::once(&self.background)) {
            parse_hex(color)?;
        }
        let factors = [
            ("size_factor", self.size_factor),
            ("line_size_factor", self.line_size_factor),
            ("box_y_factor", self.box_y_factor),
            ("stroke_factor", self.stroke_factor),
            ("cell_aspect", self.cell_aspect),
        ];
        for (field, value) in factors {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be positive, got {value}")));
            }
        }
        Ok(())
    }

    /// Animation parameters derived from this config.
    pub fn settings(&self) -> Settings {
        Settings {
            tick: Duration::from_millis(self.tick_ms),
            lines: self.lines,
            nodes: self.palette.len(),
            size_factor: self.size_factor,
            line_size_factor: self.line_size_factor,
            box_y_factor: self.box_y_factor,
            stroke_factor: self.stroke_factor,
        }
    }

    /// Palette as RGB triples.
    pub fn palette_rgb(&self) -> Result<Vec<(u8, u8, u8)>, ConfigError> {
        self.palette.iter().map(|c| parse_hex(c)).collect()
    }

    /// Background as an RGB triple.
    pub fn background_rgb(&self) -> Result<(u8, u8, u8), ConfigError> {
        parse_hex(&self.background)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

/// Parse a `#rrggbb` color.
pub fn parse_hex(color: &str) -> Result<(u8, u8, u8), ConfigError> {
    let err = || ConfigError::InvalidColor(color.to_string());
    let hex = color.strip_prefix('#').ok_or_else(err)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(err());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
    Ok((channel(0)?, channel(2)?, channel(4)?))
}
