//! Configuration loading and parsing.
//!
//! Parses `vinput.toml` (or an override path provided by the binary),
//! extracting field geometry and history depth. Unknown fields are ignored
//! (TOML deserialization tolerance) so the format can grow without breaking
//! older files, and a missing or unparsable file falls back to defaults.
//!
//! Raw parsed values are retained; `apply_context` computes the effective
//! (clamped) limits from the terminal geometry at application time and logs
//! whenever a value had to be adjusted.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::info;

/// Narrowest usable field: the scroll margins plus one content cell.
const MIN_WIDTH: usize = 5;
/// Columns the box outline and padding consume around the field.
const FRAME_COLUMNS: usize = 2;

const WIDTH_DEFAULT: usize = 20;
const CAPACITY_DEFAULT: usize = 128;
const HISTORY_DEPTH_DEFAULT: usize = 64;

#[derive(Debug, Deserialize, Clone)]
pub struct FieldConfig {
    /// Visible field width in columns.
    #[serde(default = "FieldConfig::default_width")]
    pub width: usize,
    /// Maximum number of characters the buffer accepts.
    #[serde(default = "FieldConfig::default_capacity")]
    pub capacity: usize,
    /// Shown dimmed while the buffer is empty.
    #[serde(default)]
    pub placeholder: Option<String>,
}

impl FieldConfig {
    const fn default_width() -> usize {
        WIDTH_DEFAULT
    }
    const fn default_capacity() -> usize {
        CAPACITY_DEFAULT
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            capacity: Self::default_capacity(),
            placeholder: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HistoryConfig {
    /// Number of undo snapshots retained.
    #[serde(default = "HistoryConfig::default_depth")]
    pub depth: usize,
}

impl HistoryConfig {
    const fn default_depth() -> usize {
        HISTORY_DEPTH_DEFAULT
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            depth: Self::default_depth(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Effective limits after clamping against the terminal context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub width: usize,
    pub capacity: usize,
    pub history_depth: usize,
}

#[derive(Debug, Default, Clone)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
    effective: Option<Limits>,
}

/// Best-effort config path: local working directory first, then the
/// platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("vinput.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("vinput").join("vinput.toml");
    }
    PathBuf::from("vinput.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    if let Ok(content) = fs::read_to_string(&path) {
        match toml::from_str::<ConfigFile>(&content) {
            Ok(file) => Ok(Config {
                raw: Some(content),
                file,
                effective: None,
            }),
            Err(e) => {
                // Unparsable file falls back to defaults rather than
                // refusing to start.
                info!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
                Ok(Config::default())
            }
        }
    } else {
        Ok(Config::default())
    }
}

impl Config {
    /// Clamp the raw values against the terminal width. The field must fit
    /// inside the terminal with its frame; capacity and history depth are
    /// floored at one. Logs each adjustment under the `config` target.
    pub fn apply_context(&mut self, terminal_columns: u16) -> Limits {
        let max_width = (terminal_columns as usize)
            .saturating_sub(FRAME_COLUMNS)
            .max(MIN_WIDTH);
        let width = self.file.field.width.clamp(MIN_WIDTH, max_width);
        if width != self.file.field.width {
            info!(
                target: "config",
                raw = self.file.field.width,
                clamped = width,
                terminal_columns,
                "field_width_clamped"
            );
        }
        let capacity = self.file.field.capacity.max(1);
        if capacity != self.file.field.capacity {
            info!(target: "config", raw = self.file.field.capacity, clamped = capacity, "capacity_clamped");
        }
        let history_depth = self.file.history.depth.max(1);
        if history_depth != self.file.history.depth {
            info!(target: "config", raw = self.file.history.depth, clamped = history_depth, "history_depth_clamped");
        }
        let limits = Limits {
            width,
            capacity,
            history_depth,
        };
        self.effective = Some(limits);
        limits
    }

    /// Recompute on terminal resize. Returns `Some(new_limits)` when the
    /// effective values changed, else `None`.
    pub fn recompute_after_resize(&mut self, terminal_columns: u16) -> Option<Limits> {
        let prev = self.effective;
        let current = self.apply_context(terminal_columns);
        if prev != Some(current) { Some(current) } else { None }
    }
}
