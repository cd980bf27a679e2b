//! # Configuration Module
//!
//! Run configuration for one generation pass: output locations, feature flags
//! and the raw volume expression.
//!
//! ## Sources
//!
//! Values are layered, later sources winning:
//! 1. Built-in defaults (`txtp/` output, `wem/` media subdirectory)
//! 2. A JSON file, either given explicitly or found in the platform config
//!    directory:
//!    - Linux: `~/.config/wtxtp/config.json`
//!    - macOS: `~/Library/Application Support/wtxtp/config.json`
//!    - Windows: `%APPDATA%\wtxtp\config.json`
//! 3. Command-line flags
//!
//! Files may be partial; missing keys keep their defaults.

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTDIR: &str = "txtp/";
pub const DEFAULT_WEMDIR: &str = "wem/";

/// Static configuration of a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Output directory for txtp files
    pub outdir: String,
    /// Media subdirectory, relative to the output directory
    pub wemdir: String,
    pub name_wems: bool,
    pub name_vars: bool,
    /// Per-language output; every bank resolves its own basepath
    pub lang: bool,
    pub bnkmark: bool,
    pub bnkskip: bool,
    pub alt_exts: bool,
    /// Keep duplicated txtp instead of skipping them
    pub dupes: bool,
    pub dupes_exact: bool,
    pub random_all: bool,
    pub random_multi: bool,
    pub random_force: bool,
    pub write_delays: bool,
    pub silence: bool,
    /// Only report, don't generate
    pub no_txtp: bool,
    pub x_noloops: bool,
    pub x_nameid: bool,
    /// Volume expression, see [`crate::volume`]
    pub volume: Option<String>,
    /// Optional name list used to resolve hashed names
    pub wwnames: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            outdir: DEFAULT_OUTDIR.to_string(),
            wemdir: DEFAULT_WEMDIR.to_string(),
            name_wems: false,
            name_vars: false,
            lang: false,
            bnkmark: false,
            bnkskip: false,
            alt_exts: false,
            dupes: false,
            dupes_exact: false,
            random_all: false,
            random_multi: false,
            random_force: false,
            write_delays: false,
            silence: false,
            no_txtp: false,
            x_noloops: false,
            x_nameid: false,
            volume: None,
            wwnames: None,
        }
    }
}

impl RunConfig {
    /// Loads a JSON config file. Keys not present keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Loads `path` if given, otherwise the default config file when it
    /// exists, otherwise built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => {
                debug!("Using config file {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// Platform config file location, if the platform has a config directory.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wtxtp").join("config.json"))
}
