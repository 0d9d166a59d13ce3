//! Layered configuration for readings and output.
//!
//! Layers, lowest to highest precedence:
//! 1. Built-in defaults
//! 2. A TOML file, from an explicit path or the `LIUYAO_CONFIG` variable
//! 3. Per-invocation overrides (CLI flags)
//!
//! ```toml
//! [reading]
//! year_boundary = "spring-commencement"   # or "calendar"
//! month_rule = "five-tigers"              # or "calendar-month"
//! void_method = "xun"                     # or "branch-table"
//!
//! [output]
//! format = "prompt"                       # "text", "json" or "prompt"
//! ```

pub mod error;
pub mod values;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use liuyao_base::{MonthRule, VoidMethod, YearBoundary};
use liuyao_reading::ReadingConfig;
use serde::Deserialize;
use tracing::debug;

pub use error::ConfigError;
pub use values::{OutputFormat, parse_month_rule, parse_void_method, parse_year_boundary};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "LIUYAO_CONFIG";

/// Fully resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LiuyaoConfig {
    /// Reading options.
    pub reading: ReadingConfig,
    /// Output format.
    pub format: OutputFormat,
}

/// Per-invocation overrides; `None` keeps the lower layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigOverrides {
    pub year_boundary: Option<YearBoundary>,
    pub month_rule: Option<MonthRule>,
    pub void_method: Option<VoidMethod>,
    pub format: Option<OutputFormat>,
}

// ---------------------------------------------------------------------------
// File layer
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    reading: ReadingSection,
    #[serde(default)]
    output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReadingSection {
    year_boundary: Option<String>,
    month_rule: Option<String>,
    void_method: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputSection {
    format: Option<String>,
}

impl LiuyaoConfig {
    /// Apply a TOML document on top of this config.
    ///
    /// `origin` is only used in error messages.
    pub fn merge_toml(self, text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;

        let mut out = self;
        if let Some(v) = file.reading.year_boundary {
            out.reading.year_boundary = parse_year_boundary(&v)?;
        }
        if let Some(v) = file.reading.month_rule {
            out.reading.month_rule = parse_month_rule(&v)?;
        }
        if let Some(v) = file.reading.void_method {
            out.reading.void_method = parse_void_method(&v)?;
        }
        if let Some(v) = file.output.format {
            out.format = v.parse()?;
        }
        Ok(out)
    }

    /// Apply a TOML file on top of this config.
    pub fn merge_file(self, path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        self.merge_toml(&text, path)
    }

    /// Apply per-invocation overrides.
    pub fn with_overrides(self, overrides: &ConfigOverrides) -> Self {
        let mut out = self;
        if let Some(v) = overrides.year_boundary {
            out.reading.year_boundary = v;
        }
        if let Some(v) = overrides.month_rule {
            out.reading.month_rule = v;
        }
        if let Some(v) = overrides.void_method {
            out.reading.void_method = v;
        }
        if let Some(v) = overrides.format {
            out.format = v;
        }
        out
    }
}

/// Config file to read: the explicit path wins over the environment value.
pub fn config_path(explicit: Option<&Path>, env_value: Option<OsString>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// Resolve defaults and an optional file given an environment value.
pub fn load_with_env(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
) -> Result<LiuyaoConfig, ConfigError> {
    match config_path(explicit, env_value) {
        Some(path) => LiuyaoConfig::default().merge_file(&path),
        None => Ok(LiuyaoConfig::default()),
    }
}

/// Resolve defaults and an optional file, consulting `LIUYAO_CONFIG`.
pub fn load(explicit: Option<&Path>) -> Result<LiuyaoConfig, ConfigError> {
    load_with_env(explicit, std::env::var_os(CONFIG_ENV))
}
