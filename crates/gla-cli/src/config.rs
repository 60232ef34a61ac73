use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use gla_text::CounterKind;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::OutputFormat;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "gla.toml";

/// Defaults for the command-line tool, read from TOML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Counter used by `count` and `check` when `--kind` is not given.
    pub counter_kind: CounterKind,
    /// Output format when `--format` is not given.
    pub format: OutputFormat,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            counter_kind: CounterKind::default(),
            format: OutputFormat::Text,
            pretty: true,
        }
    }
}

impl CliConfig {
    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, `gla.toml` in the working
    /// directory is used when present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(&fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
