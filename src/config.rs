// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::source::{ConfiguredSource, FileSource, SampleSource};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Finboard", "finboard"));

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Sample,
    File,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,

    /// Dataset JSON, required when `kind = "file"`.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Simulated latency of the sample source.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_latency_ms() -> u64 {
    1000
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            kind: SourceKind::default(),
            path: None,
            latency_ms: default_latency_ms(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            currency: default_currency(),
        }
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("finboard.toml"))
}

impl Config {
    /// A missing file yields defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents)
                .with_context(|| format!("Invalid config file {}", path.display())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(err) => {
                Err(err).with_context(|| format!("Read config file {}", path.display()))
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies the global CLI flags on top of the file values.
    pub fn apply_overrides(&mut self, m: &clap::ArgMatches) {
        if let Some(level) = m.get_one::<String>("log-level") {
            self.logging.level = level.clone();
        }
        if let Some(path) = m.get_one::<String>("data") {
            self.source.kind = SourceKind::File;
            self.source.path = Some(PathBuf::from(path));
        }
        if let Some(ms) = m.get_one::<u64>("latency-ms") {
            self.source.latency_ms = *ms;
        }
    }

    pub fn data_source(&self) -> Result<ConfiguredSource> {
        match self.source.kind {
            SourceKind::Sample => Ok(ConfiguredSource::Sample(SampleSource::new(
                Duration::from_millis(self.source.latency_ms),
            ))),
            SourceKind::File => {
                let path = self
                    .source
                    .path
                    .as_ref()
                    .context("source.kind = \"file\" requires source.path")?;
                Ok(ConfiguredSource::File(FileSource::new(path)))
            }
        }
    }
}
