//! Configuration file support for deptree.
//!
//! Provides YAML-based configuration through `deptree.config.yml` files,
//! including data structures, file loading, validation and merging with
//! command-line options.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "deptree.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub strict_levels: Option<bool>,
    pub strip_log_prefix: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Options after applying CLI flags over config values over defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveOptions {
    pub format: OutputFormat,
    pub strict_levels: bool,
    pub strip_log_prefix: bool,
}

impl Default for EffectiveOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            strict_levels: false,
            strip_log_prefix: true,
        }
    }
}

/// Values given explicitly on the command line; `None` means "not given".
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub format: Option<OutputFormat>,
    pub strict_levels: Option<bool>,
    pub strip_log_prefix: Option<bool>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Merge CLI overrides and an optional config file into effective options.
pub fn resolve_options(cli: CliOverrides, config: Option<&ConfigFile>) -> Result<EffectiveOptions> {
    let defaults = EffectiveOptions::default();

    let config_format = config
        .and_then(|c| c.format.as_deref())
        .map(parse_format)
        .transpose()?;

    Ok(EffectiveOptions {
        format: cli.format.or(config_format).unwrap_or(defaults.format),
        strict_levels: cli
            .strict_levels
            .or(config.and_then(|c| c.strict_levels))
            .unwrap_or(defaults.strict_levels),
        strip_log_prefix: cli
            .strip_log_prefix
            .or(config.and_then(|c| c.strip_log_prefix))
            .unwrap_or(defaults.strip_log_prefix),
    })
}

fn parse_format(value: &str) -> Result<OutputFormat> {
    value
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("Invalid config: format: {}", e))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if format.parse::<OutputFormat>().is_err() {
            bail!(
                "Invalid config: format '{}' is not supported.\n\n\
                 💡 Hint: Use 'json' or 'markdown'.",
                format
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
