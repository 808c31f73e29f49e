//! Configuration file support for checkdeps.
//!
//! Provides YAML-based configuration through `checkdeps.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line flags.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::cli::Args;
use crate::shared::error::CheckdepsError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "checkdeps.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub trim: Option<bool>,
    pub baseurl: Option<String>,
    pub check: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Settings for one run after merging flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub trim: bool,
    pub base_url: Option<String>,
    pub check: bool,
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

/// Auto-discover config next to the lockfile. Returns `None` silently if not found.
pub fn discover_config(lockfile: &Path) -> Result<Option<ConfigFile>> {
    let dir = match lockfile.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        OutputFormat::from_str(format).map_err(|message| CheckdepsError::InvalidConfig {
            message,
            hint: "Set 'format' to one of: report, dot, json.".to_string(),
        })?;
    }
    if let Some(ref baseurl) = config.baseurl {
        if baseurl.trim().is_empty() {
            return Err(CheckdepsError::InvalidConfig {
                message: "'baseurl' must not be empty".to_string(),
                hint: "Remove the key, or set it to a URL prefix such as \
                       https://github.com/<org>/<repo>/blob/master/"
                    .to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Merges command-line flags over the config file.
///
/// Explicit flags win for `format` and `baseurl`; boolean switches are
/// enabled when either source enables them.
pub fn merge(args: &Args, config: Option<&ConfigFile>) -> Result<Settings> {
    let config_format = config
        .and_then(|c| c.format.as_deref())
        .map(OutputFormat::from_str)
        .transpose()
        .map_err(|message| CheckdepsError::InvalidConfig {
            message,
            hint: "Set 'format' to one of: report, dot, json.".to_string(),
        })?;

    Ok(Settings {
        format: args
            .requested_format()
            .or(config_format)
            .unwrap_or_default(),
        trim: args.trim || config.and_then(|c| c.trim).unwrap_or(false),
        base_url: args
            .baseurl
            .clone()
            .or_else(|| config.and_then(|c| c.baseurl.clone())),
        check: args.check || config.and_then(|c| c.check).unwrap_or(false),
    })
}
