use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::SecurityRule;

/// An ordered list of declarative rules loaded from one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSet {
    #[serde(default, rename = "rule", alias = "rules")]
    pub rules: Vec<SecurityRule>,
}

/// On-disk encoding of a rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSetFormat {
    Toml,
    Json,
}

impl RuleSetFormat {
    /// `.json` files are JSON; everything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => RuleSetFormat::Json,
            _ => RuleSetFormat::Toml,
        }
    }
}

/// Errors returned when loading rule set files.
#[derive(Debug, Error)]
pub enum RuleSetLoadError {
    #[error("failed to read rule set {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse rule set {path}: {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("failed to parse rule set {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// Load a rule set from a TOML or JSON file.
pub fn load_rule_set(path: &Path) -> Result<RuleSet, RuleSetLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| RuleSetLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let format = RuleSetFormat::from_path(path);
    let set = parse_rule_set(&raw, format, path.display().to_string())?;
    tracing::debug!(
        path = %path.display(),
        ?format,
        rules = set.rules.len(),
        "loaded rule set"
    );
    Ok(set)
}

/// Parse a rule set from a string. `path` is only used in error messages.
pub fn parse_rule_set(
    raw: &str,
    format: RuleSetFormat,
    path: String,
) -> Result<RuleSet, RuleSetLoadError> {
    match format {
        RuleSetFormat::Toml => {
            toml::from_str(raw).map_err(|source| RuleSetLoadError::Toml { path, source })
        }
        RuleSetFormat::Json => {
            serde_json::from_str(raw).map_err(|source| RuleSetLoadError::Json { path, source })
        }
    }
}
