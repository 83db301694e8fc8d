use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::network::{SecurityGroupProperties, SecurityRule};

/// Errors that can occur while writing security rules as JSON.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to serialize the payload.
    #[error("failed to encode security rules: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to write output file.
    #[error("failed to write security rules file: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize rules into a pretty-printed `{"securityRules": [...]}` envelope.
pub fn write(rules: &[SecurityRule]) -> Result<Vec<u8>, WriteError> {
    let envelope = SecurityGroupProperties {
        security_rules: rules.to_vec(),
    };
    let mut bytes = serde_json::to_vec_pretty(&envelope)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Serialize rules and write them to `path`.
pub fn write_file(rules: &[SecurityRule], path: &Path) -> Result<(), WriteError> {
    let bytes = write(rules)?;
    fs::write(path, bytes)?;
    Ok(())
}
