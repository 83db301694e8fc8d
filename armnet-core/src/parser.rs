use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::network::{SecurityGroupProperties, SecurityRule};

/// Errors that can occur while reading security rules from JSON.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input was not a security rule payload.
    #[error("failed to parse security rules: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to read input file.
    #[error("failed to read security rules file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Envelope(SecurityGroupProperties),
    Rules(Vec<SecurityRule>),
}

/// Parse JSON bytes holding either a `{"securityRules": [...]}` envelope or a
/// bare array of rules.
pub fn parse(json: &[u8]) -> Result<Vec<SecurityRule>, ParseError> {
    let doc: Document = serde_json::from_slice(json)?;
    Ok(match doc {
        Document::Envelope(props) => props.security_rules,
        Document::Rules(rules) => rules,
    })
}

/// Parse a JSON file of security rules.
pub fn parse_file(path: &Path) -> Result<Vec<SecurityRule>, ParseError> {
    let bytes = fs::read(path)?;
    parse(&bytes)
}
