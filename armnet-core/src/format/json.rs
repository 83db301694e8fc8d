use crate::network::{SecurityGroupProperties, SecurityRule};

/// Format rules as a pretty-printed JSON envelope.
pub fn format_json(rules: &[SecurityRule]) -> String {
    let envelope = SecurityGroupProperties {
        security_rules: rules.to_vec(),
    };
    serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| "{}".to_string())
}
