use armnet_core::network::{SecurityRule, SecurityRuleDirection};
use armnet_core::{format_rule, format_summary};
use colored::Colorize;

use crate::conversion_summary::{render as render_conversion_summary, ConversionSummary};
use crate::converters::{direction_mappings, protocol_mappings, ConvertError};

/// Render converted rules for terminal output, one line each.
pub fn render_rules(rules: &[SecurityRule]) -> String {
    let mut out = Vec::with_capacity(rules.len());
    for rule in rules {
        let line = format_rule(rule);
        let colored = match rule.direction() {
            Some(SecurityRuleDirection::Inbound) => line.green().to_string(),
            Some(SecurityRuleDirection::Outbound) => line.yellow().to_string(),
            None => line.magenta().to_string(),
        };
        out.push(colored);
    }
    out.join("\n")
}

/// Render conversion failures, one line each.
pub fn render_failures(errors: &[&ConvertError]) -> String {
    errors
        .iter()
        .map(|e| format!("! {e}").red().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the conversion summary line.
pub fn render_summary(summary: ConversionSummary) -> String {
    render_conversion_summary(summary).cyan().to_string()
}

/// Render counts for rules read from an existing payload.
pub fn render_payload_summary(rules: &[SecurityRule]) -> String {
    format_summary(rules).cyan().to_string()
}

/// Render both lookup tables.
pub fn render_tables() -> String {
    let mut out = Vec::new();
    out.push("protocols".to_string());
    for (rule_value, code) in protocol_mappings() {
        out.push(format!("- {rule_value} -> {code}"));
    }
    out.push(String::new());
    out.push("directions".to_string());
    for (rule_value, code) in direction_mappings() {
        out.push(format!("- {rule_value} -> {code}"));
    }
    out.push(String::new());
    out.push("access".to_string());
    out.push("- Allow (fixed)".to_string());
    out.join("\n")
}
