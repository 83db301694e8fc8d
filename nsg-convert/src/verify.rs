//! Pre-flight checks for a rule set.
//!
//! The converter handles one rule at a time and leaves set-level concerns to
//! its caller. These checks cover them before anything is converted:
//!
//! - `unrecognized_protocol` / `unrecognized_direction` (error): the rule
//!   would fail conversion
//! - `duplicate_rule_name` (error): names must be unique, compared
//!   case-insensitively as the API does
//! - `empty_rule_name` (warning)
//! - `duplicate_priority` (warning): two rules in the same direction share a
//!   priority, which the API rejects

use std::collections::BTreeMap;

use serde::Serialize;

use crate::converters::{sdk_direction, sdk_protocol};
use crate::model::SecurityRule;
use crate::ruleset::RuleSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerifySeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyIssue {
    pub severity: VerifySeverity,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub rules: usize,
    pub errors: usize,
    pub warnings: usize,
    pub issues: Vec<VerifyIssue>,
}

/// Run every check against `set`.
pub fn build_verify_report(set: &RuleSet) -> VerifyReport {
    let mut issues = Vec::new();
    issues.extend(enum_issues(&set.rules));
    issues.extend(name_issues(&set.rules));
    issues.extend(priority_issues(&set.rules));

    let errors = issues
        .iter()
        .filter(|i| i.severity == VerifySeverity::Error)
        .count();
    let warnings = issues.len() - errors;
    VerifyReport {
        rules: set.rules.len(),
        errors,
        warnings,
        issues,
    }
}

pub fn render_verify_text(report: &VerifyReport) -> String {
    let mut out = Vec::new();
    out.push(format!("verify rules={}", report.rules));
    out.push(format!(
        "result errors={} warnings={}",
        report.errors, report.warnings
    ));
    out.push("issues".to_string());
    if report.issues.is_empty() {
        out.push("- none".to_string());
        return out.join("\n");
    }
    for issue in &report.issues {
        let sev = match issue.severity {
            VerifySeverity::Error => "error",
            VerifySeverity::Warning => "warning",
        };
        out.push(format!("- [{sev}] {}: {}", issue.code, issue.message));
    }
    out.join("\n")
}

fn enum_issues(rules: &[SecurityRule]) -> Vec<VerifyIssue> {
    let mut out = Vec::new();
    for rule in rules {
        if sdk_protocol(&rule.protocol).is_none() {
            out.push(err(
                "unrecognized_protocol",
                format!("rule '{}' has unrecognized protocol '{}'", rule.name, rule.protocol),
            ));
        }
        if sdk_direction(&rule.direction).is_none() {
            out.push(err(
                "unrecognized_direction",
                format!(
                    "rule '{}' has unrecognized direction '{}'",
                    rule.name, rule.direction
                ),
            ));
        }
    }
    out
}

fn name_issues(rules: &[SecurityRule]) -> Vec<VerifyIssue> {
    let mut out = Vec::new();
    let mut by_name: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for (idx, rule) in rules.iter().enumerate() {
        if rule.name.trim().is_empty() {
            out.push(warn(
                "empty_rule_name",
                format!("rule at index {idx} has no name"),
            ));
            continue;
        }
        by_name
            .entry(rule.name.to_ascii_lowercase())
            .or_default()
            .push(&rule.name);
    }

    for names in by_name.values() {
        if names.len() < 2 {
            continue;
        }
        out.push(err(
            "duplicate_rule_name",
            format!("rule name used {} times ({})", names.len(), names.join(",")),
        ));
    }
    out
}

fn priority_issues(rules: &[SecurityRule]) -> Vec<VerifyIssue> {
    // Rules with unrecognized enums are already reported above.
    let mut by_slot: BTreeMap<(&str, i32), Vec<&str>> = BTreeMap::new();
    for rule in rules {
        let Some(direction) = sdk_direction(&rule.direction) else {
            continue;
        };
        if sdk_protocol(&rule.protocol).is_none() {
            continue;
        }
        by_slot
            .entry((direction.as_str(), rule.priority))
            .or_default()
            .push(&rule.name);
    }

    by_slot
        .iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|((direction, priority), names)| {
            warn(
                "duplicate_priority",
                format!(
                    "{direction} priority {priority} shared by rules ({})",
                    names.join(",")
                ),
            )
        })
        .collect()
}

fn err(code: &str, message: String) -> VerifyIssue {
    VerifyIssue {
        severity: VerifySeverity::Error,
        code: code.to_string(),
        message,
    }
}

fn warn(code: &str, message: String) -> VerifyIssue {
    VerifyIssue {
        severity: VerifySeverity::Warning,
        code: code.to_string(),
        message,
    }
}
