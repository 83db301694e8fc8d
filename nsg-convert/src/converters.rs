//! Declarative rule to Azure network security rule conversion.
//!
//! Conversion is a pure field-by-field mapping plus two table lookups:
//!
//! | Rule protocol | API protocol |   | Rule direction | API direction |
//! |---------------|--------------|---|----------------|---------------|
//! | `Tcp`         | `Tcp`        |   | `Inbound`      | `Inbound`     |
//! | `Udp`         | `Udp`        |   | `Outbound`     | `Outbound`    |
//! | `Icmp`        | `Icmp`       |   |                |               |
//! | `All`         | `*`          |   |                |               |
//!
//! Any other protocol or direction fails the whole rule. No partial rule is
//! ever produced. Access is always `Allow`: declarative rules have no deny.

use std::fmt::{self, Display, Formatter};

use armnet_core::network::{
    self, SecurityRuleAccess, SecurityRuleDirection as SdkDirection,
    SecurityRuleProtocol as SdkProtocol,
};
use serde::Serialize;
use thiserror::Error;

use crate::model::{SecurityGroupProtocol, SecurityRule, SecurityRuleDirection};

static PROTOCOLS: [(SecurityGroupProtocol, SdkProtocol); 4] = [
    (SecurityGroupProtocol::TCP, SdkProtocol::Tcp),
    (SecurityGroupProtocol::UDP, SdkProtocol::Udp),
    (SecurityGroupProtocol::ALL, SdkProtocol::Asterisk),
    (SecurityGroupProtocol::ICMP, SdkProtocol::Icmp),
];

static DIRECTIONS: [(SecurityRuleDirection, SdkDirection); 2] = [
    (SecurityRuleDirection::INBOUND, SdkDirection::Inbound),
    (SecurityRuleDirection::OUTBOUND, SdkDirection::Outbound),
];

/// Rule field that carried an unrecognized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleField {
    Protocol,
    Direction,
}

impl Display for RuleField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RuleField::Protocol => f.write_str("protocol"),
            RuleField::Direction => f.write_str("direction"),
        }
    }
}

/// Errors returned when a rule cannot be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("rule {rule:?}: unrecognized {field} {value:?}")]
    UnrecognizedEnumValue {
        rule: String,
        field: RuleField,
        value: String,
    },
}

impl ConvertError {
    /// Name of the rule that failed.
    pub fn rule(&self) -> &str {
        match self {
            ConvertError::UnrecognizedEnumValue { rule, .. } => rule,
        }
    }

    pub fn field(&self) -> RuleField {
        match self {
            ConvertError::UnrecognizedEnumValue { field, .. } => *field,
        }
    }
}

/// Look up the API protocol code for a rule protocol.
pub fn sdk_protocol(protocol: &SecurityGroupProtocol) -> Option<SdkProtocol> {
    PROTOCOLS
        .iter()
        .find(|(known, _)| known == protocol)
        .map(|(_, code)| *code)
}

/// Look up the API direction code for a rule direction.
pub fn sdk_direction(direction: &SecurityRuleDirection) -> Option<SdkDirection> {
    DIRECTIONS
        .iter()
        .find(|(known, _)| known == direction)
        .map(|(_, code)| *code)
}

/// The protocol lookup table.
pub fn protocol_mappings() -> &'static [(SecurityGroupProtocol, SdkProtocol)] {
    &PROTOCOLS
}

/// The direction lookup table.
pub fn direction_mappings() -> &'static [(SecurityRuleDirection, SdkDirection)] {
    &DIRECTIONS
}

/// Convert a declarative rule into an Azure network security rule.
///
/// Protocol is resolved before direction, so a rule with both fields invalid
/// reports the protocol. Empty optional strings are left unset in the output
/// rather than sent as empty strings. Priority is always set.
///
/// # Errors
///
/// Returns [`ConvertError::UnrecognizedEnumValue`] if the protocol or
/// direction is not in its lookup table.
pub fn security_rule_to_sdk(rule: &SecurityRule) -> Result<network::SecurityRule, ConvertError> {
    let protocol = sdk_protocol(&rule.protocol)
        .ok_or_else(|| unrecognized(rule, RuleField::Protocol, rule.protocol.as_str()))?;
    let direction = sdk_direction(&rule.direction)
        .ok_or_else(|| unrecognized(rule, RuleField::Direction, rule.direction.as_str()))?;

    Ok(network::SecurityRule {
        name: Some(rule.name.clone()),
        properties: Some(network::SecurityRulePropertiesFormat {
            description: present(&rule.description),
            protocol,
            source_port_range: rule.source_ports.as_deref().and_then(present),
            destination_port_range: rule.destination_ports.as_deref().and_then(present),
            source_address_prefix: rule.source.as_deref().and_then(present),
            destination_address_prefix: rule.destination.as_deref().and_then(present),
            access: SecurityRuleAccess::Allow,
            priority: Some(rule.priority),
            direction,
        }),
    })
}

/// Convert a rule, returning the empty rule and `false` on failure.
///
/// Callers that only need to know whether conversion worked, and not why it
/// failed, can use this instead of [`security_rule_to_sdk`].
pub fn security_rule_to_sdk_or_default(rule: &SecurityRule) -> (network::SecurityRule, bool) {
    match security_rule_to_sdk(rule) {
        Ok(converted) => (converted, true),
        Err(_) => (network::SecurityRule::default(), false),
    }
}

/// Convert every rule in order, stopping at the first failure.
pub fn security_rules_to_sdk(
    rules: &[SecurityRule],
) -> Result<Vec<network::SecurityRule>, ConvertError> {
    rules.iter().map(security_rule_to_sdk).collect()
}

fn present(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn unrecognized(rule: &SecurityRule, field: RuleField, value: &str) -> ConvertError {
    ConvertError::UnrecognizedEnumValue {
        rule: rule.name.clone(),
        field,
        value: value.to_string(),
    }
}
