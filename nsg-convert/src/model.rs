//! Declarative security rules as written by users.
//!
//! These mirror the security rules found on a cluster's network spec. Protocol
//! and direction stay string-backed so that a rule file can carry any value;
//! whether a value is recognized is decided by [`crate::converters`], not at
//! parse time.

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Protocol named by a declarative rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityGroupProtocol(Cow<'static, str>);

impl SecurityGroupProtocol {
    pub const TCP: Self = Self(Cow::Borrowed("Tcp"));
    pub const UDP: Self = Self(Cow::Borrowed("Udp"));
    pub const ICMP: Self = Self(Cow::Borrowed("Icmp"));
    /// Any protocol.
    pub const ALL: Self = Self(Cow::Borrowed("All"));

    pub fn new(value: impl Into<String>) -> Self {
        Self(Cow::Owned(value.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SecurityGroupProtocol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Display for SecurityGroupProtocol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Direction named by a declarative rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityRuleDirection(Cow<'static, str>);

impl SecurityRuleDirection {
    pub const INBOUND: Self = Self(Cow::Borrowed("Inbound"));
    pub const OUTBOUND: Self = Self(Cow::Borrowed("Outbound"));

    pub fn new(value: impl Into<String>) -> Self {
        Self(Cow::Owned(value.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SecurityRuleDirection {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Display for SecurityRuleDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single allow rule.
///
/// `name` must be unique within its rule set; that is checked by
/// [`crate::verify`], not here. An empty `description` means "not set".
/// Unknown keys are rejected so a misspelled field never widens a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SecurityRule {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub protocol: SecurityGroupProtocol,
    pub direction: SecurityRuleDirection,
    #[serde(default)]
    pub priority: i32,
    /// CIDR, address, service tag or `*`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Port, range (`80-90`) or comma list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ports: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_ports: Option<String>,
}

impl SecurityRule {
    /// Rule with only the required fields set.
    pub fn new(
        name: impl Into<String>,
        protocol: SecurityGroupProtocol,
        direction: SecurityRuleDirection,
    ) -> Self {
        Self {
            name: name.into(),
            protocol,
            direction,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SecurityGroupProtocol, SecurityRule, SecurityRuleDirection};

    #[test]
    fn borrowed_and_owned_values_compare_equal() {
        assert_eq!(SecurityGroupProtocol::TCP, SecurityGroupProtocol::new("Tcp"));
        assert_ne!(SecurityGroupProtocol::TCP, SecurityGroupProtocol::from("tcp"));
        assert_eq!(SecurityRuleDirection::from("Outbound"), SecurityRuleDirection::OUTBOUND);
    }

    #[test]
    fn deserializes_camel_case_keys() {
        let rule: SecurityRule = serde_json::from_str(
            r#"{"name":"r1","protocol":"Udp","direction":"Outbound","priority":300,
                "sourcePorts":"1000-2000","destinationPorts":"53"}"#,
        )
        .expect("deserialize");

        assert_eq!(rule.protocol, SecurityGroupProtocol::UDP);
        assert_eq!(rule.direction, SecurityRuleDirection::OUTBOUND);
        assert_eq!(rule.source_ports.as_deref(), Some("1000-2000"));
        assert_eq!(rule.destination_ports.as_deref(), Some("53"));
        assert!(rule.source.is_none());
        assert!(rule.description.is_empty());
    }

    #[test]
    fn unrecognized_values_still_deserialize() {
        let rule: SecurityRule =
            serde_json::from_str(r#"{"name":"r1","protocol":"Sctp","direction":"Sideways"}"#)
                .expect("deserialize");
        assert_eq!(rule.protocol.as_str(), "Sctp");
        assert_eq!(rule.direction.to_string(), "Sideways");
        assert_eq!(rule.priority, 0);
    }

    #[test]
    fn rejects_snake_case_keys() {
        let err = serde_json::from_str::<SecurityRule>(
            r#"{"name":"r1","protocol":"Tcp","direction":"Inbound","destination_ports":"22"}"#,
        )
        .expect_err("unknown key");
        assert!(err.to_string().contains("destination_ports"));
    }
}
