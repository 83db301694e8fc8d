use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Network protocol a security rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityRuleProtocol {
    /// Matches every protocol.
    #[serde(rename = "*")]
    Asterisk,
    Ah,
    Esp,
    Icmp,
    Tcp,
    Udp,
}

impl SecurityRuleProtocol {
    /// Every protocol code the API accepts.
    pub const ALL: [SecurityRuleProtocol; 6] = [
        SecurityRuleProtocol::Asterisk,
        SecurityRuleProtocol::Ah,
        SecurityRuleProtocol::Esp,
        SecurityRuleProtocol::Icmp,
        SecurityRuleProtocol::Tcp,
        SecurityRuleProtocol::Udp,
    ];

    /// Wire value sent to the API.
    pub const fn as_str(self) -> &'static str {
        match self {
            SecurityRuleProtocol::Asterisk => "*",
            SecurityRuleProtocol::Ah => "Ah",
            SecurityRuleProtocol::Esp => "Esp",
            SecurityRuleProtocol::Icmp => "Icmp",
            SecurityRuleProtocol::Tcp => "Tcp",
            SecurityRuleProtocol::Udp => "Udp",
        }
    }
}

impl Display for SecurityRuleProtocol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Traffic direction a security rule is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityRuleDirection {
    Inbound,
    Outbound,
}

impl SecurityRuleDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            SecurityRuleDirection::Inbound => "Inbound",
            SecurityRuleDirection::Outbound => "Outbound",
        }
    }
}

impl Display for SecurityRuleDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether matching traffic is allowed or denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityRuleAccess {
    Allow,
    Deny,
}

impl SecurityRuleAccess {
    pub const fn as_str(self) -> &'static str {
        match self {
            SecurityRuleAccess::Allow => "Allow",
            SecurityRuleAccess::Deny => "Deny",
        }
    }
}

impl Display for SecurityRuleAccess {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Properties block of a network security rule.
///
/// Optional fields that are `None` are omitted from the JSON payload entirely;
/// the API treats a missing field differently from an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityRulePropertiesFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub protocol: SecurityRuleProtocol,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_port_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_port_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_address_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_address_prefix: Option<String>,
    pub access: SecurityRuleAccess,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    pub direction: SecurityRuleDirection,
}

/// A network security rule as accepted by the Azure networking API.
///
/// `SecurityRule::default()` is the empty rule: no name and no properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<SecurityRulePropertiesFormat>,
}

impl SecurityRule {
    /// True when neither a name nor properties are set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.properties.is_none()
    }

    /// Direction of the rule, if properties are present.
    pub fn direction(&self) -> Option<SecurityRuleDirection> {
        self.properties.as_ref().map(|p| p.direction)
    }
}

/// The `properties` envelope of a network security group.
///
/// Only `securityRules` is modelled; other group properties are ignored when
/// reading, but the rules key itself is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityGroupProperties {
    pub security_rules: Vec<SecurityRule>,
}

#[cfg(test)]
mod tests {
    use super::{
        SecurityRule, SecurityRuleAccess, SecurityRuleDirection, SecurityRulePropertiesFormat,
        SecurityRuleProtocol,
    };

    fn minimal_rule() -> SecurityRule {
        SecurityRule {
            name: Some("allow-all".to_string()),
            properties: Some(SecurityRulePropertiesFormat {
                description: None,
                protocol: SecurityRuleProtocol::Asterisk,
                source_port_range: None,
                destination_port_range: None,
                source_address_prefix: None,
                destination_address_prefix: None,
                access: SecurityRuleAccess::Allow,
                priority: None,
                direction: SecurityRuleDirection::Inbound,
            }),
        }
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let json = serde_json::to_value(minimal_rule()).expect("serialize");
        let props = json.get("properties").expect("properties key");
        assert_eq!(props.get("protocol").and_then(|v| v.as_str()), Some("*"));
        assert!(props.get("description").is_none());
        assert!(props.get("priority").is_none());
        assert!(props.get("sourcePortRange").is_none());
    }

    #[test]
    fn empty_rule_serializes_to_empty_object() {
        let rule = SecurityRule::default();
        assert!(rule.is_empty());
        assert_eq!(serde_json::to_string(&rule).expect("serialize"), "{}");
    }

    #[test]
    fn wire_strings_match_display() {
        for protocol in SecurityRuleProtocol::ALL {
            let encoded = serde_json::to_string(&protocol).expect("serialize");
            assert_eq!(encoded, format!("\"{protocol}\""));
        }
        assert_eq!(SecurityRuleDirection::Outbound.to_string(), "Outbound");
        assert_eq!(SecurityRuleAccess::Deny.as_str(), "Deny");
    }
}
