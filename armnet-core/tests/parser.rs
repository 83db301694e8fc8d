use std::path::PathBuf;

use armnet_core::{
    parse, parse_file, ParseError, SecurityRuleAccess, SecurityRuleDirection,
    SecurityRuleProtocol,
};

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn parses_security_group_envelope() {
    let rules = parse_file(&fixture("fixtures/nsg-rules.json")).expect("parse should succeed");
    assert_eq!(rules.len(), 3);

    let ssh = rules[0].properties.as_ref().expect("ssh properties");
    assert_eq!(rules[0].name.as_deref(), Some("allow-ssh"));
    assert_eq!(ssh.protocol, SecurityRuleProtocol::Tcp);
    assert_eq!(ssh.destination_port_range.as_deref(), Some("22"));
    assert_eq!(ssh.priority, Some(100));

    let egress = rules[1].properties.as_ref().expect("egress properties");
    assert_eq!(egress.protocol, SecurityRuleProtocol::Asterisk);
    assert_eq!(egress.direction, SecurityRuleDirection::Outbound);
    assert!(egress.description.is_none());
    assert!(egress.source_address_prefix.is_none());

    let deny = rules[2].properties.as_ref().expect("deny properties");
    assert_eq!(deny.access, SecurityRuleAccess::Deny);
}

#[test]
fn parses_bare_rule_array() {
    let rules = parse(
        br#"[{"name":"r1","properties":{"protocol":"Udp","access":"Allow","direction":"Inbound"}}]"#,
    )
    .expect("parse should succeed");
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].direction(), Some(SecurityRuleDirection::Inbound));
}

#[test]
fn rejects_unknown_protocol_code() {
    let err = parse(
        br#"[{"name":"r1","properties":{"protocol":"Sctp","access":"Allow","direction":"Inbound"}}]"#,
    )
    .expect_err("unknown protocol should fail");
    assert!(matches!(err, ParseError::Json(_)));
}

#[test]
fn ignores_other_group_properties_but_requires_rules_key() {
    let rules = parse(br#"{"provisioningState":"Succeeded","securityRules":[]}"#)
        .expect("extra keys are ignored");
    assert!(rules.is_empty());

    let err = parse(br#"{"rules":[]}"#).expect_err("securityRules is required");
    assert!(matches!(err, ParseError::Json(_)));
}
