use crate::network::{SecurityRule, SecurityRuleAccess, SecurityRuleDirection};

/// Format one rule as a single line.
///
/// Absent addresses and ports render as `-` so an unset field is never
/// confused with a wildcard.
pub fn format_rule(rule: &SecurityRule) -> String {
    let name = rule.name.as_deref().unwrap_or("<unnamed>");
    let Some(props) = &rule.properties else {
        return format!("? {name} (no properties)");
    };

    let marker = match props.direction {
        SecurityRuleDirection::Inbound => "<",
        SecurityRuleDirection::Outbound => ">",
    };
    let priority = props
        .priority
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());
    let mut line = format!(
        "{marker} {name} priority={priority} {} {} {} {}:{} -> {}:{}",
        props.direction,
        props.access,
        props.protocol,
        or_dash(&props.source_address_prefix),
        or_dash(&props.source_port_range),
        or_dash(&props.destination_address_prefix),
        or_dash(&props.destination_port_range),
    );
    if let Some(description) = &props.description {
        line.push_str(&format!(" # {description}"));
    }
    line
}

/// Format rules as plain text, one line each.
pub fn format_text(rules: &[SecurityRule]) -> String {
    rules.iter().map(format_rule).collect::<Vec<_>>().join("\n")
}

/// Format a simple summary of rule counts.
pub fn format_summary(rules: &[SecurityRule]) -> String {
    let mut inbound = 0;
    let mut outbound = 0;
    let mut allow = 0;
    let mut deny = 0;
    let mut empty = 0;

    for rule in rules {
        let Some(props) = &rule.properties else {
            empty += 1;
            continue;
        };
        match props.direction {
            SecurityRuleDirection::Inbound => inbound += 1,
            SecurityRuleDirection::Outbound => outbound += 1,
        }
        match props.access {
            SecurityRuleAccess::Allow => allow += 1,
            SecurityRuleAccess::Deny => deny += 1,
        }
    }

    format!(
        "rules={} inbound={inbound} outbound={outbound} allow={allow} deny={deny} empty={empty}",
        rules.len()
    )
}

fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}
