use armnet_core::network::{SecurityRule, SecurityRuleDirection};
use serde::Serialize;

use crate::converters::ConvertError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub rules: usize,
    pub converted: usize,
    pub failed: usize,
    pub inbound: usize,
    pub outbound: usize,
}

pub fn summarize(outcomes: &[Result<SecurityRule, ConvertError>]) -> ConversionSummary {
    let mut summary = ConversionSummary {
        rules: outcomes.len(),
        ..ConversionSummary::default()
    };
    for outcome in outcomes {
        match outcome {
            Ok(rule) => {
                summary.converted += 1;
                match rule.direction() {
                    Some(SecurityRuleDirection::Inbound) => summary.inbound += 1,
                    Some(SecurityRuleDirection::Outbound) => summary.outbound += 1,
                    None => {}
                }
            }
            Err(_) => summary.failed += 1,
        }
    }
    summary
}

pub fn render(summary: ConversionSummary) -> String {
    format!(
        "convert_summary rules={} converted={} failed={} inbound={} outbound={}",
        summary.rules, summary.converted, summary.failed, summary.inbound, summary.outbound
    )
}

#[cfg(test)]
mod tests {
    use super::{render, summarize};
    use crate::converters::security_rule_to_sdk;
    use crate::model::{SecurityGroupProtocol, SecurityRule, SecurityRuleDirection};

    #[test]
    fn counts_directions_and_failures() {
        let rules = [
            SecurityRule::new("in", SecurityGroupProtocol::TCP, SecurityRuleDirection::INBOUND),
            SecurityRule::new("out", SecurityGroupProtocol::ALL, SecurityRuleDirection::OUTBOUND),
            SecurityRule::new(
                "bad",
                SecurityGroupProtocol::new("Gre"),
                SecurityRuleDirection::INBOUND,
            ),
        ];
        let outcomes = rules.iter().map(security_rule_to_sdk).collect::<Vec<_>>();

        assert_eq!(
            render(summarize(&outcomes)),
            "convert_summary rules=3 converted=2 failed=1 inbound=1 outbound=1"
        );
    }
}
