//! The `convert` command.
//!
//! Every rule is converted independently so all failures can be reported in
//! one pass. Output is only written when every rule converted, or when
//! `--skip-invalid` asks for the convertible subset.

use anyhow::{bail, Context, Result};
use armnet_core::{format_json, network, write_file};
use nsg_convert::conversion_summary::summarize;
use nsg_convert::converters::{security_rule_to_sdk, ConvertError};
use nsg_convert::report::{render_failures, render_rules, render_summary};
use nsg_convert::ruleset::load_rule_set;

use crate::cli::{ConvertArgs, OutputFormat};
use crate::path_guard::ensure_output_not_input;

pub fn run_convert(args: ConvertArgs) -> Result<()> {
    if let Some(output) = &args.output {
        ensure_output_not_input(output, &args.input)?;
    }

    let set = load_rule_set(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    let outcomes = set
        .rules
        .iter()
        .map(security_rule_to_sdk)
        .collect::<Vec<_>>();
    let summary = summarize(&outcomes);

    let failures: Vec<&ConvertError> = outcomes
        .iter()
        .filter_map(|o| o.as_ref().err())
        .collect();
    for failure in &failures {
        tracing::warn!(rule = failure.rule(), field = %failure.field(), "rule not converted");
    }
    if !failures.is_empty() && !args.skip_invalid {
        println!("{}", render_failures(&failures));
        println!("{}", render_summary(summary));
        bail!(
            "convert failed: {} of {} rules could not be converted",
            summary.failed,
            summary.rules
        );
    }

    let converted: Vec<network::SecurityRule> = outcomes
        .iter()
        .filter_map(|o| o.as_ref().ok().cloned())
        .collect();

    if let Some(output) = &args.output {
        write_file(&converted, output)
            .with_context(|| format!("failed to write output {}", output.display()))?;
        tracing::debug!(path = %output.display(), rules = converted.len(), "wrote payload");
    }

    match args.format {
        OutputFormat::Text => {
            if !converted.is_empty() {
                println!("{}", render_rules(&converted));
            }
            if !failures.is_empty() {
                println!("{}", render_failures(&failures));
            }
            println!("{}", render_summary(summary));
        }
        OutputFormat::Json => println!("{}", format_json(&converted)),
    }

    Ok(())
}
