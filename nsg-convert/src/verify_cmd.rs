use anyhow::{bail, Context, Result};
use nsg_convert::ruleset::load_rule_set;
use nsg_convert::verify::{build_verify_report, render_verify_text};

use crate::cli::{OutputFormat, VerifyArgs};

pub fn run_verify(args: VerifyArgs) -> Result<()> {
    let set = load_rule_set(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let report = build_verify_report(&set);
    tracing::debug!(
        errors = report.errors,
        warnings = report.warnings,
        "verify finished"
    );

    match args.format {
        OutputFormat::Text => println!("{}", render_verify_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if report.errors > 0 {
        bail!("verify failed: {} errors", report.errors);
    }
    if args.strict && report.warnings > 0 {
        bail!("verify failed in strict mode: {} warnings", report.warnings);
    }
    Ok(())
}
