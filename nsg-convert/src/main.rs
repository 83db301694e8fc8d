use anyhow::{Context, Result};
use armnet_core::{format_json, parse_file};
use clap::Parser;
use nsg_convert::converters::{direction_mappings, protocol_mappings};
use nsg_convert::report::{render_payload_summary, render_rules, render_tables};
use serde::Serialize;

mod cli;
mod convert;
mod logging;
mod path_guard;
mod verify_cmd;

use cli::{Cli, Command, InspectArgs, OutputFormat, TablesArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match cli.command {
        Command::Convert(args) => convert::run_convert(args),
        Command::Verify(args) => verify_cmd::run_verify(args),
        Command::Tables(args) => run_tables(args),
        Command::Inspect(args) => run_inspect(args),
    }
}

fn run_tables(args: TablesArgs) -> Result<()> {
    match args.format {
        OutputFormat::Text => println!("{}", render_tables()),
        OutputFormat::Json => {
            let tables = Tables {
                protocols: protocol_mappings()
                    .iter()
                    .map(|(rule_value, code)| Mapping {
                        rule: rule_value.as_str(),
                        api: code.as_str(),
                    })
                    .collect(),
                directions: direction_mappings()
                    .iter()
                    .map(|(rule_value, code)| Mapping {
                        rule: rule_value.as_str(),
                        api: code.as_str(),
                    })
                    .collect(),
                access: "Allow",
            };
            println!("{}", serde_json::to_string_pretty(&tables)?);
        }
    }
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let rules = parse_file(&args.file)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;
    tracing::debug!(path = %args.file.display(), rules = rules.len(), "parsed payload");

    match args.format {
        OutputFormat::Text => {
            println!("{}", render_rules(&rules));
            println!("{}", render_payload_summary(&rules));
        }
        OutputFormat::Json => println!("{}", format_json(&rules)),
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct Tables {
    protocols: Vec<Mapping>,
    directions: Vec<Mapping>,
    access: &'static str,
}

#[derive(Debug, Serialize)]
struct Mapping {
    rule: &'static str,
    api: &'static str,
}
