use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "nsg-convert")]
#[command(about = "Convert declarative firewall rules into Azure network security rules")]
pub struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Convert a rule set into Azure security rule payloads.
    Convert(ConvertArgs),
    /// Check a rule set before conversion.
    Verify(VerifyArgs),
    /// Show the protocol and direction lookup tables.
    Tables(TablesArgs),
    /// Show an existing Azure security rules payload.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Rule set file (.toml or .json).
    pub input: PathBuf,
    /// Write the converted `{"securityRules": [...]}` payload to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Emit the rules that convert and report the rest instead of failing.
    #[arg(long)]
    pub skip_invalid: bool,
}

#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Rule set file (.toml or .json).
    pub input: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Treat warnings as failures.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct TablesArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Azure security rules JSON (envelope or bare array).
    pub file: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
