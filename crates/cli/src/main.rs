#![forbid(unsafe_code)]
#![deny(warnings, unused_must_use, dead_code, missing_debug_implementations)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! `liquid-types` command line.
//!
//! Reads Shopify's `objects.json`, writes the TypeScript declaration file and
//! optionally checks an existing one for drift. Settings come from flags, then
//! `liquid-types.toml`, then built-in defaults.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod config;
mod generate;

#[derive(Parser)]
#[command(
    name = "liquid-types",
    version,
    about = "TypeScript declarations for Shopify Liquid objects"
)]
struct Cli {
    /// Log debug output (overrides LIQUID_TYPES_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the declaration file from objects.json
    Generate(generate::GenerateArgs),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let code = match cli.command {
        Commands::Generate(args) => generate::run(args),
    };
    std::process::exit(code);
}

/// Run a command, printing its error and mapping it to exit status 1.
pub(crate) fn run_cli<F>(f: F) -> i32
where
    F: FnOnce() -> Result<(), String>,
{
    match f() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{} {err}", console::style("error:").red().bold());
            1
        }
    }
}

const CRATES: [&str; 2] = [module_path!(), "liquid_types_core"];

/// Check if a string is a plain log level (not a complex filter spec)
fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}

/// Filter directives for the fmt layer.
fn filter_spec(verbose: bool, env: Option<String>) -> String {
    let scoped = |level: &str| {
        CRATES
            .iter()
            .map(|krate| format!("{krate}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    };
    if verbose {
        return scoped("debug");
    }
    // LIQUID_TYPES_LOG is a plain level ("debug") or a full filter spec
    // like "liquid_types_core=trace,liquid_types=info"
    match env {
        Some(level) if is_plain_level(&level) => scoped(&level.to_lowercase()),
        Some(spec) => spec,
        None => scoped("info"),
    }
}

fn init_tracing(verbose: bool) {
    let filter = filter_spec(verbose, std::env::var("LIQUID_TYPES_LOG").ok());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}
