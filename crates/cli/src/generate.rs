//! `liquid-types generate`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use similar::{ChangeTag, TextDiff};
use tracing::{debug, info};

use liquid_types_core::{
    CommandFormatter, GenerateOptions, Generated, Generator, Passthrough, load_objects,
};

use crate::config::{ConfigFile, Settings};
use crate::run_cli;

/// Flags of `liquid-types generate`. Unset flags fall back to the config file.
#[derive(Args, Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateArgs {
    #[arg(
        long,
        value_name = "PATH",
        help = "Config file. Defaults to liquid-types.toml in the working directory, if present"
    )]
    pub config: Option<PathBuf>,
    #[arg(short, long, value_name = "PATH", help = "Object documentation JSON")]
    pub input: Option<PathBuf>,
    #[arg(short, long, value_name = "PATH", help = "Declaration file to write")]
    pub output: Option<PathBuf>,
    #[arg(long, conflicts_with = "check", help = "Print the declarations instead of writing them")]
    pub stdout: bool,
    #[arg(long = "no-format", conflicts_with = "formatter", help = "Skip the external formatter")]
    pub no_format: bool,
    #[arg(
        long,
        value_name = "CMD",
        help = "Formatter command reading stdin, e.g. \"prettier --parser typescript\""
    )]
    pub formatter: Option<String>,
    #[arg(long, help = "Also emit one <Template>Context interface per template")]
    pub template_contexts: bool,
    #[arg(
        long = "no-template-contexts",
        conflicts_with = "template_contexts",
        help = "Omit template context interfaces even if the config file enables them"
    )]
    pub no_template_contexts: bool,
    #[arg(long, help = "Fail if the output file is not up to date instead of writing it")]
    pub check: bool,
}

/// Entry point for the subcommand; returns the process exit code.
pub fn run(args: GenerateArgs) -> i32 {
    run_cli(|| run_inner(args))
}

fn run_inner(args: GenerateArgs) -> Result<(), String> {
    let cwd = std::env::current_dir()
        .map_err(|err| format!("Failed to determine working directory: {err}"))?;
    let config = ConfigFile::load(args.config.as_deref(), &cwd)?;
    let settings = Settings::resolve(config, &args, &cwd);
    debug!(?settings, "Resolved settings");

    let generated = generate(&settings)?;

    if args.stdout {
        print!("{}", generated.text);
        return Ok(());
    }
    if args.check {
        return check(&settings.output, &generated.text);
    }

    write_output(&settings.output, &generated.text)?;
    info!(
        path = %settings.output.display(),
        bytes = generated.text.len(),
        "Wrote declarations"
    );
    println!(
        "{} {}",
        style("Wrote").green().bold(),
        settings.output.display()
    );
    Ok(())
}

fn generate(settings: &Settings) -> Result<Generated, String> {
    let text = fs::read_to_string(&settings.input)
        .map_err(|err| format!("Failed to read {}: {err}", settings.input.display()))?;
    let objects =
        load_objects(&text).map_err(|err| format!("{}: {err}", settings.input.display()))?;
    debug!(objects = objects.len(), "Loaded object documentation");

    let options = GenerateOptions {
        template_contexts: settings.template_contexts,
    };
    let generator = match &settings.formatter {
        Some(command) => {
            let formatter = CommandFormatter::new(command.iter().cloned())
                .map_err(|err| err.to_string())?;
            Generator::new(options, formatter)
        }
        None => Generator::new(options, Passthrough),
    };
    generator.generate(&objects).map_err(|err| err.to_string())
}

fn write_output(path: &Path, text: &str) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|err| format!("Failed to create {}: {err}", parent.display()))?;
    }
    fs::write(path, text).map_err(|err| format!("Failed to write {}: {err}", path.display()))
}

fn check(path: &Path, text: &str) -> Result<(), String> {
    let existing = match fs::read_to_string(path) {
        Ok(existing) => existing,
        Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
        Err(err) => return Err(format!("Failed to read {}: {err}", path.display())),
    };
    if existing == text {
        println!("{} {}", style("Up to date").green(), path.display());
        return Ok(());
    }
    print!("{}", render_diff(&existing, text, &path.display().to_string()));
    Err(format!(
        "{} is out of date, run `liquid-types generate` to update it",
        path.display()
    ))
}

/// Unified diff of `old` against `new` with three lines of context.
fn render_diff(old: &str, new: &str, label: &str) -> String {
    let diff = TextDiff::from_lines(old, new);
    let mut output = String::new();

    output.push_str(&format!("{}\n", style(format!("--- {label} (current)")).bold()));
    output.push_str(&format!("{}\n", style(format!("+++ {label} (generated)")).bold()));

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            output.push_str("...\n");
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let line = change.value().trim_end_matches('\n');
                let rendered = match change.tag() {
                    ChangeTag::Delete => style(format!("-{line}")).red().to_string(),
                    ChangeTag::Insert => style(format!("+{line}")).green().to_string(),
                    ChangeTag::Equal => format!(" {line}"),
                };
                output.push_str(&rendered);
                output.push('\n');
            }
        }
    }
    output
}
