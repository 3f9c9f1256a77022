//! CLI entry point for godepr.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup and exit
//! codes. All business logic lives in the `godepr-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand, ValueEnum};
use godepr_app::{
    CheckInput, ExplainOutput, parse_report_json, render_annotations, render_markdown,
    render_text, run_check, run_explain, serialize_report, to_renderable, verdict_exit_code,
};
use godepr_types::GodeprReport;
use godepr_settings::ConfigFormat;
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "godepr",
    version,
    about = "Go dependency governance: enforce import direction rules on go list output",
    after_help = "Example:\n  go list -json ./... | godepr\n  go list -json ./internal/... | godepr --config rules/godepr.toml",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Commands>,

    #[command(flatten)]
    check: CheckArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check packages against the rule file (the default command).
    Check(CheckArgs),

    /// Render Markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a rule kind or violation code.
    Explain {
        /// The rule kind (e.g. "denied-list") or code (e.g. "denied_import").
        identifier: String,
    },
}

#[derive(Args, Debug, Clone)]
struct CheckArgs {
    /// Read the `go list -json` stream from this file instead of stdin.
    #[arg(long)]
    manifest: Option<Utf8PathBuf>,

    /// Rule file. `*.toml` is read as TOML, anything else as JSON.
    #[arg(long, default_value = ".godepr")]
    config: Utf8PathBuf,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write the JSON report to this path.
    #[arg(long)]
    report_out: Option<Utf8PathBuf>,

    /// Maximum number of annotations to emit with `--format annotations`.
    #[arg(long, default_value = "10")]
    max_annotations: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
    Annotations,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.cmd {
        Some(Commands::Check(args)) => cmd_check(&args),
        Some(Commands::Md { report, output }) => cmd_md(&report, output.as_deref()).map(|()| 0),
        Some(Commands::Annotations { report, max }) => cmd_annotations(&report, max).map(|()| 0),
        Some(Commands::Explain { identifier }) => Ok(cmd_explain(&identifier)),
        None => cmd_check(&cli.check),
    };

    let code = match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("godepr error: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

/// Log to stderr, filtered by `GODEPR_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("GODEPR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_check(args: &CheckArgs) -> anyhow::Result<i32> {
    let config_text = read_config(&args.config)?;
    let manifest_text = read_manifest(args.manifest.as_deref())?;

    let output = run_check(CheckInput {
        manifest_text: &manifest_text,
        config_text: &config_text,
        config_format: ConfigFormat::from_path(args.config.as_str()),
    })?;
    let report = output.report;

    if let Some(path) = &args.report_out {
        let data = serialize_report(&report)?;
        write_file(path, &data).context("write report json")?;
        tracing::debug!(path = %path, "wrote report");
    }

    match args.format {
        OutputFormat::Json => {
            let data = serialize_report(&report)?;
            print!("{}", String::from_utf8_lossy(&data));
        }
        OutputFormat::Text => print!("{}", render_text(&to_renderable(&report))),
        OutputFormat::Markdown => print!("{}", render_markdown(&to_renderable(&report))),
        OutputFormat::Annotations => {
            for line in render_annotations(&to_renderable(&report), args.max_annotations) {
                println!("{line}");
            }
        }
    }

    Ok(verdict_exit_code(report.verdict))
}

/// A missing rule file is allowed: no rules apply.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            tracing::debug!(path = %path, "loaded rule file");
            Ok(text)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path, "rule file not found; no rules apply");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {path}")),
    }
}

/// Invalid UTF-8 is replaced with U+FFFD rather than rejected, as `go list`
/// consumers written in Go do.
fn read_manifest(path: Option<&Utf8Path>) -> anyhow::Result<String> {
    let bytes = match path {
        Some(path) => std::fs::read(path).with_context(|| format!("read manifest: {path}"))?,
        None => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .context("read manifest from stdin")?;
            bytes
        }
    };

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            tracing::warn!("manifest is not valid UTF-8; invalid bytes replaced");
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, data).with_context(|| format!("write file: {path}"))?;
    Ok(())
}

fn read_report(path: &Utf8Path) -> anyhow::Result<GodeprReport> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read report: {path}"))?;
    parse_report_json(&text)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    let md = render_markdown(&to_renderable(&report));

    match output {
        Some(out_path) => write_file(out_path, md.as_bytes()).context("write markdown output")?,
        None => print!("{md}"),
    }
    Ok(())
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{annotation}");
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> i32 {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", godepr_app::format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_kinds,
            available_codes,
        } => {
            eprint!(
                "{}",
                godepr_app::format_not_found(&identifier, available_rule_kinds, available_codes)
            );
            1
        }
    }
}
