//! wiremark - compiles wireframe documents to SVG from the command line.
//!
//! Reads a `.wmk` document, prints any diagnostics, and writes the rendered
//! SVG next to the input (or wherever `-o` points). A document with errors
//! still renders; the exit code is what reports that something was wrong.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wiremark::{Diagnostic, RenderOptions, ThemeChoice, has_errors, pipeline};

#[derive(Parser, Debug)]
#[command(name = "wiremark")]
#[command(about = "Compile wiremark wireframe documents to SVG")]
struct Cli {
    /// Path to the wireframe document (.wmk)
    input: PathBuf,

    /// Output path (defaults to the input with a .svg extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value = "800")]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value = "600")]
    height: f64,

    /// Theme override: sketch, blueprint, clean or realistic
    #[arg(long)]
    theme: Option<String>,

    /// Report diagnostics without writing any SVG
    #[arg(long)]
    check: bool,

    /// Print diagnostics as JSON lines on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wiremark_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let status = run(&cli)?;
    if status != 0 {
        std::process::exit(status);
    }
    Ok(())
}

/// Compile one document. Returns the process exit status: 0 for a clean
/// document, 1 when error diagnostics were reported. I/O failures (missing
/// input, unwritable output) surface as `Err` instead.
fn run(cli: &Cli) -> Result<i32> {
    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    if cli.check {
        let report = pipeline::validate(&source);
        report_diagnostics(&report.errors, cli.json);
        return Ok(if report.valid { 0 } else { 1 });
    }

    let outcome = pipeline::compile(&source, &render_options(cli));
    report_diagnostics(&outcome.errors, cli.json);

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("svg"));
    fs::write(&output, &outcome.svg)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!("wrote {} ({} bytes)", output.display(), outcome.svg.len());

    Ok(if has_errors(&outcome.errors) { 1 } else { 0 })
}

fn render_options(cli: &Cli) -> RenderOptions {
    RenderOptions {
        width: cli.width,
        height: cli.height,
        theme: cli.theme.clone().map(ThemeChoice::Named),
        ..RenderOptions::default()
    }
}

/// Diagnostics go to stderr as plain text, or to stdout as one JSON object
/// per line under `--json` so other tools can consume them.
fn report_diagnostics(diagnostics: &[Diagnostic], json: bool) {
    for diagnostic in diagnostics {
        if json {
            match serde_json::to_string(diagnostic) {
                Ok(line) => println!("{line}"),
                Err(err) => error!("failed to encode diagnostic: {err}"),
            }
        } else {
            eprintln!("{diagnostic}");
        }
    }
}
