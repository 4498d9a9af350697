//! Writes the cooperative-matrix mul-add shader test fixtures
//!
//! ```bash
//! # Generate into the default directory, printing each written path
//! cmatgen
//!
//! # Verify the checked-in fixtures are up to date
//! cmatgen --check
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cmatgen::{check, planned_paths, run, run_with_renderer, GeneratorConfig, Renderer};

/// Cooperative-matrix mul-add fixture generator
#[derive(Parser, Debug)]
#[command(name = "cmatgen")]
#[command(about = "Generate coopMatMulAdd shader tests with a constant accumulator")]
#[command(version)]
struct Args {
    /// Directory the fixtures are written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Compare against existing files instead of writing
    #[arg(long, conflicts_with = "list")]
    check: bool,

    /// Print the paths that would be generated and exit
    #[arg(long)]
    list: bool,

    /// Render with this template file instead of the built-in one
    #[arg(long, conflicts_with_all = ["check", "list"])]
    template: Option<PathBuf>,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match execute(&args) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("fixture generation aborted");
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn execute(args: &Args) -> Result<ExitCode> {
    let config = match &args.output_dir {
        Some(dir) => GeneratorConfig::with_output_dir(dir),
        None => GeneratorConfig::default(),
    };

    if args.list {
        for path in planned_paths(&config)? {
            println!("{}", path.display());
        }
        return Ok(ExitCode::SUCCESS);
    }

    if args.check {
        let report = check(&config).context("checking fixtures")?;
        for path in &report.drifted {
            println!("drifted: {}", path.display());
        }
        for path in &report.missing {
            println!("missing: {}", path.display());
        }
        if !report.is_clean() {
            tracing::error!("fixtures are out of date; rerun without --check");
            return Ok(ExitCode::FAILURE);
        }
        tracing::info!("{} fixtures up to date", report.matching.len());
        return Ok(ExitCode::SUCCESS);
    }

    let written = match &args.template {
        Some(path) => {
            let renderer = Renderer::from_path(path)
                .with_context(|| format!("loading template {}", path.display()))?;
            run_with_renderer(&config, &renderer, std::io::stdout())
        }
        None => run(&config),
    }
    .with_context(|| format!("generating fixtures into {}", config.output_dir.display()))?;
    tracing::info!("generated {} fixtures", written.len());
    Ok(ExitCode::SUCCESS)
}
