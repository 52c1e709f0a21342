//! `caseprobe`: decode an escaped string and dump its case mappings.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use caseprobe::{CaseReport, DefaultCaseMapper, LocaleTag, ProbeError, decode_bytes};
use clap::Parser;
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod environment;

use args::{Cli, OutputFormat};
use environment::Environment;

#[derive(Serialize)]
struct Output<'a> {
    environment: &'a Environment,
    report: &'a CaseReport,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Probe(#[from] ProbeError),
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let locale = LocaleTag::parse(&cli.locale).map_err(ProbeError::from)?;
    let input = decode_bytes(cli.input.as_encoded_bytes()).map_err(ProbeError::from)?;
    let report = CaseReport::build(locale, input, &DefaultCaseMapper);
    let environment = Environment::current();

    render(&mut io::stdout().lock(), cli.format, &environment, &report)
}

fn render<W: Write>(
    out: &mut W,
    format: OutputFormat,
    environment: &Environment,
    report: &CaseReport,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write!(out, "{environment}{report}")?,
        OutputFormat::Json => {
            let output = Output {
                environment,
                report,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "probe failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
