//! Command-line interface of the `netdim` binary.

use crate::config::RunnerConfig;
use crate::error::RunnerResult;
use crate::render::{render_indicators, render_parameters, render_project, render_results};
use crate::session::Session;
use crate::shell::{Shell, ShellSettings};
use clap::{Args, Parser, Subcommand, ValueEnum};
use netdim_core::NetworkType;
use netdim_report::{Indicators, ProjectRecord, ProjectStore, Report, Snapshot};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::warn;

/// Telecommunication network dimensioning calculator.
#[derive(Parser, Debug)]
#[command(name = "netdim", version, about)]
pub struct Cli {
    /// YAML configuration file.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Network selection and parameter overrides shared by most subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct Inputs {
    /// Network type: gsm, umts, lte, hertzien (microwave) or optique (optical).
    #[arg(short, long)]
    pub network: Option<NetworkType>,

    /// Override a parameter, e.g. `--set area=250`. Repeatable.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,
}

/// Output format of `compute`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Result card and indicators.
    #[default]
    Text,
    /// Pretty-printed snapshot.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dimension a network and print the results.
    Compute {
        #[command(flatten)]
        inputs: Inputs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the parameters of a network with their current values.
    Params {
        #[command(flatten)]
        inputs: Inputs,
    },
    /// Write a JSON snapshot of the results.
    Export {
        #[command(flatten)]
        inputs: Inputs,
        /// Output directory.
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Write a printable HTML report.
    Report {
        #[command(flatten)]
        inputs: Inputs,
        /// Output directory.
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
        /// Include the intermediate quantities.
        #[arg(long)]
        breakdown: bool,
    },
    /// Save the project to the store.
    Save {
        #[command(flatten)]
        inputs: Inputs,
        /// Project store file.
        #[arg(long, value_name = "FILE")]
        store: Option<PathBuf>,
        /// Also write a standalone copy into this directory.
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Print a saved project and check its results.
    Load {
        #[arg(short, long)]
        network: Option<NetworkType>,
        /// Project store file.
        #[arg(long, value_name = "FILE")]
        store: Option<PathBuf>,
    },
    /// Load a JSON snapshot and recompute it.
    Import {
        /// Snapshot file.
        file: PathBuf,
    },
    /// Interactive session on stdin.
    Shell,
}

/// Run a parsed command line, writing user output to `out`.
///
/// `input` feeds the `shell` subcommand; `interactive` turns on its prompt.
pub fn execute<R: BufRead, W: Write>(
    cli: &Cli,
    input: R,
    interactive: bool,
    out: &mut W,
) -> RunnerResult<()> {
    let config = RunnerConfig::load_or_default(cli.config.as_deref())?;
    let currency = config.metadata.currency.clone();

    match &cli.command {
        Command::Compute { inputs, format } => {
            let session = prepare_session(&config, inputs)?;
            match format {
                OutputFormat::Text => {
                    let results = session.results();
                    write!(out, "{}", render_results(session.network(), results, &currency))?;
                    let indicators = Indicators::from_results(results, &currency);
                    write!(out, "{}", render_indicators(&indicators))?;
                }
                OutputFormat::Json => {
                    writeln!(out, "{}", session.snapshot(&config.metadata).to_json()?)?;
                }
            }
        }
        Command::Params { inputs } => {
            let session = prepare_session(&config, inputs)?;
            write!(out, "{}", render_parameters(session.parameters()))?;
        }
        Command::Export { inputs, out: dir } => {
            let session = prepare_session(&config, inputs)?;
            let dir = dir.clone().unwrap_or_else(|| config.output_dir());
            let path = session.snapshot(&config.metadata).export_to(&dir)?;
            writeln!(out, "exported {}", path.display())?;
        }
        Command::Report {
            inputs,
            out: dir,
            breakdown,
        } => {
            let session = prepare_session(&config, inputs)?;
            let dir = dir.clone().unwrap_or_else(|| config.output_dir());
            let snapshot = session.snapshot(&config.metadata);
            let mut report = Report::new(&snapshot);
            if *breakdown {
                report = report.with_breakdown(session.breakdown());
            }
            let path = report.write_to(&dir)?;
            writeln!(out, "report written to {}", path.display())?;
        }
        Command::Save {
            inputs,
            store,
            out: dir,
        } => {
            let session = prepare_session(&config, inputs)?;
            let record = ProjectRecord::new(
                *session.parameters(),
                *session.results(),
                config.metadata.clone(),
            );
            let store_path = store.clone().unwrap_or_else(|| config.store_path());
            let mut store = ProjectStore::open(&store_path)?;
            store.save(record.clone())?;
            writeln!(out, "saved {} to {}", record.name, store_path.display())?;
            if let Some(dir) = dir.clone().or_else(|| config.output_dir.clone()) {
                let copy = record.write_copy(&dir)?;
                writeln!(out, "copy written to {}", copy.display())?;
            }
        }
        Command::Load { network, store } => {
            let network = network.unwrap_or(config.network);
            let store_path = store.clone().unwrap_or_else(|| config.store_path());
            let store = ProjectStore::open(&store_path)?;
            let record = store.load(network)?;
            write!(out, "{}", render_project(record))?;
            report_verification(out, record.to_snapshot().results_match(&config.constants))?;
        }
        Command::Import { file } => {
            let snapshot = Snapshot::import_from(file)?;
            let mut session = config.build_session()?;
            let results = *session.replace_parameters(snapshot.parameters);
            write!(out, "{}", render_results(snapshot.network, &results, &currency))?;
            report_verification(out, results == snapshot.results)?;
        }
        Command::Shell => {
            let session = config.build_session()?;
            let mut shell = Shell::new(
                session,
                ShellSettings {
                    metadata: config.metadata.clone(),
                    output_dir: config.output_dir(),
                    store_path: config.store_path(),
                    prompt: interactive,
                },
            );
            shell.run(input, out)?;
        }
    }
    Ok(())
}

/// Session on the requested network with `--set` overrides applied.
fn prepare_session(config: &RunnerConfig, inputs: &Inputs) -> RunnerResult<Session> {
    let mut session = config.build_session()?;
    if let Some(network) = inputs.network {
        session.select(network);
    }
    for assignment in &inputs.set {
        session.apply_assignment(assignment)?;
    }
    Ok(session)
}

fn report_verification<W: Write>(out: &mut W, matches: bool) -> RunnerResult<()> {
    if matches {
        writeln!(out, "results verified by recomputation")?;
    } else {
        warn!("stored results differ from the recomputation");
        writeln!(out, "stored results differ from the recomputation")?;
    }
    Ok(())
}
