//! Line-based interactive shell over a [`Session`].
//!
//! Each mutation recomputes the session; an observer queues the new result
//! card, which is printed after the command's own output.

use crate::commands::{ShellCommand, HELP};
use crate::error::{RunnerError, RunnerResult};
use crate::render::{
    render_breakdown, render_indicators, render_parameters, render_project, render_results,
};
use crate::session::Session;
use netdim_core::format_number;
use netdim_report::{Indicators, ProjectRecord, ProjectStore, Report, ReportMetadata};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;
use tracing::debug;

/// Whether the shell keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop reading.
    Quit,
}

/// Where the shell writes files and what it writes into them.
#[derive(Debug, Clone)]
pub struct ShellSettings {
    /// Metadata written into exports, reports and saved projects.
    pub metadata: ReportMetadata,
    /// Directory for snapshots, reports and project copies.
    pub output_dir: PathBuf,
    /// Project store file.
    pub store_path: PathBuf,
    /// Print a prompt before reading each line.
    pub prompt: bool,
}

/// Interactive shell state.
pub struct Shell {
    session: Session,
    settings: ShellSettings,
    pending: Rc<RefCell<Vec<String>>>,
}

impl Shell {
    /// Wrap a session; its recomputations are echoed by the shell.
    pub fn new(mut session: Session, settings: ShellSettings) -> Self {
        let pending = Rc::new(RefCell::new(Vec::new()));
        let queue = Rc::clone(&pending);
        let currency = settings.metadata.currency.clone();
        session.subscribe(move |event| {
            queue
                .borrow_mut()
                .push(render_results(event.network, &event.results, &currency));
        });
        Self {
            session,
            settings,
            pending,
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Command errors are printed as one line and do not stop the shell;
    /// only I/O errors on `input` or `output` are returned.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> RunnerResult<()> {
        writeln!(output, "netdim shell, type 'help' for commands")?;
        self.write_prompt(output)?;
        for line in input.lines() {
            let line = line?;
            match self.run_line(&line, output) {
                Ok(Flow::Quit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(RunnerError::Io(e)) => return Err(RunnerError::Io(e)),
                Err(e) => writeln!(output, "error: {}", e)?,
            }
            self.write_prompt(output)?;
        }
        Ok(())
    }

    /// Parse and execute one line.
    pub fn run_line<W: Write>(&mut self, line: &str, output: &mut W) -> RunnerResult<Flow> {
        match ShellCommand::parse(line)? {
            Some(command) => self.execute(&command, output),
            None => Ok(Flow::Continue),
        }
    }

    /// Execute one command, then print any recomputed results.
    pub fn execute<W: Write>(&mut self, command: &ShellCommand, output: &mut W) -> RunnerResult<Flow> {
        debug!(command = %command.to_command_string(), "shell command");
        let flow = self.dispatch(command, output);
        self.flush_pending(output)?;
        flow
    }

    fn dispatch<W: Write>(&mut self, command: &ShellCommand, output: &mut W) -> RunnerResult<Flow> {
        let currency = self.settings.metadata.currency.clone();
        match command {
            ShellCommand::Select(network) => {
                self.session.select(*network);
            }
            ShellCommand::Set { name, value } => {
                self.session.set_param(name, value)?;
            }
            ShellCommand::Get(name) => {
                let params = self.session.parameters();
                let value = params.get(name)?;
                let unit = netdim_core::unit_of(params.network(), name);
                writeln!(output, "{} = {} {}", name, format_number(value), unit)?;
            }
            ShellCommand::Show => {
                let results = self.session.results();
                write!(output, "{}", render_results(self.session.network(), results, &currency))?;
                let indicators = Indicators::from_results(results, &currency);
                write!(output, "{}", render_indicators(&indicators))?;
            }
            ShellCommand::Params(network) => {
                let network = network.unwrap_or(self.session.network());
                write!(output, "{}", render_parameters(self.session.parameters_for(network)))?;
            }
            ShellCommand::Breakdown => {
                write!(output, "{}", render_breakdown(&self.session.breakdown()))?;
            }
            ShellCommand::Reset => {
                self.session.reset();
            }
            ShellCommand::Export => {
                let snapshot = self.session.snapshot(&self.settings.metadata);
                let path = snapshot.export_to(&self.settings.output_dir)?;
                writeln!(output, "exported {}", path.display())?;
            }
            ShellCommand::Report => {
                let snapshot = self.session.snapshot(&self.settings.metadata);
                let path = Report::new(&snapshot)
                    .with_breakdown(self.session.breakdown())
                    .write_to(&self.settings.output_dir)?;
                writeln!(output, "report written to {}", path.display())?;
            }
            ShellCommand::Save => {
                let record = ProjectRecord::new(
                    *self.session.parameters(),
                    *self.session.results(),
                    self.settings.metadata.clone(),
                );
                let mut store = ProjectStore::open(&self.settings.store_path)?;
                store.save(record.clone())?;
                let copy = record.write_copy(&self.settings.output_dir)?;
                writeln!(
                    output,
                    "saved {} to {} (copy: {})",
                    record.name,
                    store.path().display(),
                    copy.display()
                )?;
            }
            ShellCommand::Load(network) => {
                let network = network.unwrap_or(self.session.network());
                let store = ProjectStore::open(&self.settings.store_path)?;
                let record = store.load(network)?;
                write!(output, "{}", render_project(record))?;
                let results = *self.session.replace_parameters(record.parameters);
                if results != record.results {
                    writeln!(output, "note: stored results differ from the recomputation")?;
                }
            }
            ShellCommand::Help => {
                write!(output, "{}", HELP)?;
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn flush_pending<W: Write>(&mut self, output: &mut W) -> RunnerResult<()> {
        let cards: Vec<String> = self.pending.borrow_mut().drain(..).collect();
        for card in cards {
            write!(output, "{}", card)?;
        }
        Ok(())
    }

    fn write_prompt<W: Write>(&self, output: &mut W) -> RunnerResult<()> {
        if self.settings.prompt {
            write!(output, "netdim[{}]> ", self.session.network().id())?;
            output.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netdim_core::NetworkType;

    fn shell(dir: &std::path::Path) -> Shell {
        Shell::new(
            Session::new(),
            ShellSettings {
                metadata: ReportMetadata::default(),
                output_dir: dir.join("out"),
                store_path: dir.join("projects.json"),
                prompt: false,
            },
        )
    }

    fn run(shell: &mut Shell, script: &str) -> String {
        let mut output = Vec::new();
        shell.run(script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_mutation_prints_results_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(dir.path());
        let output = run(&mut shell, "set area 250\n");
        assert_eq!(output.matches("[GSM] GSM cellular network").count(), 1);
    }

    #[test]
    fn test_queries_do_not_recompute() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(dir.path());
        let output = run(&mut shell, "get busyHour\nparams\nhelp\n");
        assert!(output.contains("busyHour = 15 %\n"));
        assert!(output.contains("[GSM] parameters"));
        assert!(output.contains("Commands:"));
        assert!(!output.contains("Sites nécessaires"));
    }

    #[test]
    fn test_errors_do_not_stop_the_shell() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(dir.path());
        let output = run(&mut shell, "frobnicate\nset bandwidth 20\nselect lte\n");
        assert!(output.contains("error: unknown command 'frobnicate'"));
        assert!(output.contains("error: unknown parameter 'bandwidth' for GSM"));
        assert!(output.contains("[LTE] LTE cellular network"));
        assert_eq!(shell.session().network(), NetworkType::Lte);
    }

    #[test]
    fn test_quit_stops_reading() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(dir.path());
        run(&mut shell, "quit\nselect lte\n");
        assert_eq!(shell.session().network(), NetworkType::Gsm);
    }

    #[test]
    fn test_params_of_another_network() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(dir.path());
        let output = run(&mut shell, "params optique\n");
        assert!(output.contains("[OPTIQUE] parameters"));
        assert_eq!(shell.session().network(), NetworkType::Gsm);
    }

    #[test]
    fn test_save_to_corrupt_store_leaves_no_copy() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("projects.json"), "{ not json").unwrap();
        let mut shell = shell(dir.path());

        let output = run(&mut shell, "save\n");
        assert!(output.contains("error: JSON error"));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_load_missing_project() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(dir.path());
        let output = run(&mut shell, "load umts\n");
        assert!(output.contains("error: no saved project for UMTS"));
    }
}
