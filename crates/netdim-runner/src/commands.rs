//! Line commands understood by the interactive shell.
//!
//! One command per line, words separated by whitespace:
//! - Selection: `select <network>`
//! - Parameters: `set <name> <value>` (or `set <name>=<value>`), `get <name>`,
//!   `params [network]`, `reset`
//! - Results: `show`, `breakdown`
//! - Files: `export`, `report`, `save`, `load [network]`
//! - Session: `help`, `quit`

use crate::error::{RunnerError, RunnerResult};
use netdim_core::{split_assignment, NetworkType};

/// Help text printed by `help`.
pub const HELP: &str = "\
Commands:
  select <network>      switch to gsm, umts, lte, hertzien or optique
  set <name> <value>    change a parameter of the selected network
  get <name>            print a parameter value
  show                  print the current results and indicators
  params [network]      list the parameters of a network (default: selected)
  breakdown             print the intermediate quantities
  reset                 restore the startup parameters
  export                write a JSON snapshot
  report                write an HTML report
  save                  save the project to the store
  load [network]        load a saved project
  help                  print this help
  quit                  leave the shell
";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    /// Switch to another network type.
    Select(NetworkType),
    /// Set a parameter of the selected network from user-entered text.
    Set {
        /// Parameter name.
        name: String,
        /// Raw value, parsed with fallback to zero.
        value: String,
    },
    /// Print one parameter.
    Get(String),
    /// Print the results and indicators.
    Show,
    /// List the parameters of the given network, or of the selected one.
    Params(Option<NetworkType>),
    /// Print the intermediate quantities.
    Breakdown,
    /// Restore the startup parameters of the selected network.
    Reset,
    /// Write a JSON snapshot.
    Export,
    /// Write an HTML report.
    Report,
    /// Save the project to the store.
    Save,
    /// Load the project of the given network, or of the selected one.
    Load(Option<NetworkType>),
    /// Print the command list.
    Help,
    /// Leave the shell.
    Quit,
}

impl ShellCommand {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> RunnerResult<Option<ShellCommand>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = words.collect();

        let command = match (verb.as_str(), args.as_slice()) {
            ("select" | "use", [network]) => ShellCommand::Select(network.parse()?),
            ("select" | "use", _) => return Err(RunnerError::Usage("select <network>")),

            ("set", [assignment]) if assignment.contains('=') => {
                let (name, value) = split_assignment(assignment)?;
                ShellCommand::Set {
                    name: name.to_string(),
                    value: value.to_string(),
                }
            }
            ("set", [name, rest @ ..]) => ShellCommand::Set {
                name: name.to_string(),
                value: rest.join(" "),
            },
            ("set", _) => return Err(RunnerError::Usage("set <name> <value>")),

            ("get", [name]) => ShellCommand::Get(name.to_string()),
            ("get", _) => return Err(RunnerError::Usage("get <name>")),

            ("load", []) => ShellCommand::Load(None),
            ("load", [network]) => ShellCommand::Load(Some(network.parse()?)),
            ("load", _) => return Err(RunnerError::Usage("load [network]")),

            ("show" | "results", []) => ShellCommand::Show,
            ("params", []) => ShellCommand::Params(None),
            ("params", [network]) => ShellCommand::Params(Some(network.parse()?)),
            ("breakdown", []) => ShellCommand::Breakdown,
            ("reset", []) => ShellCommand::Reset,
            ("export", []) => ShellCommand::Export,
            ("report", []) => ShellCommand::Report,
            ("save", []) => ShellCommand::Save,
            ("help" | "?", []) => ShellCommand::Help,
            ("quit" | "exit", []) => ShellCommand::Quit,

            _ => return Err(RunnerError::UnknownCommand(line.to_string())),
        };
        Ok(Some(command))
    }

    /// The command as a shell line.
    pub fn to_command_string(&self) -> String {
        match self {
            ShellCommand::Select(network) => format!("select {}", network.id()),
            ShellCommand::Set { name, value } => format!("set {} {}", name, value),
            ShellCommand::Get(name) => format!("get {}", name),
            ShellCommand::Show => "show".to_string(),
            ShellCommand::Params(None) => "params".to_string(),
            ShellCommand::Params(Some(network)) => format!("params {}", network.id()),
            ShellCommand::Breakdown => "breakdown".to_string(),
            ShellCommand::Reset => "reset".to_string(),
            ShellCommand::Export => "export".to_string(),
            ShellCommand::Report => "report".to_string(),
            ShellCommand::Save => "save".to_string(),
            ShellCommand::Load(None) => "load".to_string(),
            ShellCommand::Load(Some(network)) => format!("load {}", network.id()),
            ShellCommand::Help => "help".to_string(),
            ShellCommand::Quit => "quit".to_string(),
        }
    }
}
