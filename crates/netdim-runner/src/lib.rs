//! # netdim-runner
//!
//! Interactive layer over the dimensioning calculator:
//!
//! - [`Session`]: one parameter set per network, recomputed on every
//!   mutation, with observers notified after each recomputation
//! - [`RunnerConfig`]: YAML configuration of startup values, planning
//!   constants, report metadata and file locations
//! - [`Shell`]: a line-based shell over a session
//! - [`Cli`]: the `netdim` command line
//!
//! ```
//! use netdim_core::NetworkType;
//! use netdim_runner::Session;
//!
//! let mut session = Session::new();
//! session.select(NetworkType::Optical);
//! let results = session.set_param("distance", "150").unwrap();
//! assert_eq!(results.coverage, 50);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod shell;

pub use cli::{execute, Cli, Command, Inputs, OutputFormat};
pub use commands::ShellCommand;
pub use config::{RunnerConfig, DEFAULT_STORE_PATH};
pub use error::{RunnerError, RunnerResult};
pub use session::{Observer, Recomputation, Session, Trigger};
pub use shell::{Flow, Shell, ShellSettings};
