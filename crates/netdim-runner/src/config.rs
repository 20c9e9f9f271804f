//! YAML configuration.
//!
//! Every section is optional:
//!
//! ```yaml
//! network: lte
//! parameters:
//!   gsm: { area: 250, busyHour: 12 }
//! constants:
//!   gsm_site_cost: 95000000
//! metadata:
//!   institution: "École Supérieure Polytechnique"
//! output_dir: ./out
//! store_path: ./projects.json
//! ```

use crate::error::RunnerResult;
use crate::session::Session;
use netdim_core::{DimensioningConstants, NetworkType, ParameterSet};
use netdim_report::ReportMetadata;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Store file used when none is configured.
pub const DEFAULT_STORE_PATH: &str = "netdim_projects.json";

/// Runner configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// Network selected at startup.
    pub network: NetworkType,
    /// Startup parameter overrides, by network and parameter name.
    pub parameters: BTreeMap<NetworkType, BTreeMap<String, f64>>,
    /// Planning constant overrides.
    pub constants: DimensioningConstants,
    /// Metadata written into exports and reports.
    pub metadata: ReportMetadata,
    /// Directory for exported files; the working directory when unset.
    pub output_dir: Option<PathBuf>,
    /// Project store file.
    pub store_path: Option<PathBuf>,
}

impl RunnerConfig {
    /// Parse a YAML document.
    pub fn from_yaml_str(yaml: &str) -> RunnerResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a YAML file.
    pub fn load(path: &Path) -> RunnerResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&yaml)?;
        debug!(path = %path.display(), network = %config.network, "loaded configuration");
        Ok(config)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> RunnerResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Startup parameters of one network, with overrides applied.
    pub fn startup_parameters(&self, network: NetworkType) -> RunnerResult<ParameterSet> {
        let mut params = ParameterSet::defaults(network);
        if let Some(overrides) = self.parameters.get(&network) {
            for (name, value) in overrides {
                params.set(name, *value)?;
            }
        }
        Ok(params)
    }

    /// Build a session from this configuration.
    pub fn build_session(&self) -> RunnerResult<Session> {
        let mut startup = Vec::with_capacity(NetworkType::ALL.len());
        for network in NetworkType::ALL {
            startup.push(self.startup_parameters(network)?);
        }
        Ok(Session::with_startup(
            self.network,
            startup,
            self.constants.clone(),
        ))
    }

    /// Output directory, falling back to the working directory.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Store file, falling back to [`DEFAULT_STORE_PATH`].
    pub fn store_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH))
    }
}
