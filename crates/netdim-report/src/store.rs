//! File-backed key-value store of saved projects.
//!
//! The store is a single JSON object mapping `telecom_project_<id>` to the
//! last project saved for that network type. Saving a network overwrites its
//! previous record; the file is rewritten after every change.

use crate::error::{ExportError, ExportResult};
use crate::metadata::ReportMetadata;
use crate::output::write_output;
use crate::snapshot::Snapshot;
use chrono::{DateTime, Utc};
use netdim_core::{NetworkType, ParameterSet, ResultSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix of every store key.
pub const PROJECT_KEY_PREFIX: &str = "telecom_project_";

/// Store key for a network type.
pub fn project_key(network: NetworkType) -> String {
    format!("{}{}", PROJECT_KEY_PREFIX, network.id())
}

/// A saved project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Display name, `Projet <NAME>`.
    pub name: String,
    /// Network type, written as its uppercase name.
    pub network: NetworkType,
    /// Saved inputs.
    pub parameters: ParameterSet,
    /// Results at save time.
    pub results: ResultSet,
    /// When the project was saved.
    pub saved: DateTime<Utc>,
    /// Project metadata.
    pub metadata: ReportMetadata,
}

impl ProjectRecord {
    /// Record a project, stamped now.
    pub fn new(parameters: ParameterSet, results: ResultSet, metadata: ReportMetadata) -> Self {
        let network = parameters.network();
        Self {
            name: format!("Projet {}", network.name()),
            network,
            parameters,
            results,
            saved: Utc::now(),
            metadata,
        }
    }

    /// Fail if the parameters describe another network than `network`.
    pub fn check_network(&self) -> ExportResult<()> {
        let found = self.parameters.network();
        if found != self.network {
            return Err(ExportError::NetworkMismatch {
                declared: self.network,
                found,
            });
        }
        Ok(())
    }

    /// `projet_<id>_<epoch ms>.json`
    pub fn file_name(&self) -> String {
        format!("projet_{}_{}.json", self.network.id(), self.saved.timestamp_millis())
    }

    /// Write a standalone copy of the record into `dir`.
    pub fn write_copy(&self, dir: &Path) -> ExportResult<PathBuf> {
        write_output(dir, &self.file_name(), &serde_json::to_string_pretty(self)?)
    }

    /// View the record as a snapshot taken at save time.
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            network: self.network,
            parameters: self.parameters,
            results: self.results,
            timestamp: self.saved,
            metadata: self.metadata.clone(),
        }
    }
}

/// Saved projects, keyed by network type, backed by a JSON file.
#[derive(Debug)]
pub struct ProjectStore {
    path: PathBuf,
    projects: BTreeMap<String, ProjectRecord>,
}

impl ProjectStore {
    /// Open the store at `path`. A missing or empty file is an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> ExportResult<Self> {
        let path = path.as_ref().to_path_buf();
        let projects: BTreeMap<String, ProjectRecord> = match fs::read_to_string(&path) {
            Ok(json) if json.trim().is_empty() => BTreeMap::new(),
            Ok(json) => serde_json::from_str(&json)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        for (key, record) in &projects {
            record.check_network()?;
            if *key != project_key(record.network) {
                return Err(ExportError::KeyMismatch {
                    key: key.clone(),
                    network: record.network,
                });
            }
        }
        debug!(path = %path.display(), projects = projects.len(), "opened project store");
        Ok(Self { path, projects })
    }

    /// File backing the store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save a project, replacing any earlier one for the same network.
    pub fn save(&mut self, record: ProjectRecord) -> ExportResult<()> {
        record.check_network()?;
        let key = project_key(record.network);
        self.projects.insert(key.clone(), record);
        self.flush()?;
        info!(key = %key, path = %self.path.display(), "saved project");
        Ok(())
    }

    /// The project saved for `network`.
    pub fn load(&self, network: NetworkType) -> ExportResult<&ProjectRecord> {
        self.projects
            .get(&project_key(network))
            .ok_or(ExportError::ProjectNotFound(network))
    }

    /// All saved projects, ordered by key.
    pub fn list(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.projects.values()
    }

    /// Delete the project saved for `network`, returning it.
    pub fn remove(&mut self, network: NetworkType) -> ExportResult<ProjectRecord> {
        let record = self
            .projects
            .remove(&project_key(network))
            .ok_or(ExportError::ProjectNotFound(network))?;
        self.flush()?;
        info!(network = %network, "removed project");
        Ok(record)
    }

    /// Number of saved projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether no project is saved.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn flush(&self) -> ExportResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.projects)?)?;
        Ok(())
    }
}
