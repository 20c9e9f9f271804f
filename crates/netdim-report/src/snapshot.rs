//! JSON snapshots of one dimensioning run.
//!
//! A snapshot records the selected network, its parameters, the results they
//! produced, when they were taken and the project metadata. Importing a
//! snapshot checks that the parameters belong to the declared network; the
//! results can then be verified by recomputing them.

use crate::error::{ExportError, ExportResult};
use crate::metadata::ReportMetadata;
use crate::output::write_output;
use chrono::{DateTime, Utc};
use netdim_core::{compute_with_constants, DimensioningConstants, NetworkType, ParameterSet, ResultSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One exported dimensioning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Network type, written as its uppercase name.
    pub network: NetworkType,
    /// Inputs of the run.
    pub parameters: ParameterSet,
    /// Results computed from `parameters`.
    pub results: ResultSet,
    /// When the snapshot was taken (RFC 3339, UTC).
    pub timestamp: DateTime<Utc>,
    /// Project metadata.
    pub metadata: ReportMetadata,
}

impl Snapshot {
    /// Snapshot already-computed results, stamped now.
    pub fn new(parameters: ParameterSet, results: ResultSet, metadata: ReportMetadata) -> Self {
        Self {
            network: parameters.network(),
            parameters,
            results,
            timestamp: Utc::now(),
            metadata,
        }
    }

    /// Compute results for `parameters` and snapshot them.
    pub fn capture(
        parameters: ParameterSet,
        constants: &DimensioningConstants,
        metadata: ReportMetadata,
    ) -> Self {
        let results = compute_with_constants(&parameters, constants);
        Self::new(parameters, results, metadata)
    }

    /// Pretty-printed JSON document.
    pub fn to_json(&self) -> ExportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a JSON document and check its network agrees with its parameters.
    pub fn from_json(json: &str) -> ExportResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.check_network()?;
        Ok(snapshot)
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

    /// Recompute the results from the embedded parameters.
    pub fn recompute(&self, constants: &DimensioningConstants) -> ResultSet {
        compute_with_constants(&self.parameters, constants)
    }

    /// Whether the stored results match a recomputation.
    pub fn results_match(&self, constants: &DimensioningConstants) -> bool {
        self.recompute(constants) == self.results
    }

    /// `dimensionnement_<id>_<epoch ms>.json`
    pub fn file_name(&self) -> String {
        format!(
            "dimensionnement_{}_{}.json",
            self.network.id(),
            self.timestamp.timestamp_millis()
        )
    }

    /// Write the snapshot into `dir` under [`Snapshot::file_name`].
    pub fn export_to(&self, dir: &Path) -> ExportResult<PathBuf> {
        write_output(dir, &self.file_name(), &self.to_json()?)
    }

    /// Read and check a snapshot file.
    pub fn import_from(path: &Path) -> ExportResult<Self> {
        let json = fs::read_to_string(path)?;
        let snapshot = Self::from_json(&json)?;
        debug!(path = %path.display(), network = %snapshot.network, "imported snapshot");
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_snapshot(network: NetworkType) -> Snapshot {
        let mut snapshot = Snapshot::capture(
            ParameterSet::defaults(network),
            &DimensioningConstants::default(),
            ReportMetadata::default(),
        );
        snapshot.timestamp = Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap();
        snapshot
    }

    #[test]
    fn test_json_layout() {
        let json = fixed_snapshot(NetworkType::Gsm).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["network"], "GSM");
        assert_eq!(value["parameters"]["busyHour"], 15.0);
        assert_eq!(value["results"]["sites"], 38);
        assert_eq!(value["results"]["capacity"], "2432 canaux");
        assert_eq!(value["results"]["coverage"], 100);
        assert_eq!(value["results"]["cost"], 3_420_000_000u64);
        assert_eq!(value["results"]["traffic"], 300.0);
        assert_eq!(value["timestamp"], "2025-06-15T10:30:00Z");
        assert_eq!(value["metadata"]["projet"], "Outil de Dimensionnement Télécoms");
    }

    #[test]
    fn test_link_results_carry_margin() {
        let json = fixed_snapshot(NetworkType::Microwave).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["network"], "HERTZIEN");
        assert_eq!(value["results"]["capacity"], "138 dB pertes");
        assert_eq!(value["results"]["margin"], 52.4);
    }

    #[test]
    fn test_round_trip_every_network() {
        for network in NetworkType::ALL {
            let snapshot = fixed_snapshot(network);
            let parsed = Snapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
            assert_eq!(parsed, snapshot);
            assert!(parsed.results_match(&DimensioningConstants::default()));
        }
    }

    #[test]
    fn test_network_mismatch_rejected() {
        let json = fixed_snapshot(NetworkType::Umts)
            .to_json()
            .unwrap()
            .replace("\"UMTS\"", "\"LTE\"");
        match Snapshot::from_json(&json) {
            Err(ExportError::NetworkMismatch { declared, found }) => {
                assert_eq!(declared, NetworkType::Lte);
                assert_eq!(found, NetworkType::Umts);
            }
            other => panic!("expected a network mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        let json = fixed_snapshot(NetworkType::Optical)
            .to_json()
            .unwrap()
            .replace("\"wavelength\"", "\"colour\"");
        assert!(matches!(Snapshot::from_json(&json), Err(ExportError::Json(_))));
    }

    #[test]
    fn test_file_name() {
        let snapshot = fixed_snapshot(NetworkType::Optical);
        assert_eq!(snapshot.file_name(), "dimensionnement_optique_1749983400000.json");
    }

    #[test]
    fn test_export_and_import() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = fixed_snapshot(NetworkType::Lte);

        let path = snapshot.export_to(&dir.path().join("out")).unwrap();
        assert!(path.ends_with("dimensionnement_lte_1749983400000.json"));

        let imported = Snapshot::import_from(&path).unwrap();
        assert_eq!(imported, snapshot);
    }

    #[test]
    fn test_import_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Snapshot::import_from(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
