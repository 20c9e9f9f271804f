//! Project metadata attached to snapshots, saved projects and reports.

use serde::{Deserialize, Serialize};

/// Default project title.
pub const DEFAULT_PROJECT_TITLE: &str = "Outil de Dimensionnement Télécoms";

/// Default currency of cost estimates.
pub const DEFAULT_CURRENCY: &str = "FCFA";

/// Descriptive metadata written alongside every export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportMetadata {
    /// Project title.
    pub projet: String,
    /// Institution line shown under the report title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    /// Course or programme line shown in the report footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    /// Currency symbol appended to costs.
    pub currency: String,
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self {
            projet: DEFAULT_PROJECT_TITLE.to_string(),
            institution: None,
            course: None,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}
