//! # netdim-report
//!
//! Everything that leaves the calculator as a file:
//!
//! - **Snapshots**: pretty JSON of one run (`dimensionnement_<id>_<ms>.json`),
//!   importable and verifiable by recomputation
//! - **Reports**: a printable HTML document (`rapport_<NAME>_<ms>.html`)
//! - **Project store**: a JSON key-value file holding the last project saved
//!   for each network type, plus downloadable copies (`projet_<id>_<ms>.json`)
//! - **Indicators**: the data behind the performance and dimensioning charts
//!
//! Costs are formatted fr-FR style with the currency from [`ReportMetadata`].

mod error;
mod format;
mod indicators;
mod metadata;
mod output;
mod report;
mod snapshot;
mod store;

pub use error::{ExportError, ExportResult};
pub use format::{capitalize, escape_html, format_amount, format_currency, FR_GROUP_SEPARATOR};
pub use indicators::{
    Indicator, Indicators, AVAILABILITY_SCORE, CAPACITY_SCORE, MAX_SITE_ICONS, QUALITY_SCORE,
};
pub use metadata::{ReportMetadata, DEFAULT_CURRENCY, DEFAULT_PROJECT_TITLE};
pub use output::write_output;
pub use report::Report;
pub use snapshot::Snapshot;
pub use store::{project_key, ProjectRecord, ProjectStore, PROJECT_KEY_PREFIX};
