//! # netdim-core
//!
//! Closed-form dimensioning of telecommunication networks.
//!
//! Given the planning inputs of one network type, the calculator derives the
//! number of sites, the capacity those sites offer, the share of the service
//! area they cover and an estimated cost.
//!
//! ## Network types
//!
//! | Type | Sized from | Capacity |
//! |------|------------|----------|
//! | GSM | coverage and busy-hour traffic | traffic channels |
//! | UMTS | coverage | kbps at the cell load |
//! | LTE | coverage (fixed site area) | Mbps |
//! | Microwave (`hertzien`) | free-space link budget | path loss |
//! | Optical (`optique`) | fiber link budget | total loss |
//!
//! ## Example
//!
//! ```
//! use netdim_core::{compute, NetworkType, ParameterSet};
//!
//! let mut params = ParameterSet::defaults(NetworkType::Optical);
//! params.set_raw("distance", "40").unwrap();
//!
//! let results = compute(&params);
//! assert_eq!(results.capacity.to_string(), "11 dB pertes");
//! assert_eq!(results.coverage, 100);
//! ```
//!
//! Every fixed assumption (costs per site, receiver sensitivities, traffic per
//! site...) lives in [`DimensioningConstants`] and can be overridden with
//! [`compute_with_constants`].

mod calculator;
mod cellular;
mod constants;
mod error;
mod link;
mod network;
mod numeric;
mod params;
mod results;
mod schema;

pub use calculator::{breakdown, compute, compute_with_constants, Breakdown};
pub use cellular::{
    cell_area_km2, compute_gsm, compute_lte, compute_umts, coverage_pct, coverage_sites,
    gsm_breakdown, lte_breakdown, umts_breakdown, GsmBreakdown, LteBreakdown, UmtsBreakdown,
};
pub use constants::{
    DimensioningConstants, FSPL_CONSTANT_DB, GSM_ERLANGS_PER_SITE, GSM_SITE_COST,
    LTE_SITE_AREA_KM2, LTE_SITE_COST, MICROWAVE_RX_SENSITIVITY_DBM, OPTICAL_CONNECTOR_LOSS_DB,
    OPTICAL_RX_SENSITIVITY_DBM, UMTS_CELL_CAPACITY_KBPS, UMTS_SITE_COST,
};
pub use error::{ParamError, ParamResult};
pub use link::{
    compute_microwave, compute_optical, free_space_path_loss_db, microwave_breakdown,
    optical_breakdown, AvailabilityTier, MicrowaveBreakdown, OpticalBreakdown,
};
pub use network::NetworkType;
pub use numeric::{format_number, parse_or_zero, percentage, round_half_up, round_to, site_count};
pub use params::{
    split_assignment, GsmParams, LteParams, MicrowaveParams, OpticalParams, ParameterSet,
    UmtsParams,
};
pub use results::{Capacity, CapacityUnit, ExtraMetric, ResultSet};
pub use schema::{find_parameter, schema, unit_of, ParameterDef};
