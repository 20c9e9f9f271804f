//! Dispatch from a parameter set to the matching network formulas.

use crate::cellular::{
    compute_gsm, compute_lte, compute_umts, gsm_breakdown, lte_breakdown, umts_breakdown,
    GsmBreakdown, LteBreakdown, UmtsBreakdown,
};
use crate::constants::DimensioningConstants;
use crate::link::{
    compute_microwave, compute_optical, microwave_breakdown, optical_breakdown,
    MicrowaveBreakdown, OpticalBreakdown,
};
use crate::network::NetworkType;
use crate::params::ParameterSet;
use crate::results::ResultSet;

/// Dimension a network with the default planning constants.
///
/// # Example
///
/// ```
/// use netdim_core::{compute, NetworkType, ParameterSet};
///
/// let results = compute(&ParameterSet::defaults(NetworkType::Gsm));
/// assert_eq!(results.sites, 38);
/// assert_eq!(results.capacity.to_string(), "2432 canaux");
/// ```
pub fn compute(params: &ParameterSet) -> ResultSet {
    compute_with_constants(params, &DimensioningConstants::default())
}

/// Dimension a network with explicit planning constants.
pub fn compute_with_constants(params: &ParameterSet, constants: &DimensioningConstants) -> ResultSet {
    match params {
        ParameterSet::Gsm(p) => compute_gsm(p, constants),
        ParameterSet::Umts(p) => compute_umts(p, constants),
        ParameterSet::Lte(p) => compute_lte(p, constants),
        ParameterSet::Microwave(p) => compute_microwave(p, constants),
        ParameterSet::Optical(p) => compute_optical(p, constants),
    }
}

/// Intermediate quantities for any network type.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "network", rename_all = "UPPERCASE"))]
pub enum Breakdown {
    /// GSM coverage and traffic sizing.
    Gsm(GsmBreakdown),
    /// UMTS coverage sizing.
    Umts(UmtsBreakdown),
    /// LTE coverage sizing.
    Lte(LteBreakdown),
    /// Microwave link budget.
    #[cfg_attr(feature = "serde", serde(rename = "HERTZIEN"))]
    Microwave(MicrowaveBreakdown),
    /// Optical link budget.
    #[cfg_attr(feature = "serde", serde(rename = "OPTIQUE"))]
    Optical(OpticalBreakdown),
}

impl Breakdown {
    /// Network type of the breakdown.
    pub fn network(&self) -> NetworkType {
        match self {
            Breakdown::Gsm(_) => NetworkType::Gsm,
            Breakdown::Umts(_) => NetworkType::Umts,
            Breakdown::Lte(_) => NetworkType::Lte,
            Breakdown::Microwave(_) => NetworkType::Microwave,
            Breakdown::Optical(_) => NetworkType::Optical,
        }
    }

    /// Named intermediate values, in calculation order, for display.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        match self {
            Breakdown::Gsm(b) => vec![
                ("cell area (km²)", format!("{:.3}", b.cell_area_km2)),
                ("sites for coverage", b.sites_for_coverage.to_string()),
                ("total users", format!("{:.0}", b.total_users)),
                ("busy-hour traffic (Erl)", format!("{:.2}", b.total_traffic_erl)),
                ("sites for capacity", b.sites_for_capacity.to_string()),
                ("sites", b.sites.to_string()),
                ("channels", b.channels.to_string()),
                ("coverage (%)", format!("{:.1}", b.coverage_pct)),
            ],
            Breakdown::Umts(b) => vec![
                ("cell area (km²)", format!("{:.3}", b.cell_area_km2)),
                ("sites", b.sites.to_string()),
                ("capacity (kbps)", format!("{:.1}", b.capacity_kbps)),
                ("coverage (%)", format!("{:.1}", b.coverage_pct)),
            ],
            Breakdown::Lte(b) => vec![
                ("site area (km²)", format!("{:.3}", b.site_area_km2)),
                ("sites", b.sites.to_string()),
                ("capacity (Mbps)", format!("{:.1}", b.capacity_mbps)),
                ("coverage (%)", format!("{:.1}", b.coverage_pct)),
            ],
            Breakdown::Microwave(b) => vec![
                ("distance (km)", format!("{}", b.distance_km)),
                ("frequency (MHz)", format!("{}", b.frequency_mhz)),
                ("FSPL (dB)", format!("{:.2}", b.fspl_db)),
                ("received power (dBm)", format!("{:.2}", b.received_power_dbm)),
                ("margin (dB)", format!("{:.2}", b.margin_db)),
                ("availability", format!("{} % ({})", b.availability_pct, b.tier)),
            ],
            Breakdown::Optical(b) => vec![
                ("total loss (dB)", format!("{:.2}", b.total_loss_db)),
                ("received power (dBm)", format!("{:.2}", b.received_power_dbm)),
                ("margin (dB)", format!("{:.2}", b.margin_db)),
                ("link", if b.link_ok { "OK" } else { "FAIL" }.to_string()),
            ],
        }
    }
}

/// Work through the formulas of any network type and keep the intermediates.
pub fn breakdown(params: &ParameterSet, constants: &DimensioningConstants) -> Breakdown {
    match params {
        ParameterSet::Gsm(p) => Breakdown::Gsm(gsm_breakdown(p, constants)),
        ParameterSet::Umts(p) => Breakdown::Umts(umts_breakdown(p, constants)),
        ParameterSet::Lte(p) => Breakdown::Lte(lte_breakdown(p, constants)),
        ParameterSet::Microwave(p) => Breakdown::Microwave(microwave_breakdown(p, constants)),
        ParameterSet::Optical(p) => Breakdown::Optical(optical_breakdown(p, constants)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ExtraMetric;

    #[test]
    fn test_dispatch_matches_network() {
        let constants = DimensioningConstants::default();
        for network in NetworkType::ALL {
            let params = ParameterSet::defaults(network);
            assert_eq!(breakdown(&params, &constants).network(), network);
            let results = compute(&params);
            let extra_name = match network {
                NetworkType::Gsm => "traffic",
                NetworkType::Umts => "throughput",
                NetworkType::Lte => "bandwidth",
                NetworkType::Microwave | NetworkType::Optical => "margin",
            };
            assert_eq!(results.extra.name(), extra_name);
        }
    }

    #[test]
    fn test_compute_with_constants() {
        let constants = DimensioningConstants {
            gsm_site_cost: 100,
            ..DimensioningConstants::default()
        };
        let results = compute_with_constants(&ParameterSet::defaults(NetworkType::Gsm), &constants);
        assert_eq!(results.cost, 3_800);
        assert_eq!(results.extra, ExtraMetric::Traffic(300.0));
    }

    #[test]
    fn test_breakdown_rows() {
        let constants = DimensioningConstants::default();
        let rows = breakdown(&ParameterSet::defaults(NetworkType::Gsm), &constants).rows();
        assert_eq!(rows[0], ("cell area (km²)", "12.566".to_string()));
        assert!(rows.contains(&("sites for capacity", "38".to_string())));
        assert!(rows.contains(&("channels", "2432".to_string())));

        let rows = breakdown(&ParameterSet::defaults(NetworkType::Optical), &constants).rows();
        assert_eq!(rows.last(), Some(&("link", "OK".to_string())));
    }
}
