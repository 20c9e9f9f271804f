//! Area-network dimensioning: GSM, UMTS and LTE.
//!
//! Each network sizes the site count from coverage (area divided by the area
//! one site serves) and, for GSM, from busy-hour traffic as well. Coverage is
//! the share of the service area the chosen sites can serve, capped at 100 %.

use crate::constants::DimensioningConstants;
use crate::numeric::{finite_or_zero, percentage, round_half_up, round_to, site_count};
use crate::params::{GsmParams, LteParams, UmtsParams};
use crate::results::{Capacity, CapacityUnit, ExtraMetric, ResultSet};
use std::f64::consts::PI;

/// Area of a circular cell (km²). Non-positive radii give an empty cell.
///
/// A positive radius always gives a positive area, even when `π·r²`
/// underflows.
pub fn cell_area_km2(radius_km: f64) -> f64 {
    if radius_km.is_finite() && radius_km > 0.0 {
        (PI * radius_km * radius_km).max(f64::MIN_POSITIVE)
    } else {
        0.0
    }
}

/// Sites needed to tile `area_km2` with cells of `site_area_km2`.
///
/// Returns 0 when either area is not positive. Requirements too large to
/// count saturate at `u32::MAX`.
pub fn coverage_sites(area_km2: f64, site_area_km2: f64) -> u32 {
    if area_km2 > 0.0 && site_area_km2 > 0.0 {
        let cells = area_km2 / site_area_km2;
        if cells == f64::INFINITY {
            u32::MAX
        } else {
            site_count(cells)
        }
    } else {
        0
    }
}

/// Share of `area_km2` served by `sites` cells of `site_area_km2`, in
/// percent and capped at 100. An empty service area has no coverage.
///
/// Meeting the (possibly saturated) coverage requirement is full coverage.
pub fn coverage_pct(sites: u32, site_area_km2: f64, area_km2: f64) -> f64 {
    let required = coverage_sites(area_km2, site_area_km2);
    if required > 0 && sites >= required {
        return 100.0;
    }
    if area_km2 > 0.0 {
        let pct = (sites as f64 * site_area_km2 / area_km2) * 100.0;
        finite_or_zero(pct).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn total_cost(sites: u32, unit_cost: u64) -> u64 {
    (sites as u64).saturating_mul(unit_cost)
}

// ============================================================================
// GSM
// ============================================================================

/// Intermediate quantities of a GSM dimensioning.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GsmBreakdown {
    /// Area served by one cell (km²).
    pub cell_area_km2: f64,
    /// Sites needed to cover the area.
    pub sites_for_coverage: u32,
    /// Subscribers in the service area.
    pub total_users: f64,
    /// Busy-hour traffic (Erl).
    pub total_traffic_erl: f64,
    /// Sites needed to carry the traffic.
    pub sites_for_capacity: u32,
    /// Final site count, the larger of the two requirements.
    pub sites: u32,
    /// Traffic channels offered by the final sites.
    pub channels: u64,
    /// Coverage before rounding (%).
    pub coverage_pct: f64,
}

/// Work through the GSM formulas.
pub fn gsm_breakdown(params: &GsmParams, constants: &DimensioningConstants) -> GsmBreakdown {
    let cell_area = cell_area_km2(params.radius);
    let sites_for_coverage = coverage_sites(params.area, cell_area);

    let total_users = finite_or_zero(params.area * params.density * (params.penetration / 100.0));
    let total_traffic = finite_or_zero(
        total_users * (params.traffic / 1000.0) * (params.busy_hour / 100.0),
    );
    let sites_for_capacity = if constants.gsm_erlangs_per_site > 0.0 {
        site_count(total_traffic / constants.gsm_erlangs_per_site)
    } else {
        0
    };

    let sites = sites_for_coverage.max(sites_for_capacity);
    let channels = (sites as u64).saturating_mul(constants.gsm_channels_per_site());

    GsmBreakdown {
        cell_area_km2: cell_area,
        sites_for_coverage,
        total_users,
        total_traffic_erl: total_traffic,
        sites_for_capacity,
        sites,
        channels,
        coverage_pct: coverage_pct(sites, cell_area, params.area),
    }
}

/// Dimension a GSM network.
pub fn compute_gsm(params: &GsmParams, constants: &DimensioningConstants) -> ResultSet {
    let breakdown = gsm_breakdown(params, constants);
    ResultSet {
        sites: breakdown.sites,
        capacity: Capacity::new(breakdown.channels as f64, CapacityUnit::Channels),
        coverage: percentage(breakdown.coverage_pct),
        cost: total_cost(breakdown.sites, constants.gsm_site_cost),
        extra: ExtraMetric::Traffic(round_to(breakdown.total_traffic_erl, 2)),
    }
}

// ============================================================================
// UMTS
// ============================================================================

/// Intermediate quantities of a UMTS dimensioning.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UmtsBreakdown {
    /// Area served by one cell (km²).
    pub cell_area_km2: f64,
    /// Site count.
    pub sites: u32,
    /// Aggregate throughput at the configured load (kbps), unrounded.
    pub capacity_kbps: f64,
    /// Coverage before rounding (%).
    pub coverage_pct: f64,
}

/// Work through the UMTS formulas.
pub fn umts_breakdown(params: &UmtsParams, constants: &DimensioningConstants) -> UmtsBreakdown {
    let cell_area = cell_area_km2(params.radius);
    let sites = coverage_sites(params.area, cell_area);
    let capacity = finite_or_zero(
        sites as f64 * constants.umts_cell_capacity_kbps * (params.load / 100.0),
    );

    UmtsBreakdown {
        cell_area_km2: cell_area,
        sites,
        capacity_kbps: capacity,
        coverage_pct: coverage_pct(sites, cell_area, params.area),
    }
}

/// Dimension a UMTS network.
pub fn compute_umts(params: &UmtsParams, constants: &DimensioningConstants) -> ResultSet {
    let breakdown = umts_breakdown(params, constants);
    ResultSet {
        sites: breakdown.sites,
        capacity: Capacity::new(round_half_up(breakdown.capacity_kbps), CapacityUnit::Kbps),
        coverage: percentage(breakdown.coverage_pct),
        cost: total_cost(breakdown.sites, constants.umts_site_cost),
        extra: ExtraMetric::Throughput(params.throughput),
    }
}

// ============================================================================
// LTE
// ============================================================================

/// Intermediate quantities of an LTE dimensioning.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LteBreakdown {
    /// Area served by one site (km²).
    pub site_area_km2: f64,
    /// Site count.
    pub sites: u32,
    /// Aggregate throughput (Mbps), unrounded.
    pub capacity_mbps: f64,
    /// Coverage before rounding (%).
    pub coverage_pct: f64,
}

/// Work through the LTE formulas.
pub fn lte_breakdown(params: &LteParams, constants: &DimensioningConstants) -> LteBreakdown {
    let site_area = constants.lte_site_area_km2;
    let sites = coverage_sites(params.area, site_area);
    let capacity = finite_or_zero(sites as f64 * params.bandwidth * params.efficiency);

    LteBreakdown {
        site_area_km2: site_area,
        sites,
        capacity_mbps: capacity,
        coverage_pct: coverage_pct(sites, site_area, params.area),
    }
}

/// Dimension an LTE network.
pub fn compute_lte(params: &LteParams, constants: &DimensioningConstants) -> ResultSet {
    let breakdown = lte_breakdown(params, constants);
    ResultSet {
        sites: breakdown.sites,
        capacity: Capacity::new(round_half_up(breakdown.capacity_mbps), CapacityUnit::Mbps),
        coverage: percentage(breakdown.coverage_pct),
        cost: total_cost(breakdown.sites, constants.lte_site_cost),
        extra: ExtraMetric::Bandwidth(params.bandwidth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn defaults() -> DimensioningConstants {
        DimensioningConstants::default()
    }

    #[test]
    fn test_cell_area() {
        assert_relative_eq!(cell_area_km2(2.0), 12.566_370_614_359_172, epsilon = 1e-12);
        assert_eq!(cell_area_km2(0.0), 0.0);
        assert_eq!(cell_area_km2(-1.0), 0.0);
        assert_eq!(cell_area_km2(f64::NAN), 0.0);
    }

    #[test]
    fn test_gsm_reference_case() {
        let breakdown = gsm_breakdown(&GsmParams::default(), &defaults());

        assert_relative_eq!(breakdown.cell_area_km2, 12.566, epsilon = 1e-3);
        assert_eq!(breakdown.sites_for_coverage, 8);
        assert_relative_eq!(breakdown.total_users, 80_000.0, epsilon = 1e-6);
        assert_relative_eq!(breakdown.total_traffic_erl, 300.0, epsilon = 1e-9);
        assert_eq!(breakdown.sites_for_capacity, 38);
        assert_eq!(breakdown.sites, 38);
        assert_eq!(breakdown.channels, 2432);

        let result = compute_gsm(&GsmParams::default(), &defaults());
        assert_eq!(result.sites, 38);
        assert_eq!(result.capacity.to_string(), "2432 canaux");
        assert_eq!(result.coverage, 100);
        assert_eq!(result.cost, 3_420_000_000);
        assert_eq!(result.extra, ExtraMetric::Traffic(300.0));
    }

    #[test]
    fn test_gsm_coverage_limited() {
        let params = GsmParams {
            density: 10.0,
            ..GsmParams::default()
        };
        let breakdown = gsm_breakdown(&params, &defaults());
        assert_eq!(breakdown.sites_for_capacity, 1);
        assert_eq!(breakdown.sites, breakdown.sites_for_coverage);
        assert_eq!(breakdown.sites, 8);

        let result = compute_gsm(&params, &defaults());
        assert_eq!(result.capacity.value, 512.0);
        assert_eq!(result.coverage, 100);
    }

    #[test]
    fn test_coverage_pct_partial() {
        let pct = coverage_pct(4, cell_area_km2(2.0), 100.0);
        assert_relative_eq!(pct, 50.265_482_457_436_69, epsilon = 1e-9);
        assert_eq!(percentage(pct), 50);

        assert_eq!(coverage_pct(40, cell_area_km2(2.0), 100.0), 100.0);
        assert_eq!(coverage_pct(4, cell_area_km2(2.0), 0.0), 0.0);
    }

    #[test]
    fn test_gsm_zero_area() {
        let params = GsmParams {
            area: 0.0,
            ..GsmParams::default()
        };
        let result = compute_gsm(&params, &defaults());
        assert_eq!(result.sites, 0);
        assert_eq!(result.coverage, 0);
        assert_eq!(result.cost, 0);
        assert_eq!(result.capacity.value, 0.0);
    }

    #[test]
    fn test_gsm_zero_radius_uses_capacity_sites() {
        let params = GsmParams {
            radius: 0.0,
            ..GsmParams::default()
        };
        let breakdown = gsm_breakdown(&params, &defaults());
        assert_eq!(breakdown.sites_for_coverage, 0);
        assert_eq!(breakdown.sites, 38);
        assert_eq!(compute_gsm(&params, &defaults()).coverage, 0);
    }

    #[test]
    fn test_tiny_radius_saturates_sites() {
        assert!(cell_area_km2(1e-200) > 0.0);

        for radius in [1e-10, 1e-100, 1e-155, 1e-160, 1e-200] {
            let gsm = GsmParams {
                radius,
                ..GsmParams::default()
            };
            let result = compute_gsm(&gsm, &defaults());
            assert_eq!(result.sites, u32::MAX, "radius {}", radius);
            assert_eq!(result.coverage, 100, "radius {}", radius);
            assert!(result.capacity.value > 0.0);

            let umts = UmtsParams {
                radius,
                ..UmtsParams::default()
            };
            let result = compute_umts(&umts, &defaults());
            assert_eq!(result.sites, u32::MAX, "radius {}", radius);
            assert_eq!(result.coverage, 100, "radius {}", radius);
            assert!(result.cost > 0);
        }
    }

    #[test]
    fn test_umts_defaults() {
        let breakdown = umts_breakdown(&UmtsParams::default(), &defaults());
        // 100 / (π·1.5²) ≈ 14.15
        assert_eq!(breakdown.sites, 15);

        let result = compute_umts(&UmtsParams::default(), &defaults());
        assert_eq!(result.sites, 15);
        assert_eq!(result.capacity.to_string(), "21504 kbps");
        assert_eq!(result.coverage, 100);
        assert_eq!(result.cost, 1_800_000_000);
        assert_eq!(result.extra, ExtraMetric::Throughput(384.0));
    }

    #[test]
    fn test_umts_zero_radius() {
        let params = UmtsParams {
            radius: 0.0,
            ..UmtsParams::default()
        };
        let result = compute_umts(&params, &defaults());
        assert_eq!(result.sites, 0);
        assert_eq!(result.coverage, 0);
        assert_eq!(result.capacity.value, 0.0);
    }

    #[test]
    fn test_lte_defaults() {
        let result = compute_lte(&LteParams::default(), &defaults());
        // ceil(100 / 7) = 15
        assert_eq!(result.sites, 15);
        assert_eq!(result.capacity.to_string(), "900 Mbps");
        assert_eq!(result.coverage, 100);
        assert_eq!(result.cost, 2_700_000_000);
        assert_eq!(result.extra, ExtraMetric::Bandwidth(20.0));
    }

    #[test]
    fn test_lte_custom_site_area() {
        let constants = DimensioningConstants {
            lte_site_area_km2: 10.0,
            ..defaults()
        };
        let result = compute_lte(&LteParams::default(), &constants);
        assert_eq!(result.sites, 10);

        let constants = DimensioningConstants {
            lte_site_area_km2: 0.0,
            ..defaults()
        };
        let result = compute_lte(&LteParams::default(), &constants);
        assert_eq!(result.sites, 0);
        assert_eq!(result.coverage, 0);
    }

    #[test]
    fn test_lte_negative_area() {
        let params = LteParams {
            area: -50.0,
            ..LteParams::default()
        };
        let result = compute_lte(&params, &defaults());
        assert_eq!(result.sites, 0);
        assert_eq!(result.coverage, 0);
    }
}
