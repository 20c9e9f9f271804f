//! Point-to-point link budgets: microwave and optical fiber.
//!
//! Both link types have a fixed two-site topology and a fixed cost. The
//! capacity slot of their result carries the link loss, and the extra metric
//! carries the margin over receiver sensitivity.

use crate::constants::{DimensioningConstants, FSPL_CONSTANT_DB};
use crate::numeric::{finite_or_zero, percentage, round_half_up, round_to};
use crate::params::{MicrowaveParams, OpticalParams};
use crate::results::{Capacity, CapacityUnit, ExtraMetric, ResultSet};

/// Free-space path loss in dB for a distance in km and a frequency in MHz.
///
/// Both arguments must be positive.
pub fn free_space_path_loss_db(distance_km: f64, frequency_mhz: f64) -> f64 {
    FSPL_CONSTANT_DB + 20.0 * distance_km.log10() + 20.0 * frequency_mhz.log10()
}

// ============================================================================
// Availability
// ============================================================================

/// Availability tier of a microwave hop, chosen from its margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AvailabilityTier {
    /// Margin above the high threshold.
    High,
    /// Margin above the standard threshold.
    Standard,
    /// Margin at or below the standard threshold.
    Degraded,
}

impl AvailabilityTier {
    /// Classify a margin against the configured thresholds.
    pub fn classify(margin_db: f64, constants: &DimensioningConstants) -> Self {
        if margin_db > constants.microwave_high_availability_margin_db {
            AvailabilityTier::High
        } else if margin_db > constants.microwave_standard_availability_margin_db {
            AvailabilityTier::Standard
        } else {
            AvailabilityTier::Degraded
        }
    }

    /// Availability of the tier (%).
    pub fn availability_pct(&self, constants: &DimensioningConstants) -> f64 {
        match self {
            AvailabilityTier::High => constants.microwave_high_availability_pct,
            AvailabilityTier::Standard => constants.microwave_standard_availability_pct,
            AvailabilityTier::Degraded => constants.microwave_degraded_availability_pct,
        }
    }

    /// Human-readable description of the tier.
    pub fn description(&self) -> &'static str {
        match self {
            AvailabilityTier::High => "High availability",
            AvailabilityTier::Standard => "Standard availability",
            AvailabilityTier::Degraded => "DEGRADED availability",
        }
    }
}

impl std::fmt::Display for AvailabilityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// ============================================================================
// Microwave
// ============================================================================

/// Intermediate quantities of a microwave link budget.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MicrowaveBreakdown {
    /// Hop length used in the loss formula, after flooring (km).
    pub distance_km: f64,
    /// Frequency used in the loss formula, after flooring and scaling (MHz).
    pub frequency_mhz: f64,
    /// Free-space path loss (dB).
    pub fspl_db: f64,
    /// Power at the receiver input (dBm).
    pub received_power_dbm: f64,
    /// Margin over receiver sensitivity (dB).
    pub margin_db: f64,
    /// Tier derived from the margin.
    pub tier: AvailabilityTier,
    /// Availability of that tier (%).
    pub availability_pct: f64,
}

/// Work through the microwave link budget.
///
/// The same antenna gain is applied at both ends of the hop.
pub fn microwave_breakdown(
    params: &MicrowaveParams,
    constants: &DimensioningConstants,
) -> MicrowaveBreakdown {
    let distance_km = floored(params.distance, constants.microwave_min_distance_km);
    let frequency_ghz = floored(params.frequency, constants.microwave_min_frequency_ghz);
    let frequency_mhz = frequency_ghz * 1000.0;

    let fspl = finite_or_zero(free_space_path_loss_db(distance_km, frequency_mhz));
    let received = finite_or_zero(params.power + params.gain + params.gain - fspl);
    let margin = finite_or_zero(received - constants.microwave_rx_sensitivity_dbm);
    let tier = AvailabilityTier::classify(margin, constants);

    MicrowaveBreakdown {
        distance_km,
        frequency_mhz,
        fspl_db: fspl,
        received_power_dbm: received,
        margin_db: margin,
        tier,
        availability_pct: tier.availability_pct(constants),
    }
}

/// Dimension a microwave link.
pub fn compute_microwave(params: &MicrowaveParams, constants: &DimensioningConstants) -> ResultSet {
    let breakdown = microwave_breakdown(params, constants);
    ResultSet {
        sites: constants.link_site_count,
        capacity: Capacity::new(round_half_up(breakdown.fspl_db), CapacityUnit::DbLoss),
        coverage: percentage(breakdown.availability_pct),
        cost: constants.microwave_link_cost,
        extra: ExtraMetric::Margin(round_to(breakdown.margin_db, 1)),
    }
}

/// Positive floor for a logarithm argument. Non-finite values take the floor.
fn floored(value: f64, floor: f64) -> f64 {
    let floor = if floor.is_finite() && floor > 0.0 { floor } else { f64::MIN_POSITIVE };
    if value.is_finite() && value > floor {
        value
    } else {
        floor
    }
}

// ============================================================================
// Optical
// ============================================================================

/// Intermediate quantities of an optical link budget.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpticalBreakdown {
    /// Fiber loss plus connector budget (dB).
    pub total_loss_db: f64,
    /// Power at the receiver input (dBm).
    pub received_power_dbm: f64,
    /// Margin over receiver sensitivity (dB).
    pub margin_db: f64,
    /// Whether the margin is positive.
    pub link_ok: bool,
}

/// Work through the optical link budget.
pub fn optical_breakdown(params: &OpticalParams, constants: &DimensioningConstants) -> OpticalBreakdown {
    let total_loss = finite_or_zero(
        params.distance * params.attenuation + constants.optical_connector_loss_db,
    );
    let received = finite_or_zero(params.power - total_loss);
    let margin = finite_or_zero(received - constants.optical_rx_sensitivity_dbm);

    OpticalBreakdown {
        total_loss_db: total_loss,
        received_power_dbm: received,
        margin_db: margin,
        link_ok: margin > 0.0,
    }
}

/// Dimension an optical link.
pub fn compute_optical(params: &OpticalParams, constants: &DimensioningConstants) -> ResultSet {
    let breakdown = optical_breakdown(params, constants);
    let coverage = if breakdown.link_ok {
        constants.optical_coverage_ok_pct
    } else {
        constants.optical_coverage_degraded_pct
    };

    ResultSet {
        sites: constants.link_site_count,
        capacity: Capacity::new(round_to(breakdown.total_loss_db, 1), CapacityUnit::DbLoss),
        coverage: coverage.min(100),
        cost: constants.optical_link_cost,
        extra: ExtraMetric::Margin(round_to(breakdown.margin_db, 1)),
    }
}
