//! Planning assumptions behind the dimensioning formulas.

/// Erlangs one GSM site can carry.
pub const GSM_ERLANGS_PER_SITE: f64 = 8.0;

/// Cost of one GSM site, in currency units.
pub const GSM_SITE_COST: u64 = 90_000_000;

/// Capacity of one UMTS cell at full load (kbps).
pub const UMTS_CELL_CAPACITY_KBPS: f64 = 2048.0;

/// Cost of one UMTS site, in currency units.
pub const UMTS_SITE_COST: u64 = 120_000_000;

/// Area served by one LTE site (km²).
pub const LTE_SITE_AREA_KM2: f64 = 7.0;

/// Cost of one LTE site, in currency units.
pub const LTE_SITE_COST: u64 = 180_000_000;

/// Microwave receiver sensitivity (dBm).
pub const MICROWAVE_RX_SENSITIVITY_DBM: f64 = -90.0;

/// Optical receiver sensitivity (dBm).
pub const OPTICAL_RX_SENSITIVITY_DBM: f64 = -25.0;

/// Connector and splice loss budget of an optical link (dB).
pub const OPTICAL_CONNECTOR_LOSS_DB: f64 = 3.0;

/// Free-space path loss constant for distance in km and frequency in MHz (dB).
pub const FSPL_CONSTANT_DB: f64 = 32.45;

// ============================================================================
// Dimensioning Constants
// ============================================================================

/// Configurable assumptions used by the calculator.
///
/// `Default` reproduces the textbook figures the formulas are built on; a
/// configuration file can override any subset of them.
///
/// # Example
///
/// ```
/// use netdim_core::DimensioningConstants;
///
/// let constants = DimensioningConstants {
///     gsm_site_cost: 95_000_000,
///     ..DimensioningConstants::default()
/// };
/// assert_eq!(constants.gsm_channels_per_site(), 64);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DimensioningConstants {
    // GSM
    /// Traffic one GSM site can carry (Erl).
    pub gsm_erlangs_per_site: f64,
    /// Carriers (TRX) per GSM site.
    pub gsm_carriers_per_site: u32,
    /// Timeslots per GSM carrier.
    pub gsm_timeslots_per_carrier: u32,
    /// Cost per GSM site.
    pub gsm_site_cost: u64,

    // UMTS
    /// Cell capacity at 100 % load (kbps).
    pub umts_cell_capacity_kbps: f64,
    /// Cost per UMTS site.
    pub umts_site_cost: u64,

    // LTE
    /// Area served by one LTE site (km²).
    pub lte_site_area_km2: f64,
    /// Cost per LTE site.
    pub lte_site_cost: u64,

    // Point-to-point links
    /// Number of sites at the ends of a link.
    pub link_site_count: u32,

    // Microwave
    /// Receiver sensitivity (dBm).
    pub microwave_rx_sensitivity_dbm: f64,
    /// Margin above which the link reaches the high availability tier (dB).
    pub microwave_high_availability_margin_db: f64,
    /// Margin above which the link reaches the standard availability tier (dB).
    pub microwave_standard_availability_margin_db: f64,
    /// Availability of the high tier (%).
    pub microwave_high_availability_pct: f64,
    /// Availability of the standard tier (%).
    pub microwave_standard_availability_pct: f64,
    /// Availability when the margin is not positive (%).
    pub microwave_degraded_availability_pct: f64,
    /// Shortest path length used in the loss formula (km).
    pub microwave_min_distance_km: f64,
    /// Lowest frequency used in the loss formula (GHz).
    pub microwave_min_frequency_ghz: f64,
    /// Total cost of a microwave link.
    pub microwave_link_cost: u64,

    // Optical
    /// Connector and splice loss budget (dB).
    pub optical_connector_loss_db: f64,
    /// Receiver sensitivity (dBm).
    pub optical_rx_sensitivity_dbm: f64,
    /// Coverage reported when the optical margin is positive (%).
    pub optical_coverage_ok_pct: u32,
    /// Coverage reported when the optical margin is not positive (%).
    pub optical_coverage_degraded_pct: u32,
    /// Total cost of an optical link.
    pub optical_link_cost: u64,
}

impl Default for DimensioningConstants {
    fn default() -> Self {
        Self {
            // GSM
            gsm_erlangs_per_site: GSM_ERLANGS_PER_SITE,
            gsm_carriers_per_site: 8,
            gsm_timeslots_per_carrier: 8,
            gsm_site_cost: GSM_SITE_COST,

            // UMTS
            umts_cell_capacity_kbps: UMTS_CELL_CAPACITY_KBPS,
            umts_site_cost: UMTS_SITE_COST,

            // LTE
            lte_site_area_km2: LTE_SITE_AREA_KM2,
            lte_site_cost: LTE_SITE_COST,

            // Point-to-point links
            link_site_count: 2,

            // Microwave
            microwave_rx_sensitivity_dbm: MICROWAVE_RX_SENSITIVITY_DBM,
            microwave_high_availability_margin_db: 10.0,
            microwave_standard_availability_margin_db: 0.0,
            microwave_high_availability_pct: 99.9,
            microwave_standard_availability_pct: 99.0,
            microwave_degraded_availability_pct: 95.0,
            microwave_min_distance_km: 0.001,
            microwave_min_frequency_ghz: 0.001,
            microwave_link_cost: 30_000_000,

            // Optical
            optical_connector_loss_db: OPTICAL_CONNECTOR_LOSS_DB,
            optical_rx_sensitivity_dbm: OPTICAL_RX_SENSITIVITY_DBM,
            optical_coverage_ok_pct: 100,
            optical_coverage_degraded_pct: 50,
            optical_link_cost: 15_000_000,
        }
    }
}

impl DimensioningConstants {
    /// Traffic channels offered by one GSM site.
    pub fn gsm_channels_per_site(&self) -> u64 {
        self.gsm_carriers_per_site as u64 * self.gsm_timeslots_per_carrier as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let constants = DimensioningConstants::default();

        assert_eq!(constants.gsm_erlangs_per_site, 8.0);
        assert_eq!(constants.gsm_channels_per_site(), 64);
        assert_eq!(constants.gsm_site_cost, 90_000_000);
        assert_eq!(constants.umts_cell_capacity_kbps, 2048.0);
        assert_eq!(constants.umts_site_cost, 120_000_000);
        assert_eq!(constants.lte_site_area_km2, 7.0);
        assert_eq!(constants.lte_site_cost, 180_000_000);
        assert_eq!(constants.link_site_count, 2);
        assert_eq!(constants.microwave_rx_sensitivity_dbm, -90.0);
        assert_eq!(constants.microwave_link_cost, 30_000_000);
        assert_eq!(constants.optical_connector_loss_db, 3.0);
        assert_eq!(constants.optical_rx_sensitivity_dbm, -25.0);
        assert_eq!(constants.optical_link_cost, 15_000_000);
    }

    #[test]
    fn test_override_keeps_other_defaults() {
        let constants = DimensioningConstants {
            lte_site_area_km2: 10.0,
            ..DimensioningConstants::default()
        };
        assert_eq!(constants.lte_site_area_km2, 10.0);
        assert_eq!(constants.lte_site_cost, LTE_SITE_COST);
    }
}
