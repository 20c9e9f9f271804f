//! Property-based tests for the dimensioning formulas.
//!
//! Covers: GSM site selection and channel count, tiny cells, coverage clamping, finite
//! results for arbitrary finite inputs, parse-with-default.

use netdim_core::{
    compute, gsm_breakdown, parse_or_zero, DimensioningConstants, GsmParams, LteParams,
    MicrowaveParams, OpticalParams, ParameterSet, UmtsParams,
};
use proptest::prelude::*;

fn assert_finite(params: ParameterSet) -> Result<(), TestCaseError> {
    let results = compute(&params);
    prop_assert!(results.capacity.value.is_finite(), "{:?}", params);
    prop_assert!(results.extra.value().is_finite(), "{:?}", params);
    prop_assert!(results.coverage <= 100, "{:?}", params);
    Ok(())
}

// ── GSM ──────────────────────────────────────────────────────────────

proptest! {
    /// Final sites are the larger requirement and each carries 64 channels.
    #[test]
    fn gsm_sites_are_max_of_requirements(
        area in 0.1f64..10_000.0,
        radius in 0.1f64..50.0,
        density in 0.0f64..20_000.0,
        penetration in 0.0f64..100.0,
        traffic in 0.0f64..100.0,
        busy_hour in 0.0f64..100.0,
    ) {
        let params = GsmParams {
            area,
            radius,
            density,
            penetration,
            traffic,
            busy_hour,
            ..GsmParams::default()
        };
        let breakdown = gsm_breakdown(&params, &DimensioningConstants::default());

        prop_assert_eq!(
            breakdown.sites,
            breakdown.sites_for_coverage.max(breakdown.sites_for_capacity)
        );
        prop_assert_eq!(breakdown.channels, breakdown.sites as u64 * 64);

        let results = compute(&params.into());
        prop_assert_eq!(results.sites, breakdown.sites);
        prop_assert_eq!(results.capacity.value, breakdown.sites as f64 * 64.0);
        prop_assert_eq!(results.cost, breakdown.sites as u64 * 90_000_000);
    }

    /// Enough sites for coverage always means full coverage.
    #[test]
    fn gsm_coverage_sites_cover_everything(
        area in 0.1f64..10_000.0,
        radius in 0.1f64..50.0,
    ) {
        let params = GsmParams { area, radius, ..GsmParams::default() };
        prop_assert_eq!(compute(&params.into()).coverage, 100);
    }
}

// ── Tiny cells ───────────────────────────────────────────────────────

proptest! {
    /// Shrinking the cell never drops the site count to zero or loses coverage.
    #[test]
    fn tiny_cells_keep_full_coverage(
        area in 0.1f64..10_000.0,
        exponent in -200.0f64..-3.0,
    ) {
        let radius = 10f64.powf(exponent);

        let gsm = compute(&GsmParams { area, radius, ..GsmParams::default() }.into());
        prop_assert!(gsm.sites > 0, "radius {}", radius);
        prop_assert_eq!(gsm.coverage, 100, "radius {}", radius);

        let umts = compute(&UmtsParams { area, radius, ..UmtsParams::default() }.into());
        prop_assert!(umts.sites > 0, "radius {}", radius);
        prop_assert_eq!(umts.coverage, 100, "radius {}", radius);
    }
}

// ── Coverage clamping ────────────────────────────────────────────────

proptest! {
    /// Area networks never report more than 100 % coverage.
    #[test]
    fn area_coverage_is_clamped(
        area in -1.0e6f64..1.0e6,
        radius in -100.0f64..100.0,
        load in -100.0f64..200.0,
    ) {
        let gsm = GsmParams { area, radius, ..GsmParams::default() };
        let umts = UmtsParams { area, radius, load, ..UmtsParams::default() };
        let lte = LteParams { area, ..LteParams::default() };

        for params in [ParameterSet::from(gsm), umts.into(), lte.into()] {
            prop_assert!(compute(&params).coverage <= 100);
        }
    }
}

// ── Finite results ───────────────────────────────────────────────────

proptest! {
    /// Any finite GSM input gives finite results.
    #[test]
    fn gsm_results_are_finite(
        area in -1.0e9f64..1.0e9,
        radius in -1.0e3f64..1.0e3,
        density in -1.0e6f64..1.0e6,
        penetration in -1.0e3f64..1.0e3,
        traffic in -1.0e3f64..1.0e3,
        busy_hour in -1.0e3f64..1.0e3,
    ) {
        assert_finite(GsmParams {
            area,
            radius,
            density,
            penetration,
            traffic,
            busy_hour,
            ..GsmParams::default()
        }.into())?;
    }

    /// Any finite UMTS and LTE input gives finite results.
    #[test]
    fn umts_lte_results_are_finite(
        area in -1.0e9f64..1.0e9,
        radius in -1.0e3f64..1.0e3,
        load in -1.0e3f64..1.0e3,
        bandwidth in -1.0e3f64..1.0e3,
        efficiency in -100.0f64..100.0,
    ) {
        assert_finite(UmtsParams { area, radius, load, ..UmtsParams::default() }.into())?;
        assert_finite(LteParams { area, bandwidth, efficiency, ..LteParams::default() }.into())?;
    }

    /// Link budgets stay finite for zero, negative and huge inputs.
    #[test]
    fn link_results_are_finite(
        distance in -1.0e6f64..1.0e6,
        frequency in -1.0e3f64..1.0e3,
        power in -1.0e3f64..1.0e3,
        gain in -1.0e3f64..1.0e3,
        attenuation in -10.0f64..10.0,
    ) {
        let microwave = MicrowaveParams { distance, frequency, power, gain };
        let optical = OpticalParams { distance, power, attenuation, ..OpticalParams::default() };

        let results = compute(&microwave.into());
        prop_assert_eq!(results.sites, 2);
        prop_assert!([95, 99, 100].contains(&results.coverage));
        assert_finite(microwave.into())?;

        let results = compute(&optical.into());
        prop_assert!(results.coverage == 100 || results.coverage == 50);
        assert_finite(optical.into())?;
    }
}

// ── Parse-with-default ───────────────────────────────────────────────

proptest! {
    /// Arbitrary text never parses to a non-finite value.
    #[test]
    fn parse_is_always_finite(input in "\\PC*") {
        prop_assert!(parse_or_zero(&input).is_finite());
    }

    /// Finite numbers survive formatting and parsing.
    #[test]
    fn parse_reads_formatted_numbers(value in -1.0e12f64..1.0e12) {
        prop_assert_eq!(parse_or_zero(&value.to_string()), value);
        prop_assert_eq!(parse_or_zero(&format!("  {} km", value)), value);
    }
}
