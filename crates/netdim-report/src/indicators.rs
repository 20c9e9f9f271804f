//! Chart data derived from a result set.
//!
//! Only the data is produced; drawing it is left to the caller.

use netdim_core::ResultSet;
use serde::Serialize;

/// Fixed capacity score shown in the performance series.
pub const CAPACITY_SCORE: f64 = 85.0;
/// Fixed quality score shown in the performance series.
pub const QUALITY_SCORE: f64 = 92.0;
/// Fixed availability score shown in the performance series.
pub const AVAILABILITY_SCORE: f64 = 98.0;
/// Most site icons drawn on the coverage map.
pub const MAX_SITE_ICONS: u32 = 16;

/// One named value of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicator {
    /// Series label.
    pub name: String,
    /// Plotted value.
    pub value: f64,
}

impl Indicator {
    fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Chart data for one result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicators {
    /// Performance pie: coverage against fixed capacity, quality and availability scores.
    pub performance: Vec<Indicator>,
    /// Dimensioning bars: site count and cost in millions.
    pub dimensioning: Vec<Indicator>,
    /// Number of site icons on the coverage map.
    pub site_icons: u32,
}

impl Indicators {
    /// Build the chart data, labelling costs in `currency`.
    pub fn from_results(results: &ResultSet, currency: &str) -> Self {
        Self {
            performance: vec![
                Indicator::new("Couverture", results.coverage as f64),
                Indicator::new("Capacité", CAPACITY_SCORE),
                Indicator::new("Qualité", QUALITY_SCORE),
                Indicator::new("Disponibilité", AVAILABILITY_SCORE),
            ],
            dimensioning: vec![
                Indicator::new("Sites", results.sites as f64),
                Indicator::new(
                    format!("Coût (M {})", currency),
                    results.cost as f64 / 1_000_000.0,
                ),
            ],
            site_icons: results.sites.min(MAX_SITE_ICONS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use netdim_core::{compute, NetworkType, ParameterSet};

    #[test]
    fn test_gsm_indicators() {
        let results = compute(&ParameterSet::defaults(NetworkType::Gsm));
        let indicators = Indicators::from_results(&results, "FCFA");

        let performance: Vec<(&str, f64)> = indicators
            .performance
            .iter()
            .map(|i| (i.name.as_str(), i.value))
            .collect();
        assert_eq!(
            performance,
            vec![("Couverture", 100.0), ("Capacité", 85.0), ("Qualité", 92.0), ("Disponibilité", 98.0)]
        );

        assert_eq!(indicators.dimensioning[0], Indicator::new("Sites", 38.0));
        assert_eq!(indicators.dimensioning[1].name, "Coût (M FCFA)");
        assert_relative_eq!(indicators.dimensioning[1].value, 3420.0);
        assert_eq!(indicators.site_icons, 16);
    }

    #[test]
    fn test_link_site_icons() {
        let results = compute(&ParameterSet::defaults(NetworkType::Optical));
        let indicators = Indicators::from_results(&results, "FCFA");
        assert_eq!(indicators.site_icons, 2);
        assert_relative_eq!(indicators.dimensioning[1].value, 15.0);
    }
}
