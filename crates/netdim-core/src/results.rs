//! Result sets produced by the calculator.

use crate::error::{ParamError, ParamResult};
use crate::numeric::format_number;
use std::str::FromStr;

// ============================================================================
// Capacity
// ============================================================================

/// Unit attached to a capacity figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapacityUnit {
    /// GSM traffic channels.
    Channels,
    /// Aggregate UMTS throughput.
    Kbps,
    /// Aggregate LTE throughput.
    Mbps,
    /// Link loss, reported in place of a capacity for point-to-point links.
    DbLoss,
}

impl CapacityUnit {
    /// Label printed after the value.
    pub fn label(&self) -> &'static str {
        match self {
            CapacityUnit::Channels => "canaux",
            CapacityUnit::Kbps => "kbps",
            CapacityUnit::Mbps => "Mbps",
            CapacityUnit::DbLoss => "dB pertes",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "canaux" => Some(CapacityUnit::Channels),
            "kbps" => Some(CapacityUnit::Kbps),
            "Mbps" => Some(CapacityUnit::Mbps),
            "dB pertes" => Some(CapacityUnit::DbLoss),
            _ => None,
        }
    }
}

/// A capacity value with its unit, rendered as e.g. `2432 canaux`.
///
/// Serialized as the rendered label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capacity {
    /// Numeric value, already rounded.
    pub value: f64,
    /// Unit of the value.
    pub unit: CapacityUnit,
}

impl Capacity {
    /// Create a capacity.
    pub fn new(value: f64, unit: CapacityUnit) -> Self {
        Self { value, unit }
    }
}

impl std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", format_number(self.value), self.unit.label())
    }
}

impl FromStr for Capacity {
    type Err = ParamError;

    fn from_str(s: &str) -> ParamResult<Self> {
        let invalid = || ParamError::InvalidCapacity(s.to_string());
        let (value, unit) = s.trim().split_once(' ').ok_or_else(invalid)?;
        let value: f64 = value.parse().map_err(|_| invalid())?;
        let unit = CapacityUnit::from_label(unit.trim()).ok_or_else(invalid)?;
        Ok(Capacity { value, unit })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Capacity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Capacity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Network-specific metric
// ============================================================================

/// The one extra figure each network type reports.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExtraMetric {
    /// Busy-hour traffic (Erl), GSM.
    Traffic(f64),
    /// Throughput per user (kbps), UMTS.
    Throughput(f64),
    /// Channel bandwidth (MHz), LTE.
    Bandwidth(f64),
    /// Link margin (dB), microwave and optical.
    Margin(f64),
}

impl ExtraMetric {
    /// Field name of the metric.
    pub fn name(&self) -> &'static str {
        match self {
            ExtraMetric::Traffic(_) => "traffic",
            ExtraMetric::Throughput(_) => "throughput",
            ExtraMetric::Bandwidth(_) => "bandwidth",
            ExtraMetric::Margin(_) => "margin",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            ExtraMetric::Traffic(_) => "Trafic",
            ExtraMetric::Throughput(_) => "Débit par utilisateur",
            ExtraMetric::Bandwidth(_) => "Largeur de bande",
            ExtraMetric::Margin(_) => "Marge de liaison",
        }
    }

    /// Unit symbol.
    pub fn unit(&self) -> &'static str {
        match self {
            ExtraMetric::Traffic(_) => "Erl",
            ExtraMetric::Throughput(_) => "kbps",
            ExtraMetric::Bandwidth(_) => "MHz",
            ExtraMetric::Margin(_) => "dB",
        }
    }

    /// Numeric value.
    pub fn value(&self) -> f64 {
        match self {
            ExtraMetric::Traffic(v)
            | ExtraMetric::Throughput(v)
            | ExtraMetric::Bandwidth(v)
            | ExtraMetric::Margin(v) => *v,
        }
    }
}

impl std::fmt::Display for ExtraMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", format_number(self.value()), self.unit())
    }
}

// ============================================================================
// Result Set
// ============================================================================

/// Dimensioning outcome for one parameter set.
///
/// Always recomputed as a whole; never patched field by field.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultSet {
    /// Number of sites.
    pub sites: u32,
    /// Capacity (or link loss) with its unit.
    pub capacity: Capacity,
    /// Coverage percentage; availability-derived for links.
    pub coverage: u32,
    /// Estimated cost in currency units.
    pub cost: u64,
    /// Network-specific figure.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extra: ExtraMetric,
}
