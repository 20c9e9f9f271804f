//! Parameter metadata: labels, units, defaults and suggested bounds.
//!
//! Bounds are advisory. The calculator accepts any finite value; callers use
//! [`ParameterDef::is_within_bounds`] to flag suspicious input.

use crate::network::NetworkType;

/// Metadata for one input parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterDef {
    /// Parameter name as used in snapshots and `set` commands.
    pub name: &'static str,
    /// Form label.
    pub label: &'static str,
    /// Unit symbol.
    pub unit: &'static str,
    /// Value at startup.
    pub default: f64,
    /// Suggested minimum.
    pub min: Option<f64>,
    /// Suggested maximum.
    pub max: Option<f64>,
    /// Input step.
    pub step: f64,
}

impl ParameterDef {
    /// Create an unbounded parameter with a step of 1.
    pub const fn new(name: &'static str, label: &'static str, unit: &'static str, default: f64) -> Self {
        Self {
            name,
            label,
            unit,
            default,
            min: None,
            max: None,
            step: 1.0,
        }
    }

    /// Attach suggested bounds.
    pub const fn bounds(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Set the input step.
    pub const fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Whether `value` lies inside the suggested bounds.
    pub fn is_within_bounds(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    /// Whether `name` refers to this parameter. Matching ignores case and
    /// underscores, so `busy_hour` finds `busyHour`.
    pub fn matches(&self, name: &str) -> bool {
        normalize(self.name) == normalize(name)
    }

    /// Suggested range rendered for display, e.g. `1–100`.
    pub fn range_label(&self) -> Option<String> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some(format!("{}–{}", min, max)),
            (Some(min), None) => Some(format!("≥ {}", min)),
            (None, Some(max)) => Some(format!("≤ {}", max)),
            (None, None) => None,
        }
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

// ============================================================================
// Per-network schemas
// ============================================================================

const GSM: &[ParameterDef] = &[
    ParameterDef::new("area", "Surface à couvrir", "km²", 100.0),
    ParameterDef::new("radius", "Rayon de cellule", "km", 2.0).step(0.1),
    ParameterDef::new("density", "Densité de population", "/km²", 1000.0),
    ParameterDef::new("penetration", "Taux de pénétration", "%", 80.0).bounds(1.0, 100.0),
    ParameterDef::new("traffic", "Trafic par utilisateur", "mErl", 25.0),
    ParameterDef::new("busyHour", "Heure chargée", "%", 15.0).bounds(1.0, 100.0),
    ParameterDef::new("frequency", "Fréquence", "MHz", 900.0).bounds(800.0, 1900.0),
    ParameterDef::new("power", "Puissance émission", "dBm", 43.0).bounds(20.0, 50.0),
];

const UMTS: &[ParameterDef] = &[
    ParameterDef::new("area", "Surface à couvrir", "km²", 100.0),
    ParameterDef::new("radius", "Rayon de cellule", "km", 1.5).step(0.1),
    ParameterDef::new("throughput", "Débit par utilisateur", "kbps", 384.0),
    ParameterDef::new("load", "Facteur de charge", "%", 70.0).bounds(1.0, 100.0),
];

const LTE: &[ParameterDef] = &[
    ParameterDef::new("area", "Surface à couvrir", "km²", 100.0),
    ParameterDef::new("bandwidth", "Largeur de bande", "MHz", 20.0),
    ParameterDef::new("throughput", "Débit par utilisateur", "Mbps", 5.0).step(0.1),
    ParameterDef::new("efficiency", "Efficacité spectrale", "bps/Hz", 3.0).step(0.1),
];

const MICROWAVE: &[ParameterDef] = &[
    ParameterDef::new("distance", "Distance", "km", 30.0),
    ParameterDef::new("frequency", "Fréquence", "GHz", 6.0).step(0.1),
    ParameterDef::new("power", "Puissance émission", "dBm", 30.0).bounds(10.0, 50.0),
    ParameterDef::new("gain", "Gain antenne", "dBi", 35.0).bounds(0.0, 60.0),
];

const OPTICAL: &[ParameterDef] = &[
    ParameterDef::new("distance", "Distance", "km", 40.0),
    ParameterDef::new("wavelength", "Longueur d'onde", "nm", 1550.0).bounds(1300.0, 1650.0),
    ParameterDef::new("power", "Puissance émission", "dBm", 5.0).bounds(-10.0, 20.0),
    ParameterDef::new("attenuation", "Atténuation fibre", "dB/km", 0.2)
        .bounds(0.1, 1.0)
        .step(0.1),
];

/// Parameters of a network type, in form order.
pub fn schema(network: NetworkType) -> &'static [ParameterDef] {
    match network {
        NetworkType::Gsm => GSM,
        NetworkType::Umts => UMTS,
        NetworkType::Lte => LTE,
        NetworkType::Microwave => MICROWAVE,
        NetworkType::Optical => OPTICAL,
    }
}

/// Look up one parameter of a network type by name.
pub fn find_parameter(network: NetworkType, name: &str) -> Option<&'static ParameterDef> {
    schema(network).iter().find(|def| def.matches(name))
}

/// Unit of a parameter, or an empty string for unknown names.
pub fn unit_of(network: NetworkType, name: &str) -> &'static str {
    find_parameter(network, name).map_or("", |def| def.unit)
}
