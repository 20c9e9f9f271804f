//! Parameter sets, one per network type.
//!
//! Field names serialize to the parameter names listed by [`crate::schema`]
//! (`busy_hour` is written `busyHour`).

use crate::error::{ParamError, ParamResult};
use crate::network::NetworkType;
use crate::numeric::parse_or_zero;
use crate::schema::{find_parameter, schema, ParameterDef};

// ============================================================================
// Per-network parameter structs
// ============================================================================

/// GSM planning inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct GsmParams {
    /// Service area (km²).
    pub area: f64,
    /// Cell radius (km).
    pub radius: f64,
    /// Population density (inhabitants/km²).
    pub density: f64,
    /// Subscriber penetration (%).
    pub penetration: f64,
    /// Traffic per subscriber (mErl).
    pub traffic: f64,
    /// Share of daily traffic in the busy hour (%).
    pub busy_hour: f64,
    /// Carrier frequency (MHz). Informational.
    pub frequency: f64,
    /// Transmit power (dBm). Informational.
    pub power: f64,
}

impl Default for GsmParams {
    fn default() -> Self {
        Self {
            area: 100.0,
            radius: 2.0,
            density: 1000.0,
            penetration: 80.0,
            traffic: 25.0,
            busy_hour: 15.0,
            frequency: 900.0,
            power: 43.0,
        }
    }
}

impl GsmParams {
    fn slot(&mut self, name: &str) -> Option<&mut f64> {
        match name {
            "area" => Some(&mut self.area),
            "radius" => Some(&mut self.radius),
            "density" => Some(&mut self.density),
            "penetration" => Some(&mut self.penetration),
            "traffic" => Some(&mut self.traffic),
            "busyHour" => Some(&mut self.busy_hour),
            "frequency" => Some(&mut self.frequency),
            "power" => Some(&mut self.power),
            _ => None,
        }
    }

    fn values(&self) -> [f64; 8] {
        [
            self.area,
            self.radius,
            self.density,
            self.penetration,
            self.traffic,
            self.busy_hour,
            self.frequency,
            self.power,
        ]
    }
}

/// UMTS planning inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct UmtsParams {
    /// Service area (km²).
    pub area: f64,
    /// Cell radius (km).
    pub radius: f64,
    /// Throughput per user (kbps). Informational, echoed in results.
    pub throughput: f64,
    /// Cell load factor (%).
    pub load: f64,
}

impl Default for UmtsParams {
    fn default() -> Self {
        Self {
            area: 100.0,
            radius: 1.5,
            throughput: 384.0,
            load: 70.0,
        }
    }
}

impl UmtsParams {
    fn slot(&mut self, name: &str) -> Option<&mut f64> {
        match name {
            "area" => Some(&mut self.area),
            "radius" => Some(&mut self.radius),
            "throughput" => Some(&mut self.throughput),
            "load" => Some(&mut self.load),
            _ => None,
        }
    }

    fn values(&self) -> [f64; 4] {
        [self.area, self.radius, self.throughput, self.load]
    }
}

/// LTE planning inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct LteParams {
    /// Service area (km²).
    pub area: f64,
    /// Channel bandwidth (MHz).
    pub bandwidth: f64,
    /// Throughput per user (Mbps). Informational.
    pub throughput: f64,
    /// Spectral efficiency (bps/Hz).
    pub efficiency: f64,
}

impl Default for LteParams {
    fn default() -> Self {
        Self {
            area: 100.0,
            bandwidth: 20.0,
            throughput: 5.0,
            efficiency: 3.0,
        }
    }
}

impl LteParams {
    fn slot(&mut self, name: &str) -> Option<&mut f64> {
        match name {
            "area" => Some(&mut self.area),
            "bandwidth" => Some(&mut self.bandwidth),
            "throughput" => Some(&mut self.throughput),
            "efficiency" => Some(&mut self.efficiency),
            _ => None,
        }
    }

    fn values(&self) -> [f64; 4] {
        [self.area, self.bandwidth, self.throughput, self.efficiency]
    }
}

/// Microwave link budget inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct MicrowaveParams {
    /// Hop length (km).
    pub distance: f64,
    /// Carrier frequency (GHz).
    pub frequency: f64,
    /// Transmit power (dBm).
    pub power: f64,
    /// Antenna gain at each end (dBi).
    pub gain: f64,
}

impl Default for MicrowaveParams {
    fn default() -> Self {
        Self {
            distance: 30.0,
            frequency: 6.0,
            power: 30.0,
            gain: 35.0,
        }
    }
}

impl MicrowaveParams {
    fn slot(&mut self, name: &str) -> Option<&mut f64> {
        match name {
            "distance" => Some(&mut self.distance),
            "frequency" => Some(&mut self.frequency),
            "power" => Some(&mut self.power),
            "gain" => Some(&mut self.gain),
            _ => None,
        }
    }

    fn values(&self) -> [f64; 4] {
        [self.distance, self.frequency, self.power, self.gain]
    }
}

/// Optical link budget inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct OpticalParams {
    /// Fiber length (km).
    pub distance: f64,
    /// Operating wavelength (nm). Informational.
    pub wavelength: f64,
    /// Transmit power (dBm); may be negative.
    pub power: f64,
    /// Fiber attenuation (dB/km).
    pub attenuation: f64,
}

impl Default for OpticalParams {
    fn default() -> Self {
        Self {
            distance: 40.0,
            wavelength: 1550.0,
            power: 5.0,
            attenuation: 0.2,
        }
    }
}

impl OpticalParams {
    fn slot(&mut self, name: &str) -> Option<&mut f64> {
        match name {
            "distance" => Some(&mut self.distance),
            "wavelength" => Some(&mut self.wavelength),
            "power" => Some(&mut self.power),
            "attenuation" => Some(&mut self.attenuation),
            _ => None,
        }
    }

    fn values(&self) -> [f64; 4] {
        [self.distance, self.wavelength, self.power, self.attenuation]
    }
}

// ============================================================================
// Parameter Set
// ============================================================================

/// The inputs of one network type.
///
/// Serialized without a tag: each variant has a distinct set of field names,
/// and the owning record carries the network type alongside.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ParameterSet {
    /// GSM inputs.
    Gsm(GsmParams),
    /// UMTS inputs.
    Umts(UmtsParams),
    /// LTE inputs.
    Lte(LteParams),
    /// Microwave link inputs.
    Microwave(MicrowaveParams),
    /// Optical link inputs.
    Optical(OpticalParams),
}

impl ParameterSet {
    /// Startup values for a network type.
    pub fn defaults(network: NetworkType) -> Self {
        match network {
            NetworkType::Gsm => ParameterSet::Gsm(GsmParams::default()),
            NetworkType::Umts => ParameterSet::Umts(UmtsParams::default()),
            NetworkType::Lte => ParameterSet::Lte(LteParams::default()),
            NetworkType::Microwave => ParameterSet::Microwave(MicrowaveParams::default()),
            NetworkType::Optical => ParameterSet::Optical(OpticalParams::default()),
        }
    }

    /// Network type these parameters belong to.
    pub fn network(&self) -> NetworkType {
        match self {
            ParameterSet::Gsm(_) => NetworkType::Gsm,
            ParameterSet::Umts(_) => NetworkType::Umts,
            ParameterSet::Lte(_) => NetworkType::Lte,
            ParameterSet::Microwave(_) => NetworkType::Microwave,
            ParameterSet::Optical(_) => NetworkType::Optical,
        }
    }

    /// Parameter metadata, in form order.
    pub fn schema(&self) -> &'static [ParameterDef] {
        schema(self.network())
    }

    /// Every parameter with its current value, in form order.
    pub fn entries(&self) -> Vec<(&'static ParameterDef, f64)> {
        let values: Vec<f64> = match self {
            ParameterSet::Gsm(p) => p.values().to_vec(),
            ParameterSet::Umts(p) => p.values().to_vec(),
            ParameterSet::Lte(p) => p.values().to_vec(),
            ParameterSet::Microwave(p) => p.values().to_vec(),
            ParameterSet::Optical(p) => p.values().to_vec(),
        };
        self.schema().iter().zip(values).collect()
    }

    /// Current value of a parameter.
    pub fn get(&self, name: &str) -> ParamResult<f64> {
        let def = self.lookup(name)?;
        self.entries()
            .into_iter()
            .find(|(entry, _)| entry.name == def.name)
            .map(|(_, value)| value)
            .ok_or_else(|| self.unknown(name))
    }

    /// Store a value. Returns the parameter's metadata so callers can check
    /// the suggested bounds.
    pub fn set(&mut self, name: &str, value: f64) -> ParamResult<&'static ParameterDef> {
        let def = self.lookup(name)?;
        let missing = ParamError::UnknownParameter {
            network: self.network().name().to_string(),
            name: name.to_string(),
        };
        let slot = match self {
            ParameterSet::Gsm(p) => p.slot(def.name),
            ParameterSet::Umts(p) => p.slot(def.name),
            ParameterSet::Lte(p) => p.slot(def.name),
            ParameterSet::Microwave(p) => p.slot(def.name),
            ParameterSet::Optical(p) => p.slot(def.name),
        };
        match slot {
            Some(slot) => {
                *slot = value;
                Ok(def)
            }
            None => Err(missing),
        }
    }

    /// Store user-entered text, reading anything non-numeric as zero.
    pub fn set_raw(&mut self, name: &str, raw: &str) -> ParamResult<&'static ParameterDef> {
        self.set(name, parse_or_zero(raw))
    }

    /// Apply a `name=value` assignment.
    pub fn apply_assignment(&mut self, assignment: &str) -> ParamResult<&'static ParameterDef> {
        let (name, raw) = split_assignment(assignment)?;
        self.set_raw(name, raw)
    }

    fn lookup(&self, name: &str) -> ParamResult<&'static ParameterDef> {
        find_parameter(self.network(), name).ok_or_else(|| self.unknown(name))
    }

    fn unknown(&self, name: &str) -> ParamError {
        ParamError::UnknownParameter {
            network: self.network().name().to_string(),
            name: name.to_string(),
        }
    }
}

impl From<GsmParams> for ParameterSet {
    fn from(p: GsmParams) -> Self {
        ParameterSet::Gsm(p)
    }
}

impl From<UmtsParams> for ParameterSet {
    fn from(p: UmtsParams) -> Self {
        ParameterSet::Umts(p)
    }
}

impl From<LteParams> for ParameterSet {
    fn from(p: LteParams) -> Self {
        ParameterSet::Lte(p)
    }
}

impl From<MicrowaveParams> for ParameterSet {
    fn from(p: MicrowaveParams) -> Self {
        ParameterSet::Microwave(p)
    }
}

impl From<OpticalParams> for ParameterSet {
    fn from(p: OpticalParams) -> Self {
        ParameterSet::Optical(p)
    }
}

/// Split `name=value` into its trimmed halves.
pub fn split_assignment(assignment: &str) -> ParamResult<(&str, &str)> {
    match assignment.split_once('=') {
        Some((name, raw)) if !name.trim().is_empty() => Ok((name.trim(), raw.trim())),
        _ => Err(ParamError::InvalidAssignment(assignment.to_string())),
    }
}
