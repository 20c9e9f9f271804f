//! The five network types the calculator knows about.

use crate::error::ParamError;
use std::str::FromStr;

/// Network type selected for dimensioning.
///
/// Identifiers are the lowercase ids used for store keys and file names
/// (`gsm`, `umts`, `lte`, `hertzien`, `optique`); the uppercase form is the
/// display and export name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NetworkType {
    /// GSM cellular network (2G).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "GSM", alias = "gsm"))]
    Gsm,
    /// UMTS cellular network (3G).
    #[cfg_attr(feature = "serde", serde(rename = "UMTS", alias = "umts"))]
    Umts,
    /// LTE cellular network (4G).
    #[cfg_attr(feature = "serde", serde(rename = "LTE", alias = "lte"))]
    Lte,
    /// Point-to-point microwave link.
    #[cfg_attr(feature = "serde", serde(rename = "HERTZIEN", alias = "hertzien"))]
    Microwave,
    /// Optical fiber link.
    #[cfg_attr(feature = "serde", serde(rename = "OPTIQUE", alias = "optique"))]
    Optical,
}

impl NetworkType {
    /// All network types, in selector order.
    pub const ALL: [NetworkType; 5] = [
        NetworkType::Gsm,
        NetworkType::Umts,
        NetworkType::Lte,
        NetworkType::Microwave,
        NetworkType::Optical,
    ];

    /// Lowercase identifier used in keys and file names.
    pub fn id(&self) -> &'static str {
        match self {
            NetworkType::Gsm => "gsm",
            NetworkType::Umts => "umts",
            NetworkType::Lte => "lte",
            NetworkType::Microwave => "hertzien",
            NetworkType::Optical => "optique",
        }
    }

    /// Uppercase name used in reports and exported snapshots.
    pub fn name(&self) -> &'static str {
        match self {
            NetworkType::Gsm => "GSM",
            NetworkType::Umts => "UMTS",
            NetworkType::Lte => "LTE",
            NetworkType::Microwave => "HERTZIEN",
            NetworkType::Optical => "OPTIQUE",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            NetworkType::Gsm => "GSM cellular network",
            NetworkType::Umts => "UMTS cellular network",
            NetworkType::Lte => "LTE cellular network",
            NetworkType::Microwave => "Point-to-point microwave link",
            NetworkType::Optical => "Optical fiber link",
        }
    }
}

impl std::fmt::Display for NetworkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for NetworkType {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gsm" => Ok(NetworkType::Gsm),
            "umts" => Ok(NetworkType::Umts),
            "lte" => Ok(NetworkType::Lte),
            "hertzien" | "microwave" => Ok(NetworkType::Microwave),
            "optique" | "optical" => Ok(NetworkType::Optical),
            _ => Err(ParamError::UnknownNetwork(s.to_string())),
        }
    }
}
