//! GICS (Global Industry Classification Standard) sector catalogue.
//!
//! Snapshot records carry free-form sector labels, which in practice are the
//! GICS Level 1 names. The catalogue lets callers resolve a user-supplied
//! sector (a two-digit code or a name in any case) to the canonical label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// GICS Level 1 sectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GicsSector {
    /// Energy
    Energy,
    /// Materials
    Materials,
    /// Industrials
    Industrials,
    /// Consumer Discretionary
    ConsumerDiscretionary,
    /// Consumer Staples
    ConsumerStaples,
    /// Health Care
    HealthCare,
    /// Financials
    Financials,
    /// Information Technology
    InformationTechnology,
    /// Communication Services
    CommunicationServices,
    /// Utilities
    Utilities,
    /// Real Estate
    RealEstate,
}

impl GicsSector {
    /// All sectors in GICS code order.
    pub const fn all() -> [Self; 11] {
        [
            Self::Energy,
            Self::Materials,
            Self::Industrials,
            Self::ConsumerDiscretionary,
            Self::ConsumerStaples,
            Self::HealthCare,
            Self::Financials,
            Self::InformationTechnology,
            Self::CommunicationServices,
            Self::Utilities,
            Self::RealEstate,
        ]
    }

    /// Two-digit sector code.
    pub const fn code(&self) -> u8 {
        match self {
            Self::Energy => 10,
            Self::Materials => 15,
            Self::Industrials => 20,
            Self::ConsumerDiscretionary => 25,
            Self::ConsumerStaples => 30,
            Self::HealthCare => 35,
            Self::Financials => 40,
            Self::InformationTechnology => 45,
            Self::CommunicationServices => 50,
            Self::Utilities => 55,
            Self::RealEstate => 60,
        }
    }

    /// Canonical sector label, as it appears in snapshot records.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Materials => "Materials",
            Self::Industrials => "Industrials",
            Self::ConsumerDiscretionary => "Consumer Discretionary",
            Self::ConsumerStaples => "Consumer Staples",
            Self::HealthCare => "Health Care",
            Self::Financials => "Financials",
            Self::InformationTechnology => "Information Technology",
            Self::CommunicationServices => "Communication Services",
            Self::Utilities => "Utilities",
            Self::RealEstate => "Real Estate",
        }
    }

    /// Look a sector up by code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    /// Look a sector up by name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all()
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// Look a sector up by common shorthand such as `tech` or `staples`.
    pub fn from_alias(alias: &str) -> Option<Self> {
        let normalized = alias.trim().to_lowercase().replace(' ', "");
        let sector = match normalized.as_str() {
            "it" | "tech" => Self::InformationTechnology,
            "health" => Self::HealthCare,
            "finance" => Self::Financials,
            "discretionary" => Self::ConsumerDiscretionary,
            "communication" | "comms" => Self::CommunicationServices,
            "industrial" => Self::Industrials,
            "staples" => Self::ConsumerStaples,
            "utility" => Self::Utilities,
            "estate" => Self::RealEstate,
            _ => return None,
        };
        Some(sector)
    }

    /// Resolve user input to a sector label.
    ///
    /// Codes, shorthand aliases and case-insensitive names map to the canonical label; anything
    /// else is returned trimmed but otherwise unchanged, so non-GICS labels in
    /// a snapshot can still be selected.
    pub fn resolve_label(input: &str) -> String {
        input
            .parse::<Self>()
            .map_or_else(|_| input.trim().to_string(), |s| s.name().to_string())
    }
}

/// Error returned when a string names no GICS sector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown GICS sector: {0}")]
pub struct UnknownSector(pub String);

impl FromStr for GicsSector {
    type Err = UnknownSector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_code)
            .or_else(|| Self::from_name(s))
            .or_else(|| Self::from_alias(s))
            .ok_or_else(|| UnknownSector(s.to_string()))
    }
}

impl fmt::Display for GicsSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
