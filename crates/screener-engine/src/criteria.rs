//! Screening criteria.
//!
//! A [`Criteria`] value is the caller-owned filter configuration: a fixed set
//! of thresholds and toggles that is re-evaluated against the same snapshot
//! every time the caller changes it.

use crate::criterion::Criterion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel sector selection meaning "every sector".
pub const ALL_SECTORS: &str = "all";

/// Scale applied to the market cap floor (floors are given in billions).
pub const BILLION: f64 = 1e9;

/// Percent-of-200DMA level a record must exceed when the 200DMA toggle is on.
pub const ABOVE_200DMA_THRESHOLD: f64 = 80.0;

/// Highest recommendation mean admitted when the buy-only toggle is on.
pub const BUY_ONLY_MAX_MEAN: f64 = 2.5;

/// Default lower RSI bound.
pub const DEFAULT_RSI_MIN: f64 = 0.0;
/// Default upper RSI bound.
pub const DEFAULT_RSI_MAX: f64 = 40.0;
/// Default market cap floor, in billions.
pub const DEFAULT_MARKET_CAP_FLOOR: f64 = 100.0;
/// Default percent-of-52-week-high floor.
pub const DEFAULT_PCT_FROM_HIGH_FLOOR: f64 = 65.0;
/// Default EPS growth floor (%).
pub const DEFAULT_EPS_GROWTH_FLOOR: f64 = 0.0;
/// Default revenue growth floor (%).
pub const DEFAULT_REVENUE_GROWTH_FLOOR: f64 = 0.0;

/// Which sector a screen is restricted to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectorSelection {
    /// No sector restriction.
    #[default]
    All,

    /// Only records whose sector label equals this one.
    Only(String),
}

impl SectorSelection {
    /// Restrict to one sector.
    pub fn only(sector: impl Into<String>) -> Self {
        Self::Only(sector.into())
    }

    /// Whether this selection is the "all sectors" sentinel.
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether a record with the given sector label is selected.
    ///
    /// A record without a sector is only selected by [`SectorSelection::All`].
    pub fn matches(&self, sector: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => sector == Some(wanted.as_str()),
        }
    }
}

impl From<String> for SectorSelection {
    fn from(value: String) -> Self {
        if value == ALL_SECTORS {
            Self::All
        } else {
            Self::Only(value)
        }
    }
}

impl From<&str> for SectorSelection {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<SectorSelection> for String {
    fn from(selection: SectorSelection) -> Self {
        match selection {
            SectorSelection::All => ALL_SECTORS.to_string(),
            SectorSelection::Only(sector) => sector,
        }
    }
}

impl fmt::Display for SectorSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_SECTORS),
            Self::Only(sector) => f.write_str(sector),
        }
    }
}

/// Filter configuration.
///
/// Deserializing fills any omitted field with its default, so a criteria file
/// only needs to name the settings it changes. The camelCase keys used by the
/// dashboard (`rsiMin`, `buyOnly`, ...) are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Criteria {
    /// Inclusive lower RSI bound.
    #[serde(alias = "rsiMin")]
    pub rsi_min: f64,
    /// Inclusive upper RSI bound.
    #[serde(alias = "rsiMax")]
    pub rsi_max: f64,
    /// Market cap must exceed this many billions.
    #[serde(alias = "marketCap")]
    pub market_cap_floor: f64,
    /// Percent of 52-week high must exceed this.
    #[serde(alias = "pctFromHigh")]
    pub pct_from_high_floor: f64,
    /// EPS growth (%) must exceed this.
    #[serde(alias = "epsGrowth")]
    pub eps_growth_floor: f64,
    /// Revenue growth (%) must exceed this.
    #[serde(alias = "revenueGrowth")]
    pub revenue_growth_floor: f64,
    /// Require price above 80% of the 200-day moving average.
    #[serde(alias = "above200dma")]
    pub above_200dma: bool,
    /// Require a consensus of buy or better.
    #[serde(alias = "buyOnly")]
    pub buy_only: bool,
    /// Require forward P/E below the sector average.
    #[serde(alias = "perBelowSector")]
    pub per_below_sector: bool,
    /// Sector restriction.
    pub sector: SectorSelection,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            rsi_min: DEFAULT_RSI_MIN,
            rsi_max: DEFAULT_RSI_MAX,
            market_cap_floor: DEFAULT_MARKET_CAP_FLOOR,
            pct_from_high_floor: DEFAULT_PCT_FROM_HIGH_FLOOR,
            eps_growth_floor: DEFAULT_EPS_GROWTH_FLOOR,
            revenue_growth_floor: DEFAULT_REVENUE_GROWTH_FLOOR,
            above_200dma: true,
            buy_only: true,
            per_below_sector: true,
            sector: SectorSelection::All,
        }
    }
}

impl Criteria {
    /// The loosest setting the interactive controls allow: the full RSI
    /// range, every floor at its slider minimum, and all toggles off.
    pub const fn loosest() -> Self {
        Self {
            rsi_min: 0.0,
            rsi_max: 100.0,
            market_cap_floor: 50.0,
            pct_from_high_floor: 50.0,
            eps_growth_floor: -20.0,
            revenue_growth_floor: -20.0,
            above_200dma: false,
            buy_only: false,
            per_below_sector: false,
            sector: SectorSelection::All,
        }
    }

    /// Market cap floor in currency units.
    pub fn market_cap_floor_value(&self) -> f64 {
        self.market_cap_floor * BILLION
    }

    /// Criteria currently in effect, in catalogue order.
    ///
    /// The range and floor criteria always apply; toggles apply only when on,
    /// and the sector criterion only when a specific sector is selected.
    pub fn active(&self) -> Vec<Criterion> {
        Criterion::all()
            .into_iter()
            .filter(|c| c.is_active(self))
            .collect()
    }
}
