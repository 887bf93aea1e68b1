//! Criterion catalogue.
//!
//! Each screening condition is a [`Criterion`] with a stable name, a short
//! description, and a single predicate. Every predicate fails closed: a
//! record lacking any input the condition needs does not qualify.

use crate::criteria::{ABOVE_200DMA_THRESHOLD, BUY_ONLY_MAX_MEAN, Criteria};
use screener_data::{Record, SectorAverages};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One screening condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// RSI within the inclusive `[rsi_min, rsi_max]` range.
    RsiRange,
    /// Market cap above the floor (in billions).
    MarketCap,
    /// Percent of 52-week high above the floor.
    PctFromHigh,
    /// EPS growth above the floor.
    EpsGrowth,
    /// Revenue growth above the floor.
    RevenueGrowth,
    /// Price above 80% of the 200-day moving average.
    #[serde(rename = "above_200dma")]
    Above200dma,
    /// Recommendation mean at or below 2.5.
    BuyOnly,
    /// Forward P/E below the sector average.
    PerBelowSector,
    /// Sector equals the selection.
    Sector,
}

impl Criterion {
    /// All criteria in evaluation order.
    pub const fn all() -> [Self; 9] {
        [
            Self::RsiRange,
            Self::MarketCap,
            Self::PctFromHigh,
            Self::EpsGrowth,
            Self::RevenueGrowth,
            Self::Above200dma,
            Self::BuyOnly,
            Self::PerBelowSector,
            Self::Sector,
        ]
    }

    /// Stable identifier.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RsiRange => "rsi_range",
            Self::MarketCap => "market_cap",
            Self::PctFromHigh => "pct_from_high",
            Self::EpsGrowth => "eps_growth",
            Self::RevenueGrowth => "revenue_growth",
            Self::Above200dma => "above_200dma",
            Self::BuyOnly => "buy_only",
            Self::PerBelowSector => "per_below_sector",
            Self::Sector => "sector",
        }
    }

    /// What the criterion checks.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::RsiRange => "RSI(14) within the selected range (inclusive)",
            Self::MarketCap => "Market capitalization above the floor, in billions",
            Self::PctFromHigh => "Price as a percent of the 52-week high above the floor",
            Self::EpsGrowth => "Year-over-year earnings growth above the floor",
            Self::RevenueGrowth => "Year-over-year revenue growth above the floor",
            Self::Above200dma => "Price above 80% of the 200-day moving average",
            Self::BuyOnly => "Analyst consensus of Buy or Strong Buy (mean <= 2.5)",
            Self::PerBelowSector => "Forward P/E below the sector average forward P/E",
            Self::Sector => "Sector equals the selected sector",
        }
    }

    /// Look a criterion up by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.name() == name)
    }

    /// Whether the criterion is a switch that can be turned off.
    pub const fn is_toggle(&self) -> bool {
        matches!(self, Self::Above200dma | Self::BuyOnly | Self::PerBelowSector)
    }

    /// Whether the criterion takes part in the given configuration.
    pub const fn is_active(&self, criteria: &Criteria) -> bool {
        match self {
            Self::Above200dma => criteria.above_200dma,
            Self::BuyOnly => criteria.buy_only,
            Self::PerBelowSector => criteria.per_below_sector,
            Self::Sector => !criteria.sector.is_all(),
            Self::RsiRange
            | Self::MarketCap
            | Self::PctFromHigh
            | Self::EpsGrowth
            | Self::RevenueGrowth => true,
        }
    }

    /// Whether a record satisfies this criterion, ignoring whether the
    /// criterion is active.
    ///
    /// Range bounds are inclusive; every other threshold is strict.
    pub fn admits(&self, record: &Record, criteria: &Criteria, averages: &SectorAverages) -> bool {
        match self {
            Self::RsiRange => record
                .rsi
                .is_some_and(|rsi| criteria.rsi_min <= rsi && rsi <= criteria.rsi_max),
            Self::MarketCap => record
                .market_cap
                .is_some_and(|cap| cap > criteria.market_cap_floor_value()),
            Self::PctFromHigh => record
                .pct_from_high
                .is_some_and(|pct| pct > criteria.pct_from_high_floor),
            Self::EpsGrowth => record
                .earnings_growth
                .is_some_and(|growth| growth > criteria.eps_growth_floor),
            Self::RevenueGrowth => record
                .revenue_growth
                .is_some_and(|growth| growth > criteria.revenue_growth_floor),
            Self::Above200dma => record
                .pct_from_200dma
                .is_some_and(|pct| pct > ABOVE_200DMA_THRESHOLD),
            Self::BuyOnly => record
                .recommendation_mean
                .is_some_and(|mean| mean <= BUY_ONLY_MAX_MEAN),
            Self::PerBelowSector => match (record.forward_pe, averages.for_record(record)) {
                (Some(pe), Some(average)) if average > 0.0 => pe < average,
                _ => false,
            },
            Self::Sector => criteria.sector.matches(record.sector.as_deref()),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
