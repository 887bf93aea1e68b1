//! Per-symbol screening record.

use crate::rating::Recommendation;
use serde::{Deserialize, Deserializer, Serialize};

/// One tradable equity in a dataset snapshot.
///
/// Every field except `symbol` is optional: the producer writes `null` when a
/// value could not be computed, and the engines treat `None` as "unknown".
/// Percent fields are already scaled to percent (e.g. `12.5` means 12.5%).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Ticker symbol, unique within a snapshot.
    pub symbol: String,
    /// Company display name.
    pub name: Option<String>,
    /// Sector label.
    pub sector: Option<String>,
    /// Sub-industry label.
    pub sub_industry: Option<String>,

    /// Last traded price.
    pub current_price: Option<f64>,
    /// Market capitalization in currency units.
    pub market_cap: Option<f64>,

    /// Forward P/E ratio.
    pub forward_pe: Option<f64>,
    /// Trailing P/E ratio.
    pub trailing_pe: Option<f64>,

    /// Year-over-year earnings growth (%).
    pub earnings_growth: Option<f64>,
    /// Year-over-year revenue growth (%).
    pub revenue_growth: Option<f64>,

    /// 14-period RSI on a 0-100 scale.
    pub rsi: Option<f64>,
    /// 200-day simple moving average.
    pub sma_200: Option<f64>,
    /// Current price as a percent of the 200-day moving average.
    pub pct_from_200dma: Option<f64>,
    /// 52-week high price.
    pub fifty_two_week_high: Option<f64>,
    /// Current price as a percent of the 52-week high.
    pub pct_from_high: Option<f64>,

    /// Categorical analyst recommendation.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub recommendation: Option<Recommendation>,
    /// Analyst recommendation mean, 1.0 (strong buy) to 5.0 (strong sell).
    pub recommendation_mean: Option<f64>,

    /// Dividend yield (%).
    pub dividend_yield: Option<f64>,
    /// Beta against the market.
    pub beta: Option<f64>,

    /// Whether the producer's own default screen admitted this record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passed_filter: Option<bool>,
}

impl Record {
    /// Create a record with only a symbol set.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Display name, falling back to the symbol.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.symbol)
    }

    /// Market capitalization in billions.
    pub fn market_cap_billions(&self) -> Option<f64> {
        self.market_cap.map(|cap| cap / 1e9)
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<Recommendation>, D::Error>
where
    D: Deserializer<'de>,
{
    let key = Option::<String>::deserialize(deserializer)?;
    Ok(key.as_deref().and_then(Recommendation::parse))
}
