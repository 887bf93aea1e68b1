//! Sort engine.
//!
//! Orders records by a single key. The sort is stable, records missing the
//! key always go last regardless of direction, text keys compare with a
//! case-folding collation, and numeric keys compare numerically.

use derive_more::Display;
use screener_data::Record;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sort direction.
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    #[display("ascending")]
    Ascending,
    /// Largest first.
    #[display("descending")]
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Direction from an "ascending?" flag.
    pub const fn from_ascending(ascending: bool) -> Self {
        if ascending { Self::Ascending } else { Self::Descending }
    }

    /// Apply this direction to a natural ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// A comparable record attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Ticker symbol.
    Symbol,
    /// Company name.
    Name,
    /// Sector label.
    Sector,
    /// Sub-industry label.
    SubIndustry,
    /// Recommendation key.
    Recommendation,
    /// RSI.
    Rsi,
    /// Market capitalization.
    MarketCap,
    /// Percent of 52-week high.
    PctFromHigh,
    /// Percent of 200-day moving average.
    #[serde(rename = "pct_from_200dma")]
    PctFrom200dma,
    /// Forward P/E.
    ForwardPe,
    /// Trailing P/E.
    TrailingPe,
    /// Earnings growth.
    EarningsGrowth,
    /// Revenue growth.
    RevenueGrowth,
    /// Recommendation mean.
    RecommendationMean,
    /// Beta.
    Beta,
    /// Dividend yield.
    DividendYield,
    /// Current price.
    CurrentPrice,
}

/// A key's value for one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    /// Text attribute.
    Text(&'a str),
    /// Numeric attribute.
    Number(f64),
}

impl SortKey {
    /// Every key.
    pub const fn all() -> [Self; 17] {
        [
            Self::Symbol,
            Self::Name,
            Self::Sector,
            Self::SubIndustry,
            Self::Recommendation,
            Self::Rsi,
            Self::MarketCap,
            Self::PctFromHigh,
            Self::PctFrom200dma,
            Self::ForwardPe,
            Self::TrailingPe,
            Self::EarningsGrowth,
            Self::RevenueGrowth,
            Self::RecommendationMean,
            Self::Beta,
            Self::DividendYield,
            Self::CurrentPrice,
        ]
    }

    /// Record field name the key reads.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::Name => "name",
            Self::Sector => "sector",
            Self::SubIndustry => "sub_industry",
            Self::Recommendation => "recommendation",
            Self::Rsi => "rsi",
            Self::MarketCap => "market_cap",
            Self::PctFromHigh => "pct_from_high",
            Self::PctFrom200dma => "pct_from_200dma",
            Self::ForwardPe => "forward_pe",
            Self::TrailingPe => "trailing_pe",
            Self::EarningsGrowth => "earnings_growth",
            Self::RevenueGrowth => "revenue_growth",
            Self::RecommendationMean => "recommendation_mean",
            Self::Beta => "beta",
            Self::DividendYield => "dividend_yield",
            Self::CurrentPrice => "current_price",
        }
    }

    /// Whether the key compares as text.
    pub const fn is_text(&self) -> bool {
        matches!(
            self,
            Self::Symbol | Self::Name | Self::Sector | Self::SubIndustry | Self::Recommendation
        )
    }

    /// The record's value for this key, or `None` when it is unknown.
    ///
    /// NaN counts as unknown.
    pub fn value<'a>(&self, record: &'a Record) -> Option<SortValue<'a>> {
        let number = match self {
            Self::Symbol => return Some(SortValue::Text(&record.symbol)),
            Self::Name => return record.name.as_deref().map(SortValue::Text),
            Self::Sector => return record.sector.as_deref().map(SortValue::Text),
            Self::SubIndustry => return record.sub_industry.as_deref().map(SortValue::Text),
            Self::Recommendation => {
                return record
                    .recommendation
                    .as_ref()
                    .map(|r| SortValue::Text(r.key()));
            }
            Self::Rsi => record.rsi,
            Self::MarketCap => record.market_cap,
            Self::PctFromHigh => record.pct_from_high,
            Self::PctFrom200dma => record.pct_from_200dma,
            Self::ForwardPe => record.forward_pe,
            Self::TrailingPe => record.trailing_pe,
            Self::EarningsGrowth => record.earnings_growth,
            Self::RevenueGrowth => record.revenue_growth,
            Self::RecommendationMean => record.recommendation_mean,
            Self::Beta => record.beta,
            Self::DividendYield => record.dividend_yield,
            Self::CurrentPrice => record.current_price,
        };
        number.filter(|v| !v.is_nan()).map(SortValue::Number)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for an unknown sort key name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown sort key: {0}")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseSortKeyError(s.to_string()))
    }
}

/// Current sort key and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Key being sorted on.
    pub key: SortKey,
    /// Direction.
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self::new(SortKey::Rsi, SortDirection::Ascending)
    }
}

impl SortState {
    /// Create a sort state.
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// State after the user asks to sort by `requested`.
    ///
    /// Requesting the current key flips the direction; any other key starts
    /// ascending.
    pub fn request(self, requested: SortKey) -> Self {
        let direction = if requested == self.key {
            self.direction.toggled()
        } else {
            SortDirection::Ascending
        };
        Self::new(requested, direction)
    }

    /// Sort records with this state.
    pub fn apply<T>(&self, records: &[T]) -> Vec<T>
    where
        T: Borrow<Record> + Clone,
    {
        sort(records, self.key, self.direction)
    }
}

/// Compare two strings the way a reader expects a list of names to be
/// ordered: case-insensitively first, then lowercase before uppercase on
/// case-only differences.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

fn compare_values(a: SortValue<'_>, b: SortValue<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Number(x), SortValue::Number(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (SortValue::Text(x), SortValue::Text(y)) => collate(x, y),
        // a key always yields one variant
        (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
        (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
    }
}

/// Compare two records by `key` in `direction`, unknown values last.
pub fn compare(a: &Record, b: &Record, key: SortKey, direction: SortDirection) -> Ordering {
    match (key.value(a), key.value(b)) {
        (Some(x), Some(y)) => direction.apply(compare_values(x, y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// A new sequence of `records` ordered by `key` in `direction`.
///
/// Stable: records with equal keys keep their input order. The input slice
/// is not modified.
pub fn sort<T>(records: &[T], key: SortKey, direction: SortDirection) -> Vec<T>
where
    T: Borrow<Record> + Clone,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare(a.borrow(), b.borrow(), key, direction));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use screener_data::{Rating, Recommendation};

    fn with_rsi(symbol: &str, rsi: Option<f64>) -> Record {
        Record {
            rsi,
            ..Record::new(symbol)
        }
    }

    fn symbols<T: Borrow<Record>>(records: &[T]) -> Vec<&str> {
        records
            .iter()
            .map(|r| {
                let record: &Record = r.borrow();
                record.symbol.as_str()
            })
            .collect()
    }

    #[test]
    fn test_sector_text_ascending() {
        let records = vec![
            Record {
                sector: Some("Zeta".to_string()),
                ..Record::new("X")
            },
            Record {
                sector: Some("Alpha".to_string()),
                ..Record::new("Y")
            },
        ];
        let sorted = sort(&records, SortKey::Sector, SortDirection::Ascending);
        assert_eq!(symbols(&sorted), vec!["Y", "X"]);
    }

    #[test]
    fn test_missing_values_last_both_directions() {
        let records = vec![
            with_rsi("NONE1", None),
            with_rsi("LOW", Some(12.0)),
            with_rsi("NONE2", None),
            with_rsi("HIGH", Some(64.0)),
        ];

        let asc = sort(&records, SortKey::Rsi, SortDirection::Ascending);
        assert_eq!(symbols(&asc), vec!["LOW", "HIGH", "NONE1", "NONE2"]);

        let desc = sort(&records, SortKey::Rsi, SortDirection::Descending);
        assert_eq!(symbols(&desc), vec!["HIGH", "LOW", "NONE1", "NONE2"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![
            with_rsi("B", Some(30.0)),
            with_rsi("A", Some(30.0)),
            with_rsi("C", Some(10.0)),
        ];
        let asc = sort(&records, SortKey::Rsi, SortDirection::Ascending);
        assert_eq!(symbols(&asc), vec!["C", "B", "A"]);
        let desc = sort(&records, SortKey::Rsi, SortDirection::Descending);
        assert_eq!(symbols(&desc), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_input_untouched_and_borrowed_sort() {
        let records = vec![with_rsi("B", Some(2.0)), with_rsi("A", Some(1.0))];
        let refs: Vec<&Record> = records.iter().collect();
        let sorted = sort(&refs, SortKey::Rsi, SortDirection::Ascending);
        assert_eq!(symbols(&sorted), vec!["A", "B"]);
        assert_eq!(symbols(&records), vec!["B", "A"]);
    }

    #[test]
    fn test_empty() {
        let records: Vec<Record> = Vec::new();
        assert!(sort(&records, SortKey::Name, SortDirection::Descending).is_empty());
    }

    #[test]
    fn test_nan_sorts_as_missing() {
        let records = vec![with_rsi("NAN", Some(f64::NAN)), with_rsi("ONE", Some(1.0))];
        let desc = sort(&records, SortKey::Rsi, SortDirection::Descending);
        assert_eq!(symbols(&desc), vec!["ONE", "NAN"]);
    }

    #[test]
    fn test_collation_folds_case() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Zeta", "alpha"), Ordering::Greater);
        assert_eq!(collate("abc", "ABC"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);

        let records = vec![
            Record {
                name: Some("bristol-Myers".to_string()),
                ..Record::new("BMY")
            },
            Record {
                name: Some("Abbott".to_string()),
                ..Record::new("ABT")
            },
            Record {
                name: Some("Caterpillar".to_string()),
                ..Record::new("CAT")
            },
        ];
        let sorted = sort(&records, SortKey::Name, SortDirection::Ascending);
        assert_eq!(symbols(&sorted), vec!["ABT", "BMY", "CAT"]);
    }

    #[test]
    fn test_recommendation_sorts_by_key_text() {
        let records = vec![
            Record {
                recommendation: Some(Recommendation::Rated(Rating::StrongBuy)),
                ..Record::new("SB")
            },
            Record::new("NONE"),
            Record {
                recommendation: Some(Recommendation::Rated(Rating::Buy)),
                ..Record::new("B")
            },
        ];
        let sorted = sort(&records, SortKey::Recommendation, SortDirection::Ascending);
        assert_eq!(symbols(&sorted), vec!["B", "SB", "NONE"]);
    }

    #[test]
    fn test_request_transitions() {
        let state = SortState::default();
        assert_eq!(state, SortState::new(SortKey::Rsi, SortDirection::Ascending));

        let toggled = state.request(SortKey::Rsi);
        assert_eq!(toggled.direction, SortDirection::Descending);
        assert_eq!(toggled.request(SortKey::Rsi).direction, SortDirection::Ascending);

        let switched = toggled.request(SortKey::MarketCap);
        assert_eq!(
            switched,
            SortState::new(SortKey::MarketCap, SortDirection::Ascending)
        );
    }

    #[test]
    fn test_parse_sort_key() {
        for key in SortKey::all() {
            assert_eq!(key.name().parse::<SortKey>(), Ok(key));
        }
        assert_eq!("Market_Cap".parse::<SortKey>(), Ok(SortKey::MarketCap));
        assert!("volume".parse::<SortKey>().is_err());
        assert_eq!(
            serde_json::to_string(&SortKey::PctFrom200dma).unwrap(),
            "\"pct_from_200dma\""
        );
    }

    #[test]
    fn test_text_keys() {
        let text: Vec<SortKey> = SortKey::all().into_iter().filter(SortKey::is_text).collect();
        assert_eq!(text.len(), 5);
        assert!(!SortKey::Rsi.is_text());
    }
}
