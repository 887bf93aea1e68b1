//! Number formatting for result cells.
//!
//! Every formatter renders a missing or non-finite value as [`MISSING`].

use screener_data::{Rating, Recommendation};
use screener_engine::RsiZone;

/// Placeholder for a missing value.
pub const MISSING: &str = "-";

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Market capitalization with a T/B/M suffix.
///
/// ```
/// use screener_output::format_market_cap;
///
/// assert_eq!(format_market_cap(Some(2.5e12)), "2.50T");
/// assert_eq!(format_market_cap(Some(812.34e9)), "812.3B");
/// assert_eq!(format_market_cap(Some(450e6)), "450M");
/// ```
pub fn format_market_cap(value: Option<f64>) -> String {
    match finite(value) {
        Some(v) if v >= 1e12 => format!("{:.2}T", v / 1e12),
        Some(v) if v >= 1e9 => format!("{:.1}B", v / 1e9),
        Some(v) => format!("{:.0}M", v / 1e6),
        None => MISSING.to_string(),
    }
}

/// A plain number with fixed precision.
pub fn format_decimal(value: Option<f64>, precision: usize) -> String {
    finite(value).map_or_else(|| MISSING.to_string(), |v| format!("{v:.precision$}"))
}

/// A percentage with fixed precision.
pub fn format_percent(value: Option<f64>, precision: usize) -> String {
    finite(value).map_or_else(|| MISSING.to_string(), |v| format!("{v:.precision$}%"))
}

/// A growth rate; positive values carry an explicit `+`.
pub fn format_growth(value: Option<f64>) -> String {
    match finite(value) {
        Some(v) if v > 0.0 => format!("+{v:.1}%"),
        Some(v) => format!("{v:.1}%"),
        None => MISSING.to_string(),
    }
}

/// A price in dollars.
pub fn format_price(value: Option<f64>) -> String {
    finite(value).map_or_else(|| MISSING.to_string(), |v| format!("${v:.2}"))
}

/// RSI with its zone label, e.g. `28.4 Oversold`.
pub fn format_rsi(value: Option<f64>) -> String {
    finite(value).map_or_else(
        || MISSING.to_string(),
        |v| format!("{v:.1} {}", RsiZone::from_rsi(v)),
    )
}

/// Recommendation label with the consensus mean, e.g. `Buy (2.1)`.
pub fn format_recommendation(recommendation: Option<&Recommendation>, mean: Option<f64>) -> String {
    match (recommendation, finite(mean)) {
        (Some(rec), Some(mean)) => format!("{} ({mean:.1})", rec.label()),
        (Some(rec), None) => rec.label(),
        (None, _) => MISSING.to_string(),
    }
}

/// Rating bucket derived from the consensus mean, e.g. `Buy(2.1)`.
pub fn format_rating_mean(mean: Option<f64>) -> String {
    finite(mean).map_or_else(
        || MISSING.to_string(),
        |mean| format!("{}({mean:.1})", Rating::from_mean(mean)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3.12e12), "3.12T")]
    #[case(Some(1e12), "1.00T")]
    #[case(Some(999.96e9), "1000.0B")]
    #[case(Some(1e9), "1.0B")]
    #[case(Some(450.4e6), "450M")]
    #[case(Some(f64::NAN), "-")]
    #[case(None, "-")]
    fn test_format_market_cap(#[case] value: Option<f64>, #[case] expected: &str) {
        assert_eq!(format_market_cap(value), expected);
    }

    #[rstest]
    #[case(Some(12.34), "+12.3%")]
    #[case(Some(0.0), "0.0%")]
    #[case(Some(-4.06), "-4.1%")]
    #[case(None, "-")]
    fn test_format_growth(#[case] value: Option<f64>, #[case] expected: &str) {
        assert_eq!(format_growth(value), expected);
    }

    #[test]
    fn test_format_numbers() {
        assert_eq!(format_decimal(Some(14.256), 1), "14.3");
        assert_eq!(format_decimal(None, 2), "-");
        assert_eq!(format_percent(Some(87.26), 1), "87.3%");
        assert_eq!(format_price(Some(181.5)), "$181.50");
        assert_eq!(format_price(Some(f64::INFINITY)), "-");
    }

    #[rstest]
    #[case(Some(28.44), "28.4 Oversold")]
    #[case(Some(35.0), "35.0 Weak")]
    #[case(Some(40.0), "40.0 Neutral")]
    #[case(None, "-")]
    fn test_format_rsi(#[case] value: Option<f64>, #[case] expected: &str) {
        assert_eq!(format_rsi(value), expected);
    }

    #[test]
    fn test_format_recommendation() {
        let buy = Recommendation::from(Rating::Buy);
        let other = Recommendation::from("outperform".to_string());
        assert_eq!(format_recommendation(Some(&buy), Some(2.14)), "Buy (2.1)");
        assert_eq!(format_recommendation(Some(&buy), None), "Buy");
        assert_eq!(format_recommendation(Some(&other), None), "outperform");
        assert_eq!(format_recommendation(None, Some(1.2)), "-");
    }

    #[rstest]
    #[case(Some(1.5), "Strong Buy(1.5)")]
    #[case(Some(2.3), "Buy(2.3)")]
    #[case(Some(4.8), "Strong Sell(4.8)")]
    #[case(None, "-")]
    fn test_format_rating_mean(#[case] mean: Option<f64>, #[case] expected: &str) {
        assert_eq!(format_rating_mean(mean), expected);
    }
}
