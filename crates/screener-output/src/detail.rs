//! Single-record detail card.

use crate::format::{
    MISSING, format_decimal, format_growth, format_market_cap, format_percent, format_price,
    format_rating_mean, format_rsi,
};
use screener_data::{Record, SectorAverages};

/// Every field of one record, with its sector's average forward P/E.
#[derive(Debug, Clone, Copy)]
pub struct RecordDetail<'a> {
    record: &'a Record,
    sector_average: Option<f64>,
}

impl<'a> RecordDetail<'a> {
    /// Detail for a record, looking its sector up in `averages`.
    pub fn new(record: &'a Record, averages: &SectorAverages) -> Self {
        Self {
            record,
            sector_average: averages.for_record(record),
        }
    }

    /// Label and value pairs in display order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let r = self.record;
        vec![
            ("Sector", r.sector.clone().unwrap_or_else(|| MISSING.to_string())),
            (
                "Sub-industry",
                r.sub_industry.clone().unwrap_or_else(|| MISSING.to_string()),
            ),
            ("Price", format_price(r.current_price)),
            ("Market Cap", format_market_cap(r.market_cap)),
            ("RSI(14)", format_rsi(r.rsi)),
            ("52W High", format_price(r.fifty_two_week_high)),
            ("52W %", format_percent(r.pct_from_high, 1)),
            ("200D SMA", format_price(r.sma_200)),
            ("% of 200DMA", format_percent(r.pct_from_200dma, 1)),
            ("Forward PER", format_decimal(r.forward_pe, 2)),
            ("Trailing PER", format_decimal(r.trailing_pe, 2)),
            ("Sector Avg PER", format_decimal(self.sector_average, 2)),
            ("EPS Growth", format_growth(r.earnings_growth)),
            ("Revenue Growth", format_growth(r.revenue_growth)),
            ("Rating", format_rating_mean(r.recommendation_mean)),
            ("Dividend Yield", format_percent(r.dividend_yield, 2)),
            ("Beta", format_decimal(r.beta, 2)),
        ]
    }

    /// Format as a two-column card for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} - {}\n",
            self.record.symbol,
            self.record.display_name()
        ));
        output.push_str(&"=".repeat(48));
        output.push('\n');
        for (label, value) in self.fields() {
            output.push_str(&format!("  {:<18} {:>27}\n", label, value));
        }

        output
    }
}
