//! Plain-text and Markdown tables.

use crate::format::{
    format_decimal, format_growth, format_market_cap, format_percent, format_recommendation,
    format_rsi,
};
use screener_data::{Record, SectorAverages};

const RULE_WIDTH: usize = 118;
const NAME_WIDTH: usize = 28;

/// Ranked screening results ready for display.
#[derive(Debug, Clone)]
pub struct ResultTable<'a> {
    title: String,
    records: &'a [&'a Record],
    total: Option<usize>,
}

impl<'a> ResultTable<'a> {
    /// Table over already filtered and sorted records.
    pub fn new(title: impl Into<String>, records: &'a [&'a Record]) -> Self {
        Self {
            title: title.into(),
            records,
            total: None,
        }
    }

    /// Report the result count against the size of the full universe.
    #[must_use]
    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }

    /// Number of rows.
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn count_line(&self) -> String {
        match self.total {
            Some(total) => format!("{} of {} stocks pass", self.records.len(), total),
            None => format!("{} stocks", self.records.len()),
        }
    }

    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", self.title));
        output.push_str(&self.count_line());
        output.push('\n');
        output.push_str(&"=".repeat(RULE_WIDTH));
        output.push('\n');

        if self.records.is_empty() {
            output.push_str("No stocks match the current criteria.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<8} {:<28} {:>14} {:>9} {:>7} {:>7} {:>8} {:>8}  {:<18}\n",
            "Symbol", "Name", "RSI", "Mkt Cap", "52W %", "Fwd PE", "EPS", "Rev", "Rating"
        ));
        output.push_str(&"-".repeat(RULE_WIDTH));
        output.push('\n');

        for record in self.records {
            output.push_str(&format!(
                "{:<8} {:<28} {:>14} {:>9} {:>7} {:>7} {:>8} {:>8}  {:<18}\n",
                record.symbol,
                truncate(record.display_name(), NAME_WIDTH),
                format_rsi(record.rsi),
                format_market_cap(record.market_cap),
                format_percent(record.pct_from_high, 1),
                format_decimal(record.forward_pe, 1),
                format_growth(record.earnings_growth),
                format_growth(record.revenue_growth),
                format_recommendation(record.recommendation.as_ref(), record.recommendation_mean),
            ));
        }

        output
    }

    /// Format as a Markdown table.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", self.title));
        output.push_str(&format!("{}\n\n", self.count_line()));

        if self.records.is_empty() {
            output.push_str("_No stocks match the current criteria._\n");
            return output;
        }

        output.push_str(
            "| Symbol | Name | RSI | Market Cap | 52W % | Fwd PE | EPS Growth | Rev Growth | Rating |\n",
        );
        output.push_str(
            "|--------|------|----:|-----------:|------:|-------:|-----------:|-----------:|--------|\n",
        );

        for record in self.records {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} |\n",
                record.symbol,
                escape_cell(record.display_name()),
                format_rsi(record.rsi),
                format_market_cap(record.market_cap),
                format_percent(record.pct_from_high, 1),
                format_decimal(record.forward_pe, 1),
                format_growth(record.earnings_growth),
                format_growth(record.revenue_growth),
                escape_cell(&format_recommendation(
                    record.recommendation.as_ref(),
                    record.recommendation_mean
                )),
            ));
        }

        output
    }
}

/// Sector average forward P/E, cheapest sector first.
#[derive(Debug, Clone, Copy)]
pub struct SectorTable<'a> {
    averages: &'a SectorAverages,
}

impl<'a> SectorTable<'a> {
    /// Table over a snapshot's sector averages.
    pub const fn new(averages: &'a SectorAverages) -> Self {
        Self { averages }
    }

    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str("\nSector Average Forward P/E\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<28} {:>11}\n", "Sector", "Avg Fwd PE"));
        output.push_str(&"-".repeat(40));
        output.push('\n');

        for (sector, average) in self.averages.ranked() {
            output.push_str(&format!("{:<28} {:>11.1}\n", sector, average));
        }

        output
    }

    /// Format as a Markdown table.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str("# Sector Average Forward P/E\n\n");
        output.push_str("| Sector | Avg Fwd PE |\n");
        output.push_str("|--------|-----------:|\n");

        for (sector, average) in self.averages.ranked() {
            output.push_str(&format!("| {} | {:.1} |\n", escape_cell(sector), average));
        }

        output
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width - 1).collect();
    short.push('~');
    short
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
