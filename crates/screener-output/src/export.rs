//! Export of screening results.
//!
//! Results flatten to one [`ResultRow`] per record for CSV. JSON export
//! wraps the rows with the snapshot timestamp and the criteria that
//! produced them.

use chrono::{DateTime, Utc};
use screener_data::{Record, SectorAverages};
use screener_engine::{Criteria, RsiZone};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV output was not valid UTF-8.
    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// One screened record, flattened for tabular export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// 1-based position in the ranked output.
    pub rank: usize,
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    pub name: Option<String>,
    /// Sector label.
    pub sector: Option<String>,
    /// RSI.
    pub rsi: Option<f64>,
    /// RSI zone.
    pub rsi_zone: Option<RsiZone>,
    /// Market capitalization.
    pub market_cap: Option<f64>,
    /// Percent of 52-week high.
    pub pct_from_high: Option<f64>,
    /// Percent of 200-day moving average.
    pub pct_from_200dma: Option<f64>,
    /// Forward P/E.
    pub forward_pe: Option<f64>,
    /// Sector average forward P/E.
    pub sector_avg_pe: Option<f64>,
    /// Earnings growth (%).
    pub earnings_growth: Option<f64>,
    /// Revenue growth (%).
    pub revenue_growth: Option<f64>,
    /// Recommendation key.
    pub recommendation: Option<String>,
    /// Consensus recommendation mean.
    pub recommendation_mean: Option<f64>,
}

impl ResultRow {
    /// Column names, in serialization order.
    pub const COLUMNS: [&'static str; 15] = [
        "rank",
        "symbol",
        "name",
        "sector",
        "rsi",
        "rsi_zone",
        "market_cap",
        "pct_from_high",
        "pct_from_200dma",
        "forward_pe",
        "sector_avg_pe",
        "earnings_growth",
        "revenue_growth",
        "recommendation",
        "recommendation_mean",
    ];

    /// Flatten a record at the given 1-based rank.
    pub fn new(rank: usize, record: &Record, averages: &SectorAverages) -> Self {
        Self {
            rank,
            symbol: record.symbol.clone(),
            name: record.name.clone(),
            sector: record.sector.clone(),
            rsi: record.rsi,
            rsi_zone: record.rsi.filter(|v| v.is_finite()).map(RsiZone::from_rsi),
            market_cap: record.market_cap,
            pct_from_high: record.pct_from_high,
            pct_from_200dma: record.pct_from_200dma,
            forward_pe: record.forward_pe,
            sector_avg_pe: averages.for_record(record),
            earnings_growth: record.earnings_growth,
            revenue_growth: record.revenue_growth,
            recommendation: record.recommendation.as_ref().map(|r| r.key().to_string()),
            recommendation_mean: record.recommendation_mean,
        }
    }
}

/// A complete screen result: when the data was collected, what was asked,
/// and what passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenExport {
    /// Snapshot collection time.
    pub collected_at: DateTime<Utc>,

    /// Criteria the rows passed.
    pub criteria: Criteria,

    /// Number of records screened.
    pub universe: usize,

    /// Passing records in ranked order.
    pub rows: Vec<ResultRow>,
}

impl ScreenExport {
    /// Build an export from ranked records.
    pub fn new(
        collected_at: DateTime<Utc>,
        criteria: Criteria,
        universe: usize,
        records: &[&Record],
        averages: &SectorAverages,
    ) -> Self {
        let rows = records
            .iter()
            .enumerate()
            .map(|(i, record)| ResultRow::new(i + 1, record, averages))
            .collect();
        Self {
            collected_at,
            criteria,
            universe,
            rows,
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn rows_to_csv(rows: &[ResultRow]) -> Result<String, ExportError> {
    // header written by hand so an empty result still has one
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);
    wtr.write_record(ResultRow::COLUMNS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    let data = String::from_utf8(wtr.into_inner().map_err(|e| e.into_error())?)?;
    Ok(data)
}

impl Exporter for Vec<ResultRow> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => rows_to_csv(self),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for ScreenExport {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => rows_to_csv(&self.rows),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}
