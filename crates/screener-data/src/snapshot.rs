//! Dataset snapshot loading and validation.
//!
//! A snapshot is the JSON document written by the data producer: collection
//! metadata, sector average forward P/E values, and the list of records. It is
//! loaded once and never mutated afterwards.

use crate::error::{DataError, Result};
use crate::record::Record;
use crate::sector::SectorAverages;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

/// Collection metadata written alongside the records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// When the producer finished collecting.
    pub collected_at: DateTime<Utc>,
    /// Number of records collected.
    #[serde(default)]
    pub total_collected: Option<usize>,
    /// Number of records the producer's default screen admitted.
    #[serde(default)]
    pub passed_filter: Option<usize>,
    /// S&P 500 index level at collection time.
    #[serde(default)]
    pub sp500_price: Option<f64>,
    /// S&P 500 200-day moving average.
    #[serde(default)]
    pub sp500_200dma: Option<f64>,
    /// Whether the index traded above its 200-day moving average.
    #[serde(default)]
    pub sp500_above_200dma: Option<bool>,
}

impl Metadata {
    /// Metadata stamped with the given collection time and nothing else.
    pub const fn new(collected_at: DateTime<Utc>) -> Self {
        Self {
            collected_at,
            total_collected: None,
            passed_filter: None,
            sp500_price: None,
            sp500_200dma: None,
            sp500_above_200dma: None,
        }
    }
}

/// Immutable dataset snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Collection metadata.
    pub metadata: Metadata,
    /// Sector average forward P/E values.
    #[serde(default)]
    pub sector_averages: SectorAverages,
    /// Records in producer order.
    pub stocks: Vec<Record>,
}

impl Snapshot {
    /// Build a snapshot from parts, validating symbol uniqueness.
    pub fn new(
        metadata: Metadata,
        sector_averages: SectorAverages,
        stocks: Vec<Record>,
    ) -> Result<Self> {
        let snapshot = Self {
            metadata,
            sector_averages,
            stocks,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Parse and validate a snapshot from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Parse and validate a snapshot from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let snapshot: Self = serde_json::from_reader(reader)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Load and validate a snapshot file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let snapshot = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            records = snapshot.len(),
            sectors = snapshot.sector_averages.len(),
            collected_at = %snapshot.metadata.collected_at,
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Check that every symbol is non-blank and unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.stocks.len());
        for (index, record) in self.stocks.iter().enumerate() {
            if record.symbol.trim().is_empty() {
                return Err(DataError::InvalidSymbol {
                    index,
                    reason: "empty symbol".to_string(),
                });
            }
            if !seen.insert(record.symbol.as_str()) {
                warn!(symbol = %record.symbol, index, "duplicate symbol in snapshot");
                return Err(DataError::DuplicateSymbol {
                    symbol: record.symbol.clone(),
                });
            }
        }
        Ok(())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    /// Whether the snapshot holds no records.
    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// Find a record by symbol.
    pub fn get(&self, symbol: &str) -> Option<&Record> {
        self.stocks.iter().find(|r| r.symbol == symbol)
    }

    /// Distinct sector labels present in the records, sorted.
    pub fn sectors(&self) -> Vec<&str> {
        self.stocks
            .iter()
            .filter_map(|r| r.sector.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
