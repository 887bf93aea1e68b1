//! Sector average forward P/E reference values.

use crate::record::Record;
use derive_more::From;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from sector label to the sector's average forward P/E.
///
/// Supplied by the data producer; the screener only reads it.
#[derive(Debug, Clone, Default, PartialEq, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectorAverages(BTreeMap<String, f64>);

impl SectorAverages {
    /// Create an empty mapping.
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Average forward P/E for a sector.
    pub fn get(&self, sector: &str) -> Option<f64> {
        self.0.get(sector).copied()
    }

    /// Average forward P/E for the sector a record belongs to.
    pub fn for_record(&self, record: &Record) -> Option<f64> {
        record.sector.as_deref().and_then(|sector| self.get(sector))
    }

    /// Set the average for a sector.
    pub fn insert(&mut self, sector: impl Into<String>, average_pe: f64) {
        self.0.insert(sector.into(), average_pe);
    }

    /// Number of sectors with an average.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no averages are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(sector, average)` pairs in sector name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(sector, pe)| (sector.as_str(), *pe))
    }

    /// Sectors ordered by average forward P/E, cheapest first.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for SectorAverages {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(s, pe)| (s.into(), pe)).collect())
    }
}
