//! Filter-then-sort pipeline.
//!
//! A [`Screen`] is an explicit, caller-owned configuration. Changing it and
//! running it again against the same snapshot is the whole update cycle;
//! nothing is cached between runs.

use screener_data::{Record, Snapshot};
use screener_engine::{Criteria, Criterion, SortKey, SortState, filter};
use screener_output::ScreenExport;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Criteria plus sort state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    /// Filter configuration.
    #[serde(default)]
    pub criteria: Criteria,

    /// Sort key and direction.
    #[serde(default)]
    pub sort: SortState,
}

/// A record that failed the screen, with every criterion it failed.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection<'a> {
    /// The rejected record.
    pub record: &'a Record,

    /// Failed criteria, in catalogue order. Never empty.
    pub failed: Vec<Criterion>,
}

impl Screen {
    /// Screen with the given criteria and the default sort.
    pub fn new(criteria: Criteria) -> Self {
        Self {
            criteria,
            sort: SortState::default(),
        }
    }

    /// Replace the sort state.
    #[must_use]
    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    /// Apply a sort request: the current key flips direction, a new key
    /// starts ascending.
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = self.sort.request(key);
    }

    /// Filter the snapshot, then sort the survivors.
    pub fn run<'a>(&self, snapshot: &'a Snapshot) -> Vec<&'a Record> {
        let passing = filter(&snapshot.stocks, &self.criteria, &snapshot.sector_averages);
        let ranked = self.sort.apply(&passing);
        debug!(
            universe = snapshot.len(),
            passed = ranked.len(),
            key = %self.sort.key,
            direction = %self.sort.direction,
            "screen complete"
        );
        ranked
    }

    /// Every record that fails, in snapshot order.
    pub fn rejections<'a>(&self, snapshot: &'a Snapshot) -> Vec<Rejection<'a>> {
        snapshot
            .stocks
            .iter()
            .filter_map(|record| {
                let failed = self.criteria.rejections(record, &snapshot.sector_averages);
                (!failed.is_empty()).then_some(Rejection { record, failed })
            })
            .collect()
    }

    /// Run the screen and package the result for export.
    pub fn export(&self, snapshot: &Snapshot) -> ScreenExport {
        let ranked = self.run(snapshot);
        ScreenExport::new(
            snapshot.metadata.collected_at,
            self.criteria.clone(),
            snapshot.len(),
            &ranked,
            &snapshot.sector_averages,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use screener_data::{Metadata, SectorAverages};
    use screener_engine::SortDirection;

    fn snapshot() -> Snapshot {
        let stock = |symbol: &str, rsi: f64, cap: f64| Record {
            sector: Some("Utilities".to_string()),
            rsi: Some(rsi),
            market_cap: Some(cap),
            pct_from_high: Some(80.0),
            earnings_growth: Some(3.0),
            revenue_growth: Some(2.0),
            pct_from_200dma: Some(90.0),
            recommendation_mean: Some(2.0),
            forward_pe: Some(15.0),
            ..Record::new(symbol)
        };
        let averages: SectorAverages = [("Utilities", 17.0)].into_iter().collect();
        Snapshot::new(
            Metadata::new(Default::default()),
            averages,
            vec![
                stock("DUK", 33.0, 120e9),
                stock("SO", 29.0, 140e9),
                stock("NEE", 38.0, 150e9),
                stock("AEP", 52.0, 110e9),
            ],
        )
        .unwrap()
    }

    fn symbols(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.symbol.clone()).collect()
    }

    #[test]
    fn test_default_screen_sorts_by_rsi() {
        let snapshot = snapshot();
        let ranked = Screen::default().run(&snapshot);
        assert_eq!(symbols(&ranked), vec!["SO", "DUK", "NEE"]);
    }

    #[test]
    fn test_sort_by_transitions() {
        let snapshot = snapshot();
        let mut screen = Screen::default();

        screen.sort_by(SortKey::MarketCap);
        assert_eq!(screen.sort.direction, SortDirection::Ascending);
        assert_eq!(symbols(&screen.run(&snapshot)), vec!["DUK", "SO", "NEE"]);

        screen.sort_by(SortKey::MarketCap);
        assert_eq!(screen.sort.direction, SortDirection::Descending);
        assert_eq!(symbols(&screen.run(&snapshot)), vec!["NEE", "SO", "DUK"]);
    }

    #[test]
    fn test_rejections() {
        let snapshot = snapshot();
        let rejections = Screen::default().rejections(&snapshot);
        assert_eq!(rejections.len(), 1);
        assert_eq!(rejections[0].record.symbol, "AEP");
        assert_eq!(rejections[0].failed, vec![Criterion::RsiRange]);
    }

    #[test]
    fn test_export() {
        let snapshot = snapshot();
        let export = Screen::default().export(&snapshot);
        assert_eq!(export.universe, 4);
        assert_eq!(export.rows.len(), 3);
        assert_eq!(export.rows[0].symbol, "SO");
        assert_eq!(export.rows[2].rank, 3);
    }

    #[test]
    fn test_screen_from_json() {
        let screen: Screen = serde_json::from_str(
            r#"{"criteria": {"rsiMax": 60}, "sort": {"key": "market_cap", "direction": "descending"}}"#,
        )
        .unwrap();
        assert_eq!(screen.criteria.rsi_max, 60.0);
        assert_eq!(screen.sort.key, SortKey::MarketCap);

        let snapshot = snapshot();
        let ranked = screen.run(&snapshot);
        assert_eq!(symbols(&ranked), vec!["NEE", "SO", "DUK", "AEP"]);
    }
}
