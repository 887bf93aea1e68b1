//! Filter engine.
//!
//! Selection is conjunctive: a record passes only if it satisfies every
//! active [`Criterion`]. Filtering preserves input order.

use crate::criteria::Criteria;
use crate::criterion::Criterion;
use screener_data::{Record, SectorAverages};
use tracing::debug;

impl Criteria {
    /// Whether a record satisfies every active criterion.
    pub fn passes(&self, record: &Record, averages: &SectorAverages) -> bool {
        Criterion::all()
            .iter()
            .filter(|c| c.is_active(self))
            .all(|c| c.admits(record, self, averages))
    }

    /// Every active criterion the record fails, in catalogue order.
    ///
    /// Empty exactly when [`Criteria::passes`] is true.
    pub fn rejections(&self, record: &Record, averages: &SectorAverages) -> Vec<Criterion> {
        Criterion::all()
            .into_iter()
            .filter(|c| c.is_active(self) && !c.admits(record, self, averages))
            .collect()
    }
}

/// Whether a single record passes the criteria.
pub fn passes(record: &Record, criteria: &Criteria, averages: &SectorAverages) -> bool {
    criteria.passes(record, averages)
}

/// The subsequence of `records` that passes the criteria, in input order.
pub fn filter<'a, I>(records: I, criteria: &Criteria, averages: &SectorAverages) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut evaluated = 0usize;
    let passing: Vec<&'a Record> = records
        .into_iter()
        .inspect(|_| evaluated += 1)
        .filter(|record| criteria.passes(record, averages))
        .collect();
    debug!(evaluated, passed = passing.len(), "filtered records");
    passing
}
