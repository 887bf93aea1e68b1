#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/screener/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod criteria;
pub mod criterion;
pub mod filter;
pub mod search;
pub mod sort;
pub mod zone;

pub use criteria::{ALL_SECTORS, Criteria, SectorSelection};
pub use criterion::Criterion;
pub use filter::{filter, passes};
pub use search::{DEFAULT_SEARCH_LIMIT, search};
pub use sort::{
    ParseSortKeyError, SortDirection, SortKey, SortState, SortValue, collate, compare, sort,
};
pub use zone::RsiZone;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
