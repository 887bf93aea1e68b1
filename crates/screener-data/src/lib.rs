#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/screener/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod gics;
pub mod rating;
pub mod record;
pub mod sector;
pub mod snapshot;

pub use error::{DataError, Result};
pub use gics::GicsSector;
pub use rating::{Rating, Recommendation};
pub use record::Record;
pub use sector::SectorAverages;
pub use snapshot::{Metadata, Snapshot};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
