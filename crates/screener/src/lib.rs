#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/screener/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod pipeline;

// Re-export main types from sub-crates
pub use screener_data as data;
pub use screener_engine as engine;
pub use screener_output as output;

pub use pipeline::{Rejection, Screen};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
