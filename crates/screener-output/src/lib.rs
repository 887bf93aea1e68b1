#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/screener/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod detail;
pub mod export;
pub mod format;
pub mod table;

pub use detail::RecordDetail;
pub use export::{ExportError, ExportFormat, Exporter, ResultRow, ScreenExport};
pub use format::{
    MISSING, format_decimal, format_growth, format_market_cap, format_percent, format_price,
    format_rating_mean, format_recommendation, format_rsi,
};
pub use table::{ResultTable, SectorTable};
