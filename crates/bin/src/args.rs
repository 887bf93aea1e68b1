//! Command-line arguments.

use clap::{Args, Parser, Subcommand, ValueEnum};
use screener::data::GicsSector;
use screener::engine::{Criteria, DEFAULT_SEARCH_LIMIT, SectorSelection, SortKey};
use screener::output::ExportFormat;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "screener")]
#[command(about = "Screener: oversold large-cap stock screening", long_about = None)]
#[command(version)]
pub(crate) struct Cli {
    /// Snapshot file produced by the data collector
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) data: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Filter and rank the snapshot
    Screen(ScreenArgs),

    /// List GICS sectors or the snapshot's sector averages
    Sectors {
        /// Show the snapshot's average forward P/E per sector
        #[arg(long)]
        averages: bool,

        /// Table format
        #[arg(long, value_enum, default_value_t = TableFormat::Text)]
        format: TableFormat,
    },

    /// Look up stocks by symbol or name
    Search {
        /// Symbol or name fragment
        query: String,

        /// Maximum number of matches
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,

        /// Print every field of each match
        #[arg(long)]
        detail: bool,
    },

    /// Print the criterion catalogue and default criteria
    Criteria,
}

#[derive(Args)]
pub(crate) struct ScreenArgs {
    #[command(flatten)]
    pub(crate) criteria: CriteriaArgs,

    /// Sort key (e.g. rsi, market_cap, forward_pe, name)
    #[arg(long, value_name = "KEY")]
    pub(crate) sort: Option<SortKey>,

    /// Sort descending
    #[arg(long)]
    pub(crate) desc: bool,

    /// Table format
    #[arg(long, value_enum, default_value_t = TableFormat::Text)]
    pub(crate) format: TableFormat,

    /// Export results instead of printing a table
    #[arg(long, value_enum)]
    pub(crate) export: Option<ExportArg>,

    /// Export destination (stdout when omitted)
    #[arg(long, requires = "export", value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// List the failed criteria of every rejected stock
    #[arg(long)]
    pub(crate) explain: bool,
}

/// Criteria file plus per-field overrides.
#[derive(Args)]
pub(crate) struct CriteriaArgs {
    /// Criteria file (JSON); omitted fields keep their defaults
    #[arg(long, value_name = "PATH")]
    pub(crate) criteria: Option<PathBuf>,

    /// Lower RSI bound (inclusive)
    #[arg(long)]
    pub(crate) rsi_min: Option<f64>,

    /// Upper RSI bound (inclusive)
    #[arg(long)]
    pub(crate) rsi_max: Option<f64>,

    /// Market cap floor in billions
    #[arg(long, value_name = "BILLIONS")]
    pub(crate) market_cap: Option<f64>,

    /// Percent-of-52-week-high floor
    #[arg(long, value_name = "PCT")]
    pub(crate) pct_from_high: Option<f64>,

    /// EPS growth floor (%)
    #[arg(long, value_name = "PCT", allow_negative_numbers = true)]
    pub(crate) eps_growth: Option<f64>,

    /// Revenue growth floor (%)
    #[arg(long, value_name = "PCT", allow_negative_numbers = true)]
    pub(crate) revenue_growth: Option<f64>,

    /// Require price above 80% of the 200-day moving average
    #[arg(long, overrides_with = "no_above_200dma")]
    pub(crate) above_200dma: bool,

    /// Do not require price above 80% of the 200-day moving average
    #[arg(long, overrides_with = "above_200dma")]
    pub(crate) no_above_200dma: bool,

    /// Require a Buy or Strong Buy consensus
    #[arg(long, overrides_with = "no_buy_only")]
    pub(crate) buy_only: bool,

    /// Admit any analyst consensus
    #[arg(long, overrides_with = "buy_only")]
    pub(crate) no_buy_only: bool,

    /// Require forward P/E below the sector average
    #[arg(long, overrides_with = "no_per_below_sector")]
    pub(crate) per_below_sector: bool,

    /// Ignore the sector average forward P/E
    #[arg(long, overrides_with = "per_below_sector")]
    pub(crate) no_per_below_sector: bool,

    /// Restrict to one sector: GICS code, name, shorthand, or "all"
    #[arg(long)]
    pub(crate) sector: Option<String>,
}

impl CriteriaArgs {
    /// Criteria from the file (or defaults) with command-line overrides applied.
    pub(crate) fn resolve(&self) -> Result<Criteria, Box<dyn std::error::Error>> {
        let mut criteria = match &self.criteria {
            Some(path) => {
                let file = File::open(path)
                    .map_err(|e| format!("cannot open criteria file {}: {}", path.display(), e))?;
                serde_json::from_reader(BufReader::new(file))
                    .map_err(|e| format!("invalid criteria file {}: {}", path.display(), e))?
            }
            None => Criteria::default(),
        };
        self.apply(&mut criteria);
        Ok(criteria)
    }

    fn apply(&self, criteria: &mut Criteria) {
        let numbers = [
            (self.rsi_min, &mut criteria.rsi_min),
            (self.rsi_max, &mut criteria.rsi_max),
            (self.market_cap, &mut criteria.market_cap_floor),
            (self.pct_from_high, &mut criteria.pct_from_high_floor),
            (self.eps_growth, &mut criteria.eps_growth_floor),
            (self.revenue_growth, &mut criteria.revenue_growth_floor),
        ];
        for (value, field) in numbers {
            if let Some(value) = value {
                *field = value;
            }
        }

        let toggles = [
            (toggle(self.above_200dma, self.no_above_200dma), &mut criteria.above_200dma),
            (toggle(self.buy_only, self.no_buy_only), &mut criteria.buy_only),
            (
                toggle(self.per_below_sector, self.no_per_below_sector),
                &mut criteria.per_below_sector,
            ),
        ];
        for (value, field) in toggles {
            if let Some(value) = value {
                *field = value;
            }
        }

        if let Some(sector) = &self.sector {
            criteria.sector = SectorSelection::from(GicsSector::resolve_label(sector));
        }
    }
}

const fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum TableFormat {
    Text,
    Markdown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportArg {
    Csv,
    Json,
    PrettyJson,
}

impl From<ExportArg> for ExportFormat {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::Csv => Self::Csv,
            ExportArg::Json => Self::Json,
            ExportArg::PrettyJson => Self::PrettyJson,
        }
    }
}
