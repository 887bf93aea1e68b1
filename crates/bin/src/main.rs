//! Screener CLI binary.
//!
//! Provides command-line interface for the stock screener.

mod args;

use args::{Cli, Commands, ScreenArgs, TableFormat};
use clap::Parser;
use screener::Screen;
use screener::data::{GicsSector, Metadata, Snapshot};
use screener::engine::{Criteria, Criterion, SortDirection, SortState, search};
use screener::output::{ExportFormat, Exporter, RecordDetail, ResultTable, SectorTable};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};
use tracing_subscriber::prelude::*;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let data = cli.data.unwrap_or_else(default_data_path);

    match cli.command {
        Commands::Screen(args) => run_screen(&data, &args)?,
        Commands::Sectors { averages, format } => {
            if averages {
                print_sector_averages(&data, format)?;
            } else {
                list_all_sectors();
            }
        }
        Commands::Search {
            query,
            limit,
            detail,
        } => run_search(&data, &query, limit, detail)?,
        Commands::Criteria => print_criteria()?,
    }

    Ok(())
}

/// Default snapshot location.
///
/// - Linux: `~/.local/share/screener/stock_data.json`
/// - macOS: `~/Library/Application Support/screener/stock_data.json`
/// - Windows: `%APPDATA%\screener\stock_data.json`
fn default_data_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("screener")
        .join("stock_data.json")
}

fn load_snapshot(path: &Path) -> Result<Snapshot, Box<dyn std::error::Error>> {
    debug!(path = %path.display(), "loading snapshot");
    Snapshot::from_path(path).map_err(|e| format!("{}: {}", path.display(), e).into())
}

fn run_screen(data: &Path, args: &ScreenArgs) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = load_snapshot(data)?;
    let criteria = args.criteria.resolve()?;

    let mut sort = SortState::default();
    if let Some(key) = args.sort {
        sort.key = key;
    }
    if args.desc {
        sort.direction = SortDirection::Descending;
    }
    let screen = Screen::new(criteria).with_sort(sort);

    if let Some(export) = args.export {
        let format = ExportFormat::from(export);
        let result = screen.export(&snapshot);
        match &args.output {
            Some(path) => {
                result.export_to_file(path, format)?;
                info!(
                    path = %path.display(),
                    rows = result.rows.len(),
                    "exported screen"
                );
            }
            None => println!("{}", result.export_to_string(format)?),
        }
        return Ok(());
    }

    let ranked = screen.run(&snapshot);
    let title = format!(
        "Screen sorted by {} ({})",
        screen.sort.key, screen.sort.direction
    );
    let table = ResultTable::new(title, &ranked).with_total(snapshot.len());

    match args.format {
        TableFormat::Text => {
            print_market_context(&snapshot.metadata);
            print!("{}", table.to_ascii_table());
        }
        TableFormat::Markdown => print!("{}", table.to_markdown()),
    }

    if args.explain {
        println!("\nRejected:");
        for rejection in screen.rejections(&snapshot) {
            let failed: Vec<&str> = rejection.failed.iter().map(Criterion::name).collect();
            println!("  {:<8} {}", rejection.record.symbol, failed.join(", "));
        }
    }

    Ok(())
}

fn print_market_context(metadata: &Metadata) {
    println!(
        "Data collected {}",
        metadata.collected_at.format("%Y-%m-%d %H:%M UTC")
    );
    if let (Some(price), Some(dma)) = (metadata.sp500_price, metadata.sp500_200dma) {
        let trend = match metadata.sp500_above_200dma {
            Some(true) => "above",
            Some(false) => "below",
            None if price > dma => "above",
            None => "below",
        };
        println!(
            "S&P 500 {:.2} is {} its 200-day average {:.2}",
            price, trend, dma
        );
    }
}

fn list_all_sectors() {
    println!("GICS Sectors:");
    println!("=============\n");

    for sector in GicsSector::all() {
        println!("{:2} - {}", sector.code(), sector.name());
    }
}

fn print_sector_averages(data: &Path, format: TableFormat) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = load_snapshot(data)?;
    if snapshot.sector_averages.is_empty() {
        return Err("snapshot has no sector averages".into());
    }

    let table = SectorTable::new(&snapshot.sector_averages);
    match format {
        TableFormat::Text => print!("{}", table.to_ascii_table()),
        TableFormat::Markdown => print!("{}", table.to_markdown()),
    }
    Ok(())
}

fn run_search(
    data: &Path,
    query: &str,
    limit: usize,
    detail: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = load_snapshot(data)?;
    let matches = search(&snapshot.stocks, query, limit);

    if matches.is_empty() {
        println!("No matches for \"{}\"", query.trim());
        return Ok(());
    }

    for record in matches {
        if detail {
            print!(
                "{}",
                RecordDetail::new(record, &snapshot.sector_averages).to_ascii_table()
            );
        } else {
            println!(
                "{:<8} {:<36} {}",
                record.symbol,
                record.display_name(),
                record.sector.as_deref().unwrap_or("-")
            );
        }
    }
    Ok(())
}

fn print_criteria() -> Result<(), Box<dyn std::error::Error>> {
    println!("Criteria:");
    println!("=========\n");
    for criterion in Criterion::all() {
        let kind = if criterion.is_toggle() { "toggle" } else { "" };
        println!(
            "  {:<18} {:<7} {}",
            criterion.name(),
            kind,
            criterion.description()
        );
    }

    println!("\nDefaults:");
    println!("{}", serde_json::to_string_pretty(&Criteria::default())?);
    Ok(())
}
