// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod args;

use args::{Args, Command};
use clap::Parser;
use color_eyre::{Result, eyre::Context};
use salesdash::{Dataset, DatasetCache, GeneratorConfig};
use salesdash_api::{
    DashboardFilter, DashboardSnapshot, FilterOptions, KpiSummary, compute_kpis, dashboard_for,
    export_file_name, write_orders_csv,
};
use salesdash_domain::OrderRecord;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use time::OffsetDateTime;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .without_time()
        .init();

    let mut cache: DatasetCache = DatasetCache::new();
    let mut stdout = io::stdout().lock();
    match run(&args, &mut cache, &mut stdout) {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Executes the selected command, writing its output to `out`.
///
/// # Errors
///
/// Returns an error if the filter is invalid, the dataset cannot be
/// generated, or the output cannot be written.
fn run<W: Write>(args: &Args, cache: &mut DatasetCache, out: &mut W) -> Result<()> {
    let config: GeneratorConfig = args.generator.to_config();
    let filter: DashboardFilter = DashboardFilter::from_selections(&args.filter.to_selections())
        .wrap_err("Invalid filter selection")?;

    match &args.command {
        Command::Dashboard { pretty } => {
            let snapshot: DashboardSnapshot = dashboard_for(cache, &config, &filter)?;
            write_json(out, &snapshot, *pretty)
        }
        Command::Kpis => {
            let dataset: Arc<Dataset> = cache.get_or_generate(&config)?;
            let filtered: Vec<OrderRecord> = filter.apply(dataset.records());
            let kpis: KpiSummary = compute_kpis(dataset.records(), &filtered);
            write_json(out, &kpis, true)
        }
        Command::Options => {
            let dataset: Arc<Dataset> = cache.get_or_generate(&config)?;
            let options: FilterOptions = FilterOptions::from_records(dataset.records());
            write_json(out, &options, true)
        }
        Command::Export { output } => {
            let dataset: Arc<Dataset> = cache.get_or_generate(&config)?;
            let filtered: Vec<OrderRecord> = filter.apply(dataset.records());
            match output {
                Some(path) => export_to_file(&filtered, path),
                None => {
                    write_orders_csv(&filtered, &mut *out)?;
                    Ok(())
                }
            }
        }
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Resolves the export destination; a directory gets a date-stamped name.
fn export_path(path: &Path, today: time::Date) -> PathBuf {
    if path.is_dir() {
        path.join(export_file_name(today))
    } else {
        path.to_path_buf()
    }
}

fn export_to_file(records: &[OrderRecord], path: &Path) -> Result<()> {
    let target: PathBuf = export_path(path, OffsetDateTime::now_utc().date());
    let file: File = File::create(&target)
        .wrap_err_with(|| format!("Failed to create {}", target.display()))?;
    let rows: usize = write_orders_csv(records, BufWriter::new(file))?;
    info!(rows, path = %target.display(), "Exported filtered orders");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use salesdash::CustomerIdPool;
    use salesdash_domain::Region;
    use time::macros::date;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("arguments parse")
    }

    fn run_to_string(argv: &[&str]) -> String {
        let args: Args = parse(argv);
        let mut cache: DatasetCache = DatasetCache::new();
        let mut out: Vec<u8> = Vec::new();
        run(&args, &mut cache, &mut out).expect("command succeeds");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn test_defaults_match_generator_defaults() {
        let args: Args = parse(&["salesdash", "kpis"]);
        assert_eq!(args.generator.to_config(), GeneratorConfig::default());
        assert!(
            DashboardFilter::from_selections(&args.filter.to_selections())
                .unwrap()
                .is_unconstrained()
        );
    }

    #[test]
    fn test_generator_flags() {
        let args: Args = parse(&[
            "salesdash",
            "dashboard",
            "--seed",
            "7",
            "-n",
            "250",
            "--start",
            "2023-01-01",
            "--end",
            "2023-06-30",
            "--customer-first",
            "1000",
            "--customer-last",
            "1050",
        ]);
        let config: GeneratorConfig = args.generator.to_config();
        assert_eq!(config.seed, 7);
        assert_eq!(config.record_count, 250);
        assert_eq!(config.start_date, date!(2023 - 01 - 01));
        assert_eq!(config.end_date, date!(2023 - 06 - 30));
        assert_eq!(config.customer_pool, CustomerIdPool::new(1000, 1050));
    }

    #[test]
    fn test_repeatable_filter_flags() {
        let args: Args = parse(&[
            "salesdash",
            "export",
            "--region",
            "North",
            "--region",
            "West",
            "--segment",
            "Small Business",
            "--rep",
            "Alice Johnson",
        ]);
        let filter: DashboardFilter =
            DashboardFilter::from_selections(&args.filter.to_selections()).unwrap();
        assert_eq!(filter.regions, vec![Region::North, Region::West]);
        assert_eq!(filter.sales_rep.as_deref(), Some("Alice Johnson"));
    }

    #[test]
    fn test_date_filter_requires_both_ends() {
        assert!(Args::try_parse_from(["salesdash", "kpis", "--from", "2022-01-01"]).is_err());
        assert!(Args::try_parse_from(["salesdash", "kpis", "--start", "01/01/2022"]).is_err());
    }

    #[test]
    fn test_kpis_command_outputs_json() {
        let output: String = run_to_string(&[
            "salesdash",
            "kpis",
            "-n",
            "50",
            "--start",
            "2022-01-01",
            "--end",
            "2022-01-31",
        ]);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["total_orders"], 50);
    }

    #[test]
    fn test_dashboard_command_applies_filter() {
        let output: String = run_to_string(&[
            "salesdash",
            "dashboard",
            "-n",
            "80",
            "--start",
            "2022-01-01",
            "--end",
            "2022-03-31",
            "--region",
            "East",
        ]);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["summary"]["total_records"], 80);
        let regions: &Vec<serde_json::Value> = json["regions"].as_array().unwrap();
        assert!(regions.iter().all(|r| r["region"] == "East"));
    }

    #[test]
    fn test_export_command_writes_csv_to_output() {
        let output: String = run_to_string(&[
            "salesdash",
            "export",
            "-n",
            "20",
            "--start",
            "2022-01-01",
            "--end",
            "2022-01-31",
        ]);
        let mut lines = output.lines();
        assert!(lines.next().unwrap().starts_with("order_id,date,year"));
        assert_eq!(lines.count(), 20);
    }

    #[test]
    fn test_unknown_region_is_reported() {
        let args: Args = parse(&["salesdash", "options", "--region", "Atlantis"]);
        let mut cache: DatasetCache = DatasetCache::new();
        let mut out: Vec<u8> = Vec::new();
        assert!(run(&args, &mut cache, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_oversized_count_is_reported() {
        let count: String = (GeneratorConfig::MAX_RECORD_COUNT + 1).to_string();
        let args: Args = parse(&["salesdash", "kpis", "-n", &count]);
        let mut cache: DatasetCache = DatasetCache::new();
        let mut out: Vec<u8> = Vec::new();
        assert!(run(&args, &mut cache, &mut out).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_export_path_for_directory() {
        let dir: PathBuf = std::env::temp_dir();
        assert_eq!(
            export_path(&dir, date!(2024 - 03 - 07)),
            dir.join("sales_data_filtered_20240307.csv")
        );
        let file: PathBuf = dir.join("orders.csv");
        assert_eq!(export_path(&file, date!(2024 - 03 - 07)), file);
    }
}
