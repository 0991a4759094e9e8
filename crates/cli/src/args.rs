// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line arguments.

use clap::{Args as ClapArgs, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use salesdash::{CustomerIdPool, GeneratorConfig};
use salesdash_api::FilterSelections;
use std::path::PathBuf;
use time::Date;
use time::macros::format_description;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Salesdash - synthetic sales data and dashboard metrics
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub generator: GeneratorArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

impl Args {
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Print every KPI and aggregation table as JSON
    #[command(visible_alias = "d")]
    Dashboard {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the headline KPIs as JSON
    #[command(visible_alias = "k")]
    Kpis,

    /// Print the values available to each filter as JSON
    #[command(visible_alias = "o")]
    Options,

    /// Export the filtered orders as CSV
    #[command(visible_alias = "e")]
    Export {
        /// File or directory to write to. Writes to stdout if omitted.
        ///
        /// A directory receives a date-stamped file name.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Parameters of the generated dataset.
#[derive(Clone, Debug, ClapArgs)]
pub struct GeneratorArgs {
    /// Seed of the pseudo-random generator
    #[arg(long, global = true, default_value_t = GeneratorConfig::DEFAULT_SEED)]
    pub seed: u64,

    /// Number of orders to generate
    #[arg(short = 'n', long, global = true, default_value_t = GeneratorConfig::DEFAULT_RECORD_COUNT)]
    pub count: usize,

    /// First date of the generation window (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_date)]
    pub start: Option<Date>,

    /// Last date of the generation window (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_date)]
    pub end: Option<Date>,

    /// First customer number in the pool
    #[arg(long, global = true, default_value_t = CustomerIdPool::FOUR_DIGIT.first)]
    pub customer_first: u32,

    /// One past the last customer number in the pool
    #[arg(long, global = true, default_value_t = CustomerIdPool::FOUR_DIGIT.last)]
    pub customer_last: u32,
}

impl GeneratorArgs {
    #[must_use]
    pub fn to_config(&self) -> GeneratorConfig {
        GeneratorConfig::new(
            self.seed,
            self.count,
            self.start.unwrap_or(GeneratorConfig::DEFAULT_START_DATE),
            self.end.unwrap_or(GeneratorConfig::DEFAULT_END_DATE),
        )
        .with_customer_pool(CustomerIdPool::new(self.customer_first, self.customer_last))
    }
}

/// Dashboard filter selections.
#[derive(Clone, Debug, ClapArgs)]
pub struct FilterArgs {
    /// Keep orders on or after this date (YYYY-MM-DD)
    #[arg(long, global = true, requires = "to", value_parser = parse_date)]
    pub from: Option<Date>,

    /// Keep orders on or before this date (YYYY-MM-DD)
    #[arg(long, global = true, requires = "from", value_parser = parse_date)]
    pub to: Option<Date>,

    /// Keep orders in this region (repeatable, "All" for every region)
    #[arg(long = "region", global = true)]
    pub regions: Vec<String>,

    /// Keep orders in this product category (repeatable)
    #[arg(long = "category", global = true)]
    pub categories: Vec<String>,

    /// Keep orders from this customer segment (repeatable)
    #[arg(long = "segment", global = true)]
    pub segments: Vec<String>,

    /// Keep orders handled by this sales rep
    #[arg(long, global = true)]
    pub rep: Option<String>,
}

impl FilterArgs {
    #[must_use]
    pub fn to_selections(&self) -> FilterSelections {
        FilterSelections {
            date_range: self.from.zip(self.to),
            regions: self.regions.clone(),
            categories: self.categories.clone(),
            segments: self.segments.clone(),
            sales_rep: self.rep.clone(),
        }
    }
}

fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|e| format!("invalid date '{value}': {e}"))
}
