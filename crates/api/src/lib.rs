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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod dashboard;
mod error;
mod export;
mod filter;
mod kpi;
mod metrics;

#[cfg(test)]
mod tests;

pub use dashboard::{DashboardSnapshot, build_dashboard, dashboard_for};
pub use error::{ApiError, ExportError};
pub use export::{EXPORT_HEADERS, export_file_name, orders_to_csv, write_orders_csv};
pub use filter::{
    ALL_SELECTION, DashboardFilter, DateRange, FilterOptions, FilterSelections, FilterSummary,
};
pub use kpi::{
    GROWTH_MIN_SPAN_DAYS, KpiSummary, PeriodComparison, comparison_period, compute_kpis,
    sales_growth,
};
pub use metrics::{
    CategoryPerformance, DailySales, MarginBand, ProfitabilityPoint, RankedEntry,
    RegionPerformance, RepPerformance, SegmentPerformance, TOP_N, profitability_points,
    rank_sales_reps, sales_by_category, sales_by_date, sales_by_region, sales_by_segment,
    sales_rep_performance, top_by, top_customers, top_products,
};
