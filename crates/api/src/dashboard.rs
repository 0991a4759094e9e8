// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The complete payload handed to a presentation layer for one filter.

use crate::error::ApiError;
use crate::filter::{DashboardFilter, FilterSummary};
use crate::kpi::{KpiSummary, compute_kpis};
use crate::metrics::{
    CategoryPerformance, DailySales, ProfitabilityPoint, RankedEntry, RegionPerformance,
    RepPerformance, SegmentPerformance, profitability_points, sales_by_category, sales_by_date,
    sales_by_region, sales_by_segment, sales_rep_performance, top_customers, top_products,
};
use salesdash::{Dataset, DatasetCache, GeneratorConfig};
use salesdash_domain::OrderRecord;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Every KPI and aggregation table for one filtered view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    /// Record counts before and after filtering.
    pub summary: FilterSummary,
    /// Headline metrics.
    pub kpis: KpiSummary,
    /// Time series of daily sales.
    pub daily_sales: Vec<DailySales>,
    /// Category table, ascending by net sales.
    pub categories: Vec<CategoryPerformance>,
    /// Region table.
    pub regions: Vec<RegionPerformance>,
    /// Top sales reps, descending by net sales.
    pub sales_reps: Vec<RepPerformance>,
    /// Segment table.
    pub segments: Vec<SegmentPerformance>,
    /// Top products by net sales.
    pub top_products: Vec<RankedEntry>,
    /// Top customers by net sales.
    pub top_customers: Vec<RankedEntry>,
    /// Sales-versus-profit points.
    pub profitability: Vec<ProfitabilityPoint>,
}

impl DashboardSnapshot {
    /// Computes every table over `filtered`, using `full` for the growth
    /// comparison.
    #[must_use]
    pub fn compute(full: &[OrderRecord], filtered: &[OrderRecord]) -> Self {
        Self {
            summary: FilterSummary {
                filtered_records: filtered.len(),
                total_records: full.len(),
            },
            kpis: compute_kpis(full, filtered),
            daily_sales: sales_by_date(filtered),
            categories: sales_by_category(filtered),
            regions: sales_by_region(filtered),
            sales_reps: sales_rep_performance(filtered),
            segments: sales_by_segment(filtered),
            top_products: top_products(filtered),
            top_customers: top_customers(filtered),
            profitability: profitability_points(filtered),
        }
    }
}

/// Filters `full` and builds the dashboard for the result.
#[must_use]
pub fn build_dashboard(full: &[OrderRecord], filter: &DashboardFilter) -> DashboardSnapshot {
    let filtered: Vec<OrderRecord> = filter.apply(full);
    if filtered.is_empty() {
        warn!(total = full.len(), "No data for the selected filters");
    }
    DashboardSnapshot::compute(full, &filtered)
}

/// Loads the dataset for `config` through `cache` and builds its dashboard.
///
/// # Errors
///
/// Returns `ApiError::Core` if the dataset cannot be generated.
pub fn dashboard_for(
    cache: &mut DatasetCache,
    config: &GeneratorConfig,
    filter: &DashboardFilter,
) -> Result<DashboardSnapshot, ApiError> {
    let dataset: Arc<Dataset> = cache.get_or_generate(config)?;
    let snapshot: DashboardSnapshot = build_dashboard(dataset.records(), filter);
    info!(
        filtered = snapshot.summary.filtered_records,
        total = snapshot.summary.total_records,
        "Built dashboard snapshot"
    );
    Ok(snapshot)
}
