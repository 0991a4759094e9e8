// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Grouped aggregations feeding the dashboard widgets.
//!
//! Every function is a pure function of its input. Each record falls into
//! exactly one group per dimension, so per-group net sales always add up to
//! the input total. An empty input yields an empty table.

use num_traits::ToPrimitive;
use salesdash_domain::{CustomerSegment, OrderRecord, ProductCategory, Region, iso_date};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use time::Date;

/// Number of rows kept by the ranked tables.
pub const TOP_N: usize = 10;

/// Margin above which an order counts as healthy.
const HEALTHY_MARGIN: f64 = 20.0;

/// Margin above which an order counts as moderate.
const MODERATE_MARGIN: f64 = 10.0;

/// Mean of `count` values summing to `sum`, or 0 when there are none.
pub(crate) fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    count.to_f64().map_or(0.0, |n| sum / n)
}

/// Running totals for one group.
#[derive(Debug, Default)]
struct GroupTotals<'a> {
    net_sales: f64,
    profit: f64,
    orders: usize,
    customers: BTreeSet<&'a str>,
    profit_margin_sum: f64,
    target_achievement_sum: f64,
    lifetime_value_sum: f64,
}

impl<'a> GroupTotals<'a> {
    fn add(&mut self, record: &'a OrderRecord) {
        self.net_sales += record.net_sales();
        self.profit += record.profit();
        self.orders += 1;
        self.customers.insert(record.customer_id());
        self.profit_margin_sum += record.profit_margin();
        self.target_achievement_sum += record.target_achievement();
        self.lifetime_value_sum += record.customer_lifetime_value();
    }
}

fn group_by<'a, K, F>(records: &'a [OrderRecord], key: F) -> BTreeMap<K, GroupTotals<'a>>
where
    K: Ord,
    F: Fn(&'a OrderRecord) -> K,
{
    let mut groups: BTreeMap<K, GroupTotals<'a>> = BTreeMap::new();
    for record in records {
        groups.entry(key(record)).or_default().add(record);
    }
    groups
}

/// Orders by net sales descending, breaking ties by key ascending.
fn descending_sales<K: Ord>(a: (&K, f64), b: (&K, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Sales per calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySales {
    /// The day.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Sum of net sales.
    pub net_sales: f64,
    /// Sum of profit.
    pub profit: f64,
    /// Number of orders.
    pub orders: usize,
}

/// Sales per product category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPerformance {
    /// The category.
    pub category: ProductCategory,
    /// Sum of net sales.
    pub net_sales: f64,
    /// Sum of profit.
    pub profit: f64,
    /// Number of orders.
    pub orders: usize,
    /// Mean profit margin.
    pub avg_profit_margin: f64,
}

/// Sales per region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionPerformance {
    /// The region.
    pub region: Region,
    /// Sum of net sales.
    pub net_sales: f64,
    /// Sum of profit.
    pub profit: f64,
    /// Number of orders.
    pub orders: usize,
    /// Number of distinct customers.
    pub customers: usize,
}

/// Sales per sales representative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepPerformance {
    /// The sales representative.
    pub sales_rep: String,
    /// Sum of net sales.
    pub net_sales: f64,
    /// Sum of profit.
    pub profit: f64,
    /// Number of orders.
    pub orders: usize,
    /// Number of distinct customers.
    pub customers: usize,
    /// Mean target achievement.
    pub avg_target_achievement: f64,
}

/// Sales per customer segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentPerformance {
    /// The segment.
    pub segment: CustomerSegment,
    /// Sum of net sales.
    pub net_sales: f64,
    /// Sum of profit.
    pub profit: f64,
    /// Number of orders.
    pub orders: usize,
    /// Number of distinct customers.
    pub customers: usize,
    /// Mean customer lifetime value over the segment's orders.
    pub avg_lifetime_value: f64,
}

/// One row of a ranked table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// The ranked entity (product name or customer id).
    pub key: String,
    /// Sum of net sales.
    pub net_sales: f64,
}

/// Profit margin classification used to colour the profitability view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarginBand {
    /// Margin above 20%.
    Healthy,
    /// Margin above 10%, up to 20%.
    Moderate,
    /// Margin of 10% or less.
    Low,
}

impl MarginBand {
    /// Classifies a profit margin in percent.
    #[must_use]
    pub fn classify(profit_margin: f64) -> Self {
        if profit_margin > HEALTHY_MARGIN {
            Self::Healthy
        } else if profit_margin > MODERATE_MARGIN {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// One order in the sales-versus-profit view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitabilityPoint {
    /// The order identifier.
    pub order_id: String,
    /// Net sales.
    pub net_sales: f64,
    /// Profit.
    pub profit: f64,
    /// Units ordered.
    pub quantity: u8,
    /// Product category.
    pub category: ProductCategory,
    /// Product name.
    pub product_name: String,
    /// Region.
    pub region: Region,
    /// Profit margin in percent.
    pub profit_margin: f64,
    /// Margin classification.
    pub margin_band: MarginBand,
}

/// Aggregates net sales, profit and order count per day, oldest first.
#[must_use]
pub fn sales_by_date(records: &[OrderRecord]) -> Vec<DailySales> {
    group_by(records, |r| r.date())
        .into_iter()
        .map(|(date, totals)| DailySales {
            date,
            net_sales: totals.net_sales,
            profit: totals.profit,
            orders: totals.orders,
        })
        .collect()
}

/// Aggregates per product category, sorted ascending by net sales.
#[must_use]
pub fn sales_by_category(records: &[OrderRecord]) -> Vec<CategoryPerformance> {
    let mut rows: Vec<CategoryPerformance> = group_by(records, |r| r.product_category())
        .into_iter()
        .map(|(category, totals)| CategoryPerformance {
            category,
            net_sales: totals.net_sales,
            profit: totals.profit,
            orders: totals.orders,
            avg_profit_margin: mean(totals.profit_margin_sum, totals.orders),
        })
        .collect();
    rows.sort_by(|a, b| {
        a.net_sales
            .total_cmp(&b.net_sales)
            .then_with(|| a.category.cmp(&b.category))
    });
    rows
}

/// Aggregates per region, in region label order.
#[must_use]
pub fn sales_by_region(records: &[OrderRecord]) -> Vec<RegionPerformance> {
    group_by(records, |r| r.region())
        .into_iter()
        .map(|(region, totals)| RegionPerformance {
            region,
            net_sales: totals.net_sales,
            profit: totals.profit,
            orders: totals.orders,
            customers: totals.customers.len(),
        })
        .collect()
}

/// Ranks sales reps by net sales, keeping at most `limit` rows.
///
/// Ties are broken by rep name ascending, so the cut-off is stable.
#[must_use]
pub fn rank_sales_reps(records: &[OrderRecord], limit: usize) -> Vec<RepPerformance> {
    let mut rows: Vec<RepPerformance> = group_by(records, |r| r.sales_rep())
        .into_iter()
        .map(|(sales_rep, totals)| RepPerformance {
            sales_rep: sales_rep.to_string(),
            net_sales: totals.net_sales,
            profit: totals.profit,
            orders: totals.orders,
            customers: totals.customers.len(),
            avg_target_achievement: mean(totals.target_achievement_sum, totals.orders),
        })
        .collect();
    rows.sort_by(|a, b| descending_sales((&a.sales_rep, a.net_sales), (&b.sales_rep, b.net_sales)));
    rows.truncate(limit);
    rows
}

/// The top [`TOP_N`] sales reps by net sales.
#[must_use]
pub fn sales_rep_performance(records: &[OrderRecord]) -> Vec<RepPerformance> {
    rank_sales_reps(records, TOP_N)
}

/// Aggregates per customer segment, in segment label order.
#[must_use]
pub fn sales_by_segment(records: &[OrderRecord]) -> Vec<SegmentPerformance> {
    group_by(records, |r| r.customer_segment())
        .into_iter()
        .map(|(segment, totals)| SegmentPerformance {
            segment,
            net_sales: totals.net_sales,
            profit: totals.profit,
            orders: totals.orders,
            customers: totals.customers.len(),
            avg_lifetime_value: mean(totals.lifetime_value_sum, totals.orders),
        })
        .collect()
}

/// Ranks entities by summed net sales, keeping at most `limit` rows.
#[must_use]
pub fn top_by<F>(records: &[OrderRecord], key: F, limit: usize) -> Vec<RankedEntry>
where
    F: Fn(&OrderRecord) -> &str,
{
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(key(record)).or_insert(0.0) += record.net_sales();
    }

    let mut ranked: Vec<(&str, f64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| descending_sales((&a.0, a.1), (&b.0, b.1)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(key, net_sales)| RankedEntry {
            key: key.to_string(),
            net_sales,
        })
        .collect()
}

/// The top [`TOP_N`] products by net sales.
#[must_use]
pub fn top_products(records: &[OrderRecord]) -> Vec<RankedEntry> {
    top_by(records, |r| r.product_name(), TOP_N)
}

/// The top [`TOP_N`] customers by net sales.
#[must_use]
pub fn top_customers(records: &[OrderRecord]) -> Vec<RankedEntry> {
    top_by(records, |r| r.customer_id(), TOP_N)
}

/// Projects every order onto the sales-versus-profit view.
#[must_use]
pub fn profitability_points(records: &[OrderRecord]) -> Vec<ProfitabilityPoint> {
    records
        .iter()
        .map(|r| ProfitabilityPoint {
            order_id: r.order_id().to_string(),
            net_sales: r.net_sales(),
            profit: r.profit(),
            quantity: r.quantity(),
            category: r.product_category(),
            product_name: r.product_name().to_string(),
            region: r.region(),
            profit_margin: r.profit_margin(),
            margin_band: MarginBand::classify(r.profit_margin()),
        })
        .collect()
}
