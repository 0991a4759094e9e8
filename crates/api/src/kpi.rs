// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Headline KPIs and period-over-period growth.
//!
//! Ratios with a zero denominator and means over an empty set report 0.0
//! rather than failing.

use crate::metrics::mean;
use num_traits::ToPrimitive;
use salesdash_domain::{OrderRecord, iso_date};
use serde::Serialize;
use std::collections::HashSet;
use time::{Date, Duration};
use tracing::debug;

/// Filtered spans up to this many days are not compared with a prior period.
pub const GROWTH_MIN_SPAN_DAYS: i64 = 30;

/// Headline metrics of a (possibly filtered) record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct KpiSummary {
    /// Sum of net sales.
    pub total_sales: f64,
    /// Sum of profit.
    pub total_profit: f64,
    /// Mean profit margin.
    pub avg_profit_margin: f64,
    /// Number of orders.
    pub total_orders: usize,
    /// Mean net sales per order.
    pub avg_order_value: f64,
    /// Number of distinct customers.
    pub unique_customers: usize,
    /// Net sales per distinct customer.
    pub revenue_per_customer: f64,
    /// Orders per distinct customer.
    pub orders_per_customer: f64,
    /// Sales growth against the preceding period, in percent.
    pub sales_growth: f64,
}

/// The prior period a filtered span is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodComparison {
    /// Length of the filtered span in days.
    pub span_days: i64,
    /// First day of the prior window (inclusive).
    #[serde(with = "iso_date")]
    pub previous_start: Date,
    /// Day after the prior window, i.e. the first filtered day (exclusive).
    #[serde(with = "iso_date")]
    pub previous_end: Date,
    /// Net sales of the full dataset within the prior window.
    pub previous_sales: f64,
}

/// Computes the KPIs of `filtered`.
///
/// `full` is the unfiltered dataset; it supplies the prior-period sales for
/// the growth figure.
#[must_use]
pub fn compute_kpis(full: &[OrderRecord], filtered: &[OrderRecord]) -> KpiSummary {
    let total_sales: f64 = filtered.iter().map(|r| r.net_sales()).sum();
    let total_profit: f64 = filtered.iter().map(|r| r.profit()).sum();
    let margin_sum: f64 = filtered.iter().map(|r| r.profit_margin()).sum();
    let total_orders: usize = filtered.len();
    let unique_customers: usize = filtered
        .iter()
        .map(|r| r.customer_id())
        .collect::<HashSet<&str>>()
        .len();

    KpiSummary {
        total_sales,
        total_profit,
        avg_profit_margin: mean(margin_sum, total_orders),
        total_orders,
        avg_order_value: mean(total_sales, total_orders),
        unique_customers,
        revenue_per_customer: mean(total_sales, unique_customers),
        orders_per_customer: orders_per_customer(total_orders, unique_customers),
        sales_growth: sales_growth(full, filtered),
    }
}

fn orders_per_customer(total_orders: usize, unique_customers: usize) -> f64 {
    total_orders
        .to_f64()
        .map_or(0.0, |orders| mean(orders, unique_customers))
}

/// Finds the prior window for `filtered`, if its span warrants one.
///
/// Returns `None` when `filtered` is empty or spans
/// [`GROWTH_MIN_SPAN_DAYS`] days or fewer.
#[must_use]
pub fn comparison_period(full: &[OrderRecord], filtered: &[OrderRecord]) -> Option<PeriodComparison> {
    let min_date: Date = filtered.iter().map(|r| r.date()).min()?;
    let max_date: Date = filtered.iter().map(|r| r.date()).max()?;
    let span_days: i64 = (max_date - min_date).whole_days();

    if span_days <= GROWTH_MIN_SPAN_DAYS {
        debug!(span_days, "Filtered span too short for growth comparison");
        return None;
    }

    let previous_start: Date = min_date.checked_sub(Duration::days(span_days))?;
    let previous_sales: f64 = full
        .iter()
        .filter(|r| r.date() >= previous_start && r.date() < min_date)
        .map(|r| r.net_sales())
        .sum();

    Some(PeriodComparison {
        span_days,
        previous_start,
        previous_end: min_date,
        previous_sales,
    })
}

/// Sales growth of `filtered` against the equally long preceding window.
///
/// Reports 0 when the span is too short or the prior window has no sales.
#[must_use]
pub fn sales_growth(full: &[OrderRecord], filtered: &[OrderRecord]) -> f64 {
    let Some(comparison) = comparison_period(full, filtered) else {
        return 0.0;
    };

    if comparison.previous_sales <= 0.0 {
        debug!(
            previous_start = %comparison.previous_start,
            "No sales in comparison window"
        );
        return 0.0;
    }

    let total_sales: f64 = filtered.iter().map(|r| r.net_sales()).sum();
    (total_sales - comparison.previous_sales) / comparison.previous_sales * 100.0
}
