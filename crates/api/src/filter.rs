// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dashboard filtering.
//!
//! Filters are conjunctive across dimensions. Within a multi-select
//! dimension an empty selection matches every record and a populated one
//! matches any of its values. Filtering always produces a fresh copy; the
//! source records are never touched.

use crate::error::ApiError;
use salesdash_domain::{CustomerSegment, OrderRecord, ProductCategory, Region, iso_date};
use serde::Serialize;
use std::collections::BTreeSet;
use std::str::FromStr;
use time::Date;
use tracing::debug;

/// Selection label meaning "no constraint" for a dimension.
pub const ALL_SELECTION: &str = "All";

/// An inclusive range of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    /// First date (inclusive).
    #[serde(with = "iso_date")]
    pub start: Date,
    /// Last date (inclusive).
    #[serde(with = "iso_date")]
    pub end: Date,
}

impl DateRange {
    /// Creates a date range.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidFilter` if `start` is after `end`.
    pub fn new(start: Date, end: Date) -> Result<Self, ApiError> {
        if start > end {
            return Err(ApiError::InvalidFilter {
                field: String::from("date_range"),
                message: format!("start {start} is after end {end}"),
            });
        }
        Ok(Self { start, end })
    }

    /// Returns whether `date` falls within the range.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Raw selections as a presentation layer reports them.
///
/// Any multi-select containing [`ALL_SELECTION`] and a sales rep equal to it
/// impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelections {
    /// Selected date range, if any.
    pub date_range: Option<(Date, Date)>,
    /// Selected region labels.
    pub regions: Vec<String>,
    /// Selected category labels.
    pub categories: Vec<String>,
    /// Selected segment labels.
    pub segments: Vec<String>,
    /// Selected sales rep, or `"All"`.
    pub sales_rep: Option<String>,
}

/// Typed filter constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardFilter {
    /// Inclusive date range; `None` matches every date.
    pub date_range: Option<DateRange>,
    /// Regions to keep; empty matches every region.
    pub regions: Vec<Region>,
    /// Categories to keep; empty matches every category.
    pub categories: Vec<ProductCategory>,
    /// Segments to keep; empty matches every segment.
    pub segments: Vec<CustomerSegment>,
    /// Single sales rep to keep; `None` matches every rep.
    pub sales_rep: Option<String>,
}

impl DashboardFilter {
    /// Returns a filter that matches every record.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts the filter to `range`.
    #[must_use]
    pub const fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// Restricts the filter to `regions`.
    #[must_use]
    pub fn with_regions(mut self, regions: &[Region]) -> Self {
        self.regions = regions.to_vec();
        self
    }

    /// Restricts the filter to `categories`.
    #[must_use]
    pub fn with_categories(mut self, categories: &[ProductCategory]) -> Self {
        self.categories = categories.to_vec();
        self
    }

    /// Restricts the filter to `segments`.
    #[must_use]
    pub fn with_segments(mut self, segments: &[CustomerSegment]) -> Self {
        self.segments = segments.to_vec();
        self
    }

    /// Restricts the filter to a single sales rep.
    ///
    /// [`ALL_SELECTION`] or a blank name removes the constraint.
    #[must_use]
    pub fn with_sales_rep(mut self, sales_rep: &str) -> Self {
        self.sales_rep = parse_sales_rep(sales_rep);
        self
    }

    /// Builds a typed filter from raw selections.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidFilter` if a label is unknown or the date
    /// range is inverted.
    pub fn from_selections(selections: &FilterSelections) -> Result<Self, ApiError> {
        let date_range: Option<DateRange> = selections
            .date_range
            .map(|(start, end)| DateRange::new(start, end))
            .transpose()?;

        let sales_rep: Option<String> = selections.sales_rep.as_deref().and_then(parse_sales_rep);

        Ok(Self {
            date_range,
            regions: parse_selection("regions", &selections.regions)?,
            categories: parse_selection("categories", &selections.categories)?,
            segments: parse_selection("segments", &selections.segments)?,
            sales_rep,
        })
    }

    /// Returns whether the filter imposes no constraint at all.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.date_range.is_none()
            && self.regions.is_empty()
            && self.categories.is_empty()
            && self.segments.is_empty()
            && self.sales_rep.is_none()
    }

    /// Returns whether `record` satisfies every dimension of the filter.
    #[must_use]
    pub fn matches(&self, record: &OrderRecord) -> bool {
        self.date_range
            .is_none_or(|range| range.contains(record.date()))
            && (self.regions.is_empty() || self.regions.contains(&record.region()))
            && (self.categories.is_empty() || self.categories.contains(&record.product_category()))
            && (self.segments.is_empty() || self.segments.contains(&record.customer_segment()))
            && self
                .sales_rep
                .as_deref()
                .is_none_or(|rep| rep == record.sales_rep())
    }

    /// Returns a copy of the records that match the filter.
    #[must_use]
    pub fn apply(&self, records: &[OrderRecord]) -> Vec<OrderRecord> {
        let filtered: Vec<OrderRecord> = records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect();
        debug!(
            total = records.len(),
            filtered = filtered.len(),
            "Applied dashboard filter"
        );
        filtered
    }
}

/// Parses a sales rep selection; [`ALL_SELECTION`] means "no constraint".
fn parse_sales_rep(label: &str) -> Option<String> {
    let rep: &str = label.trim();
    (!rep.is_empty() && rep != ALL_SELECTION).then(|| rep.to_string())
}

/// Parses a multi-select, treating [`ALL_SELECTION`] as "no constraint".
fn parse_selection<T>(field: &str, labels: &[String]) -> Result<Vec<T>, ApiError>
where
    T: FromStr + Ord,
    T::Err: std::fmt::Display,
{
    if labels.iter().any(|label| label.trim() == ALL_SELECTION) {
        return Ok(Vec::new());
    }

    let mut values: BTreeSet<T> = BTreeSet::new();
    for label in labels {
        let value: T = label.parse().map_err(|e: T::Err| ApiError::InvalidFilter {
            field: field.to_string(),
            message: e.to_string(),
        })?;
        values.insert(value);
    }
    Ok(values.into_iter().collect())
}

/// Record counts before and after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterSummary {
    /// Records left after filtering.
    pub filtered_records: usize,
    /// Records in the full dataset.
    pub total_records: usize,
}

impl FilterSummary {
    /// Returns whether the filter left no records, i.e. "no data".
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.filtered_records == 0
    }
}

/// Distinct values available to each filter control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Regions present in the data, in label order.
    pub regions: Vec<Region>,
    /// Categories present in the data, in label order.
    pub categories: Vec<ProductCategory>,
    /// Segments present in the data, in label order.
    pub segments: Vec<CustomerSegment>,
    /// Sales reps present in the data, sorted by name.
    pub sales_reps: Vec<String>,
    /// Earliest and latest order date, the default date selection.
    pub date_bounds: Option<DateRange>,
}

impl FilterOptions {
    /// Collects the filter options offered by `records`.
    #[must_use]
    pub fn from_records(records: &[OrderRecord]) -> Self {
        let regions: BTreeSet<Region> = records.iter().map(|r| r.region()).collect();
        let categories: BTreeSet<ProductCategory> =
            records.iter().map(|r| r.product_category()).collect();
        let segments: BTreeSet<CustomerSegment> =
            records.iter().map(|r| r.customer_segment()).collect();
        let sales_reps: BTreeSet<&str> = records.iter().map(|r| r.sales_rep()).collect();

        let date_bounds: Option<DateRange> = records
            .iter()
            .map(|r| r.date())
            .min()
            .zip(records.iter().map(|r| r.date()).max())
            .map(|(start, end)| DateRange { start, end });

        Self {
            regions: regions.into_iter().collect(),
            categories: categories.into_iter().collect(),
            segments: segments.into_iter().collect(),
            sales_reps: sales_reps.into_iter().map(str::to_string).collect(),
            date_bounds,
        }
    }
}
