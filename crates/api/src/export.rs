// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of a record set.
//!
//! Columns follow the record layout, with the derived calendar columns
//! placed right after the order date.

use crate::error::ExportError;
use salesdash_domain::{CalendarFields, CustomerSegment, OrderRecord, ProductCategory, Region};
use serde::Serialize;
use std::io::Write;
use time::Date;
use tracing::info;

/// Column headers of the export, in order.
pub const EXPORT_HEADERS: &[&str] = &[
    "order_id",
    "date",
    "year",
    "month",
    "month_name",
    "quarter",
    "day_of_week",
    "customer_id",
    "customer_segment",
    "product_category",
    "product_name",
    "region",
    "sales_rep",
    "unit_price",
    "quantity",
    "gross_sales",
    "discount",
    "net_sales",
    "cost",
    "profit",
    "profit_margin",
    "sales_target",
    "target_achievement",
    "customer_lifetime_value",
];

/// One flattened export row.
#[derive(Debug, Serialize)]
struct OrderCsvRow<'a> {
    order_id: &'a str,
    date: String,
    year: i32,
    month: u8,
    month_name: String,
    quarter: &'static str,
    day_of_week: String,
    customer_id: &'a str,
    customer_segment: CustomerSegment,
    product_category: ProductCategory,
    product_name: &'a str,
    region: Region,
    sales_rep: &'a str,
    unit_price: f64,
    quantity: u8,
    gross_sales: f64,
    discount: f64,
    net_sales: f64,
    cost: f64,
    profit: f64,
    profit_margin: f64,
    sales_target: f64,
    target_achievement: f64,
    customer_lifetime_value: f64,
}

impl<'a> From<&'a OrderRecord> for OrderCsvRow<'a> {
    fn from(record: &'a OrderRecord) -> Self {
        let calendar: CalendarFields = record.calendar();
        Self {
            order_id: record.order_id(),
            date: record.date().to_string(),
            year: calendar.year,
            month: calendar.month,
            month_name: calendar.month_name,
            quarter: calendar.quarter,
            day_of_week: calendar.day_of_week,
            customer_id: record.customer_id(),
            customer_segment: record.customer_segment(),
            product_category: record.product_category(),
            product_name: record.product_name(),
            region: record.region(),
            sales_rep: record.sales_rep(),
            unit_price: record.unit_price(),
            quantity: record.quantity(),
            gross_sales: record.gross_sales(),
            discount: record.discount(),
            net_sales: record.net_sales(),
            cost: record.cost(),
            profit: record.profit(),
            profit_margin: record.profit_margin(),
            sales_target: record.sales_target(),
            target_achievement: record.target_achievement(),
            customer_lifetime_value: record.customer_lifetime_value(),
        }
    }
}

/// Writes `records` as CSV to `writer`, header first.
///
/// The header is written even when `records` is empty.
///
/// # Returns
///
/// The number of data rows written.
///
/// # Errors
///
/// Returns an error if a row cannot be serialized or the writer fails.
pub fn write_orders_csv<W: Write>(records: &[OrderRecord], writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(EXPORT_HEADERS)
        .map_err(|e| ExportError::Header {
            reason: e.to_string(),
        })?;

    for record in records {
        csv_writer
            .serialize(OrderCsvRow::from(record))
            .map_err(|e| ExportError::Row {
                order_id: record.order_id().to_string(),
                reason: e.to_string(),
            })?;
    }

    csv_writer.flush().map_err(|e| ExportError::Flush {
        reason: e.to_string(),
    })?;

    info!(rows = records.len(), "Wrote CSV export");
    Ok(records.len())
}

/// Renders `records` as an in-memory CSV document.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn orders_to_csv(records: &[OrderRecord]) -> Result<String, ExportError> {
    let mut buffer: Vec<u8> = Vec::new();
    write_orders_csv(records, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ExportError::Encoding {
        reason: e.to_string(),
    })
}

/// Suggested download file name for an export taken on `date`.
#[must_use]
pub fn export_file_name(date: Date) -> String {
    format!(
        "sales_data_filtered_{:04}{:02}{:02}.csv",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
