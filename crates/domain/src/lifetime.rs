// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Customer lifetime value broadcast.

use crate::order::OrderRecord;
use std::collections::HashMap;

/// Sums net sales per customer across `records`.
///
/// Sums are accumulated in record order, so the result is deterministic for
/// a given record sequence.
#[must_use]
pub fn lifetime_totals(records: &[OrderRecord]) -> HashMap<String, f64> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for record in records {
        *totals.entry(record.customer_id().to_string()).or_insert(0.0) += record.net_sales();
    }
    totals
}

/// Recomputes the lifetime value of every record from the set it belongs to.
///
/// Each record receives the sum of net sales over all records sharing its
/// customer identifier. Must be called whenever the record set changes.
pub fn assign_lifetime_values(records: &mut [OrderRecord]) {
    let totals: HashMap<String, f64> = lifetime_totals(records);
    for record in records.iter_mut() {
        if let Some(total) = totals.get(record.customer_id()) {
            record.customer_lifetime_value = *total;
        }
    }
}
