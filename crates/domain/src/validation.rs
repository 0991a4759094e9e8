// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::is_known_sales_rep;
use crate::error::DomainError;
use crate::lifetime::lifetime_totals;
use crate::order::{MAX_DISCOUNT, OrderRecord, UNIT_PRICE_FLOOR};
use std::collections::HashMap;

/// Tolerance used when comparing accumulated floating point sums.
const SUM_TOLERANCE: f64 = 1e-6;

/// Validates the per-record invariants of an order.
///
/// # Errors
///
/// Returns an error if:
/// - The quantity is outside 1-9
/// - The unit price is below the floor
/// - The discount is outside `[0, 0.15)`
/// - Net sales exceed gross sales
/// - The profit margin is not positive
/// - The sales representative is not on the roster
pub fn validate_order(record: &OrderRecord) -> Result<(), DomainError> {
    if !(1..=9).contains(&record.quantity()) {
        return Err(DomainError::InvalidQuantity {
            order_id: record.order_id().to_string(),
            quantity: record.quantity(),
        });
    }

    if record.unit_price() < UNIT_PRICE_FLOOR {
        return Err(DomainError::InvalidUnitPrice {
            order_id: record.order_id().to_string(),
            unit_price: record.unit_price(),
        });
    }

    if !(0.0..MAX_DISCOUNT).contains(&record.discount()) {
        return Err(DomainError::InvalidDiscount {
            order_id: record.order_id().to_string(),
            discount: record.discount(),
        });
    }

    if record.net_sales() > record.gross_sales() {
        return Err(DomainError::NetExceedsGross {
            order_id: record.order_id().to_string(),
            net_sales: record.net_sales(),
            gross_sales: record.gross_sales(),
        });
    }

    if record.profit_margin() <= 0.0 {
        return Err(DomainError::NonPositiveMargin {
            order_id: record.order_id().to_string(),
            profit_margin: record.profit_margin(),
        });
    }

    if !is_known_sales_rep(record.sales_rep()) {
        return Err(DomainError::UnknownSalesRep(record.sales_rep().to_string()));
    }

    Ok(())
}

/// Validates that every record carries its customer's net sales total.
///
/// # Errors
///
/// Returns `DomainError::InconsistentLifetimeValue` for the first record
/// whose lifetime value differs from the recomputed total.
pub fn validate_lifetime_values(records: &[OrderRecord]) -> Result<(), DomainError> {
    let totals: HashMap<String, f64> = lifetime_totals(records);
    for record in records {
        let expected: f64 = totals.get(record.customer_id()).copied().unwrap_or(0.0);
        if (expected - record.customer_lifetime_value()).abs() > SUM_TOLERANCE {
            return Err(DomainError::InconsistentLifetimeValue {
                customer_id: record.customer_id().to_string(),
                expected,
                actual: record.customer_lifetime_value(),
            });
        }
    }
    Ok(())
}
