// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    create_order_with_financials, create_test_attributes, create_test_financials,
    create_test_order,
};
use crate::{
    DomainError, Financials, OrderAttributes, OrderRecord, assign_lifetime_values,
    validate_lifetime_values, validate_order,
};

#[test]
fn test_valid_order_passes() {
    let record: OrderRecord = create_test_order("ORD_00001", "CUST_1000", 100.0);
    assert_eq!(validate_order(&record), Ok(()));
}

#[test]
fn test_quantity_out_of_range_rejected() {
    let mut financials: Financials = create_test_financials();
    financials.quantity = 0;
    let record: OrderRecord = create_order_with_financials(financials);
    assert!(matches!(
        validate_order(&record),
        Err(DomainError::InvalidQuantity { quantity: 0, .. })
    ));

    financials.quantity = 10;
    let record: OrderRecord = create_order_with_financials(financials);
    assert!(matches!(
        validate_order(&record),
        Err(DomainError::InvalidQuantity { quantity: 10, .. })
    ));
}

#[test]
fn test_unit_price_below_floor_rejected() {
    let mut financials: Financials = create_test_financials();
    financials.unit_price = 9.99;
    let record: OrderRecord = create_order_with_financials(financials);
    assert!(matches!(
        validate_order(&record),
        Err(DomainError::InvalidUnitPrice { .. })
    ));
}

#[test]
fn test_discount_at_upper_bound_rejected() {
    let mut financials: Financials = create_test_financials();
    financials.discount = 0.15;
    let record: OrderRecord = create_order_with_financials(financials);
    assert!(matches!(
        validate_order(&record),
        Err(DomainError::InvalidDiscount { .. })
    ));
}

#[test]
fn test_net_above_gross_rejected() {
    let mut financials: Financials = create_test_financials();
    financials.net_sales = financials.gross_sales + 1.0;
    let record: OrderRecord = create_order_with_financials(financials);
    assert!(matches!(
        validate_order(&record),
        Err(DomainError::NetExceedsGross { .. })
    ));
}

#[test]
fn test_non_positive_margin_rejected() {
    let mut financials: Financials = create_test_financials();
    financials.profit_margin = 0.0;
    let record: OrderRecord = create_order_with_financials(financials);
    assert!(matches!(
        validate_order(&record),
        Err(DomainError::NonPositiveMargin { .. })
    ));
}

#[test]
fn test_unknown_rep_rejected() {
    let attributes: OrderAttributes = OrderAttributes {
        sales_rep: String::from("Zed Nobody"),
        ..create_test_attributes("ORD_00001", "CUST_1000")
    };
    let record: OrderRecord = OrderRecord::new(attributes, create_test_financials());
    assert_eq!(
        validate_order(&record),
        Err(DomainError::UnknownSalesRep(String::from("Zed Nobody")))
    );
}

#[test]
fn test_stale_lifetime_value_detected() {
    let mut records: Vec<OrderRecord> = vec![
        create_test_order("ORD_00001", "CUST_1000", 100.0),
        create_test_order("ORD_00002", "CUST_1000", 100.0),
    ];
    assert!(matches!(
        validate_lifetime_values(&records),
        Err(DomainError::InconsistentLifetimeValue { .. })
    ));

    assign_lifetime_values(&mut records);
    assert_eq!(validate_lifetime_values(&records), Ok(()));
}

#[test]
fn test_error_display() {
    let err: DomainError = DomainError::InvalidQuantity {
        order_id: String::from("ORD_00007"),
        quantity: 12,
    };
    assert_eq!(
        err.to_string(),
        "Order ORD_00007 has invalid quantity 12. Must be between 1 and 9"
    );
}
