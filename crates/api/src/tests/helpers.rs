// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use salesdash::{Dataset, GeneratorConfig, generate_dataset};
use salesdash_domain::{
    CustomerSegment, Financials, OrderAttributes, OrderRecord, PricingInputs, ProductCategory,
    Region, assign_lifetime_values,
};
use time::Date;
use time::macros::date;

/// Default attributes: customer `CUST_1000`, Enterprise, Laptop, North,
/// Alice Johnson.
pub fn create_test_attributes(order_id: &str, date: Date) -> OrderAttributes {
    OrderAttributes {
        order_id: String::from(order_id),
        date,
        customer_id: String::from("CUST_1000"),
        customer_segment: CustomerSegment::Enterprise,
        product_category: ProductCategory::Electronics,
        product_name: String::from("Laptop"),
        region: Region::North,
        sales_rep: String::from("Alice Johnson"),
    }
}

/// Builds a single-unit, undiscounted order so that gross and net sales
/// both equal `net_sales` and the margin is `(1 - cost_rate) * 100`.
pub fn create_order(
    attributes: OrderAttributes,
    net_sales: f64,
    cost_rate: f64,
    target_factor: f64,
) -> OrderRecord {
    let financials: Financials = Financials::derive(&PricingInputs {
        unit_price: net_sales,
        quantity: 1,
        discount: 0.0,
        cost_rate,
        target_factor,
    });
    OrderRecord::new(attributes, financials)
}

/// An order with default attributes, a 50% margin and target met exactly.
pub fn create_test_order(order_id: &str, date: Date, net_sales: f64) -> OrderRecord {
    create_order(create_test_attributes(order_id, date), net_sales, 0.5, 1.0)
}

/// Recomputes lifetime values over a fixture set.
pub fn finalize(mut records: Vec<OrderRecord>) -> Vec<OrderRecord> {
    assign_lifetime_values(&mut records);
    records
}

/// A small mixed record set spanning regions, categories, segments and reps.
///
/// | order | date       | customer  | net | profit | margin | region | rep           |
/// |-------|------------|-----------|-----|--------|--------|--------|---------------|
/// | 1     | 2022-01-05 | CUST_1001 | 100 | 50     | 50     | North  | Alice Johnson |
/// | 2     | 2022-01-05 | CUST_1002 | 250 | 75     | 30     | South  | Bob Smith     |
/// | 3     | 2022-01-07 | CUST_1001 | 50  | 5      | 10     | South  | Bob Smith     |
/// | 4     | 2022-01-09 | CUST_1003 | 400 | 200    | 50     | West   | Carol Davis   |
pub fn create_mixed_orders() -> Vec<OrderRecord> {
    let a: OrderRecord = create_order(
        OrderAttributes {
            customer_id: String::from("CUST_1001"),
            ..create_test_attributes("ORD_00001", date!(2022 - 01 - 05))
        },
        100.0,
        0.5,
        1.0,
    );

    let b: OrderRecord = create_order(
        OrderAttributes {
            customer_id: String::from("CUST_1002"),
            region: Region::South,
            product_category: ProductCategory::Books,
            product_name: String::from("Fiction"),
            customer_segment: CustomerSegment::Individual,
            sales_rep: String::from("Bob Smith"),
            ..create_test_attributes("ORD_00002", date!(2022 - 01 - 05))
        },
        250.0,
        0.7,
        1.0,
    );

    let c: OrderRecord = create_order(
        OrderAttributes {
            customer_id: String::from("CUST_1001"),
            region: Region::South,
            customer_segment: CustomerSegment::SmallBusiness,
            sales_rep: String::from("Bob Smith"),
            ..create_test_attributes("ORD_00003", date!(2022 - 01 - 07))
        },
        50.0,
        0.9,
        1.0,
    );

    let d: OrderRecord = create_order(
        OrderAttributes {
            customer_id: String::from("CUST_1003"),
            region: Region::West,
            product_category: ProductCategory::Sports,
            product_name: String::from("Gym Equipment"),
            customer_segment: CustomerSegment::Enterprise,
            sales_rep: String::from("Carol Davis"),
            ..create_test_attributes("ORD_00004", date!(2022 - 01 - 09))
        },
        400.0,
        0.5,
        1.0 / 0.9,
    );

    finalize(vec![a, b, c, d])
}

/// A generated January dataset (seed 42, 100 records).
pub fn create_january_dataset() -> Dataset {
    let config: GeneratorConfig =
        GeneratorConfig::new(42, 100, date!(2022 - 01 - 01), date!(2022 - 01 - 31));
    generate_dataset(&config).expect("January configuration generates")
}

pub fn total_net_sales(records: &[OrderRecord]) -> f64 {
    records.iter().map(OrderRecord::net_sales).sum()
}
