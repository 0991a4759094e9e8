// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CustomerSegment, Financials, OrderAttributes, OrderRecord, PricingInputs, ProductCategory,
    Region,
};
use time::macros::date;

pub fn create_test_inputs() -> PricingInputs {
    PricingInputs {
        unit_price: 100.0,
        quantity: 2,
        discount: 0.1,
        cost_rate: 0.5,
        target_factor: 1.0,
    }
}

pub fn create_test_attributes(order_id: &str, customer_id: &str) -> OrderAttributes {
    OrderAttributes {
        order_id: String::from(order_id),
        date: date!(2022 - 03 - 15),
        customer_id: String::from(customer_id),
        customer_segment: CustomerSegment::Enterprise,
        product_category: ProductCategory::Electronics,
        product_name: String::from("Laptop"),
        region: Region::North,
        sales_rep: String::from("Alice Johnson"),
    }
}

pub fn create_test_order(order_id: &str, customer_id: &str, unit_price: f64) -> OrderRecord {
    let inputs: PricingInputs = PricingInputs {
        unit_price,
        ..create_test_inputs()
    };
    OrderRecord::new(
        create_test_attributes(order_id, customer_id),
        Financials::derive(&inputs),
    )
}

pub fn create_test_financials() -> Financials {
    Financials::derive(&create_test_inputs())
}

/// Builds an order from hand-adjusted financials, bypassing derivation.
pub fn create_order_with_financials(financials: Financials) -> OrderRecord {
    OrderRecord::new(create_test_attributes("ORD_00001", "CUST_1000"), financials)
}
