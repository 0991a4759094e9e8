// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while parsing or validating domain values.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Product category label is not one of the fixed categories.
    UnknownCategory(String),
    /// Region label is not one of the fixed regions.
    UnknownRegion(String),
    /// Customer segment label is not one of the fixed segments.
    UnknownSegment(String),
    /// Sales representative is not on the roster.
    UnknownSalesRep(String),
    /// Quantity is outside the permitted range.
    InvalidQuantity {
        /// The order identifier.
        order_id: String,
        /// The offending quantity.
        quantity: u8,
    },
    /// Unit price is below the price floor.
    InvalidUnitPrice {
        /// The order identifier.
        order_id: String,
        /// The offending unit price.
        unit_price: f64,
    },
    /// Discount rate is outside `[0, 0.15)`.
    InvalidDiscount {
        /// The order identifier.
        order_id: String,
        /// The offending discount rate.
        discount: f64,
    },
    /// Net sales exceed gross sales.
    NetExceedsGross {
        /// The order identifier.
        order_id: String,
        /// Net sales of the order.
        net_sales: f64,
        /// Gross sales of the order.
        gross_sales: f64,
    },
    /// Profit margin is zero or negative.
    NonPositiveMargin {
        /// The order identifier.
        order_id: String,
        /// The offending profit margin.
        profit_margin: f64,
    },
    /// A record's lifetime value does not match its customer's net sales total.
    InconsistentLifetimeValue {
        /// The customer identifier.
        customer_id: String,
        /// Sum of net sales across the customer's records.
        expected: f64,
        /// Lifetime value carried by the record.
        actual: f64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCategory(label) => write!(f, "Unknown product category: '{label}'"),
            Self::UnknownRegion(label) => write!(f, "Unknown region: '{label}'"),
            Self::UnknownSegment(label) => write!(f, "Unknown customer segment: '{label}'"),
            Self::UnknownSalesRep(name) => write!(f, "Unknown sales representative: '{name}'"),
            Self::InvalidQuantity { order_id, quantity } => {
                write!(
                    f,
                    "Order {order_id} has invalid quantity {quantity}. Must be between 1 and 9"
                )
            }
            Self::InvalidUnitPrice {
                order_id,
                unit_price,
            } => {
                write!(
                    f,
                    "Order {order_id} has unit price {unit_price} below the floor of 10"
                )
            }
            Self::InvalidDiscount { order_id, discount } => {
                write!(
                    f,
                    "Order {order_id} has discount {discount} outside [0, 0.15)"
                )
            }
            Self::NetExceedsGross {
                order_id,
                net_sales,
                gross_sales,
            } => {
                write!(
                    f,
                    "Order {order_id} has net sales {net_sales} above gross sales {gross_sales}"
                )
            }
            Self::NonPositiveMargin {
                order_id,
                profit_margin,
            } => {
                write!(
                    f,
                    "Order {order_id} has non-positive profit margin {profit_margin}"
                )
            }
            Self::InconsistentLifetimeValue {
                customer_id,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Customer {customer_id} carries lifetime value {actual}, expected {expected}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
