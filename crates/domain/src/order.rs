// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The order record and its financial derivation.

use crate::calendar::{CalendarFields, iso_date, quarter_label};
use crate::catalog::{CustomerSegment, ProductCategory, Region};
use serde::Serialize;
use time::Date;

/// Lowest unit price an order may carry.
pub const UNIT_PRICE_FLOOR: f64 = 10.0;

/// Upper bound (exclusive) of the discount rate.
pub const MAX_DISCOUNT: f64 = 0.15;

/// Rounds a monetary amount to cents.
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sampled inputs from which every financial column is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingInputs {
    /// Unit price after seasonality, before the floor is applied.
    pub unit_price: f64,
    /// Units ordered.
    pub quantity: u8,
    /// Discount rate in `[0, 0.15)`.
    pub discount: f64,
    /// Share of gross sales consumed by cost, in `[0.4, 0.7)`.
    pub cost_rate: f64,
    /// Multiplier applied to net sales to obtain the sales target.
    pub target_factor: f64,
}

/// Financial columns of an order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Financials {
    /// Unit price, floored at [`UNIT_PRICE_FLOOR`].
    pub unit_price: f64,
    /// Units ordered.
    pub quantity: u8,
    /// `unit_price * quantity`.
    pub gross_sales: f64,
    /// Discount rate.
    pub discount: f64,
    /// `gross_sales * (1 - discount)`.
    pub net_sales: f64,
    /// `gross_sales * cost_rate`.
    pub cost: f64,
    /// `net_sales - cost`.
    pub profit: f64,
    /// `profit / gross_sales * 100`.
    pub profit_margin: f64,
    /// `net_sales * target_factor`.
    pub sales_target: f64,
    /// `net_sales / sales_target * 100`.
    pub target_achievement: f64,
}

impl Financials {
    /// Derives every financial column from the sampled inputs.
    ///
    /// Monetary amounts and the margin are rounded to two decimals as they
    /// are derived. The discount keeps full precision so it stays below
    /// [`MAX_DISCOUNT`].
    #[must_use]
    pub fn derive(inputs: &PricingInputs) -> Self {
        let unit_price: f64 = round_cents(inputs.unit_price.max(UNIT_PRICE_FLOOR));
        let gross_sales: f64 = round_cents(unit_price * f64::from(inputs.quantity));
        let net_sales: f64 = round_cents(gross_sales * (1.0 - inputs.discount));
        let cost: f64 = round_cents(gross_sales * inputs.cost_rate);
        let profit: f64 = round_cents(net_sales - cost);
        let profit_margin: f64 = if gross_sales > 0.0 {
            round_cents(profit / gross_sales * 100.0)
        } else {
            0.0
        };
        let sales_target: f64 = net_sales * inputs.target_factor;
        let target_achievement: f64 = if sales_target > 0.0 {
            net_sales / sales_target * 100.0
        } else {
            0.0
        };

        Self {
            unit_price,
            quantity: inputs.quantity,
            gross_sales,
            discount: inputs.discount,
            net_sales,
            cost,
            profit,
            profit_margin,
            sales_target,
            target_achievement,
        }
    }
}

/// Categorical attributes of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderAttributes {
    /// Unique order identifier, e.g. `ORD_00001`.
    pub order_id: String,
    /// Order date.
    pub date: Date,
    /// Customer identifier, e.g. `CUST_1234`.
    pub customer_id: String,
    /// Customer segment.
    pub customer_segment: CustomerSegment,
    /// Product category.
    pub product_category: ProductCategory,
    /// Product name drawn from the category's product list.
    pub product_name: String,
    /// Sales region.
    pub region: Region,
    /// Sales representative.
    pub sales_rep: String,
}

/// A single order in the sales table.
///
/// Records are built through [`OrderRecord::new`] and are read-only
/// afterwards. `customer_lifetime_value` is derived from the whole record
/// set and can only be set through [`crate::assign_lifetime_values`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRecord {
    /// Unique order identifier.
    order_id: String,
    /// Order date.
    #[serde(with = "iso_date")]
    date: Date,
    /// Customer identifier.
    customer_id: String,
    /// Customer segment.
    customer_segment: CustomerSegment,
    /// Product category.
    product_category: ProductCategory,
    /// Product name.
    product_name: String,
    /// Sales region.
    region: Region,
    /// Sales representative.
    sales_rep: String,
    /// Unit price.
    unit_price: f64,
    /// Units ordered (1-9).
    quantity: u8,
    /// Gross sales.
    gross_sales: f64,
    /// Discount rate.
    discount: f64,
    /// Net sales.
    net_sales: f64,
    /// Cost of goods.
    cost: f64,
    /// Profit.
    profit: f64,
    /// Profit margin in percent.
    profit_margin: f64,
    /// Sales target.
    sales_target: f64,
    /// Target achievement in percent.
    target_achievement: f64,
    pub(crate) customer_lifetime_value: f64,
}

impl OrderRecord {
    /// Assembles a record from its attributes and financials.
    ///
    /// The lifetime value starts as the order's own net sales, which is
    /// correct for a customer with a single order.
    #[must_use]
    pub fn new(attributes: OrderAttributes, financials: Financials) -> Self {
        let OrderAttributes {
            order_id,
            date,
            customer_id,
            customer_segment,
            product_category,
            product_name,
            region,
            sales_rep,
        } = attributes;

        Self {
            order_id,
            date,
            customer_id,
            customer_segment,
            product_category,
            product_name,
            region,
            sales_rep,
            unit_price: financials.unit_price,
            quantity: financials.quantity,
            gross_sales: financials.gross_sales,
            discount: financials.discount,
            net_sales: financials.net_sales,
            cost: financials.cost,
            profit: financials.profit,
            profit_margin: financials.profit_margin,
            sales_target: financials.sales_target,
            target_achievement: financials.target_achievement,
            customer_lifetime_value: financials.net_sales,
        }
    }

    /// Returns the order identifier.
    #[must_use]
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// Returns the order date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns the customer identifier.
    #[must_use]
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    #[must_use]
    pub const fn customer_segment(&self) -> CustomerSegment {
        self.customer_segment
    }

    #[must_use]
    pub const fn product_category(&self) -> ProductCategory {
        self.product_category
    }

    #[must_use]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn sales_rep(&self) -> &str {
        &self.sales_rep
    }

    /// Returns the unit price after the floor.
    #[must_use]
    pub const fn unit_price(&self) -> f64 {
        self.unit_price
    }

    #[must_use]
    pub const fn quantity(&self) -> u8 {
        self.quantity
    }

    #[must_use]
    pub const fn gross_sales(&self) -> f64 {
        self.gross_sales
    }

    /// Returns the discount rate.
    #[must_use]
    pub const fn discount(&self) -> f64 {
        self.discount
    }

    #[must_use]
    pub const fn net_sales(&self) -> f64 {
        self.net_sales
    }

    #[must_use]
    pub const fn cost(&self) -> f64 {
        self.cost
    }

    #[must_use]
    pub const fn profit(&self) -> f64 {
        self.profit
    }

    /// Returns the profit margin in percent.
    #[must_use]
    pub const fn profit_margin(&self) -> f64 {
        self.profit_margin
    }

    #[must_use]
    pub const fn sales_target(&self) -> f64 {
        self.sales_target
    }

    /// Returns net sales as a percentage of the sales target.
    #[must_use]
    pub const fn target_achievement(&self) -> f64 {
        self.target_achievement
    }

    /// Returns the sum of net sales across every order of this customer.
    #[must_use]
    pub const fn customer_lifetime_value(&self) -> f64 {
        self.customer_lifetime_value
    }

    /// Returns the calendar columns derived from the order date.
    #[must_use]
    pub fn calendar(&self) -> CalendarFields {
        CalendarFields::from_date(self.date)
    }

    /// Returns the quarter label of the order date.
    #[must_use]
    pub const fn quarter(&self) -> &'static str {
        quarter_label(self.date.month())
    }
}
