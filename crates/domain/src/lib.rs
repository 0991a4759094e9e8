// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod catalog;
mod error;
mod lifetime;
mod order;
mod validation;

#[cfg(test)]
mod tests;

pub use calendar::{CalendarFields, iso_date, quarter_label, seasonal_multiplier};
pub use catalog::{
    CustomerSegment, PriceDistribution, ProductCategory, Region, SALES_REPS, is_known_sales_rep,
};
pub use error::DomainError;
pub use lifetime::{assign_lifetime_values, lifetime_totals};
pub use order::{
    Financials, MAX_DISCOUNT, OrderAttributes, OrderRecord, PricingInputs, UNIT_PRICE_FLOOR,
    round_cents,
};
pub use validation::{validate_lifetime_values, validate_order};
