// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar helpers: demand seasonality and the derived date columns.

use time::{Date, Month};

/// Serde adapter rendering a `Date` as `YYYY-MM-DD`.
pub mod iso_date {
    use serde::Serializer;
    use time::Date;

    /// Serializes `date` through its `Display` form.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error if the string cannot be written.
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(date)
    }
}

/// Returns the price multiplier applied for orders placed in `month`.
///
/// - November and December: 1.4 (holiday season)
/// - June through August: 1.2 (summer)
/// - January and February: 0.8 (post-holiday)
/// - Otherwise: 1.0
#[must_use]
pub const fn seasonal_multiplier(month: Month) -> f64 {
    match month {
        Month::November | Month::December => 1.4,
        Month::June | Month::July | Month::August => 1.2,
        Month::January | Month::February => 0.8,
        _ => 1.0,
    }
}

/// Returns the quarter label (`"Q1"`..`"Q4"`) for `month`.
#[must_use]
pub const fn quarter_label(month: Month) -> &'static str {
    match month {
        Month::January | Month::February | Month::March => "Q1",
        Month::April | Month::May | Month::June => "Q2",
        Month::July | Month::August | Month::September => "Q3",
        Month::October | Month::November | Month::December => "Q4",
    }
}

/// Calendar columns derived from an order date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarFields {
    /// Calendar year.
    pub year: i32,
    /// Month number (1-12).
    pub month: u8,
    /// Full month name, e.g. `"January"`.
    pub month_name: String,
    /// Quarter label, e.g. `"Q1"`.
    pub quarter: &'static str,
    /// Full weekday name, e.g. `"Saturday"`.
    pub day_of_week: String,
}

impl CalendarFields {
    /// Derives the calendar columns for `date`.
    #[must_use]
    pub fn from_date(date: Date) -> Self {
        let month: Month = date.month();
        Self {
            year: date.year(),
            month: u8::from(month),
            month_name: month.to_string(),
            quarter: quarter_label(month),
            day_of_week: date.weekday().to_string(),
        }
    }
}
