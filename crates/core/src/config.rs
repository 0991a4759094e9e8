// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Generator parameters.
//!
//! A `GeneratorConfig` fully determines the generated dataset and doubles as
//! the key of the [`crate::DatasetCache`].

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::date;

/// Half-open range `[first, last)` of numeric customer identifiers.
///
/// Customers repeat whenever the pool is small relative to the record count,
/// which is what gives lifetime values their spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerIdPool {
    /// First identifier in the pool.
    pub first: u32,
    /// One past the last identifier in the pool.
    pub last: u32,
}

impl CustomerIdPool {
    /// The four-digit pool `1000..9999`.
    pub const FOUR_DIGIT: Self = Self::new(1000, 9999);

    /// Creates a pool covering `first..last`.
    #[must_use]
    pub const fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    /// Number of distinct identifiers in the pool.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.last.saturating_sub(self.first)
    }

    /// Returns whether the pool holds no identifiers.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl Default for CustomerIdPool {
    fn default() -> Self {
        Self::FOUR_DIGIT
    }
}

/// Parameters of a synthetic dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Seed of the pseudo-random generator.
    pub seed: u64,
    /// Number of records to generate. Zero yields an empty dataset.
    pub record_count: usize,
    /// First date of the window (inclusive).
    pub start_date: Date,
    /// Last date of the window (inclusive).
    pub end_date: Date,
    /// Pool customer identifiers are drawn from.
    pub customer_pool: CustomerIdPool,
}

impl GeneratorConfig {
    /// Default seed.
    pub const DEFAULT_SEED: u64 = 42;
    /// Default number of records.
    pub const DEFAULT_RECORD_COUNT: usize = 5000;
    /// Default first date of the window.
    pub const DEFAULT_START_DATE: Date = date!(2022 - 01 - 01);
    /// Default last date of the window.
    pub const DEFAULT_END_DATE: Date = date!(2024 - 08 - 31);
    /// Largest number of records a single dataset may hold.
    pub const MAX_RECORD_COUNT: usize = 1_000_000;

    /// Creates a configuration with the default customer pool.
    #[must_use]
    pub const fn new(seed: u64, record_count: usize, start_date: Date, end_date: Date) -> Self {
        Self {
            seed,
            record_count,
            start_date,
            end_date,
            customer_pool: CustomerIdPool::FOUR_DIGIT,
        }
    }

    /// Replaces the customer identifier pool.
    #[must_use]
    pub const fn with_customer_pool(mut self, customer_pool: CustomerIdPool) -> Self {
        self.customer_pool = customer_pool;
        self
    }

    /// Number of days between the first and last date of the window.
    #[must_use]
    pub fn window_days(&self) -> i64 {
        (self.end_date - self.start_date).whole_days()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfiguration` if:
    /// - The record count exceeds [`Self::MAX_RECORD_COUNT`]
    /// - The start date is after the end date (empty window)
    /// - The customer pool is empty
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.record_count > Self::MAX_RECORD_COUNT {
            return Err(CoreError::InvalidConfiguration {
                reason: format!(
                    "record count {} exceeds the maximum of {}",
                    self.record_count,
                    Self::MAX_RECORD_COUNT
                ),
            });
        }

        if self.start_date > self.end_date {
            return Err(CoreError::InvalidConfiguration {
                reason: format!(
                    "empty date window: start {} is after end {}",
                    self.start_date, self.end_date
                ),
            });
        }

        if self.customer_pool.is_empty() {
            return Err(CoreError::InvalidConfiguration {
                reason: format!(
                    "empty customer pool {}..{}",
                    self.customer_pool.first, self.customer_pool.last
                ),
            });
        }

        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_SEED,
            Self::DEFAULT_RECORD_COUNT,
            Self::DEFAULT_START_DATE,
            Self::DEFAULT_END_DATE,
        )
    }
}
