// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::GeneratorConfig;
use crate::error::CoreError;
use salesdash_domain::{
    OrderRecord, assign_lifetime_values, validate_lifetime_values, validate_order,
};
use std::collections::HashSet;
use time::Date;

/// An immutable generated record set.
///
/// Records are only reachable through shared references once the dataset
/// is built, so lifetime values always match the record set.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    config: GeneratorConfig,
    records: Vec<OrderRecord>,
}

impl Dataset {
    /// Freezes `records` into a dataset.
    ///
    /// Lifetime values are recomputed over the whole set and every record is
    /// validated before the dataset is returned.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DomainViolation` if any record breaks an invariant.
    pub fn from_records(
        config: GeneratorConfig,
        mut records: Vec<OrderRecord>,
    ) -> Result<Self, CoreError> {
        assign_lifetime_values(&mut records);
        for record in &records {
            validate_order(record)?;
        }
        validate_lifetime_values(&records)?;
        Ok(Self { config, records })
    }

    /// Returns the configuration this dataset was generated from.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns the records in generation order.
    #[must_use]
    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the dataset holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of distinct customers.
    #[must_use]
    pub fn unique_customers(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.customer_id())
            .collect::<HashSet<&str>>()
            .len()
    }

    /// Returns the earliest and latest order date, if any.
    #[must_use]
    pub fn date_bounds(&self) -> Option<(Date, Date)> {
        let first: Date = self.records.iter().map(|r| r.date()).min()?;
        let last: Date = self.records.iter().map(|r| r.date()).max()?;
        Some((first, last))
    }
}
