// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deterministic synthetic order generation.
//!
//! Every record is drawn from a single `ChaCha8` stream seeded from the
//! configuration, in a fixed sampling order:
//!
//! 1. Order date, uniform over the inclusive window
//! 2. Seasonal multiplier for the date's month
//! 3. Category (uniform), then product (uniform within the category)
//! 4. Base unit price from the category's normal distribution
//! 5. Quantity in 1-9
//! 6. Cost rate in `[0.4, 0.7)`, then discount (zero with probability 0.7)
//! 7. Customer segment (weighted)
//! 8. Region and sales representative (uniform)
//! 9. Customer identifier from the configured pool
//! 10. Sales target factor in `[0.8, 1.2]`
//!
//! Identical configurations therefore produce identical datasets.

use crate::config::GeneratorConfig;
use crate::dataset::Dataset;
use crate::error::CoreError;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;
use salesdash_domain::{
    CustomerSegment, Financials, MAX_DISCOUNT, OrderAttributes, OrderRecord, PricingInputs,
    ProductCategory, Region, SALES_REPS, seasonal_multiplier,
};
use time::{Date, Duration};
use tracing::{debug, info, warn};

/// Probability that an order carries a discount.
const DISCOUNT_PROBABILITY: f64 = 0.3;

/// Generates orders for a single configuration.
pub struct SalesGenerator {
    config: GeneratorConfig,
    rng: ChaCha8Rng,
    price_distributions: Vec<Normal<f64>>,
    segment_weights: WeightedIndex<f64>,
}

impl SalesGenerator {
    /// Creates a generator for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a sampling
    /// distribution cannot be built.
    pub fn new(config: GeneratorConfig) -> Result<Self, CoreError> {
        config.validate()?;

        let price_distributions: Vec<Normal<f64>> = ProductCategory::ALL
            .iter()
            .map(|category| {
                let params = category.price_distribution();
                Normal::new(params.mean, params.std_dev).map_err(|e| CoreError::Sampling {
                    reason: format!("price distribution for {category}: {e}"),
                })
            })
            .collect::<Result<_, _>>()?;

        let segment_weights: WeightedIndex<f64> = WeightedIndex::new(
            CustomerSegment::ALL
                .iter()
                .map(CustomerSegment::sampling_weight),
        )
        .map_err(|e| CoreError::Sampling {
            reason: format!("segment weights: {e}"),
        })?;

        let rng: ChaCha8Rng = ChaCha8Rng::seed_from_u64(config.seed);

        Ok(Self {
            config,
            rng,
            price_distributions,
            segment_weights,
        })
    }

    /// Generates the full dataset, consuming the generator.
    ///
    /// # Errors
    ///
    /// Returns an error if a date falls outside the representable range or a
    /// generated record violates a domain invariant.
    pub fn generate(mut self) -> Result<Dataset, CoreError> {
        info!(
            seed = self.config.seed,
            record_count = self.config.record_count,
            start_date = %self.config.start_date,
            end_date = %self.config.end_date,
            "Generating sales dataset"
        );

        if self.config.record_count == 0 {
            warn!("Record count is zero; producing an empty dataset");
        }

        let records: Vec<OrderRecord> = (0..self.config.record_count)
            .map(|index| self.sample_order(index))
            .collect::<Result<_, _>>()?;

        let dataset: Dataset = Dataset::from_records(self.config, records)?;
        debug!(
            records = dataset.len(),
            customers = dataset.unique_customers(),
            "Sales dataset generated"
        );
        Ok(dataset)
    }

    fn sample_order(&mut self, index: usize) -> Result<OrderRecord, CoreError> {
        let date: Date = self.sample_date()?;
        let multiplier: f64 = seasonal_multiplier(date.month());

        let category_index: usize = self.rng.random_range(0..ProductCategory::ALL.len());
        let category: ProductCategory = ProductCategory::ALL[category_index];
        let product_name: &str = category
            .products()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| CoreError::Sampling {
                reason: format!("category {category} has no products"),
            })?;

        let base_price: f64 = self.price_distributions[category_index].sample(&mut self.rng);
        let quantity: u8 = self.rng.random_range(1..=9);
        let cost_rate: f64 = self.rng.random_range(0.4..0.7);
        let discount: f64 = if self.rng.random_bool(DISCOUNT_PROBABILITY) {
            self.rng.random_range(0.0..MAX_DISCOUNT)
        } else {
            0.0
        };

        let customer_segment: CustomerSegment =
            CustomerSegment::ALL[self.segment_weights.sample(&mut self.rng)];
        let region: Region = *Region::ALL
            .choose(&mut self.rng)
            .ok_or_else(|| CoreError::Sampling {
                reason: String::from("region list is empty"),
            })?;
        let sales_rep: &str = SALES_REPS
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| CoreError::Sampling {
                reason: String::from("sales roster is empty"),
            })?;

        let pool = self.config.customer_pool;
        let customer_number: u32 = self.rng.random_range(pool.first..pool.last);
        let target_factor: f64 = self.rng.random_range(0.8..=1.2);

        let attributes: OrderAttributes = OrderAttributes {
            order_id: format!("ORD_{:05}", index + 1),
            date,
            customer_id: format!("CUST_{customer_number}"),
            customer_segment,
            product_category: category,
            product_name: product_name.to_string(),
            region,
            sales_rep: sales_rep.to_string(),
        };

        let financials: Financials = Financials::derive(&PricingInputs {
            unit_price: base_price * multiplier,
            quantity,
            discount,
            cost_rate,
            target_factor,
        });

        Ok(OrderRecord::new(attributes, financials))
    }

    fn sample_date(&mut self) -> Result<Date, CoreError> {
        let offset: i64 = self.rng.random_range(0..=self.config.window_days());
        self.config
            .start_date
            .checked_add(Duration::days(offset))
            .ok_or_else(|| CoreError::InvalidConfiguration {
                reason: format!(
                    "date {} + {offset} days is out of range",
                    self.config.start_date
                ),
            })
    }
}

/// Generates the dataset described by `config`.
///
/// # Errors
///
/// Returns `CoreError::InvalidConfiguration` for an empty date window or an
/// empty customer pool, and propagates any sampling or domain failure.
pub fn generate_dataset(config: &GeneratorConfig) -> Result<Dataset, CoreError> {
    SalesGenerator::new(config.clone())?.generate()
}
