// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller-owned memoization of generated datasets.

use crate::config::GeneratorConfig;
use crate::dataset::Dataset;
use crate::error::CoreError;
use crate::generator::generate_dataset;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Memoizes datasets by their generator configuration.
///
/// Entries are never mutated or evicted: a changed configuration is a new
/// key and produces a freshly generated dataset.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<GeneratorConfig, Arc<Dataset>>,
}

impl DatasetCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dataset for `config`, generating it on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails. Failures are not cached.
    pub fn get_or_generate(&mut self, config: &GeneratorConfig) -> Result<Arc<Dataset>, CoreError> {
        if let Some(dataset) = self.entries.get(config) {
            debug!(seed = config.seed, "Dataset cache hit");
            return Ok(Arc::clone(dataset));
        }

        debug!(seed = config.seed, "Dataset cache miss");
        let dataset: Arc<Dataset> = Arc::new(generate_dataset(config)?);
        self.entries.insert(config.clone(), Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Returns the cached dataset for `config` without generating.
    #[must_use]
    pub fn get(&self, config: &GeneratorConfig) -> Option<Arc<Dataset>> {
        self.entries.get(config).cloned()
    }

    /// Returns the number of cached datasets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
