// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Dataset, GeneratorConfig, generate_dataset};
use time::macros::date;

pub fn create_january_config(seed: u64, record_count: usize) -> GeneratorConfig {
    GeneratorConfig::new(
        seed,
        record_count,
        date!(2022 - 01 - 01),
        date!(2022 - 01 - 31),
    )
}

pub fn create_test_dataset(record_count: usize) -> Dataset {
    let config: GeneratorConfig = GeneratorConfig {
        record_count,
        ..GeneratorConfig::default()
    };
    generate_dataset(&config).expect("default configuration generates")
}
