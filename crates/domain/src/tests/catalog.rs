// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CustomerSegment, DomainError, ProductCategory, Region, SALES_REPS, is_known_sales_rep};
use std::collections::HashSet;

#[test]
fn test_every_category_has_five_products() {
    for category in ProductCategory::ALL {
        assert_eq!(category.products().len(), 5, "{category}");
    }
}

#[test]
fn test_product_names_are_unique_across_categories() {
    let names: HashSet<&str> = ProductCategory::ALL
        .iter()
        .flat_map(|c| c.products().iter().copied())
        .collect();
    assert_eq!(names.len(), 30);
}

#[test]
fn test_price_distributions_match_catalog() {
    let electronics = ProductCategory::Electronics.price_distribution();
    assert_eq!(electronics.mean, 300.0);
    assert_eq!(electronics.std_dev, 100.0);

    let books = ProductCategory::Books.price_distribution();
    assert_eq!(books.mean, 25.0);
    assert_eq!(books.std_dev, 10.0);
}

#[test]
fn test_category_parse_round_trips_labels() {
    for category in ProductCategory::ALL {
        assert_eq!(category.as_str().parse::<ProductCategory>(), Ok(category));
    }
    assert_eq!(
        "home & garden".parse::<ProductCategory>(),
        Ok(ProductCategory::HomeAndGarden)
    );
}

#[test]
fn test_unknown_category_is_rejected() {
    assert_eq!(
        "Groceries".parse::<ProductCategory>(),
        Err(DomainError::UnknownCategory(String::from("Groceries")))
    );
}

#[test]
fn test_region_parse_and_order() {
    assert_eq!(" north ".parse::<Region>(), Ok(Region::North));
    assert!(matches!(
        "Atlantis".parse::<Region>(),
        Err(DomainError::UnknownRegion(_))
    ));

    let mut sorted: Vec<Region> = Region::ALL.to_vec();
    sorted.sort();
    let labels: Vec<&str> = sorted.iter().map(Region::as_str).collect();
    assert_eq!(labels, vec!["Central", "East", "North", "South", "West"]);
}

#[test]
fn test_segment_weights_sum_to_one() {
    let total: f64 = CustomerSegment::ALL
        .iter()
        .map(CustomerSegment::sampling_weight)
        .sum();
    assert!((total - 1.0).abs() < 1e-12);
    assert_eq!(CustomerSegment::SmallBusiness.sampling_weight(), 0.4);
}

#[test]
fn test_segment_labels() {
    assert_eq!(CustomerSegment::SmallBusiness.to_string(), "Small Business");
    assert_eq!(
        "small business".parse::<CustomerSegment>(),
        Ok(CustomerSegment::SmallBusiness)
    );
}

#[test]
fn test_sales_roster() {
    assert_eq!(SALES_REPS.len(), 10);
    assert!(is_known_sales_rep("Grace Lee"));
    assert!(!is_known_sales_rep("grace lee"));
}
