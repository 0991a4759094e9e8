// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed lookup tables for the synthetic sales catalog.
//!
//! Categories, products, regions, segments and the sales roster never change
//! at runtime. Enum variants are declared in label order so the derived `Ord`
//! sorts alphabetically; the `ALL` constants keep the sampling order.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The fixed roster of sales representatives.
pub const SALES_REPS: [&str; 10] = [
    "Alice Johnson",
    "Bob Smith",
    "Carol Davis",
    "David Brown",
    "Eva Wilson",
    "Frank Miller",
    "Grace Lee",
    "Henry Taylor",
    "Iris Chen",
    "Jack Wilson",
];

/// Returns whether `name` is on the sales roster.
#[must_use]
pub fn is_known_sales_rep(name: &str) -> bool {
    SALES_REPS.contains(&name)
}

/// Mean and standard deviation of a category's base unit price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceDistribution {
    /// Mean base price.
    pub mean: f64,
    /// Standard deviation of the base price.
    pub std_dev: f64,
}

/// A product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    /// Books.
    Books,
    /// Clothing.
    Clothing,
    /// Electronics.
    Electronics,
    /// Health & Beauty.
    #[serde(rename = "Health & Beauty")]
    HealthAndBeauty,
    /// Home & Garden.
    #[serde(rename = "Home & Garden")]
    HomeAndGarden,
    /// Sports.
    Sports,
}

impl ProductCategory {
    /// All categories in sampling order.
    pub const ALL: [Self; 6] = [
        Self::Electronics,
        Self::Clothing,
        Self::HomeAndGarden,
        Self::Sports,
        Self::Books,
        Self::HealthAndBeauty,
    ];

    /// Converts this category to its display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Books => "Books",
            Self::Clothing => "Clothing",
            Self::Electronics => "Electronics",
            Self::HealthAndBeauty => "Health & Beauty",
            Self::HomeAndGarden => "Home & Garden",
            Self::Sports => "Sports",
        }
    }

    /// Returns the products sold under this category.
    #[must_use]
    pub const fn products(&self) -> &'static [&'static str] {
        match self {
            Self::Electronics => &[
                "Smartphone",
                "Laptop",
                "Tablet",
                "Headphones",
                "Smart Watch",
            ],
            Self::Clothing => &["T-Shirt", "Jeans", "Dress", "Jacket", "Shoes"],
            Self::HomeAndGarden => &[
                "Furniture",
                "Kitchen Appliance",
                "Garden Tools",
                "Home Decor",
                "Lighting",
            ],
            Self::Sports => &[
                "Running Shoes",
                "Gym Equipment",
                "Sports Apparel",
                "Outdoor Gear",
                "Fitness Tracker",
            ],
            Self::Books => &[
                "Fiction",
                "Non-Fiction",
                "Educational",
                "Children Books",
                "E-Books",
            ],
            Self::HealthAndBeauty => &[
                "Skincare",
                "Makeup",
                "Supplements",
                "Personal Care",
                "Fragrances",
            ],
        }
    }

    /// Returns the base unit price distribution for this category.
    #[must_use]
    pub const fn price_distribution(&self) -> PriceDistribution {
        let (mean, std_dev): (f64, f64) = match self {
            Self::Electronics => (300.0, 100.0),
            Self::Clothing => (50.0, 20.0),
            Self::HomeAndGarden => (150.0, 50.0),
            Self::Sports => (80.0, 30.0),
            Self::Books => (25.0, 10.0),
            Self::HealthAndBeauty => (40.0, 15.0),
        };
        PriceDistribution { mean, std_dev }
    }
}

impl FromStr for ProductCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sales region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Central region.
    Central,
    /// East region.
    East,
    /// North region.
    North,
    /// South region.
    South,
    /// West region.
    West,
}

impl Region {
    /// All regions in sampling order.
    pub const ALL: [Self; 5] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Central,
    ];

    /// Converts this region to its display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Central => "Central",
            Self::East => "East",
            Self::North => "North",
            Self::South => "South",
            Self::West => "West",
        }
    }
}

impl FromStr for Region {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownRegion(s.to_string()))
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A customer segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CustomerSegment {
    /// Large organisations.
    Enterprise,
    /// Private buyers.
    Individual,
    /// Small and medium businesses.
    #[serde(rename = "Small Business")]
    SmallBusiness,
}

impl CustomerSegment {
    /// All segments in sampling order.
    pub const ALL: [Self; 3] = [Self::Enterprise, Self::SmallBusiness, Self::Individual];

    /// Converts this segment to its display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enterprise => "Enterprise",
            Self::Individual => "Individual",
            Self::SmallBusiness => "Small Business",
        }
    }

    /// Probability of drawing this segment for a generated order.
    ///
    /// The weights over `ALL` sum to 1.
    #[must_use]
    pub const fn sampling_weight(&self) -> f64 {
        match self {
            Self::Enterprise | Self::Individual => 0.3,
            Self::SmallBusiness => 0.4,
        }
    }
}

impl FromStr for CustomerSegment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|seg| seg.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownSegment(s.to_string()))
    }
}

impl std::fmt::Display for CustomerSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
