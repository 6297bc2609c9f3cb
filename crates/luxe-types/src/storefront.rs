//! Storefront view helpers: category chips and the category filter.
//!
//! The storefront always works on a full snapshot of the catalog, so these
//! are plain functions over a slice rather than store queries.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::item::FurnitureItem;

/// Label of the pseudo-category that disables filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Which items the storefront shows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Filter for a chip label; `"All"` disables filtering.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    pub fn matches(&self, item: &FurnitureItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Only(category) => f.write_str(category),
        }
    }
}

/// Category chips: `"All"` then each distinct category in first-seen order.
pub fn categories(items: &[FurnitureItem]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        if !out[1..].contains(&item.category) {
            out.push(item.category.clone());
        }
    }
    out
}

/// Items matching `filter`, in catalog order. Matching is exact and
/// case-sensitive.
pub fn filter_by_category<'a>(
    items: &'a [FurnitureItem],
    filter: &CategoryFilter,
) -> Vec<&'a FurnitureItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Availability badge text.
pub fn stock_label(item: &FurnitureItem) -> &'static str {
    if item.in_stock {
        "In Stock"
    } else {
        "Out of Stock"
    }
}
