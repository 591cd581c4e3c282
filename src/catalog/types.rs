use crate::models::{ListingKind, PropertyType};
use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Properties shown per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Towns offered as location suggestions
pub const LOCATIONS: [&str; 20] = [
    "Gaborone",
    "Francistown",
    "Maun",
    "Serowe",
    "Kanye",
    "Molepolole",
    "Mochudi",
    "Mahalapye",
    "Palapye",
    "Lobatse",
    "Tlokweng",
    "Ramotswa",
    "Thamaga",
    "Mogoditshane",
    "Gabane",
    "Oodi",
    "Kopong",
    "Mmopane",
    "Dikgatlhong",
    "Kgale",
];

/// Known towns whose name contains `search`, ignoring case. Nothing for an
/// empty search.
pub fn suggest_locations(search: &str) -> Vec<&'static str> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    LOCATIONS
        .iter()
        .copied()
        .filter(|town| town.to_lowercase().contains(&needle))
        .collect()
}

/// Which offer type to show
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Rent,
    Sale,
}

impl StatusFilter {
    pub fn admits(&self, kind: ListingKind) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Rent => kind == ListingKind::Rent,
            StatusFilter::Sale => kind == ListingKind::Sale,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "rent" => Ok(StatusFilter::Rent),
            "sale" => Ok(StatusFilter::Sale),
            other => bail!("unknown property status: {}", other),
        }
    }
}

/// Inclusive price bounds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

impl PriceRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: i64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: i64::MAX,
        }
    }
}

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Keep collection order
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    /// Rating, highest first, ties broken by review count
    Rating,
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relevance" => Ok(SortKey::Relevance),
            "price_asc" => Ok(SortKey::PriceAsc),
            "price_desc" => Ok(SortKey::PriceDesc),
            "rating" => Ok(SortKey::Rating),
            other => bail!("unknown sort key: {}", other),
        }
    }
}

/// User-selected filter criteria for the property catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FilterCriteria {
    /// Rent, sale or both
    pub status: StatusFilter,
    /// Empty means every type
    pub selected_types: BTreeSet<PropertyType>,
    /// Case-insensitive substring of city or address
    pub location_search: String,
    pub price_range: PriceRange,
}
