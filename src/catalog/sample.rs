use crate::catalog::traits::PropertyRepository;
use crate::models::{ListingKind, Location, PropertyRecord};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

/// Built-in catalog used when no catalog file is configured
#[derive(Debug, Clone)]
pub struct SampleRepository {
    records: Vec<PropertyRecord>,
}

impl SampleRepository {
    pub fn new() -> Self {
        Self {
            records: sample_properties(),
        }
    }

    pub fn with_records(records: Vec<PropertyRecord>) -> Self {
        Self { records }
    }
}

impl Default for SampleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertyRepository for SampleRepository {
    async fn list(&self) -> Result<Vec<PropertyRecord>> {
        info!(count = self.records.len(), "Serving sample catalog");
        Ok(self.records.clone())
    }

    fn source_name(&self) -> &'static str {
        "Sample"
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn photo(id: &str) -> String {
    format!("https://images.unsplash.com/{}?w=800&h=600&fit=crop", id)
}

/// The six showcase properties listed on the browse page
pub fn sample_properties() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord {
            id: "1".to_string(),
            title: "Modern Downtown Apartment".to_string(),
            price: 2500,
            kind: ListingKind::Rent,
            address: "123 Main St, Downtown".to_string(),
            location: Location::city("New York").with_coordinates(40.7128, -74.0060),
            bedrooms: 2,
            bathrooms: 2.0,
            area: 1200,
            images: vec![
                photo("photo-1560448204-e02f11c3d0e2"),
                photo("photo-1502672260266-1c1ef2d93688"),
                photo("photo-1512917774080-9991f1c4c750"),
            ],
            rating: 4.8,
            reviews: 24,
            added_date: date(2024, 1, 15),
        },
        PropertyRecord {
            id: "2".to_string(),
            title: "Cozy Family House".to_string(),
            price: 750_000,
            kind: ListingKind::Sale,
            address: "456 Oak Ave, Suburbs".to_string(),
            location: Location::city("Los Angeles").with_coordinates(34.0522, -118.2437),
            bedrooms: 4,
            bathrooms: 3.0,
            area: 2200,
            images: vec![
                photo("photo-1718150997685-6a20748d4973"),
                photo("photo-1564013796-729b203e9a76"),
            ],
            rating: 4.9,
            reviews: 31,
            added_date: date(2024, 1, 10),
        },
        PropertyRecord {
            id: "3".to_string(),
            title: "Luxury Waterfront Condo".to_string(),
            price: 1800,
            kind: ListingKind::Rent,
            address: "789 Harbor Blvd, Waterfront".to_string(),
            location: Location::city("Miami").with_coordinates(25.7617, -80.1918),
            bedrooms: 1,
            bathrooms: 1.0,
            area: 900,
            images: vec![photo("photo-1502672260266-1c1ef2d93688")],
            rating: 4.7,
            reviews: 18,
            added_date: date(2024, 1, 8),
        },
        PropertyRecord {
            id: "4".to_string(),
            title: "Spacious Townhouse".to_string(),
            price: 520_000,
            kind: ListingKind::Sale,
            address: "321 Pine St, Midtown".to_string(),
            location: Location::city("Chicago").with_coordinates(41.8781, -87.6298),
            bedrooms: 3,
            bathrooms: 2.5,
            area: 1800,
            images: vec![photo("photo-1512917774080-9991f1c4c750")],
            rating: 4.6,
            reviews: 22,
            added_date: date(2024, 1, 5),
        },
        PropertyRecord {
            id: "5".to_string(),
            title: "Urban Studio Loft".to_string(),
            price: 1900,
            kind: ListingKind::Rent,
            address: "567 Urban Ave, Downtown".to_string(),
            location: Location::city("San Francisco"),
            bedrooms: 1,
            bathrooms: 1.0,
            area: 750,
            images: vec![],
            rating: 4.5,
            reviews: 15,
            added_date: date(2024, 1, 3),
        },
        PropertyRecord {
            id: "6".to_string(),
            title: "Suburban Family Home".to_string(),
            price: 680_000,
            kind: ListingKind::Sale,
            address: "890 Suburban Dr, Suburbs".to_string(),
            location: Location::city("Dallas").with_coordinates(32.7767, -96.7970),
            bedrooms: 5,
            bathrooms: 4.0,
            area: 2800,
            images: vec![photo("photo-1649083048337-4aeb6dda80bb")],
            rating: 4.7,
            reviews: 28,
            added_date: date(2024, 1, 1),
        },
    ]
}
