use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a property is offered for rent or for sale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    #[default]
    Rent,
    Sale,
}

impl ListingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::Rent => "rent",
            ListingKind::Sale => "sale",
        }
    }

    /// Category used by the property-type filter.
    ///
    /// Catalog records carry no real category yet, so rentals count as
    /// apartments and sales as houses.
    pub fn category(&self) -> PropertyType {
        match self {
            ListingKind::Rent => PropertyType::Apartment,
            ListingKind::Sale => PropertyType::House,
        }
    }
}

/// Kind of building or land being listed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Townhouse,
    Duplex,
    Plot,
    Other,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Townhouse,
        PropertyType::Duplex,
        PropertyType::Plot,
        PropertyType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Duplex => "Duplex",
            PropertyType::Plot => "Plot/Land",
            PropertyType::Other => "Other",
        }
    }
}

/// Location information for a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub city: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Location {
    pub fn city(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }
}

/// A property shown in the public catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: String,
    pub title: String,
    pub price: i64,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    pub address: String,
    pub location: Location,
    pub bedrooms: u32,
    pub bathrooms: f32,
    pub area: u32,
    pub images: Vec<String>,
    pub rating: f32,
    pub reviews: u32,
    pub added_date: NaiveDate,
}

/// Publication state of a listing owned by the current user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Pending,
    Sold,
    Rented,
}

impl ListingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::Active => "Active",
            ListingStatus::Pending => "Pending",
            ListingStatus::Sold => "Sold",
            ListingStatus::Rented => "Rented",
        }
    }
}

/// A listing created by the current user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    pub price: i64,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: f32,
    pub area: u32,
    pub image: String,
    pub status: ListingStatus,
    pub views: u32,
    pub created_at: NaiveDate,
}

/// A user account as kept by the user record store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Format a price in Pula, with a monthly suffix for rentals.
pub fn format_price(price: i64, kind: ListingKind) -> String {
    let amount = group_thousands(price);
    match kind {
        ListingKind::Rent => format!("P{}/month", amount),
        ListingKind::Sale => format!("P{}", amount),
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rent_and_sale_prices() {
        assert_eq!(format_price(8500, ListingKind::Rent), "P8,500/month");
        assert_eq!(format_price(2_500_000, ListingKind::Sale), "P2,500,000");
        assert_eq!(format_price(0, ListingKind::Sale), "P0");
        assert_eq!(format_price(950, ListingKind::Rent), "P950/month");
    }

    #[test]
    fn kind_maps_to_placeholder_category() {
        assert_eq!(ListingKind::Rent.category(), PropertyType::Apartment);
        assert_eq!(ListingKind::Sale.category(), PropertyType::House);
    }

    #[test]
    fn record_uses_wire_names() {
        let json = serde_json::json!({
            "id": "1",
            "title": "Modern Downtown Apartment",
            "price": 2500,
            "type": "rent",
            "address": "123 Main St, Downtown",
            "location": { "city": "New York", "latitude": null, "longitude": null },
            "bedrooms": 2,
            "bathrooms": 2.0,
            "area": 1200,
            "images": [],
            "rating": 4.8,
            "reviews": 24,
            "addedDate": "2024-01-15"
        });

        let record: PropertyRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.kind, ListingKind::Rent);
        assert_eq!(record.added_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }
}
