use crate::models::{Listing, ListingKind, ListingStatus, PropertyType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const UNTITLED: &str = "Untitled Listing";
pub const LOCATION_HIDDEN: &str = "Location hidden";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LeaseDuration {
    #[serde(rename = "1_month")]
    OneMonth,
    #[serde(rename = "6_months")]
    SixMonths,
    #[serde(rename = "1_year")]
    OneYear,
    #[serde(rename = "rent_to_own")]
    RentToOwn,
    #[serde(rename = "sublet")]
    Sublet,
    #[default]
    #[serde(rename = "na")]
    NotApplicable,
}

impl LeaseDuration {
    pub fn label(&self) -> &'static str {
        match self {
            LeaseDuration::OneMonth => "1 month",
            LeaseDuration::SixMonths => "6 months",
            LeaseDuration::OneYear => "1 year",
            LeaseDuration::RentToOwn => "Rent to own",
            LeaseDuration::Sublet => "Sublet/temporary",
            LeaseDuration::NotApplicable => "N/A",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactRole {
    #[default]
    Owner,
    Company,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Contact {
    pub role: ContactRole,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A locally chosen image; never uploaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Photo {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Everything collected by the create-listing wizard.
///
/// Only one pricing path counts at publish time: `monthly_rent` for rentals,
/// `sale_price` for sales. The other is kept but ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft {
    pub title: String,
    pub street_address: String,
    pub plot_number: String,
    pub property_type: Option<PropertyType>,
    pub listing_kind: ListingKind,
    pub year_built: Option<i32>,
    pub square_footage: Option<u32>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f32>,
    pub description: String,
    pub upgrades: String,
    pub show_address: bool,
    pub monthly_rent: Option<i64>,
    pub sale_price: Option<i64>,
    pub charge_security_deposit: bool,
    pub security_deposit_amount: Option<i64>,
    pub available_date: Option<NaiveDate>,
    pub lease_duration: LeaseDuration,
    pub lease_description: String,
    pub amenities: BTreeSet<String>,
    pub photos: Vec<Photo>,
    pub contact: Contact,
    pub allow_phone: bool,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            street_address: String::new(),
            plot_number: String::new(),
            property_type: None,
            listing_kind: ListingKind::Rent,
            year_built: None,
            square_footage: None,
            bedrooms: None,
            bathrooms: None,
            description: String::new(),
            upgrades: String::new(),
            show_address: true,
            monthly_rent: None,
            sale_price: None,
            charge_security_deposit: false,
            security_deposit_amount: None,
            available_date: None,
            lease_duration: LeaseDuration::NotApplicable,
            lease_description: String::new(),
            amenities: BTreeSet::new(),
            photos: Vec::new(),
            contact: Contact::default(),
            allow_phone: true,
        }
    }
}

/// A single field edit
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    Title(String),
    StreetAddress(String),
    PlotNumber(String),
    PropertyType(Option<PropertyType>),
    ListingKind(ListingKind),
    YearBuilt(Option<i32>),
    SquareFootage(Option<u32>),
    Bedrooms(Option<u32>),
    Bathrooms(Option<f32>),
    Description(String),
    Upgrades(String),
    ShowAddress(bool),
    MonthlyRent(Option<i64>),
    SalePrice(Option<i64>),
    ChargeSecurityDeposit(bool),
    SecurityDepositAmount(Option<i64>),
    AvailableDate(Option<NaiveDate>),
    LeaseDuration(LeaseDuration),
    LeaseDescription(String),
    ContactRole(ContactRole),
    ContactName(String),
    ContactEmail(String),
    ContactPhone(String),
    AllowPhone(bool),
}

impl ListingDraft {
    pub fn set(&mut self, field: DraftField) {
        match field {
            DraftField::Title(v) => self.title = v,
            DraftField::StreetAddress(v) => self.street_address = v,
            DraftField::PlotNumber(v) => self.plot_number = v,
            DraftField::PropertyType(v) => self.property_type = v,
            DraftField::ListingKind(v) => self.listing_kind = v,
            DraftField::YearBuilt(v) => self.year_built = v,
            DraftField::SquareFootage(v) => self.square_footage = v,
            DraftField::Bedrooms(v) => self.bedrooms = v,
            DraftField::Bathrooms(v) => self.bathrooms = v,
            DraftField::Description(v) => self.description = v,
            DraftField::Upgrades(v) => self.upgrades = v,
            DraftField::ShowAddress(v) => self.show_address = v,
            DraftField::MonthlyRent(v) => self.monthly_rent = v,
            DraftField::SalePrice(v) => self.sale_price = v,
            DraftField::ChargeSecurityDeposit(v) => {
                self.charge_security_deposit = v;
                if !v {
                    self.security_deposit_amount = None;
                }
            }
            DraftField::SecurityDepositAmount(v) => self.security_deposit_amount = v,
            DraftField::AvailableDate(v) => self.available_date = v,
            DraftField::LeaseDuration(v) => self.lease_duration = v,
            DraftField::LeaseDescription(v) => self.lease_description = v,
            DraftField::ContactRole(v) => self.contact.role = v,
            DraftField::ContactName(v) => self.contact.name = v,
            DraftField::ContactEmail(v) => self.contact.email = v,
            DraftField::ContactPhone(v) => self.contact.phone = v,
            DraftField::AllowPhone(v) => self.allow_phone = v,
        }
    }

    /// Insert a trimmed amenity. Returns false for blank or duplicate input.
    pub fn add_amenity(&mut self, raw: &str) -> bool {
        let amenity = raw.trim();
        if amenity.is_empty() {
            return false;
        }
        self.amenities.insert(amenity.to_string())
    }

    pub fn remove_amenity(&mut self, amenity: &str) -> bool {
        self.amenities.remove(amenity)
    }

    pub fn add_photos(&mut self, photos: impl IntoIterator<Item = Photo>) {
        self.photos.extend(photos);
    }

    /// Price on the active pricing path
    pub fn asking_price(&self) -> i64 {
        match self.listing_kind {
            ListingKind::Rent => self.monthly_rent.unwrap_or(0),
            ListingKind::Sale => self.sale_price.unwrap_or(0),
        }
    }

    /// Stored location string. `show_address` does not affect it.
    pub fn location_label(&self) -> String {
        if self.street_address.is_empty() {
            return LOCATION_HIDDEN.to_string();
        }
        if self.plot_number.is_empty() {
            self.street_address.clone()
        } else {
            format!("{} (Plot {})", self.street_address, self.plot_number)
        }
    }

    /// Address line shown on the preview step
    pub fn address_preview(&self) -> String {
        let mut line = if self.street_address.is_empty() {
            "—".to_string()
        } else {
            self.street_address.clone()
        };
        if !self.plot_number.is_empty() {
            line.push_str(&format!(" (Plot {})", self.plot_number));
        }
        if !self.show_address {
            line.push_str(" (hidden)");
        }
        line
    }

    /// Build the published listing. Missing numbers become 0 and a blank
    /// title becomes "Untitled Listing".
    pub fn finalize(&self, now: DateTime<Utc>) -> Listing {
        let title = if self.title.is_empty() {
            UNTITLED.to_string()
        } else {
            self.title.clone()
        };

        Listing {
            id: now.timestamp_millis().to_string(),
            title,
            kind: self.listing_kind,
            price: self.asking_price(),
            location: self.location_label(),
            bedrooms: self.bedrooms.unwrap_or(0),
            bathrooms: self.bathrooms.unwrap_or(0.0),
            area: self.square_footage.unwrap_or(0),
            image: PLACEHOLDER_IMAGE.to_string(),
            status: ListingStatus::Active,
            views: 0,
            created_at: now.date_naive(),
        }
    }
}
