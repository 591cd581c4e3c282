//! Seven-step create-listing wizard driven by [`WizardAction`]s.

pub mod draft;

pub use draft::{Contact, ContactRole, DraftField, LeaseDuration, ListingDraft, Photo};

use crate::models::{Listing, ListingKind};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

pub const PUBLISHED_NOTICE: &str = "Congratulations! You published your listing and it will be posted shortly. \
Renters will start contacting you soon. Once you find a renter, deactivate the listing. \
The listing will automatically expire after one month, but you can extend if you need more time.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    BasicInfo,
    Location,
    PropertyDetails,
    PricingAndLease,
    AmenitiesAndPhotos,
    Contact,
    Preview,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::BasicInfo,
        Step::Location,
        Step::PropertyDetails,
        Step::PricingAndLease,
        Step::AmenitiesAndPhotos,
        Step::Contact,
        Step::Preview,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::BasicInfo => "Basic Info",
            Step::Location => "Location",
            Step::PropertyDetails => "Property Details",
            Step::PricingAndLease => "Pricing & Lease",
            Step::AmenitiesAndPhotos => "Amenities & Photos",
            Step::Contact => "Contact",
            Step::Preview => "Preview",
        }
    }

    /// Following step, staying put on the last one
    pub fn next(&self) -> Step {
        Step::ALL[(self.index() + 1).min(Step::ALL.len() - 1)]
    }

    /// Preceding step, staying put on the first one
    pub fn previous(&self) -> Step {
        Step::ALL[self.index().saturating_sub(1)]
    }
}

/// Inputs shown on the pricing step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingField {
    MonthlyRent,
    SecurityDeposit,
    AvailableDate,
    LeaseDuration,
    LeaseDescription,
    SalePrice,
}

pub fn pricing_fields(kind: ListingKind) -> &'static [PricingField] {
    match kind {
        ListingKind::Rent => &[
            PricingField::MonthlyRent,
            PricingField::SecurityDeposit,
            PricingField::AvailableDate,
            PricingField::LeaseDuration,
            PricingField::LeaseDescription,
        ],
        ListingKind::Sale => &[PricingField::SalePrice],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    Open,
    /// Cancel: discard the draft and close
    Close,
    SetField(DraftField),
    EditAmenityInput(String),
    /// Add the pending amenity input
    AddAmenity,
    RemoveAmenity(String),
    AddPhotos(Vec<Photo>),
    GoNext,
    GoBack,
    Publish,
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardOutcome {
    Unchanged,
    Updated,
    Published { listing: Listing, notice: &'static str },
}

#[derive(Debug, Clone, Default)]
pub struct ListingWizard {
    open: bool,
    step: Step,
    draft: ListingDraft,
    amenity_input: String,
}

impl ListingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub fn amenity_input(&self) -> &str {
        &self.amenity_input
    }

    pub fn can_go_back(&self) -> bool {
        self.step != Step::BasicInfo
    }

    pub fn can_publish(&self) -> bool {
        self.open && self.step == Step::Preview
    }

    pub fn pricing_fields(&self) -> &'static [PricingField] {
        pricing_fields(self.draft.listing_kind)
    }

    pub fn dispatch(&mut self, action: WizardAction) -> WizardOutcome {
        self.dispatch_at(action, Utc::now())
    }

    /// Apply one action. `now` stamps the id and date of a published listing.
    pub fn dispatch_at(&mut self, action: WizardAction, now: DateTime<Utc>) -> WizardOutcome {
        if !self.open && action != WizardAction::Open {
            debug!(?action, "Wizard closed, ignoring action");
            return WizardOutcome::Unchanged;
        }

        match action {
            WizardAction::Open => {
                if self.open {
                    return WizardOutcome::Unchanged;
                }
                self.open = true;
                WizardOutcome::Updated
            }
            WizardAction::Close => {
                self.clear();
                self.open = false;
                WizardOutcome::Updated
            }
            WizardAction::Reset => {
                self.clear();
                WizardOutcome::Updated
            }
            WizardAction::SetField(field) => {
                self.draft.set(field);
                WizardOutcome::Updated
            }
            WizardAction::EditAmenityInput(text) => {
                self.amenity_input = text;
                WizardOutcome::Updated
            }
            WizardAction::AddAmenity => {
                if self.amenity_input.trim().is_empty() {
                    return WizardOutcome::Unchanged;
                }
                self.draft.add_amenity(&self.amenity_input);
                self.amenity_input.clear();
                WizardOutcome::Updated
            }
            WizardAction::RemoveAmenity(amenity) => {
                if self.draft.remove_amenity(&amenity) {
                    WizardOutcome::Updated
                } else {
                    WizardOutcome::Unchanged
                }
            }
            WizardAction::AddPhotos(photos) => {
                if photos.is_empty() {
                    return WizardOutcome::Unchanged;
                }
                self.draft.add_photos(photos);
                WizardOutcome::Updated
            }
            WizardAction::GoNext => self.move_to(self.step.next()),
            WizardAction::GoBack => self.move_to(self.step.previous()),
            WizardAction::Publish => self.publish(now),
        }
    }

    fn move_to(&mut self, step: Step) -> WizardOutcome {
        if step == self.step {
            return WizardOutcome::Unchanged;
        }
        debug!(from = self.step.title(), to = step.title(), "Wizard step");
        self.step = step;
        WizardOutcome::Updated
    }

    fn publish(&mut self, now: DateTime<Utc>) -> WizardOutcome {
        if self.step != Step::Preview {
            debug!(step = self.step.title(), "Publish only allowed from preview");
            return WizardOutcome::Unchanged;
        }

        let listing = self.draft.finalize(now);
        info!(id = %listing.id, title = %listing.title, "Published listing");

        self.clear();
        self.open = false;

        WizardOutcome::Published {
            listing,
            notice: PUBLISHED_NOTICE,
        }
    }

    fn clear(&mut self) {
        self.step = Step::BasicInfo;
        self.draft = ListingDraft::default();
        self.amenity_input.clear();
    }
}
