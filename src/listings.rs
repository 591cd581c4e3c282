use crate::models::{Listing, ListingKind, ListingStatus};
use crate::wizard::{ListingWizard, WizardAction, WizardOutcome};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingTab {
    #[default]
    All,
    Sale,
    Rent,
}

impl ListingTab {
    fn admits(&self, kind: ListingKind) -> bool {
        match self {
            ListingTab::All => true,
            ListingTab::Sale => kind == ListingKind::Sale,
            ListingTab::Rent => kind == ListingKind::Rent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListingStats {
    pub total: usize,
    pub active: usize,
    pub total_views: u64,
    pub for_sale: usize,
}

/// The "My listings" page: existing listings, listings published this
/// session and the create-listing wizard.
#[derive(Debug, Clone)]
pub struct ListingBoard {
    existing: Vec<Listing>,
    published: Vec<Listing>,
    tab: ListingTab,
    search: String,
    wizard: ListingWizard,
}

impl ListingBoard {
    pub fn new(existing: Vec<Listing>) -> Self {
        Self {
            existing,
            published: Vec::new(),
            tab: ListingTab::All,
            search: String::new(),
            wizard: ListingWizard::new(),
        }
    }

    pub fn wizard(&self) -> &ListingWizard {
        &self.wizard
    }

    /// Existing listings followed by this session's, newest first
    pub fn all(&self) -> impl Iterator<Item = &Listing> {
        self.existing.iter().chain(self.published.iter())
    }

    pub fn set_tab(&mut self, tab: ListingTab) {
        self.tab = tab;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Listings matching the tab and the title/location search
    pub fn visible(&self) -> Vec<&Listing> {
        let needle = self.search.to_lowercase();
        self.all()
            .filter(|l| self.tab.admits(l.kind))
            .filter(|l| {
                l.title.to_lowercase().contains(&needle) || l.location.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn stats(&self) -> ListingStats {
        ListingStats {
            total: self.all().count(),
            active: self.all().filter(|l| l.status == ListingStatus::Active).count(),
            total_views: self.all().map(|l| u64::from(l.views)).sum(),
            for_sale: self.all().filter(|l| l.kind == ListingKind::Sale).count(),
        }
    }

    pub fn dispatch(&mut self, action: WizardAction) -> Option<&'static str> {
        self.dispatch_at(action, Utc::now())
    }

    /// Forward an action to the wizard; a published listing goes to the
    /// front of this session's listings and its notice is returned.
    pub fn dispatch_at(&mut self, action: WizardAction, now: DateTime<Utc>) -> Option<&'static str> {
        match self.wizard.dispatch_at(action, now) {
            WizardOutcome::Published { listing, notice } => {
                self.published.insert(0, listing);
                Some(notice)
            }
            _ => None,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn seeded(
    id: &str,
    title: &str,
    kind: ListingKind,
    price: i64,
    location: &str,
    rooms: (u32, f32, u32),
    status: ListingStatus,
    views: u32,
    created: (i32, u32, u32),
) -> Listing {
    let (bedrooms, bathrooms, area) = rooms;
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        price,
        location: location.to_string(),
        bedrooms,
        bathrooms,
        area,
        image: crate::wizard::draft::PLACEHOLDER_IMAGE.to_string(),
        status,
        views,
        created_at: NaiveDate::from_ymd_opt(created.0, created.1, created.2).unwrap_or_default(),
    }
}

/// Listings the account already owns
pub fn sample_listings() -> Vec<Listing> {
    vec![
        seeded(
            "1",
            "Modern 3-Bedroom Villa in Gaborone",
            ListingKind::Sale,
            2_500_000,
            "Gaborone, Botswana",
            (3, 2.0, 180),
            ListingStatus::Active,
            156,
            (2024, 1, 15),
        ),
        seeded(
            "2",
            "Cozy 2-Bedroom Apartment",
            ListingKind::Rent,
            8500,
            "Francistown, Botswana",
            (2, 1.0, 95),
            ListingStatus::Rented,
            89,
            (2024, 1, 10),
        ),
        seeded(
            "3",
            "Luxury 4-Bedroom House",
            ListingKind::Sale,
            3_800_000,
            "Maun, Botswana",
            (4, 3.0, 220),
            ListingStatus::Pending,
            234,
            (2024, 1, 5),
        ),
        seeded(
            "4",
            "Studio Apartment in City Center",
            ListingKind::Rent,
            6500,
            "Gaborone, Botswana",
            (1, 1.0, 45),
            ListingStatus::Active,
            67,
            (2024, 1, 1),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::DraftField;
    use chrono::TimeZone;

    fn publish(board: &mut ListingBoard, title: &str, now: DateTime<Utc>) {
        board.dispatch_at(WizardAction::Open, now);
        board.dispatch_at(WizardAction::SetField(DraftField::Title(title.into())), now);
        for _ in 0..6 {
            board.dispatch_at(WizardAction::GoNext, now);
        }
        assert!(board.dispatch_at(WizardAction::Publish, now).is_some());
    }

    #[test]
    fn seeded_stats() {
        let board = ListingBoard::new(sample_listings());
        let stats = board.stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.total_views, 546);
        assert_eq!(stats.for_sale, 2);
    }

    #[test]
    fn published_listings_are_prepended() {
        let mut board = ListingBoard::new(sample_listings());
        publish(&mut board, "First", Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap());
        publish(&mut board, "Second", Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap());

        let titles: Vec<_> = board.all().skip(4).map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
        assert_eq!(board.stats().active, 4);
        assert!(!board.wizard().is_open());
    }

    #[test]
    fn tab_and_search_filter() {
        let mut board = ListingBoard::new(sample_listings());
        board.set_tab(ListingTab::Rent);
        assert_eq!(board.visible().len(), 2);

        board.set_search("gaborone");
        let visible = board.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "4");

        board.set_tab(ListingTab::All);
        board.set_search("VILLA");
        assert_eq!(board.visible()[0].id, "1");
    }
}
