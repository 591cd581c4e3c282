use crate::catalog::pipeline::{self, Page};
use crate::catalog::traits::PropertyRepository;
use crate::catalog::types::{
    suggest_locations, FilterCriteria, PriceRange, SortKey, StatusFilter, DEFAULT_PAGE_SIZE,
};
use crate::models::{PropertyRecord, PropertyType};
use anyhow::Result;
use std::collections::HashMap;
use tracing::debug;

/// Browse-page state: the loaded collection, the user's criteria, the
/// current page and one image cursor per card.
///
/// Every criteria or sort change sends the user back to page 1.
#[derive(Debug, Clone)]
pub struct PropertyCollectionView {
    records: Vec<PropertyRecord>,
    criteria: FilterCriteria,
    sort: SortKey,
    page: usize,
    page_size: usize,
    image_cursors: HashMap<String, usize>,
}

impl PropertyCollectionView {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self::with_page_size(records, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(records: Vec<PropertyRecord>, page_size: usize) -> Self {
        Self {
            records,
            criteria: FilterCriteria::default(),
            sort: SortKey::default(),
            page: 1,
            page_size: page_size.max(1),
            image_cursors: HashMap::new(),
        }
    }

    /// Load the collection from a repository.
    pub async fn mount<R: PropertyRepository + ?Sized>(repo: &R, page_size: usize) -> Result<Self> {
        let records = repo.list().await?;
        debug!(source = repo.source_name(), count = records.len(), "Mounted collection view");
        Ok(Self::with_page_size(records, page_size))
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    /// The page to display for the current state
    pub fn page(&self) -> Page {
        pipeline::run(&self.records, &self.criteria, self.sort, self.page, self.page_size)
    }

    pub fn total_pages(&self) -> usize {
        pipeline::total_pages(pipeline::filter(&self.records, &self.criteria).len(), self.page_size)
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.update_criteria(|c| c.status = status);
    }

    pub fn set_type_selected(&mut self, ty: PropertyType, selected: bool) {
        self.update_criteria(|c| {
            if selected {
                c.selected_types.insert(ty);
            } else {
                c.selected_types.remove(&ty);
            }
        });
    }

    pub fn toggle_type(&mut self, ty: PropertyType) {
        let selected = !self.criteria.selected_types.contains(&ty);
        self.set_type_selected(ty, selected);
    }

    pub fn set_location_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.update_criteria(|c| c.location_search = search);
    }

    /// Autocomplete entries for the current location search
    pub fn location_suggestions(&self) -> Vec<&'static str> {
        suggest_locations(&self.criteria.location_search)
    }

    /// Pick a suggestion; it replaces the search text.
    pub fn select_location(&mut self, location: &str) {
        let location = location.to_string();
        self.update_criteria(|c| c.location_search = location);
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.update_criteria(|c| c.price_range = range);
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.update_criteria(|c| *c = criteria);
    }

    pub fn clear_filters(&mut self) {
        self.update_criteria(|c| *c = FilterCriteria::default());
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    fn update_criteria(&mut self, change: impl FnOnce(&mut FilterCriteria)) {
        change(&mut self.criteria);
        self.page = 1;
    }

    fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.last_page());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page + 1);
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    /// Current image index for a card, 0 if never moved
    pub fn image_index(&self, record_id: &str) -> usize {
        self.image_cursors.get(record_id).copied().unwrap_or(0)
    }

    pub fn next_image(&mut self, record_id: &str) -> usize {
        self.step_image(record_id, 1)
    }

    pub fn previous_image(&mut self, record_id: &str) -> usize {
        self.step_image(record_id, -1)
    }

    fn step_image(&mut self, record_id: &str, delta: isize) -> usize {
        let count = self
            .records
            .iter()
            .find(|r| r.id == record_id)
            .map(|r| r.images.len())
            .unwrap_or(0);
        if count == 0 {
            return 0;
        }

        let current = self.image_index(record_id) as isize;
        let next = (current + delta).rem_euclid(count as isize) as usize;
        self.image_cursors.insert(record_id.to_string(), next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample::{sample_properties, SampleRepository};

    fn seven_records() -> Vec<PropertyRecord> {
        let mut records = sample_properties();
        let mut extra = records[4].clone();
        extra.id = "7".to_string();
        extra.address = "12 Side St, Downtown".to_string();
        records.push(extra);
        records
    }

    #[tokio::test]
    async fn mounts_from_repository() {
        let view = PropertyCollectionView::mount(&SampleRepository::new(), 6).await.unwrap();
        let page = view.page();
        assert_eq!(page.total_count, 6);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn criteria_change_resets_page() {
        let mut view = PropertyCollectionView::new(seven_records());
        view.go_to_page(2);
        assert_eq!(view.current_page(), 2);

        // Still 7 matches, so page 2 would exist, but the page resets anyway
        view.set_location_search("");
        assert_eq!(view.current_page(), 1);

        view.go_to_page(2);
        view.set_sort(SortKey::PriceDesc);
        assert_eq!(view.current_page(), 1);

        view.go_to_page(2);
        view.toggle_type(PropertyType::House);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn location_suggestions_follow_search() {
        let mut view = PropertyCollectionView::new(seven_records());
        assert!(view.location_suggestions().is_empty());

        view.set_location_search("gab");
        assert_eq!(view.location_suggestions(), vec!["Gaborone", "Gabane"]);

        view.set_location_search("");
        view.go_to_page(2);
        view.select_location("Gaborone");
        assert_eq!(view.criteria().location_search, "Gaborone");
        assert_eq!(view.location_suggestions(), vec!["Gaborone"]);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn page_navigation_clamps() {
        let mut view = PropertyCollectionView::new(seven_records());
        view.previous_page();
        assert_eq!(view.current_page(), 1);

        view.next_page();
        view.next_page();
        assert_eq!(view.current_page(), 2);
        assert_eq!(view.page().items.len(), 1);

        view.go_to_page(99);
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn empty_view_stays_on_page_one() {
        let mut view = PropertyCollectionView::new(sample_properties());
        view.set_location_search("nowhere at all");
        view.next_page();
        assert_eq!(view.current_page(), 1);
        assert!(view.page().is_empty());
    }

    #[test]
    fn image_cursor_wraps_both_ways() {
        let mut view = PropertyCollectionView::new(sample_properties());
        assert_eq!(view.image_index("1"), 0);
        assert_eq!(view.previous_image("1"), 2);
        assert_eq!(view.next_image("1"), 0);
        assert_eq!(view.next_image("1"), 1);
        assert_eq!(view.next_image("1"), 2);
        assert_eq!(view.next_image("1"), 0);

        // Independent per card
        assert_eq!(view.next_image("2"), 1);
        assert_eq!(view.image_index("1"), 0);
    }

    #[test]
    fn image_cursor_ignores_cards_without_images() {
        let mut view = PropertyCollectionView::new(sample_properties());
        assert_eq!(view.next_image("5"), 0);
        assert_eq!(view.previous_image("unknown"), 0);
        assert_eq!(view.next_image("3"), 0);
    }

    #[test]
    fn cursor_survives_filter_changes() {
        let mut view = PropertyCollectionView::new(sample_properties());
        view.next_image("1");
        view.set_status(StatusFilter::Sale);
        view.set_status(StatusFilter::All);
        assert_eq!(view.image_index("1"), 1);
    }

    #[test]
    fn clear_filters_restores_defaults() {
        let mut view = PropertyCollectionView::new(sample_properties());
        view.set_status(StatusFilter::Rent);
        view.set_price_range(PriceRange::new(0, 2000));
        assert_eq!(view.page().total_count, 2);

        view.clear_filters();
        assert_eq!(view.criteria(), &FilterCriteria::default());
        assert_eq!(view.page().total_count, 6);
    }
}
