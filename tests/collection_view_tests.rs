//! Browse-page pipeline through the repository seam.

use property_desk::catalog::sample::sample_properties;
use property_desk::catalog::{
    FilterCriteria, PriceRange, PropertyCollectionView, PropertyRepository, SampleRepository, SortKey,
    StatusFilter,
};
use property_desk::models::PropertyRecord;

fn with_extra_record() -> Vec<PropertyRecord> {
    let mut records = sample_properties();
    let mut extra = records[0].clone();
    extra.id = "7".to_string();
    extra.title = "Gaborone Garden Flat".to_string();
    extra.location.city = "Gaborone".to_string();
    records.push(extra);
    records
}

#[tokio::test]
async fn rent_filter_then_price_sort() {
    let repo = SampleRepository::new();
    let criteria = FilterCriteria {
        status: StatusFilter::Rent,
        price_range: PriceRange::new(0, 1_000_000),
        ..Default::default()
    };

    let relevance = repo.query(&criteria, SortKey::Relevance, 1, 6).await.unwrap();
    let cheapest = repo.query(&criteria, SortKey::PriceAsc, 1, 6).await.unwrap();

    assert!(relevance.items.iter().all(|r| r.kind.as_str() == "rent"));
    assert_eq!(relevance.total_count, cheapest.total_count);

    let prices: Vec<i64> = cheapest.items.iter().map(|r| r.price).collect();
    assert_eq!(prices, vec![1800, 1900, 2500]);

    let mut a: Vec<_> = relevance.items.iter().map(|r| r.id.clone()).collect();
    let mut b: Vec<_> = cheapest.items.iter().map(|r| r.id.clone()).collect();
    a.sort();
    b.sort();
    assert_eq!(a, b);
}

#[tokio::test]
async fn six_fit_one_page_seven_need_two() {
    let view = PropertyCollectionView::mount(&SampleRepository::new(), 6).await.unwrap();
    assert_eq!(view.total_pages(), 1);

    let repo = SampleRepository::with_records(with_extra_record());
    let mut view = PropertyCollectionView::mount(&repo, 6).await.unwrap();
    assert_eq!(view.total_pages(), 2);

    view.go_to_page(2);
    let page = view.page();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "7");
}

#[test]
fn location_change_on_page_two_resets_to_first_page() {
    let mut view = PropertyCollectionView::new(with_extra_record());
    view.go_to_page(2);
    assert_eq!(view.current_page(), 2);

    // "a" matches every city or address, so page 2 would still exist
    view.set_location_search("a");
    assert_eq!(view.total_pages(), 2);
    assert_eq!(view.current_page(), 1);
}

#[test]
fn image_cursor_wraps() {
    let mut view = PropertyCollectionView::new(sample_properties());
    let count = 3;

    assert_eq!(view.previous_image("1"), count - 1);
    assert_eq!(view.next_image("1"), 0);
}

#[test]
fn no_match_renders_empty_state() {
    let mut view = PropertyCollectionView::new(sample_properties());
    view.set_status(StatusFilter::Sale);
    view.set_price_range(PriceRange::new(0, 100_000));
    let page = view.page();
    assert!(page.is_empty());
    assert!(page.items.is_empty());
}

#[test]
fn picking_a_suggested_town_filters_and_resets_page() {
    let mut view = PropertyCollectionView::new(with_extra_record());
    view.go_to_page(2);
    assert_eq!(view.current_page(), 2);

    view.set_location_search("gab");
    assert_eq!(view.current_page(), 1);
    let suggestions = view.location_suggestions();
    assert_eq!(suggestions, vec!["Gaborone", "Gabane"]);

    view.select_location(suggestions[0]);
    assert_eq!(view.criteria().location_search, "Gaborone");
    let page = view.page();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].id, "7");
}
