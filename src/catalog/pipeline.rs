//! Filter, sort and paginate over a property collection.
//!
//! Every function here is pure: the same records, criteria, sort key and
//! page always produce the same [`Page`].

use crate::catalog::types::{FilterCriteria, SortKey};
use crate::models::PropertyRecord;
use serde::Serialize;
use std::cmp::Ordering;

/// One page of pipeline output
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Page {
    pub items: Vec<PropertyRecord>,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Number of records that passed the filter
    pub total_count: usize,
}

impl Page {
    /// True when nothing matched the filter
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// 1-based inclusive bounds for a "showing a-b of n" line.
    pub fn showing(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let start = self.page.saturating_sub(1) * self.page_size + 1;
        Some((start, start + self.items.len() - 1))
    }
}

pub fn matches(record: &PropertyRecord, criteria: &FilterCriteria) -> bool {
    if !criteria.status.admits(record.kind) {
        return false;
    }

    if !criteria.selected_types.is_empty()
        && !criteria.selected_types.contains(&record.kind.category())
    {
        return false;
    }

    if !criteria.location_search.is_empty() {
        let needle = criteria.location_search.to_lowercase();
        let in_city = record.location.city.to_lowercase().contains(&needle);
        let in_address = record.address.to_lowercase().contains(&needle);
        if !in_city && !in_address {
            return false;
        }
    }

    criteria.price_range.contains(record.price)
}

pub fn filter<'a>(records: &'a [PropertyRecord], criteria: &FilterCriteria) -> Vec<&'a PropertyRecord> {
    records.iter().filter(|r| matches(r, criteria)).collect()
}

/// Stable sort; `Relevance` leaves the order untouched.
pub fn sort(records: &mut [&PropertyRecord], key: SortKey) {
    match key {
        SortKey::Relevance => {}
        SortKey::PriceAsc => records.sort_by_key(|r| r.price),
        SortKey::PriceDesc => records.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => records.sort_by(|a, b| by_rating(a, b)),
    }
}

fn by_rating(a: &PropertyRecord, b: &PropertyRecord) -> Ordering {
    b.rating
        .total_cmp(&a.rating)
        .then_with(|| b.reviews.cmp(&a.reviews))
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Slice out one page. Page numbers below 1 are treated as 1; pages past
/// the end come back with no items.
pub fn paginate(records: Vec<&PropertyRecord>, page: usize, page_size: usize) -> Page {
    let page = page.max(1);
    let total_count = records.len();
    let start = (page - 1).saturating_mul(page_size);

    let items = records
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    Page {
        items,
        page,
        page_size,
        total_pages: total_pages(total_count, page_size),
        total_count,
    }
}

/// Run the whole pipeline in order: filter, sort, paginate.
pub fn run(
    records: &[PropertyRecord],
    criteria: &FilterCriteria,
    sort_key: SortKey,
    page: usize,
    page_size: usize,
) -> Page {
    let mut filtered = filter(records, criteria);
    sort(&mut filtered, sort_key);
    paginate(filtered, page, page_size)
}
