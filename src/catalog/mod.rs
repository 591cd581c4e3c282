pub mod json;
pub mod pipeline;
pub mod sample;
pub mod traits;
pub mod types;
pub mod view;

pub use json::JsonFileRepository;
pub use pipeline::Page;
pub use sample::SampleRepository;
pub use traits::PropertyRepository;
pub use types::{suggest_locations, FilterCriteria, PriceRange, SortKey, StatusFilter, DEFAULT_PAGE_SIZE, LOCATIONS};
pub use view::PropertyCollectionView;
