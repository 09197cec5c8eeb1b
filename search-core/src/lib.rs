pub mod autocomplete;
pub mod category;
pub mod error;
pub mod form;
pub mod geo;
pub mod luggage;
pub mod query;
pub mod showcase;
pub mod slots;
pub mod theme;

pub use autocomplete::Autocomplete;
pub use category::{CategoryId, SearchCategory, SEARCH_CATEGORIES};
pub use error::DatasetError;
pub use form::{CategoryFields, SearchForm, SearchRequest};
pub use geo::{GeoRecord, LocationIndex, RegionEntry};
pub use luggage::{BagCounts, BagSize};
pub use query::QueryParams;
pub use theme::{SiteConfig, ThemePalette};
