use std::sync::OnceLock;

use search_core::{geo::BUNDLED_DATASET, LocationIndex};

static LOCATION_INDEX: OnceLock<LocationIndex> = OnceLock::new();

/// City index shared by every autocomplete on the page, built on first use.
pub fn location_index() -> &'static LocationIndex {
    LOCATION_INDEX.get_or_init(|| LocationIndex::from_json(BUNDLED_DATASET))
}
