use crate::form::CategoryFields;
use crate::query::QueryParams;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CategoryId {
    #[default]
    Restaurant,
    BedAndBreakfast,
    Club,
    Transfer,
    Luggage,
}

impl CategoryId {
    pub fn slug(&self) -> &'static str {
        match self {
            CategoryId::Restaurant => "ristoranti",
            CategoryId::BedAndBreakfast => "bnb",
            CategoryId::Club => "club",
            CategoryId::Transfer => "ncc",
            CategoryId::Luggage => "deposito-bagagli",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        SEARCH_CATEGORIES
            .iter()
            .map(|c| c.id)
            .find(|id| id.slug() == slug)
    }

    pub fn category(&self) -> Option<&'static SearchCategory> {
        SEARCH_CATEGORIES.iter().find(|c| c.id == *self)
    }
}

/// One tab of the search widget.
pub struct SearchCategory {
    pub id: CategoryId,
    pub label: &'static str,
    pub route: &'static str,
    pub icon: &'static str,
    /// Every key `serialize` can emit, in emission order.
    pub params: &'static [&'static str],
    /// Turns the category's fields into query parameters for `route`.
    /// `None` when handed another category's fields.
    pub serialize: fn(CategoryFields<'_>) -> Option<QueryParams>,
}

impl std::fmt::Debug for SearchCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchCategory")
            .field("id", &self.id)
            .field("route", &self.route)
            .finish()
    }
}

fn restaurant_query(fields: CategoryFields<'_>) -> Option<QueryParams> {
    match fields {
        CategoryFields::Restaurant(f) => Some(f.to_query()),
        _ => None,
    }
}

fn bnb_query(fields: CategoryFields<'_>) -> Option<QueryParams> {
    match fields {
        CategoryFields::Bnb(f) => Some(f.to_query()),
        _ => None,
    }
}

fn club_query(fields: CategoryFields<'_>) -> Option<QueryParams> {
    match fields {
        CategoryFields::Club(f) => Some(f.to_query()),
        _ => None,
    }
}

fn transfer_query(fields: CategoryFields<'_>) -> Option<QueryParams> {
    match fields {
        CategoryFields::Transfer(f) => Some(f.to_query()),
        _ => None,
    }
}

fn luggage_query(fields: CategoryFields<'_>) -> Option<QueryParams> {
    match fields {
        CategoryFields::Luggage(f) => Some(f.to_query()),
        _ => None,
    }
}

/// Tab order; the first entry is active on load.
pub static SEARCH_CATEGORIES: [SearchCategory; 5] = [
    SearchCategory {
        id: CategoryId::Restaurant,
        label: "Ristoranti",
        route: "/ristoranti",
        icon: "🍽️",
        params: &["location", "date", "time", "cuisine"],
        serialize: restaurant_query,
    },
    SearchCategory {
        id: CategoryId::BedAndBreakfast,
        label: "B&B",
        route: "/bnb",
        icon: "🛏️",
        params: &["location", "checkIn", "checkOut", "guests"],
        serialize: bnb_query,
    },
    SearchCategory {
        id: CategoryId::Club,
        label: "Club",
        route: "/club",
        icon: "🎶",
        params: &["location", "eventType", "date", "guests", "table"],
        serialize: club_query,
    },
    SearchCategory {
        id: CategoryId::Transfer,
        label: "NCC",
        route: "/ncc",
        icon: "🚘",
        params: &[
            "fromCity",
            "fromAddress",
            "toCity",
            "toAddress",
            "date",
            "time",
            "passengers",
        ],
        serialize: transfer_query,
    },
    SearchCategory {
        id: CategoryId::Luggage,
        label: "Deposito bagagli",
        route: "/deposito-bagagli",
        icon: "🧳",
        params: &[
            "location", "dateFrom", "timeFrom", "dateTo", "timeTo", "bagsS", "bagsM", "bagsL",
        ],
        serialize: luggage_query,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::SearchForm;

    #[test]
    fn test_every_id_resolves() {
        for category in SEARCH_CATEGORIES.iter() {
            let found = category.id.category().map(|c| c.route);
            assert_eq!(found, Some(category.route));
            assert_eq!(CategoryId::from_slug(category.id.slug()), Some(category.id));
            assert_eq!(category.route, format!("/{}", category.id.slug()));
        }
    }

    #[test]
    fn test_first_category_is_default() {
        assert_eq!(SEARCH_CATEGORIES[0].id, CategoryId::default());
    }

    #[test]
    fn test_params_cover_full_forms() {
        let mut form = SearchForm::default();
        form.restaurant.cuisine = "Pesce".to_string();
        form.restaurant.date = "2024-06-01".to_string();
        form.restaurant.time = "13:00".to_string();
        form.bnb.check_in = "2024-06-01".to_string();
        form.bnb.check_out = "2024-06-03".to_string();
        form.club.event_type = "Aperitivo".to_string();
        form.club.date = "2024-06-01".to_string();
        form.club.table = true;
        form.transfer.date = "2024-06-01".to_string();
        form.transfer.time = "09:00".to_string();
        form.luggage.drop_off_date = "2024-06-01".to_string();
        form.luggage.drop_off_time = "10:00".to_string();
        form.luggage.pick_up_date = "2024-06-01".to_string();
        form.luggage.pick_up_time = "18:00".to_string();

        for category in SEARCH_CATEGORIES.iter() {
            let params = (category.serialize)(form.fields(category.id)).unwrap();
            let keys: Vec<&str> = params.keys().collect();
            assert_eq!(keys, category.params, "{:?}", category.id);
        }
    }

    #[test]
    fn test_serializer_rejects_other_categories() {
        let form = SearchForm::default();
        for category in SEARCH_CATEGORIES.iter() {
            for other in SEARCH_CATEGORIES.iter() {
                let fields = form.fields(other.id);
                assert_eq!(fields.id(), other.id);
                let result = (category.serialize)(fields);
                assert_eq!(result.is_some(), category.id == other.id);
            }
        }
    }

    #[test]
    fn test_unknown_slug() {
        assert_eq!(CategoryId::from_slug("hotel"), None);
    }
}
