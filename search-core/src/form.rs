//! Search form controller.
//!
//! Every category keeps its own typed field set for the whole page session.
//! Switching tabs only changes which one is active; nothing is reset or
//! shared. Submission performs no validation: empty always-sent fields go
//! out as empty strings and the results page deals with them.

use chrono::NaiveDateTime;

use crate::category::CategoryId;
use crate::luggage::BagCounts;
use crate::query::QueryParams;
use crate::slots;

pub const CUISINES: [&str; 8] = [
    "Italiana",
    "Pizza",
    "Pesce",
    "Carne",
    "Vegetariana",
    "Giapponese",
    "Cinese",
    "Indiana",
];

pub const EVENT_TYPES: [&str; 5] = ["Discoteca", "Aperitivo", "Live music", "Cena spettacolo", "Privé"];

pub const DEFAULT_GUESTS: u32 = 2;
pub const DEFAULT_PASSENGERS: u32 = 1;

/// Clears `time` when it is not among the slots offered for `date`.
fn drop_unavailable_time(date: &str, time: &mut String, now: NaiveDateTime) {
    if !time.is_empty() && !slots::is_available(date, time, now) {
        time.clear();
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RestaurantFields {
    pub location: String,
    pub cuisine: String,
    pub date: String,
    pub time: String,
}

impl RestaurantFields {
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("location", self.location.as_str());
        params.push_non_empty("date", &self.date);
        params.push_non_empty("time", &self.time);
        params.push_non_empty("cuisine", &self.cuisine);
        params
    }

    pub fn set_date(&mut self, date: String, now: NaiveDateTime) {
        self.date = date;
        drop_unavailable_time(&self.date, &mut self.time, now);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BnbFields {
    pub location: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
}

impl Default for BnbFields {
    fn default() -> Self {
        Self {
            location: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            guests: DEFAULT_GUESTS,
        }
    }
}

impl BnbFields {
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("location", self.location.as_str());
        params.push_non_empty("checkIn", &self.check_in);
        params.push_non_empty("checkOut", &self.check_out);
        params.push("guests", self.guests.to_string());
        params
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClubFields {
    pub location: String,
    pub event_type: String,
    pub date: String,
    pub guests: u32,
    pub table: bool,
}

impl Default for ClubFields {
    fn default() -> Self {
        Self {
            location: String::new(),
            event_type: String::new(),
            date: String::new(),
            guests: DEFAULT_GUESTS,
            table: false,
        }
    }
}

impl ClubFields {
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("location", self.location.as_str());
        params.push_non_empty("eventType", &self.event_type);
        params.push_non_empty("date", &self.date);
        params.push("guests", self.guests.to_string());
        if self.table {
            params.push("table", "true");
        }
        params
    }
}

/// Chauffeured transfer (NCC).
#[derive(Clone, Debug, PartialEq)]
pub struct TransferFields {
    pub from_city: String,
    pub from_address: String,
    pub to_city: String,
    pub to_address: String,
    pub date: String,
    pub time: String,
    pub passengers: u32,
}

impl Default for TransferFields {
    fn default() -> Self {
        Self {
            from_city: String::new(),
            from_address: String::new(),
            to_city: String::new(),
            to_address: String::new(),
            date: String::new(),
            time: String::new(),
            passengers: DEFAULT_PASSENGERS,
        }
    }
}

impl TransferFields {
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("fromCity", self.from_city.as_str());
        params.push("fromAddress", self.from_address.as_str());
        params.push("toCity", self.to_city.as_str());
        params.push("toAddress", self.to_address.as_str());
        params.push_non_empty("date", &self.date);
        params.push_non_empty("time", &self.time);
        params.push("passengers", self.passengers.to_string());
        params
    }

    pub fn set_date(&mut self, date: String, now: NaiveDateTime) {
        self.date = date;
        drop_unavailable_time(&self.date, &mut self.time, now);
    }

    /// Return trip: exchanges pick-up and destination.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from_city, &mut self.to_city);
        std::mem::swap(&mut self.from_address, &mut self.to_address);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LuggageFields {
    pub location: String,
    pub drop_off_date: String,
    pub drop_off_time: String,
    pub pick_up_date: String,
    pub pick_up_time: String,
    pub bags: BagCounts,
}

impl LuggageFields {
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("location", self.location.as_str());
        params.push_non_empty("dateFrom", &self.drop_off_date);
        params.push_non_empty("timeFrom", &self.drop_off_time);
        params.push_non_empty("dateTo", &self.pick_up_date);
        params.push_non_empty("timeTo", &self.pick_up_time);
        params.push("bagsS", self.bags.hand.to_string());
        params.push("bagsM", self.bags.medium.to_string());
        params.push("bagsL", self.bags.xxl.to_string());
        params
    }

    pub fn set_drop_off_date(&mut self, date: String, now: NaiveDateTime) {
        self.drop_off_date = date;
        drop_unavailable_time(&self.drop_off_date, &mut self.drop_off_time, now);
    }

    pub fn set_pick_up_date(&mut self, date: String, now: NaiveDateTime) {
        self.pick_up_date = date;
        drop_unavailable_time(&self.pick_up_date, &mut self.pick_up_time, now);
    }
}

/// One category's field set, borrowed from a [`SearchForm`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CategoryFields<'a> {
    Restaurant(&'a RestaurantFields),
    Bnb(&'a BnbFields),
    Club(&'a ClubFields),
    Transfer(&'a TransferFields),
    Luggage(&'a LuggageFields),
}

impl CategoryFields<'_> {
    pub fn id(&self) -> CategoryId {
        match self {
            CategoryFields::Restaurant(_) => CategoryId::Restaurant,
            CategoryFields::Bnb(_) => CategoryId::BedAndBreakfast,
            CategoryFields::Club(_) => CategoryId::Club,
            CategoryFields::Transfer(_) => CategoryId::Transfer,
            CategoryFields::Luggage(_) => CategoryId::Luggage,
        }
    }
}

/// Where a submitted search goes.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchRequest {
    pub route: String,
    pub params: QueryParams,
}

impl SearchRequest {
    pub fn to_url(&self) -> String {
        if self.params.is_empty() {
            self.route.clone()
        } else {
            format!("{}?{}", self.route, self.params.to_query_string())
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchForm {
    active: CategoryId,
    pub restaurant: RestaurantFields,
    pub bnb: BnbFields,
    pub club: ClubFields,
    pub transfer: TransferFields,
    pub luggage: LuggageFields,
}

impl SearchForm {
    pub fn active(&self) -> CategoryId {
        self.active
    }

    pub fn select(&mut self, category: CategoryId) {
        self.active = category;
    }

    pub fn is_active(&self, category: CategoryId) -> bool {
        self.active == category
    }

    pub fn fields(&self, category: CategoryId) -> CategoryFields<'_> {
        match category {
            CategoryId::Restaurant => CategoryFields::Restaurant(&self.restaurant),
            CategoryId::BedAndBreakfast => CategoryFields::Bnb(&self.bnb),
            CategoryId::Club => CategoryFields::Club(&self.club),
            CategoryId::Transfer => CategoryFields::Transfer(&self.transfer),
            CategoryId::Luggage => CategoryFields::Luggage(&self.luggage),
        }
    }

    /// Serializes the active category. `None` only if the category has no
    /// entry in the search table, in which case nothing should happen.
    pub fn submit(&self) -> Option<SearchRequest> {
        let category = self.active.category()?;
        let params = (category.serialize)(self.fields(self.active))?;
        tracing::debug!(
            route = category.route,
            params = params.len(),
            "search submitted"
        );
        Some(SearchRequest {
            route: category.route.to_string(),
            params,
        })
    }
}
