use leptos::prelude::*;
use search_core::form::{CUISINES, EVENT_TYPES};
use search_core::{BagSize, SearchForm};

use crate::components::{
    bag_counter::BagCounter, location_autocomplete::LocationAutocomplete,
    time_slot_select::TimeSlotSelect,
};
use crate::utils::clock;

fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

#[component]
pub fn RestaurantForm(form: RwSignal<SearchForm>) -> impl IntoView {
    let location = Signal::derive(move || form.with(|f| f.restaurant.location.clone()));
    let date = Signal::derive(move || form.with(|f| f.restaurant.date.clone()));
    let time = Signal::derive(move || form.with(|f| f.restaurant.time.clone()));

    view! {
        <div class="search-form search-form--restaurant">
            <LocationAutocomplete
                label="Dove"
                value=location
                on_change=move |v: String| form.update(|f| f.restaurant.location = v)
            />
            <div class="search-field">
                <label class="search-field__label">"Cucina"</label>
                <select
                    class="search-field__input"
                    prop:value=move || form.with(|f| f.restaurant.cuisine.clone())
                    on:change=move |ev| form.update(|f| f.restaurant.cuisine = event_target_value(&ev))
                >
                    <option value="">"Tutte le cucine"</option>
                    {CUISINES.iter().map(|cuisine| view! {
                        <option value=*cuisine>{*cuisine}</option>
                    }).collect_view()}
                </select>
            </div>
            <div class="search-field">
                <label class="search-field__label">"Data"</label>
                <input
                    type="date"
                    class="search-field__input"
                    min=clock::min_start_date()
                    prop:value=move || date.get()
                    on:input=move |ev| form.update(|f| f.restaurant.set_date(event_target_value(&ev), clock::now()))
                />
            </div>
            <TimeSlotSelect
                label="Ora"
                date=date
                value=time
                on_change=move |v: String| form.update(|f| f.restaurant.time = v)
            />
        </div>
    }
}

#[component]
pub fn BnbForm(form: RwSignal<SearchForm>) -> impl IntoView {
    let location = Signal::derive(move || form.with(|f| f.bnb.location.clone()));
    let check_in = Signal::derive(move || form.with(|f| f.bnb.check_in.clone()));

    view! {
        <div class="search-form search-form--bnb">
            <LocationAutocomplete
                label="Dove"
                value=location
                on_change=move |v: String| form.update(|f| f.bnb.location = v)
            />
            <div class="search-field">
                <label class="search-field__label">"Check-in"</label>
                <input
                    type="date"
                    class="search-field__input"
                    min=clock::min_start_date()
                    prop:value=move || check_in.get()
                    on:input=move |ev| form.update(|f| f.bnb.check_in = event_target_value(&ev))
                />
            </div>
            <div class="search-field">
                <label class="search-field__label">"Check-out"</label>
                <input
                    type="date"
                    class="search-field__input"
                    min=move || clock::min_end_date(&check_in.get())
                    prop:value=move || form.with(|f| f.bnb.check_out.clone())
                    on:input=move |ev| form.update(|f| f.bnb.check_out = event_target_value(&ev))
                />
            </div>
            <div class="search-field">
                <label class="search-field__label">"Ospiti"</label>
                <input
                    type="number"
                    class="search-field__input"
                    min="1"
                    prop:value=move || form.with(|f| f.bnb.guests.to_string())
                    on:input=move |ev| {
                        if let Some(guests) = parse_count(&event_target_value(&ev)) {
                            form.update(|f| f.bnb.guests = guests);
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
pub fn ClubForm(form: RwSignal<SearchForm>) -> impl IntoView {
    let location = Signal::derive(move || form.with(|f| f.club.location.clone()));

    view! {
        <div class="search-form search-form--club">
            <LocationAutocomplete
                label="Dove"
                value=location
                on_change=move |v: String| form.update(|f| f.club.location = v)
            />
            <div class="search-field">
                <label class="search-field__label">"Evento"</label>
                <select
                    class="search-field__input"
                    prop:value=move || form.with(|f| f.club.event_type.clone())
                    on:change=move |ev| form.update(|f| f.club.event_type = event_target_value(&ev))
                >
                    <option value="">"Tutti gli eventi"</option>
                    {EVENT_TYPES.iter().map(|event| view! {
                        <option value=*event>{*event}</option>
                    }).collect_view()}
                </select>
            </div>
            <div class="search-field">
                <label class="search-field__label">"Data"</label>
                <input
                    type="date"
                    class="search-field__input"
                    min=clock::min_start_date()
                    prop:value=move || form.with(|f| f.club.date.clone())
                    on:input=move |ev| form.update(|f| f.club.date = event_target_value(&ev))
                />
            </div>
            <div class="search-field">
                <label class="search-field__label">"Persone"</label>
                <input
                    type="number"
                    class="search-field__input"
                    min="1"
                    prop:value=move || form.with(|f| f.club.guests.to_string())
                    on:input=move |ev| {
                        if let Some(guests) = parse_count(&event_target_value(&ev)) {
                            form.update(|f| f.club.guests = guests);
                        }
                    }
                />
            </div>
            <label class="search-field search-field--checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.club.table)
                    on:change=move |ev| form.update(|f| f.club.table = event_target_checked(&ev))
                />
                <span>"Prenota un tavolo"</span>
            </label>
        </div>
    }
}

#[component]
pub fn TransferForm(form: RwSignal<SearchForm>) -> impl IntoView {
    let from_city = Signal::derive(move || form.with(|f| f.transfer.from_city.clone()));
    let to_city = Signal::derive(move || form.with(|f| f.transfer.to_city.clone()));
    let date = Signal::derive(move || form.with(|f| f.transfer.date.clone()));
    let time = Signal::derive(move || form.with(|f| f.transfer.time.clone()));

    view! {
        <div class="search-form search-form--transfer">
            <div class="search-form__leg">
                <LocationAutocomplete
                    label="Partenza"
                    placeholder="Città di partenza"
                    value=from_city
                    on_change=move |v: String| form.update(|f| f.transfer.from_city = v)
                />
                <div class="search-field">
                    <label class="search-field__label">"Indirizzo"</label>
                    <input
                        type="text"
                        class="search-field__input"
                        placeholder="Via, numero civico"
                        prop:value=move || form.with(|f| f.transfer.from_address.clone())
                        on:input=move |ev| form.update(|f| f.transfer.from_address = event_target_value(&ev))
                    />
                </div>
            </div>
            <button
                type="button"
                class="search-form__swap"
                title="Inverti partenza e arrivo"
                on:click=move |_| form.update(|f| f.transfer.swap())
            >
                "⇅"
            </button>
            <div class="search-form__leg">
                <LocationAutocomplete
                    label="Arrivo"
                    placeholder="Città di arrivo"
                    value=to_city
                    on_change=move |v: String| form.update(|f| f.transfer.to_city = v)
                />
                <div class="search-field">
                    <label class="search-field__label">"Indirizzo"</label>
                    <input
                        type="text"
                        class="search-field__input"
                        placeholder="Via, numero civico"
                        prop:value=move || form.with(|f| f.transfer.to_address.clone())
                        on:input=move |ev| form.update(|f| f.transfer.to_address = event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="search-field">
                <label class="search-field__label">"Data"</label>
                <input
                    type="date"
                    class="search-field__input"
                    min=clock::min_start_date()
                    prop:value=move || date.get()
                    on:input=move |ev| form.update(|f| f.transfer.set_date(event_target_value(&ev), clock::now()))
                />
            </div>
            <TimeSlotSelect
                label="Ora"
                date=date
                value=time
                on_change=move |v: String| form.update(|f| f.transfer.time = v)
            />
            <div class="search-field">
                <label class="search-field__label">"Passeggeri"</label>
                <input
                    type="number"
                    class="search-field__input"
                    min="1"
                    prop:value=move || form.with(|f| f.transfer.passengers.to_string())
                    on:input=move |ev| {
                        if let Some(passengers) = parse_count(&event_target_value(&ev)) {
                            form.update(|f| f.transfer.passengers = passengers);
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
pub fn LuggageForm(form: RwSignal<SearchForm>) -> impl IntoView {
    let location = Signal::derive(move || form.with(|f| f.luggage.location.clone()));
    let drop_off_date = Signal::derive(move || form.with(|f| f.luggage.drop_off_date.clone()));
    let drop_off_time = Signal::derive(move || form.with(|f| f.luggage.drop_off_time.clone()));
    let pick_up_date = Signal::derive(move || form.with(|f| f.luggage.pick_up_date.clone()));
    let pick_up_time = Signal::derive(move || form.with(|f| f.luggage.pick_up_time.clone()));

    view! {
        <div class="search-form search-form--luggage">
            <LocationAutocomplete
                label="Dove"
                value=location
                on_change=move |v: String| form.update(|f| f.luggage.location = v)
            />
            <div class="search-field">
                <label class="search-field__label">"Consegna"</label>
                <input
                    type="date"
                    class="search-field__input"
                    min=clock::min_start_date()
                    prop:value=move || drop_off_date.get()
                    on:input=move |ev| form.update(|f| f.luggage.set_drop_off_date(event_target_value(&ev), clock::now()))
                />
            </div>
            <TimeSlotSelect
                label="Ora consegna"
                date=drop_off_date
                value=drop_off_time
                on_change=move |v: String| form.update(|f| f.luggage.drop_off_time = v)
            />
            <div class="search-field">
                <label class="search-field__label">"Ritiro"</label>
                <input
                    type="date"
                    class="search-field__input"
                    min=move || clock::min_end_date(&drop_off_date.get())
                    prop:value=move || pick_up_date.get()
                    on:input=move |ev| form.update(|f| f.luggage.set_pick_up_date(event_target_value(&ev), clock::now()))
                />
            </div>
            <TimeSlotSelect
                label="Ora ritiro"
                date=pick_up_date
                value=pick_up_time
                on_change=move |v: String| form.update(|f| f.luggage.pick_up_time = v)
            />
            <div class="search-form__bags">
                {BagSize::ALL.into_iter().map(|size| view! {
                    <BagCounter form size/>
                }).collect_view()}
            </div>
        </div>
    }
}
