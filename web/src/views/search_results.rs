use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_query_map};
use search_core::{slots::display_date, CategoryId};

use crate::components::{empty_state::EmptyState, Navbar};

fn param_label(key: &str) -> &'static str {
    match key {
        "location" => "Località",
        "cuisine" => "Cucina",
        "date" => "Data",
        "time" => "Ora",
        "checkIn" => "Check-in",
        "checkOut" => "Check-out",
        "guests" => "Ospiti",
        "eventType" => "Evento",
        "table" => "Tavolo",
        "fromCity" => "Partenza",
        "fromAddress" => "Indirizzo di partenza",
        "toCity" => "Arrivo",
        "toAddress" => "Indirizzo di arrivo",
        "passengers" => "Passeggeri",
        "dateFrom" => "Consegna",
        "timeFrom" => "Ora consegna",
        "dateTo" => "Ritiro",
        "timeTo" => "Ora ritiro",
        "bagsS" => "Bagagli a mano",
        "bagsM" => "Valigie medie",
        "bagsL" => "Valigie XXL",
        _ => "",
    }
}

fn display_value(key: &str, value: &str) -> String {
    match key {
        "date" | "checkIn" | "checkOut" | "dateFrom" | "dateTo" => display_date(value),
        "table" if value == "true" => "Sì".to_string(),
        _ => value.to_string(),
    }
}

/// Landing page for a submitted search. Results themselves come from the
/// booking backend; this page echoes back what was asked for.
#[component]
pub fn SearchResultsPage(category: CategoryId) -> impl IntoView {
    let query = use_query_map();
    let Some(category) = category.category() else {
        return view! { <EmptyState message="Categoria sconosciuta".to_string()/> }.into_any();
    };

    let summary = move || {
        query.with(|q| {
            category
                .params
                .iter()
                .filter_map(|key| {
                    let value = q.get(key)?;
                    if value.is_empty() {
                        return None;
                    }
                    Some((param_label(key), display_value(key, &value)))
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Navbar/>
        <div class="search-results">
            <h1 class="search-results__title">
                <span class="search-results__icon">{category.icon}</span>
                {category.label}
            </h1>
            {move || {
                let rows = summary();
                if rows.is_empty() {
                    view! {
                        <EmptyState message="Nessun criterio di ricerca indicato".to_string()/>
                    }.into_any()
                } else {
                    view! {
                        <dl class="search-results__summary">
                            {rows.into_iter().map(|(label, value)| view! {
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            }).collect_view()}
                        </dl>
                    }.into_any()
                }
            }}
            <A href="/" attr:class="search-results__back">"← Modifica ricerca"</A>
        </div>
    }
    .into_any()
}
