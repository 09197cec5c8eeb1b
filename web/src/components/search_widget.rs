use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use search_core::{CategoryId, SearchForm};

use crate::components::{
    category_forms::{BnbForm, ClubForm, LuggageForm, RestaurantForm, TransferForm},
    category_tabs::CategoryTabs,
};

/// Tabbed search box. Each tab keeps its own values for the whole visit.
#[component]
pub fn SearchWidget() -> impl IntoView {
    let form = RwSignal::new(SearchForm::default());
    // Only rebuild the field set when the tab changes, not on every keystroke
    let active = Memo::new(move |_| form.with(|f| f.active()));
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(|f| f.submit()) {
            Some(request) => {
                let url = request.to_url();
                leptos::logging::log!("search: navigating to {}", url);
                navigate(&url, Default::default());
            }
            None => leptos::logging::warn!("search: active category has no route"),
        }
    };

    view! {
        <section class="search-widget">
            <CategoryTabs form/>
            <form class="search-widget__form" on:submit=on_submit>
                {move || match active.get() {
                    CategoryId::Restaurant => view! { <RestaurantForm form/> }.into_any(),
                    CategoryId::BedAndBreakfast => view! { <BnbForm form/> }.into_any(),
                    CategoryId::Club => view! { <ClubForm form/> }.into_any(),
                    CategoryId::Transfer => view! { <TransferForm form/> }.into_any(),
                    CategoryId::Luggage => view! { <LuggageForm form/> }.into_any(),
                }}
                <button type="submit" class="search-widget__submit">"Cerca"</button>
            </form>
        </section>
    }
}
