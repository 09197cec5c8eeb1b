use leptos::prelude::*;
use search_core::{BagSize, SearchForm};

#[component]
pub fn BagCounter(form: RwSignal<SearchForm>, size: BagSize) -> impl IntoView {
    let count = move || form.with(|f| f.luggage.bags.get(size));

    view! {
        <div class="bag-counter">
            <span class="bag-counter__label">{size.label()}</span>
            <div class="bag-counter__controls">
                <button
                    type="button"
                    class="bag-counter__button"
                    disabled=move || count() == 0
                    on:click=move |_| form.update(|f| f.luggage.bags.decrement(size))
                >
                    "−"
                </button>
                <span class="bag-counter__value">{count}</span>
                <button
                    type="button"
                    class="bag-counter__button"
                    on:click=move |_| form.update(|f| f.luggage.bags.increment(size))
                >
                    "+"
                </button>
            </div>
        </div>
    }
}
