use leptos::prelude::*;
use search_core::{SearchForm, SEARCH_CATEGORIES};

#[component]
pub fn CategoryTabs(form: RwSignal<SearchForm>) -> impl IntoView {
    view! {
        <div class="category-tabs" role="tablist">
            {SEARCH_CATEGORIES.iter().map(|category| {
                let id = category.id;
                view! {
                    <button
                        type="button"
                        role="tab"
                        class="category-tabs__tab"
                        class:active=move || form.with(|f| f.is_active(id))
                        on:click=move |_| form.update(|f| f.select(id))
                    >
                        <span class="category-tabs__icon">{category.icon}</span>
                        <span class="category-tabs__label">{category.label}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
