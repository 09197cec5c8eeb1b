use leptos::prelude::*;
use search_core::slots::available_slots;

use crate::components::empty_state::EmptyState;
use crate::utils::clock;

/// Half-hour slot picker for `date`; today's past hours are left out.
#[component]
pub fn TimeSlotSelect<F>(
    date: Signal<String>,
    value: Signal<String>,
    on_change: F,
    label: &'static str,
) -> impl IntoView
where
    F: Fn(String) + 'static + Copy + Send + Sync,
{
    let slots = Memo::new(move |_| available_slots(&date.get(), clock::now()));

    view! {
        <div class="search-field time-slot-select">
            <label class="search-field__label">{label}</label>
            {move || {
                let slots = slots.get();
                if slots.is_empty() {
                    view! {
                        <EmptyState message="Nessun orario disponibile per questa data".to_string()/>
                    }.into_any()
                } else {
                    view! {
                        <select
                            class="search-field__input"
                            prop:value=move || value.get()
                            on:change=move |ev| on_change(event_target_value(&ev))
                        >
                            <option value="">"Qualsiasi orario"</option>
                            {slots.into_iter().map(|slot| {
                                let label = slot.clone();
                                view! { <option value=slot>{label}</option> }
                            }).collect_view()}
                        </select>
                    }.into_any()
                }
            }}
        </div>
    }
}
