use leptos::prelude::*;
use search_core::autocomplete::{Autocomplete, Highlight};
use web_sys::KeyboardEvent;

use crate::data::location_index;

/// Text input with city suggestions drawn from the bundled location index.
///
/// Typing writes the raw text through `on_change`; picking a suggestion
/// writes its "city, region" label instead.
#[component]
pub fn LocationAutocomplete<F>(
    value: Signal<String>,
    on_change: F,
    label: &'static str,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView
where
    F: Fn(String) + 'static + Copy + Send + Sync,
{
    let state = RwSignal::new(Autocomplete::default());

    let commit = move |chosen: Option<String>| {
        if let Some(chosen) = chosen {
            on_change(chosen);
        }
    };

    let handle_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        state.update(|s| s.on_input(location_index(), &value));
        on_change(value);
    };

    let handle_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        "ArrowDown" => {
            ev.prevent_default();
            state.update(|s| s.move_highlight(Highlight::Down));
        }
        "ArrowUp" => {
            ev.prevent_default();
            state.update(|s| s.move_highlight(Highlight::Up));
        }
        "Enter" => {
            if state.with_untracked(|s| s.is_open()) {
                // Keep the surrounding form from submitting mid-selection
                ev.prevent_default();
                let mut chosen = None;
                state.update(|s| chosen = s.choose_highlighted());
                commit(chosen);
            }
        }
        "Escape" => state.update(|s| s.close()),
        _ => {}
    };

    view! {
        <div class="location-autocomplete">
            <label class="search-field__label">{label}</label>
            <input
                type="text"
                class="search-field__input"
                autocomplete="off"
                placeholder=placeholder.unwrap_or("Città")
                prop:value=move || value.get()
                on:input=handle_input
                on:keydown=handle_keydown
                on:focus=move |_| state.update(|s| s.on_focus())
                on:blur=move |_| {
                    // Delay so a mousedown on a suggestion lands first
                    set_timeout(
                        move || state.update(|s| s.on_blur()),
                        std::time::Duration::from_millis(150),
                    );
                }
            />

            {move || state.with(|s| s.is_open()).then(|| {
                let suggestions = state.with(|s| s.suggestions().to_vec());
                view! {
                    <ul class="location-autocomplete__list" role="listbox">
                        {suggestions.into_iter().enumerate().map(|(idx, record)| {
                            view! {
                                <li
                                    class="location-autocomplete__item"
                                    class:selected=move || state.with(|s| s.highlighted() == idx)
                                    on:mousedown=move |ev| {
                                        ev.prevent_default();
                                        let mut chosen = None;
                                        state.update(|s| chosen = s.choose(idx));
                                        commit(chosen);
                                    }
                                >
                                    <span class="location-autocomplete__icon">"📍"</span>
                                    <span class="location-autocomplete__label">{record.display_label}</span>
                                    <span class="location-autocomplete__province">{record.province}</span>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }
            })}
        </div>
    }
}
