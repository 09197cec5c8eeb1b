use leptos::prelude::*;
use search_core::showcase::{StepCycle, STEPPER_INTERVAL};

const STEPS: [(&str, &str); 4] = [
    ("Scegli il servizio", "Ristorante, B&B, club, NCC o deposito bagagli."),
    ("Indica dove e quando", "Città, data e orario: ti suggeriamo noi le località."),
    ("Confronta le offerte", "Prezzi chiari e recensioni verificate."),
    ("Prenota e goditela", "Conferma immediata, nessun costo nascosto."),
];

/// Explainer that walks through the booking steps on its own; clicking a
/// step jumps there and restarts the timer.
#[component]
pub fn HowItWorks() -> impl IntoView {
    let steps = RwSignal::new(StepCycle::new(STEPS.len()));
    let timer = StoredValue::new(None::<IntervalHandle>);

    let start = move || {
        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
        match set_interval_with_handle(move || steps.update(|s| s.advance()), STEPPER_INTERVAL) {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(_) => leptos::logging::warn!("stepper: could not start timer"),
        }
    };

    Effect::new(move |_| start());

    on_cleanup(move || {
        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
    });

    view! {
        <section class="how-it-works">
            <h2 class="section-title">"Come funziona"</h2>
            <ol class="how-it-works__steps">
                {STEPS.iter().enumerate().map(|(idx, (title, body))| {
                    view! {
                        <li
                            class="how-it-works__step"
                            class:active=move || steps.get().current() == idx
                            on:click=move |_| {
                                steps.update(|s| s.select(idx));
                                start();
                            }
                        >
                            <span class="how-it-works__number">{idx + 1}</span>
                            <div>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        </li>
                    }
                }).collect_view()}
            </ol>
            <div class="how-it-works__progress">
                <div
                    class="how-it-works__bar"
                    style=move || format!(
                        "width: {}%;",
                        (steps.get().current() + 1) * 100 / STEPS.len()
                    )
                ></div>
            </div>
        </section>
    }
}
