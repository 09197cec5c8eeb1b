use leptos::html::Div;
use leptos::prelude::*;
use search_core::showcase::{Carousel, CAROUSEL_FRAME, CAROUSEL_STEP_PX};

#[derive(Clone, Copy)]
struct ServiceCard {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const SERVICES: [ServiceCard; 6] = [
    ServiceCard {
        icon: "🍝",
        title: "Trattorie e osterie",
        blurb: "Cucina di casa nei quartieri che contano",
    },
    ServiceCard {
        icon: "🌅",
        title: "B&B con vista",
        blurb: "Colazione inclusa e padroni di casa del posto",
    },
    ServiceCard {
        icon: "🍸",
        title: "Club e lounge",
        blurb: "Liste, tavoli e serate in un tocco",
    },
    ServiceCard {
        icon: "🚘",
        title: "NCC con autista",
        blurb: "Transfer da aeroporti, stazioni e porti",
    },
    ServiceCard {
        icon: "🧳",
        title: "Deposito bagagli",
        blurb: "Mani libere tra check-out e partenza",
    },
    ServiceCard {
        icon: "🍕",
        title: "Pizzerie",
        blurb: "Dal forno a legna alla pala romana",
    },
];

fn cards() -> impl IntoView {
    SERVICES
        .iter()
        .map(|card| {
            view! {
                <article class="carousel__card">
                    <span class="carousel__icon">{card.icon}</span>
                    <h3>{card.title}</h3>
                    <p>{card.blurb}</p>
                </article>
            }
        })
        .collect_view()
}

/// Endless strip of service cards. The cards are rendered twice so the
/// offset can wrap at half the track width without a visible jump.
#[component]
pub fn ServicesCarousel() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::default());
    let track = NodeRef::<Div>::new();
    let timer = StoredValue::new(None::<IntervalHandle>);

    Effect::new(move |_| {
        let tick = move || {
            let strip_width = track
                .get_untracked()
                .map(|el| f64::from(el.scroll_width()) / 2.0)
                .unwrap_or_default();
            carousel.update(|c| c.tick(CAROUSEL_STEP_PX, strip_width));
        };
        match set_interval_with_handle(tick, CAROUSEL_FRAME) {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(_) => leptos::logging::warn!("carousel: could not start animation timer"),
        }
    });

    on_cleanup(move || {
        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
    });

    view! {
        <section class="carousel">
            <h2 class="section-title">"Cosa puoi prenotare"</h2>
            <div
                class="carousel__viewport"
                on:mouseenter=move |_| carousel.update(|c| c.pause())
                on:mouseleave=move |_| carousel.update(|c| c.resume())
                on:touchstart=move |_| carousel.update(|c| c.pause())
                on:touchend=move |_| carousel.update(|c| c.resume())
            >
                <div
                    class="carousel__track"
                    node_ref=track
                    style=move || format!("transform: translateX(-{:.1}px);", carousel.get().offset())
                >
                    {cards()}
                    {cards()}
                </div>
            </div>
        </section>
    }
}
