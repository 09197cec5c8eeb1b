use leptos::prelude::*;
use search_core::SiteConfig;

use crate::components::{HowItWorks, Navbar, SearchWidget, ServicesCarousel};

const FEATURES: [(&str, &str, &str); 4] = [
    ("✅", "Conferma immediata", "Disponibilità reale, niente attese."),
    ("💶", "Prezzi trasparenti", "Quello che vedi è quello che paghi."),
    ("⭐", "Recensioni verificate", "Solo da chi ha prenotato davvero."),
    ("🤝", "Partner locali", "Attività scelte una per una sul territorio."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <Navbar/>
        <div class="homepage">
            <header class="hero">
                <h1 class="hero__title">"Prenota il meglio della tua città"</h1>
                <p class="hero__subtitle">{config.tagline.clone()}</p>
                <SearchWidget/>
            </header>

            <ServicesCarousel/>
            <HowItWorks/>

            <section class="features">
                <h2 class="section-title">"Perché prenotare con noi"</h2>
                <div class="features__grid">
                    {FEATURES.iter().map(|(icon, title, body)| view! {
                        <div class="features__item">
                            <span class="features__icon">{*icon}</span>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="partner-cta">
                <h2>"Hai un'attività?"</h2>
                <p>"Ristoranti, strutture, locali, autisti e depositi: raggiungi chi visita la tua zona."</p>
                <a class="partner-cta__button" href=format!("mailto:{}", config.support_email)>
                    "Diventa partner"
                </a>
            </section>
        </div>
        <Footer/>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <footer class="footer">
            <span class="footer__brand">{config.brand_name}</span>
            <a class="footer__contact" href=format!("mailto:{}", config.support_email)>
                {config.support_email.clone()}
            </a>
        </footer>
    }
}
