use leptos::prelude::*;
use leptos_router::components::A;
use search_core::{SiteConfig, SEARCH_CATEGORIES};

#[component]
pub fn Navbar() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        {config.brand_name}
                    </A>
                </div>

                <div class="navbar__links">
                    {SEARCH_CATEGORIES.iter().map(|category| view! {
                        <A href=category.route attr:class="navbar__link">
                            {category.label}
                        </A>
                    }).collect_view()}
                    <a href=format!("mailto:{}", config.support_email) class="navbar__link navbar__link--cta">
                        "Diventa partner"
                    </a>
                </div>
            </div>
        </nav>
    }
}
