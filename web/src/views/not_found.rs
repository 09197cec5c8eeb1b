use leptos::prelude::*;
use leptos_router::components::A;
use search_core::SiteConfig;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    let config = expect_context::<SiteConfig>();

    view! {
        <div class="not-found">
            <div class="not-found__code">"404"</div>
            <h1>"Pagina non trovata"</h1>
            <p>"La pagina che cerchi non esiste o è stata spostata."</p>
            <A href="/" attr:class="not-found__home">"Torna alla home"</A>
            <p class="not-found__help">
                "Serve aiuto? Scrivi a "
                <a href=format!("mailto:{}", config.support_email)>{config.support_email.clone()}</a>
            </p>
        </div>
    }
}
