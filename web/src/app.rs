use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use search_core::{CategoryId, SiteConfig};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::views::{home::HomePage, not_found::NotFoundPage, search_results::SearchResultsPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="it">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Built once per app instance; components only ever read it.
    let config = SiteConfig::default();
    let palette = config.theme.to_css_vars();
    let title = format!("{} | {}", config.brand_name, config.tagline);
    let description = config.tagline.clone();
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/web.css"/>
        <Title text=title/>
        <Meta name="description" content=description/>

        <ConfigProvider>
            <Router>
                <main class="site" style=palette>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route
                            path=StaticSegment(CategoryId::Restaurant.slug())
                            view=|| view! { <SearchResultsPage category=CategoryId::Restaurant/> }
                        />
                        <Route
                            path=StaticSegment(CategoryId::BedAndBreakfast.slug())
                            view=|| view! { <SearchResultsPage category=CategoryId::BedAndBreakfast/> }
                        />
                        <Route
                            path=StaticSegment(CategoryId::Club.slug())
                            view=|| view! { <SearchResultsPage category=CategoryId::Club/> }
                        />
                        <Route
                            path=StaticSegment(CategoryId::Transfer.slug())
                            view=|| view! { <SearchResultsPage category=CategoryId::Transfer/> }
                        />
                        <Route
                            path=StaticSegment(CategoryId::Luggage.slug())
                            view=|| view! { <SearchResultsPage category=CategoryId::Luggage/> }
                        />
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}
