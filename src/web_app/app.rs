// web_app/app.rs - Root application component
//
// Entry point for the Leptos application: meta tags, stylesheet, routing.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::CatalogPage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text="Product Data Table" />
        <Meta name="description" content="Product catalog loaded from a public REST API" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Tailwind output built by cargo-leptos
        <Stylesheet id="leptos" href="/pkg/catalog_view.css" />

        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=CatalogPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-50 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-300 mb-4">"404"</h1>
                <p class="text-xl text-slate-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors"
                >
                    "Go to Catalog"
                </a>
            </div>
        </div>
    }
}
