// web_app/components/catalog.rs - Catalog view components
//
// Everything here is driven by a CatalogState value; the page decides which
// state is current, these components only draw it.

use leptos::prelude::*;

use crate::web_app::components::common::{Badge, ErrorDisplay, Loading, StarIcon};
use crate::web_app::model::{format_price, format_rating, loaded_label, CatalogState, Product};

/// Table column headings, left to right
pub const COLUMNS: [&str; 6] = ["ID", "Title", "Price", "Category", "Description", "Rating"];

const PAGE_BACKGROUND: &str = "min-h-screen bg-gradient-to-br from-slate-50 via-white to-zinc-100";

/// Renders exactly one of the three views for the given state
#[component]
pub fn CatalogBody(state: CatalogState) -> impl IntoView {
    match state {
        CatalogState::Loading => view! { <LoadingScreen /> }.into_any(),
        CatalogState::Error(message) => view! { <ErrorScreen message=message /> }.into_any(),
        CatalogState::Loaded(products) => view! { <CatalogTable products=products /> }.into_any(),
    }
}

/// Full-page loading indicator
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class=format!("flex items-center justify-center {}", PAGE_BACKGROUND)>
            <Loading message="Loading products…" />
        </div>
    }
}

/// Full-page error panel
#[component]
pub fn ErrorScreen(message: String) -> impl IntoView {
    view! {
        <div class=format!("flex items-center justify-center {}", PAGE_BACKGROUND)>
            <ErrorDisplay error=message />
        </div>
    }
}

/// Title block with the number of loaded products
#[component]
pub fn CatalogHeader(count: usize) -> impl IntoView {
    view! {
        <div class="mb-8 flex items-center gap-4">
            <div class="inline-flex h-12 w-12 items-center justify-center rounded-xl bg-gradient-to-br from-violet-500 to-indigo-600 shadow-lg shadow-indigo-200">
                <svg
                    class="h-6 w-6 text-white"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    aria-hidden="true"
                >
                    <rect x="2" y="4" width="20" height="16" rx="2"></rect>
                    <path d="M10 4v4"></path>
                    <path d="M2 8h20"></path>
                    <path d="M6 4v4"></path>
                </svg>
            </div>
            <div>
                <h1 class="text-2xl font-bold tracking-tight text-slate-900">"Product Data Table"</h1>
                <p class="text-sm text-slate-500">{loaded_label(count)}</p>
            </div>
        </div>
    }
}

/// Product table, one row per product in the order received
#[component]
pub fn CatalogTable(products: Vec<Product>) -> impl IntoView {
    let count = products.len();

    view! {
        <div class=format!("{} p-6 md:p-10", PAGE_BACKGROUND)>
            <div class="mx-auto max-w-7xl">
                <CatalogHeader count=count />

                <div class="overflow-hidden rounded-xl border border-slate-200 bg-white shadow-sm">
                    <div class="overflow-x-auto">
                        <table class="w-full text-left text-sm">
                            <thead>
                                <tr class="border-b border-slate-200 bg-slate-50">
                                    {COLUMNS.iter().map(|column| view! {
                                        <th class="whitespace-nowrap px-6 py-4 font-semibold text-slate-700">
                                            {*column}
                                        </th>
                                    }).collect_view()}
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-slate-100">
                                <For
                                    each=move || products.clone()
                                    key=|product| product.id
                                    children=|product| view! { <ProductRow product=product /> }
                                />
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// A single table row
#[component]
pub fn ProductRow(product: Product) -> impl IntoView {
    let price = format_price(product.price);
    let (rate, count) = format_rating(&product.rating);
    let key = product.id.to_string();

    view! {
        <tr class="transition-colors hover:bg-slate-50/60" data-product-id=key>
            <td class="whitespace-nowrap px-6 py-4 font-medium text-slate-900">
                {product.id}
            </td>
            <td class="max-w-[220px] truncate px-6 py-4 font-medium text-slate-800">
                {product.title}
            </td>
            <td class="whitespace-nowrap px-6 py-4 text-slate-700">
                <Badge variant="green">{price}</Badge>
            </td>
            // Capitalized by CSS only, the label itself is untouched
            <td class="whitespace-nowrap px-6 py-4 capitalize text-slate-600">
                <Badge variant="indigo">{product.category}</Badge>
            </td>
            <td class="max-w-[320px] px-6 py-4 text-slate-600">
                <p class="line-clamp-2">{product.description}</p>
            </td>
            <td class="whitespace-nowrap px-6 py-4 text-slate-600">
                <div class="flex items-center gap-1">
                    <StarIcon />
                    <span class="font-medium">{rate}</span>
                    <span class="text-slate-400">{count}</span>
                </div>
            </td>
        </tr>
    }
}
