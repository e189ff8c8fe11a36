// web_app/components/common.rs - Reusable UI components
//
// Small, stateless components that receive all data via props.

use leptos::prelude::*;

/// Loading spinner component
///
/// Displays a spinner with a message below it.
#[component]
pub fn Loading(
    /// Message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-4" role="status">
            <div class="h-10 w-10 animate-spin rounded-full border-4 border-indigo-200 border-t-indigo-600"></div>
            <p class="text-lg text-slate-500">{message}</p>
        </div>
    }
}

/// Error display component
///
/// Panel with an "Error" heading and the message underneath.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-red-200 bg-red-50 px-8 py-6 text-center shadow" role="alert">
            <p class="text-lg font-medium text-red-700">"Error"</p>
            <p class="mt-1 text-red-500">{error}</p>
        </div>
    }
}

/// Badge component
///
/// A small pill for short labels.
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant)>
            {children()}
        </span>
    }
}

pub fn badge_class(variant: &str) -> &'static str {
    match variant {
        "green" => "inline-flex items-center rounded-full bg-emerald-50 px-2.5 py-0.5 text-xs font-semibold text-emerald-700",
        "indigo" => "inline-flex items-center rounded-full bg-indigo-50 px-2.5 py-0.5 text-xs font-medium text-indigo-700",
        _ => "inline-flex items-center rounded-full bg-slate-100 px-2.5 py-0.5 text-xs font-medium text-slate-700",
    }
}

/// Static star glyph
#[component]
pub fn StarIcon() -> impl IntoView {
    view! {
        <svg class="h-4 w-4 text-amber-400" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true">
            <path d="M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z"></path>
        </svg>
    }
}
