//! Loading Indicators
//!
//! Spinner, whole-screen loading state and the project card placeholder.

use leptos::prelude::*;

/// Spinner with an optional caption. `size` is one of "sm", "md", "lg".
#[component]
pub fn Loading(
    #[prop(default = "md")] size: &'static str,
    #[prop(optional, into)] text: String,
) -> impl IntoView {
    view! {
        <div class="loading">
            <div class=format!("spinner spinner-{}", size)></div>
            {(!text.is_empty()).then(move || view! { <p class="loading-text">{text}</p> })}
        </div>
    }
}

/// Centered loading state that fills the main area
#[component]
pub fn PageLoading() -> impl IntoView {
    view! {
        <div class="page-loading">
            <Loading size="lg" text="Loading..." />
            <p class="page-loading-hint">"Please wait a moment"</p>
        </div>
    }
}

/// Grey placeholder with the rough shape of a project card
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="card card-skeleton">
            <div class="skeleton-line skeleton-wide"></div>
            <div class="skeleton-line"></div>
            <div class="skeleton-line skeleton-narrow"></div>
        </div>
    }
}
