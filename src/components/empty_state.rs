//! Empty State Component
//!
//! Placeholder for lists with nothing to show, with an optional action.

use leptos::prelude::*;

#[component]
pub fn EmptyState(
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(optional, into)] action_label: String,
    #[prop(optional, into)] on_action: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <span class="empty-state-icon">{icon}</span>
            <h3 class="empty-state-title">{title}</h3>
            <p class="empty-state-text">{description}</p>
            {on_action.map(|cb| view! {
                <button class="btn btn-primary" on:click=move |_| cb.run(())>
                    {action_label}
                </button>
            })}
        </div>
    }
}
