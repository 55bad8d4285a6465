//! Auth Guard
//!
//! Wraps screens that need a signed-in user. While the session is still
//! hydrating it shows the page loader instead of flashing the login
//! screen at someone who is about to be recognized.

use leptos::prelude::*;

use crate::components::PageLoading;
use crate::context::{AppContext, Screen};
use crate::session::{use_session, SessionStoreFields};

#[component]
pub fn Protected(wants: Screen, children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        {move || {
            if session.loading().get() {
                view! { <PageLoading /> }.into_any()
            } else if session.token().get().is_some() {
                children().into_any()
            } else {
                view! { <RedirectToLogin wants=wants /> }.into_any()
            }
        }}
    }
}

/// Remembers the blocked destination, then swaps to the login screen
#[component]
fn RedirectToLogin(wants: Screen) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    Effect::new(move |_| {
        ctx.defer_until_login(wants);
    });

    view! { <PageLoading /> }
}
