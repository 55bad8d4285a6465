//! App Shell
//!
//! Sidebar navigation and top bar around the active screen. Only
//! rendered for signed-in users, so the user card can assume a profile
//! is present once the store has one.

use leptos::prelude::*;

use crate::context::{AppContext, Screen};
use crate::session::{self, use_session, SessionStoreFields};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_session();

    let dashboard_class = move || {
        if ctx.screen.get() == Screen::Dashboard {
            "nav-link active"
        } else {
            "nav-link"
        }
    };
    // The projects tab stays lit while a single project is open
    let projects_class = move || {
        if matches!(ctx.screen.get(), Screen::Projects | Screen::Project(_)) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    let on_sign_out = move |_| {
        session::logout(&store);
        ctx.success("You have been logged out.");
        ctx.goto(Screen::Login);
    };

    view! {
        <div class="layout">
            <aside class="sidebar">
                <div class="sidebar-brand">
                    <span class="brand-mark">"✓"</span>
                    <span class="brand-name">"TaskFlow"</span>
                </div>

                <nav class="sidebar-nav">
                    <button class=dashboard_class on:click=move |_| ctx.goto(Screen::Dashboard)>
                        <span class="nav-icon">"📊"</span>
                        "Dashboard"
                    </button>
                    <button class=projects_class on:click=move |_| ctx.goto(Screen::Projects)>
                        <span class="nav-icon">"📁"</span>
                        "Projects"
                    </button>
                </nav>

                <div class="sidebar-user">
                    {move || store.user().get().map(|user| {
                        let initials = user.initials();
                        let name = user.full_name.clone();
                        let email = user.email.clone();
                        view! {
                            <div class="user-card">
                                <span class="user-avatar">{initials}</span>
                                <div class="user-meta">
                                    <span class="user-name">{name}</span>
                                    <span class="user-email">{email}</span>
                                </div>
                            </div>
                        }
                    })}
                    <button class="sign-out-btn" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </div>
            </aside>

            <div class="layout-main">
                <header class="topbar">
                    <span class="topbar-greeting">
                        {move || {
                            store
                                .user()
                                .get()
                                .map(|u| format!("Hi, {}", u.first_name))
                                .unwrap_or_default()
                        }}
                    </span>
                </header>
                <main class="screen-content">{children()}</main>
            </div>
        </div>
    }
}
