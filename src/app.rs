//! TaskFlow Frontend App
//!
//! Root component. Provides the app context and session store, hydrates
//! the session from storage, and swaps screens.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    Dashboard, Layout, Login, NoticeStrip, ProjectDetail, ProjectList, Protected, Register,
};
use crate::context::{AppContext, Notice, Screen};
use crate::session::{self, Session, SessionStore};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (screen, set_screen) = signal(Screen::Dashboard);
    let (pending_screen, set_pending_screen) = signal::<Option<Screen>>(None);
    let (notice, set_notice) = signal::<Option<Notice>>(None);

    // Provide context to all children
    provide_context(AppContext::new(
        (screen, set_screen),
        (pending_screen, set_pending_screen),
        (notice, set_notice),
    ));
    let store: SessionStore = Store::new(Session::new());
    provide_context(store);

    // Read storage once on startup
    Effect::new(move |_| {
        session::hydrate_session(&store);
    });

    view! {
        <NoticeStrip />
        {move || match screen.get() {
            Screen::Login => view! { <Login /> }.into_any(),
            Screen::Register => view! { <Register /> }.into_any(),
            Screen::Dashboard => view! {
                <Protected wants=Screen::Dashboard>
                    <Layout>
                        <Dashboard />
                    </Layout>
                </Protected>
            }.into_any(),
            Screen::Projects => view! {
                <Protected wants=Screen::Projects>
                    <Layout>
                        <ProjectList />
                    </Layout>
                </Protected>
            }.into_any(),
            Screen::Project(id) => view! {
                <Protected wants=Screen::Project(id)>
                    <Layout>
                        <ProjectDetail project_id=id />
                    </Layout>
                </Protected>
            }.into_any(),
        }}
    }
}
