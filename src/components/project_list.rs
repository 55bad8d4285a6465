//! Project List Screen
//!
//! Every project in a grid, with client-side search over titles and
//! descriptions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{CardSkeleton, EmptyState, Modal, ProjectCard, ProjectForm};
use crate::context::{AppContext, Screen};
use crate::filter::filter_projects;
use crate::models::{Project, ProjectRequest};

#[component]
pub fn ProjectList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (loading, set_loading) = signal(true);
    let (query, set_query) = signal(String::new());
    let (show_create, set_show_create) = signal(false);
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_projects().await {
                Ok(loaded) => set_projects.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(&format!("[PROJECTS] {}", err).into());
                    ctx.error("Failed to fetch projects");
                }
            }
            set_loading.set(false);
        });
    });

    let on_create = Callback::new(move |req: ProjectRequest| {
        set_submitting.set(true);
        spawn_local(async move {
            match api::create_project(&req).await {
                Ok(project) => {
                    set_projects.update(|list| list.insert(0, project));
                    set_show_create.set(false);
                    ctx.success("Project created successfully!");
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[PROJECTS] {}", err).into());
                    ctx.error("Failed to create project");
                }
            }
            set_submitting.set(false);
        });
    });

    let visible = move || filter_projects(&projects.get(), &query.get());
    let on_open = Callback::new(move |id: i64| ctx.goto(Screen::Project(id)));

    view! {
        <div class="project-list">
            <div class="section-header">
                <div>
                    <h1>"Projects"</h1>
                    <p>
                        {move || {
                            let n = projects.get().len();
                            format!("{} project{} total", n, if n == 1 { "" } else { "s" })
                        }}
                    </p>
                </div>
                <button class="btn btn-primary" on:click=move |_| set_show_create.set(true)>
                    "+ New Project"
                </button>
            </div>

            {move || (!projects.get().is_empty()).then(|| view! {
                <div class="search-field">
                    <input
                        type="text"
                        placeholder="Search projects..."
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    {move || (!query.get().is_empty()).then(|| view! {
                        <button class="search-clear" on:click=move |_| set_query.set(String::new())>
                            "×"
                        </button>
                    })}
                </div>
            })}

            {move || if loading.get() {
                view! {
                    <div class="project-grid">
                        {(0..6).map(|_| view! { <CardSkeleton /> }).collect_view()}
                    </div>
                }.into_any()
            } else if projects.get().is_empty() {
                view! {
                    <EmptyState
                        icon="📁"
                        title="No projects yet"
                        description="Get started by creating your first project to organize your tasks."
                        action_label="Create Project"
                        on_action=Callback::new(move |_| set_show_create.set(true))
                    />
                }.into_any()
            } else if visible().is_empty() {
                view! {
                    <EmptyState
                        icon="🔍"
                        title="No results found"
                        description=format!(
                            "No projects match \"{}\". Try a different search term.",
                            query.get()
                        )
                        action_label="Clear Search"
                        on_action=Callback::new(move |_| set_query.set(String::new()))
                    />
                }.into_any()
            } else {
                view! {
                    <div class="project-grid">
                        <For
                            each=visible
                            key=|project| project.id
                            children=move |project| {
                                view! { <ProjectCard project=project on_open=on_open /> }
                            }
                        />
                    </div>
                }.into_any()
            }}

            {move || show_create.get().then(|| view! {
                <Modal title="Create New Project" on_close=Callback::new(move |_| set_show_create.set(false))>
                    <ProjectForm
                        on_submit=on_create
                        on_cancel=Callback::new(move |_| set_show_create.set(false))
                        submitting=submitting
                    />
                </Modal>
            })}
        </div>
    }
}
