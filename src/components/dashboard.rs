//! Dashboard Screen
//!
//! Welcome header, aggregate stat cards and the six most recent
//! projects, with the create-project modal close at hand.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{CardSkeleton, EmptyState, Modal, ProjectCard, ProjectForm};
use crate::context::{AppContext, Screen};
use crate::models::{progress_percent, Project, ProjectRequest};
use crate::session::{use_session, SessionStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_session();

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (loading, set_loading) = signal(true);
    let (show_create, set_show_create) = signal(false);
    let (submitting, set_submitting) = signal(false);

    // Load projects on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_projects().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[DASHBOARD] Loaded {} projects", loaded.len()).into(),
                    );
                    set_projects.set(loaded);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[DASHBOARD] {}", err).into());
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
                    web_sys::console::error_1(&format!("[DASHBOARD] {}", err).into());
                    ctx.error("Failed to create project");
                }
            }
            set_submitting.set(false);
        });
    });

    let total_projects = move || projects.get().len();
    let total_tasks = move || projects.get().iter().map(|p| p.total_tasks).sum::<u32>();
    let completed_tasks = move || projects.get().iter().map(|p| p.completed_tasks).sum::<u32>();
    let overall_progress = move || progress_percent(completed_tasks(), total_tasks());

    let on_open = Callback::new(move |id: i64| ctx.goto(Screen::Project(id)));

    view! {
        <div class="dashboard">
            <div class="screen-header">
                <h1>
                    {move || {
                        store
                            .user()
                            .get()
                            .map(|u| format!("Welcome back, {}! 👋", u.first_name))
                            .unwrap_or_else(|| "Welcome back! 👋".to_string())
                    }}
                </h1>
                <p>"Here's an overview of your projects and tasks."</p>
            </div>

            <div class="stats-grid">
                <div class="stat-card">
                    <span class="stat-icon">"📁"</span>
                    <div class="stat-meta">
                        <p class="stat-value">{total_projects}</p>
                        <p class="stat-name">"Total Projects"</p>
                    </div>
                </div>
                <div class="stat-card">
                    <span class="stat-icon">"📋"</span>
                    <div class="stat-meta">
                        <p class="stat-value">{total_tasks}</p>
                        <p class="stat-name">"Total Tasks"</p>
                    </div>
                </div>
                <div class="stat-card">
                    <span class="stat-icon">"✅"</span>
                    <div class="stat-meta">
                        <p class="stat-value">{completed_tasks}</p>
                        <p class="stat-name">"Completed"</p>
                    </div>
                </div>
                <div class="stat-card">
                    <span class="stat-icon">"📈"</span>
                    <div class="stat-meta">
                        <p class="stat-value">{move || format!("{}%", overall_progress())}</p>
                        <p class="stat-name">"Progress"</p>
                    </div>
                </div>
            </div>

            <div class="section-header">
                <div>
                    <h2>"Your Projects"</h2>
                    <p>"Manage and track your projects"</p>
                </div>
                <button class="btn btn-primary" on:click=move |_| set_show_create.set(true)>
                    "+ New Project"
                </button>
            </div>

            {move || if loading.get() {
                view! {
                    <div class="project-grid">
                        <CardSkeleton />
                        <CardSkeleton />
                        <CardSkeleton />
                    </div>
                }.into_any()
            } else if projects.get().is_empty() {
                view! {
                    <EmptyState
                        icon="📁"
                        title="No projects yet"
                        description="Get started by creating your first project. You can add tasks, track progress, and more."
                        action_label="Create Your First Project"
                        on_action=Callback::new(move |_| set_show_create.set(true))
                    />
                }.into_any()
            } else {
                view! {
                    <div class="project-grid">
                        <For
                            each=move || projects.get().into_iter().take(6).collect::<Vec<_>>()
                            key=|project| project.id
                            children=move |project| {
                                view! { <ProjectCard project=project on_open=on_open /> }
                            }
                        />
                    </div>
                }.into_any()
            }}

            {move || (projects.get().len() > 6).then(|| view! {
                <div class="view-all">
                    <button class="link-btn" on:click=move |_| ctx.goto(Screen::Projects)>
                        {format!("View all {} projects →", projects.get().len())}
                    </button>
                </div>
            })}

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
