//! Project Detail Screen
//!
//! Header card with stats, the filterable task list, and the three
//! modals (task form, edit project, delete project). Task mutations
//! re-fetch the project afterwards so the counts and progress bar stay
//! in step with the server.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{EmptyState, Loading, Modal, ProgressBar, ProjectForm, TaskForm, TaskItem};
use crate::context::{AppContext, Screen};
use crate::filter::{visible_tasks, TaskFilter};
use crate::format::{format_date, format_relative_date};
use crate::models::{Project, ProjectRequest, Task, TaskRequest};

#[component]
pub fn ProjectDetail(project_id: i64) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (project, set_project) = signal::<Option<Project>>(None);
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (loading, set_loading) = signal(true);
    let (filter, set_filter) = signal(TaskFilter::All);
    let (query, set_query) = signal(String::new());
    let (task_modal, set_task_modal) = signal(false);
    let (selected_task, set_selected_task) = signal::<Option<Task>>(None);
    let (edit_modal, set_edit_modal) = signal(false);
    let (delete_modal, set_delete_modal) = signal(false);
    let (submitting, set_submitting) = signal(false);

    // Load the project and its tasks on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let project_result = api::get_project(project_id).await;
            let tasks_result = api::list_tasks(project_id).await;
            match (project_result, tasks_result) {
                (Ok(p), Ok(t)) => {
                    web_sys::console::log_1(
                        &format!("[PROJECT] Loaded project {} with {} tasks", project_id, t.len())
                            .into(),
                    );
                    set_project.set(Some(p));
                    set_tasks.set(t);
                    set_loading.set(false);
                }
                (Err(err), _) | (_, Err(err)) => {
                    web_sys::console::error_1(&format!("[PROJECT] {}", err).into());
                    set_loading.set(false);
                    ctx.error("Failed to load project");
                    ctx.goto(Screen::Projects);
                }
            }
        });
    });

    // ========================
    // Task Handlers
    // ========================

    let on_create_task = Callback::new(move |req: TaskRequest| {
        set_submitting.set(true);
        spawn_local(async move {
            match api::create_task(project_id, &req).await {
                Ok(task) => {
                    set_tasks.update(|list| list.insert(0, task));
                    set_task_modal.set(false);
                    ctx.success("Task created successfully!");
                    if let Ok(p) = api::get_project(project_id).await {
                        set_project.set(Some(p));
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[PROJECT] {}", err).into());
                    ctx.error("Failed to create task");
                }
            }
            set_submitting.set(false);
        });
    });

    let on_update_task = Callback::new(move |req: TaskRequest| {
        let Some(current) = selected_task.get_untracked() else {
            return;
        };
        set_submitting.set(true);
        spawn_local(async move {
            match api::update_task(project_id, current.id, &req).await {
                Ok(updated) => {
                    set_tasks.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|t| t.id == updated.id) {
                            *slot = updated;
                        }
                    });
                    set_task_modal.set(false);
                    set_selected_task.set(None);
                    ctx.success("Task updated successfully!");
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[PROJECT] {}", err).into());
                    ctx.error("Failed to update task");
                }
            }
            set_submitting.set(false);
        });
    });

    let on_toggle_task = Callback::new(move |task_id: i64| {
        spawn_local(async move {
            match api::toggle_task(project_id, task_id).await {
                Ok(updated) => {
                    let completed = updated.completed;
                    set_tasks.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|t| t.id == updated.id) {
                            *slot = updated;
                        }
                    });
                    if let Ok(p) = api::get_project(project_id).await {
                        set_project.set(Some(p));
                    }
                    ctx.success(if completed { "Task completed!" } else { "Task reopened" });
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[PROJECT] {}", err).into());
                    ctx.error("Failed to update task");
                }
            }
        });
    });

    let on_delete_task = Callback::new(move |task_id: i64| {
        spawn_local(async move {
            match api::delete_task(project_id, task_id).await {
                Ok(()) => {
                    set_tasks.update(|list| list.retain(|t| t.id != task_id));
                    if let Ok(p) = api::get_project(project_id).await {
                        set_project.set(Some(p));
                    }
                    ctx.success("Task deleted successfully!");
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[PROJECT] {}", err).into());
                    ctx.error("Failed to delete task");
                }
            }
        });
    });

    let on_edit_task = Callback::new(move |task: Task| {
        set_selected_task.set(Some(task));
        set_task_modal.set(true);
    });

    let on_open_create_task = Callback::new(move |_: ()| {
        set_selected_task.set(None);
        set_task_modal.set(true);
    });

    let on_close_task_modal = Callback::new(move |_: ()| {
        set_task_modal.set(false);
        set_selected_task.set(None);
    });

    let on_clear_filters = Callback::new(move |_: ()| {
        set_filter.set(TaskFilter::All);
        set_query.set(String::new());
    });

    // ========================
    // Project Handlers
    // ========================

    let on_update_project = Callback::new(move |req: ProjectRequest| {
        set_submitting.set(true);
        spawn_local(async move {
            match api::update_project(project_id, &req).await {
                Ok(p) => {
                    set_project.set(Some(p));
                    set_edit_modal.set(false);
                    ctx.success("Project updated successfully!");
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[PROJECT] {}", err).into());
                    ctx.error("Failed to update project");
                }
            }
            set_submitting.set(false);
        });
    });

    let on_delete_project = move |_| {
        if submitting.get() {
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            match api::delete_project(project_id).await {
                Ok(()) => {
                    ctx.success("Project deleted successfully!");
                    ctx.goto(Screen::Projects);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[PROJECT] {}", err).into());
                    ctx.error("Failed to delete project");
                    set_submitting.set(false);
                }
            }
        });
    };

    let pending_count = move || TaskFilter::Pending.count(&tasks.get());
    let overdue_count = move || TaskFilter::Overdue.count(&tasks.get());
    let visible = move || visible_tasks(&tasks.get(), filter.get(), &query.get());

    view! {
        <div class="project-detail">
            {move || if loading.get() {
                view! {
                    <div class="detail-loading">
                        <Loading size="lg" text="Loading project..." />
                    </div>
                }.into_any()
            } else {
                project.get().map(|p| {
                    let Project {
                        title,
                        description,
                        total_tasks,
                        completed_tasks,
                        progress_percentage,
                        created_at,
                        updated_at,
                        ..
                    } = p;
                    let dates = format!(
                        "Created {} • Updated {}",
                        format_date(created_at.date()),
                        format_relative_date(updated_at, Local::now().naive_local()),
                    );
                    view! {
                        <button class="back-link" on:click=move |_| ctx.goto(Screen::Projects)>
                            "← Back to Projects"
                        </button>

                        <div class="card detail-header">
                            <div class="detail-title-row">
                                <span class="detail-icon">"📋"</span>
                                <div class="detail-heading">
                                    <h1>{title}</h1>
                                    <p class="detail-dates">{dates}</p>
                                    {description.map(|text| view! { <p class="detail-description">{text}</p> })}
                                </div>
                                <div class="detail-actions">
                                    <button class="btn btn-secondary" on:click=move |_| set_edit_modal.set(true)>
                                        "Edit"
                                    </button>
                                    <button class="btn btn-danger" on:click=move |_| set_delete_modal.set(true)>
                                        "Delete"
                                    </button>
                                </div>
                            </div>

                            <div class="detail-stats">
                                <div class="stat-tile">
                                    <p class="stat-value">{total_tasks}</p>
                                    <p class="stat-name">"Total Tasks"</p>
                                </div>
                                <div class="stat-tile stat-tile-completed">
                                    <p class="stat-value">{completed_tasks}</p>
                                    <p class="stat-name">"Completed"</p>
                                </div>
                                <div class="stat-tile stat-tile-pending">
                                    <p class="stat-value">{pending_count}</p>
                                    <p class="stat-name">"Pending"</p>
                                </div>
                                <div class="stat-tile stat-tile-overdue">
                                    <p class="stat-value">{overdue_count}</p>
                                    <p class="stat-name">"Overdue"</p>
                                </div>
                            </div>

                            <ProgressBar value=progress_percentage size="lg" />
                        </div>
                    }
                }).into_any()
            }}

            <Show when=move || !loading.get() && project.with(|p| p.is_some())>
                <div class="section-header">
                    <h2>"Tasks"</h2>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| on_open_create_task.run(())
                    >
                        "+ Add Task"
                    </button>
                </div>

                {move || (!tasks.get().is_empty()).then(|| view! {
                    <div class="task-controls">
                        <div class="filter-tabs">
                            {TaskFilter::TABS.iter().map(|f| {
                                let f = *f;
                                let tab_class = move || {
                                    if filter.get() == f { "filter-tab active" } else { "filter-tab" }
                                };
                                view! {
                                    <button class=tab_class on:click=move |_| set_filter.set(f)>
                                        {f.label()}
                                        <span class="filter-count">
                                            {move || format!("({})", f.count(&tasks.get()))}
                                        </span>
                                    </button>
                                }
                            }).collect_view()}
                        </div>

                        <div class="search-field">
                            <input
                                type="text"
                                placeholder="Search tasks..."
                                prop:value=move || query.get()
                                on:input=move |ev| set_query.set(event_target_value(&ev))
                            />
                            {move || (!query.get().is_empty()).then(|| view! {
                                <button class="search-clear" on:click=move |_| set_query.set(String::new())>
                                    "×"
                                </button>
                            })}
                        </div>
                    </div>
                })}

                {move || tasks.get().is_empty().then(|| view! {
                    <EmptyState
                        icon="📋"
                        title="No tasks yet"
                        description="Start adding tasks to track your project progress."
                        action_label="Add Your First Task"
                        on_action=on_open_create_task
                    />
                })}

                {move || {
                    let tasks_now = tasks.get();
                    let none_visible = !tasks_now.is_empty()
                        && visible_tasks(&tasks_now, filter.get(), &query.get()).is_empty();
                    none_visible.then(|| {
                        let q = query.get();
                        let description = if q.is_empty() {
                            "No tasks match the current filter.".to_string()
                        } else {
                            format!("No tasks match the current filter and search \"{}\".", q)
                        };
                        view! {
                            <EmptyState
                                icon="🔍"
                                title="No tasks found"
                                description=description
                                action_label="Clear Filters"
                                on_action=on_clear_filters
                            />
                        }
                    })
                }}

                <div class="task-list">
                    <For
                        each=visible
                        key=|task| task.id
                        children=move |task| {
                            view! {
                                <TaskItem
                                    task=task
                                    on_toggle=on_toggle_task
                                    on_edit=on_edit_task
                                    on_delete=on_delete_task
                                />
                            }
                        }
                    />
                </div>

                {move || task_modal.get().then(|| {
                    let editing = selected_task.get_untracked();
                    let title = if editing.is_some() { "Edit Task" } else { "Add New Task" };
                    let submit = if editing.is_some() { on_update_task } else { on_create_task };
                    view! {
                        <Modal title=title on_close=on_close_task_modal>
                            <TaskForm
                                task=editing
                                on_submit=submit
                                on_cancel=on_close_task_modal
                                submitting=submitting
                            />
                        </Modal>
                    }
                })}

                {move || edit_modal.get().then(|| {
                    let current = project.get_untracked();
                    view! {
                        <Modal title="Edit Project" on_close=Callback::new(move |_| set_edit_modal.set(false))>
                            <ProjectForm
                                project=current
                                on_submit=on_update_project
                                on_cancel=Callback::new(move |_| set_edit_modal.set(false))
                                submitting=submitting
                            />
                        </Modal>
                    }
                })}

                {move || delete_modal.get().then(|| {
                    let (title, count) = project
                        .get_untracked()
                        .map(|p| (p.title, p.total_tasks))
                        .unwrap_or_default();
                    view! {
                        <Modal title="Delete Project" on_close=Callback::new(move |_| set_delete_modal.set(false))>
                            <div class="delete-project-body">
                                <span class="delete-project-icon">"⚠️"</span>
                                <h3>"Are you sure?"</h3>
                                <p>
                                    {format!(
                                        "This will permanently delete \"{}\" and all {} tasks. This action cannot be undone.",
                                        title, count,
                                    )}
                                </p>
                                <div class="form-actions">
                                    <button
                                        class="btn btn-secondary"
                                        disabled=move || submitting.get()
                                        on:click=move |_| set_delete_modal.set(false)
                                    >
                                        "Cancel"
                                    </button>
                                    <button
                                        class="btn btn-danger"
                                        disabled=move || submitting.get()
                                        on:click=on_delete_project
                                    >
                                        {move || if submitting.get() {
                                            view! { <Loading size="sm" /> }.into_any()
                                        } else {
                                            view! { "Delete Project" }.into_any()
                                        }}
                                    </button>
                                </div>
                            </div>
                        </Modal>
                    }
                })}
            </Show>
        </div>
    }
}
