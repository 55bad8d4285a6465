//! Project Card Component
//!
//! Summary card used on the dashboard and in the project list.

use chrono::Local;
use leptos::prelude::*;

use crate::components::ProgressBar;
use crate::format::{format_relative_date, status_class, truncate_text};
use crate::models::Project;

#[component]
pub fn ProjectCard(project: Project, #[prop(into)] on_open: Callback<i64>) -> impl IntoView {
    let id = project.id;
    let status = project.status();
    let created = format_relative_date(project.created_at, Local::now().naive_local());
    let description = project
        .description
        .as_deref()
        .map(|text| truncate_text(text, 100));

    view! {
        <div class="project-card" on:click=move |_| on_open.run(id)>
            <div class="project-card-header">
                <span class="project-card-icon">"📁"</span>
                <div class="project-card-heading">
                    <h3 class="project-card-title">{project.title}</h3>
                    <p class="project-card-created">{format!("Created {}", created)}</p>
                </div>
            </div>

            {description.map(|text| view! { <p class="project-card-description">{text}</p> })}

            <div class="project-card-stats">
                <span class="stat-chip">{format!("{} tasks", project.total_tasks)}</span>
                <span class="stat-chip stat-chip-done">{format!("{} done", project.completed_tasks)}</span>
            </div>

            <ProgressBar value=project.progress_percentage size="sm" />

            <div class="project-card-footer">
                <span class=format!("status-label {}", status_class(status))>{status.label()}</span>
                <span class="project-card-open">"View project →"</span>
            </div>
        </div>
    }
}
