//! Task Item Component
//!
//! One row in the project task list. Deleting takes two clicks, the
//! first arms an inline confirm instead of opening a dialog.

use chrono::Local;
use leptos::prelude::*;

use crate::format::{format_due_date, priority_class};
use crate::models::Task;

#[component]
pub fn TaskItem(
    task: Task,
    #[prop(into)] on_toggle: Callback<i64>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<i64>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    let id = task.id;
    let completed = task.completed;
    let overdue_emphasis = task.overdue && !task.completed;
    let priority = task.priority;
    let due_chip = task
        .due_date
        .map(|due| format_due_date(Some(due), Local::now().date_naive()));

    let row_class = if completed { "task-item task-item-completed" } else { "task-item" };
    let check_class = if completed { "task-check checked" } else { "task-check" };
    let title_class = if completed { "task-title struck" } else { "task-title" };

    let edit_task = task.clone();

    view! {
        <div class=row_class>
            <button class=check_class title="Toggle completion" on:click=move |_| on_toggle.run(id)>
                {if completed { "✓" } else { "" }}
            </button>

            <div class="task-body">
                <div class="task-heading">
                    <h4 class=title_class>{task.title}</h4>
                    <div class="task-actions">
                        <button
                            class="icon-btn"
                            title="Edit task"
                            on:click=move |_| on_edit.run(edit_task.clone())
                        >
                            "✎"
                        </button>
                        {move || if confirm_delete.get() {
                            view! {
                                <span class="delete-confirm">
                                    <span class="delete-confirm-text">"Delete?"</span>
                                    <button
                                        class="confirm-btn"
                                        on:click=move |_| {
                                            set_confirm_delete.set(false);
                                            on_delete.run(id);
                                        }
                                    >
                                        "✓"
                                    </button>
                                    <button
                                        class="cancel-btn"
                                        on:click=move |_| set_confirm_delete.set(false)
                                    >
                                        "✗"
                                    </button>
                                </span>
                            }.into_any()
                        } else {
                            view! {
                                <button
                                    class="icon-btn"
                                    title="Delete task"
                                    on:click=move |_| set_confirm_delete.set(true)
                                >
                                    "🗑"
                                </button>
                            }.into_any()
                        }}
                    </div>
                </div>

                {task.description.map(|text| view! { <p class="task-description">{text}</p> })}

                <div class="task-meta">
                    <span class=format!("priority-badge {}", priority_class(priority))>
                        {priority.as_str()}
                    </span>
                    {due_chip.map(|text| {
                        let chip_class = if overdue_emphasis {
                            "due-chip due-chip-overdue"
                        } else {
                            "due-chip"
                        };
                        view! { <span class=chip_class>{text}</span> }
                    })}
                </div>
            </div>
        </div>
    }
}
