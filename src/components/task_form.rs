//! Task Form Component
//!
//! Create and edit form with a priority button row. The due date rides
//! along as the raw input string until validation parses it.

use leptos::prelude::*;

use crate::components::Loading;
use crate::format::priority_class;
use crate::models::{Task, TaskPriority, TaskRequest};
use crate::validate::{validate_task, TaskFormErrors};

#[component]
pub fn TaskForm(
    #[prop(optional)] task: Option<Task>,
    #[prop(into)] on_submit: Callback<TaskRequest>,
    #[prop(into)] on_cancel: Callback<()>,
    submitting: ReadSignal<bool>,
) -> impl IntoView {
    let is_edit = task.is_some();
    let (title, set_title) = signal(task.as_ref().map(|t| t.title.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        task.as_ref()
            .and_then(|t| t.description.clone())
            .unwrap_or_default(),
    );
    let (due_date, set_due_date) = signal(
        task.as_ref()
            .and_then(|t| t.due_date)
            .map(|d| d.to_string())
            .unwrap_or_default(),
    );
    let (priority, set_priority) = signal(
        task.as_ref()
            .map(|t| t.priority)
            .unwrap_or(TaskPriority::Medium),
    );
    let (errors, set_errors) = signal(TaskFormErrors::default());

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match validate_task(&title.get(), &description.get(), &due_date.get(), priority.get()) {
            Ok(req) => {
                set_errors.set(TaskFormErrors::default());
                on_submit.run(req);
            }
            Err(errs) => set_errors.set(errs),
        }
    };

    view! {
        <form class="entity-form" on:submit=on_form_submit>
            <div class="form-field">
                <label for="task-title">"Task Title *"</label>
                <input
                    id="task-title"
                    type="text"
                    placeholder="What needs to be done?"
                    class=move || if errors.get().title.is_some() { "input-error" } else { "" }
                    disabled=move || submitting.get()
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                {move || errors.get().title.map(|msg| view! { <p class="field-error">{msg}</p> })}
            </div>

            <div class="form-field">
                <label for="task-description">"Description (optional)"</label>
                <textarea
                    id="task-description"
                    rows="3"
                    placeholder="Add more details..."
                    disabled=move || submitting.get()
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-row">
                <div class="form-field">
                    <label for="task-due-date">"Due Date"</label>
                    <input
                        id="task-due-date"
                        type="date"
                        class=move || if errors.get().due_date.is_some() { "input-error" } else { "" }
                        disabled=move || submitting.get()
                        prop:value=move || due_date.get()
                        on:input=move |ev| set_due_date.set(event_target_value(&ev))
                    />
                    {move || errors.get().due_date.map(|msg| view! { <p class="field-error">{msg}</p> })}
                </div>

                <div class="form-field">
                    <label>"Priority"</label>
                    <div class="priority-grid">
                        {TaskPriority::ALL.iter().map(|p| {
                            let p = *p;
                            let class = move || {
                                if priority.get() == p {
                                    format!("priority-btn {} active", priority_class(p))
                                } else {
                                    format!("priority-btn {}", priority_class(p))
                                }
                            };
                            view! {
                                <button
                                    type="button"
                                    class=class
                                    disabled=move || submitting.get()
                                    on:click=move |_| set_priority.set(p)
                                >
                                    {p.as_str()}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </div>

            <div class="form-actions">
                <button
                    type="button"
                    class="btn btn-secondary"
                    disabled=move || submitting.get()
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() {
                        view! { <Loading size="sm" /> }.into_any()
                    } else if is_edit {
                        view! { "Update Task" }.into_any()
                    } else {
                        view! { "Create Task" }.into_any()
                    }}
                </button>
            </div>
        </form>
    }
}
