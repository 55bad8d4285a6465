//! Project Form Component
//!
//! Shared by the create and edit modals. Validation runs on submit and
//! the host receives a ready-to-send payload through `on_submit`.

use leptos::prelude::*;

use crate::components::Loading;
use crate::models::{Project, ProjectRequest};
use crate::validate::{validate_project, ProjectFormErrors, DESCRIPTION_MAX};

#[component]
pub fn ProjectForm(
    #[prop(optional)] project: Option<Project>,
    #[prop(into)] on_submit: Callback<ProjectRequest>,
    #[prop(into)] on_cancel: Callback<()>,
    submitting: ReadSignal<bool>,
) -> impl IntoView {
    let is_edit = project.is_some();
    let (title, set_title) = signal(
        project
            .as_ref()
            .map(|p| p.title.clone())
            .unwrap_or_default(),
    );
    let (description, set_description) = signal(
        project
            .as_ref()
            .and_then(|p| p.description.clone())
            .unwrap_or_default(),
    );
    let (errors, set_errors) = signal(ProjectFormErrors::default());

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match validate_project(&title.get(), &description.get()) {
            Ok(req) => {
                set_errors.set(ProjectFormErrors::default());
                on_submit.run(req);
            }
            Err(errs) => set_errors.set(errs),
        }
    };

    let description_count = move || {
        let count = description.get().chars().count();
        let class = if count > 900 {
            "field-counter field-counter-warn"
        } else {
            "field-counter"
        };
        view! {
            <span class=class>{format!("{}/{}", count, DESCRIPTION_MAX)}</span>
        }
    };

    view! {
        <form class="entity-form" on:submit=on_form_submit>
            <div class="form-field">
                <label for="project-title">"Project Title *"</label>
                <input
                    id="project-title"
                    type="text"
                    placeholder="Enter project title"
                    class=move || if errors.get().title.is_some() { "input-error" } else { "" }
                    disabled=move || submitting.get()
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                {move || errors.get().title.map(|msg| view! { <p class="field-error">{msg}</p> })}
            </div>

            <div class="form-field">
                <label for="project-description">"Description (optional)"</label>
                <textarea
                    id="project-description"
                    rows="4"
                    placeholder="Describe your project..."
                    class=move || if errors.get().description.is_some() { "input-error" } else { "" }
                    disabled=move || submitting.get()
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
                <div class="field-footer">
                    {move || errors.get().description.map(|msg| view! { <p class="field-error">{msg}</p> })}
                    {description_count}
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
                        view! { "Update Project" }.into_any()
                    } else {
                        view! { "Create Project" }.into_any()
                    }}
                </button>
            </div>
        </form>
    }
}
