//! Register Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Loading;
use crate::context::{AppContext, Screen};
use crate::session::{self, use_session, SessionStoreFields};
use crate::validate::validate_register;

#[component]
pub fn Register() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_session();

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        if !store.loading().get() && store.token().get_untracked().is_some() {
            ctx.goto(Screen::Dashboard);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        set_error.set(None);

        let req = match validate_register(
            &first_name.get(),
            &last_name.get(),
            &email.get(),
            &password.get(),
            &confirm_password.get(),
        ) {
            Ok(req) => req,
            Err(msg) => {
                set_error.set(Some(msg.to_string()));
                return;
            }
        };

        set_submitting.set(true);
        spawn_local(async move {
            match session::register(&store, req).await {
                Ok(user) => {
                    ctx.success(format!(
                        "Welcome, {}! Your account has been created.",
                        user.first_name
                    ));
                    ctx.resume_after_login();
                }
                Err(err) => {
                    let msg = err
                        .server_message()
                        .unwrap_or("Registration failed. Please try again.");
                    set_error.set(Some(msg.to_string()));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-screen">
            <aside class="auth-hero">
                <h1>"Start your journey today"</h1>
                <p>
                    "Join thousands of professionals who trust TaskFlow to manage their projects and boost productivity."
                </p>
            </aside>

            <div class="auth-pane">
                <div class="auth-card">
                    <div class="auth-brand">
                        <span class="brand-mark large">"✓"</span>
                        <h2>"Create an account"</h2>
                        <p>"Get started with TaskFlow for free"</p>
                    </div>

                    <form class="auth-form" on:submit=on_submit>
                        {move || error.get().map(|msg| view! {
                            <div class="form-banner form-banner-error">{msg}</div>
                        })}

                        <div class="form-row">
                            <div class="form-field">
                                <label for="first-name">"First name"</label>
                                <input
                                    id="first-name"
                                    type="text"
                                    placeholder="Jane"
                                    required
                                    prop:value=move || first_name.get()
                                    on:input=move |ev| set_first_name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-field">
                                <label for="last-name">"Last name"</label>
                                <input
                                    id="last-name"
                                    type="text"
                                    placeholder="Doe"
                                    required
                                    prop:value=move || last_name.get()
                                    on:input=move |ev| set_last_name.set(event_target_value(&ev))
                                />
                            </div>
                        </div>

                        <div class="form-field">
                            <label for="email">"Email address"</label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-field">
                            <label for="password">"Password"</label>
                            <div class="password-field">
                                <input
                                    id="password"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    placeholder="Create a password"
                                    required
                                    prop:value=move || password.get()
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                />
                                <button
                                    type="button"
                                    class="password-toggle"
                                    on:click=move |_| set_show_password.update(|v| *v = !*v)
                                >
                                    {move || if show_password.get() { "Hide" } else { "Show" }}
                                </button>
                            </div>
                        </div>

                        <div class="form-field">
                            <label for="confirm-password">"Confirm password"</label>
                            <input
                                id="confirm-password"
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Confirm your password"
                                required
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                            />
                        </div>

                        <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get()>
                            {move || if submitting.get() {
                                view! { <Loading size="sm" /> }.into_any()
                            } else {
                                view! { "Create account" }.into_any()
                            }}
                        </button>

                        <p class="auth-switch">
                            "Already have an account? "
                            <button type="button" class="link-btn" on:click=move |_| ctx.goto(Screen::Login)>
                                "Sign in"
                            </button>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
