//! Login Screen
//!
//! Email and password form with the demo credentials spelled out
//! underneath, since the backend seeds a demo account.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Loading;
use crate::context::{AppContext, Screen};
use crate::session::{self, use_session, SessionStoreFields};

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Someone who is already signed in has no business here
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
        set_submitting.set(true);
        let email_value = email.get();
        let password_value = password.get();

        spawn_local(async move {
            match session::login(&store, email_value, password_value).await {
                Ok(user) => {
                    ctx.success(format!("Welcome back, {}!", user.first_name));
                    ctx.resume_after_login();
                }
                Err(err) => {
                    let msg = err.server_message().unwrap_or("Invalid email or password");
                    set_error.set(Some(msg.to_string()));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-screen">
            <div class="auth-pane">
                <div class="auth-card">
                    <div class="auth-brand">
                        <span class="brand-mark large">"✓"</span>
                        <h2>"Welcome back"</h2>
                        <p>"Sign in to continue to TaskFlow"</p>
                    </div>

                    <form class="auth-form" on:submit=on_submit>
                        {move || error.get().map(|msg| view! {
                            <div class="form-banner form-banner-error">{msg}</div>
                        })}

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
                                    placeholder="Enter your password"
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

                        <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get()>
                            {move || if submitting.get() {
                                view! { <Loading size="sm" /> }.into_any()
                            } else {
                                view! { "Sign in" }.into_any()
                            }}
                        </button>

                        <p class="auth-switch">
                            "Do not have an account? "
                            <button type="button" class="link-btn" on:click=move |_| ctx.goto(Screen::Register)>
                                "Create one now"
                            </button>
                        </p>
                    </form>

                    <div class="demo-credentials">
                        <p class="demo-credentials-heading">"Demo Credentials"</p>
                        <p><strong>"Email: "</strong>"demo@taskmanager.com"</p>
                        <p><strong>"Password: "</strong>"demo123"</p>
                    </div>
                </div>
            </div>

            <aside class="auth-hero">
                <h1>"Manage your projects with ease"</h1>
                <p>
                    "TaskFlow helps you organize your work, track progress, and achieve your goals faster than ever."
                </p>
            </aside>
        </div>
    }
}
