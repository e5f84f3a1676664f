//! Admin Login Page

use folio_core::auth::Gate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::browser;
use crate::commands;
use crate::context::use_app;
use crate::models::Notice;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(None::<String>);

    browser::set_title(&ctx.with_config(|c| format!("Admin Login | {}", c.site_name)));

    // Already signed in
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            if let Some(path) = ctx.redirect_for(Gate::Login) {
                navigate(path, Default::default());
            }
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api_key = ctx.with_config(|c| c.firebase.api_key.clone());
        let (email, password) = (email.get_untracked(), password.get_untracked());
        let navigate = navigate.clone();
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = commands::sign_in(&api_key, &email, &password).await;
            match result {
                Ok(session) => {
                    ctx.sign_in(session);
                    navigate(Gate::DASHBOARD_PATH, Default::default());
                }
                Err(e) => set_error.set(Some(Notice::from_error(&e).text().to_string())),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="login-container">
            <form class="login-form" on:submit=submit>
                <h2>"Admin Login"</h2>
                <input
                    type="email"
                    id="email"
                    placeholder="Email"
                    autocomplete="username"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    id="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Login" }}
                </button>
                {move || error.get().map(|msg| view! { <p class="error-msg" role="alert">{msg}</p> })}
            </form>
        </section>
    }
}
