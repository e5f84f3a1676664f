//! Admin Dashboard Page
//!
//! Totals, per-day charts and the three management panels. Signed-out
//! visitors are sent to the login page.

use chrono::Local;
use folio_core::auth::Gate;
use folio_core::domain::{daily_counts, ActiveUser};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use reactive_stores::Store;

use crate::browser;
use crate::components::{BlogsPanel, EditTarget, LineChart, MessagesPanel, ProjectsPanel};
use crate::context::{use_app, AppContext};
use crate::pages::home::track_visit;
use crate::store::{
    reload_analytics, reload_blogs, reload_messages, reload_projects, DashboardState, DashboardStateStoreFields,
    DashboardStore,
};

/// Mark the signed-in admin active, then load everything the page shows.
fn load_dashboard(ctx: AppContext, store: DashboardStore) {
    let uid = ctx.session.with_untracked(|s| s.as_ref().map(|s| s.uid.clone()));
    let Some(uid) = uid else { return };

    track_visit(ctx);
    spawn_local(reload_messages(ctx, store));
    spawn_local(reload_blogs(ctx, store));
    spawn_local(reload_projects(ctx, store));
    spawn_local(async move {
        if let Err(e) = ctx.repo::<ActiveUser>().touch(&uid).await {
            log::warn!("could not mark {} active: {}", uid, e);
        }
        reload_analytics(ctx, store).await;
    });
}

#[component]
fn StatCard(#[prop(into)] label: String, #[prop(into)] value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <h3>{label}</h3>
            <p class="stat-value">{move || value.get()}</p>
        </div>
    }
}

/// Lines kept by the in-memory logger, newest last.
#[component]
fn RecentLog() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());

    view! {
        <details class="log-panel" on:toggle=move |_| set_lines.set(rolling_logger::recent_lines())>
            <summary>"Recent log"</summary>
            <button class="btn-small" on:click=move |_| set_lines.set(rolling_logger::recent_lines())>"Refresh"</button>
            <pre class="log-lines">{move || lines.get().join("\n")}</pre>
        </details>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();

    let store: DashboardStore = Store::new(DashboardState::default());
    provide_context(store);
    provide_context(RwSignal::new(None::<EditTarget>));

    browser::set_title(&ctx.with_config(|c| format!("Dashboard | {}", c.site_name)));

    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            if let Some(path) = ctx.redirect_for(Gate::Dashboard) {
                navigate(path, Default::default());
            }
        }
    });

    load_dashboard(ctx, store);

    let message_days = Signal::derive(move || {
        store.messages().with(|m| daily_counts(m.iter().map(|m| m.created_at), &Local))
    });
    let visitor_days = Signal::derive(move || {
        store.visitors().with(|v| daily_counts(v.iter().map(|v| v.timestamp), &Local))
    });

    let logout = move |_| {
        ctx.sign_out();
        navigate(Gate::LOGIN_PATH, Default::default());
    };

    view! {
        <Show when=move || ctx.redirect_for(Gate::Dashboard).is_none()>
            <div class="dashboard">
                <header class="dashboard-header">
                    <h1>"Dashboard"</h1>
                    <span class="admin-email">
                        {move || ctx.session.with(|s| s.as_ref().map(|s| s.email.clone()).unwrap_or_default())}
                    </span>
                    <button id="logout-btn" class="btn btn-outline" on:click=logout.clone()>"Logout"</button>
                </header>

                <section class="stats">
                    <StatCard label="Total Messages" value=Signal::derive(move || store.messages().with(|m| m.len())) />
                    <StatCard label="Total Visitors" value=Signal::derive(move || store.visitors().with(|v| v.len())) />
                    <StatCard label="Active Users" value=Signal::derive(move || store.active_users().get()) />
                </section>

                <section class="charts">
                    <LineChart title="Messages" counts=message_days color="#0077b6" />
                    <LineChart title="Visitors" counts=visitor_days color="#ff4d6d" />
                </section>

                <MessagesPanel />
                <BlogsPanel />
                <ProjectsPanel />
                <RecentLog />
            </div>
        </Show>
    }
}
