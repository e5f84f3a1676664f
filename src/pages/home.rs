//! Home Page
//!
//! Hero with a typing effect, the most recent projects and the contact form.
//! Counts the visit on mount.

use folio_core::domain::{Project, Visitor};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::components::{ContactForm, ProjectCard, ScreenshotModal};
use crate::context::{use_app, AppContext};
use crate::models::LoadState;
use crate::typing::TypingCycle;

/// Merge a server timestamp into `visitors/{visitorId}`.
pub fn track_visit(ctx: AppContext) {
    spawn_local(async move {
        let id = browser::visitor_id();
        match ctx.repo::<Visitor>().touch(&id).await {
            Ok(()) => log::debug!("visit recorded for {}", id),
            Err(e) => log::warn!("could not record visit: {}", e),
        }
    });
}

#[component]
fn TypedRole() -> impl IntoView {
    let ctx = use_app();
    let roles = ctx.with_config(|c| c.home.roles.clone());
    let (typed, set_typed) = signal(String::new());

    if !roles.is_empty() {
        spawn_local(async move {
            let mut cycle = TypingCycle::new(&roles);
            loop {
                let frame = cycle.next_frame();
                // Stops once the hero is unmounted
                if set_typed.try_set(frame.text).is_some() {
                    break;
                }
                TimeoutFuture::new(frame.delay_ms).await;
            }
        });
    }

    view! {
        <span class="typing">{move || typed.get()}</span>
        <span class="cursor">"|"</span>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app();
    let (author, site_name, count) = ctx.with_config(|c| (c.author.clone(), c.site_name.clone(), c.home.recent_projects));
    let email = ctx.with_config(|c| c.contact_email.clone());

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (state, set_state) = signal(LoadState::Loading);
    let (preview, set_preview) = signal(None::<Project>);

    browser::set_title(&site_name);
    track_visit(ctx);

    spawn_local(async move {
        match ctx.repo::<Project>().recent(count).await {
            Ok(loaded) => {
                let public: Vec<Project> = loaded.into_iter().filter(|p| ctx.with_config(|c| c.is_public(p.published))).collect();
                set_projects.set(public);
                set_state.set(LoadState::Ready);
            }
            Err(e) => set_state.set(LoadState::failed(&e, "projects")),
        }
    });

    view! {
        <section class="hero" id="home">
            <h1>"Hi, I'm " <span class="highlight">{author}</span></h1>
            <h2>"I'm a " <TypedRole /></h2>
            <div class="hero-actions">
                <a href="/projects" class="btn">"View Projects"</a>
                <a href="#contact" class="btn btn-outline">"Contact Me"</a>
            </div>
        </section>

        <section class="projects" id="projects">
            <h2 class="section-title">"Recent Projects"</h2>
            {move || match state.get() {
                LoadState::Loading => view! { <p class="placeholder">"Loading projects..."</p> }.into_any(),
                LoadState::Failed(msg) => view! { <p class="placeholder">{msg}</p> }.into_any(),
                LoadState::Ready if projects.with(|p| p.is_empty()) => {
                    view! { <p class="placeholder">"No projects found."</p> }.into_any()
                }
                LoadState::Ready => view! {
                    <div class="projects-grid" id="projects-grid">
                        <For
                            each=move || projects.get()
                            key=|p| p.id.clone()
                            children=move |project| view! {
                                <ProjectCard project=project on_preview=move |p| set_preview.set(Some(p)) />
                            }
                        />
                    </div>
                }.into_any(),
            }}
            <a href="/projects" class="btn view-all">"View All Projects"</a>
        </section>

        <section class="contact" id="contact">
            <h2 class="section-title">"Contact"</h2>
            {(!email.is_empty()).then(|| view! {
                <p class="contact-email">"Or write to " <a href=format!("mailto:{}", email)>{email.clone()}</a></p>
            })}
            <ContactForm />
        </section>

        <ScreenshotModal project=preview on_close=move |_| set_preview.set(None) />
    }
}
