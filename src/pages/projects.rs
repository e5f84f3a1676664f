//! Projects Gallery Page
//!
//! Published projects with a search box, category and tag dropdowns and
//! pagination, all driven by one [`ListController`].

use folio_core::domain::Project;
use folio_core::view_model::{Facet, FacetValue, ListController, ListSnapshot};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::components::{FacetSelect, PaginationBar, ProjectCard, ScreenshotModal};
use crate::context::use_app;
use crate::models::LoadState;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctx = use_app();
    let (snapshot, set_snapshot) = signal(ListSnapshot::<Project>::default());
    let (state, set_state) = signal(LoadState::Loading);
    let (search, set_search) = signal(String::new());
    let (preview, set_preview) = signal(None::<Project>);

    let controller = StoredValue::new_local(ListController::new(
        ctx.with_config(|c| c.list_config()),
        move |s: &ListSnapshot<Project>| set_snapshot.set(s.clone()),
    ));

    browser::set_title(&ctx.with_config(|c| format!("Projects | {}", c.site_name)));

    spawn_local(async move {
        match ctx.repo::<Project>().list().await {
            Ok(projects) => {
                let public: Vec<Project> = projects
                    .into_iter()
                    .filter(|p| ctx.with_config(|c| c.is_public(p.published)))
                    .collect();
                log::info!("projects gallery: {} projects", public.len());
                controller.update_value(|c| c.load(public));
                set_state.set(LoadState::Ready);
            }
            Err(e) => set_state.set(LoadState::failed(&e, "projects")),
        }
    });

    let select = move |facet: Facet| {
        Callback::new(move |value: FacetValue| controller.update_value(|c| c.set_filter(facet, value)))
    };
    let on_search = move |ev: web_sys::Event| {
        let query = event_target_value(&ev);
        controller.update_value(|c| c.set_search(&query));
        set_search.set(query);
    };
    let reset = move |_| {
        set_search.set(String::new());
        controller.update_value(|c| c.clear_filters());
    };
    let go_to_page = move |n: usize| {
        if controller.try_update_value(|c| c.go_to_page(n)).unwrap_or(false) {
            browser::scroll_to_top();
        }
    };

    view! {
        <section class="projects-page">
            <h1 class="section-title">"All Projects"</h1>

            <div class="filters">
                <input
                    type="search"
                    id="search-input"
                    placeholder="Search projects..."
                    prop:value=move || search.get()
                    on:input=on_search
                />
                <FacetSelect
                    all_label="All Categories"
                    options=Signal::derive(move || snapshot.get().categories)
                    selected=Signal::derive(move || snapshot.get().filter.category)
                    on_select=select(Facet::Category)
                />
                <FacetSelect
                    all_label="All Tags"
                    options=Signal::derive(move || snapshot.get().tags)
                    selected=Signal::derive(move || snapshot.get().filter.tag)
                    on_select=select(Facet::Tag)
                />
                <Show when=move || !snapshot.with(|s| s.filter.is_empty())>
                    <button class="btn-small" on:click=reset>"Clear"</button>
                </Show>
            </div>

            {move || match state.get() {
                LoadState::Loading => view! { <p class="placeholder">"Loading projects..."</p> }.into_any(),
                LoadState::Failed(msg) => view! { <p class="placeholder">{msg}</p> }.into_any(),
                LoadState::Ready if snapshot.with(|s| s.matched == 0) => {
                    view! { <p class="placeholder">"No projects found."</p> }.into_any()
                }
                LoadState::Ready => view! {
                    <div class="projects-grid" id="projects-container">
                        <For
                            each=move || snapshot.get().page_items
                            key=|p| p.id.clone()
                            children=move |project| view! {
                                <ProjectCard project=project on_preview=move |p| set_preview.set(Some(p)) />
                            }
                        />
                    </div>
                    <PaginationBar
                        pagination=Signal::derive(move || snapshot.get().pagination)
                        on_page=go_to_page
                    />
                }.into_any(),
            }}
        </section>

        <ScreenshotModal project=preview on_close=move |_| set_preview.set(None) />
    }
}
