//! Projects Panel Component
//!
//! Every project including drafts, with inline edit, publish toggle and delete.

use folio_core::domain::{Project, ProjectPatch};
use folio_core::text::excerpt;
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, EditTarget, ProjectForm};
use crate::context::use_app;
use crate::models::Notice;
use crate::store::{
    reload_projects, spawn_mutation, store_remove_project, store_set_project_published, use_dashboard_store,
    DashboardStateStoreFields,
};

#[component]
pub fn ProjectsPanel() -> impl IntoView {
    let store = use_dashboard_store();
    let (notice, set_notice) = signal(None::<Notice>);

    view! {
        <section class="dashboard-section" id="projects">
            <h2>"Projects"</h2>
            <ProjectForm />
            {move || notice.get().map(|n| view! { <p class=n.class()>{n.text().to_string()}</p> })}
            {move || store.projects_error().get().map(|msg| view! { <p class="placeholder">{msg}</p> })}
            <Show when=move || store.projects().with(|p| p.is_empty()) && store.projects_error().with(|e| e.is_none())>
                <p class="placeholder">"No projects found."</p>
            </Show>
            <div id="project-container">
                <For
                    each=move || store.projects().get()
                    key=|p| format!("{}:{}:{:?}", p.id, p.published, ProjectPatch::from_project(p))
                    children=move |project| view! { <ProjectRow project=project set_notice=set_notice /> }
                />
            </div>
        </section>
    }
}

#[component]
fn ProjectRow(project: Project, set_notice: WriteSignal<Option<Notice>>) -> impl IntoView {
    let ctx = use_app();
    let store = use_dashboard_store();
    let editing = expect_context::<RwSignal<Option<EditTarget>>>();

    let original = StoredValue::new(project.clone());
    let id = StoredValue::new(project.id.clone());
    let published = project.published;
    let is_editing = move || editing.with(|t| id.with_value(|id| EditTarget::is_project(t, id)));
    let (patch, set_patch) = signal(ProjectPatch::from_project(&project));

    let toggle_publish = move |_| {
        let id = id.get_value();
        let action = async move {
            ctx.repo::<Project>().set_published(&id, !published).await?;
            store_set_project_published(&store, &id, !published);
            Ok(())
        };
        let done = if published { "Project unpublished." } else { "Project published." };
        spawn_mutation(set_notice, done, action, reload_projects(ctx, store));
    };

    let save = move |_| {
        let input = patch.get_untracked();
        if let Err(e) = input.validate() {
            set_notice.set(Some(Notice::Error(e.to_string())));
            return;
        }
        editing.set(None);
        let id = id.get_value();
        let action = async move { ctx.repo::<Project>().update(&id, input).await };
        spawn_mutation(set_notice, "Project updated.", action, reload_projects(ctx, store));
    };

    let delete = move |_| {
        let id = id.get_value();
        let action = async move {
            ctx.repo::<Project>().delete(&id).await?;
            store_remove_project(&store, &id);
            Ok(())
        };
        spawn_mutation(set_notice, "Project deleted.", action, reload_projects(ctx, store));
    };

    let category = if project.categories.is_empty() { "Uncategorized".to_string() } else { project.categories.join(", ") };

    view! {
        <div class="blog-item">
            <p><strong>{project.title.clone()}</strong>
                {(!published).then(|| view! { <span class="badge">"Draft"</span> })}
            </p>
            {(!project.image_url.is_empty()).then(|| view! {
                <img class="row-thumb" src=project.image_url.clone() alt=project.title.clone() />
            })}
            <p>{excerpt(&project.description, 100)}</p>
            <p><strong>"Category: "</strong>{category}</p>
            <p><strong>"Tags: "</strong>{project.tags.join(", ")}</p>
            <p>
                <a href=project.live_url.clone() target="_blank" rel="noopener noreferrer">"Live"</a>
                " | "
                <a href=project.github_url.clone() target="_blank" rel="noopener noreferrer">"GitHub"</a>
            </p>
            <Show
                when=is_editing
                fallback=move || view! {
                    <div class="message-actions">
                        <button class="reply" on:click=move |_| {
                            set_patch.set(original.with_value(ProjectPatch::from_project));
                            editing.set(Some(EditTarget::Project(id.get_value())));
                        }>"Edit"</button>
                        <DeleteConfirmButton button_class="delete" prompt="Delete this project?" on_confirm=delete />
                        <button class="publish" on:click=toggle_publish>
                            {if published { "Unpublish" } else { "Publish" }}
                        </button>
                    </div>
                }
            >
                <div class="inline-edit">
                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=move || patch.with(|p| p.title.clone())
                        on:input=move |ev| set_patch.update(|p| p.title = event_target_value(&ev))
                    />
                    <textarea
                        rows="4"
                        placeholder="Description"
                        prop:value=move || patch.with(|p| p.description.clone())
                        on:input=move |ev| set_patch.update(|p| p.description = event_target_value(&ev))
                    ></textarea>
                    <input
                        type="text"
                        placeholder="Live URL"
                        prop:value=move || patch.with(|p| p.live_url.clone())
                        on:input=move |ev| set_patch.update(|p| p.live_url = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="GitHub URL"
                        prop:value=move || patch.with(|p| p.github_url.clone())
                        on:input=move |ev| set_patch.update(|p| p.github_url = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Tags (comma separated)"
                        prop:value=move || patch.with(|p| p.tags.clone())
                        on:input=move |ev| set_patch.update(|p| p.tags = event_target_value(&ev))
                    />
                    <div class="message-actions">
                        <button class="reply" on:click=save>"Save"</button>
                        <button class="cancel-btn" on:click=move |_| editing.set(None)>"Cancel"</button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
