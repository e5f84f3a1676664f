//! New Project Form Component

use folio_core::domain::{Project, ProjectDraft};
use folio_core::FolioResult;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser::{clear_file, selected_file};
use crate::commands::upload_image;
use crate::context::{use_app, AppContext};
use crate::models::Notice;
use crate::store::{reload_projects, use_dashboard_store};

async fn create_project(ctx: AppContext, draft: ProjectDraft, image: web_sys::File) -> FolioResult<String> {
    let (cloud, preset) = ctx.with_config(|c| (c.media.cloud_name.clone(), c.media.project_preset.clone()));
    let url = upload_image(&cloud, &preset, image).await?;
    ctx.repo::<Project>().create(draft.with_image(url)).await
}

#[component]
pub fn ProjectForm() -> impl IntoView {
    let ctx = use_app();
    let store = use_dashboard_store();

    let (draft, set_draft) = signal(ProjectDraft::default());
    let (busy, set_busy) = signal(false);
    let (notice, set_notice) = signal(None::<Notice>);
    let image_input = NodeRef::<html::Input>::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = draft.get_untracked();
        let image = selected_file(&image_input);
        if let Err(e) = input.validate(image.is_some()) {
            set_notice.set(Some(Notice::Error(e.to_string())));
            return;
        }
        let Some(image) = image else { return };

        set_busy.set(true);
        spawn_local(async move {
            let result = create_project(ctx, input, image).await;
            if result.is_ok() {
                set_draft.set(ProjectDraft::default());
                clear_file(&image_input);
                reload_projects(ctx, store).await;
            }
            set_notice.set(Some(Notice::from_result(&result, "Project added successfully!")));
            set_busy.set(false);
        });
    };

    // (placeholder, field accessor) for the plain text inputs
    let text_field = move |placeholder: &'static str, get: fn(&ProjectDraft) -> &String, set: fn(&mut ProjectDraft, String)| {
        view! {
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || draft.with(|d| get(d).clone())
                on:input=move |ev| set_draft.update(|d| set(d, event_target_value(&ev)))
            />
        }
    };

    view! {
        <form class="admin-form" on:submit=submit>
            <h3>"Add Project"</h3>
            {text_field("Title", |d| &d.title, |d, v| d.title = v)}
            <textarea
                rows="4"
                placeholder="Description"
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |ev| set_draft.update(|d| d.description = event_target_value(&ev))
            ></textarea>
            <input type="file" accept="image/*" node_ref=image_input />
            {text_field("Live URL", |d| &d.live_url, |d, v| d.live_url = v)}
            {text_field("GitHub URL", |d| &d.github_url, |d, v| d.github_url = v)}
            {text_field("Category", |d| &d.category, |d, v| d.category = v)}
            {text_field("Tags (comma separated)", |d| &d.tags, |d, v| d.tags = v)}
            <button type="submit" class="btn" disabled=move || busy.get()>
                {move || if busy.get() { "Uploading..." } else { "Add Project" }}
            </button>
            {move || notice.get().map(|n| view! { <p class=n.class()>{n.text().to_string()}</p> })}
        </form>
    }
}
