//! New Blog Form Component
//!
//! Uploads the cover image first, then stores the post as unpublished.

use folio_core::domain::{Blog, BlogDraft};
use folio_core::FolioResult;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser::{clear_file, selected_file};
use crate::commands::upload_image;
use crate::context::{use_app, AppContext};
use crate::models::Notice;
use crate::store::{reload_blogs, use_dashboard_store};

async fn create_blog(ctx: AppContext, draft: BlogDraft, image: web_sys::File) -> FolioResult<String> {
    let (cloud, preset) = ctx.with_config(|c| (c.media.cloud_name.clone(), c.media.blog_preset.clone()));
    let url = upload_image(&cloud, &preset, image).await?;
    ctx.repo::<Blog>().create(draft.with_image(url)).await
}

#[component]
pub fn BlogForm() -> impl IntoView {
    let ctx = use_app();
    let store = use_dashboard_store();

    let (draft, set_draft) = signal(BlogDraft::default());
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
            let result = create_blog(ctx, input, image).await;
            if result.is_ok() {
                set_draft.set(BlogDraft::default());
                clear_file(&image_input);
                reload_blogs(ctx, store).await;
            }
            set_notice.set(Some(Notice::from_result(&result, "Blog added successfully!")));
            set_busy.set(false);
        });
    };

    view! {
        <form class="admin-form" on:submit=submit>
            <h3>"Add Blog"</h3>
            <input
                type="text"
                placeholder="Title"
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |ev| set_draft.update(|d| d.title = event_target_value(&ev))
            />
            <textarea
                rows="6"
                placeholder="Content (Markdown)"
                prop:value=move || draft.with(|d| d.content.clone())
                on:input=move |ev| set_draft.update(|d| d.content = event_target_value(&ev))
            ></textarea>
            <input type="file" accept="image/*" node_ref=image_input />
            <input
                type="text"
                placeholder="Category"
                prop:value=move || draft.with(|d| d.category.clone())
                on:input=move |ev| set_draft.update(|d| d.category = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Tags (comma separated)"
                prop:value=move || draft.with(|d| d.tags.clone())
                on:input=move |ev| set_draft.update(|d| d.tags = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Author"
                prop:value=move || draft.with(|d| d.author.clone())
                on:input=move |ev| set_draft.update(|d| d.author = event_target_value(&ev))
            />
            <button type="submit" class="btn" disabled=move || busy.get()>
                {move || if busy.get() { "Uploading..." } else { "Add Blog" }}
            </button>
            {move || notice.get().map(|n| view! { <p class=n.class()>{n.text().to_string()}</p> })}
        </form>
    }
}
