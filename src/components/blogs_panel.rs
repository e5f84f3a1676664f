//! Blogs Panel Component
//!
//! Every post including drafts, with inline edit, publish toggle and delete.

use folio_core::domain::{Blog, BlogPatch};
use leptos::prelude::*;

use crate::components::{BlogForm, DeleteConfirmButton, EditTarget};
use crate::context::use_app;
use crate::format::display_datetime;
use crate::models::Notice;
use crate::store::{
    reload_blogs, spawn_mutation, store_remove_blog, store_set_blog_published, use_dashboard_store,
    DashboardStateStoreFields,
};

const ROW_EXCERPT_CHARS: usize = 100;

#[component]
pub fn BlogsPanel() -> impl IntoView {
    let store = use_dashboard_store();
    let (notice, set_notice) = signal(None::<Notice>);

    view! {
        <section class="dashboard-section" id="blogs">
            <h2>"Blogs"</h2>
            <BlogForm />
            {move || notice.get().map(|n| view! { <p class=n.class()>{n.text().to_string()}</p> })}
            {move || store.blogs_error().get().map(|msg| view! { <p class="placeholder">{msg}</p> })}
            <Show when=move || store.blogs().with(|b| b.is_empty()) && store.blogs_error().with(|e| e.is_none())>
                <p class="placeholder">"No blogs found."</p>
            </Show>
            <div id="blog-container">
                <For
                    each=move || store.blogs().get()
                    key=|b| (b.id.clone(), b.published, b.title.clone(), b.content.clone(), b.author.clone())
                    children=move |blog| view! { <BlogRow blog=blog set_notice=set_notice /> }
                />
            </div>
        </section>
    }
}

#[component]
fn BlogRow(blog: Blog, set_notice: WriteSignal<Option<Notice>>) -> impl IntoView {
    let ctx = use_app();
    let store = use_dashboard_store();
    let editing = expect_context::<RwSignal<Option<EditTarget>>>();

    let id = StoredValue::new(blog.id.clone());
    let original = StoredValue::new(blog.clone());
    let published = blog.published;
    let is_editing = move || editing.with(|t| id.with_value(|id| EditTarget::is_blog(t, id)));
    let (patch, set_patch) = signal(BlogPatch::from_blog(&blog));

    let toggle_publish = move |_| {
        let id = id.get_value();
        let action = async move {
            ctx.repo::<Blog>().set_published(&id, !published).await?;
            store_set_blog_published(&store, &id, !published);
            Ok(())
        };
        let done = if published { "Blog unpublished." } else { "Blog published." };
        spawn_mutation(set_notice, done, action, reload_blogs(ctx, store));
    };

    let save = move |_| {
        let input = patch.get_untracked();
        if let Err(e) = input.validate() {
            set_notice.set(Some(Notice::Error(e.to_string())));
            return;
        }
        editing.set(None);
        let id = id.get_value();
        let action = async move { ctx.repo::<Blog>().update(&id, input).await };
        spawn_mutation(set_notice, "Blog updated.", action, reload_blogs(ctx, store));
    };

    let delete = move |_| {
        let id = id.get_value();
        let action = async move {
            ctx.repo::<Blog>().delete(&id).await?;
            store_remove_blog(&store, &id);
            Ok(())
        };
        spawn_mutation(set_notice, "Blog deleted.", action, reload_blogs(ctx, store));
    };

    let summary = view! {
        <p><strong>{blog.title.clone()}</strong>
            {(!published).then(|| view! { <span class="badge">"Draft"</span> })}
        </p>
        {(!blog.image_url.is_empty()).then(|| view! {
            <img class="row-thumb" src=blog.image_url.clone() alt=blog.title.clone() />
        })}
        <p>{blog.excerpt(ROW_EXCERPT_CHARS)}</p>
        <p><strong>"Author: "</strong>{blog.author.clone()}</p>
        <p><strong>"Date: "</strong>{display_datetime(blog.created_at)}</p>
        <p><strong>"Category: "</strong>{blog.category_label()}</p>
        <p><strong>"Tags: "</strong>{blog.tags.join(", ")}</p>
    };

    view! {
        <div class="blog-item">
            {summary}
            <Show
                when=is_editing
                fallback=move || view! {
                    <div class="message-actions">
                        <button class="reply" on:click=move |_| {
                            set_patch.set(original.with_value(BlogPatch::from_blog));
                            editing.set(Some(EditTarget::Blog(id.get_value())));
                        }>"Edit"</button>
                        <DeleteConfirmButton button_class="delete" prompt="Delete this blog?" on_confirm=delete />
                        <button class="publish" on:click=toggle_publish>
                            {if published { "Unpublish" } else { "Publish" }}
                        </button>
                    </div>
                }
            >
                <div class="inline-edit">
                    <input
                        type="text"
                        prop:value=move || patch.with(|p| p.title.clone())
                        on:input=move |ev| set_patch.update(|p| p.title = event_target_value(&ev))
                    />
                    <textarea
                        rows="6"
                        prop:value=move || patch.with(|p| p.content.clone())
                        on:input=move |ev| set_patch.update(|p| p.content = event_target_value(&ev))
                    ></textarea>
                    <input
                        type="text"
                        prop:value=move || patch.with(|p| p.author.clone())
                        on:input=move |ev| set_patch.update(|p| p.author = event_target_value(&ev))
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
