//! Messages Panel Component
//!
//! Contact messages, newest first, searchable by name or text. The search runs
//! over the loaded list; reply opens a mail compose window.

use folio_core::domain::Message;
use folio_core::view_model::{ListConfig, ListSnapshot, ListViewModel};
use leptos::prelude::*;

use crate::browser;
use crate::components::{DeleteConfirmButton, PaginationBar};
use crate::context::use_app;
use crate::format::{display_datetime, reply_url};
use crate::models::Notice;
use crate::store::{reload_messages, spawn_mutation, store_remove_message, use_dashboard_store, DashboardStateStoreFields};

pub const PANEL_PAGE_SIZE: usize = 10;

/// Messages matching `search` on `page`, or on the last page once a delete
/// has left fewer pages than that.
pub fn message_listing(messages: Vec<Message>, search: &str, page: usize) -> ListSnapshot<Message> {
    let mut model = ListViewModel::new(ListConfig { page_size: PANEL_PAGE_SIZE, recent_count: 0 });
    model.load(messages);
    model.set_search(search);
    if !model.go_to_page(page) {
        let last = model.total_pages();
        model.go_to_page(last);
    }
    model.snapshot()
}

#[component]
pub fn MessagesPanel() -> impl IntoView {
    let ctx = use_app();
    let store = use_dashboard_store();

    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1usize);
    let (notice, set_notice) = signal(None::<Notice>);

    let listing = Memo::new(move |_| message_listing(store.messages().get(), &search.get(), page.get()));

    // Keep the page signal on the page actually shown
    Effect::new(move |_| {
        let shown = listing.with(|l| l.pagination.current_page);
        if shown != page.get_untracked() {
            set_page.set(shown);
        }
    });

    let delete = move |id: String| {
        let action = async move {
            ctx.repo::<Message>().delete(&id).await?;
            store_remove_message(&store, &id);
            Ok(())
        };
        spawn_mutation(set_notice, "Message deleted.", action, reload_messages(ctx, store));
    };

    view! {
        <section class="dashboard-section" id="messages">
            <h2>"Messages"</h2>
            <input
                type="search"
                id="search-msg"
                placeholder="Search messages..."
                prop:value=move || search.get()
                on:input=move |ev| {
                    set_search.set(event_target_value(&ev));
                    set_page.set(1);
                }
            />
            {move || notice.get().map(|n| view! { <p class=n.class()>{n.text().to_string()}</p> })}
            {move || store.messages_error().get().map(|msg| view! { <p class="placeholder">{msg}</p> })}
            <Show when=move || listing.with(|l| l.matched == 0) && store.messages_error().with(|e| e.is_none())>
                <p class="placeholder">"No messages found."</p>
            </Show>
            <div id="messages-container">
                <For
                    each=move || listing.get().page_items
                    key=|m| m.id.clone()
                    children=move |m| {
                        let reply = reply_url(&m.email);
                        let id = m.id.clone();
                        view! {
                            <div class="message-item">
                                <p><strong>{m.name.clone()}</strong> ": " {m.message.clone()}</p>
                                <p class="message-meta">{m.email.clone()} " · " {display_datetime(m.created_at)}</p>
                                <div class="message-actions">
                                    <button class="reply" on:click=move |_| browser::open_in_new_tab(&reply)>
                                        "Reply"
                                    </button>
                                    <DeleteConfirmButton
                                        button_class="delete"
                                        prompt="Delete this message?"
                                        on_confirm=move |_| delete(id.clone())
                                    />
                                </div>
                            </div>
                        }
                    }
                />
            </div>
            <Show when=move || listing.with(|l| l.pagination.total_pages > 1)>
                <PaginationBar
                    pagination=Signal::derive(move || listing.get().pagination)
                    on_page=move |n| set_page.set(n)
                />
            </Show>
        </section>
    }
}
