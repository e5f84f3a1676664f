//! Pagination Bar Component
//!
//! « Previous, one link per page with the current one marked, Next ».

use folio_core::view_model::PaginationDescriptor;
use leptos::prelude::*;

#[component]
pub fn PaginationBar(
    #[prop(into)] pagination: Signal<PaginationDescriptor>,
    /// Requested page number, 1-based
    #[prop(into)] on_page: Callback<usize>,
) -> impl IntoView {
    let step = move |ev: web_sys::MouseEvent, forward: bool| {
        ev.prevent_default();
        let p = pagination.get_untracked();
        match forward {
            true if p.has_next => on_page.run(p.current_page + 1),
            false if p.has_prev => on_page.run(p.current_page - 1),
            _ => {}
        }
    };

    view! {
        <nav class="pagination" aria-label="Pagination">
            <a
                href="#"
                class=move || if pagination.get().has_prev { "page-link" } else { "page-link disabled" }
                aria-disabled=move || (!pagination.get().has_prev).to_string()
                on:click=move |ev| step(ev, false)
            >
                "« Previous"
            </a>
            {move || {
                let p = pagination.get();
                p.pages().map(|n| {
                    let current = p.is_current(n);
                    view! {
                        <a
                            href="#"
                            class=if current { "page-link active" } else { "page-link" }
                            aria-current=if current { Some("page") } else { None }
                            on:click=move |ev| {
                                ev.prevent_default();
                                on_page.run(n);
                            }
                        >
                            {n}
                        </a>
                    }
                }).collect_view()
            }}
            <a
                href="#"
                class=move || if pagination.get().has_next { "page-link" } else { "page-link disabled" }
                aria-disabled=move || (!pagination.get().has_next).to_string()
                on:click=move |ev| step(ev, true)
            >
                "Next »"
            </a>
        </nav>
    }
}
