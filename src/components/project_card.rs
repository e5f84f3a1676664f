//! Project Card Component
//!
//! Gallery card with a hover overlay (Details link, Live Demo button) and the
//! screenshot modal the Live Demo button opens.

use folio_core::domain::Project;
use leptos::prelude::*;

#[component]
pub fn ProjectCard(project: Project, #[prop(into)] on_preview: Callback<Project>) -> impl IntoView {
    let tags = project.tags.clone();
    let details = (!project.github_url.is_empty()).then(|| {
        view! {
            <a href=project.github_url.clone() target="_blank" rel="noopener noreferrer" class="btn-small">
                "Details"
            </a>
        }
    });
    let image = project.image_url.clone();
    let title = project.title.clone();

    view! {
        <div class="project-card">
            <div class="project-img-wrapper">
                <img src=image alt=title.clone() class="project-img" loading="lazy" />
                <div class="project-overlay">
                    <div class="project-actions">
                        {details}
                        <button class="btn-small live-demo-btn" on:click=move |_| on_preview.run(project.clone())>
                            "Live Demo"
                        </button>
                    </div>
                </div>
            </div>
            <div class="project-name">{title}</div>
            <div class="project-meta">
                {tags.into_iter().map(|tag| view! { <span>{tag}</span> }).collect_view()}
            </div>
        </div>
    }
}

/// Enlarged screenshot; closes on × or a click outside the image.
#[component]
pub fn ScreenshotModal(
    #[prop(into)] project: Signal<Option<Project>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    move || {
        project.get().map(|p| {
            let visit = (!p.live_url.is_empty()).then(|| {
                view! {
                    <a class="btn-small" href=p.live_url.clone() target="_blank" rel="noopener noreferrer">
                        "Visit Live Site"
                    </a>
                }
            });
            view! {
                <div id="screenshot-modal" class="modal" on:click=move |_| on_close.run(())>
                    <div class="modal-content screenshot" on:click=|ev| ev.stop_propagation()>
                        <button class="modal-close" aria-label="Close" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                        <img src=p.image_url.clone() alt=p.title.clone() />
                        {visit}
                    </div>
                </div>
            }
        })
    }
}
