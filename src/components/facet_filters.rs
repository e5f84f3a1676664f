//! Facet Filter Components
//!
//! Two renderings of the same single-select facet: a sidebar list (blog) and
//! a dropdown (projects). Both offer "All" ahead of the derived options.

use folio_core::view_model::FacetValue;
use leptos::prelude::*;

/// Sidebar widget with one link per option; the selected one is highlighted.
#[component]
pub fn FacetList(
    #[prop(into)] title: String,
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<FacetValue>,
    #[prop(into)] on_select: Callback<FacetValue>,
) -> impl IntoView {
    view! {
        <div class="sidebar-widget">
            <h3>{title}</h3>
            <ul class="facet-list">
                <li>
                    <a
                        href="#"
                        class=move || if selected.get().is_all() { "facet active" } else { "facet" }
                        on:click=move |ev| {
                            ev.prevent_default();
                            on_select.run(FacetValue::All);
                        }
                    >
                        {FacetValue::ALL}
                    </a>
                </li>
                <For
                    each=move || options.get()
                    key=|option| option.clone()
                    children=move |option| {
                        let label = option.clone();
                        let active = {
                            let option = option.clone();
                            move || selected.get().is(&option)
                        };
                        view! {
                            <li>
                                <a
                                    href="#"
                                    class=move || if active() { "facet active" } else { "facet" }
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        on_select.run(FacetValue::Only(option.clone()));
                                    }
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

/// Dropdown whose empty value stands for "All".
#[component]
pub fn FacetSelect(
    #[prop(into)] all_label: String,
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<FacetValue>,
    #[prop(into)] on_select: Callback<FacetValue>,
) -> impl IntoView {
    view! {
        <select
            class="filter-select"
            prop:value=move || selected.get().as_option().unwrap_or_default().to_string()
            on:change=move |ev| on_select.run(FacetValue::parse(&event_target_value(&ev)))
        >
            <option value="">{all_label}</option>
            <For
                each=move || options.get()
                key=|option| option.clone()
                children=move |option| view! { <option value=option.clone()>{option.clone()}</option> }
            />
        </select>
    }
}
