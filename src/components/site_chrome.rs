//! Site Chrome Components
//!
//! Navigation bar (theme toggle, hamburger menu) and footer shared by every page.

use leptos::prelude::*;

use crate::browser;
use crate::context::use_app;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/projects", "Projects"),
    ("/blog", "Blog"),
    ("/#contact", "Contact"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app();
    let site_name = ctx.with_config(|c| c.site_name.clone());

    let (theme, set_theme) = signal(browser::saved_theme());
    let (menu_open, set_menu_open) = signal(false);

    Effect::new(move |_| browser::apply_theme(theme.get()));

    view! {
        <header class="navbar">
            <a href="/" class="logo">{site_name}</a>
            <nav
                id="nav-menu"
                class=move || if menu_open.get() { "nav-links show" } else { "nav-links" }
            >
                {NAV_LINKS.iter().map(|(href, label)| view! {
                    <a href=*href class="nav-link" on:click=move |_| set_menu_open.set(false)>
                        {*label}
                    </a>
                }).collect_view()}
            </nav>
            <button
                id="theme-toggle"
                class="theme-toggle"
                aria-label="Toggle theme"
                on:click=move |_| set_theme.update(|t| *t = t.toggled())
            >
                {move || theme.get().icon()}
            </button>
            <button
                id="hamburger"
                class="hamburger"
                aria-label="Menu"
                aria-controls="nav-menu"
                aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let ctx = use_app();
    let author = ctx.with_config(|c| c.author.clone());

    view! {
        <footer class="footer">
            <p>"© " <span id="year">{browser::current_year()}</span> " " {author} ". All rights reserved."</p>
        </footer>
    }
}
