//! UI Components
//!
//! Reusable Leptos components.

mod blog_form;
mod blogs_panel;
mod contact_form;
mod delete_confirm_button;
mod editor_target;
mod facet_filters;
mod line_chart;
mod messages_panel;
mod pagination_bar;
mod post_card;
mod project_card;
mod project_form;
mod projects_panel;
mod site_chrome;

pub use blog_form::BlogForm;
pub use blogs_panel::BlogsPanel;
pub use contact_form::ContactForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use editor_target::EditTarget;
pub use facet_filters::{FacetList, FacetSelect};
pub use line_chart::LineChart;
pub use messages_panel::MessagesPanel;
pub use pagination_bar::PaginationBar;
pub use post_card::{PostCard, PostModal};
pub use project_card::{ProjectCard, ScreenshotModal};
pub use project_form::ProjectForm;
pub use projects_panel::ProjectsPanel;
pub use site_chrome::{NavBar, SiteFooter};
