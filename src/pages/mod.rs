//! Pages
//!
//! One component per route.

mod blog_list;
mod blog_post;
mod dashboard;
mod home;
mod login;
mod projects;

pub use blog_list::BlogListPage;
pub use blog_post::BlogPostPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use projects::ProjectsPage;
