//! View Model Layer
//!
//! Client-side pagination and faceted filtering over fully loaded lists.
//! No I/O happens here except [`ListController::reload`], which reads through
//! an injected store.

mod controller;
mod filter;
mod list;
mod pagination;

pub use controller::ListController;
pub use filter::{Facet, FacetValue, Filter};
pub use list::{ListConfig, ListSnapshot, ListViewModel};
pub use pagination::{page_of_index, page_range, total_pages, PaginationDescriptor};
