pub mod filter;
pub mod models;
pub mod seed;
pub mod store;
pub mod taxonomy;

pub use filter::filter_books;
pub use models::{Book, ViewId};
pub use store::{reduce, Action, CatalogState, CatalogStore};
