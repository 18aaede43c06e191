//! View-state engine.
//!
//! Filter state, sort selector, pagination and the view derivation that ties
//! them to the record store.

pub mod filter;
pub mod pagination;
pub mod sort;
pub mod view;

pub use filter::{ActiveFilterLabel, FilterField, FilterState};
pub use pagination::Pagination;
pub use sort::{SortKey, SortSelector};
pub use view::ViewEngine;
