//! Record catalog module.
//!
//! Provides the record model, the record store and the record source.

pub mod models;
pub mod source;
pub mod store;

pub use models::{CostRange, Record};
pub use source::RecordSource;
pub use store::RecordStore;
