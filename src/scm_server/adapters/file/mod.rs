//! File-backed adapters.

mod json_store;

pub use json_store::JsonFileEndpointStore;
