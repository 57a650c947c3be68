//! Creation-request validation.
//!
//! Individual rules live in [`rules`]; [`CreateRequestValidator`] runs all
//! of them and aggregates the failures so a caller can fix every problem in
//! one round trip.

pub mod rules;
pub mod service;

pub use service::CreateRequestValidator;
