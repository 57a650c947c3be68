//! SCM server endpoint registration and discovery.
//!
//! This module lets an operator register, validate, and enumerate named
//! source-control server endpoints (for example GitHub Enterprise instances)
//! while keeping endpoint names and API URLs unique across a shared
//! configuration store. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Creation-request validation in [`validation`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
