//! SCM server endpoint registry.
//!
//! This crate lets an operator register, validate, and enumerate named
//! source-control server endpoints such as GitHub Enterprise instances. It
//! guarantees that endpoint names and API URLs stay unique and that
//! concurrent registrations against the shared configuration store are
//! serialised.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Endpoints, server kinds, and derived credential identities
//! - **Ports**: Traits for the configuration store, reachability probe, and
//!   credential store
//! - **Adapters**: In-memory, JSON file, and HTTP implementations of ports
//!
//! # Modules
//!
//! - [`scm_server`]: Endpoint registration, validation, and discovery

pub mod scm_server;
