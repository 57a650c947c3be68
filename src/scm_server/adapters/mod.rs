//! Adapter implementations for SCM server registry ports.

pub mod file;
pub mod http;
pub mod memory;
