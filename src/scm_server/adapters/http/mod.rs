//! HTTP adapters.

mod probe;

pub use probe::{HttpReachabilityProbe, ProbeConfigError};
