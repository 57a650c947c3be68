//! Step definitions for SCM server registration scenarios.


mod given;
mod then;
mod when;
