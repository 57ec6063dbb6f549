//! Bindings to script-loaded libraries.

pub mod three;
