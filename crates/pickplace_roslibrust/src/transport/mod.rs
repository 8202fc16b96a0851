//! Transport glue. Everything here is optional and feature-gated.

#[cfg(feature = "roslibrust")]
pub mod roslibrust;
