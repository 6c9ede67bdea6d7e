//! Public extension contracts (signed-header injection for arbitrary HTTP clients).
//!
//! The core crate computes header values without depending on any HTTP stack; this module
//! exposes the trait downstream crates implement to carry those values into their own request
//! types. The `reqwest` feature ships the one concrete implementation in [`crate::http`].

pub mod header_inject;

pub use header_inject::*;
