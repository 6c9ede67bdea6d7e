//! Signing domain: redacted secret material, canonical signing input, and the request signer
//! itself.

pub mod input;
pub mod secret;
pub mod signer;

pub use input::*;
pub use secret::*;
pub use signer::*;
