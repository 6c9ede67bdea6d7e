//! Deterministic HMAC-SHA256 request pre-signing—compute `timestamp` + `sign` headers once and
//! attach them to any HTTP client's outgoing requests.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod config;
pub mod error;
pub mod ext;
#[cfg(feature = "reqwest")] pub mod http;
pub mod obs;
pub mod sign;

mod _prelude {
	pub use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
#[cfg(all(test, not(feature = "reqwest")))] use reqwest as _;
