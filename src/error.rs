//! Signer-level error types shared across configuration and per-request signing.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical signer error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Per-request signing failure.
	#[error(transparent)]
	Sign(#[from] SignError),
}

/// Configuration and validation failures raised while building a signer.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Shared secret was provided but empty.
	#[error("Signing secret must not be empty.")]
	EmptySecret,
	/// Configured header name is not a valid HTTP header name.
	#[error("`{name}` is not a valid HTTP header name.")]
	InvalidHeaderName {
		/// Rejected header name.
		name: String,
	},
	/// Host prefix failed validation.
	#[error("Host prefix is invalid.")]
	InvalidPrefix(#[from] crate::config::HostPrefixError),
	/// Builder was finalized without a host prefix.
	#[error("Signer configuration is missing the host prefix.")]
	MissingPrefix,
	/// Builder was finalized without a shared secret.
	#[error("Signer configuration is missing the shared secret.")]
	MissingSecret,
}

/// Per-request signing failures.
#[derive(Debug, ThisError)]
pub enum SignError {
	/// JSON body serialization failed.
	#[error("Request body could not be serialized to JSON.")]
	BodySerialization(
		#[source] serde_path_to_error::Error<serde_json::Error>,
	),
	/// Signed header value contains bytes HTTP cannot carry.
	#[error("Signed header `{name}` produced an invalid HTTP header value.")]
	InvalidHeaderValue {
		/// Header whose value was rejected.
		name: String,
	},
	/// Request body cannot be inspected (e.g. a streaming body).
	#[error("Request body is opaque and cannot be signed.")]
	OpaqueBody,
	/// Request URL does not contain the configured host prefix.
	#[error("URL `{url}` does not contain the configured host prefix `{prefix}`.")]
	PrefixMismatch {
		/// Offending request URL.
		url: String,
		/// Prefix the configuration expected to strip.
		prefix: String,
	},
}
