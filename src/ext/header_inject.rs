//! Header injection contracts that let downstream crates attach signed headers to arbitrary
//! HTTP clients.

// self
use crate::sign::SignedHeaders;

/// Describes how to append a [`SignedHeaders`] pair to an outbound request without
/// constraining the HTTP client type.
///
/// The trait is intentionally generic over both the request and error types so implementers
/// can integrate with any client builder (`reqwest`, `surf`, a bespoke SDK, etc.) while
/// keeping the core crate free of those dependencies. Implementations must append the headers
/// rather than replace same-named entries already present on the request.
pub trait HeaderInjectExt<Request, Error>
where
	Self: Send + Sync,
{
	/// Consumes (or clones) the provided request and appends the signed header pair.
	fn inject_headers(&self, request: Request, headers: &SignedHeaders) -> Result<Request, Error>;
}
