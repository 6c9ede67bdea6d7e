//! reqwest integration: the pre-request hook that signs an outgoing request in place.
//!
//! [`RequestSigner::sign_request`] is the moral equivalent of the original pre-request
//! script: call it on a built [`Request`] immediately before dispatch and the `timestamp` +
//! `sign` headers are appended to the request's header map. Streaming bodies cannot be
//! inspected without consuming them, so they are rejected as opaque.

// crates.io
use reqwest::{
	Request,
	header::{HeaderName, HeaderValue},
};
// self
use crate::{
	_prelude::*,
	error::{ConfigError, SignError},
	ext::HeaderInjectExt,
	sign::{RequestSigner, SignContext, SignedHeader, SignedHeaders},
};

impl RequestSigner {
	/// Computes the signed header pair for `request` and appends it in place.
	pub fn sign_request(&self, request: &mut Request) -> Result<()> {
		let context = context_for(request)?;
		let headers = self.sign(&context)?;

		append_headers(request, &headers)
	}
}
impl HeaderInjectExt<Request, Error> for RequestSigner {
	fn inject_headers(&self, mut request: Request, headers: &SignedHeaders) -> Result<Request> {
		append_headers(&mut request, headers)?;

		Ok(request)
	}
}

fn context_for(request: &Request) -> Result<SignContext> {
	let mut context = SignContext::from_url(request.url());

	if let Some(body) = request.body() {
		let bytes = body.as_bytes().ok_or(SignError::OpaqueBody)?;

		context = context.with_body(bytes.to_vec());
	}

	Ok(context)
}

fn append_headers(request: &mut Request, headers: &SignedHeaders) -> Result<()> {
	for header in headers.iter() {
		let (name, value) = typed_pair(header)?;

		// Append keeps any same-named headers the caller already set.
		request.headers_mut().append(name, value);
	}

	Ok(())
}

fn typed_pair(header: &SignedHeader) -> Result<(HeaderName, HeaderValue)> {
	let name = HeaderName::from_bytes(header.name.as_bytes())
		.map_err(|_| ConfigError::InvalidHeaderName { name: header.name.clone() })?;
	let value = HeaderValue::from_str(&header.value)
		.map_err(|_| SignError::InvalidHeaderValue { name: header.name.clone() })?;

	Ok((name, value))
}
