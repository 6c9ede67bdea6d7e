//! The request signer: turns (config, context) into the `timestamp` + `sign` header pair.

// self
use crate::{
	_prelude::*,
	config::SignerConfig,
	error::SignError,
	obs::{self, SignOutcome, SignSpan},
	sign::{Signature, input},
};

/// Stateless request signer holding validated configuration.
///
/// The signer is pure: it never dispatches requests and carries no mutable state, so a single
/// instance can be shared freely across threads and invocations.
#[derive(Clone, Debug)]
pub struct RequestSigner {
	config: SignerConfig,
}
impl RequestSigner {
	/// Creates a signer from a validated configuration.
	pub fn new(config: SignerConfig) -> Self {
		Self { config }
	}

	/// Returns the signer's configuration.
	pub fn config(&self) -> &SignerConfig {
		&self.config
	}

	/// Produces the signed header pair for the provided context.
	pub fn sign(&self, context: &SignContext) -> Result<SignedHeaders> {
		let _span = SignSpan::new("sign").entered();

		obs::record_sign_outcome(SignOutcome::Attempt);

		let result = self.compute(context);

		match &result {
			Ok(_) => obs::record_sign_outcome(SignOutcome::Success),
			Err(_) => obs::record_sign_outcome(SignOutcome::Failure),
		}

		result.map_err(Error::from)
	}

	fn compute(&self, context: &SignContext) -> Result<SignedHeaders, SignError> {
		let timestamp = epoch_millis(context.observed_at).to_string();
		let path = input::signed_path(&context.url, self.config.prefix())?;
		let body = context.body.as_deref().unwrap_or_default();
		let signature = Signature::compute(self.config.secret(), &timestamp, &path, body);

		Ok(SignedHeaders {
			timestamp: SignedHeader {
				name: self.config.timestamp_header().to_owned(),
				value: timestamp,
			},
			signature: SignedHeader {
				name: self.config.sign_header().to_owned(),
				value: signature.to_base64(),
			},
		})
	}
}

/// Per-request signing context: URL, optional body, and the instant treated as "now".
#[derive(Clone, Debug)]
pub struct SignContext {
	/// Full request URL as the HTTP client renders it.
	pub url: String,
	/// Request body bytes, when present.
	pub body: Option<Vec<u8>>,
	/// Instant rendered into the `timestamp` header and signed first.
	pub observed_at: OffsetDateTime,
}
impl SignContext {
	/// Creates a context for the provided URL, observed at the current instant.
	pub fn new(url: impl Into<String>) -> Self {
		Self { url: url.into(), body: None, observed_at: OffsetDateTime::now_utc() }
	}

	/// Creates a context from a parsed [`Url`].
	pub fn from_url(url: &Url) -> Self {
		Self::new(url.as_str())
	}

	/// Attaches raw body bytes.
	pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
		self.body = Some(body.into());

		self
	}

	/// Serializes `value` to JSON and attaches it as the body, surfacing serialization
	/// failures with their path.
	pub fn with_json_body<T>(self, value: &T) -> Result<Self, SignError>
	where
		T: Serialize,
	{
		let mut buf = Vec::new();
		let mut serializer = serde_json::Serializer::new(&mut buf);

		serde_path_to_error::serialize(value, &mut serializer)
			.map_err(SignError::BodySerialization)?;

		Ok(self.with_body(buf))
	}

	/// Overrides the instant used for the timestamp fragment.
	pub fn with_observed_at(mut self, instant: OffsetDateTime) -> Self {
		self.observed_at = instant;

		self
	}
}

/// Header pair produced by [`RequestSigner::sign`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedHeaders {
	/// Millisecond-timestamp header.
	pub timestamp: SignedHeader,
	/// Base64-signature header.
	pub signature: SignedHeader,
}
impl SignedHeaders {
	/// Iterates the pair in injection order (timestamp first).
	pub fn iter(&self) -> impl Iterator<Item = &SignedHeader> {
		[&self.timestamp, &self.signature].into_iter()
	}
}

/// A single named header value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedHeader {
	/// Lowercase header name.
	pub name: String,
	/// Header value.
	pub value: String,
}

fn epoch_millis(instant: OffsetDateTime) -> i128 {
	instant.unix_timestamp_nanos() / 1_000_000
}
