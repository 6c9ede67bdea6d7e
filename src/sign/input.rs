//! Canonical signing input assembly and the signature value itself.
//!
//! The signing input is the concatenation of three fragments, fed to the MAC in order:
//! decimal millisecond timestamp, signed path (the request URL after prefix removal), and the
//! request body (empty when absent). The wire signature is the hex encoding of the HMAC-SHA256
//! digest re-encoded as base64, which is byte-for-byte the base64 of the raw digest.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
// self
use crate::{_prelude::*, config::HostPrefix, error::SignError, sign::SigningSecret};

type HmacSha256 = Hmac<Sha256>;

/// Derives the signed path by removing the first occurrence of `prefix` from `url`.
///
/// Removal is exact string matching: `127.0.0.1:8080/api/ping` with prefix `127.0.0.1:8080`
/// yields `/api/ping`. A URL that never contains the prefix would silently sign the wrong
/// string, so it is rejected instead.
pub fn signed_path(url: &str, prefix: &HostPrefix) -> Result<String, SignError> {
	let Some(at) = url.find(prefix.as_ref()) else {
		return Err(SignError::PrefixMismatch {
			url: url.to_owned(),
			prefix: prefix.as_ref().to_owned(),
		});
	};
	let mut path = String::with_capacity(url.len() - prefix.len());

	path.push_str(&url[..at]);
	path.push_str(&url[at + prefix.len()..]);

	Ok(path)
}

/// HMAC-SHA256 digest over a signing input.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature([u8; 32]);
impl Signature {
	/// Computes the signature over the three ordered fragments.
	pub fn compute(secret: &SigningSecret, timestamp: &str, path: &str, body: &[u8]) -> Self {
		let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
			.expect("HMAC accepts keys of any length");

		mac.update(timestamp.as_bytes());
		mac.update(path.as_bytes());
		mac.update(body);

		Self(mac.finalize().into_bytes().into())
	}

	/// Returns the raw digest bytes.
	pub fn as_bytes(&self) -> &[u8; 32] {
		&self.0
	}

	/// Returns the lowercase hex rendering of the digest, kept for diagnostics.
	pub fn to_hex(&self) -> String {
		hex::encode(self.0)
	}

	/// Returns the wire form: base64 of the digest bytes, identical to re-encoding the hex
	/// byte pairs as base64.
	pub fn to_base64(&self) -> String {
		STANDARD.encode(self.0)
	}
}
impl Debug for Signature {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Signature({})", self.to_hex())
	}
}
impl Display for Signature {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.to_base64())
	}
}
