//! Secure signing secret wrapper that redacts sensitive material.
//!
//! The shared secret is an opaque byte string: deployments may hand out UTF-8 passphrases or
//! raw key bytes, and the MAC consumes whichever form verbatim.

// self
use crate::_prelude::*;

/// Redacted shared-secret wrapper keeping key material out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningSecret(Vec<u8>);
impl SigningSecret {
	/// Wraps new secret bytes.
	pub fn new(value: impl AsRef<[u8]>) -> Self {
		Self(value.as_ref().to_vec())
	}

	/// Returns the raw key bytes fed to the MAC. Callers must avoid logging them.
	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	/// Returns the key length in bytes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no key material is present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl AsRef<[u8]> for SigningSecret {
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}
impl Debug for SigningSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("SigningSecret(<redacted>)")
	}
}
impl Display for SigningSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
