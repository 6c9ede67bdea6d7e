//! Explicit signer configuration replacing the original hook's ambient globals.
//!
//! The pre-request script this crate grew out of kept its shared secret and host prefix as
//! edit-me constants. Here both become validated constructor parameters: the secret must be
//! non-empty, the prefix must be a plausible host string, and the header-name pair is checked
//! against the HTTP token grammar before a [`SignerConfig`] can exist.

// std
use std::{borrow::Borrow, ops::Deref, str::FromStr};
// self
use crate::{_prelude::*, error::ConfigError, sign::SigningSecret};

/// Default name for the millisecond-timestamp header.
pub const DEFAULT_TIMESTAMP_HEADER: &str = "timestamp";
/// Default name for the signature header.
pub const DEFAULT_SIGN_HEADER: &str = "sign";

const HOST_PREFIX_MAX_LEN: usize = 256;

/// Error returned when host prefix validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum HostPrefixError {
	/// The prefix contains whitespace characters.
	#[error("Host prefix contains whitespace.")]
	ContainsWhitespace,
	/// The prefix was empty.
	#[error("Host prefix cannot be empty.")]
	Empty,
	/// The prefix exceeded the allowed character count.
	#[error("Host prefix exceeds {max} characters.")]
	TooLong {
		/// Maximum permitted character count.
		max: usize,
	},
}

/// Host/port prefix stripped from request URLs to derive the signed path.
///
/// Stripping is exact first-occurrence string removal, so the prefix must match the URL
/// rendering the HTTP client produces (scheme included, if the client prints one).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HostPrefix(String);
impl HostPrefix {
	/// Creates a new prefix after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, HostPrefixError> {
		let view = value.as_ref();

		validate_prefix(view)?;

		Ok(Self(view.to_owned()))
	}
}
impl Deref for HostPrefix {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for HostPrefix {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<HostPrefix> for String {
	fn from(value: HostPrefix) -> Self {
		value.0
	}
}
impl TryFrom<String> for HostPrefix {
	type Error = HostPrefixError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_prefix(&value)?;

		Ok(Self(value))
	}
}
impl Borrow<str> for HostPrefix {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl Debug for HostPrefix {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "HostPrefix({})", self.0)
	}
}
impl Display for HostPrefix {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for HostPrefix {
	type Err = HostPrefixError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

fn validate_prefix(view: &str) -> Result<(), HostPrefixError> {
	if view.is_empty() {
		return Err(HostPrefixError::Empty);
	}
	if view.chars().any(char::is_whitespace) {
		return Err(HostPrefixError::ContainsWhitespace);
	}
	if view.len() > HOST_PREFIX_MAX_LEN {
		return Err(HostPrefixError::TooLong { max: HOST_PREFIX_MAX_LEN });
	}

	Ok(())
}

/// Validated signer configuration.
///
/// Construct via [`SignerConfig::builder`] or deserialize from a config file; both paths run
/// the same validation.
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "SignerConfigSource")]
pub struct SignerConfig {
	secret: SigningSecret,
	prefix: HostPrefix,
	timestamp_header: String,
	sign_header: String,
}
impl SignerConfig {
	/// Starts a fresh builder.
	pub fn builder() -> SignerConfigBuilder {
		SignerConfigBuilder::default()
	}

	/// Returns the shared secret.
	pub fn secret(&self) -> &SigningSecret {
		&self.secret
	}

	/// Returns the host prefix stripped from request URLs.
	pub fn prefix(&self) -> &HostPrefix {
		&self.prefix
	}

	/// Returns the header name carrying the millisecond timestamp.
	pub fn timestamp_header(&self) -> &str {
		&self.timestamp_header
	}

	/// Returns the header name carrying the base64 signature.
	pub fn sign_header(&self) -> &str {
		&self.sign_header
	}
}
impl TryFrom<SignerConfigSource> for SignerConfig {
	type Error = ConfigError;

	fn try_from(source: SignerConfigSource) -> Result<Self, Self::Error> {
		let mut builder = Self::builder().secret(source.secret).prefix(source.prefix);

		if let Some(name) = source.timestamp_header {
			builder = builder.timestamp_header(name);
		}
		if let Some(name) = source.sign_header {
			builder = builder.sign_header(name);
		}

		builder.build()
	}
}

/// Raw deserialization source for [`SignerConfig`]; funnels file-loaded values through the
/// builder so both construction paths validate identically.
#[derive(Debug, Deserialize)]
struct SignerConfigSource {
	secret: String,
	prefix: String,
	timestamp_header: Option<String>,
	sign_header: Option<String>,
}

/// Builder that validates every field before producing a [`SignerConfig`].
#[derive(Clone, Debug, Default)]
pub struct SignerConfigBuilder {
	secret: Option<Vec<u8>>,
	prefix: Option<String>,
	timestamp_header: Option<String>,
	sign_header: Option<String>,
}
impl SignerConfigBuilder {
	/// Sets the shared secret bytes (required, non-empty).
	pub fn secret(mut self, secret: impl AsRef<[u8]>) -> Self {
		self.secret = Some(secret.as_ref().to_vec());

		self
	}

	/// Sets the host prefix stripped from request URLs (required).
	pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());

		self
	}

	/// Overrides the timestamp header name (defaults to [`DEFAULT_TIMESTAMP_HEADER`]).
	pub fn timestamp_header(mut self, name: impl Into<String>) -> Self {
		self.timestamp_header = Some(name.into());

		self
	}

	/// Overrides the signature header name (defaults to [`DEFAULT_SIGN_HEADER`]).
	pub fn sign_header(mut self, name: impl Into<String>) -> Self {
		self.sign_header = Some(name.into());

		self
	}

	/// Validates the collected fields and produces the configuration.
	pub fn build(self) -> Result<SignerConfig, ConfigError> {
		let secret = self.secret.ok_or(ConfigError::MissingSecret)?;

		if secret.is_empty() {
			return Err(ConfigError::EmptySecret);
		}

		let prefix = HostPrefix::new(self.prefix.ok_or(ConfigError::MissingPrefix)?)?;
		let timestamp_header = validate_header_name(
			self.timestamp_header.unwrap_or_else(|| DEFAULT_TIMESTAMP_HEADER.into()),
		)?;
		let sign_header =
			validate_header_name(self.sign_header.unwrap_or_else(|| DEFAULT_SIGN_HEADER.into()))?;

		Ok(SignerConfig {
			secret: SigningSecret::new(secret),
			prefix,
			timestamp_header,
			sign_header,
		})
	}
}

// RFC 9110 token grammar; names are normalized to lowercase so append-time conversion into a
// typed header map never fails on case.
fn validate_header_name(name: String) -> Result<String, ConfigError> {
	let valid = !name.is_empty()
		&& name.bytes().all(
			|byte| matches!(byte, b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~'),
		);

	if !valid {
		return Err(ConfigError::InvalidHeaderName { name });
	}

	Ok(name.to_ascii_lowercase())
}
