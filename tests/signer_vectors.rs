// crates.io
use time::OffsetDateTime;
// self
use hmac_presigner::{
	config::SignerConfig,
	sign::{RequestSigner, SignContext, Signature, SigningSecret},
};

fn build_signer() -> RequestSigner {
	let config = SignerConfig::builder()
		.secret("secret")
		.prefix("127.0.0.1:8080")
		.build()
		.expect("Failed to build signer configuration for vector tests.");

	RequestSigner::new(config)
}

fn instant_for_millis(millis: i128) -> OffsetDateTime {
	OffsetDateTime::from_unix_timestamp_nanos(millis * 1_000_000)
		.expect("Vector timestamp should be within the representable range.")
}

#[test]
fn reference_vector_round_trip() {
	let signer = build_signer();
	let context = SignContext::new("127.0.0.1:8080/api/ping")
		.with_observed_at(instant_for_millis(1_700_000_000_000));
	let headers = signer.sign(&context).expect("Signing the reference context should succeed.");

	assert_eq!(headers.timestamp.value, "1700000000000");
	assert_eq!(headers.signature.value, "BBnDbpqEBpKej2biS7LPgoUeJkx+vfoGPJ2YDaFL0sw=");
}

#[test]
fn signature_agrees_with_independent_computation() {
	// Recompute the digest straight from the primitives the signer composes, to pin the
	// fragment order and the hex-to-base64 re-encoding.
	let secret = SigningSecret::new("secret");
	let signature = Signature::compute(&secret, "1700000000000", "/api/ping", b"");
	let signer = build_signer();
	let context = SignContext::new("127.0.0.1:8080/api/ping")
		.with_observed_at(instant_for_millis(1_700_000_000_000));
	let headers = signer.sign(&context).expect("Signing the reference context should succeed.");

	assert_eq!(headers.signature.value, signature.to_base64());
	assert_eq!(
		signature.to_hex(),
		"0419c36e9a8406929e8f66e24bb2cf82851e264c7ebdfa063c9d980da14bd2cc"
	);
}

#[test]
fn distinct_secrets_produce_distinct_signatures() {
	let other = RequestSigner::new(
		SignerConfig::builder()
			.secret("another-secret")
			.prefix("127.0.0.1:8080")
			.build()
			.expect("Failed to build alternate signer configuration."),
	);
	let context = SignContext::new("127.0.0.1:8080/api/ping")
		.with_observed_at(instant_for_millis(1_700_000_000_000));
	let baseline =
		build_signer().sign(&context).expect("Signing with the baseline secret should succeed.");
	let alternate = other.sign(&context).expect("Signing with the alternate secret should succeed.");

	assert_eq!(alternate.signature.value, "pYaq2VD5dlH4/yDO6008PFhpK628eOX9jZfp4Crlxng=");
	assert_ne!(alternate.signature.value, baseline.signature.value);
}

#[test]
fn timestamp_path_and_body_each_perturb_the_signature() {
	let signer = build_signer();
	let baseline = signer
		.sign(
			&SignContext::new("127.0.0.1:8080/api/ping")
				.with_observed_at(instant_for_millis(1_700_000_000_000)),
		)
		.expect("Signing the baseline context should succeed.");
	let shifted = signer
		.sign(
			&SignContext::new("127.0.0.1:8080/api/ping")
				.with_observed_at(instant_for_millis(1_700_000_000_001)),
		)
		.expect("Signing the shifted context should succeed.");
	let other_path = signer
		.sign(
			&SignContext::new("127.0.0.1:8080/api/pong")
				.with_observed_at(instant_for_millis(1_700_000_000_000)),
		)
		.expect("Signing the alternate path should succeed.");
	let with_body = signer
		.sign(
			&SignContext::new("127.0.0.1:8080/api/ping")
				.with_observed_at(instant_for_millis(1_700_000_000_000))
				.with_body("{\"a\":1}"),
		)
		.expect("Signing the bodied context should succeed.");

	assert_eq!(shifted.signature.value, "nJpBbPnOr8ad1TP8B1zi/0kKz1zffUSMErSgibxgYe8=");
	assert_eq!(other_path.signature.value, "sV1KGaqOb6Y+vGLKhs/JEon3SPMiK2+uIVNU5RxImqo=");
	assert_eq!(with_body.signature.value, "uXMS0jqaKDCj0iZbSCC3smkxSlINCXszzUHI4biejdU=");
	assert_ne!(shifted.signature.value, baseline.signature.value);
	assert_ne!(other_path.signature.value, baseline.signature.value);
	assert_ne!(with_body.signature.value, baseline.signature.value);
}

#[test]
fn custom_header_names_carry_the_same_values() {
	let signer = RequestSigner::new(
		SignerConfig::builder()
			.secret("secret")
			.prefix("127.0.0.1:8080")
			.timestamp_header("x-timestamp")
			.sign_header("x-sign")
			.build()
			.expect("Failed to build custom-header signer configuration."),
	);
	let context = SignContext::new("127.0.0.1:8080/api/ping")
		.with_observed_at(instant_for_millis(1_700_000_000_000));
	let headers = signer.sign(&context).expect("Signing with custom header names should succeed.");

	assert_eq!(headers.timestamp.name, "x-timestamp");
	assert_eq!(headers.signature.name, "x-sign");
	assert_eq!(headers.signature.value, "BBnDbpqEBpKej2biS7LPgoUeJkx+vfoGPJ2YDaFL0sw=");
}
