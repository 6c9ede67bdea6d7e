//! Demonstrates signing an outgoing reqwest request immediately before dispatch, with an
//! httpmock server standing in for the verifying backend.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use hmac_presigner::{config::SignerConfig, reqwest::Client, sign::RequestSigner};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let ping_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/ping").header_exists("timestamp").header_exists("sign");
			then.status(200).header("content-type", "application/json").body("{\"pong\":true}");
		})
		.await;
	let config = SignerConfig::builder()
		.secret("super-secret")
		.prefix(server.base_url())
		.build()?;
	let signer = RequestSigner::new(config);
	let client = Client::new();
	let mut request =
		client.post(server.url("/api/ping")).body("{\"probe\":1}").build()?;

	signer.sign_request(&mut request)?;

	let sign = request
		.headers()
		.get("sign")
		.and_then(|value| value.to_str().ok())
		.unwrap_or_default()
		.to_owned();
	let response = client.execute(request).await?;

	println!("Signed request returned {} with sign header {sign}.", response.status());

	ping_mock.assert_async().await;

	Ok(())
}
