//! Demonstrates plugging a non-reqwest transport into [`TokenClient`].
//!
//! 1. Implement [`RequestExecutor`] so it signs the prepared request and returns the raw body.
//! 2. Report non-success statuses with [`status_error`] so callers see the usual
//!    [`TransportError::Status`] values.
//! 3. Hand the executor to [`TokenClient::with_executor`].

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use http::{
	HeaderMap, StatusCode,
	header::{HeaderValue, RETRY_AFTER},
};
use serde_json::json;
// self
use hub_tokens::{
	auth::{REPO_PUBLIC_READ, RequestSigner},
	client::TokenClient,
	config::ClientConfig,
	error::{Error, TransportError},
	http::{ExecuteFuture, HttpRequest, RequestExecutor, status_error},
};

const TOKEN_UUID: &str = "b1e3c6a0-52d4-4a8f-9c37-0e6d2f4a8b19";

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let config = ClientConfig::builder().build()?;
	let client: TokenClient<CannedExecutor> =
		TokenClient::with_executor(config.clone(), "demo-jwt", Arc::new(CannedExecutor));
	let token = client.create_token("demo", [REPO_PUBLIC_READ]).await?;

	println!(
		"Created {} with secret {:?}.",
		token.uuid,
		token.token.as_ref().map(|secret| secret.expose())
	);

	let failing: TokenClient<FailingExecutor> =
		TokenClient::with_executor(config, "demo-jwt", FailingExecutor);

	match failing.revoke_token(token.uuid).await {
		Ok(()) => println!("Failing executor unexpectedly succeeded."),
		Err(Error::Transport(TransportError::Status { status, retry_after, .. })) =>
			println!("Registry answered {status}; retry after {retry_after:?}."),
		Err(e) => println!("Executor failed: {e}."),
	}

	Ok(())
}

/// Answers every request with a freshly created token.
struct CannedExecutor;
impl RequestExecutor for CannedExecutor {
	fn execute<'a>(
		&'a self,
		mut request: HttpRequest,
		signer: &'a dyn RequestSigner,
	) -> ExecuteFuture<'a> {
		Box::pin(async move {
			signer.sign(&mut request)?;

			println!("{} {}", request.method(), request.uri());

			let body = json!({
				"uuid": TOKEN_UUID,
				"client_id": "custom-executor",
				"creator_ip": "127.0.0.1",
				"creator_ua": "hub-tokens-demo",
				"created_at": "2025-06-01T12:00:00Z",
				"last_used": null,
				"generated_by": "manual",
				"is_active": true,
				"token": "dckr_pat_demo",
				"token_label": "demo",
				"scopes": [REPO_PUBLIC_READ]
			});

			Ok(body.to_string().into_bytes())
		})
	}
}

/// Simulates a throttling registry.
struct FailingExecutor;
impl RequestExecutor for FailingExecutor {
	fn execute<'a>(
		&'a self,
		mut request: HttpRequest,
		signer: &'a dyn RequestSigner,
	) -> ExecuteFuture<'a> {
		Box::pin(async move {
			signer.sign(&mut request)?;

			let mut headers = HeaderMap::new();

			headers.insert(RETRY_AFTER, HeaderValue::from_static("5"));

			Err(status_error(StatusCode::TOO_MANY_REQUESTS, &headers, b"slow down").into())
		})
	}
}
