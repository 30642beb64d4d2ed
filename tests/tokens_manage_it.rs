mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use common::*;
use hub_tokens::{
	client::ReqwestTokenClient,
	config::ClientConfig,
	error::{Error, TransportError},
	url::Url,
	uuid::Uuid,
};

fn first_uuid() -> Uuid {
	Uuid::parse_str(FIRST_UUID).expect("Fixture UUID should parse.")
}

#[tokio::test]
async fn get_token_fetches_a_single_token() {
	let server = MockServer::start_async().await;
	let client = build_client(&server, 100, false);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path(format!("/v2/api_tokens/{FIRST_UUID}"))
				.header("authorization", format!("Bearer {BEARER}"));
			then.status(200).json_body(token_json(FIRST_UUID, "ci", None));
		})
		.await;
	let token = client.get_token(first_uuid()).await.expect("Fetching a token should succeed.");

	mock.assert_async().await;

	assert_eq!(token.uuid, first_uuid());
	assert_eq!(token.description, "ci");
	assert!(token.token.is_none());
}

#[tokio::test]
async fn get_token_maps_missing_tokens_to_not_found() {
	let server = MockServer::start_async().await;
	let client = build_client(&server, 100, false);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path(format!("/v2/api_tokens/{FIRST_UUID}"));
			then.status(404).body("{\"detail\":\"Not found.\"}");
		})
		.await;
	let err = client.get_token(first_uuid()).await.expect_err("Missing tokens must fail.");

	mock.assert_async().await;

	assert!(err.is_not_found());
	assert!(matches!(
		err,
		Error::Transport(TransportError::Status { ref body, .. }) if body.contains("Not found")
	));
}

#[tokio::test]
async fn get_token_rejects_malformed_uuid_in_response() {
	let server = MockServer::start_async().await;
	let client = build_client(&server, 100, false);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path(format!("/v2/api_tokens/{FIRST_UUID}"));
			then.status(200).json_body(token_json("not-a-uuid", "ci", None));
		})
		.await;
	let err = client.get_token(first_uuid()).await.expect_err("Malformed UUIDs must fail.");

	mock.assert_async().await;

	assert!(matches!(err, Error::InvalidUuid { .. }));
}

#[tokio::test]
async fn update_token_sends_label_and_activation_only() {
	let server = MockServer::start_async().await;
	let client = build_client(&server, 100, false);
	let mock = server
		.mock_async(|when, then| {
			when.method(PATCH)
				.path(format!("/v2/api_tokens/{FIRST_UUID}"))
				.header("content-type", "application/json")
				.json_body(json!({ "token_label": "renamed", "is_active": false }));

			let mut body = token_json(FIRST_UUID, "renamed", None);

			body["is_active"] = json!(false);

			then.status(200).json_body(body);
		})
		.await;
	let token = client
		.update_token(first_uuid(), "renamed", false)
		.await
		.expect("Updating a token should succeed.");

	mock.assert_async().await;

	assert_eq!(token.description, "renamed");
	assert!(!token.is_active);
}

#[tokio::test]
async fn revoke_token_accepts_empty_success_bodies() {
	let server = MockServer::start_async().await;
	let client = build_client(&server, 100, false);
	let mock = server
		.mock_async(|when, then| {
			when.method(DELETE)
				.path(format!("/v2/api_tokens/{FIRST_UUID}"))
				.header("authorization", format!("Bearer {BEARER}"));
			then.status(202);
		})
		.await;

	client.revoke_token(first_uuid()).await.expect("Revocation should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn revoke_token_propagates_transport_errors() {
	let server = MockServer::start_async().await;
	let client = build_client(&server, 100, false);
	let mock = server
		.mock_async(|when, then| {
			when.method(DELETE).path(format!("/v2/api_tokens/{FIRST_UUID}"));
			then.status(429).header("retry-after", "7").body("slow down");
		})
		.await;
	let err =
		client.revoke_token(first_uuid()).await.expect_err("Throttled revocation must fail.");

	mock.assert_async().await;

	match err {
		Error::Transport(TransportError::Status { status, retry_after, body }) => {
			assert_eq!(status, 429);
			assert_eq!(retry_after, Some(time::Duration::seconds(7)));
			assert_eq!(body, "slow down");
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}
}

#[tokio::test]
async fn unreachable_registry_maps_to_network_error() {
	let config = ClientConfig::builder()
		.domain(Url::parse("http://127.0.0.1:1").expect("Closed-port URL should parse."))
		.build()
		.expect("Client configuration should build.");
	let client = ReqwestTokenClient::new(config, BEARER);
	let err = client.revoke_token(first_uuid()).await.expect_err("Closed ports must fail.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
}
