//! Helpers shared by the reqwest-backed integration tests.

#![allow(dead_code)]

// crates.io
use httpmock::MockServer;
use serde_json::{Value, json};
// self
use hub_tokens::{client::ReqwestTokenClient, config::ClientConfig, url::Url};

pub const BEARER: &str = "jwt-for-tests";
pub const FIRST_UUID: &str = "8208674e-d08a-426f-b6f4-e3aba7058459";
pub const SECOND_UUID: &str = "0b5a7b4e-3c1f-4a43-9d5e-2f0f3b9b6c11";
pub const THIRD_UUID: &str = "d7c5f1a2-6e44-4f0b-8a3d-91c2b0e4a7f3";

pub fn build_client(
	server: &MockServer,
	page_size: u32,
	fetch_all_pages: bool,
) -> ReqwestTokenClient {
	let config = ClientConfig::builder()
		.domain(Url::parse(&server.base_url()).expect("Mock server URL should parse."))
		.page_size(page_size)
		.fetch_all_pages(fetch_all_pages)
		.build()
		.expect("Client configuration should build.");

	ReqwestTokenClient::new(config, BEARER)
}

pub fn token_json(uuid: &str, label: &str, secret: Option<&str>) -> Value {
	let mut value = json!({
		"uuid": uuid,
		"client_id": "hub-tokens-tests",
		"creator_ip": "127.0.0.1",
		"creator_ua": "hub-tokens/0.1",
		"created_at": "2025-01-01T00:00:00Z",
		"last_used": null,
		"generated_by": "manual",
		"is_active": true,
		"token_label": label,
		"scopes": ["repo:public_read"]
	});

	if let Some(secret) = secret {
		value["token"] = Value::from(secret);
	}

	value
}

pub fn page_json(count: u64, next: Option<&str>, results: Vec<Value>) -> Value {
	json!({
		"count": count,
		"next": next.unwrap_or_default(),
		"previous": null,
		"results": results
	})
}
