//! Personal Access Token values and their wire representation.
//!
//! [`Token`] is an immutable value built from the registry's JSON on every call. The wire
//! structs stay private to the crate so the `token_label` ↔ `description` naming split
//! lives in exactly one place.

// crates.io
use serde::Deserializer;
// self
use crate::{_prelude::*, auth::TokenSecret};

/// Personal Access Token metadata as reported by the registry.
///
/// [`token`](Self::token) holds the secret and is only present on the value returned by
/// [`TokenClient::create_token`](crate::client::TokenClient::create_token); the registry
/// never returns it again.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Token {
	/// Registry-assigned identifier.
	pub uuid: Uuid,
	/// Client that created the token.
	pub client_id: String,
	/// IP address the token was created from.
	pub creator_ip: String,
	/// User agent of the creating client.
	pub creator_ua: String,
	/// Creation instant.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Last time the token authenticated a request, if ever.
	#[serde(with = "time::serde::rfc3339::option")]
	pub last_used: Option<OffsetDateTime>,
	/// How the token was generated (e.g. `manual`).
	pub generated_by: String,
	/// Whether the token can currently authenticate.
	pub is_active: bool,
	/// Secret value, populated on creation only.
	#[serde(skip_serializing)]
	pub token: Option<TokenSecret>,
	/// Free-text label (`token_label` on the wire).
	pub description: String,
	/// Granted scopes in registry order.
	pub scopes: Vec<String>,
}
impl Token {
	/// Returns `true` if the token has never been used to authenticate.
	pub fn is_unused(&self) -> bool {
		self.last_used.is_none()
	}

	/// Returns `true` if the token carries `scope`.
	pub fn has_scope(&self, scope: &str) -> bool {
		self.scopes.iter().any(|granted| granted == scope)
	}
}
impl TryFrom<TokenResult> for Token {
	type Error = Error;

	fn try_from(result: TokenResult) -> Result<Self> {
		let uuid = Uuid::parse_str(&result.uuid)
			.map_err(|source| Error::InvalidUuid { value: result.uuid.clone(), source })?;

		Ok(Self {
			uuid,
			client_id: result.client_id,
			creator_ip: result.creator_ip,
			creator_ua: result.creator_ua,
			created_at: result.created_at,
			last_used: result.last_used,
			generated_by: result.generated_by,
			is_active: result.is_active,
			token: Some(result.token).filter(|secret| !secret.is_empty()).map(TokenSecret::from),
			description: result.token_label,
			scopes: result.scopes,
		})
	}
}
impl Debug for Token {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Token")
			.field("uuid", &self.uuid)
			.field("client_id", &self.client_id)
			.field("creator_ip", &self.creator_ip)
			.field("creator_ua", &self.creator_ua)
			.field("created_at", &self.created_at)
			.field("last_used", &self.last_used)
			.field("generated_by", &self.generated_by)
			.field("is_active", &self.is_active)
			.field("token", &self.token.as_ref().map(|_| "<redacted>"))
			.field("description", &self.description)
			.field("scopes", &self.scopes)
			.finish()
	}
}

/// Body sent on create and update.
///
/// Create never sends `is_active`; update never sends `scopes`.
#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest {
	#[serde(rename = "token_label", skip_serializing_if = "String::is_empty")]
	pub(crate) description: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub(crate) is_active: Option<bool>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub(crate) scopes: Vec<String>,
}
impl TokenRequest {
	pub(crate) fn create(description: &str, scopes: &[String]) -> Self {
		Self { description: description.to_owned(), is_active: None, scopes: scopes.to_vec() }
	}

	pub(crate) fn update(description: &str, is_active: bool) -> Self {
		Self {
			description: description.to_owned(),
			is_active: Some(is_active),
			scopes: Vec::new(),
		}
	}

	pub(crate) fn encode(&self) -> Result<Vec<u8>> {
		serde_json::to_vec(self).map_err(|source| Error::Encode { source })
	}
}

/// Single token object as returned by the registry.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResult {
	pub(crate) uuid: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub(crate) client_id: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub(crate) creator_ip: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub(crate) creator_ua: String,
	#[serde(with = "time::serde::rfc3339")]
	pub(crate) created_at: OffsetDateTime,
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub(crate) last_used: Option<OffsetDateTime>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub(crate) generated_by: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub(crate) is_active: bool,
	#[serde(default, deserialize_with = "null_as_default")]
	pub(crate) token: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub(crate) token_label: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub(crate) scopes: Vec<String>,
}

/// Paged envelope returned by the listing endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenPageResult {
	#[serde(default, deserialize_with = "null_as_default")]
	pub(crate) count: u64,
	#[serde(default, deserialize_with = "null_as_default")]
	pub(crate) next: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub(crate) previous: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub(crate) results: Vec<TokenResult>,
}

/// Decodes a JSON body, keeping the path of the field that failed.
pub(crate) fn decode<T>(body: &[u8]) -> Result<T>
where
	T: for<'de> Deserialize<'de>,
{
	let mut de = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut de).map_err(|source| Error::Decode { source })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
