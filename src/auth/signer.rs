//! Request signing contracts that attach credentials to outbound registry calls.

// crates.io
use ::http::header::{AUTHORIZATION, HeaderValue};
// self
use crate::{_prelude::*, auth::TokenSecret, error::ConfigError, http::HttpRequest};

/// Decorates a prepared request with authentication state before it is sent.
///
/// Executors call [`sign`](Self::sign) exactly once per request, after the client has
/// built the method, URL, body, and content headers.
pub trait RequestSigner
where
	Self: Send + Sync,
{
	/// Injects credentials into `request`.
	fn sign(&self, request: &mut HttpRequest) -> Result<(), ConfigError>;
}

/// Signs requests with `Authorization: Bearer <secret>`.
#[derive(Clone)]
pub struct BearerSigner {
	secret: TokenSecret,
}
impl BearerSigner {
	/// Creates a signer for the provided bearer credential.
	pub fn new(secret: impl Into<TokenSecret>) -> Self {
		Self { secret: secret.into() }
	}
}
impl RequestSigner for BearerSigner {
	fn sign(&self, request: &mut HttpRequest) -> Result<(), ConfigError> {
		let mut value = HeaderValue::from_str(&format!("Bearer {}", self.secret.expose()))?;

		value.set_sensitive(true);
		request.headers_mut().insert(AUTHORIZATION, value);

		Ok(())
	}
}
impl Debug for BearerSigner {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("BearerSigner").field("secret", &self.secret).finish()
	}
}

/// Leaves requests untouched; useful for executors that authenticate on their own.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSigner;
impl RequestSigner for NoopSigner {
	fn sign(&self, _request: &mut HttpRequest) -> Result<(), ConfigError> {
		Ok(())
	}
}
