//! Transport primitives for registry calls.
//!
//! The module exposes [`RequestExecutor`], the only dependency the client has on an HTTP
//! stack. Executors receive a fully prepared [`HttpRequest`] plus a [`RequestSigner`],
//! apply the signer, send the request, and hand back the raw body of a successful
//! response. Anything outside the `2xx` range must be reported as
//! [`TransportError::Status`]; the client never inspects status codes itself.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
use ::http::{
	HeaderMap, StatusCode,
	header::{ACCEPT, CONTENT_TYPE, HeaderValue, RETRY_AFTER},
};
use time::format_description::well_known::Rfc2822;
// self
use crate::{_prelude::*, auth::RequestSigner, error::TransportError};

/// Request type handed to executors.
pub type HttpRequest = ::http::Request<Vec<u8>>;

/// Boxed future returned by [`RequestExecutor::execute`].
pub type ExecuteFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<u8>>> + 'a + Send>>;

const BODY_PREVIEW_LIMIT: usize = 512;

/// Executes signed registry requests and returns successful response bodies.
///
/// Implementations must be `Send + Sync + 'static` so one executor can be shared by
/// cloned clients behind an [`Arc`]. The returned future must be `Send` so callers can
/// drive operations from multi-threaded runtimes.
pub trait RequestExecutor
where
	Self: 'static + Send + Sync,
{
	/// Signs `request` with `signer`, sends it, and returns the body of a `2xx` response.
	///
	/// # Error Contract
	///
	/// - Signer failures are returned unchanged.
	/// - Connectivity failures map to [`TransportError::Network`].
	/// - Non-success statuses map to [`TransportError::Status`] (see [`status_error`]).
	fn execute<'a>(
		&'a self,
		request: HttpRequest,
		signer: &'a dyn RequestSigner,
	) -> ExecuteFuture<'a>;
}

/// Builds the [`TransportError::Status`] value for a non-success response.
pub fn status_error(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> TransportError {
	TransportError::Status {
		status: status.as_u16(),
		retry_after: retry_after_hint(headers),
		body: body_preview(body),
	}
}

/// Parses a `Retry-After` header given either as delta-seconds or an HTTP date.
pub fn retry_after_hint(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return Some(Duration::seconds(i64::try_from(secs).unwrap_or(i64::MAX)));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}

pub(crate) fn json_request(
	method: ::http::Method,
	url: &Url,
	body: Option<Vec<u8>>,
) -> Result<HttpRequest> {
	let mut builder = ::http::Request::builder()
		.method(method)
		.uri(url.as_str())
		.header(ACCEPT, HeaderValue::from_static("application/json"));

	if body.is_some() {
		builder = builder.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
	}

	builder.body(body.unwrap_or_default()).map_err(|e| crate::error::ConfigError::from(e).into())
}

fn body_preview(body: &[u8]) -> String {
	String::from_utf8_lossy(body).chars().take(BODY_PREVIEW_LIMIT).collect()
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestExecutor(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestExecutor {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestExecutor {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestExecutor {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl RequestExecutor for ReqwestExecutor {
	fn execute<'a>(
		&'a self,
		mut request: HttpRequest,
		signer: &'a dyn RequestSigner,
	) -> ExecuteFuture<'a> {
		Box::pin(async move {
			signer.sign(&mut request)?;

			let request = reqwest::Request::try_from(request)
				.map_err(crate::error::ConfigError::from)?;
			let response = self.0.execute(request).await.map_err(TransportError::from)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let body = response.bytes().await.map_err(TransportError::from)?;

			if !status.is_success() {
				return Err(status_error(status, &headers, &body).into());
			}

			Ok(body.to_vec())
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn retry_after_accepts_delta_seconds() {
		let mut headers = HeaderMap::new();

		headers.insert(RETRY_AFTER, HeaderValue::from_static("30"));

		assert_eq!(retry_after_hint(&headers), Some(Duration::seconds(30)));
	}

	#[test]
	fn retry_after_ignores_past_dates_and_garbage() {
		let mut headers = HeaderMap::new();

		headers.insert(RETRY_AFTER, HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"));

		assert_eq!(retry_after_hint(&headers), None);

		headers.insert(RETRY_AFTER, HeaderValue::from_static("soon"));

		assert_eq!(retry_after_hint(&headers), None);
		assert_eq!(retry_after_hint(&HeaderMap::new()), None);
	}

	#[test]
	fn status_error_truncates_body() {
		let body = "x".repeat(BODY_PREVIEW_LIMIT * 2);
		let err = status_error(StatusCode::NOT_FOUND, &HeaderMap::new(), body.as_bytes());

		match err {
			TransportError::Status { status, retry_after, body } => {
				assert_eq!(status, 404);
				assert_eq!(retry_after, None);
				assert_eq!(body.len(), BODY_PREVIEW_LIMIT);
			},
			other => panic!("Unexpected transport error: {other:?}."),
		}
	}

	#[test]
	fn json_request_sets_content_headers() {
		let url = Url::parse("https://hub.example.com/v2/api_tokens")
			.expect("Test URL should parse.");
		let with_body = json_request(::http::Method::POST, &url, Some(b"{}".to_vec()))
			.expect("Request with body should build.");

		assert_eq!(
			with_body.headers().get(CONTENT_TYPE).expect("Content type should be set."),
			"application/json"
		);
		assert_eq!(with_body.body(), b"{}");

		let without_body = json_request(::http::Method::DELETE, &url, None)
			.expect("Request without body should build.");

		assert!(without_body.headers().get(CONTENT_TYPE).is_none());
		assert!(without_body.body().is_empty());
		assert_eq!(without_body.uri(), "https://hub.example.com/v2/api_tokens");
	}
}
