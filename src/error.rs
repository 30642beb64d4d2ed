//! Client-level error types shared across operations, transports, and configuration.

// self
use crate::{_prelude::*, auth::ScopeValidationError};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure reported by the request executor.
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Requested scope is outside the allow-list; raised before any request is sent.
	#[error(transparent)]
	InvalidScope(#[from] ScopeValidationError),
	/// The registry returned a token whose identifier is not a UUID.
	#[error("Token identifier `{value}` is not a valid UUID.")]
	InvalidUuid {
		/// Raw identifier received on the wire.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: uuid::Error,
	},
	/// Request body could not be serialized.
	#[error("Request body could not be encoded as JSON.")]
	Encode {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// Response body could not be parsed.
	#[error("Response body could not be decoded: {source}.")]
	Decode {
		/// Structured parsing failure including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl Error {
	/// HTTP status code reported by the executor, if the failure carried one.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Transport(TransportError::Status { status, .. }) => Some(*status),
			_ => None,
		}
	}

	/// Returns `true` when the registry answered `404 Not Found`.
	pub fn is_not_found(&self) -> bool {
		self.status() == Some(404)
	}
}

/// Configuration and request-construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] ::http::Error),
	/// A URL (configured domain or a pagination link) could not be parsed.
	#[error("URL `{url}` is invalid.")]
	InvalidUrl {
		/// Offending URL text.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Domain uses a scheme other than HTTP(S).
	#[error("Domain must use http or https, got `{scheme}`.")]
	UnsupportedScheme {
		/// Scheme that was supplied.
		scheme: String,
	},
	/// Page size must be positive.
	#[error("Page size must be greater than zero.")]
	InvalidPageSize,
	/// Signer produced a header value that HTTP cannot carry.
	#[error("Authorization header value is invalid.")]
	InvalidHeaderValue(#[from] ::http::header::InvalidHeaderValue),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Transport-level failures surfaced by a [`RequestExecutor`](crate::http::RequestExecutor).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the registry.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Registry answered with a non-success status code.
	#[error("Registry responded with HTTP {status}: {body}")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
		/// Response body, kept for diagnostics.
		body: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn status_error(status: u16) -> Error {
		TransportError::Status { status, retry_after: None, body: String::new() }.into()
	}

	#[test]
	fn not_found_is_derived_from_status() {
		assert!(status_error(404).is_not_found());
		assert!(!status_error(500).is_not_found());
		assert_eq!(status_error(409).status(), Some(409));
	}

	#[test]
	fn non_status_errors_have_no_status() {
		let err: Error = ConfigError::InvalidPageSize.into();

		assert_eq!(err.status(), None);
		assert!(!err.is_not_found());
	}

	#[test]
	fn invalid_scope_message_names_the_scope() {
		let err: Error =
			ScopeValidationError::NotAllowed { scope: "repo:admin".into() }.into();

		assert!(err.to_string().contains("repo:admin"));
	}
}
