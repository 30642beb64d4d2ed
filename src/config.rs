//! Client configuration and endpoint construction.
//!
//! [`ClientConfig`] is immutable once built. It pins the registry domain, the page size
//! used by listings, and whether listings follow `next` links to the end.

// self
use crate::{_prelude::*, error::ConfigError};

/// Registry domain used when none is configured.
pub const DEFAULT_DOMAIN: &str = "https://hub.docker.com";
/// Page size used by listings when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Collection path for Personal Access Tokens.
pub const TOKENS_PATH: &str = "/v2/api_tokens";

/// Immutable configuration consumed by [`TokenClient`](crate::client::TokenClient).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
	/// Registry domain; request paths are appended to it verbatim.
	pub domain: Url,
	/// Number of tokens requested per page.
	pub page_size: u32,
	/// Follow `next` links until the listing is exhausted.
	pub fetch_all_pages: bool,
}
impl ClientConfig {
	/// Creates a new builder seeded with defaults.
	pub fn builder() -> ClientConfigBuilder {
		ClientConfigBuilder::default()
	}

	/// URL of the token collection.
	pub fn tokens_url(&self) -> Result<Url> {
		self.endpoint(TOKENS_PATH)
	}

	/// URL of a single token.
	pub fn token_url(&self, uuid: &Uuid) -> Result<Url> {
		self.endpoint(&format!("{TOKENS_PATH}/{uuid}"))
	}

	/// URL of the given listing page.
	pub fn page_url(&self, page: u32) -> Result<Url> {
		let mut url = self.tokens_url()?;

		url.query_pairs_mut()
			.append_pair("page_size", &self.page_size.to_string())
			.append_pair("page", &page.to_string());

		Ok(url)
	}

	fn endpoint(&self, path: &str) -> Result<Url> {
		let raw = format!("{}{path}", self.domain.as_str().trim_end_matches('/'));

		Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl { url: raw, source }.into())
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if !matches!(self.domain.scheme(), "http" | "https") {
			return Err(ConfigError::UnsupportedScheme { scheme: self.domain.scheme().to_owned() });
		}
		if self.page_size == 0 {
			return Err(ConfigError::InvalidPageSize);
		}

		Ok(())
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
	/// Registry domain; defaults to [`DEFAULT_DOMAIN`].
	pub domain: Option<Url>,
	/// Page size; defaults to [`DEFAULT_PAGE_SIZE`].
	pub page_size: Option<u32>,
	/// Whether listings follow `next` links.
	pub fetch_all_pages: bool,
}
impl ClientConfigBuilder {
	/// Sets the registry domain.
	pub fn domain(mut self, url: Url) -> Self {
		self.domain = Some(url);

		self
	}

	/// Sets the listing page size.
	pub fn page_size(mut self, size: u32) -> Self {
		self.page_size = Some(size);

		self
	}

	/// Enables or disables following `next` links.
	pub fn fetch_all_pages(mut self, enabled: bool) -> Self {
		self.fetch_all_pages = enabled;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		let domain = match self.domain {
			Some(domain) => domain,
			None => Url::parse(DEFAULT_DOMAIN).map_err(|source| ConfigError::InvalidUrl {
				url: DEFAULT_DOMAIN.to_owned(),
				source,
			})?,
		};
		let config = ClientConfig {
			domain,
			page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
			fetch_all_pages: self.fetch_all_pages,
		};

		config.validate()?;

		Ok(config)
	}
}
