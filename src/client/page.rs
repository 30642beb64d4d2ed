//! Paged listing support.

// crates.io
use ::http::Method;
// self
use crate::{
	_prelude::*,
	client::TokenClient,
	error::ConfigError,
	http::RequestExecutor,
	obs,
	token::{self, Token, TokenPageResult},
};

/// One batch of tokens plus the links around it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenPage {
	/// Total number of tokens reported by the registry.
	pub count: u64,
	/// Next page, if any.
	pub next: Option<Url>,
	/// Previous page, if any.
	pub previous: Option<Url>,
	/// Tokens on this page, in registry order.
	pub tokens: Vec<Token>,
}
impl TokenPage {
	/// Returns `true` if another page follows.
	pub fn has_next(&self) -> bool {
		self.next.is_some()
	}
}

impl<E> TokenClient<E>
where
	E: ?Sized + RequestExecutor,
{
	/// Fetches and converts the page at `url`. The first unconvertible entry fails the page.
	pub(crate) async fn tokens_page(&self, url: Url) -> Result<TokenPage> {
		let body = self.send(Method::GET, &url, None).await?;
		let envelope = token::decode::<TokenPageResult>(&body)?;
		let tokens =
			envelope.results.into_iter().map(Token::try_from).collect::<Result<Vec<_>>>()?;
		let next = resolve_link(&url, &envelope.next)?;
		let previous = resolve_link(&url, &envelope.previous)?;

		obs::record_page(&url, tokens.len(), next.is_some());

		Ok(TokenPage { count: envelope.count, next, previous, tokens })
	}
}

/// Resolves a pagination link against the page it came from; empty links mean "no page".
pub(crate) fn resolve_link(base: &Url, link: &str) -> Result<Option<Url>> {
	let link = link.trim();

	if link.is_empty() {
		return Ok(None);
	}

	base.join(link)
		.map(Some)
		.map_err(|source| ConfigError::InvalidUrl { url: link.to_owned(), source }.into())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn url(value: &str) -> Url {
		Url::parse(value).expect("Failed to parse test URL.")
	}

	#[test]
	fn links_resolve_absolute_relative_and_empty() {
		let base = url("https://hub.example.com/v2/api_tokens?page_size=2&page=1");

		assert_eq!(resolve_link(&base, "").expect("Empty link should resolve."), None);
		assert_eq!(resolve_link(&base, "  ").expect("Blank link should resolve."), None);
		assert_eq!(
			resolve_link(&base, "/v2/api_tokens?page=2").expect("Relative link should resolve."),
			Some(url("https://hub.example.com/v2/api_tokens?page=2"))
		);
		assert_eq!(
			resolve_link(&base, "?page_size=2&page=3").expect("Query link should resolve."),
			Some(url("https://hub.example.com/v2/api_tokens?page_size=2&page=3"))
		);
		assert_eq!(
			resolve_link(&base, "https://cdn.example.com/v2/api_tokens?page=4")
				.expect("Absolute link should resolve."),
			Some(url("https://cdn.example.com/v2/api_tokens?page=4"))
		);
	}

	#[test]
	fn unparseable_links_are_rejected() {
		let base = url("https://hub.example.com/v2/api_tokens");
		let err = resolve_link(&base, "http://[::1").expect_err("Broken links must fail.");

		assert!(matches!(err, Error::Config(ConfigError::InvalidUrl { .. })));
	}
}
