//! Create, list, fetch, update, and revoke operations.

// crates.io
use ::http::Method;
// self
use crate::{
	_prelude::*,
	auth,
	client::{TokenClient, TokenPage, observe},
	http::RequestExecutor,
	obs::Operation,
	token::{self, Token, TokenRequest, TokenResult},
};

impl<E> TokenClient<E>
where
	E: ?Sized + RequestExecutor,
{
	/// Creates a Personal Access Token.
	///
	/// Scopes are checked against [`VALID_SCOPES`](crate::auth::VALID_SCOPES) before anything
	/// is sent. The returned [`Token::token`] carries the secret; this is the only time the
	/// registry reveals it.
	pub async fn create_token<I, S>(&self, description: &str, scopes: I) -> Result<Token>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let scopes = scopes.into_iter().map(Into::into).collect::<Vec<String>>();

		observe(Operation::Create, "create_token", async move {
			auth::validate_scopes(&scopes)?;

			let body = TokenRequest::create(description, &scopes).encode()?;
			let url = self.config.tokens_url()?;
			let response = self.send(Method::POST, &url, Some(body)).await?;

			Token::try_from(token::decode::<TokenResult>(&response)?)
		})
		.await
	}

	/// Lists tokens.
	///
	/// Returns the first page only, unless [`fetch_all_pages`](crate::config::ClientConfig::fetch_all_pages)
	/// is set, in which case `next` links are followed until the listing ends. Any page
	/// failure aborts the call and drops the tokens collected so far.
	pub async fn get_tokens(&self) -> Result<Vec<Token>> {
		observe(Operation::List, "get_tokens", async move {
			let first = self.tokens_page(self.config.page_url(1)?).await?;
			let mut tokens = first.tokens;
			let mut next = first.next;

			if self.config.fetch_all_pages {
				while let Some(url) = next {
					let page = self.tokens_page(url).await?;

					tokens.extend(page.tokens);
					next = page.next;
				}
			}

			Ok(tokens)
		})
		.await
	}

	/// Fetches a single listing page by number using the configured page size.
	pub async fn get_tokens_page(&self, page: u32) -> Result<TokenPage> {
		observe(Operation::List, "get_tokens_page", async move {
			self.tokens_page(self.config.page_url(page)?).await
		})
		.await
	}

	/// Fetches one token. A missing token surfaces as a transport error for which
	/// [`Error::is_not_found`] returns `true`.
	pub async fn get_token(&self, uuid: Uuid) -> Result<Token> {
		observe(Operation::Get, "get_token", async move {
			let url = self.config.token_url(&uuid)?;
			let response = self.send(Method::GET, &url, None).await?;

			Token::try_from(token::decode::<TokenResult>(&response)?)
		})
		.await
	}

	/// Updates a token's description and activation flag. Scopes cannot be changed.
	pub async fn update_token(
		&self,
		uuid: Uuid,
		description: &str,
		is_active: bool,
	) -> Result<Token> {
		observe(Operation::Update, "update_token", async move {
			let body = TokenRequest::update(description, is_active).encode()?;
			let url = self.config.token_url(&uuid)?;
			let response = self.send(Method::PATCH, &url, Some(body)).await?;

			Token::try_from(token::decode::<TokenResult>(&response)?)
		})
		.await
	}

	/// Revokes a token. The response body is ignored.
	///
	/// Revoking an already revoked token behaves however the registry decides; the client
	/// forwards whatever the executor reports.
	pub async fn revoke_token(&self, uuid: Uuid) -> Result<()> {
		observe(Operation::Revoke, "revoke_token", async move {
			let url = self.config.token_url(&uuid)?;

			self.send(Method::DELETE, &url, None).await?;

			Ok(())
		})
		.await
	}
}
