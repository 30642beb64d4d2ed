//! Lists every Personal Access Token visible to a bearer credential.
//!
//! ```sh
//! HUB_TOKENS_BEARER=<jwt> cargo run --example list_tokens
//! ```
//!
//! Set `HUB_TOKENS_DOMAIN` to target a registry other than Docker Hub.

// std
use std::env;
// crates.io
use color_eyre::{Result, eyre::WrapErr};
// self
use hub_tokens::{client::ReqwestTokenClient, config::ClientConfig, url::Url};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let bearer = env::var("HUB_TOKENS_BEARER").wrap_err("HUB_TOKENS_BEARER must be set")?;
	let mut builder = ClientConfig::builder().fetch_all_pages(true);

	if let Ok(domain) = env::var("HUB_TOKENS_DOMAIN") {
		builder = builder.domain(Url::parse(&domain)?);
	}

	let client = ReqwestTokenClient::new(builder.build()?, bearer);
	let tokens = client.get_tokens().await?;

	println!("Found {} token(s).", tokens.len());

	for token in tokens {
		let state = if token.is_active { "active" } else { "inactive" };
		let last_used = match token.last_used {
			Some(at) => at.to_string(),
			None => "never".into(),
		};

		println!(
			"{} [{state}] {:?} scopes={} last_used={last_used}",
			token.uuid,
			token.description,
			token.scopes.join(",")
		);
	}

	Ok(())
}
