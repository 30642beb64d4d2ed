//! Typed async client for a container registry's Personal Access Token API.
//!
//! Create, list, update, and revoke scoped tokens behind a pluggable transport.
//!
//! The entry point is [`client::TokenClient`]. It turns each operation into one HTTP
//! exchange against `/v2/api_tokens`, hands the request to a [`http::RequestExecutor`]
//! together with a [`auth::RequestSigner`], and converts the JSON reply into immutable
//! [`token::Token`] values.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
pub mod token;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;
	pub use uuid::Uuid;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
pub use uuid;
#[cfg(test)] use {color_eyre as _, httpmock as _, parking_lot as _, tokio as _};
