//! Personal Access Token client powered by a pluggable request executor.

pub mod page;

mod tokens;

pub use page::*;

// crates.io
use ::http::Method;
// self
use crate::{
	_prelude::*,
	auth::{BearerSigner, RequestSigner, TokenSecret},
	config::ClientConfig,
	http::{self, RequestExecutor},
	obs::{self, Operation, OperationOutcome, OperationSpan},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestExecutor;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestTokenClient = TokenClient<ReqwestExecutor>;

/// Issues Personal Access Token requests against a single registry.
///
/// The client owns the executor and signer behind [`Arc`]s plus a read-only
/// [`ClientConfig`], so clones are cheap and share the same transport. Every operation
/// is a single request/response exchange; listings fetch pages strictly one after another.
pub struct TokenClient<E>
where
	E: ?Sized + RequestExecutor,
{
	/// Transport used for every outbound request.
	pub executor: Arc<E>,
	/// Decorator that attaches credentials to each request.
	pub signer: Arc<dyn RequestSigner>,
	/// Registry domain and listing behavior.
	pub config: ClientConfig,
}
impl<E> TokenClient<E>
where
	E: ?Sized + RequestExecutor,
{
	/// Creates a client that signs requests with `Authorization: Bearer <secret>` and sends
	/// them through the caller-provided executor.
	pub fn with_executor(
		config: ClientConfig,
		secret: impl Into<TokenSecret>,
		executor: impl Into<Arc<E>>,
	) -> Self {
		Self { executor: executor.into(), signer: Arc::new(BearerSigner::new(secret)), config }
	}

	/// Replaces the request signer.
	pub fn with_signer(mut self, signer: impl 'static + RequestSigner) -> Self {
		self.signer = Arc::new(signer);

		self
	}

	async fn send(&self, method: Method, url: &Url, body: Option<Vec<u8>>) -> Result<Vec<u8>> {
		let request = http::json_request(method, url, body)?;

		self.executor.execute(request, self.signer.as_ref()).await
	}
}
#[cfg(feature = "reqwest")]
impl TokenClient<ReqwestExecutor> {
	/// Creates a client backed by a default reqwest transport.
	pub fn new(config: ClientConfig, secret: impl Into<TokenSecret>) -> Self {
		Self::with_executor(config, secret, ReqwestExecutor::default())
	}
}
impl<E> Clone for TokenClient<E>
where
	E: ?Sized + RequestExecutor,
{
	fn clone(&self) -> Self {
		Self {
			executor: Arc::clone(&self.executor),
			signer: Arc::clone(&self.signer),
			config: self.config.clone(),
		}
	}
}
impl<E> Debug for TokenClient<E>
where
	E: ?Sized + RequestExecutor,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenClient").field("config", &self.config).finish()
	}
}

/// Runs `fut` inside an operation span and records its outcome.
async fn observe<T, Fut>(operation: Operation, stage: &'static str, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = OperationSpan::new(operation, stage);

	obs::record_operation_outcome(operation, OperationOutcome::Attempt);

	let result = span.instrument(fut).await;

	match &result {
		Ok(_) => obs::record_operation_outcome(operation, OperationOutcome::Success),
		Err(_) => obs::record_operation_outcome(operation, OperationOutcome::Failure),
	}

	result
}
