//! Scope allow-list enforced before any token is requested.

// self
use crate::_prelude::*;

/// Read-only access to public repositories.
pub const REPO_PUBLIC_READ: &str = "repo:public_read";

/// Scopes the registry currently accepts for Personal Access Tokens.
pub const VALID_SCOPES: &[&str] = &[REPO_PUBLIC_READ];

/// Errors emitted when validating scopes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ScopeValidationError {
	/// The scope is not part of [`VALID_SCOPES`].
	#[error("Invalid scope {scope:?}.")]
	NotAllowed {
		/// The offending scope string.
		scope: String,
	},
}

/// Returns `true` if the registry accepts `scope`.
pub fn is_valid_scope(scope: &str) -> bool {
	VALID_SCOPES.contains(&scope)
}

/// Checks every scope against the allow-list, failing on the first one that is not allowed.
pub fn validate_scopes<S>(scopes: &[S]) -> Result<(), ScopeValidationError>
where
	S: AsRef<str>,
{
	match scopes.iter().map(AsRef::as_ref).find(|scope| !is_valid_scope(scope)) {
		Some(scope) => Err(ScopeValidationError::NotAllowed { scope: scope.to_owned() }),
		None => Ok(()),
	}
}
