//! Credential material, scope allow-listing, and request signing.

pub mod scope;
pub mod secret;
pub mod signer;

pub use scope::*;
pub use secret::*;
pub use signer::*;
