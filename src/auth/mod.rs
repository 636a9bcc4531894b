//! Authentication module
//!
//! Confluence Cloud accepts HTTP Basic with an account e-mail and an API
//! token; the `Authenticator` applies it to every outgoing request.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;
