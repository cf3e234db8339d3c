//! Credentials and token types.

mod credentials;
mod tokens;

pub use credentials::Credentials;
pub use tokens::{AccessToken, RefreshToken};
