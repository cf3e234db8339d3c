//! blobup - AT Protocol blob upload client.
//!
//! Authenticates against a PDS, re-encodes a local PNG through a
//! decode/encode round trip, and uploads the canonical bytes as a blob
//! via `com.atproto.repo.uploadBlob`.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use blobup::{Credentials, PdsUrl, Session};
//!
//! # async fn run() -> Result<(), blobup::Error> {
//! let pds = PdsUrl::new("https://bsky.social")?;
//! let credentials = Credentials::new("alice.bsky.social", "app-password")?;
//!
//! let payload = blobup::png::load_and_reencode(Path::new("avatar.png"))?;
//! let session = Session::login(&pds, credentials).await?;
//! let uploaded = session.upload_blob(payload, blobup::png::MIME_TYPE).await?;
//!
//! println!("stored as {}", uploaded.blob.cid());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod blob;
pub mod error;
pub mod png;
pub mod session;
pub mod types;
pub mod xrpc;

pub use auth::{AccessToken, Credentials, RefreshToken};
pub use blob::BlobRef;
pub use error::Error;
pub use session::{Session, UploadedBlob};
pub use types::{Did, Handle, PdsUrl};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
