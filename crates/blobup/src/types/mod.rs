//! Validated protocol identifier types.

mod did;
mod handle;
mod pds_url;

pub use did::Did;
pub use handle::Handle;
pub use pds_url::PdsUrl;
