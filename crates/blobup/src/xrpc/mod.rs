//! XRPC transport layer.

pub(crate) mod client;
pub(crate) mod endpoints;

pub use client::XrpcClient;
