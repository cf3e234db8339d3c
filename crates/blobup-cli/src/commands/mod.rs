//! Command implementations.

pub mod upload;
