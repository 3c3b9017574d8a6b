//! Typed client for the practice-management API.
//!
//! The consumption layer mirrors the server's resources: one use-case
//! function per remote operation, each issuing exactly one call through an
//! injected [`HttpAdapter`](adapter::HttpAdapter) and wrapping transport
//! failures in a domain-specific error message. No retries, no batching.

pub mod adapter;
pub mod error;
pub mod types;
pub mod usecases;

pub use adapter::{HttpAdapter, ReqwestAdapter};
pub use error::ClientError;
