//! Core components of the `filings-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`FilingsClient`] and its builder.
//! - The primary [`FilingsError`] type.
//! - Internal networking and retry logic.
//! - The [`services::DocumentFetcher`] trait.

/// The main client (`FilingsClient`), builder, and configuration.
pub mod client;
/// The error types (`FilingsError`, `ParseError`) for the crate.
pub mod error;
pub(crate) mod net;
/// The document-fetch seam used by the locator (`DocumentFetcher`).
pub mod services;

// convenient re-exports so most code can just `use crate::core::FilingsClient`
pub use client::{CacheMode, FilingsClient, FilingsClientBuilder, RetryConfig};
pub use error::{FilingsError, ParseError};
