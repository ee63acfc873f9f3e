//! Best-effort lookups against the word API
//!
//! Every call is bounded by the client timeout. Callers treat any error as
//! "unavailable" and fall back to local data, so nothing here is fatal.

mod client;
mod types;

pub use client::{DEFAULT_API_BASE, DEFAULT_TIMEOUT, RemoteClient};
pub use types::{Definition, NO_DEFINITION, RemoteSeed, SeedResponse, describe};

use thiserror::Error;

/// Errors from the word API
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid seed response: {0}")]
    InvalidSeed(&'static str),
    #[error("word list response contained no usable words")]
    EmptyWordList,
}
