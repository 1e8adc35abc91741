//! Errors local to the HTTP peer transport.

use thiserror::Error;

/// Transport-layer failures, wrapped into [`ringcache_core::Error::PeerFault`]
/// before they ever reach a [`ringcache_core::Group`].
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to peer failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("peer returned non-success status: {0}")]
    Status(reqwest::StatusCode),
}
