//! Reference HTTP peer transport for `ringcache`.
//!
//! This crate contains no caching logic of its own — it is wiring that
//! implements `ringcache_core`'s `PeerPicker`/`PeerTransport` capability
//! traits over HTTP.

pub mod client;
pub mod error;
pub mod pool;
pub mod server;

pub use client::HttpPeerClient;
pub use error::TransportError;
pub use pool::PeerPool;
