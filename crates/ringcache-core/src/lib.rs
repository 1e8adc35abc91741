//! Core of a distributed in-memory cache: a byte-budgeted LRU store, a
//! consistent-hash ring for routing keys to peers, and the namespace
//! controller that sequences local-lookup, peer-forward, source-load and
//! populate.
//!
//! This crate has no opinion on transport, process bootstrap, or request
//! logging — see `ringcache-transport` and `ringcache-cli` for those.

pub mod byteview;
pub mod cache;
pub mod error;
pub mod group;
pub mod lru;
pub mod registry;
pub mod ring;

pub use byteview::ByteView;
pub use cache::ConcurrentCache;
pub use error::{Error, Result};
pub use group::{loader_fn, Group, Loader, PeerPicker, PeerTransport};
pub use lru::LruStore;
pub use registry::{get_group, new_group};
pub use ring::Ring;
