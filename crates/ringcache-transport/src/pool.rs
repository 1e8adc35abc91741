//! `PeerPool`: a [`PeerPicker`] backed by a consistent-hash ring over a set
//! of HTTP peers.

use crate::client::HttpPeerClient;
use parking_lot::RwLock;
use ringcache_core::{PeerPicker, PeerTransport, Ring};
use std::collections::HashMap;
use std::sync::Arc;

const DEFAULT_BASE_PATH: &str = "/_ringcache/";

struct PoolState {
    ring: Ring,
    clients: HashMap<String, Arc<HttpPeerClient>>,
}

/// Owns this node's address, the ring of known peers, and one HTTP client
/// per peer. `set` rebuilds the ring and the client map together and swaps
/// them in under a single write-lock acquisition, so a concurrent `pick`
/// never observes a half-built map — it sees either the old peer set in
/// full or the new one in full, never a mix.
pub struct PeerPool {
    self_addr: String,
    base_path: String,
    state: RwLock<PoolState>,
}

impl PeerPool {
    /// Construct a pool for this node's own address, with no peers yet.
    pub fn new(self_addr: impl Into<String>) -> Self {
        Self {
            self_addr: self_addr.into(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            state: RwLock::new(PoolState {
                ring: Ring::new(Ring::DEFAULT_REPLICAS),
                clients: HashMap::new(),
            }),
        }
    }

    /// This node's own address, as passed to [`PeerPool::new`].
    pub fn self_addr(&self) -> &str {
        &self.self_addr
    }

    /// The URL path prefix peers are served under.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Replace the known peer set: a fresh ring and a fresh client map,
    /// built offline and then swapped in atomically.
    pub fn set(&self, peers: impl IntoIterator<Item = impl AsRef<str>>) {
        let peers: Vec<String> = peers.into_iter().map(|p| p.as_ref().to_string()).collect();

        let mut ring = Ring::new(Ring::DEFAULT_REPLICAS);
        ring.add(peers.iter());

        let clients = peers
            .iter()
            .map(|peer| {
                let base_url = format!("{peer}{}", self.base_path);
                (peer.clone(), Arc::new(HttpPeerClient::new(base_url)))
            })
            .collect();

        let mut guard = self.state.write();
        guard.ring = ring;
        guard.clients = clients;
        tracing::info!(self_addr = %self.self_addr, peer_count = peers.len(), "peer set updated");
    }
}

impl PeerPicker for PeerPool {
    fn pick(&self, key: &str) -> Option<Arc<dyn PeerTransport>> {
        let guard = self.state.read();
        let owner = guard.ring.get(key);
        if owner.is_empty() || owner == self.self_addr {
            return None;
        }
        let client = guard.clients.get(&owner)?;
        tracing::debug!(self_addr = %self.self_addr, peer = %owner, key, "picked peer");
        Some(Arc::clone(client) as Arc<dyn PeerTransport>)
    }
}
