//! Consistent-hash ring mapping keys to peer identifiers via virtual nodes.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A `bytes -> u32` hash function, injectable for testability.
///
/// The default, [`Ring::new`], uses CRC-32 with the IEEE polynomial over the
/// UTF-8 bytes of the hashed string, matching the reference implementation
/// and stable across processes.
pub type HashFn = Arc<dyn Fn(&[u8]) -> u32 + Send + Sync>;

fn crc32_ieee(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// Consistent-hash ring. Built once via [`Ring::add`], then treated as
/// immutable for lookups; an updated peer set is built as a fresh `Ring`
/// and the old one replaced wholesale, rather than mutated in place while
/// readers may be looking it up (see [`crate::peer::PeerPool`]).
pub struct Ring {
    replicas: usize,
    hash_fn: HashFn,
    /// Sorted virtual-node hashes. Kept sorted after every `add`.
    keys: Vec<u32>,
    /// Virtual-node hash -> owning peer identifier.
    mapping: HashMap<u32, String>,
}

impl fmt::Debug for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ring")
            .field("replicas", &self.replicas)
            .field("virtual_nodes", &self.keys.len())
            .finish()
    }
}

impl Ring {
    /// Construct an empty ring with `replicas` virtual nodes per real peer,
    /// using the default CRC-32/IEEE hash function.
    pub fn new(replicas: usize) -> Self {
        Self::with_hash(replicas, Arc::new(crc32_ieee))
    }

    /// Construct an empty ring with a caller-supplied hash function.
    pub fn with_hash(replicas: usize, hash_fn: HashFn) -> Self {
        assert!(replicas > 0, "replicas must be positive");
        Self {
            replicas,
            hash_fn,
            keys: Vec::new(),
            mapping: HashMap::new(),
        }
    }

    /// Default replication factor used by reference peer pools.
    pub const DEFAULT_REPLICAS: usize = 50;

    /// Add zero or more real peers. For each peer and each `i` in
    /// `[0, replicas)`, computes `hash(i.to_string() + peer)`, appends it to
    /// the sorted key sequence, and maps it to the peer. Colliding virtual
    /// hashes overwrite the earlier mapping. The key sequence is re-sorted
    /// once after processing all inputs.
    pub fn add<S: AsRef<str>>(&mut self, peers: impl IntoIterator<Item = S>) {
        for peer in peers {
            let peer = peer.as_ref();
            for i in 0..self.replicas {
                let vnode_key = format!("{i}{peer}");
                let hash = (self.hash_fn)(vnode_key.as_bytes());
                self.keys.push(hash);
                self.mapping.insert(hash, peer.to_string());
            }
        }
        self.keys.sort_unstable();
    }

    /// Find the peer responsible for `key`: the virtual node at the
    /// smallest hash `>= hash(key)`, wrapping to the first virtual node if
    /// none is. Returns an empty string if the ring has no peers.
    pub fn get(&self, key: &str) -> String {
        if self.keys.is_empty() {
            return String::new();
        }
        let hash = (self.hash_fn)(key.as_bytes());
        let idx = self.keys.partition_point(|&k| k < hash);
        let idx = if idx == self.keys.len() { 0 } else { idx };
        self.mapping
            .get(&self.keys[idx])
            .cloned()
            .unwrap_or_default()
    }

    /// Number of distinct peers with at least one virtual node.
    pub fn peer_count(&self) -> usize {
        self.mapping
            .values()
            .collect::<std::collections::HashSet<_>>()
            .len()
    }

    /// Total virtual-node count on the ring.
    pub fn virtual_node_count(&self) -> usize {
        self.keys.len()
    }
}
