//! The namespace controller: the public entry point that sequences
//! local-lookup, peer-forward, source-load and populate.

use crate::byteview::ByteView;
use crate::cache::ConcurrentCache;
use crate::error::Error;
use parking_lot::RwLock;
use std::sync::Arc;

/// The authoritative source of truth for keys missing from a namespace's
/// local cache. Expressed as a single-method capability so that a bare
/// closure can stand in for an implementation (see [`loader_fn`]), the way
/// the Go original's `GetterFunc` adapts a function into a `Getter`.
pub trait Loader: Send + Sync {
    /// Load the authoritative bytes for `key`.
    ///
    /// Returns `Err(Error::SourceMiss(_))` when the key genuinely doesn't
    /// exist at the source, and `Err(Error::SourceFault(_))` for any other
    /// failure to reach or read from the source.
    fn load(&self, key: &str) -> Result<Vec<u8>, Error>;
}

/// Adapts a plain closure into a [`Loader`].
struct LoaderFn<F>(F);

impl<F> Loader for LoaderFn<F>
where
    F: Fn(&str) -> Result<Vec<u8>, Error> + Send + Sync,
{
    fn load(&self, key: &str) -> Result<Vec<u8>, Error> {
        (self.0)(key)
    }
}

/// Promote a function value into a [`Loader`] instance.
pub fn loader_fn<F>(f: F) -> Arc<dyn Loader>
where
    F: Fn(&str) -> Result<Vec<u8>, Error> + Send + Sync + 'static,
{
    Arc::new(LoaderFn(f))
}

/// Fetches a key's bytes from whichever peer owns it on the ring.
///
/// `fetch` may block indefinitely (it is a network call in any real
/// transport) and is always invoked outside any cache or registry lock.
pub trait PeerTransport: Send + Sync {
    /// Fetch `key` from namespace `group` on this peer.
    fn fetch(&self, group: &str, key: &str) -> Result<Vec<u8>, Error>;
}

/// Chooses, for a given key, which peer (if any other than this node) owns
/// it and should be asked for it over a [`PeerTransport`].
///
/// Returning `None` signals "handle locally" — either because this node is
/// the owner, or because there is no picker configured for remote lookup.
/// A real `PeerPicker` is responsible for the `peer != self` check that
/// keeps this from forwarding to itself in a loop; `Group` only ever sees
/// the already-filtered result.
pub trait PeerPicker: Send + Sync {
    /// Pick the peer transport responsible for `key`, if it isn't this node.
    fn pick(&self, key: &str) -> Option<Arc<dyn PeerTransport>>;
}

/// A named cache scope: a byte budget, a loader, a local cache, and an
/// optional peer picker for the distributed miss path.
///
/// Construct one via [`crate::registry::new_group`], not directly — the
/// registry is what guarantees process-wide name uniqueness.
pub struct Group {
    name: String,
    loader: Arc<dyn Loader>,
    cache: ConcurrentCache,
    peers: RwLock<Option<Arc<dyn PeerPicker>>>,
}

impl Group {
    pub(crate) fn new(name: String, max_bytes: u64, loader: Arc<dyn Loader>) -> Self {
        Self {
            name,
            loader,
            cache: ConcurrentCache::new(max_bytes),
            peers: RwLock::new(None),
        }
    }

    /// This namespace's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach a [`PeerPicker`] for the distributed miss path.
    ///
    /// # Panics
    ///
    /// Panics if called more than once on the same `Group` — a double
    /// registration is a programmer error, not a recoverable condition.
    pub fn register_peers(&self, picker: Arc<dyn PeerPicker>) {
        let mut slot = self.peers.write();
        if slot.is_some() {
            panic!("register_peers called more than once on group {:?}", self.name);
        }
        *slot = Some(picker);
    }

    /// Look up `key`: a local cache hit returns immediately; a miss enters
    /// [`Group::load`]. Rejects an empty key outright.
    pub fn get(&self, key: &str) -> Result<ByteView, Error> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        if let Some(view) = self.cache.get(key) {
            tracing::debug!(group = %self.name, key, "cache hit");
            return Ok(view);
        }
        tracing::debug!(group = %self.name, key, "cache miss");
        self.load(key)
    }

    /// Miss-path state machine:
    ///
    /// if a peer picker is configured and picks a remote owner for `key`,
    /// try fetching from that peer; on success, return the fetched view
    /// *without* caching it locally (only the ring's owner populates its
    /// cache, or every peer would double-store every key). On any peer
    /// failure — including "no remote owner" — fall through to a local,
    /// authoritative load via the loader, whose result is copied into a
    /// fresh `ByteView` and installed in the local cache before returning.
    fn load(&self, key: &str) -> Result<ByteView, Error> {
        let picker = self.peers.read().clone();
        if let Some(picker) = picker {
            if let Some(transport) = picker.pick(key) {
                match transport.fetch(&self.name, key) {
                    Ok(bytes) => return Ok(ByteView::from_vec(bytes)),
                    Err(err) => {
                        tracing::warn!(group = %self.name, key, error = %err, "peer fetch failed, falling back to local load");
                    }
                }
            }
        }
        self.load_locally(key)
    }

    fn load_locally(&self, key: &str) -> Result<ByteView, Error> {
        let bytes = self.loader.load(key)?;
        let view = ByteView::from_vec(bytes);
        self.cache.add(key.to_string(), view.clone());
        Ok(view)
    }
}
