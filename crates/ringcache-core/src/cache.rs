//! Thread-safe envelope around a single [`LruStore`].

use crate::byteview::ByteView;
use crate::lru::LruStore;
use parking_lot::Mutex;

/// Wraps an [`LruStore`] behind one exclusive lock.
///
/// The inner store is constructed lazily on the first `add`, so a
/// namespace that never warms up never allocates one. Every operation
/// mutates recency order, so there is no readers/writer split here: a read
/// is a write. Lock hold times stay bounded to one hash-map probe plus one
/// list splice, since neither `add` nor `get` does any I/O.
pub struct ConcurrentCache {
    max_bytes: u64,
    inner: Mutex<Option<LruStore>>,
}

impl ConcurrentCache {
    /// Construct an envelope with the given byte budget, without allocating
    /// the inner store yet.
    pub fn new(max_bytes: u64) -> Self {
        Self {
            max_bytes,
            inner: Mutex::new(None),
        }
    }

    /// Insert or update `key`, constructing the inner store on first use.
    pub fn add(&self, key: impl Into<String>, value: ByteView) {
        let mut guard = self.inner.lock();
        guard
            .get_or_insert_with(|| LruStore::new(self.max_bytes))
            .add(key, value);
    }

    /// Look up `key`. Returns `None` both when the key is absent and when
    /// the inner store hasn't been constructed yet.
    pub fn get(&self, key: &str) -> Option<ByteView> {
        let mut guard = self.inner.lock();
        guard.as_mut()?.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lazily_constructs_inner_store() {
        let cache = ConcurrentCache::new(1024);
        assert!(cache.get("missing").is_none());
    }

    #[test]
    fn add_then_get_round_trips() {
        let cache = ConcurrentCache::new(1024);
        cache.add("k", ByteView::new(b"v"));
        assert_eq!(cache.get("k"), Some(ByteView::new(b"v")));
    }

    #[test]
    fn send_sync_across_threads() {
        use std::sync::Arc;
        use std::thread;

        let cache = Arc::new(ConcurrentCache::new(0));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for i in 0..200 {
                        let key = format!("t{t}-{i}");
                        cache.add(key.clone(), ByteView::new(b"x"));
                        assert!(cache.get(&key).is_some());
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
    }
}
