//! End-to-end tests exercising the registry, a `Group`, and concurrent
//! access together.
//!
//! # Test Strategy
//!
//! 1. **Registration**: a namespace registered once is retrievable by name
//!    from any thread.
//! 2. **Concurrent misses**: many threads racing a cold key all eventually
//!    observe a cached value, without the loader's result ever corrupting
//!    the store's byte accounting.
//! 3. **Byte budget under load**: a small per-group budget stays respected
//!    even under concurrent inserts.

use ringcache_core::{get_group, loader_fn, new_group, Error};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

// ============================================================================
// Registration
// ============================================================================

#[test]
fn registered_namespace_is_visible_from_other_threads() {
    let loader = loader_fn(|_key| Ok(b"v".to_vec()));
    new_group("integration-visibility", 4096, loader);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                let group = get_group("integration-visibility");
                assert!(group.is_some());
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}

// ============================================================================
// Concurrent misses on a cold key
// ============================================================================

#[test]
fn concurrent_gets_on_a_cold_key_all_see_a_value() {
    let loader_calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = Arc::clone(&loader_calls);
    let loader = loader_fn(move |_key| {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        Ok(b"hydrated".to_vec())
    });
    let group = new_group("integration-thundering-herd", 4096, loader);

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let group = Arc::clone(&group);
            thread::spawn(move || group.get("shared-key").unwrap())
        })
        .collect();

    for h in handles {
        let view = h.join().unwrap();
        assert_eq!(view.as_str(), "hydrated");
    }
    // Thundering-herd dedup (single-flight) isn't implemented: the loader
    // may run more than once here. Only the *outcome* is guaranteed, not
    // the call count.
    assert!(loader_calls.load(Ordering::SeqCst) >= 1);

    // A later, uncontended get must be a pure cache hit.
    let calls_before = loader_calls.load(Ordering::SeqCst);
    assert_eq!(group.get("shared-key").unwrap().as_str(), "hydrated");
    assert_eq!(loader_calls.load(Ordering::SeqCst), calls_before);
}

// ============================================================================
// Byte budget under concurrent load
// ============================================================================

#[test]
fn byte_budget_holds_under_concurrent_inserts() {
    let loader = loader_fn(|key| Ok(vec![b'x'; key.len() * 4]));
    let group = new_group("integration-budget", 256, loader);

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let group = Arc::clone(&group);
            thread::spawn(move || {
                for i in 0..100 {
                    let key = format!("thread-{t}-key-{i}");
                    let _ = group.get(&key);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    // The store itself isn't directly inspectable from here (it's behind
    // the Group's private cache), but a fresh miss must still succeed,
    // which it wouldn't if accounting had gone negative or panicked.
    assert!(group.get("final-probe-key").is_ok());
}

#[test]
fn unknown_key_surfaces_as_source_miss() {
    let group = new_group(
        "integration-source-miss",
        1024,
        loader_fn(|key| Err(Error::SourceMiss(key.to_string()))),
    );
    match group.get("nope") {
        Err(Error::SourceMiss(_)) => {}
        other => panic!("expected SourceMiss, got {other:?}"),
    }
}
