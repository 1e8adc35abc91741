//! Process-wide namespace registry.

use crate::group::{Group, Loader};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

fn registry() -> &'static RwLock<HashMap<String, Arc<Group>>> {
    static REGISTRY: OnceLock<RwLock<HashMap<String, Arc<Group>>>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Register a new namespace and return it.
///
/// A duplicate `name` silently replaces the prior binding in the registry
/// map — callers are expected to treat names as unique; this is a
/// registration contract, not something the registry enforces.
///
/// There is no "absent loader" failure mode here: `loader` is an
/// `Arc<dyn Loader>`, and Rust's type system makes a null trait object
/// unconstructable.
pub fn new_group(name: impl Into<String>, max_bytes: u64, loader: Arc<dyn Loader>) -> Arc<Group> {
    let name = name.into();
    let group = Arc::new(Group::new(name.clone(), max_bytes, loader));
    registry().write().insert(name, Arc::clone(&group));
    group
}

/// Look up a previously registered namespace by name.
pub fn get_group(name: &str) -> Option<Arc<Group>> {
    registry().read().get(name).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::loader_fn;

    #[test]
    fn registered_group_is_retrievable_by_name() {
        let name = "registry-test-retrievable";
        let loader = loader_fn(|_key| Ok(b"v".to_vec()));
        new_group(name, 1024, loader);

        let found = get_group(name);
        assert!(found.is_some());
        assert_eq!(found.unwrap().name(), name);
    }

    #[test]
    fn unknown_group_is_none() {
        assert!(get_group("registry-test-definitely-unregistered").is_none());
    }

    #[test]
    fn duplicate_registration_replaces_binding() {
        let name = "registry-test-duplicate";
        new_group(name, 1024, loader_fn(|_| Ok(b"first".to_vec())));
        new_group(name, 2048, loader_fn(|_| Ok(b"second".to_vec())));

        let group = get_group(name).unwrap();
        assert_eq!(group.get("k").unwrap().as_str(), "second");
    }
}
