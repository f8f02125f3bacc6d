//! Identity tags for caller-supplied object references.
//!
//! Any object passed to a logging entry point gets a stable numeric id,
//! remembered for the lifetime of the registry and used only to decorate
//! output lines. Identity is reference identity (the object's address),
//! never value equality: two equal values at different addresses get two
//! different ids.
//!
//! The registry is thread-safe even though the logger itself is a
//! single-writer object, so a snapshot of it can be shared with inspection
//! tooling without extra synchronization.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

/// Reference-identity key for an object passed to a log call.
///
/// Wraps the object's address. Valid as an identity for as long as the
/// object stays where it is, which holds for the duration of a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectKey(usize);

impl ObjectKey {
    pub fn of<T: ?Sized>(object: &T) -> Self {
        Self(object as *const T as *const () as usize)
    }
}

/// Issues stable, monotonically-increasing ids for object references.
///
/// Ids start at 1. Looking up a known reference returns the id it was first
/// given; lookup and insert happen under one lock so concurrent callers can
/// never race two ids onto the same object.
pub struct ObjectIdRegistry {
    ids: Mutex<HashMap<ObjectKey, u64>>,
    next_id: AtomicU64,
}

impl ObjectIdRegistry {
    pub fn new() -> Self {
        Self {
            ids: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// The id for `key`, plus whether this is the first time it was seen.
    pub fn id_for(&self, key: ObjectKey) -> (u64, bool) {
        let mut ids = self.ids.lock();
        if let Some(&id) = ids.get(&key) {
            return (id, false);
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        ids.insert(key, id);
        (id, true)
    }

    /// Convenience wrapper over [`ObjectKey::of`] + [`ObjectIdRegistry::id_for`].
    pub fn id_of<T: ?Sized>(&self, object: &T) -> (u64, bool) {
        self.id_for(ObjectKey::of(object))
    }

    /// Number of distinct objects seen so far.
    pub fn len(&self) -> usize {
        self.ids.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.lock().is_empty()
    }
}

impl Default for ObjectIdRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_reference_keeps_its_id() {
        let registry = ObjectIdRegistry::new();
        let object = String::from("player");

        let (first, fresh) = registry.id_of(&object);
        let (second, seen) = registry.id_of(&object);

        assert_eq!(first, 1);
        assert!(fresh);
        assert_eq!(second, first);
        assert!(!seen);
    }

    #[test]
    fn distinct_references_get_distinct_ids() {
        let registry = ObjectIdRegistry::new();
        let a = 10u32;
        let b = 20u32;

        let (id_a, _) = registry.id_of(&a);
        let (id_b, _) = registry.id_of(&b);

        assert_ne!(id_a, id_b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn identity_is_by_address_not_value() {
        let registry = ObjectIdRegistry::new();
        let a = String::from("same");
        let b = String::from("same");

        let (id_a, _) = registry.id_of(&a);
        let (id_b, _) = registry.id_of(&b);

        assert_ne!(id_a, id_b, "equal values at different addresses are different objects");
    }

    #[test]
    fn concurrent_lookup_agrees_on_one_id() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(ObjectIdRegistry::new());
        let object: Arc<u64> = Arc::new(7);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let object = Arc::clone(&object);
                thread::spawn(move || registry.id_of(&*object).0)
            })
            .collect();

        let ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(ids.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(registry.len(), 1);
    }
}
