//! Object identity.
//!
//! Every widget (and any other long-lived object that wants one) carries a
//! process-unique [`ObjectId`]. IDs are handles only: they say nothing about
//! whether the object is still alive, and they are never reused within a
//! process.

use std::sync::atomic::{AtomicU64, Ordering};

/// A process-unique identifier for an object.
///
/// IDs are allocated from a monotonic counter and are valid for comparison
/// and hashing for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

impl ObjectId {
    /// Allocate a fresh, never-before-seen ID.
    pub fn allocate() -> Self {
        Self(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value, for interop with external systems.
    #[inline]
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

/// Base trait for identifiable objects.
pub trait Object {
    /// Get this object's unique ID.
    fn object_id(&self) -> ObjectId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = ObjectId::allocate();
        let b = ObjectId::allocate();
        assert_ne!(a, b);
        assert!(b.as_raw() > a.as_raw());
    }

    #[test]
    fn test_id_is_copy_and_hashable() {
        use std::collections::HashSet;
        let id = ObjectId::allocate();
        let copy = id;
        let mut set = HashSet::new();
        set.insert(id);
        assert!(set.contains(&copy));
    }
}
