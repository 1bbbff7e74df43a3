//! Immutability discipline for published configuration values.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A frozen, shareable value.
///
/// `Frozen` hands out shared references only; there is no API for mutating
/// the wrapped value, and clones share one allocation, so every consumer of
/// a cycle's output observes the same value until the next cycle supersedes
/// it with a fresh `Frozen`. This is the typed replacement for a reflective
/// deep-freeze walk: the config graph is acyclic and its hook members are
/// opaque shared callbacks with no reachable interior.
pub struct Frozen<T>(Arc<T>);

impl<T> Frozen<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Whether two handles share one underlying value.
    pub fn shares(&self, other: &Frozen<T>) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Deref for Frozen<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> Clone for Frozen<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Frozen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Frozen").field(&self.0).finish()
    }
}
