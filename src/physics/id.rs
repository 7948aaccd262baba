// Body identity and id allocation

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a rigid body
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub(crate) u64);

impl BodyId {
    /// Create a body ID from a raw u64
    pub fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out strictly increasing body IDs, starting at 1
///
/// Safe to share between threads. Every allocator has its own sequence, so a
/// test (or a simulation context) can own one and get predictable numbering.
#[derive(Debug)]
pub struct BodyIdAllocator {
    last: AtomicU64,
}

impl BodyIdAllocator {
    /// Create an allocator whose first ID will be 1
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// Allocate the next ID
    pub fn allocate(&self) -> BodyId {
        BodyId(self.last.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// The most recently allocated ID, if any
    pub fn last(&self) -> Option<BodyId> {
        match self.last.load(Ordering::Relaxed) {
            0 => None,
            id => Some(BodyId(id)),
        }
    }
}

impl Default for BodyIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_BODY_IDS: BodyIdAllocator = BodyIdAllocator::new();

/// The process-wide allocator used when no allocator is supplied
pub fn global_allocator() -> &'static BodyIdAllocator {
    &GLOBAL_BODY_IDS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_allocator_starts_at_one() {
        let ids = BodyIdAllocator::new();
        assert_eq!(ids.last(), None);
        assert_eq!(ids.allocate(), BodyId::from_u64(1));
        assert_eq!(ids.allocate(), BodyId::from_u64(2));
        assert_eq!(ids.last(), Some(BodyId::from_u64(2)));
    }

    #[test]
    fn test_allocators_are_independent() {
        let a = BodyIdAllocator::new();
        let b = BodyIdAllocator::new();
        a.allocate();
        a.allocate();
        assert_eq!(b.allocate().as_u64(), 1);
    }

    #[test]
    fn test_global_ids_increase() {
        let first = global_allocator().allocate();
        let second = global_allocator().allocate();
        assert!(second > first);
    }

    #[test]
    fn test_concurrent_allocation_is_unique() {
        let ids = Arc::new(BodyIdAllocator::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = Arc::clone(&ids);
                thread::spawn(move || (0..500).map(|_| ids.allocate()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "ID {} allocated twice", id);
            }
        }
        assert_eq!(seen.len(), 4000);
        assert_eq!(ids.last(), Some(BodyId::from_u64(4000)));
    }

    #[test]
    fn test_display() {
        assert_eq!(BodyId::from_u64(7).to_string(), "#7");
    }
}
