//! Identifiers for engine entities.
//!
//! Elements, observers, and animation handles are all opaque to the core:
//! hosts mint them (the allocator below is a convenience for hosts and tests)
//! and the engine only ever compares them by identity.

use serde::{Deserialize, Serialize};

/// Opaque handle for one observed DOM-equivalent element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

/// Opaque handle for one platform intersection observer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u64);

/// Opaque handle for one platform animation object.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct AnimationId(pub u64);

/// Monotonic allocator for ElementId, ObserverId, and AnimationId.
/// IDs are opaque externally; density is irrelevant, uniqueness is not.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_element: u64,
    next_observer: u64,
    next_animation: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_element(&mut self) -> ElementId {
        let id = ElementId(self.next_element);
        self.next_element = self.next_element.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_observer(&mut self) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer = self.next_observer.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_animation(&mut self) -> AnimationId {
        let id = AnimationId(self.next_animation);
        self.next_animation = self.next_animation.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_element(), ElementId(0));
        assert_eq!(alloc.alloc_element(), ElementId(1));
        assert_eq!(alloc.alloc_observer(), ObserverId(0));
        assert_eq!(alloc.alloc_observer(), ObserverId(1));
        assert_eq!(alloc.alloc_animation(), AnimationId(0));
        assert_eq!(alloc.alloc_animation(), AnimationId(1));
        alloc.reset();
        assert_eq!(alloc.alloc_element(), ElementId(0));
    }
}
