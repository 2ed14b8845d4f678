//! Per-element runtime state.
//!
//! Each observed element gets one `ElementRuntime` record, keyed by element
//! identity and mutated only by the orchestrator's transition functions. All
//! mutation happens synchronously inside single-threaded callback execution,
//! so state-machine guards are the only synchronization needed.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::config::MotionConfig;
use crate::ids::{AnimationId, ElementId};
use crate::observer::Watch;

/// Lifecycle states. `EntryComplete` is terminal when scroll mode is off;
/// `ScrollActive` is terminal otherwise (re-triggering requires `refresh`).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum MotionState {
    Idle,
    EntryPlaying,
    EntryComplete,
    ScrollReady,
    ScrollActive,
}

/// The two animation phases an element can hold handles for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum AnimationPhase {
    Entrance,
    Scroll,
}

/// What a given watch is for; the orchestrator dispatches crossings by role
/// and current state instead of closing over mutable flags.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WatchRole {
    /// Initial visibility watch that starts the entrance animation.
    EntranceTrigger,
    /// Initial visibility watch that activates scroll mode directly.
    ScrollTrigger,
    /// Post-entrance leave/re-enter gate for the scroll phase.
    ScrollTransition,
}

/// Two-step gate between entrance completion and scroll activation: the
/// element must be seen leaving the viewport before a re-entry counts.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScrollGate {
    AwaitingExit,
    AwaitingReentry,
}

/// One registered watch plus its purpose.
#[derive(Debug)]
pub struct ObserverRecord {
    pub watch: Watch,
    pub role: WatchRole,
}

/// Animation handles per phase.
#[derive(Copy, Clone, Debug, Default)]
pub struct PhaseAnimations {
    pub entrance: Option<AnimationId>,
    pub scroll: Option<AnimationId>,
}

impl PhaseAnimations {
    pub fn set(&mut self, phase: AnimationPhase, id: AnimationId) {
        match phase {
            AnimationPhase::Entrance => self.entrance = Some(id),
            AnimationPhase::Scroll => self.scroll = Some(id),
        }
    }

    pub fn get(&self, phase: AnimationPhase) -> Option<AnimationId> {
        match phase {
            AnimationPhase::Entrance => self.entrance,
            AnimationPhase::Scroll => self.scroll,
        }
    }

    pub fn drain(&mut self) -> impl Iterator<Item = AnimationId> {
        self.entrance.take().into_iter().chain(self.scroll.take())
    }
}

/// Runtime record for one element.
#[derive(Debug)]
pub struct ElementRuntime {
    pub state: MotionState,
    pub config: MotionConfig,
    pub animations: PhaseAnimations,
    pub observers: Vec<ObserverRecord>,
    pub gate: ScrollGate,
}

impl ElementRuntime {
    fn new(config: MotionConfig) -> Self {
        Self {
            state: MotionState::Idle,
            config,
            animations: PhaseAnimations::default(),
            observers: Vec::new(),
            gate: ScrollGate::AwaitingExit,
        }
    }

    /// Find the record for a platform observer id.
    pub fn observer_mut(&mut self, id: crate::ids::ObserverId) -> Option<&mut ObserverRecord> {
        self.observers.iter_mut().find(|r| r.watch.id == id)
    }
}

/// All tracked elements, strictly partitioned by element identity.
#[derive(Debug, Default)]
pub struct ElementStore {
    map: HashMap<ElementId, ElementRuntime>,
}

impl ElementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or replace) the runtime record for an element.
    pub fn create(&mut self, element: ElementId, config: MotionConfig) -> &mut ElementRuntime {
        self.map.insert(element, ElementRuntime::new(config));
        self.map.get_mut(&element).expect("just inserted")
    }

    pub fn get(&self, element: ElementId) -> Option<&ElementRuntime> {
        self.map.get(&element)
    }

    pub fn get_mut(&mut self, element: ElementId) -> Option<&mut ElementRuntime> {
        self.map.get_mut(&element)
    }

    pub fn contains(&self, element: ElementId) -> bool {
        self.map.contains_key(&element)
    }

    /// Remove a record; `None` when already removed (idempotent destroy).
    pub fn remove(&mut self, element: ElementId) -> Option<ElementRuntime> {
        self.map.remove(&element)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MotionContext;

    #[test]
    fn elements_do_not_cross_contaminate() {
        let cfg = MotionContext::default().resolve();
        let mut store = ElementStore::new();
        store.create(ElementId(1), cfg.clone());
        store.create(ElementId(2), cfg);
        store.get_mut(ElementId(1)).unwrap().state = MotionState::EntryPlaying;
        assert_eq!(store.get(ElementId(2)).unwrap().state, MotionState::Idle);
    }

    #[test]
    fn remove_is_idempotent() {
        let cfg = MotionContext::default().resolve();
        let mut store = ElementStore::new();
        store.create(ElementId(7), cfg);
        assert!(store.remove(ElementId(7)).is_some());
        assert!(store.remove(ElementId(7)).is_none());
    }
}
