//! Engine-side visibility watches.
//!
//! The platform delivers raw intersection updates; a `Watch` turns them into
//! discrete crossings relative to its threshold. One-shot watches report at
//! most one qualifying crossing no matter how many queued updates arrive
//! before the platform observer is actually disconnected; the double-fire
//! race is absorbed here instead of leaking into state-machine code.

use crate::ids::ObserverId;

/// How long a watch stays connected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WatchMode {
    /// Disconnect after the first qualifying crossing.
    OneShot,
    /// Stay connected until explicitly disconnected.
    Persistent,
}

/// One visibility-state change relative to a watch's threshold.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Crossing {
    /// Whether the element now counts as visible for this watch.
    pub visible: bool,
    pub is_intersecting: bool,
    pub ratio: f32,
}

/// Threshold-crossing detector for one platform observer.
#[derive(Debug)]
pub struct Watch {
    pub id: ObserverId,
    pub mode: WatchMode,
    pub threshold: f32,
    last_visible: Option<bool>,
    fired: bool,
    disconnected: bool,
}

impl Watch {
    pub fn new(id: ObserverId, threshold: f32, mode: WatchMode) -> Self {
        Self {
            id,
            mode,
            threshold,
            last_visible: None,
            fired: false,
            disconnected: false,
        }
    }

    /// Interpret one raw intersection update. Returns a crossing only when
    /// the visible-state changed relative to the threshold; repeats and
    /// post-fire one-shot deliveries return `None`.
    pub fn update(&mut self, is_intersecting: bool, ratio: f32) -> Option<Crossing> {
        if self.disconnected {
            return None;
        }
        if self.mode == WatchMode::OneShot && self.fired {
            return None;
        }

        let visible = is_intersecting && ratio >= self.threshold;
        if self.last_visible == Some(visible) {
            return None;
        }
        self.last_visible = Some(visible);

        if self.mode == WatchMode::OneShot && visible {
            self.fired = true;
        }
        Some(Crossing {
            visible,
            is_intersecting,
            ratio,
        })
    }

    /// Record that the platform observer was (or is being) disconnected.
    /// Safe to call more than once.
    pub fn mark_disconnected(&mut self) {
        self.disconnected = true;
    }

    pub fn is_disconnected(&self) -> bool {
        self.disconnected
    }
}
