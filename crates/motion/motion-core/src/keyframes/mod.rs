//! Keyframe registry: animation-type identifier -> descriptor.
//!
//! Entrance and scroll presets live in separate id spaces because their
//! playback models differ (time-driven once vs. position-driven). Lookup is
//! fail-soft: an unknown id is `None`, never an error, and callers treat it
//! as "skip animation, leave the element revealed".

mod entrance;
mod scroll;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::style::StyleSnapshot;

/// Playback family of a descriptor.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AnimationFamily {
    /// Time-driven, plays exactly once on first sufficient visibility.
    Entrance,
    /// Position-driven, progress bound to viewport transit.
    Scroll,
}

/// Static, immutable preset: an id plus an ordered keyframe sequence.
///
/// Invariant: at least two snapshots; the first is the hidden/initial state,
/// the last is the revealed/final state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    pub id: &'static str,
    pub family: AnimationFamily,
    pub frames: Vec<StyleSnapshot>,
}

impl AnimationDescriptor {
    pub(crate) fn new(
        id: &'static str,
        family: AnimationFamily,
        frames: Vec<StyleSnapshot>,
    ) -> Self {
        debug_assert!(frames.len() >= 2, "descriptor '{id}' needs >= 2 snapshots");
        Self { id, family, frames }
    }

    /// Hidden/initial snapshot (first keyframe).
    pub fn initial(&self) -> &StyleSnapshot {
        &self.frames[0]
    }

    /// Revealed/final snapshot (last keyframe).
    pub fn terminal(&self) -> &StyleSnapshot {
        &self.frames[self.frames.len() - 1]
    }

    /// The snapshot fallbacks settle on. Usually the terminal snapshot, but
    /// enter-and-leave presets end hidden, so walk back to the last visible
    /// frame; failure paths must never park an element at opacity 0.
    pub fn resting(&self) -> StyleSnapshot {
        self.frames
            .iter()
            .rev()
            .find(|f| f.opacity().map_or(true, |o| o > 0.0))
            .cloned()
            .unwrap_or_else(StyleSnapshot::revealed)
    }
}

/// Owned lookup table for both families.
///
/// Instance-scoped on purpose: whoever composes the engine owns one, no
/// module-global tables.
#[derive(Debug)]
pub struct KeyframeRegistry {
    entrance: HashMap<&'static str, AnimationDescriptor>,
    scroll: HashMap<&'static str, AnimationDescriptor>,
}

impl KeyframeRegistry {
    pub fn new() -> Self {
        let mut reg = Self {
            entrance: HashMap::new(),
            scroll: HashMap::new(),
        };
        for d in entrance::descriptors() {
            reg.entrance.insert(d.id, d);
        }
        for d in scroll::descriptors() {
            reg.scroll.insert(d.id, d);
        }
        reg
    }

    /// Look up an entrance preset by id. Unknown ids are `None`, never a panic.
    pub fn entrance(&self, id: &str) -> Option<&AnimationDescriptor> {
        self.entrance.get(id)
    }

    /// Look up a scroll preset by id.
    pub fn scroll(&self, id: &str) -> Option<&AnimationDescriptor> {
        self.scroll.get(id)
    }

    /// Family-qualified lookup.
    pub fn lookup(&self, family: AnimationFamily, id: &str) -> Option<&AnimationDescriptor> {
        match family {
            AnimationFamily::Entrance => self.entrance(id),
            AnimationFamily::Scroll => self.scroll(id),
        }
    }

    pub fn entrance_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entrance.keys().copied()
    }

    pub fn scroll_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.scroll.keys().copied()
    }
}

impl Default for KeyframeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
