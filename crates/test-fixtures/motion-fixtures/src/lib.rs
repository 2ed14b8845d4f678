//! Shared test scaffolding: canned wire-format motion contexts and a
//! recording mock platform adapter.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

use motion_core::{
    AnimationId, ElementId, EntranceTiming, Host, IdAllocator, MotionContext, ObserverId,
    ObserverOptions, StyleSnapshot,
};

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    contexts: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = fixtures_root().join(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

/// Raw JSON text for a named motion context fixture.
pub fn motion_context_json(name: &str) -> Result<String> {
    let rel = MANIFEST
        .contexts
        .get(name)
        .ok_or_else(|| anyhow!("unknown context fixture '{name}'"))?;
    read_to_string(rel)
}

/// Parsed motion context for a named fixture.
pub fn motion_context(name: &str) -> Result<MotionContext> {
    let text = motion_context_json(name)?;
    motion_core::parse_motion_context_json(&text)
        .map_err(|e| anyhow!("fixture '{name}' did not parse: {e}"))
}

/// Which builder produced a mock animation.
#[derive(Clone, Debug, PartialEq)]
pub enum MockAnimationKind {
    Entrance(EntranceTiming),
    Scroll { completion_percent: f32 },
}

#[derive(Clone, Debug)]
pub struct MockAnimation {
    pub id: AnimationId,
    pub element: ElementId,
    pub frames: Vec<StyleSnapshot>,
    pub kind: MockAnimationKind,
    pub cancelled: bool,
}

#[derive(Clone, Debug)]
pub struct MockObserver {
    pub id: ObserverId,
    pub element: ElementId,
    pub options: ObserverOptions,
    pub disconnected: bool,
}

/// Recording platform adapter with controllable capabilities.
#[derive(Debug)]
pub struct MockHost {
    ids: IdAllocator,
    pub applied_styles: Vec<(ElementId, StyleSnapshot)>,
    pub animations: Vec<MockAnimation>,
    pub observers: Vec<MockObserver>,
    /// Fallback-path switches for tests.
    pub view_timeline_supported: bool,
    pub scroll_fallback_succeeds: bool,
    pub fail_entrance_construction: bool,
    pub fail_view_timeline_construction: bool,
    pub observation_unavailable: bool,
    pub reduced_motion: bool,
    pub scroll_fallback_applied: Vec<(ElementId, f32)>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            ids: IdAllocator::new(),
            applied_styles: Vec::new(),
            animations: Vec::new(),
            observers: Vec::new(),
            view_timeline_supported: true,
            scroll_fallback_succeeds: true,
            fail_entrance_construction: false,
            fail_view_timeline_construction: false,
            observation_unavailable: false,
            reduced_motion: false,
            scroll_fallback_applied: Vec::new(),
        }
    }

    /// Last directly-applied opacity for an element, if any style was set.
    pub fn effective_opacity(&self, element: ElementId) -> Option<f32> {
        self.applied_styles
            .iter()
            .rev()
            .find(|(el, _)| *el == element)
            .and_then(|(_, snap)| snap.opacity())
    }

    pub fn last_style(&self, element: ElementId) -> Option<&StyleSnapshot> {
        self.applied_styles
            .iter()
            .rev()
            .find(|(el, _)| *el == element)
            .map(|(_, snap)| snap)
    }

    pub fn observers_for(&self, element: ElementId) -> Vec<&MockObserver> {
        self.observers.iter().filter(|o| o.element == element).collect()
    }

    pub fn active_observers(&self, element: ElementId) -> Vec<&MockObserver> {
        self.observers
            .iter()
            .filter(|o| o.element == element && !o.disconnected)
            .collect()
    }

    pub fn animation(&self, id: AnimationId) -> Option<&MockAnimation> {
        self.animations.iter().find(|a| a.id == id)
    }

    pub fn animations_for(&self, element: ElementId) -> Vec<&MockAnimation> {
        self.animations.iter().filter(|a| a.element == element).collect()
    }

    pub fn active_animations(&self, element: ElementId) -> Vec<&MockAnimation> {
        self.animations
            .iter()
            .filter(|a| a.element == element && !a.cancelled)
            .collect()
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for MockHost {
    fn apply_style(&mut self, element: ElementId, style: &StyleSnapshot) {
        self.applied_styles.push((element, style.clone()));
    }

    fn animate(
        &mut self,
        element: ElementId,
        frames: &[StyleSnapshot],
        timing: &EntranceTiming,
    ) -> Option<AnimationId> {
        if self.fail_entrance_construction {
            return None;
        }
        let id = self.ids.alloc_animation();
        self.animations.push(MockAnimation {
            id,
            element,
            frames: frames.to_vec(),
            kind: MockAnimationKind::Entrance(timing.clone()),
            cancelled: false,
        });
        Some(id)
    }

    fn supports_view_timeline(&self) -> bool {
        self.view_timeline_supported
    }

    fn animate_view_timeline(
        &mut self,
        element: ElementId,
        frames: &[StyleSnapshot],
        completion_percent: f32,
    ) -> Option<AnimationId> {
        if !self.view_timeline_supported || self.fail_view_timeline_construction {
            return None;
        }
        let id = self.ids.alloc_animation();
        self.animations.push(MockAnimation {
            id,
            element,
            frames: frames.to_vec(),
            kind: MockAnimationKind::Scroll { completion_percent },
            cancelled: false,
        });
        Some(id)
    }

    fn apply_scroll_fallback_style(&mut self, element: ElementId, completion_percent: f32) -> bool {
        if self.scroll_fallback_succeeds {
            self.scroll_fallback_applied.push((element, completion_percent));
        }
        self.scroll_fallback_succeeds
    }

    fn cancel_animation(&mut self, animation: AnimationId) {
        if let Some(a) = self.animations.iter_mut().find(|a| a.id == animation) {
            a.cancelled = true;
        }
    }

    fn observe(&mut self, element: ElementId, options: &ObserverOptions) -> Option<ObserverId> {
        if self.observation_unavailable {
            return None;
        }
        let id = self.ids.alloc_observer();
        self.observers.push(MockObserver {
            id,
            element,
            options: options.clone(),
            disconnected: false,
        });
        Some(id)
    }

    fn disconnect(&mut self, observer: ObserverId) {
        if let Some(o) = self.observers.iter_mut().find(|o| o.id == observer) {
            o.disconnected = true;
        }
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}
