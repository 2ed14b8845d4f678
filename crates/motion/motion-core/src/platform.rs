//! Host seam: the platform primitives the engine drives.
//!
//! The core stays host-agnostic the same way a resolver seam keeps an engine
//! out of the scene graph: adapters (a real DOM binding, or the test mock)
//! implement `Host` and the orchestrator calls through it. Every method is a
//! request, not a guarantee: constructors return `Option`/`bool` and the
//! engine degrades when the platform says no.

use serde::{Deserialize, Serialize};

use crate::config::FillMode;
use crate::ids::{AnimationId, ElementId, ObserverId};
use crate::style::StyleSnapshot;

/// Timing for a time-driven entrance animation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntranceTiming {
    pub duration_ms: f32,
    pub delay_ms: f32,
    pub easing: String,
    pub fill: FillMode,
}

/// Intersection observation parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObserverOptions {
    /// Intersection ratio at which the platform should report crossings.
    pub threshold: f32,
    /// Extra margin around the viewport, in pixels.
    pub root_margin_px: f32,
}

/// Platform adapter implemented by hosts.
pub trait Host {
    /// Apply an inline style snapshot to an element immediately.
    fn apply_style(&mut self, element: ElementId, style: &StyleSnapshot);

    /// Construct a time-driven animation that plays once. `None` means the
    /// platform refused (malformed keyframes, missing primitive); the engine
    /// falls back rather than retrying.
    fn animate(
        &mut self,
        element: ElementId,
        frames: &[StyleSnapshot],
        timing: &EntranceTiming,
    ) -> Option<AnimationId>;

    /// Whether the platform has a scroll-position timeline primitive.
    fn supports_view_timeline(&self) -> bool;

    /// Construct a position-driven animation bound to the element's transit
    /// of the viewport: progress 0 is the entry edge touching the viewport,
    /// progress 1 is `completion_percent` of the way through the transit.
    fn animate_view_timeline(
        &mut self,
        element: ElementId,
        frames: &[StyleSnapshot],
        completion_percent: f32,
    ) -> Option<AnimationId>;

    /// Declarative approximation of a view-timeline animation via a
    /// lower-level styling hook. Returns whether the hook took effect.
    fn apply_scroll_fallback_style(&mut self, element: ElementId, completion_percent: f32) -> bool;

    /// Cancel a previously constructed animation. Must tolerate handles that
    /// already finished or were cancelled.
    fn cancel_animation(&mut self, animation: AnimationId);

    /// Start intersection observation for an element. `None` means the
    /// platform has no intersection primitive at all.
    fn observe(&mut self, element: ElementId, options: &ObserverOptions) -> Option<ObserverId>;

    /// Stop an observer. Must be idempotent.
    fn disconnect(&mut self, observer: ObserverId);

    /// Accessibility probe; hosts without the concept return false.
    fn prefers_reduced_motion(&self) -> bool {
        false
    }
}
