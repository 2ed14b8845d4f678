//! Semantic events emitted while orchestrating.
//!
//! Hosts and tests drain these via `Orchestrator::take_events`; the engine
//! never blocks on them and nothing here carries failure semantics. Failures
//! already degraded to a fallback by the time an event is pushed.

use serde::{Deserialize, Serialize};

use crate::ids::ElementId;

/// Why a fallback path was taken.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum FallbackReason {
    /// Animation id did not resolve in its family's registry.
    UnknownAnimation,
    /// The platform refused to construct the animation.
    ConstructionFailed,
    /// No scroll-position timeline primitive and no declarative hook.
    TimelineUnsupported,
    /// No intersection primitive at all.
    ObservationUnavailable,
    /// The user prefers reduced motion.
    ReducedMotion,
}

/// Discrete signals from the lifecycle state machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MotionEvent {
    EntranceStarted {
        element: ElementId,
        animation: String,
    },
    EntranceCompleted {
        element: ElementId,
    },
    EntranceCancelled {
        element: ElementId,
    },
    ScrollActivated {
        element: ElementId,
        animation: String,
        completion_percent: f32,
    },
    FallbackApplied {
        element: ElementId,
        reason: FallbackReason,
    },
    Released {
        element: ElementId,
    },
}
