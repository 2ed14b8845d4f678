//! motion-core (host-agnostic)
//!
//! Scroll- and visibility-triggered motion engine: a per-element lifecycle
//! state machine, a keyframe preset registry, progress math, and animation
//! construction against a pluggable platform seam. Hosts implement
//! [`platform::Host`], forward intersection and animation-completion
//! callbacks, and drain semantic events.
//!
//! The engine never throws past its own boundary: unknown presets, missing
//! platform primitives, and construction failures all degrade to the element
//! being fully visible and unanimated.

pub mod builder;
pub mod config;
pub mod events;
pub mod ids;
pub mod keyframes;
pub mod observer;
pub mod orchestrator;
pub mod platform;
pub mod progress;
pub mod store;
pub mod style;

// Re-exports for hosts and tests
pub use builder::{build_entrance, build_scroll, ScrollBuild};
pub use config::{
    parse_motion_context_json, ConfigError, FillMode, MotionConfig, MotionContext,
    SCROLL_COMPLETION_MAX, SCROLL_COMPLETION_MIN,
};
pub use events::{FallbackReason, MotionEvent};
pub use ids::{AnimationId, ElementId, IdAllocator, ObserverId};
pub use keyframes::{AnimationDescriptor, AnimationFamily, KeyframeRegistry};
pub use observer::{Crossing, Watch, WatchMode};
pub use orchestrator::{AnimationEvent, Orchestrator};
pub use platform::{EntranceTiming, Host, ObserverOptions};
pub use progress::{progress, Effect, ProgressThresholds, SlideDirection};
pub use store::{AnimationPhase, ElementStore, MotionState};
pub use style::{StyleSnapshot, StyleValue};
