//! Animation construction against the host.
//!
//! Builders never panic and never propagate host failures: an entrance that
//! cannot be constructed is `None`, and a scroll build reports which of the
//! three outcomes happened so the orchestrator can pick the right state.

use log::{debug, warn};

use crate::ids::{AnimationId, ElementId};
use crate::keyframes::AnimationDescriptor;
use crate::platform::{EntranceTiming, Host};

/// Outcome of a scroll-animation build.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScrollBuild {
    /// A platform animation bound to a view timeline.
    Animation(AnimationId),
    /// No timeline primitive, but the declarative styling hook took effect.
    DeclarativeFallback,
    /// Nothing available; caller fails open to the resting style.
    Unavailable,
}

/// Construct a play-once entrance animation.
pub fn build_entrance(
    host: &mut dyn Host,
    element: ElementId,
    descriptor: &AnimationDescriptor,
    timing: &EntranceTiming,
) -> Option<AnimationId> {
    let animation = host.animate(element, &descriptor.frames, timing);
    if animation.is_none() {
        warn!(
            "entrance '{}' failed to construct for element {:?}",
            descriptor.id, element
        );
    }
    animation
}

/// Construct a scroll-position-driven animation, falling back to the
/// declarative styling hook when the timeline primitive is missing or the
/// construction fails.
pub fn build_scroll(
    host: &mut dyn Host,
    element: ElementId,
    descriptor: &AnimationDescriptor,
    completion_percent: f32,
) -> ScrollBuild {
    if host.supports_view_timeline() {
        if let Some(animation) =
            host.animate_view_timeline(element, &descriptor.frames, completion_percent)
        {
            debug!(
                "scroll '{}' bound to view timeline, completion {completion_percent}%",
                descriptor.id
            );
            return ScrollBuild::Animation(animation);
        }
        warn!(
            "scroll '{}' timeline construction failed for element {:?}",
            descriptor.id, element
        );
    }

    if host.apply_scroll_fallback_style(element, completion_percent) {
        debug!("scroll '{}' using declarative fallback", descriptor.id);
        ScrollBuild::DeclarativeFallback
    } else {
        ScrollBuild::Unavailable
    }
}
