//! Scroll presets: position-driven, progress bound to the element's transit
//! through the viewport.
//!
//! Two shapes exist:
//! - entry-and-hold (2-step): reach the revealed state and stay there;
//! - enter-and-leave (4-step): hidden -> revealed -> revealed -> hidden, for
//!   elements that animate away again on exit.

use super::{AnimationDescriptor, AnimationFamily};
use crate::style::StyleSnapshot;

fn desc(id: &'static str, frames: Vec<StyleSnapshot>) -> AnimationDescriptor {
    AnimationDescriptor::new(id, AnimationFamily::Scroll, frames)
}

/// Entry-and-hold: hidden start state, revealed end state.
fn entry_hold(id: &'static str, from: &str, to: &str) -> AnimationDescriptor {
    desc(
        id,
        vec![
            StyleSnapshot::at(0.0).prop("opacity", 0.0).prop("transform", from),
            StyleSnapshot::at(1.0).prop("opacity", 1.0).prop("transform", to),
        ],
    )
}

pub(super) fn descriptors() -> Vec<AnimationDescriptor> {
    vec![
        // Entry animations (appear once and stay)
        entry_hold("fade-in-up", "translateY(100%)", "translateY(0%)"),
        entry_hold("fade-in-down", "translateY(-100%)", "translateY(0%)"),
        entry_hold("scale-in", "scale(0.8)", "scale(1)"),
        entry_hold("slide-in-left", "translateX(-100%)", "translateX(0%)"),
        entry_hold("slide-in-right", "translateX(100%)", "translateX(0%)"),
        entry_hold("rotate-in", "rotate(-10deg) scale(0.9)", "rotate(0deg) scale(1)"),
        // Enter & leave animations (appear and disappear with scroll position)
        fade_enter_leave(),
        scale_enter_leave(),
        slide_enter_leave(),
    ]
}

fn fade_enter_leave() -> AnimationDescriptor {
    desc(
        "fade-enter-leave",
        vec![
            StyleSnapshot::at(0.0).prop("opacity", 0.0),
            StyleSnapshot::at(0.2).prop("opacity", 1.0),
            StyleSnapshot::at(0.8).prop("opacity", 1.0),
            StyleSnapshot::at(1.0).prop("opacity", 0.0),
        ],
    )
}

fn scale_enter_leave() -> AnimationDescriptor {
    desc(
        "scale-enter-leave",
        vec![
            StyleSnapshot::at(0.0).prop("opacity", 0.0).prop("transform", "scale(0.8)"),
            StyleSnapshot::at(0.2).prop("opacity", 1.0).prop("transform", "scale(1)"),
            StyleSnapshot::at(0.8).prop("opacity", 1.0).prop("transform", "scale(1)"),
            StyleSnapshot::at(1.0).prop("opacity", 0.0).prop("transform", "scale(0.8)"),
        ],
    )
}

fn slide_enter_leave() -> AnimationDescriptor {
    desc(
        "slide-enter-leave",
        vec![
            StyleSnapshot::at(0.0)
                .prop("opacity", 0.0)
                .prop("transform", "translateY(100%)"),
            StyleSnapshot::at(0.2)
                .prop("opacity", 1.0)
                .prop("transform", "translateY(0%)"),
            StyleSnapshot::at(0.8)
                .prop("opacity", 1.0)
                .prop("transform", "translateY(0%)"),
            StyleSnapshot::at(1.0)
                .prop("opacity", 0.0)
                .prop("transform", "translateY(-100%)"),
        ],
    )
}
