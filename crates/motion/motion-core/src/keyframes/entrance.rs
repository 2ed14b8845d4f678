//! Entrance presets: time-driven, play once when the element first becomes
//! sufficiently visible. Keyframe values follow the classic animate.css-style
//! curves: every preset starts hidden and ends fully revealed.

use super::{AnimationDescriptor, AnimationFamily};
use crate::style::StyleSnapshot;

const BOUNCE_EASE: &str = "cubic-bezier(0.215, 0.610, 0.355, 1.000)";
const ZOOM_EASE_IN: &str = "cubic-bezier(0.55, 0.055, 0.675, 0.19)";
const ZOOM_EASE_OUT: &str = "cubic-bezier(0.175, 0.885, 0.32, 1)";

fn desc(id: &'static str, frames: Vec<StyleSnapshot>) -> AnimationDescriptor {
    AnimationDescriptor::new(id, AnimationFamily::Entrance, frames)
}

pub(super) fn descriptors() -> Vec<AnimationDescriptor> {
    let mut out = Vec::with_capacity(27);
    out.extend(bounce());
    out.extend(fade());
    out.extend(flip());
    out.extend(slide());
    out.extend(zoom());
    out.extend(rotate());
    out.push(roll_in());
    out
}

fn fade() -> Vec<AnimationDescriptor> {
    let directional = |id, from: &str| {
        desc(
            id,
            vec![
                StyleSnapshot::at(0.0).prop("opacity", 0.0).prop("transform", from),
                StyleSnapshot::at(1.0)
                    .prop("opacity", 1.0)
                    .prop("transform", "translate3d(0, 0, 0)"),
            ],
        )
    };
    vec![
        desc(
            "fade-in",
            vec![
                StyleSnapshot::at(0.0).prop("opacity", 0.0),
                StyleSnapshot::at(1.0).prop("opacity", 1.0),
            ],
        ),
        directional("fade-in-down", "translate3d(0, -100%, 0)"),
        directional("fade-in-left", "translate3d(-100%, 0, 0)"),
        directional("fade-in-right", "translate3d(100%, 0, 0)"),
        directional("fade-in-up", "translate3d(0, 100%, 0)"),
    ]
}

fn slide() -> Vec<AnimationDescriptor> {
    let slide_in = |id, from: &str, to: &str| {
        desc(
            id,
            vec![
                StyleSnapshot::at(0.0).prop("opacity", 0.0).prop("transform", from),
                StyleSnapshot::at(1.0).prop("opacity", 1.0).prop("transform", to),
            ],
        )
    };
    vec![
        slide_in("slide-in-down", "translate3d(0, -100%, 0)", "translate3d(0, 0, 0)"),
        slide_in("slide-in-left", "translateX(-100%)", "translateX(0)"),
        slide_in("slide-in-right", "translateX(100%)", "translateX(0)"),
        slide_in("slide-in-up", "translate3d(0, 100%, 0)", "translate3d(0, 0, 0)"),
    ]
}

fn zoom() -> Vec<AnimationDescriptor> {
    // Directional zooms overshoot at 60% before settling.
    let directional = |id, from: &str, overshoot: &str| {
        desc(
            id,
            vec![
                StyleSnapshot::at(0.0)
                    .ease(ZOOM_EASE_IN)
                    .prop("opacity", 0.0)
                    .prop("transform", from),
                StyleSnapshot::at(0.6)
                    .ease(ZOOM_EASE_OUT)
                    .prop("opacity", 1.0)
                    .prop("transform", overshoot),
                StyleSnapshot::at(1.0)
                    .prop("opacity", 1.0)
                    .prop("transform", "scale3d(1, 1, 1) translate3d(0, 0, 0)"),
            ],
        )
    };
    vec![
        desc(
            "zoom-in",
            vec![
                StyleSnapshot::at(0.0).prop("opacity", 0.0).prop("transform", "scale(0.5)"),
                StyleSnapshot::at(1.0).prop("opacity", 1.0).prop("transform", "scale(1)"),
            ],
        ),
        directional(
            "zoom-in-up",
            "scale3d(0.1, 0.1, 0.1) translate3d(0, 1000px, 0)",
            "scale3d(0.475, 0.475, 0.475) translate3d(0, -60px, 0)",
        ),
        directional(
            "zoom-in-down",
            "scale3d(0.1, 0.1, 0.1) translate3d(0, -1000px, 0)",
            "scale3d(0.475, 0.475, 0.475) translate3d(0, 60px, 0)",
        ),
        directional(
            "zoom-in-left",
            "scale3d(0.1, 0.1, 0.1) translate3d(-1000px, 0, 0)",
            "scale3d(0.475, 0.475, 0.475) translate3d(10px, 0, 0)",
        ),
        directional(
            "zoom-in-right",
            "scale3d(0.1, 0.1, 0.1) translate3d(1000px, 0, 0)",
            "scale3d(0.475, 0.475, 0.475) translate3d(-10px, 0, 0)",
        ),
    ]
}

fn rotate() -> Vec<AnimationDescriptor> {
    let corner = |id, origin: &str, from: &str| {
        desc(
            id,
            vec![
                StyleSnapshot::at(0.0)
                    .prop("opacity", 0.0)
                    .prop("transformOrigin", origin)
                    .prop("transform", from),
                StyleSnapshot::at(1.0)
                    .prop("opacity", 1.0)
                    .prop("transformOrigin", origin)
                    .prop("transform", "translate3d(0, 0, 0)"),
            ],
        )
    };
    vec![
        corner("rotate-in", "center center", "rotate3d(0, 0, 1, -200deg)"),
        corner("rotate-in-down-left", "left bottom", "rotate3d(0, 0, 1, -45deg)"),
        corner("rotate-in-down-right", "right bottom", "rotate3d(0, 0, 1, 45deg)"),
        corner("rotate-in-up-left", "left bottom", "rotate3d(0, 0, 1, 45deg)"),
        corner("rotate-in-up-right", "right bottom", "rotate3d(0, 0, 1, -90deg)"),
    ]
}

fn flip() -> Vec<AnimationDescriptor> {
    // Perspective flip settling through -20/10/-5 degree wobbles.
    let flip_axis = |id, axis: &str| {
        let rot = |deg: &str| format!("perspective(800px) rotate3d({axis}, {deg}deg)");
        desc(
            id,
            vec![
                StyleSnapshot::at(0.0)
                    .ease("ease-in")
                    .prop("opacity", 0.0)
                    .prop("transform", rot("90")),
                StyleSnapshot::at(0.4).ease("ease-in").prop("transform", rot("-20")),
                StyleSnapshot::at(0.6).prop("opacity", 1.0).prop("transform", rot("10")),
                StyleSnapshot::at(0.8).prop("transform", rot("-5")),
                StyleSnapshot::at(1.0).prop("opacity", 1.0).prop("transform", rot("0")),
            ],
        )
    };
    vec![flip_axis("flip-in-x", "1, 0, 0"), flip_axis("flip-in-y", "0, 1, 0")]
}

fn bounce() -> Vec<AnimationDescriptor> {
    let bounce_in = |id, frames: [(&str, Option<f32>); 5]| {
        let offsets = [0.0_f32, 0.6, 0.75, 0.9, 1.0];
        let frames = offsets
            .iter()
            .zip(frames.iter())
            .map(|(&offset, (transform, opacity))| {
                let mut snap = StyleSnapshot::at(offset).ease(BOUNCE_EASE);
                if let Some(o) = opacity {
                    snap = snap.prop("opacity", *o);
                }
                snap.prop("transform", *transform)
            })
            .collect();
        desc(id, frames)
    };

    let down = [
        ("translate3d(0, -3000px, 0) scaleY(3)", Some(0.0)),
        ("translate3d(0, 25px, 0) scaleY(0.9)", Some(1.0)),
        ("translate3d(0, -10px, 0) scaleY(0.95)", None),
        ("translate3d(0, 5px, 0) scaleY(0.985)", None),
        ("translate3d(0, 0, 0)", Some(1.0)),
    ];
    let up = [
        ("translate3d(0, 3000px, 0) scaleY(5)", Some(0.0)),
        ("translate3d(0, -20px, 0) scaleY(0.9)", Some(1.0)),
        ("translate3d(0, 10px, 0) scaleY(0.95)", None),
        ("translate3d(0, -5px, 0) scaleY(0.985)", None),
        ("translate3d(0, 0, 0)", Some(1.0)),
    ];
    let left = [
        ("translate3d(-3000px, 0, 0) scaleX(3)", Some(0.0)),
        ("translate3d(25px, 0, 0) scaleX(1)", Some(1.0)),
        ("translate3d(-10px, 0, 0) scaleX(0.98)", None),
        ("translate3d(5px, 0, 0) scaleX(0.995)", None),
        ("translate3d(0, 0, 0)", Some(1.0)),
    ];
    let right = [
        ("translate3d(3000px, 0, 0) scaleX(3)", Some(0.0)),
        ("translate3d(-25px, 0, 0) scaleX(1)", Some(1.0)),
        ("translate3d(10px, 0, 0) scaleX(0.98)", None),
        ("translate3d(-5px, 0, 0) scaleX(0.995)", None),
        ("translate3d(0, 0, 0)", Some(1.0)),
    ];

    vec![
        // Plain bounce-in shares the bounce-in-down curve.
        bounce_in("bounce-in", down),
        bounce_in("bounce-in-down", down),
        bounce_in("bounce-in-up", up),
        bounce_in("bounce-in-left", left),
        bounce_in("bounce-in-right", right),
    ]
}

fn roll_in() -> AnimationDescriptor {
    desc(
        "roll-in",
        vec![
            StyleSnapshot::at(0.0)
                .prop("opacity", 0.0)
                .prop("transform", "translate3d(-100%, 0, 0) rotate3d(0, 0, 1, -120deg)"),
            StyleSnapshot::at(1.0)
                .prop("opacity", 1.0)
                .prop("transform", "translate3d(0, 0, 0)"),
        ],
    )
}
