//! Progress math: visibility ratio -> normalized [0,1] progress, and
//! progress -> interpolated style snapshots for the supported effects.
//!
//! This is the host-facing half of the declarative scroll fallback. The
//! orchestrator itself never samples progress; it only requests the fallback
//! through [`Host::apply_scroll_fallback_style`](crate::platform::Host).
//! Adapters without a timeline primitive implement that hook by feeding their
//! raw ratio updates through [`progress`] and applying [`Effect::at`].
//!
//! `progress` is a pure function; threshold validation happens once in
//! `ProgressThresholds::new` (configuration time), never here.

use serde::{Deserialize, Serialize};

use crate::style::StyleSnapshot;

/// Start/end visibility thresholds for progress mapping, normalized and
/// de-inverted at construction.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressThresholds {
    pub start: f32,
    pub end: f32,
}

impl ProgressThresholds {
    /// Clamp both thresholds into [0,1]; inverted pairs are swapped here so
    /// runtime math never sees start > end.
    pub fn new(start: f32, end: f32) -> Self {
        let s = if start.is_nan() { 0.0 } else { start.clamp(0.0, 1.0) };
        let e = if end.is_nan() { 1.0 } else { end.clamp(0.0, 1.0) };
        if s <= e {
            Self { start: s, end: e }
        } else {
            Self { start: e, end: s }
        }
    }
}

impl Default for ProgressThresholds {
    fn default() -> Self {
        // Matches the classic 10%/90% reveal band.
        Self { start: 0.1, end: 0.9 }
    }
}

/// Convert a raw intersection ratio into normalized progress.
///
/// Invisible elements always map to 0. Equal thresholds behave as a step
/// function: anything at or past the threshold is fully progressed. Output is
/// clamped to [0,1] for any numeric input, including NaN and out-of-range
/// ratios.
pub fn progress(ratio: f32, is_visible: bool, start: f32, end: f32) -> f32 {
    if !is_visible || ratio.is_nan() {
        return 0.0;
    }
    if ratio < start {
        return 0.0;
    }
    if ratio >= end {
        return 1.0;
    }
    ((ratio - start) / (end - start)).clamp(0.0, 1.0)
}

/// Progress-driven effects, each a monotonic map from progress to a style
/// snapshot. `at(0)` equals the effect's initial (hidden) snapshot exactly and
/// `at(1)` its final (revealed) snapshot exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// Plain opacity ramp.
    Fade,
    /// Defocus that sharpens as progress grows.
    Blur { max_radius_px: f32 },
    /// Spin that settles to zero degrees.
    Rotate { degrees: f32, counterclockwise: bool },
    /// Translation that settles to the resting position.
    Slide { direction: SlideDirection, distance_px: f32 },
    /// Scale-up from an initial factor.
    Zoom { initial_scale: f32 },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum SlideDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SlideDirection {
    fn translate(self, distance_px: f32) -> String {
        match self {
            SlideDirection::Up => format!("translate3d(0, {distance_px}px, 0)"),
            SlideDirection::Down => format!("translate3d(0, {}px, 0)", -distance_px),
            SlideDirection::Left => format!("translate3d({}px, 0, 0)", -distance_px),
            SlideDirection::Right => format!("translate3d({distance_px}px, 0, 0)"),
        }
    }
}

impl Effect {
    /// Initial (hidden) snapshot; identical to `at(0.0)`.
    pub fn initial(&self) -> StyleSnapshot {
        self.at(0.0)
    }

    /// Final (revealed) snapshot; identical to `at(1.0)`.
    pub fn terminal(&self) -> StyleSnapshot {
        self.at(1.0)
    }

    /// Interpolated snapshot for a progress value. Progress is clamped; the
    /// endpoints are constructed directly so they match `initial`/`terminal`
    /// with no floating drift.
    pub fn at(&self, progress: f32) -> StyleSnapshot {
        let p = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        match self {
            Effect::Fade => StyleSnapshot::new().prop("opacity", p).prop("transform", "none"),
            Effect::Blur { max_radius_px } => {
                let radius = if p >= 1.0 { 0.0 } else { max_radius_px * (1.0 - p) };
                let filter = if radius > 0.0 {
                    format!("blur({radius}px)")
                } else {
                    "none".to_string()
                };
                StyleSnapshot::new().prop("opacity", p).prop("filter", filter)
            }
            Effect::Rotate { degrees, counterclockwise } => {
                let remaining = if p >= 1.0 { 0.0 } else { degrees * (1.0 - p) };
                let signed = if *counterclockwise { -remaining } else { remaining };
                StyleSnapshot::new()
                    .prop("opacity", p)
                    .prop("transform", format!("rotate({signed}deg)"))
            }
            Effect::Slide { direction, distance_px } => {
                let remaining = if p >= 1.0 { 0.0 } else { distance_px * (1.0 - p) };
                StyleSnapshot::new()
                    .prop("opacity", p)
                    .prop("transform", direction.translate(remaining))
            }
            Effect::Zoom { initial_scale } => {
                let scale = if p >= 1.0 {
                    1.0
                } else {
                    initial_scale + (1.0 - initial_scale) * p
                };
                StyleSnapshot::new()
                    .prop("opacity", p)
                    .prop("transform", format!("scale({scale})"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_thresholds_swap_at_construction() {
        let t = ProgressThresholds::new(0.9, 0.2);
        assert_eq!(t, ProgressThresholds { start: 0.2, end: 0.9 });
    }

    #[test]
    fn out_of_range_thresholds_clamp() {
        let t = ProgressThresholds::new(-1.0, 7.0);
        assert_eq!(t, ProgressThresholds { start: 0.0, end: 1.0 });
    }

    #[test]
    fn effect_endpoints_are_exact() {
        let effects = [
            Effect::Fade,
            Effect::Blur { max_radius_px: 10.0 },
            Effect::Rotate { degrees: 180.0, counterclockwise: false },
            Effect::Slide { direction: SlideDirection::Up, distance_px: 20.0 },
            Effect::Zoom { initial_scale: 0.9 },
        ];
        for effect in &effects {
            assert_eq!(effect.at(0.0), effect.initial());
            assert_eq!(effect.at(1.0), effect.terminal());
            assert_eq!(effect.terminal().opacity(), Some(1.0));
            assert_eq!(effect.initial().opacity(), Some(0.0));
        }
    }

    #[test]
    fn zoom_terminal_scale_is_exactly_one() {
        let zoom = Effect::Zoom { initial_scale: 0.9 };
        assert_eq!(
            zoom.terminal().get("transform").and_then(|v| v.as_text()),
            Some("scale(1)")
        );
    }
}
