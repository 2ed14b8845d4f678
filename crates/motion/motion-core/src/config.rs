//! Wire-format motion context and the resolved per-element configuration.
//!
//! The caller-facing layer attaches a JSON-serialized context to markup; this
//! module parses that shape and applies every default and clamp exactly once.
//! Past `MotionContext::resolve()` no other call site re-validates numbers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scroll completion percent is held to this range. The clamp lives here and
/// nowhere else.
pub const SCROLL_COMPLETION_MIN: f32 = 10.0;
pub const SCROLL_COMPLETION_MAX: f32 = 100.0;

/// Visibility threshold ratio never drops below this floor; an observer that
/// fires at 0% visibility would trigger entrances for off-screen elements.
pub const VISIBILITY_RATIO_FLOOR: f32 = 0.1;

pub const DEFAULT_DURATION_MS: f32 = 600.0;
pub const DEFAULT_EASING: &str = "ease-out";
pub const DEFAULT_THRESHOLD_PERCENT: f32 = 30.0;
pub const DEFAULT_COMPLETION_PERCENT: f32 = 30.0;

/// Sentinel used by the wire format for "no animation selected".
const NONE_SENTINEL: &str = "none";

/// Errors at the wire-format boundary. Everything past this boundary is
/// absorbed and degraded, never raised.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("motion context parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Raw per-element context as attached to markup by the caller.
///
/// Every field is optional on the wire; defaults are applied in `resolve`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MotionContext {
    pub motion_enabled: bool,
    /// Entrance preset id, or "none".
    pub entrance_animation_type: Option<String>,
    /// Scroll preset id, or "none".
    pub scroll_animation_type: Option<String>,
    pub scroll_animation_enabled: bool,
    /// Milliseconds.
    pub motion_duration: Option<f32>,
    /// Milliseconds.
    pub motion_delay: Option<f32>,
    pub motion_timing_function: Option<String>,
    /// Percent of the element that must be visible to trigger, 0-100.
    pub motion_threshold: Option<f32>,
    /// Percent of viewport transit at which scroll animations complete.
    pub motion_scroll_range: Option<f32>,
    /// Fill behavior for entrance animations; defaults to `forwards` so the
    /// revealed end state persists after playback.
    pub motion_fill: Option<FillMode>,
}

/// Parse the JSON-serialized context attached to markup.
pub fn parse_motion_context_json(s: &str) -> Result<MotionContext, ConfigError> {
    Ok(serde_json::from_str(s)?)
}

/// Animation fill behavior forwarded to the platform. Serialized in the
/// wire context as the lowercase CSS keyword.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    None,
    Forwards,
    Backwards,
    Both,
}

/// Resolved, validated configuration. Effectively immutable for the element's
/// lifetime; changing it requires `refresh`.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub enabled: bool,
    pub entrance_animation: Option<String>,
    pub scroll_animation: Option<String>,
    pub scroll_mode: bool,
    pub duration_ms: f32,
    pub delay_ms: f32,
    pub easing: String,
    pub fill: FillMode,
    /// Clamped to [0,100].
    pub visibility_threshold_percent: f32,
    /// Clamped to [SCROLL_COMPLETION_MIN, SCROLL_COMPLETION_MAX].
    pub scroll_completion_percent: f32,
}

impl MotionConfig {
    /// Threshold as an intersection ratio, floored so a zero-percent config
    /// still requires some visibility before triggering.
    pub fn threshold_ratio(&self) -> f32 {
        (self.visibility_threshold_percent / 100.0).clamp(VISIBILITY_RATIO_FLOOR, 1.0)
    }
}

fn preset_name(raw: &Option<String>) -> Option<String> {
    match raw.as_deref() {
        None | Some("") | Some(NONE_SENTINEL) => None,
        Some(name) => Some(name.to_string()),
    }
}

/// Clamp a possibly-garbage number into a range, mapping NaN to the fallback.
fn clamp_or(value: Option<f32>, fallback: f32, min: f32, max: f32) -> f32 {
    let v = value.unwrap_or(fallback);
    if v.is_nan() {
        fallback
    } else {
        v.clamp(min, max)
    }
}

impl MotionContext {
    /// Apply defaults and clamps, producing the canonical config.
    ///
    /// Invalid values clamp to the nearest valid bound rather than rejecting;
    /// a slightly malformed context never disables animation outright.
    pub fn resolve(&self) -> MotionConfig {
        MotionConfig {
            enabled: self.motion_enabled,
            entrance_animation: preset_name(&self.entrance_animation_type),
            scroll_animation: preset_name(&self.scroll_animation_type),
            scroll_mode: self.scroll_animation_enabled,
            duration_ms: clamp_or(self.motion_duration, DEFAULT_DURATION_MS, 1.0, f32::MAX),
            delay_ms: clamp_or(self.motion_delay, 0.0, 0.0, f32::MAX),
            easing: self
                .motion_timing_function
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_EASING.to_string()),
            fill: self.motion_fill.unwrap_or(FillMode::Forwards),
            visibility_threshold_percent: clamp_or(
                self.motion_threshold,
                DEFAULT_THRESHOLD_PERCENT,
                0.0,
                100.0,
            ),
            scroll_completion_percent: clamp_or(
                self.motion_scroll_range,
                DEFAULT_COMPLETION_PERCENT,
                SCROLL_COMPLETION_MIN,
                SCROLL_COMPLETION_MAX,
            ),
        }
    }
}
