use motion_core::progress::{progress, Effect, ProgressThresholds, SlideDirection};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// it should be non-decreasing in ratio for fixed thresholds
#[test]
fn monotonic_in_ratio() {
    let (s, e) = (0.2, 0.8);
    let mut last = 0.0_f32;
    for i in 0..=1000 {
        let ratio = i as f32 / 1000.0;
        let p = progress(ratio, true, s, e);
        assert!(p >= last, "progress regressed at ratio {ratio}: {p} < {last}");
        last = p;
    }
}

/// it should hit the boundaries exactly
#[test]
fn boundary_exactness() {
    let (s, e) = (0.3, 0.7);
    assert_eq!(progress(0.0, true, s, e), 0.0);
    assert_eq!(progress(0.3, true, s, e), 0.0);
    assert_eq!(progress(0.29, true, s, e), 0.0);
    assert_eq!(progress(0.7, true, s, e), 1.0);
    assert_eq!(progress(0.95, true, s, e), 1.0);
    approx(progress(0.5, true, s, e), 0.5, 1e-6);
}

/// it should behave as a step function when thresholds coincide
#[test]
fn degenerate_equal_thresholds() {
    let p_below = progress(0.49, true, 0.5, 0.5);
    let p_at = progress(0.5, true, 0.5, 0.5);
    let p_above = progress(0.9, true, 0.5, 0.5);
    assert_eq!(p_below, 0.0);
    assert_eq!(p_at, 1.0);
    assert_eq!(p_above, 1.0);
    assert!(!p_at.is_nan());
}

/// it should force zero progress while invisible
#[test]
fn invisibility_forces_zero() {
    for ratio in [0.0, 0.2, 0.5, 0.99, 1.0, 5.0, -1.0] {
        assert_eq!(progress(ratio, false, 0.1, 0.9), 0.0);
    }
}

/// it should stay within [0,1] for any numeric ratio
#[test]
fn clamp_invariant() {
    for ratio in [-10.0, -0.001, 0.0, 0.5, 1.0, 1.001, 42.0, f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
        let p = progress(ratio, true, 0.25, 0.75);
        assert!((0.0..=1.0).contains(&p), "out of range for ratio {ratio}: {p}");
    }
}

/// it should interpolate every effect between exact endpoints
#[test]
fn effect_endpoints_match_snapshots() {
    let effects = [
        Effect::Fade,
        Effect::Blur { max_radius_px: 10.0 },
        Effect::Rotate { degrees: 180.0, counterclockwise: false },
        Effect::Rotate { degrees: 90.0, counterclockwise: true },
        Effect::Slide { direction: SlideDirection::Up, distance_px: 20.0 },
        Effect::Slide { direction: SlideDirection::Right, distance_px: 20.0 },
        Effect::Zoom { initial_scale: 0.9 },
        Effect::Zoom { initial_scale: 0.95 },
    ];
    for effect in &effects {
        assert_eq!(effect.at(0.0), effect.initial(), "initial endpoint: {effect:?}");
        assert_eq!(effect.at(1.0), effect.terminal(), "terminal endpoint: {effect:?}");
        // Clamping keeps out-of-range progress on the endpoints too.
        assert_eq!(effect.at(-3.0), effect.initial());
        assert_eq!(effect.at(7.0), effect.terminal());
    }
}

/// it should sharpen blur monotonically as progress grows
#[test]
fn blur_decreases_with_progress() {
    let blur = Effect::Blur { max_radius_px: 10.0 };
    let mid = blur.at(0.5);
    assert_eq!(mid.opacity(), Some(0.5));
    assert_eq!(mid.get("filter").and_then(|v| v.as_text()), Some("blur(5px)"));
    assert_eq!(
        blur.terminal().get("filter").and_then(|v| v.as_text()),
        Some("none")
    );
}

/// it should support adapters driving the scroll fallback from raw ratio
/// updates: off-screen parks on the hidden endpoint, a sweep through the
/// band never regresses, and past the band parks on the revealed endpoint
#[test]
fn ratio_sweep_drives_effect_between_endpoints() {
    let t = ProgressThresholds::default();
    let effect = Effect::Slide { direction: SlideDirection::Up, distance_px: 40.0 };

    let parked = effect.at(progress(0.0, false, t.start, t.end));
    assert_eq!(parked, effect.initial());

    let mut last = -1.0_f32;
    for i in 0..=20 {
        let ratio = i as f32 / 20.0;
        let style = effect.at(progress(ratio, true, t.start, t.end));
        let opacity = style.opacity().expect("slide always carries opacity");
        assert!(opacity >= last, "opacity regressed at ratio {ratio}");
        last = opacity;
    }

    let settled = effect.at(progress(1.0, true, t.start, t.end));
    assert_eq!(settled, effect.terminal());
}

/// it should normalize inverted and out-of-range thresholds at construction
#[test]
fn threshold_construction_normalizes() {
    assert_eq!(
        ProgressThresholds::new(0.8, 0.3),
        ProgressThresholds { start: 0.3, end: 0.8 }
    );
    assert_eq!(
        ProgressThresholds::new(f32::NAN, 2.0),
        ProgressThresholds { start: 0.0, end: 1.0 }
    );
    let d = ProgressThresholds::default();
    approx(d.start, 0.1, 1e-6);
    approx(d.end, 0.9, 1e-6);
}
