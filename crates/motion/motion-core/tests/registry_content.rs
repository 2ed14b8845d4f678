use motion_core::{AnimationFamily, KeyframeRegistry};

const ENTRANCE_IDS: &[&str] = &[
    "bounce-in",
    "bounce-in-down",
    "bounce-in-left",
    "bounce-in-right",
    "bounce-in-up",
    "fade-in",
    "fade-in-down",
    "fade-in-left",
    "fade-in-right",
    "fade-in-up",
    "flip-in-x",
    "flip-in-y",
    "roll-in",
    "rotate-in",
    "rotate-in-down-left",
    "rotate-in-down-right",
    "rotate-in-up-left",
    "rotate-in-up-right",
    "slide-in-down",
    "slide-in-left",
    "slide-in-right",
    "slide-in-up",
    "zoom-in",
    "zoom-in-down",
    "zoom-in-left",
    "zoom-in-right",
    "zoom-in-up",
];

const SCROLL_IDS: &[&str] = &[
    "fade-enter-leave",
    "fade-in-down",
    "fade-in-up",
    "rotate-in",
    "scale-enter-leave",
    "scale-in",
    "slide-enter-leave",
    "slide-in-left",
    "slide-in-right",
];

#[test]
fn registry_carries_the_full_preset_catalog() {
    let registry = KeyframeRegistry::new();

    let mut entrance: Vec<&str> = registry.entrance_ids().collect();
    entrance.sort_unstable();
    assert_eq!(entrance, ENTRANCE_IDS);

    let mut scroll: Vec<&str> = registry.scroll_ids().collect();
    scroll.sort_unstable();
    assert_eq!(scroll, SCROLL_IDS);
}

/// The same id can exist in both families with different keyframes; the
/// families are separate namespaces.
#[test]
fn families_are_separate_namespaces() {
    let registry = KeyframeRegistry::new();

    let entrance = registry.lookup(AnimationFamily::Entrance, "rotate-in").unwrap();
    let scroll = registry.lookup(AnimationFamily::Scroll, "rotate-in").unwrap();
    assert_eq!(entrance.family, AnimationFamily::Entrance);
    assert_eq!(scroll.family, AnimationFamily::Scroll);
    assert_ne!(entrance.frames, scroll.frames);

    // Entrance-only ids do not leak into the scroll family.
    assert!(registry.scroll("bounce-in").is_none());
    assert!(registry.entrance("fade-enter-leave").is_none());
    assert!(registry.entrance("no-such-animation").is_none());
}

/// Every preset starts hidden; every preset's resting snapshot is visible,
/// including the enter-and-leave shapes whose terminal frame hides again.
#[test]
fn presets_start_hidden_and_rest_visible() {
    let registry = KeyframeRegistry::new();

    for &id in ENTRANCE_IDS {
        let d = registry.entrance(id).unwrap();
        assert!(d.frames.len() >= 2, "{id}: too few frames");
        assert_eq!(d.initial().opacity(), Some(0.0), "{id}: must start hidden");
        assert_eq!(d.terminal().opacity(), Some(1.0), "{id}: must end revealed");
        assert_eq!(d.resting().opacity(), Some(1.0), "{id}: resting must be visible");
    }

    for &id in SCROLL_IDS {
        let d = registry.scroll(id).unwrap();
        assert!(d.frames.len() >= 2, "{id}: too few frames");
        assert_eq!(d.initial().opacity(), Some(0.0), "{id}: must start hidden");
        assert_eq!(d.resting().opacity(), Some(1.0), "{id}: resting must be visible");
    }
}

/// Enter-and-leave presets return to the hidden state at the end of transit.
#[test]
fn enter_leave_presets_hide_again() {
    let registry = KeyframeRegistry::new();
    for id in ["fade-enter-leave", "scale-enter-leave", "slide-enter-leave"] {
        let d = registry.scroll(id).unwrap();
        assert_eq!(d.frames.len(), 4, "{id}");
        assert_eq!(d.terminal().opacity(), Some(0.0), "{id}");
        // The hold plateau spans 20%..80% of the transit.
        assert_eq!(d.frames[1].offset, Some(0.2), "{id}");
        assert_eq!(d.frames[2].offset, Some(0.8), "{id}");
    }
}

/// Keyframe offsets are sorted and span [0,1] in every preset.
#[test]
fn frame_offsets_are_ordered() {
    let registry = KeyframeRegistry::new();
    let all = ENTRANCE_IDS
        .iter()
        .map(|&id| registry.entrance(id).unwrap())
        .chain(SCROLL_IDS.iter().map(|&id| registry.scroll(id).unwrap()));
    for d in all {
        let offsets: Vec<f32> = d.frames.iter().filter_map(|f| f.offset).collect();
        assert_eq!(offsets.first(), Some(&0.0), "{}", d.id);
        assert_eq!(offsets.last(), Some(&1.0), "{}", d.id);
        assert!(
            offsets.windows(2).all(|w| w[0] < w[1]),
            "{}: offsets not strictly increasing",
            d.id
        );
    }
}
