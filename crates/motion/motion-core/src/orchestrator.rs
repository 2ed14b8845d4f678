//! Lifecycle orchestration.
//!
//! One `Orchestrator` instance coordinates every tracked element: it owns the
//! keyframe registry, the element store, and the event log, and it is the only
//! code that mutates runtime state. Hosts call `initialize`/`cleanup`/
//! `refresh` and forward platform callbacks through `notify_intersection` and
//! `notify_animation_event`.
//!
//! Failure policy: every construction failure is absorbed here and converted
//! into the safe fallback of "element ends up fully visible, unanimated".
//! Nothing in this module returns an error to the caller.

use log::{debug, warn};

use crate::builder::{build_entrance, build_scroll, ScrollBuild};
use crate::config::MotionContext;
use crate::events::{FallbackReason, MotionEvent};
use crate::ids::{ElementId, ObserverId};
use crate::keyframes::KeyframeRegistry;
use crate::observer::{Watch, WatchMode};
use crate::platform::{EntranceTiming, Host, ObserverOptions};
use crate::store::{
    AnimationPhase, ElementRuntime, ElementStore, MotionState, ObserverRecord, ScrollGate,
    WatchRole,
};
use crate::style::StyleSnapshot;

/// Extra viewport margin for the leave/re-enter gate, matching the wider
/// detection band used for scroll transitions.
const SCROLL_GATE_MARGIN_PX: f32 = 50.0;

/// Completion events a platform animation can report.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AnimationEvent {
    Finish,
    Cancel,
}

/// Per-page (or per-session) motion engine.
#[derive(Debug)]
pub struct Orchestrator {
    registry: KeyframeRegistry,
    store: ElementStore,
    events: Vec<MotionEvent>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self {
            registry: KeyframeRegistry::new(),
            store: ElementStore::new(),
            events: Vec::new(),
        }
    }

    /// Begin tracking an element. Idempotent: re-initializing an element that
    /// is already tracked tears it down first and recreates cleanly, never
    /// double-registering observers.
    ///
    /// Configuration is validated here once; invalid numbers were clamped by
    /// `MotionContext::resolve` and unknown animation ids degrade to the
    /// revealed style immediately.
    pub fn initialize(&mut self, host: &mut dyn Host, element: ElementId, context: &MotionContext) {
        if self.store.contains(element) {
            debug!("re-initializing element {element:?}");
            self.cleanup(host, element);
        }

        let config = context.resolve();
        if !config.enabled {
            debug!("motion disabled for element {element:?}");
            return;
        }

        if host.prefers_reduced_motion() {
            host.apply_style(element, &StyleSnapshot::revealed());
            self.events.push(MotionEvent::FallbackApplied {
                element,
                reason: FallbackReason::ReducedMotion,
            });
            return;
        }

        // Entrance is the active mode whenever an entrance preset is chosen;
        // scroll mode then arms after the entrance finishes. Only with no
        // entrance preset does scroll mode trigger directly from IDLE.
        let role = if config.entrance_animation.is_some() {
            WatchRole::EntranceTrigger
        } else if config.scroll_mode && config.scroll_animation.is_some() {
            WatchRole::ScrollTrigger
        } else {
            debug!("no animation selected for element {element:?}");
            return;
        };

        let active_id_known = match role {
            WatchRole::EntranceTrigger => config
                .entrance_animation
                .as_deref()
                .is_some_and(|id| self.registry.entrance(id).is_some()),
            _ => config
                .scroll_animation
                .as_deref()
                .is_some_and(|id| self.registry.scroll(id).is_some()),
        };
        if !active_id_known {
            warn!("unknown animation id for element {element:?}; revealing without animation");
            host.apply_style(element, &StyleSnapshot::revealed());
            self.events.push(MotionEvent::FallbackApplied {
                element,
                reason: FallbackReason::UnknownAnimation,
            });
            return;
        }

        let threshold = config.threshold_ratio();
        let rt = self.store.create(element, config);
        match host.observe(
            element,
            &ObserverOptions {
                threshold,
                root_margin_px: 0.0,
            },
        ) {
            Some(observer) => {
                rt.observers.push(ObserverRecord {
                    watch: Watch::new(observer, threshold, WatchMode::OneShot),
                    role,
                });
            }
            None => {
                // No intersection primitive at all: content must still show.
                warn!("no intersection support; revealing element {element:?} immediately");
                host.apply_style(element, &StyleSnapshot::revealed());
                rt.state = match role {
                    WatchRole::EntranceTrigger => MotionState::EntryComplete,
                    _ => MotionState::ScrollReady,
                };
                self.events.push(MotionEvent::FallbackApplied {
                    element,
                    reason: FallbackReason::ObservationUnavailable,
                });
            }
        }
    }

    /// Full teardown: cancel in-flight animations, disconnect observers,
    /// forget the element. Safe to call twice.
    pub fn cleanup(&mut self, host: &mut dyn Host, element: ElementId) {
        let Some(mut rt) = self.store.remove(element) else {
            return;
        };
        for animation in rt.animations.drain() {
            host.cancel_animation(animation);
        }
        for record in &mut rt.observers {
            if !record.watch.is_disconnected() {
                host.disconnect(record.watch.id);
                record.watch.mark_disconnected();
            }
        }
        self.events.push(MotionEvent::Released { element });
    }

    /// Teardown plus reinitialization with a new context (live preview edits).
    pub fn refresh(&mut self, host: &mut dyn Host, element: ElementId, context: &MotionContext) {
        self.cleanup(host, element);
        self.initialize(host, element, context);
    }

    /// Platform intersection callback. Unknown elements and disconnected
    /// observers are ignored; a destroyed element has no dangling behavior
    /// left even if the platform still delivers a queued entry.
    pub fn notify_intersection(
        &mut self,
        host: &mut dyn Host,
        element: ElementId,
        observer: ObserverId,
        is_intersecting: bool,
        ratio: f32,
    ) {
        let Some(rt) = self.store.get_mut(element) else {
            return;
        };
        let Some(record) = rt.observer_mut(observer) else {
            return;
        };
        let role = record.role;
        let Some(crossing) = record.watch.update(is_intersecting, ratio) else {
            return;
        };

        match role {
            WatchRole::EntranceTrigger => {
                // Guard on IDLE: queued callbacks must not re-enter the
                // entrance once it is playing or done.
                if rt.state != MotionState::Idle || !crossing.visible {
                    return;
                }
                debug!(
                    "element {element:?} became visible ({:.1}%)",
                    crossing.ratio * 100.0
                );
                disconnect_watch(host, rt, observer);
                start_entrance(host, &self.registry, rt, element, &mut self.events);
            }
            WatchRole::ScrollTrigger => {
                if rt.state != MotionState::Idle || !crossing.visible {
                    return;
                }
                disconnect_watch(host, rt, observer);
                activate_scroll(host, &self.registry, rt, element, &mut self.events);
            }
            WatchRole::ScrollTransition => {
                // Two-step gate: a leave must be seen before a re-entry
                // counts, so the same viewport pass as the entrance never
                // starts the scroll phase.
                if rt.state != MotionState::EntryComplete {
                    return;
                }
                if !crossing.is_intersecting && rt.gate == ScrollGate::AwaitingExit {
                    debug!("element {element:?} left viewport; watching for return");
                    rt.gate = ScrollGate::AwaitingReentry;
                } else if crossing.is_intersecting && rt.gate == ScrollGate::AwaitingReentry {
                    debug!("element {element:?} returned to viewport; activating scroll");
                    disconnect_watch(host, rt, observer);
                    activate_scroll(host, &self.registry, rt, element, &mut self.events);
                }
            }
        }
    }

    /// Platform animation completion callback.
    pub fn notify_animation_event(
        &mut self,
        host: &mut dyn Host,
        element: ElementId,
        phase: AnimationPhase,
        event: AnimationEvent,
    ) {
        let Some(rt) = self.store.get_mut(element) else {
            return;
        };
        match (phase, event) {
            (AnimationPhase::Entrance, AnimationEvent::Finish) => {
                if rt.state != MotionState::EntryPlaying {
                    return;
                }
                rt.state = MotionState::EntryComplete;
                rt.animations.entrance = None;
                self.events.push(MotionEvent::EntranceCompleted { element });
                if rt.config.scroll_mode && rt.config.scroll_animation.is_some() {
                    arm_scroll_gate(host, rt, element);
                }
            }
            (AnimationPhase::Entrance, AnimationEvent::Cancel) => {
                if rt.state != MotionState::EntryPlaying {
                    return;
                }
                // Never leave a mid-animation style on cancellation.
                warn!("entrance cancelled for element {element:?}; forcing revealed style");
                let resting = rt
                    .config
                    .entrance_animation
                    .as_deref()
                    .and_then(|id| self.registry.entrance(id))
                    .map(|d| d.resting())
                    .unwrap_or_else(StyleSnapshot::revealed);
                host.apply_style(element, &resting);
                rt.state = MotionState::EntryComplete;
                rt.animations.entrance = None;
                self.events.push(MotionEvent::EntranceCancelled { element });
            }
            (AnimationPhase::Scroll, _) => {
                // Position-driven animations have no meaningful finish.
                debug!("ignoring scroll animation event for element {element:?}");
            }
        }
    }

    /// Current lifecycle state for an element, if tracked.
    pub fn state_of(&self, element: ElementId) -> Option<MotionState> {
        self.store.get(element).map(|rt| rt.state)
    }

    pub fn is_tracked(&self, element: ElementId) -> bool {
        self.store.contains(element)
    }

    pub fn tracked_elements(&self) -> usize {
        self.store.len()
    }

    /// Drain the semantic event log.
    pub fn take_events(&mut self) -> Vec<MotionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn registry(&self) -> &KeyframeRegistry {
        &self.registry
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

/// Disconnect one watch at the host and mark it locally. The record stays in
/// the runtime (disconnect-but-preserve) so late platform deliveries find a
/// silenced watch instead of nothing.
fn disconnect_watch(host: &mut dyn Host, rt: &mut ElementRuntime, observer: ObserverId) {
    if let Some(record) = rt.observer_mut(observer) {
        if !record.watch.is_disconnected() {
            host.disconnect(observer);
            record.watch.mark_disconnected();
        }
    }
}

fn start_entrance(
    host: &mut dyn Host,
    registry: &KeyframeRegistry,
    rt: &mut ElementRuntime,
    element: ElementId,
    events: &mut Vec<MotionEvent>,
) {
    rt.state = MotionState::EntryPlaying;

    let name = rt.config.entrance_animation.clone().unwrap_or_default();
    let Some(descriptor) = registry.entrance(&name) else {
        // Validated at initialize; a refresh race could still land here.
        host.apply_style(element, &StyleSnapshot::revealed());
        rt.state = MotionState::EntryComplete;
        events.push(MotionEvent::FallbackApplied {
            element,
            reason: FallbackReason::UnknownAnimation,
        });
        return;
    };

    events.push(MotionEvent::EntranceStarted {
        element,
        animation: name,
    });

    let timing = EntranceTiming {
        duration_ms: rt.config.duration_ms,
        delay_ms: rt.config.delay_ms,
        easing: rt.config.easing.clone(),
        fill: rt.config.fill,
    };
    match build_entrance(host, element, descriptor, &timing) {
        Some(animation) => rt.animations.set(AnimationPhase::Entrance, animation),
        None => {
            host.apply_style(element, &descriptor.resting());
            rt.state = MotionState::EntryComplete;
            events.push(MotionEvent::FallbackApplied {
                element,
                reason: FallbackReason::ConstructionFailed,
            });
        }
    }
}

/// Register the persistent leave/re-enter watch after a finished entrance.
fn arm_scroll_gate(host: &mut dyn Host, rt: &mut ElementRuntime, element: ElementId) {
    rt.gate = ScrollGate::AwaitingExit;
    match host.observe(
        element,
        &ObserverOptions {
            threshold: 0.0,
            root_margin_px: SCROLL_GATE_MARGIN_PX,
        },
    ) {
        Some(observer) => rt.observers.push(ObserverRecord {
            watch: Watch::new(observer, 0.0, WatchMode::Persistent),
            role: WatchRole::ScrollTransition,
        }),
        None => {
            // Entrance already revealed the element; stay ENTRY_COMPLETE.
            warn!("cannot observe scroll transition for element {element:?}");
        }
    }
}

fn activate_scroll(
    host: &mut dyn Host,
    registry: &KeyframeRegistry,
    rt: &mut ElementRuntime,
    element: ElementId,
    events: &mut Vec<MotionEvent>,
) {
    if rt.state == MotionState::ScrollActive {
        return;
    }

    let name = rt.config.scroll_animation.clone().unwrap_or_default();
    let Some(descriptor) = registry.scroll(&name) else {
        host.apply_style(element, &StyleSnapshot::revealed());
        rt.state = MotionState::ScrollReady;
        events.push(MotionEvent::FallbackApplied {
            element,
            reason: FallbackReason::UnknownAnimation,
        });
        return;
    };

    let completion = rt.config.scroll_completion_percent;
    match build_scroll(host, element, descriptor, completion) {
        ScrollBuild::Animation(animation) => {
            rt.animations.set(AnimationPhase::Scroll, animation);
            rt.state = MotionState::ScrollActive;
            events.push(MotionEvent::ScrollActivated {
                element,
                animation: name,
                completion_percent: completion,
            });
        }
        ScrollBuild::DeclarativeFallback => {
            // The styling hook drives the effect; no handle to hold.
            rt.state = MotionState::ScrollActive;
            events.push(MotionEvent::ScrollActivated {
                element,
                animation: name,
                completion_percent: completion,
            });
        }
        ScrollBuild::Unavailable => {
            host.apply_style(element, &descriptor.resting());
            rt.state = MotionState::ScrollReady;
            events.push(MotionEvent::FallbackApplied {
                element,
                reason: FallbackReason::TimelineUnsupported,
            });
        }
    }
}
