//! Per-overlay gesture state machine.
//!
//! # Responsibility
//! - Turn pan/pinch gesture events into a committed overlay `Transform`.
//! - Clamp vertical translation to the canvas and scale to the configured range.
//!
//! # Invariants
//! - Pan and pinch tracks progress independently through idle -> active -> idle.
//! - `translation.y` stays within `[-(bound_y / 2), bound_y / 2]`.
//! - `translation.x` is never clamped.
//! - Each update is relative to the base snapshotted at track start, never to
//!   the previous update.
//! - Starting an already active track commits its pending candidate first, so
//!   a lost `End` never rolls the overlay back.

use crate::config::{EditorConfig, ScaleRange};
use crate::gesture::event::{GestureEvent, GesturePayload, GestureTrack};
use crate::model::transform::{Canvas, Transform};
use glam::DVec2;
use log::{debug, trace};

/// Progress of one gesture track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackState<T> {
    Idle,
    Active {
        /// Committed value snapshotted at `Start`.
        base: T,
        /// Latest uncommitted value produced by `Update`.
        candidate: T,
    },
}

impl<T: Copy> TrackState<T> {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Uncommitted value, if the track is active.
    pub fn candidate(&self) -> Option<T> {
        match self {
            Self::Idle => None,
            Self::Active { candidate, .. } => Some(*candidate),
        }
    }

    fn base_or(&self, committed: T) -> T {
        match self {
            Self::Idle => committed,
            Self::Active { base, .. } => *base,
        }
    }
}

/// Clamp bounds applied while resolving gesture candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformLimits {
    /// Total vertical travel; translation is clamped to half of it either way.
    pub bound_y: f64,
    pub scale_range: ScaleRange,
}

impl TransformLimits {
    pub fn new(bound_y: f64, scale_range: ScaleRange) -> Self {
        Self {
            bound_y: bound_y.max(0.0),
            scale_range,
        }
    }

    /// Limits for an overlay of the configured diameter on `canvas`.
    pub fn for_canvas(canvas: Canvas, config: &EditorConfig) -> Self {
        Self::new(canvas.bound_y(config.overlay_diameter), config.scale_range)
    }

    fn clamp_translation(&self, candidate: DVec2) -> DVec2 {
        let half = self.bound_y / 2.0;
        DVec2::new(candidate.x, candidate.y.max(-half).min(half))
    }
}

/// Pure gesture state of one overlay.
///
/// `transition` consumes the current state and returns the next one, so the
/// machine can be driven without a render loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayState {
    committed: Transform,
    pan: TrackState<DVec2>,
    pinch: TrackState<f64>,
}

impl OverlayState {
    /// Identity transform with both tracks idle.
    pub const IDLE: Self = Self {
        committed: Transform::IDENTITY,
        pan: TrackState::Idle,
        pinch: TrackState::Idle,
    };

    /// Last committed transform, excluding in-flight gestures.
    pub fn committed(&self) -> Transform {
        self.committed
    }

    /// Live transform: in-flight candidates layered over committed values.
    pub fn transform(&self) -> Transform {
        Transform {
            translation: self
                .pan
                .candidate()
                .unwrap_or(self.committed.translation),
            scale: self.pinch.candidate().unwrap_or(self.committed.scale),
        }
    }

    pub fn pan(&self) -> TrackState<DVec2> {
        self.pan
    }

    pub fn pinch(&self) -> TrackState<f64> {
        self.pinch
    }

    pub fn is_active(&self, track: GestureTrack) -> bool {
        match track {
            GestureTrack::Pan => self.pan.is_active(),
            GestureTrack::Pinch => self.pinch.is_active(),
        }
    }

    /// Applies one gesture event and returns the next state.
    ///
    /// An `Update` on an idle track behaves as if `Start` had been delivered
    /// right before it. An `End` on an idle track is a no-op.
    pub fn transition(self, event: GestureEvent, limits: &TransformLimits) -> Self {
        match event {
            GestureEvent::Start(track) => self.commit(track).start(track),
            GestureEvent::Update(payload) => self.update(payload, limits),
            GestureEvent::End(track) => self.commit(track),
        }
    }

    fn start(mut self, track: GestureTrack) -> Self {
        match track {
            GestureTrack::Pan => {
                let base = self.committed.translation;
                self.pan = TrackState::Active {
                    base,
                    candidate: base,
                };
            }
            GestureTrack::Pinch => {
                let base = self.committed.scale;
                self.pinch = TrackState::Active {
                    base,
                    candidate: base,
                };
            }
        }
        self
    }

    fn update(mut self, payload: GesturePayload, limits: &TransformLimits) -> Self {
        match payload {
            GesturePayload::Pan { dx, dy } => {
                let base = self.pan.base_or(self.committed.translation);
                let candidate = limits.clamp_translation(base + DVec2::new(dx, dy));
                self.pan = TrackState::Active { base, candidate };
            }
            GesturePayload::Pinch { factor } => {
                let base = self.pinch.base_or(self.committed.scale);
                let candidate = limits.scale_range.clamp(factor * base);
                self.pinch = TrackState::Active { base, candidate };
            }
        }
        self
    }

    fn commit(mut self, track: GestureTrack) -> Self {
        match track {
            GestureTrack::Pan => {
                if let Some(candidate) = self.pan.candidate() {
                    self.committed.translation = candidate;
                }
                self.pan = TrackState::Idle;
            }
            GestureTrack::Pinch => {
                if let Some(candidate) = self.pinch.candidate() {
                    self.committed.scale = candidate;
                }
                self.pinch = TrackState::Idle;
            }
        }
        self
    }
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::IDLE
    }
}

/// Owner of one overlay's gesture state and clamp limits.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayTransformEngine {
    state: OverlayState,
    limits: TransformLimits,
}

impl OverlayTransformEngine {
    /// Creates an engine at the identity transform.
    pub fn new(limits: TransformLimits) -> Self {
        Self {
            state: OverlayState::IDLE,
            limits,
        }
    }

    /// Feeds one gesture event and returns the resulting live transform.
    pub fn dispatch(&mut self, event: GestureEvent) -> Transform {
        match event {
            GestureEvent::Start(track) => {
                if self.state.is_active(track) {
                    debug!(
                        "event=gesture_start module=gesture status=recovered track={} reason=missing_end",
                        track.as_str()
                    );
                } else {
                    debug!(
                        "event=gesture_start module=gesture status=ok track={}",
                        track.as_str()
                    );
                }
            }
            GestureEvent::Update(payload) => {
                trace!(
                    "event=gesture_update module=gesture track={}",
                    payload.track().as_str()
                );
            }
            GestureEvent::End(track) => {
                debug!(
                    "event=gesture_end module=gesture status=ok track={}",
                    track.as_str()
                );
            }
        }

        self.state = self.state.transition(event, &self.limits);
        self.state.transform()
    }

    pub fn start(&mut self, track: GestureTrack) -> Transform {
        self.dispatch(GestureEvent::Start(track))
    }

    pub fn update(&mut self, payload: GesturePayload) -> Transform {
        self.dispatch(GestureEvent::Update(payload))
    }

    pub fn end(&mut self, track: GestureTrack) -> Transform {
        self.dispatch(GestureEvent::End(track))
    }

    /// Live transform sampled by renderers every frame.
    pub fn transform(&self) -> Transform {
        self.state.transform()
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::{OverlayState, TrackState, TransformLimits};
    use crate::config::ScaleRange;
    use crate::gesture::event::{GestureEvent, GestureTrack};
    use glam::DVec2;

    fn limits() -> TransformLimits {
        TransformLimits::new(200.0, ScaleRange::default())
    }

    #[test]
    fn updates_are_relative_to_start_base_not_previous_update() {
        let limits = limits();
        let state = OverlayState::IDLE
            .transition(GestureEvent::Start(GestureTrack::Pan), &limits)
            .transition(GestureEvent::pan(10.0, 0.0), &limits)
            .transition(GestureEvent::pan(25.0, 5.0), &limits);
        assert_eq!(state.transform().translation, DVec2::new(25.0, 5.0));
        assert_eq!(state.committed().translation, DVec2::ZERO);
    }

    #[test]
    fn restart_without_end_commits_pending_candidate() {
        let limits = limits();
        let state = OverlayState::IDLE
            .transition(GestureEvent::Start(GestureTrack::Pan), &limits)
            .transition(GestureEvent::pan(40.0, 30.0), &limits)
            .transition(GestureEvent::Start(GestureTrack::Pan), &limits);

        assert_eq!(state.committed().translation, DVec2::new(40.0, 30.0));
        assert_eq!(
            state.pan(),
            TrackState::Active {
                base: DVec2::new(40.0, 30.0),
                candidate: DVec2::new(40.0, 30.0),
            }
        );
    }

    #[test]
    fn end_on_idle_track_is_noop() {
        let limits = limits();
        let state = OverlayState::IDLE.transition(GestureEvent::End(GestureTrack::Pinch), &limits);
        assert_eq!(state, OverlayState::IDLE);
    }

    #[test]
    fn update_on_idle_track_starts_from_committed_base() {
        let limits = limits();
        let state = OverlayState::IDLE.transition(GestureEvent::pinch(3.0), &limits);
        assert!(state.is_active(GestureTrack::Pinch));
        assert_eq!(state.transform().scale, 3.0);
    }

    #[test]
    fn zero_bound_pins_vertical_translation() {
        let limits = TransformLimits::new(-40.0, ScaleRange::default());
        let state = OverlayState::IDLE.transition(GestureEvent::pan(12.0, 90.0), &limits);
        assert_eq!(state.transform().translation, DVec2::new(12.0, 0.0));
    }
}
