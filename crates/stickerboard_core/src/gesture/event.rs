//! Gesture input delivered by the platform recognizer.

/// One class of multi-touch gesture tracked per overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureTrack {
    /// Single-pointer drag.
    Pan,
    /// Two-pointer pinch.
    Pinch,
}

impl GestureTrack {
    /// Stable label used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pan => "pan",
            Self::Pinch => "pinch",
        }
    }
}

/// Cumulative gesture delta measured since the track's `Start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePayload {
    Pan { dx: f64, dy: f64 },
    Pinch { factor: f64 },
}

impl GesturePayload {
    pub fn track(&self) -> GestureTrack {
        match self {
            Self::Pan { .. } => GestureTrack::Pan,
            Self::Pinch { .. } => GestureTrack::Pinch,
        }
    }
}

/// Single transition request for one overlay's gesture state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Start(GestureTrack),
    Update(GesturePayload),
    End(GestureTrack),
}

impl GestureEvent {
    pub fn track(&self) -> GestureTrack {
        match self {
            Self::Start(track) | Self::End(track) => *track,
            Self::Update(payload) => payload.track(),
        }
    }

    pub fn pan(dx: f64, dy: f64) -> Self {
        Self::Update(GesturePayload::Pan { dx, dy })
    }

    pub fn pinch(factor: f64) -> Self {
        Self::Update(GesturePayload::Pinch { factor })
    }
}
