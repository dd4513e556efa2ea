//! Core domain logic for Stickerboard.
//! This crate is the single source of truth for project and overlay invariants.

pub mod config;
pub mod editor;
pub mod gesture;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, EditorConfig, ScaleRange};
pub use editor::media::{ImagePicker, MediaError, PickRequest, PickedImage};
pub use editor::session::{EditorError, EditorSession, Overlay, OverlayId};
pub use gesture::engine::{OverlayState, OverlayTransformEngine, TrackState, TransformLimits};
pub use gesture::event::{GestureEvent, GesturePayload, GestureTrack};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::project::{Project, ProjectId, ProjectValidationError};
pub use model::transform::{Canvas, Placement, SafeAreaInsets, Transform, Viewport};
pub use repo::project_repo::{InMemoryProjectRepository, ProjectRepository, RepoError, RepoResult};
pub use service::project_registry::ProjectRegistry;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
