//! Editor session bound to one project.
//!
//! # Responsibility
//! - Fix the canvas for the session lifetime.
//! - Hold the optional base image and the ordered overlay stack.
//! - Route gesture events to the owning overlay engine.
//!
//! # Invariants
//! - Overlays keep insertion order; later overlays render on top.
//! - Every overlay starts at the identity transform.
//! - Gesture events only ever touch the addressed overlay.
//! - Picker errors other than cancellation propagate unmodified.

use crate::config::{ConfigError, EditorConfig};
use crate::editor::media::{ImagePicker, MediaError, PickRequest, PickedImage};
use crate::gesture::engine::{OverlayTransformEngine, TransformLimits};
use crate::gesture::event::GestureEvent;
use crate::model::project::{Project, ProjectId};
use crate::model::transform::{Canvas, Placement, Transform, Viewport};
use crate::repo::project_repo::ProjectRepository;
use crate::service::project_registry::ProjectRegistry;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Session-scoped overlay identifier, allocated sequentially from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OverlayId(pub u32);

impl Display for OverlayId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Editor session errors.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorError {
    ProjectNotFound(ProjectId),
    Config(ConfigError),
    Media(MediaError),
    /// Every `OverlayId` of this session has been handed out.
    OverlayLimitReached,
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::Config(err) => write!(f, "{err}"),
            Self::Media(err) => write!(f, "{err}"),
            Self::OverlayLimitReached => write!(f, "overlay id space exhausted"),
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ProjectNotFound(_) | Self::OverlayLimitReached => None,
            Self::Config(err) => Some(err),
            Self::Media(err) => Some(err),
        }
    }
}

impl From<ConfigError> for EditorError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<MediaError> for EditorError {
    fn from(value: MediaError) -> Self {
        Self::Media(value)
    }
}

/// Sticker overlay placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    id: OverlayId,
    source_ref: String,
    engine: OverlayTransformEngine,
}

impl Overlay {
    pub fn id(&self) -> OverlayId {
        self.id
    }

    /// Sticker source (typically a GIF URL).
    pub fn source_ref(&self) -> &str {
        &self.source_ref
    }

    pub fn transform(&self) -> Transform {
        self.engine.transform()
    }
}

/// Editing state for one project.
#[derive(Debug)]
pub struct EditorSession {
    project: Project,
    canvas: Canvas,
    config: EditorConfig,
    limits: TransformLimits,
    base_image: Option<PickedImage>,
    overlays: Vec<Overlay>,
    next_overlay_id: u32,
}

impl EditorSession {
    /// Opens a session for `project_id`.
    ///
    /// # Errors
    /// - Returns `ProjectNotFound` when the registry has no such project.
    /// - Returns `Config` when `config` fails validation.
    pub fn open<R: ProjectRepository>(
        registry: &ProjectRegistry<R>,
        project_id: ProjectId,
        viewport: Viewport,
        config: EditorConfig,
    ) -> Result<Self, EditorError> {
        config.validate()?;
        let project = registry
            .get_project(project_id)
            .cloned()
            .ok_or(EditorError::ProjectNotFound(project_id))?;

        let canvas = Canvas::from_viewport(&viewport);
        info!(
            "event=editor_open module=editor status=ok project_id={} canvas_w={} canvas_h={}",
            project.id, canvas.width, canvas.height
        );
        Ok(Self {
            project,
            canvas,
            limits: TransformLimits::for_canvas(canvas, &config),
            config,
            base_image: None,
            overlays: Vec::new(),
            next_overlay_id: 0,
        })
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn base_image(&self) -> Option<&PickedImage> {
        self.base_image.as_ref()
    }

    /// Asks `picker` for a cropped base image sized to the canvas.
    ///
    /// Returns `Ok(true)` when an image was stored and `Ok(false)` when the user
    /// cancelled, leaving any previous image in place.
    ///
    /// # Errors
    /// - Returns `Media(PermissionDenied)` and other picker failures unchanged.
    pub fn pick_base_image(&mut self, picker: &impl ImagePicker) -> Result<bool, EditorError> {
        match picker.pick_image(&PickRequest::for_canvas(self.canvas)) {
            Ok(image) => {
                info!(
                    "event=base_image_pick module=editor status=ok project_id={} width={} height={}",
                    self.project.id, image.width, image.height
                );
                self.base_image = Some(image);
                Ok(true)
            }
            Err(MediaError::Cancelled) => {
                info!(
                    "event=base_image_pick module=editor status=cancelled project_id={}",
                    self.project.id
                );
                Ok(false)
            }
            Err(err) => {
                warn!(
                    "event=base_image_pick module=editor status=error project_id={} error={}",
                    self.project.id, err
                );
                Err(err.into())
            }
        }
    }

    pub fn clear_base_image(&mut self) {
        self.base_image = None;
    }

    /// Adds an overlay on top of the stack at the identity transform.
    ///
    /// # Errors
    /// - Returns `OverlayLimitReached` once all `u32` ids are taken; the stack
    ///   is left unchanged.
    pub fn add_overlay(&mut self, source_ref: impl Into<String>) -> Result<OverlayId, EditorError> {
        let id = OverlayId(self.next_overlay_id);
        let Some(next) = self.next_overlay_id.checked_add(1) else {
            warn!(
                "event=overlay_add module=editor status=error project_id={} reason=id_exhausted",
                self.project.id
            );
            return Err(EditorError::OverlayLimitReached);
        };
        self.next_overlay_id = next;
        self.overlays.push(Overlay {
            id,
            source_ref: source_ref.into(),
            engine: OverlayTransformEngine::new(self.limits),
        });
        info!(
            "event=overlay_add module=editor status=ok project_id={} overlay_id={} total={}",
            self.project.id,
            id,
            self.overlays.len()
        );
        Ok(id)
    }

    /// Routes one gesture event to overlay `id`.
    ///
    /// Returns the overlay's live transform, or `None` for an unknown id.
    pub fn dispatch(&mut self, id: OverlayId, event: GestureEvent) -> Option<Transform> {
        self.overlays
            .iter_mut()
            .find(|overlay| overlay.id == id)
            .map(|overlay| overlay.engine.dispatch(event))
    }

    pub fn overlay(&self, id: OverlayId) -> Option<&Overlay> {
        self.overlays.iter().find(|overlay| overlay.id == id)
    }

    /// Overlays in render order, bottom first.
    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    pub fn transform(&self, id: OverlayId) -> Option<Transform> {
        self.overlay(id).map(Overlay::transform)
    }

    /// On-screen placement of overlay `id` on this session's canvas.
    pub fn placement(&self, id: OverlayId) -> Option<Placement> {
        self.transform(id).map(|transform| {
            transform.placement(
                self.canvas,
                self.config.overlay_diameter,
                self.config.perspective,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{EditorError, EditorSession, OverlayId};
    use crate::config::EditorConfig;
    use crate::model::transform::Viewport;
    use crate::service::project_registry::ProjectRegistry;

    fn session() -> EditorSession {
        let mut registry = ProjectRegistry::in_memory();
        let id = registry.create_project("ids").expect("valid project");
        let viewport = Viewport {
            width: 200.0,
            height: 400.0,
            ..Viewport::default()
        };
        EditorSession::open(&registry, id, viewport, EditorConfig::default())
            .expect("session opens")
    }

    #[test]
    fn add_overlay_reports_exhausted_id_space_instead_of_wrapping() {
        let mut session = session();
        session.next_overlay_id = u32::MAX - 1;

        let last = session.add_overlay("last.gif").expect("final id is usable");
        assert_eq!(last, OverlayId(u32::MAX - 1));

        session.next_overlay_id = u32::MAX;
        let err = session
            .add_overlay("overflow.gif")
            .expect_err("id space is exhausted");
        assert_eq!(err, EditorError::OverlayLimitReached);
        assert_eq!(session.overlays().len(), 1);
        assert_eq!(session.overlays()[0].id(), last);
    }
}
