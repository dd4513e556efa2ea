//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose project and overlay operations to Dart via FRB.
//! - Translate core ids and errors into plain strings and envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Application state is owned by the host through `StickerboardApp`; there is
//!   no process-global registry.
//! - Malformed project ids behave like unknown ids.

use flutter_rust_bridge::frb;
use log::warn;
use stickerboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    EditorConfig, EditorSession, GestureEvent, GesturePayload, GestureTrack, OverlayId, Project,
    ProjectId, ProjectRegistry, SafeAreaInsets, Transform, Viewport,
};
use uuid::Uuid;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Project row for list and header display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub project_id: String,
    pub name: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Created or affected id, when the action produces one.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Gesture track selector mirrored for Dart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Pan,
    Pinch,
}

impl From<GestureKind> for GestureTrack {
    fn from(value: GestureKind) -> Self {
        match value {
            GestureKind::Pan => Self::Pan,
            GestureKind::Pinch => Self::Pinch,
        }
    }
}

/// Recognizer callback forwarded from the host gesture handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureInput {
    Start { kind: GestureKind },
    Pan { dx: f64, dy: f64 },
    Pinch { factor: f64 },
    End { kind: GestureKind },
}

impl From<GestureInput> for GestureEvent {
    fn from(value: GestureInput) -> Self {
        match value {
            GestureInput::Start { kind } => Self::Start(kind.into()),
            GestureInput::Pan { dx, dy } => Self::Update(GesturePayload::Pan { dx, dy }),
            GestureInput::Pinch { factor } => Self::Update(GesturePayload::Pinch { factor }),
            GestureInput::End { kind } => Self::End(kind.into()),
        }
    }
}

/// Renderer-facing overlay state.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub overlay_id: u32,
    pub source_ref: String,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

/// Host-owned application state: one project registry and at most one open
/// editor session.
#[frb(opaque)]
#[derive(Default)]
pub struct StickerboardApp {
    registry: ProjectRegistry,
    editor: Option<EditorSession>,
}

impl StickerboardApp {
    #[frb(sync)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a project; returns its id in `ActionResponse::id`.
    #[frb(sync)]
    pub fn create_project(&mut self, name: String) -> ActionResponse {
        match self.registry.create_project(name) {
            Ok(id) => ActionResponse::success("Project created.", Some(id.to_string())),
            Err(err) => ActionResponse::failure(format!("create_project failed: {err}")),
        }
    }

    /// Removes a project. Unknown or malformed ids are a no-op.
    ///
    /// Closes the editor when it is bound to the removed project.
    #[frb(sync)]
    pub fn remove_project(&mut self, project_id: String) {
        let Some(id) = parse_project_id(&project_id) else {
            return;
        };
        self.registry.remove_project(id);
        if self
            .editor
            .as_ref()
            .is_some_and(|session| session.project().id == id)
        {
            self.editor = None;
        }
    }

    #[frb(sync)]
    pub fn get_project(&self, project_id: String) -> Option<ProjectItem> {
        let id = parse_project_id(&project_id)?;
        self.registry.get_project(id).map(to_project_item)
    }

    #[frb(sync)]
    pub fn list_projects(&self) -> Vec<ProjectItem> {
        self.registry
            .list_projects()
            .into_iter()
            .map(to_project_item)
            .collect()
    }

    /// Opens the editor for one project, replacing any open session.
    ///
    /// `config_json` is optional; `None` or blank uses defaults.
    #[frb(sync)]
    pub fn open_editor(
        &mut self,
        project_id: String,
        viewport_width: f64,
        viewport_height: f64,
        inset_top: f64,
        inset_bottom: f64,
        config_json: Option<String>,
    ) -> ActionResponse {
        let Some(id) = parse_project_id(&project_id) else {
            return ActionResponse::failure(format!(
                "open_editor failed: invalid project id `{project_id}`"
            ));
        };
        let config = match config_json.as_deref().map(str::trim) {
            None | Some("") => EditorConfig::default(),
            Some(raw) => match EditorConfig::from_json_str(raw) {
                Ok(config) => config,
                Err(err) => return ActionResponse::failure(format!("open_editor failed: {err}")),
            },
        };
        let viewport = Viewport {
            width: viewport_width,
            height: viewport_height,
            insets: SafeAreaInsets {
                top: inset_top,
                bottom: inset_bottom,
                ..SafeAreaInsets::default()
            },
        };

        match EditorSession::open(&self.registry, id, viewport, config) {
            Ok(session) => {
                self.editor = Some(session);
                ActionResponse::success("Editor opened.", Some(id.to_string()))
            }
            Err(err) => ActionResponse::failure(format!("open_editor failed: {err}")),
        }
    }

    #[frb(sync)]
    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Adds a sticker overlay to the open editor.
    ///
    /// Returns `None` when no editor is open or the session ran out of
    /// overlay ids.
    #[frb(sync)]
    pub fn add_overlay(&mut self, source_ref: String) -> Option<u32> {
        let session = self.editor.as_mut()?;
        match session.add_overlay(source_ref) {
            Ok(id) => Some(id.0),
            Err(err) => {
                warn!("event=overlay_add module=ffi status=error error={}", err);
                None
            }
        }
    }

    /// Forwards one recognizer callback to an overlay.
    ///
    /// Returns the live transform, or `None` for an unknown overlay or when no
    /// editor is open.
    #[frb(sync)]
    pub fn dispatch_gesture(&mut self, overlay_id: u32, input: GestureInput) -> Option<OverlayView> {
        let Some(session) = self.editor.as_mut() else {
            warn!("event=gesture_dispatch module=ffi status=error error_code=editor_closed");
            return None;
        };
        let id = OverlayId(overlay_id);
        let transform = session.dispatch(id, input.into())?;
        let source_ref = session.overlay(id)?.source_ref().to_string();
        Some(to_overlay_view(id, source_ref, transform))
    }

    /// Overlays of the open editor in render order, bottom first.
    #[frb(sync)]
    pub fn overlays(&self) -> Vec<OverlayView> {
        self.editor
            .as_ref()
            .map(|session| {
                session
                    .overlays()
                    .iter()
                    .map(|overlay| {
                        to_overlay_view(
                            overlay.id(),
                            overlay.source_ref().to_string(),
                            overlay.transform(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn parse_project_id(raw: &str) -> Option<ProjectId> {
    Uuid::parse_str(raw.trim()).ok()
}

fn to_project_item(project: &Project) -> ProjectItem {
    ProjectItem {
        project_id: project.id.to_string(),
        name: project.name.clone(),
    }
}

fn to_overlay_view(id: OverlayId, source_ref: String, transform: Transform) -> OverlayView {
    OverlayView {
        overlay_id: id.0,
        source_ref,
        translate_x: transform.translation.x,
        translate_y: transform.translation.y,
        scale: transform.scale,
    }
}

#[cfg(test)]
mod tests {
    use super::{core_version, init_logging, ping, GestureInput, GestureKind, StickerboardApp};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn project_lifecycle_over_string_ids() {
        let mut app = StickerboardApp::new();
        let created = app.create_project("Road trip".to_string());
        assert!(created.ok, "{}", created.message);
        let project_id = created.id.expect("create should return id");

        let item = app.get_project(project_id.clone()).expect("project exists");
        assert_eq!(item.name, "Road trip");
        assert_eq!(app.list_projects().len(), 1);

        app.remove_project(project_id.clone());
        app.remove_project(project_id.clone());
        app.remove_project("not-a-uuid".to_string());
        assert!(app.get_project(project_id).is_none());
        assert!(app.list_projects().is_empty());
    }

    #[test]
    fn create_project_reports_empty_name() {
        let mut app = StickerboardApp::new();
        let response = app.create_project(String::new());
        assert!(!response.ok);
        assert!(response.message.contains("empty"));
    }

    #[test]
    fn gestures_drive_overlay_through_open_editor() {
        let mut app = StickerboardApp::new();
        let project_id = app
            .create_project("Edit".to_string())
            .id
            .expect("create should return id");
        let opened = app.open_editor(project_id, 390.0, 844.0, 47.0, 34.0, None);
        assert!(opened.ok, "{}", opened.message);

        let overlay = app
            .add_overlay("https://media.example/cat.gif".to_string())
            .expect("editor is open");
        app.dispatch_gesture(overlay, GestureInput::Start { kind: GestureKind::Pan });
        app.dispatch_gesture(overlay, GestureInput::Pan { dx: 30.0, dy: 40.0 });
        let view = app
            .dispatch_gesture(overlay, GestureInput::End { kind: GestureKind::Pan })
            .expect("overlay exists");

        assert_eq!(view.translate_x, 30.0);
        assert_eq!(view.translate_y, 40.0);
        assert_eq!(view.scale, 1.0);
        assert_eq!(app.overlays().len(), 1);
        assert!(app
            .dispatch_gesture(overlay + 1, GestureInput::Pinch { factor: 2.0 })
            .is_none());
    }

    #[test]
    fn open_editor_reports_unknown_project_and_bad_config() {
        let mut app = StickerboardApp::new();
        let missing = app.open_editor(
            "11111111-2222-4333-8444-555555555555".to_string(),
            390.0,
            844.0,
            0.0,
            0.0,
            None,
        );
        assert!(!missing.ok);
        assert!(missing.message.contains("not found"));

        let project_id = app.create_project("p".to_string()).id.expect("id");
        let bad = app.open_editor(
            project_id,
            390.0,
            844.0,
            0.0,
            0.0,
            Some(r#"{"overlay_diameter": -5}"#.to_string()),
        );
        assert!(!bad.ok);
        assert!(app.add_overlay("x".to_string()).is_none());
    }

    #[test]
    fn removing_bound_project_closes_editor() {
        let mut app = StickerboardApp::new();
        let project_id = app.create_project("p".to_string()).id.expect("id");
        app.open_editor(project_id.clone(), 390.0, 844.0, 0.0, 0.0, None);
        assert!(app.add_overlay("a".to_string()).is_some());

        app.remove_project(project_id);
        assert!(app.overlays().is_empty());
        assert!(app.add_overlay("b".to_string()).is_none());
    }
}
