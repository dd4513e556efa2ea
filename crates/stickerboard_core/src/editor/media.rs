//! Base-image selection boundary.
//!
//! The platform media picker is an external collaborator. Core only describes
//! the request and carries the picker's result or error through unchanged.

use crate::model::transform::Canvas;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised by an `ImagePicker` implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// Platform media permission is missing.
    PermissionDenied,
    /// User dismissed the picker without choosing an image.
    Cancelled,
    Failed(String),
}

impl Display for MediaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "media permission denied"),
            Self::Cancelled => write!(f, "image selection cancelled"),
            Self::Failed(message) => write!(f, "image selection failed: {message}"),
        }
    }
}

impl Error for MediaError {}

/// Image returned by the picker after cropping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickedImage {
    pub uri: String,
    pub width: u32,
    pub height: u32,
    pub name: Option<String>,
    pub mime: String,
}

/// Parameters handed to the picker for one base-image selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickRequest {
    /// Crop target width, matching the canvas.
    pub width: f64,
    /// Crop target height, matching the canvas.
    pub height: f64,
    pub cropping: bool,
    pub max_files: u32,
    pub force_jpg: bool,
    pub enable_rotation_gesture: bool,
}

impl PickRequest {
    /// Single cropped photo sized to fill `canvas`.
    pub fn for_canvas(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            cropping: true,
            max_files: 1,
            force_jpg: true,
            enable_rotation_gesture: true,
        }
    }
}

/// Platform image picker.
pub trait ImagePicker {
    fn pick_image(&self, request: &PickRequest) -> Result<PickedImage, MediaError>;
}
