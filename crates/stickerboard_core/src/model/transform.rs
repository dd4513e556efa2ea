//! Overlay placement geometry.
//!
//! # Responsibility
//! - Define the `{translation, scale}` transform read by renderers.
//! - Derive the fixed editing canvas from viewport and safe-area insets.
//! - Map a transform to an on-screen placement.
//!
//! # Invariants
//! - Scale always pivots around the overlay's own center.
//! - Composition order is translate, then perspective, then scale.
//! - Canvas dimensions are never negative.

use glam::{DAffine2, DVec2};
use serde::{Deserialize, Serialize};

/// Placement state of one overlay relative to its resting position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Offset from the canvas center, in canvas units.
    pub translation: DVec2,
    /// Uniform scale around the overlay center.
    pub scale: f64,
}

impl Transform {
    /// Placement of a freshly added overlay.
    pub const IDENTITY: Self = Self {
        translation: DVec2::ZERO,
        scale: 1.0,
    };

    /// Resolves this transform into canvas coordinates.
    ///
    /// The overlay rests centered in `canvas` with edge length `diameter`.
    /// `perspective` is carried for renderers that project into 3D; for planar
    /// content it contributes an identity term to `matrix`.
    pub fn placement(&self, canvas: Canvas, diameter: f64, perspective: f64) -> Placement {
        let radius = diameter / 2.0;
        let rest_top_left = canvas.center() - DVec2::splat(radius);
        let local_center = DVec2::splat(radius);

        let matrix = DAffine2::from_translation(rest_top_left + self.translation)
            * perspective_term(perspective)
            * DAffine2::from_translation(local_center)
            * DAffine2::from_scale(DVec2::splat(self.scale))
            * DAffine2::from_translation(-local_center);

        let center = canvas.center() + self.translation;
        let size = diameter * self.scale;
        Placement {
            center,
            size,
            top_left: center - DVec2::splat(size / 2.0),
            perspective,
            matrix,
        }
    }
}

/// Planar projection of a perspective camera at `distance`.
///
/// Overlays are flat and unrotated, so the projection leaves every point in
/// place. `distance` only matters to renderers that add depth.
fn perspective_term(_distance: f64) -> DAffine2 {
    DAffine2::IDENTITY
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// On-screen placement derived from a `Transform`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub center: DVec2,
    /// Rendered edge length.
    pub size: f64,
    pub top_left: DVec2,
    pub perspective: f64,
    /// Maps overlay-local coordinates (`0..diameter` on both axes) to canvas
    /// coordinates.
    pub matrix: DAffine2,
}

/// Safe-area insets reported by the host platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SafeAreaInsets {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// Raw device viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub insets: SafeAreaInsets,
}

/// Fixed editing surface of one editor session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Full viewport width by viewport height minus top and bottom insets.
    ///
    /// Horizontal insets are ignored; the base image spans the full width.
    pub fn from_viewport(viewport: &Viewport) -> Self {
        Self::new(
            viewport.width,
            viewport.height - viewport.insets.top - viewport.insets.bottom,
        )
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Vertical travel available to an overlay of `diameter`.
    ///
    /// Returns zero when the overlay is taller than the canvas, which pins the
    /// overlay to the vertical center.
    pub fn bound_y(&self, diameter: f64) -> f64 {
        (self.height - diameter).max(0.0)
    }
}
