//! Gesture-driven overlay transforms.
//!
//! # Responsibility
//! - Model recognizer input as explicit tagged events.
//! - Resolve events into clamped per-overlay transforms.
//!
//! # Invariants
//! - Composition is translate, then perspective, then scale about the overlay
//!   center; the order in which the recognizer dispatches pan and pinch
//!   events does not change the resulting transform.
//! - Engines never share state across overlays.

pub mod engine;
pub mod event;
