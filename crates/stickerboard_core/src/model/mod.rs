//! Domain model for projects and overlay placement.
//!
//! # Responsibility
//! - Define canonical data structures shared by the registry and editor.
//! - Keep geometry types free of gesture or storage concerns.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Transforms are plain values; only gesture engines produce new ones.

pub mod project;
pub mod transform;
