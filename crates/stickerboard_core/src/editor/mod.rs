//! Editor session orchestration.
//!
//! # Responsibility
//! - Bind a project to a fixed canvas, a base image and an overlay stack.
//! - Keep platform collaborators (media picker) behind narrow traits.

pub mod media;
pub mod session;
