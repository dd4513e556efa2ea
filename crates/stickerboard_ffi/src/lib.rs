//! Flutter bridge for Stickerboard core.

pub mod api;
