//! Rendering helpers

pub mod texture;
