//! Core ambient particle-field simulation library.
//!
//! Main components:
//! - [`particle`] — particles and the field that owns them.
//! - [`config`] — global configuration for motion, pulsing and rendering.
//! - [`phases`] — the per-frame update pipeline.
//! - [`render`] — geometry of one rendered frame (dots and connection links).
//! - [`types`] — shared small types (viewport extent).

pub mod config;
pub mod particle;
pub mod phases;
pub mod render;
pub mod types;
