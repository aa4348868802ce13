//! Spotlight Core - Image selection and scale toggle logic
//!
//! This crate holds the engine-agnostic part of Spotlight:
//! - Per-frame input snapshot (keyboard digit edges, left stick, attached devices)
//! - The toggle controller that tracks selection and enlarged images
//! - Tunable settings with validation

pub mod controller;
pub mod input;
pub mod settings;

pub use controller::{ScaleToggle, ToggleController};
pub use input::{FrameInput, InputSource, SelectKey};
pub use settings::{SettingsError, ToggleSettings};
