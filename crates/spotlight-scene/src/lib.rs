//! Spotlight Scene - Bevy integration for image toggling
//!
//! Images are ordinary entities tagged with [`ToggleImage`]. The plugin
//! collects them once after startup, then every frame feeds keyboard and
//! gamepad input to the core controller and applies the resulting scale
//! changes to each image's `Transform`.

pub mod image;
pub mod input;
pub mod toggle;

use bevy::prelude::*;
use spotlight_core::ToggleSettings;

/// Plugin that wires the toggle controller into the Bevy schedule
#[derive(Debug, Clone, Default)]
pub struct SpotlightPlugin {
    pub settings: ToggleSettings,
}

impl SpotlightPlugin {
    pub fn new(settings: ToggleSettings) -> Self {
        Self { settings }
    }
}

impl Plugin for SpotlightPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(toggle::SpotlightSettings(self.settings.clone()))
            .add_systems(PostStartup, toggle::start_spotlight)
            .add_systems(
                Update,
                toggle::update_spotlight.run_if(resource_exists::<toggle::Spotlight>),
            );
    }
}

// Re-export commonly used types
pub use image::ToggleImage;
pub use toggle::{Spotlight, SpotlightSettings};
