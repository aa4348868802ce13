//! Controller tuning: stick cooldown, deadzone, scale step, gamepad matching

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("Stick cooldown must be a finite, non-negative number of seconds (got {0})")]
    InvalidCooldown(f64),
    #[error("Stick deadzone must be in [0, 1) (got {0})")]
    InvalidDeadzone(f32),
    #[error("Scale step must be finite (got {0:?})")]
    InvalidScaleStep([f32; 3]),
    #[error("Gamepad name pattern must not be empty")]
    EmptyGamepadPattern,
}

/// Settings for the toggle controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleSettings {
    /// Minimum seconds between two accepted stick gestures
    #[serde(default = "default_stick_cooldown")]
    pub stick_cooldown_secs: f64,
    /// Stick values must go below -deadzone to count as a gesture
    #[serde(default = "default_stick_deadzone")]
    pub stick_deadzone: f32,
    /// Added to an image's scale when enlarged, subtracted when shrunk
    #[serde(default = "default_scale_step")]
    pub scale_step: [f32; 3],
    /// Substring of a device name that switches input to the gamepad
    #[serde(default = "default_gamepad_name_pattern")]
    pub gamepad_name_pattern: String,
}

fn default_stick_cooldown() -> f64 {
    0.5
}

fn default_stick_deadzone() -> f32 {
    0.2
}

fn default_scale_step() -> [f32; 3] {
    [0.3, 0.3, 0.0]
}

fn default_gamepad_name_pattern() -> String {
    "Xbox".to_string()
}

impl Default for ToggleSettings {
    fn default() -> Self {
        Self {
            stick_cooldown_secs: default_stick_cooldown(),
            stick_deadzone: default_stick_deadzone(),
            scale_step: default_scale_step(),
            gamepad_name_pattern: default_gamepad_name_pattern(),
        }
    }
}

impl ToggleSettings {
    /// Check that all values are usable by the controller
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.stick_cooldown_secs.is_finite() || self.stick_cooldown_secs < 0.0 {
            return Err(SettingsError::InvalidCooldown(self.stick_cooldown_secs));
        }
        if !(0.0..1.0).contains(&self.stick_deadzone) {
            return Err(SettingsError::InvalidDeadzone(self.stick_deadzone));
        }
        if self.scale_step.iter().any(|c| !c.is_finite()) {
            return Err(SettingsError::InvalidScaleStep(self.scale_step));
        }
        if self.gamepad_name_pattern.is_empty() {
            return Err(SettingsError::EmptyGamepadPattern);
        }
        Ok(())
    }
}
