//! Selection and scale toggle controller
//!
//! The controller owns no visuals. Each tick it reports the scale changes it
//! made as [`ScaleToggle`] values and the host applies them to whatever it
//! renders. Selection follows two paths:
//! - Keyboard: digit keys 1-5 select an image directly
//! - Gamepad: pushing the left stick left advances to the next image,
//!   rate-limited by a cooldown
//!
//! Once a gamepad has been seen the controller stays in gamepad mode.

use tracing::{debug, info};

use crate::input::{FrameInput, InputSource};
use crate::settings::ToggleSettings;

/// A single additive scale change for one image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleToggle {
    /// Image index the change applies to
    pub index: usize,
    /// Whether the image is enlarged after this change
    pub enlarged: bool,
    /// Amount to add to the image's current scale
    pub delta: [f32; 3],
}

impl ScaleToggle {
    /// Add this change to a scale vector
    pub fn apply(&self, scale: &mut [f32; 3]) {
        for (axis, delta) in scale.iter_mut().zip(self.delta) {
            *axis += delta;
        }
    }
}

/// Tracks which image is selected and which images are enlarged
#[derive(Debug, Clone)]
pub struct ToggleController {
    settings: ToggleSettings,
    enlarged: Vec<bool>,
    selected: usize,
    gamepad_detected: bool,
    last_gesture: Option<f64>,
}

impl ToggleController {
    /// Create a controller for `image_count` images, none enlarged
    pub fn new(image_count: usize, settings: ToggleSettings) -> Self {
        Self {
            settings,
            enlarged: vec![false; image_count],
            selected: 0,
            gamepad_detected: false,
            last_gesture: None,
        }
    }

    /// Process one frame of input and return the scale changes made
    pub fn tick(&mut self, input: &FrameInput) -> Vec<ScaleToggle> {
        self.detect_gamepad(&input.device_names);

        match self.input_source() {
            InputSource::Gamepad => self.handle_stick(input.time, input.left_stick_x),
            InputSource::Keyboard => match input.first_select_key() {
                Some(key) => self.select(key.index()),
                None => Vec::new(),
            },
        }
    }

    /// Select image `index`, shrinking the previous selection if it differs.
    ///
    /// Selecting the image that is already selected toggles it, so a second
    /// press on the same key shrinks it again.
    pub fn select(&mut self, index: usize) -> Vec<ScaleToggle> {
        if index >= self.enlarged.len() {
            debug!(index, image_count = self.enlarged.len(), "Ignoring selection of missing image");
            return Vec::new();
        }

        let mut changes = Vec::with_capacity(2);
        if self.selected != index && self.is_enlarged(self.selected) {
            changes.push(self.toggle(self.selected));
        }

        self.selected = index;
        changes.push(self.toggle(index));
        debug!(selected = index, "Selected image");
        changes
    }

    /// Shrink the current selection and enlarge the next image, wrapping around
    pub fn advance(&mut self) -> Vec<ScaleToggle> {
        let count = self.enlarged.len();
        if count == 0 {
            debug!("No images to advance through");
            return Vec::new();
        }

        let mut changes = Vec::with_capacity(2);
        if self.is_enlarged(self.selected) {
            changes.push(self.toggle(self.selected));
        }

        self.selected = (self.selected + 1) % count;
        changes.push(self.toggle(self.selected));
        debug!(selected = self.selected, "Advanced selection");
        changes
    }

    /// Flip image `index` between enlarged and normal size
    ///
    /// Panics if `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> ScaleToggle {
        let step = self.settings.scale_step;
        let was_enlarged = self.enlarged[index];
        let delta = if was_enlarged {
            step.map(|c| -c)
        } else {
            step
        };
        self.enlarged[index] = !was_enlarged;

        ScaleToggle {
            index,
            enlarged: !was_enlarged,
            delta,
        }
    }

    fn detect_gamepad(&mut self, device_names: &[String]) {
        if self.gamepad_detected {
            return;
        }

        let pattern = self.settings.gamepad_name_pattern.as_str();
        if let Some(name) = device_names.iter().find(|name| name.contains(pattern)) {
            info!(device = %name, "Gamepad detected, switching to stick input");
            self.gamepad_detected = true;
        }
    }

    fn handle_stick(&mut self, now: f64, stick_x: Option<f32>) -> Vec<ScaleToggle> {
        let Some(x) = stick_x else {
            return Vec::new();
        };
        if x >= -self.settings.stick_deadzone {
            return Vec::new();
        }

        if let Some(last) = self.last_gesture {
            if now - last <= self.settings.stick_cooldown_secs {
                debug!(elapsed = now - last, "Stick gesture within cooldown");
                return Vec::new();
            }
        }

        self.last_gesture = Some(now);
        self.advance()
    }

    pub fn image_count(&self) -> usize {
        self.enlarged.len()
    }

    /// Currently selected image index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether image `index` is enlarged (false for missing images)
    pub fn is_enlarged(&self, index: usize) -> bool {
        self.enlarged.get(index).copied().unwrap_or(false)
    }

    /// Indices of all enlarged images, ascending
    pub fn enlarged_indices(&self) -> Vec<usize> {
        self.enlarged
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
            .collect()
    }

    pub fn gamepad_detected(&self) -> bool {
        self.gamepad_detected
    }

    /// Input path used on the next tick
    pub fn input_source(&self) -> InputSource {
        if self.gamepad_detected {
            InputSource::Gamepad
        } else {
            InputSource::Keyboard
        }
    }

    pub fn settings(&self) -> &ToggleSettings {
        &self.settings
    }
}
