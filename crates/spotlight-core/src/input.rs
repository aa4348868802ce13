//! Per-frame input snapshot handed to the controller

use serde::{Deserialize, Serialize};

/// Number keys that select an image directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectKey {
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
}

impl SelectKey {
    /// All keys in the order they are checked each frame
    pub const ALL: [SelectKey; 5] = [
        SelectKey::Digit1,
        SelectKey::Digit2,
        SelectKey::Digit3,
        SelectKey::Digit4,
        SelectKey::Digit5,
    ];

    /// Image index selected by this key (digit - 1)
    pub fn index(self) -> usize {
        match self {
            SelectKey::Digit1 => 0,
            SelectKey::Digit2 => 1,
            SelectKey::Digit3 => 2,
            SelectKey::Digit4 => 3,
            SelectKey::Digit5 => 4,
        }
    }
}

/// Where selection input is read from for a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    #[default]
    Keyboard,
    Gamepad,
}

/// Everything the controller needs to know about one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since startup
    pub time: f64,
    /// Select keys that went down this frame (edge, not held)
    pub keys_pressed: Vec<SelectKey>,
    /// Left stick horizontal axis in [-1, 1], if a gamepad is connected
    pub left_stick_x: Option<f32>,
    /// Names of the currently attached input devices
    pub device_names: Vec<String>,
}

impl FrameInput {
    /// Empty input at the given time
    pub fn at(time: f64) -> Self {
        Self {
            time,
            ..Default::default()
        }
    }

    pub fn with_key(mut self, key: SelectKey) -> Self {
        self.keys_pressed.push(key);
        self
    }

    pub fn with_stick_x(mut self, x: f32) -> Self {
        self.left_stick_x = Some(x);
        self
    }

    pub fn with_device(mut self, name: impl Into<String>) -> Self {
        self.device_names.push(name.into());
        self
    }

    /// Highest-priority select key pressed this frame
    pub fn first_select_key(&self) -> Option<SelectKey> {
        SelectKey::ALL
            .into_iter()
            .find(|key| self.keys_pressed.contains(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_indices() {
        let indices: Vec<usize> = SelectKey::ALL.iter().map(|k| k.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_first_select_key_uses_digit_order() {
        // Press order does not matter, lowest digit wins
        let input = FrameInput::at(0.0)
            .with_key(SelectKey::Digit4)
            .with_key(SelectKey::Digit2);
        assert_eq!(input.first_select_key(), Some(SelectKey::Digit2));

        assert_eq!(FrameInput::at(0.0).first_select_key(), None);
    }
}
