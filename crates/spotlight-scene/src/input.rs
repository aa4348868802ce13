//! Translation from Bevy input resources to a core `FrameInput`

use bevy::prelude::*;
use spotlight_core::{FrameInput, SelectKey};

/// Bevy key for each select key
pub fn key_code(key: SelectKey) -> KeyCode {
    match key {
        SelectKey::Digit1 => KeyCode::Digit1,
        SelectKey::Digit2 => KeyCode::Digit2,
        SelectKey::Digit3 => KeyCode::Digit3,
        SelectKey::Digit4 => KeyCode::Digit4,
        SelectKey::Digit5 => KeyCode::Digit5,
    }
}

/// Select keys that went down this frame
pub fn select_keys_pressed(keys: &ButtonInput<KeyCode>) -> Vec<SelectKey> {
    SelectKey::ALL
        .into_iter()
        .filter(|&key| keys.just_pressed(key_code(key)))
        .collect()
}

/// Build the controller input for this frame.
///
/// The first connected gamepad provides the stick reading. Device names are
/// only collected while `scan_devices` is set, i.e. until a gamepad latches.
pub fn frame_input<'a>(
    time: &Time,
    keys: &ButtonInput<KeyCode>,
    gamepads: impl IntoIterator<Item = (&'a Name, &'a Gamepad)>,
    scan_devices: bool,
) -> FrameInput {
    let mut input = FrameInput::at(time.elapsed_secs_f64());
    input.keys_pressed = select_keys_pressed(keys);

    for (name, gamepad) in gamepads {
        if input.left_stick_x.is_none() {
            input.left_stick_x = Some(gamepad.left_stick().x);
        }
        if scan_devices {
            input.device_names.push(name.as_str().to_string());
        }
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_keys_pressed() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::Digit4);
        keys.press(KeyCode::Digit2);
        keys.press(KeyCode::KeyA);

        assert_eq!(
            select_keys_pressed(&keys),
            vec![SelectKey::Digit2, SelectKey::Digit4]
        );

        // Held keys are not edges
        keys.clear();
        assert!(select_keys_pressed(&keys).is_empty());
    }

    #[test]
    fn test_frame_input_reads_first_gamepad() {
        let time = Time::<()>::default();
        let keys = ButtonInput::<KeyCode>::default();

        let xbox = Name::new("Xbox Wireless Controller");
        let mut left = Gamepad::default();
        left.analog_mut().set(GamepadAxis::LeftStickX, -0.75);
        let other = Name::new("Other Pad");
        let centered = Gamepad::default();

        let input = frame_input(&time, &keys, [(&xbox, &left), (&other, &centered)], true);
        assert_eq!(input.left_stick_x, Some(-0.75));
        assert_eq!(input.device_names, vec!["Xbox Wireless Controller", "Other Pad"]);

        let input = frame_input(&time, &keys, [(&xbox, &left)], false);
        assert!(input.device_names.is_empty());
        assert_eq!(input.left_stick_x, Some(-0.75));
    }

    #[test]
    fn test_frame_input_without_gamepad() {
        let time = Time::<()>::default();
        let keys = ButtonInput::<KeyCode>::default();
        let input = frame_input(&time, &keys, std::iter::empty(), true);
        assert_eq!(input.left_stick_x, None);
        assert!(input.device_names.is_empty());
        assert_eq!(input.time, 0.0);
    }
}
