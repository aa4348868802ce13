//! Controller resource and the systems that drive it

use bevy::prelude::*;
use spotlight_core::{ScaleToggle, ToggleController, ToggleSettings};
use tracing::{info, warn};

use crate::image::ToggleImage;
use crate::input::frame_input;

/// Settings used when the controller is created at startup
#[derive(Debug, Clone, Resource, Default)]
pub struct SpotlightSettings(pub ToggleSettings);

/// Live toggle state plus the ordered image entities it refers to
#[derive(Debug, Resource)]
pub struct Spotlight {
    pub controller: ToggleController,
    images: Vec<Entity>,
}

impl Spotlight {
    pub fn new(controller: ToggleController, images: Vec<Entity>) -> Self {
        Self { controller, images }
    }

    /// Image entities in selection order
    pub fn images(&self) -> &[Entity] {
        &self.images
    }

    /// Entity of the currently selected image
    pub fn selected_entity(&self) -> Option<Entity> {
        self.images.get(self.controller.selected()).copied()
    }
}

/// Collect all `ToggleImage` entities and build the controller
pub fn start_spotlight(
    mut commands: Commands,
    settings: Res<SpotlightSettings>,
    images: Query<(Entity, &ToggleImage)>,
) {
    let mut ordered: Vec<(usize, Entity)> = images
        .iter()
        .map(|(entity, image)| (image.index, entity))
        .collect();
    ordered.sort_by_key(|(index, _)| *index);

    if ordered.iter().enumerate().any(|(pos, (index, _))| pos != *index) {
        warn!("Toggle image indices are not contiguous from 0, using sorted order");
    }

    let images: Vec<Entity> = ordered.into_iter().map(|(_, entity)| entity).collect();
    info!(count = images.len(), "Spotlight ready");

    let controller = ToggleController::new(images.len(), settings.0.clone());
    commands.insert_resource(Spotlight::new(controller, images));
}

/// Feed this frame's input to the controller and apply scale changes
pub fn update_spotlight(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    gamepads: Query<(&Name, &Gamepad)>,
    mut spotlight: ResMut<Spotlight>,
    mut transforms: Query<&mut Transform, With<ToggleImage>>,
) {
    let scan_devices = !spotlight.controller.gamepad_detected();
    let input = frame_input(&time, &keys, gamepads.iter(), scan_devices);

    let changes = spotlight.controller.tick(&input);
    for change in changes {
        apply_toggle(&spotlight.images, &mut transforms, change);
    }
}

fn apply_toggle(
    images: &[Entity],
    transforms: &mut Query<&mut Transform, With<ToggleImage>>,
    change: ScaleToggle,
) {
    let Some(&entity) = images.get(change.index) else {
        return;
    };
    match transforms.get_mut(entity) {
        Ok(mut transform) => transform.scale += Vec3::from_array(change.delta),
        Err(_) => warn!(index = change.index, "Toggle image entity has no transform"),
    }
}
