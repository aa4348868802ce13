//! Selectable image marker

use bevy::prelude::*;

/// Marks an entity as one of the selectable images.
///
/// `index` fixes the image's position in the selection order: key 1 selects
/// index 0, key 2 index 1, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct ToggleImage {
    pub index: usize,
}

impl ToggleImage {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}
