//! Bevy application setup

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use spotlight_scene::{SpotlightPlugin, ToggleImage};

use crate::config::{Config, ImageConfig};

/// Image layout taken from the configuration
#[derive(Debug, Clone, Resource)]
struct ImageLayout(Vec<ImageConfig>);

/// Run the Bevy application
pub fn run(config: Config) -> AppExit {
    let [r, g, b] = config.window.clear_color;

    App::new()
        .insert_resource(ClearColor(Color::srgb(r, g, b)))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: config.window.title.clone(),
                        resolution: WindowResolution::new(
                            config.window.width,
                            config.window.height,
                        ),
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: config.window.assets_path.clone(),
                    ..default()
                })
                // Logging is set up by main with tracing-subscriber
                .disable::<LogPlugin>(),
        )
        .insert_resource(ImageLayout(config.images))
        .add_plugins(SpotlightPlugin::new(config.toggle))
        .add_systems(Startup, spawn_images)
        .run()
}

/// Spawn the camera and one sprite per configured image
fn spawn_images(
    mut commands: Commands,
    layout: Res<ImageLayout>,
    asset_server: Res<AssetServer>,
) {
    commands.spawn(Camera2d);

    for (index, image) in layout.0.iter().enumerate() {
        let size = Vec2::from_array(image.size);
        let sprite = match &image.path {
            Some(path) => Sprite {
                image: asset_server.load(path.clone()),
                custom_size: Some(size),
                ..default()
            },
            None => {
                let [r, g, b] = image.tile_color(index);
                Sprite::from_color(Color::srgb(r, g, b), size)
            }
        };

        commands.spawn((
            Name::new(format!("Image {}", index + 1)),
            sprite,
            Transform::from_xyz(image.position[0], image.position[1], 0.0),
            ToggleImage::new(index),
        ));
    }
}
