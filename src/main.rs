use bevy::prelude::*;

mod camera;
mod canvas;
mod garden;
mod input;

use bevy::window::WindowResolution;
use camera::CameraPlugin;
use garden::GardenPlugin;
use input::PointerPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Chosen".into(),
            resolution: WindowResolution::new(1280, 800),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    // Match the garden's clear color so resizes never flash a foreign frame.
    .insert_resource(ClearColor(Color::srgb_u8(1, 21, 16)))
    .add_plugins(CameraPlugin)
    .add_plugins(PointerPlugin)
    .add_plugins(GardenPlugin);

    app.run();
}
