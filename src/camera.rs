use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

#[derive(Component)]
pub struct MainCamera;

/// A plain 2D camera at the origin. The backdrop sprite is centered there
/// and sized to the window, so the camera sees exactly the canvas.
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}
