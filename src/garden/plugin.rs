use bevy::{
    asset::RenderAssetUsages,
    prelude::*,
    render::render_resource::{Extent3d, TextureDimension, TextureFormat},
    window::WindowResized,
};

use crate::{
    canvas::{Canvas, to_rgba8},
    garden::{GardenField, Palette},
    input::CursorPos,
};

pub struct GardenPlugin;

impl Plugin for GardenPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_garden).add_systems(
            Update,
            (apply_resize, advance_garden)
                .chain()
                .run_if(resource_exists::<GardenField>),
        );
    }
}

/// The raster surface and the texture it is uploaded to each frame.
#[derive(Resource)]
pub struct GardenSurface {
    pub canvas: Canvas,
    pub image: Handle<Image>,
}

/// Marker for the window-filling sprite showing the canvas.
#[derive(Component)]
pub struct GardenBackdrop;

/// Mount: seed the field, create the surface, spawn the backdrop sprite.
///
/// Without a window there is no drawable surface; skip everything silently
/// and the page stays static. Nothing else is inserted, so the Update
/// systems never run.
fn setup_garden(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    windows: Query<&Window>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let (width, height) = (window.width(), window.height());

    let palette = Palette::load();
    let mut rng = rand::rng();
    let field = GardenField::seed(width, height, &palette, &mut rng);

    let canvas = Canvas::new(width as u32, height as u32);
    let image = images.add(backdrop_image(canvas.width(), canvas.height(), &palette));

    commands.spawn((
        GardenBackdrop,
        Sprite {
            image: image.clone(),
            custom_size: Some(Vec2::new(width, height)),
            ..default()
        },
    ));

    info!(
        "Garden seeded: {} blobs over {}x{}",
        field.blobs().len(),
        width,
        height
    );

    commands.insert_resource(GardenSurface { canvas, image });
    commands.insert_resource(field);
    commands.insert_resource(palette);
}

/// One tick per frame: redraw the field into the canvas, then upload the
/// pixels to the backdrop texture.
fn advance_garden(
    mut field: ResMut<GardenField>,
    mut surface: ResMut<GardenSurface>,
    palette: Res<Palette>,
    cursor: Res<CursorPos>,
    mut images: ResMut<Assets<Image>>,
) {
    let surface = surface.as_mut();
    field.tick(&mut surface.canvas, &palette, cursor.0);

    let Some(image) = images.get_mut(&surface.image) else {
        return;
    };
    if let Some(data) = image.data.as_mut()
        && data.len() == surface.canvas.pixels().len()
    {
        data.copy_from_slice(surface.canvas.pixels());
    }
}

/// Match the drawable surface to the window. No state is reseeded; the next
/// tick repaints the whole new area.
fn apply_resize(
    mut resizes: MessageReader<WindowResized>,
    mut field: ResMut<GardenField>,
    mut surface: ResMut<GardenSurface>,
    palette: Res<Palette>,
    mut images: ResMut<Assets<Image>>,
    mut backdrop: Query<&mut Sprite, With<GardenBackdrop>>,
) {
    // Last resize wins; intermediate sizes would never be drawn anyway.
    let Some(resized) = resizes.read().last() else {
        return;
    };

    field.set_viewport(resized.width, resized.height);
    surface.canvas.resize(resized.width as u32, resized.height as u32);

    if let Some(image) = images.get_mut(&surface.image) {
        *image = backdrop_image(surface.canvas.width(), surface.canvas.height(), &palette);
    }
    if let Ok(mut sprite) = backdrop.single_mut() {
        sprite.custom_size = Some(Vec2::new(resized.width, resized.height));
    }

    info!("Garden resized to {}x{}", resized.width, resized.height);
}

/// A main-world-visible texture matching the canvas, pre-filled with the
/// background color. Zero-sized windows still get a 1x1 texture; the upload
/// step skips mismatched sizes.
fn backdrop_image(width: u32, height: u32, palette: &Palette) -> Image {
    Image::new_fill(
        Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &to_rgba8(palette.background),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    )
}
