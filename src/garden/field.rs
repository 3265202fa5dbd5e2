use bevy::prelude::*;
use rand::Rng;

use crate::{
    canvas::{BlendMode, Canvas},
    garden::{
        blob::Blob,
        light::{LIGHT_RADIUS, PointerLight},
        palette::Palette,
    },
};

/// Number of ambient blobs in the field. Fixed for the life of a mount.
pub const BLOB_COUNT: usize = 6;

/// All animation state for one mounted backdrop: the blob set, the pointer
/// light, and the viewport dimensions the wrap logic reads.
#[derive(Resource)]
pub struct GardenField {
    blobs: Vec<Blob>,
    light: PointerLight,
    width: f32,
    height: f32,
}

impl GardenField {
    /// Seed the field once. The blob set never changes afterwards.
    pub fn seed<R: Rng>(width: f32, height: f32, palette: &Palette, rng: &mut R) -> Self {
        let blobs = (0..BLOB_COUNT)
            .map(|_| Blob::spawn(width, height, &palette.blobs, rng))
            .collect();

        GardenField {
            blobs,
            light: PointerLight::centered(width, height),
            width,
            height,
        }
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn light(&self) -> &PointerLight {
        &self.light
    }

    /// Track a viewport change without reseeding; the wrap logic and the
    /// clear step pick up the new dimensions on the next tick.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// One full redraw: clear, advance and paint every blob in spawn order,
    /// then the pointer light screened on top.
    pub fn tick(&mut self, canvas: &mut Canvas, palette: &Palette, pointer: Option<Vec2>) {
        canvas.fill(palette.background);

        let edge = palette.background_faded();
        for blob in &mut self.blobs {
            blob.advance(self.width, self.height);
            canvas.fill_circle_gradient(blob.position, blob.radius, blob.color, edge);
        }

        self.light.follow(pointer);

        canvas.set_blend(BlendMode::Screen);
        canvas.fill_circle_gradient(self.light.position, LIGHT_RADIUS, palette.light, Vec4::ZERO);
        canvas.set_blend(BlendMode::SourceOver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garden::blob;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f32::consts::TAU;

    #[test]
    fn seeding_produces_exactly_six_blobs_and_keeps_them() {
        let palette = Palette::load();
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = GardenField::seed(800.0, 600.0, &palette, &mut rng);
        let mut canvas = Canvas::new(800, 600);

        assert_eq!(field.blobs().len(), BLOB_COUNT);
        for _ in 0..120 {
            field.tick(&mut canvas, &palette, None);
            assert_eq!(field.blobs().len(), BLOB_COUNT);
        }
    }

    #[test]
    fn end_to_end_seeded_mount_and_first_pointer_tick() {
        let palette = Palette::load();
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = GardenField::seed(800.0, 600.0, &palette, &mut rng);

        for b in field.blobs() {
            assert!((0.0..800.0).contains(&b.position.x));
            assert!((0.0..600.0).contains(&b.position.y));
            assert!(b.velocity.x.abs() <= 0.75 && b.velocity.y.abs() <= 0.75);
            assert!((blob::RADIUS_RANGE.0..blob::RADIUS_RANGE.1).contains(&b.base_radius));
            assert!((0.0..TAU).contains(&b.phase));
            assert!(
                (blob::PULSE_SPEED_RANGE.0..blob::PULSE_SPEED_RANGE.1).contains(&b.pulse_speed)
            );
            assert!(palette.blobs.contains(&b.color));
        }
        assert_eq!(field.light().position, Vec2::new(400.0, 300.0));

        let mut canvas = Canvas::new(800, 600);
        field.tick(&mut canvas, &palette, Some(Vec2::new(600.0, 450.0)));

        // 3% of the way from the center toward the pointer.
        let expected = Vec2::new(400.0 + 200.0 * 0.03, 300.0 + 150.0 * 0.03);
        assert!((field.light().position - expected).length() < 1e-4);
    }

    #[test]
    fn each_tick_issues_one_clear_one_draw_per_blob_and_the_light() {
        let palette = Palette::load();
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = GardenField::seed(800.0, 600.0, &palette, &mut rng);
        let mut canvas = Canvas::new(800, 600);

        field.tick(&mut canvas, &palette, None);
        assert_eq!(canvas.draw_calls(), (BLOB_COUNT + 2) as u64);
    }

    #[test]
    fn no_draws_happen_after_the_loop_stops() {
        let palette = Palette::load();
        let mut rng = StdRng::seed_from_u64(9);
        let mut field = GardenField::seed(800.0, 600.0, &palette, &mut rng);
        let mut canvas = Canvas::new(800, 600);

        for _ in 0..3 {
            field.tick(&mut canvas, &palette, None);
        }
        let calls = canvas.draw_calls();

        // Unmount: the field is dropped and no further ticks are scheduled.
        drop(field);
        assert_eq!(canvas.draw_calls(), calls);
    }

    #[test]
    fn resize_repaints_the_whole_new_surface_on_the_next_tick() {
        let palette = Palette::load();
        let mut rng = StdRng::seed_from_u64(5);
        let mut field = GardenField::seed(800.0, 600.0, &palette, &mut rng);
        let mut canvas = Canvas::new(800, 600);
        field.tick(&mut canvas, &palette, None);

        field.set_viewport(400.0, 200.0);
        canvas.resize(400, 200);
        assert_eq!((canvas.width(), canvas.height()), (400, 200));

        field.tick(&mut canvas, &palette, None);
        assert_eq!(canvas.pixels().len(), 400 * 200 * 4);
        // The clear covered the entire new area: everything is opaque.
        assert!(canvas.pixels().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn light_keeps_converging_across_ticks() {
        let palette = Palette::load();
        let mut rng = StdRng::seed_from_u64(13);
        let mut field = GardenField::seed(800.0, 600.0, &palette, &mut rng);
        let mut canvas = Canvas::new(800, 600);

        let target = Vec2::new(100.0, 500.0);
        let mut last = field.light().position.distance(target);
        for _ in 0..60 {
            field.tick(&mut canvas, &palette, Some(target));
            let now = field.light().position.distance(target);
            assert!(now < last);
            last = now;
        }
    }
}
