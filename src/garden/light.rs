use bevy::math::Vec2;

/// Fixed radius of the pointer light.
pub const LIGHT_RADIUS: f32 = 400.0;
/// Fraction of the remaining distance covered per tick. Low so the light
/// trails the pointer with a serene lag instead of sticking to it.
pub const FOLLOW_FACTOR: f32 = 0.03;

/// The single interactive glow that trails the pointer.
#[derive(Debug, Clone)]
pub struct PointerLight {
    pub position: Vec2,
}

impl PointerLight {
    /// Start at the viewport center, so the first recorded pointer position
    /// pulls the light in smoothly instead of teleporting it.
    pub fn centered(width: f32, height: f32) -> Self {
        PointerLight {
            position: Vec2::new(width * 0.5, height * 0.5),
        }
    }

    /// Move toward the latest pointer target. Until the first pointer event
    /// of the session there is no target and the light holds still.
    pub fn follow(&mut self, target: Option<Vec2>) {
        if let Some(target) = target {
            self.position += (target - self.position) * FOLLOW_FACTOR;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_position_until_a_pointer_event_arrives() {
        let mut light = PointerLight::centered(800.0, 600.0);
        for _ in 0..500 {
            light.follow(None);
        }
        assert_eq!(light.position, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn first_step_covers_three_percent_of_the_gap() {
        let mut light = PointerLight::centered(800.0, 600.0);
        light.follow(Some(Vec2::new(500.0, 400.0)));
        assert!((light.position - Vec2::new(403.0, 303.0)).length() < 1e-4);
    }

    #[test]
    fn converges_geometrically_toward_a_constant_target() {
        let mut light = PointerLight::centered(800.0, 600.0);
        let target = Vec2::new(650.0, 120.0);
        let mut expected = light.position.distance(target);

        for _ in 0..120 {
            light.follow(Some(target));
            expected *= 1.0 - FOLLOW_FACTOR;
            assert!((light.position.distance(target) - expected).abs() < 1e-2);
        }
    }
}
