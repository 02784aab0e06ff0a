use bevy::prelude::*;
use std::f64::consts;

pub struct OrbitPlugin;

impl Plugin for OrbitPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CircularOrbit>()
            .add_systems(Update, update_positions.in_set(OrbitSystems));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub struct OrbitSystems;

type Real = f64;

/// Circular motion around the origin in the XZ plane.
///
/// The angle only ever grows; it is not wrapped, the trigonometric functions take care of
/// periodicity. Positions are always derived from the angle and never stored on their own.
#[derive(Debug, Clone, Copy, PartialEq, Component, Reflect)]
#[reflect(Component)]
pub struct CircularOrbit {
    pub distance: f32,
    /// Radians per frame.
    pub speed: Real,
    /// Amplitude of the vertical oscillation, which runs at twice the orbital frequency.
    pub wobble: f32,
    /// Constant vertical offset.
    pub height: f32,
    angle: Real,
}

impl CircularOrbit {
    pub fn new(distance: f32, speed: Real, angle: Real) -> Self {
        Self {
            distance,
            speed,
            wobble: 0.0,
            height: 0.0,
            angle,
        }
    }

    pub fn with_wobble(self, wobble: f32) -> Self {
        Self { wobble, ..self }
    }

    pub fn with_height(self, height: f32) -> Self {
        Self { height, ..self }
    }

    #[inline]
    pub fn angle(&self) -> Real {
        self.angle
    }

    #[inline]
    pub fn advance(&mut self) {
        self.angle += self.speed;
    }

    /// Position before the first frame has run; no wobble is applied yet.
    pub fn initial_position(&self) -> Vec3 {
        let (x, z) = self.planar();
        Vec3::new(x, self.height, z)
    }

    pub fn position(&self) -> Vec3 {
        let (x, z) = self.planar();
        let wobble = (self.angle * 2.0).sin() as f32 * self.wobble;
        Vec3::new(x, self.height + wobble, z)
    }

    #[inline]
    fn planar(&self) -> (f32, f32) {
        let (sin, cos) = self.angle.sin_cos();
        let distance = self.distance as Real;
        ((cos * distance) as f32, (sin * distance) as f32)
    }
}

/// Uniformly random starting angle in `[0, 2π)`.
pub fn random_angle(rng: &mut impl rand::Rng) -> Real {
    rng.random::<Real>() * consts::TAU
}

fn update_positions(mut q: Query<(&mut Transform, &mut CircularOrbit)>) {
    for (mut transform, mut orbit) in &mut q {
        orbit.advance();
        transform.translation = orbit.position();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn orbit() -> CircularOrbit {
        CircularOrbit::new(12.0, 0.01, 1.25).with_wobble(0.1)
    }

    #[test]
    fn advance_accumulates_speed() {
        let mut orbit = orbit();
        for _ in 0..1000 {
            orbit.advance();
        }
        assert_abs_diff_eq!(orbit.angle(), 1.25 + 1000.0 * 0.01, epsilon = 1e-9);
    }

    #[test]
    fn position_stays_on_circle() {
        let mut orbit = orbit();
        for _ in 0..5000 {
            orbit.advance();
            let pos = orbit.position();
            assert_abs_diff_eq!(pos.x * pos.x + pos.z * pos.z, 144.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn wobble_runs_at_double_frequency() {
        let mut orbit = CircularOrbit::new(12.0, consts::FRAC_PI_4, 0.0).with_wobble(0.1);
        orbit.advance();
        assert_abs_diff_eq!(orbit.position().y, 0.1, epsilon = 1e-6);
        orbit.advance();
        assert_abs_diff_eq!(orbit.position().y, 0.0, epsilon = 1e-6);
        orbit.advance();
        assert_abs_diff_eq!(orbit.position().y, -0.1, epsilon = 1e-6);
    }

    #[test]
    fn initial_position_is_flat() {
        let orbit = orbit();
        let pos = orbit.initial_position();
        assert_abs_diff_eq!(pos.x, (1.25f64.cos() * 12.0) as f32, epsilon = 1e-5);
        assert_abs_diff_eq!(pos.y, 0.0);
        assert_abs_diff_eq!(pos.z, (1.25f64.sin() * 12.0) as f32, epsilon = 1e-5);
    }

    #[test]
    fn height_offsets_position() {
        let mut orbit = CircularOrbit::new(20.0, 0.001, 0.0).with_height(-0.2);
        assert_abs_diff_eq!(orbit.initial_position().y, -0.2);
        orbit.advance();
        assert_abs_diff_eq!(orbit.position().y, -0.2);
    }

    #[test]
    fn system_moves_transforms() {
        let mut app = App::new();
        app.add_plugins(OrbitPlugin);
        let orbit = orbit();
        let entity = app
            .world_mut()
            .spawn((Transform::from_translation(orbit.initial_position()), orbit))
            .id();

        for _ in 0..10 {
            app.update();
        }

        let world = app.world();
        let orbit = world.get::<CircularOrbit>(entity).unwrap();
        let transform = world.get::<Transform>(entity).unwrap();
        assert_abs_diff_eq!(orbit.angle(), 1.25 + 0.1, epsilon = 1e-9);
        assert_eq!(transform.translation, orbit.position());
    }
}
