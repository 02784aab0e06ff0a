use crate::orbit::{random_angle, CircularOrbit};
use crate::scene::manifest::{sample, SceneSettings};
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidParticle {
    pub orbit: CircularOrbit,
    pub radius: f32,
}

/// Orbital state of every moving body in the scene, independent of any rendering.
///
/// The scene builder spawns one entity per element; the per-frame systems then run the same
/// update on the entity components as [`SolarSystemState::step`] runs here.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarSystemState {
    pub planets: Vec<CircularOrbit>,
    pub asteroids: Vec<AsteroidParticle>,
}

impl SolarSystemState {
    /// Draws the initial conditions from `rng`: planets first, in catalog order, then the belt.
    pub fn generate(settings: &SceneSettings, rng: &mut impl rand::Rng) -> Self {
        let planets = settings
            .bodies
            .iter()
            .map(|body| {
                CircularOrbit::new(body.distance, body.speed, random_angle(rng))
                    .with_wobble(settings.wobble)
            })
            .collect();

        let belt = &settings.asteroid_belt;
        let asteroids = (0..belt.count)
            .map(|_| {
                let radius = sample(rng, belt.radius);
                let distance = sample(rng, belt.distance);
                let angle = random_angle(rng);
                let height = sample(rng, belt.height);
                let speed = sample(rng, belt.speed) as f64;
                AsteroidParticle {
                    orbit: CircularOrbit::new(distance, speed, angle).with_height(height),
                    radius,
                }
            })
            .collect();

        Self { planets, asteroids }
    }

    /// Advances every orbit by one frame. Self-rotation lives on [`crate::body::Spin`].
    pub fn step(&mut self) {
        for orbit in &mut self.planets {
            orbit.advance();
        }
        for asteroid in &mut self.asteroids {
            asteroid.orbit.advance();
        }
    }

    pub fn planet_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.planets.iter().map(CircularOrbit::position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::f64::consts;

    fn generate(seed: u64) -> SolarSystemState {
        SolarSystemState::generate(
            &SceneSettings::default(),
            &mut ChaCha8Rng::seed_from_u64(seed),
        )
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(generate(42), generate(42));
        assert_ne!(generate(42), generate(43));
    }

    #[test]
    fn counts_follow_settings() {
        let state = generate(1);
        assert_eq!(state.planets.len(), 8);
        assert_eq!(state.asteroids.len(), 200);
    }

    #[test]
    fn asteroids_within_belt() {
        for asteroid in generate(3).asteroids {
            let orbit = asteroid.orbit;
            assert!((18.0..=21.0).contains(&orbit.distance));
            assert!((-0.25..=0.25).contains(&orbit.height));
            assert!((0.001f32 as f64..=0.002f32 as f64).contains(&orbit.speed));
            assert!((0.05..=0.15).contains(&asteroid.radius));
            assert!((0.0..consts::TAU).contains(&orbit.angle()));
            assert_eq!(orbit.wobble, 0.0);
        }
    }

    #[test]
    fn angles_advance_linearly() {
        let mut state = generate(5);
        let initial = state.clone();
        let frames = 600;
        for _ in 0..frames {
            state.step();
        }
        for (now, then) in state.planets.iter().zip(&initial.planets) {
            assert_abs_diff_eq!(
                now.angle(),
                then.angle() + frames as f64 * then.speed,
                epsilon = 1e-9
            );
        }
        for (now, then) in state.asteroids.iter().zip(&initial.asteroids) {
            assert_abs_diff_eq!(
                now.orbit.angle(),
                then.orbit.angle() + frames as f64 * then.orbit.speed,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn planets_stay_on_their_orbits() {
        let mut state = generate(9);
        let settings = SceneSettings::default();
        for _ in 0..240 {
            state.step();
            for (pos, body) in state.planet_positions().zip(&settings.bodies) {
                let r2 = pos.x * pos.x + pos.z * pos.z;
                assert_abs_diff_eq!(r2, body.distance * body.distance, epsilon = 1e-2);
            }
        }
    }

    #[test]
    fn zero_frames_sits_in_the_plane() {
        let state = generate(11);
        let settings = SceneSettings::default();
        for (orbit, body) in state.planets.iter().zip(&settings.bodies) {
            let angle = orbit.angle();
            let pos = orbit.initial_position();
            assert_abs_diff_eq!(pos.x, (angle.cos() * body.distance as f64) as f32, epsilon = 1e-4);
            assert_abs_diff_eq!(pos.y, 0.0);
            assert_abs_diff_eq!(pos.z, (angle.sin() * body.distance as f64) as f32, epsilon = 1e-4);
        }
    }
}
