use crate::state::SolarSystemState;
use crate::{asteroids, body, sun};
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod manifest;

pub use manifest::{AsteroidBelt, SceneSettings};

#[derive(Default)]
pub struct PlanetScenePlugin {
    pub settings: SceneSettings,
    pub seed: Option<u64>,
}

impl Plugin for PlanetScenePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SceneSettings>()
            .insert_resource(self.settings.clone())
            .insert_resource(SceneRng::new(self.seed))
            .add_systems(Startup, build_scene);
    }
}

/// Random source for the initial conditions of the scene.
#[derive(Resource, Deref, DerefMut)]
pub struct SceneRng(pub ChaCha8Rng);

impl SceneRng {
    /// Seeded generator when `seed` is given, otherwise a random seed.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        debug!("Scene seed: {seed}");
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

pub fn build_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rng: ResMut<SceneRng>,
    settings: Res<SceneSettings>,
) {
    let state = SolarSystemState::generate(&settings, &mut **rng);

    sun::spawn(&mut commands, &mut meshes, &mut materials);
    for (entry, orbit) in settings.bodies.iter().zip(&state.planets) {
        body::spawn(
            &mut commands,
            &mut meshes,
            &mut materials,
            entry,
            *orbit,
            settings.planet_spin,
        );
        body::spawn_orbit_guide(&mut commands, &mut meshes, &mut materials, entry);
    }
    asteroids::spawn_belt(
        &mut commands,
        &mut meshes,
        &mut materials,
        &state.asteroids,
        settings.asteroid_belt.spin,
    );
    info!(
        "Built scene with {} planets and {} asteroids",
        state.planets.len(),
        state.asteroids.len()
    );
}
