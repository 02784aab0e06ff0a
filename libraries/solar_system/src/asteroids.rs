use crate::body::Spin;
use crate::catalog::hex_color;
use crate::state::AsteroidParticle;
use bevy::prelude::*;

pub struct AsteroidPlugin;

impl Plugin for AsteroidPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Asteroid>();
    }
}

#[derive(Debug, Copy, Clone, Component, Reflect)]
#[reflect(Component)]
pub struct Asteroid;

const ASTEROID_COLOR: u32 = 0x666666;

pub fn spawn_belt(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    particles: &[AsteroidParticle],
    spin: f32,
) {
    let material = materials.add(StandardMaterial {
        base_color: hex_color(ASTEROID_COLOR),
        perceptual_roughness: 1.0,
        reflectance: 0.0,
        ..default()
    });
    debug!("Spawning {} asteroids", particles.len());
    commands.spawn_batch(
        particles
            .iter()
            .enumerate()
            .map(|(i, particle)| {
                (
                    Name::new(format!("Asteroid {i}")),
                    Asteroid,
                    particle.orbit,
                    Mesh3d(meshes.add(Sphere::new(particle.radius).mesh().uv(8, 8))),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(particle.orbit.initial_position()),
                    Spin::new(Vec3::new(spin, spin, 0.0)),
                )
            })
            .collect::<Vec<_>>(),
    );
}
