use crate::catalog::{hex_color, CatalogEntry};
use crate::meshes;
use crate::orbit::CircularOrbit;
use bevy::prelude::*;
use bevy::render::mesh::MeshBuilder;
use std::f32::consts;

pub struct BodyPlugin;

impl Plugin for BodyPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PlanetaryBody>()
            .register_type::<OrbitGuide>()
            .register_type::<Spin>()
            .add_systems(Update, spin_system);
    }
}

#[derive(Debug, Copy, Clone, Component, Reflect)]
#[reflect(Component)]
pub struct PlanetaryBody;

/// Flat ring marking a body's orbit. Not part of the body hierarchy, so it never moves.
#[derive(Debug, Copy, Clone, Component, Reflect)]
#[reflect(Component)]
pub struct OrbitGuide;

/// Cosmetic self-rotation, in radians per frame about each axis.
///
/// Accumulated as XYZ Euler angles; the rotation is rebuilt from them every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Component, Reflect)]
#[reflect(Component)]
pub struct Spin {
    pub rate: Vec3,
    pub angles: Vec3,
}

impl Spin {
    pub fn new(rate: Vec3) -> Self {
        Self {
            rate,
            angles: Vec3::ZERO,
        }
    }

    pub fn about_y(rate: f32) -> Self {
        Self::new(Vec3::Y * rate)
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.angles.x, self.angles.y, self.angles.z)
    }
}

const RING_COLOR: u32 = 0xaaaaaa;
const GUIDE_COLOR: u32 = 0x444444;
const GUIDE_HALF_WIDTH: f32 = 0.02;

/// Spawns the orbiting group of a planet: the spinning sphere and, for ringed bodies, the
/// solid and wireframe rings. Returns the group entity, which carries the orbit.
pub fn spawn(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    body: &CatalogEntry,
    orbit: CircularOrbit,
    spin: f32,
) -> Entity {
    let base_color = body.color();
    let material = materials.add(StandardMaterial {
        base_color,
        emissive: LinearRgba::from(base_color) * 0.05,
        perceptual_roughness: 1.0,
        reflectance: 0.0,
        ..default()
    });
    let sphere = meshes.add(Sphere::new(body.radius).mesh().uv(32, 32));

    let rings = body.has_rings().then(|| {
        let flat = Transform::from_rotation(Quat::from_rotation_x(consts::FRAC_PI_2));
        let solid = (
            Name::new(format!("{} (Rings)", body.name)),
            Mesh3d(meshes.add(
                Annulus::new(body.radius * 1.3, body.radius * 2.0)
                    .mesh()
                    .resolution(64)
                    .build(),
            )),
            MeshMaterial3d(materials.add(double_sided(hex_color(RING_COLOR), 0.6))),
            flat,
        );
        let particles = Annulus::new(body.radius * 1.2, body.radius * 2.1)
            .mesh()
            .resolution(32)
            .build();
        let wire = (
            Name::new(format!("{} (Ring Particles)", body.name)),
            Mesh3d(meshes.add(meshes::wireframe(&particles))),
            MeshMaterial3d(materials.add(meshes::translucent(hex_color(RING_COLOR), 0.2))),
            flat,
        );
        (solid, wire)
    });

    debug!("Spawning planet {} at distance {}", body.name, body.distance);
    commands
        .spawn((
            Name::new(body.name.clone()),
            PlanetaryBody,
            orbit,
            Transform::from_translation(orbit.initial_position()),
            Visibility::default(),
        ))
        .with_children(|group| {
            group.spawn((
                Name::new(format!("{} (Surface)", body.name)),
                Mesh3d(sphere),
                MeshMaterial3d(material),
                Transform::default(),
                Spin::about_y(spin),
            ));
            if let Some((solid, wire)) = rings {
                group.spawn(solid);
                group.spawn(wire);
            }
        })
        .id()
}

pub fn spawn_orbit_guide(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    body: &CatalogEntry,
) -> Entity {
    let mesh = Annulus::new(
        body.distance - GUIDE_HALF_WIDTH,
        body.distance + GUIDE_HALF_WIDTH,
    )
    .mesh()
    .resolution(128)
    .build();
    commands
        .spawn((
            Name::new(format!("{} (Orbit)", body.name)),
            OrbitGuide,
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(materials.add(double_sided(hex_color(GUIDE_COLOR), 0.2))),
            Transform::from_rotation(Quat::from_rotation_x(consts::FRAC_PI_2)),
        ))
        .id()
}

fn double_sided(color: Color, opacity: f32) -> StandardMaterial {
    StandardMaterial {
        double_sided: true,
        cull_mode: None,
        ..meshes::translucent(color, opacity)
    }
}

pub fn spin_system(mut q: Query<(&mut Transform, &mut Spin)>) {
    for (mut transform, mut spin) in &mut q {
        let rate = spin.rate;
        spin.angles += rate;
        transform.rotation = spin.rotation();
    }
}
