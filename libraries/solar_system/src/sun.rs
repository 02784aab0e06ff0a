use crate::body::Spin;
use crate::catalog::hex_color;
use crate::meshes;
use bevy::prelude::*;
use bevy::render::render_resource::Face;

pub struct SunPlugin;

impl Plugin for SunPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Sun>()
            .register_type::<SunCore>()
            .register_type::<SunFlare>()
            .register_type::<Sunlight>()
            .add_systems(Startup, setup_sunlight);
    }
}

#[derive(Debug, Clone, Copy, Component, Reflect)]
#[reflect(Component)]
pub struct Sun;

#[derive(Debug, Clone, Copy, Component, Reflect)]
#[reflect(Component)]
pub struct SunCore;

/// Wireframe shell tumbling just above the core.
#[derive(Debug, Clone, Copy, Component, Reflect)]
#[reflect(Component)]
pub struct SunFlare;

impl Sun {
    pub const RADIUS: f32 = 3.0;
    pub const COLOR: u32 = 0xffdd88;
    pub const EMISSIVE: u32 = 0xffaa00;
    pub const CORE_SPIN: f32 = 0.005;
}

struct GlowLayer {
    radius: f32,
    color: u32,
    opacity: f32,
}

const GLOW_LAYERS: [GlowLayer; 3] = [
    GlowLayer { radius: 3.3, color: 0xff8800, opacity: 0.6 },
    GlowLayer { radius: 3.8, color: 0xff4400, opacity: 0.3 },
    GlowLayer { radius: 4.5, color: 0xff0000, opacity: 0.1 },
];

const FLARE_RADIUS: f32 = 3.1;
const FLARE_OPACITY: f32 = 0.4;
const FLARE_SPIN: Vec3 = Vec3::new(0.01, 0.0, -0.005);

#[derive(Component, Reflect)]
#[reflect(Component)]
struct Sunlight;

fn setup_sunlight(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: hex_color(0x333333),
        brightness: 400.0,
    });
    commands.spawn((
        Name::new("Sunlight"),
        Sunlight,
        PointLight {
            color: Color::WHITE,
            intensity: 4.0e7,
            range: 1000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::default(),
    ));
}

/// Spawns the sun: a spinning core, three back-facing glow shells and a wireframe flare shell.
pub fn spawn(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> Entity {
    let core_color = hex_color(Sun::COLOR);
    let core = (
        Name::new("Sun (Core)"),
        SunCore,
        Mesh3d(meshes.add(Sphere::new(Sun::RADIUS).mesh().uv(64, 64))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: core_color,
            emissive: LinearRgba::from(hex_color(Sun::EMISSIVE)) * 0.3,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        Spin::about_y(Sun::CORE_SPIN),
    );

    let glow = GLOW_LAYERS.map(|layer| {
        (
            Name::new(format!("Sun (Glow {})", layer.radius)),
            Mesh3d(meshes.add(Sphere::new(layer.radius).mesh().uv(32, 32))),
            MeshMaterial3d(materials.add(StandardMaterial {
                cull_mode: Some(Face::Front),
                ..meshes::translucent(hex_color(layer.color), layer.opacity)
            })),
            Transform::default(),
        )
    });

    let flare_shell = Sphere::new(FLARE_RADIUS).mesh().uv(32, 32);
    let flare = (
        Name::new("Sun (Flares)"),
        SunFlare,
        Mesh3d(meshes.add(meshes::wireframe(&flare_shell))),
        MeshMaterial3d(materials.add(meshes::translucent(
            hex_color(Sun::EMISSIVE),
            FLARE_OPACITY,
        ))),
        Transform::default(),
        Spin::new(FLARE_SPIN),
    );

    debug!("Spawning sun");
    commands
        .spawn((Name::new("Sun"), Sun, Transform::default(), Visibility::default()))
        .with_children(|sun| {
            sun.spawn(core);
            for layer in glow {
                sun.spawn(layer);
            }
            sun.spawn(flare);
        })
        .id()
}
