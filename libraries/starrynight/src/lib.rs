use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Default)]
pub struct StarryNightPlugin {
    pub settings: StarFieldSettings,
    pub seed: Option<u64>,
}

impl Plugin for StarryNightPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<StarryNight>()
            .register_type::<StarFieldSettings>()
            .insert_resource(self.settings.clone())
            .insert_resource(StarRng::new(self.seed))
            .add_systems(Startup, spawn_stars)
            .add_systems(Update, rotate_sky);
    }
}

#[derive(Debug, Clone, PartialEq, Resource, Reflect, Deserialize, Serialize)]
#[reflect(Resource)]
#[serde(rename_all = "kebab-case", default)]
pub struct StarFieldSettings {
    pub count: usize,
    /// Side length of the cube, centered at the origin, the stars are scattered in.
    pub extent: f32,
    /// HSL hue range, in turns (`0.0..1.0`).
    pub hue: [f32; 2],
    pub saturation: f32,
    pub lightness: [f32; 2],
    pub opacity: f32,
    /// Rotation about Y, radians per frame.
    pub spin: f32,
}

impl Default for StarFieldSettings {
    fn default() -> Self {
        Self {
            count: 15_000,
            extent: 2000.0,
            hue: [0.6, 0.8],
            saturation: 0.5,
            lightness: [0.5, 1.0],
            opacity: 0.8,
            spin: 0.0002,
        }
    }
}

#[derive(Resource, Deref, DerefMut)]
pub struct StarRng(pub ChaCha8Rng);

impl StarRng {
    pub fn new(seed: Option<u64>) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed.unwrap_or_else(rand::random)))
    }
}

/// Marker for the star field entity.
#[derive(Debug, Copy, Clone, Component, Reflect)]
#[reflect(Component)]
pub struct StarryNight;

#[derive(Debug, Clone, PartialEq)]
pub struct StarField {
    pub positions: Vec<Vec3>,
    pub colors: Vec<LinearRgba>,
}

impl StarField {
    /// Scatters `settings.count` stars uniformly in the cube, each with its own color.
    pub fn generate(settings: &StarFieldSettings, rng: &mut impl rand::Rng) -> Self {
        let mut positions = Vec::with_capacity(settings.count);
        let mut colors = Vec::with_capacity(settings.count);
        let mut lerp = |[min, max]: [f32; 2]| min + rng.random::<f32>() * (max - min);
        let half = settings.extent / 2.0;
        for _ in 0..settings.count {
            let x = lerp([-half, half]);
            let y = lerp([-half, half]);
            let z = lerp([-half, half]);
            positions.push(Vec3::new(x, y, z));

            let hue = lerp(settings.hue) * 360.0;
            let lightness = lerp(settings.lightness);
            colors.push(Color::hsl(hue, settings.saturation, lightness).into());
        }
        Self { positions, colors }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn mesh(&self) -> Mesh {
        Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD)
            .with_inserted_attribute(
                Mesh::ATTRIBUTE_POSITION,
                self.positions.iter().map(|p| p.to_array()).collect::<Vec<_>>(),
            )
            .with_inserted_attribute(
                Mesh::ATTRIBUTE_COLOR,
                self.colors.iter().map(|c| c.to_f32_array()).collect::<Vec<_>>(),
            )
    }
}

fn spawn_stars(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rng: ResMut<StarRng>,
    settings: Res<StarFieldSettings>,
) {
    let field = StarField::generate(&settings, &mut **rng);
    debug!("Spawning {} stars", field.len());
    commands.spawn((
        Name::new("Star Field"),
        StarryNight,
        Mesh3d(meshes.add(field.mesh())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE.with_alpha(settings.opacity),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })),
        Transform::default(),
    ));
}

fn rotate_sky(settings: Res<StarFieldSettings>, mut q: Query<&mut Transform, With<StarryNight>>) {
    for mut transform in &mut q {
        transform.rotate_y(settings.spin);
    }
}
