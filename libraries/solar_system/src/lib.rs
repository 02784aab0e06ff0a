use bevy::app::PluginGroupBuilder;
use bevy::prelude::*;

pub mod asteroids;
pub mod body;
pub mod catalog;
pub mod meshes;
pub mod orbit;
pub mod scene;
pub mod state;
pub mod sun;

#[derive(Default)]
pub struct SolarSystemPlugin {
    pub settings: scene::SceneSettings,
    pub seed: Option<u64>,
}

impl PluginGroup for SolarSystemPlugin {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(body::BodyPlugin)
            .add(orbit::OrbitPlugin)
            .add(asteroids::AsteroidPlugin)
            .add(sun::SunPlugin)
            .add(scene::PlanetScenePlugin {
                settings: self.settings,
                seed: self.seed,
            })
    }
}
