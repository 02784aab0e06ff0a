use crate::config::OrreryConfig;
use crate::ui;
use bevy::core_pipeline::bloom::Bloom;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use caption::{CaptionPlugin, CaptionSource};
use drift_camera::{DriftCamera, DriftCameraPlugin, DriftSettings};
use solar_system::SolarSystemPlugin;
use starrynight::StarryNightPlugin;
use std::sync::Arc;

pub(crate) struct AppSettings {
    pub(crate) resolution: WindowResolution,
    pub(crate) with_inspector: bool,
    pub(crate) with_fps: bool,
    pub(crate) seed: Option<u64>,
    pub(crate) config: OrreryConfig,
    pub(crate) caption: Arc<dyn CaptionSource>,
}

pub fn get_app(settings: AppSettings) -> App {
    let AppSettings {
        resolution,
        with_inspector,
        with_fps,
        seed,
        config,
        caption,
    } = settings;
    // Stars and planets draw from separate streams so either can be retuned alone.
    let star_seed = seed.map(|seed| seed.wrapping_add(1));

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Bevy Orrery".to_string(),
            resolution,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        SolarSystemPlugin {
            settings: config.scene,
            seed,
        },
        StarryNightPlugin {
            settings: config.stars,
            seed: star_seed,
        },
        DriftCameraPlugin {
            settings: config.camera,
        },
        CaptionPlugin { source: caption },
        ui::UiPlugin {
            with_inspector,
            with_fps,
        },
    ))
    .insert_resource(ClearColor(Color::BLACK))
    .add_systems(Startup, setup_camera);
    app
}

fn setup_camera(mut commands: Commands, settings: Res<DriftSettings>) {
    debug!("Spawning camera at {}", settings.initial_transform().translation);
    commands.spawn((
        Name::new("Camera"),
        DriftCamera,
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        settings.projection(),
        settings.initial_transform(),
        Bloom {
            intensity: 0.05,
            ..default()
        },
    ));
}
