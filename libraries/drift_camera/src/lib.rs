use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::window::CursorMoved;

pub mod components;
mod systems;

pub use components::{CameraInput, DriftCamera, DriftSettings};

/// Camera that eases toward the pointer and rises or sinks with the scroll wheel, always
/// looking at [`DriftSettings::focus`].
#[derive(Default)]
pub struct DriftCameraPlugin {
    pub settings: DriftSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, SystemSet)]
pub struct DriftCameraSystems;

impl Plugin for DriftCameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<DriftCamera>()
            .register_type::<DriftSettings>()
            .register_type::<CameraInput>()
            .add_event::<CursorMoved>()
            .add_event::<MouseWheel>()
            .insert_resource(self.settings.clone())
            .init_resource::<CameraInput>()
            .add_systems(
                Update,
                (
                    systems::get_blocked_inputs
                        .pipe(systems::track_pointer)
                        .pipe(systems::track_scroll),
                    systems::drift_camera,
                )
                    .chain()
                    .in_set(DriftCameraSystems),
            );
    }
}
