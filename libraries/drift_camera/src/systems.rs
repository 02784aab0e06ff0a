use crate::components::{CameraInput, DriftCamera, DriftSettings};
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::CursorMoved;
use bevy_egui::EguiContext;

#[derive(Default)]
pub(crate) struct BlockedInputs {
    pointer: bool,
}

/// Input is left to egui while the pointer is over one of its windows.
pub(crate) fn get_blocked_inputs(mut q_egui: Query<&mut EguiContext>) -> BlockedInputs {
    let mut ret = BlockedInputs::default();
    for mut ctx in &mut q_egui {
        ret.pointer |= ctx.get_mut().wants_pointer_input();
    }
    ret
}

pub(crate) fn track_pointer(
    In(blocked_inputs): In<BlockedInputs>,
    mut evr_cursor: EventReader<CursorMoved>,
    q_window: Query<&Window>,
    mut input: ResMut<CameraInput>,
) -> BlockedInputs {
    for ev in evr_cursor.read() {
        if blocked_inputs.pointer {
            continue;
        }
        let Ok(window) = q_window.get(ev.window) else {
            continue;
        };
        input.point_at(ev.position, window.size());
    }
    blocked_inputs
}

pub(crate) fn track_scroll(
    In(blocked_inputs): In<BlockedInputs>,
    settings: Res<DriftSettings>,
    mut evr_scroll: EventReader<MouseWheel>,
    mut input: ResMut<CameraInput>,
) {
    for ev in evr_scroll.read() {
        if blocked_inputs.pointer {
            continue;
        }
        // Wheel events are Y-up; the accumulator follows the Y-down page convention.
        let delta_y = match ev.unit {
            MouseScrollUnit::Line => -ev.y * settings.scroll_line_pixels,
            MouseScrollUnit::Pixel => -ev.y,
        };
        input.scroll_by(delta_y, &settings);
    }
}

pub(crate) fn drift_camera(
    settings: Res<DriftSettings>,
    mut input: ResMut<CameraInput>,
    mut q_camera: Query<&mut Transform, With<DriftCamera>>,
) {
    input.ease(settings.smoothing);
    for mut transform in &mut q_camera {
        let z = transform.translation.z;
        transform.translation = settings.camera_position(&input, z);
        transform.look_at(settings.focus, Vec3::Y);
    }
}
