use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Marks the camera driven by [`CameraInput`].
#[derive(Debug, Clone, Copy, Default, Component, Reflect)]
#[reflect(Component)]
pub struct DriftCamera;

/// How pointer and scroll input map onto the camera.
#[derive(Debug, Clone, PartialEq, Resource, Reflect, Deserialize, Serialize)]
#[reflect(Resource)]
#[serde(rename_all = "kebab-case", default)]
pub struct DriftSettings {
    /// Fraction of the remaining pointer distance closed every frame
    pub smoothing: f32,
    /// Camera displacement at full pointer deflection, horizontally and vertically
    pub reach: Vec2,
    /// Camera height with the pointer centered and no scroll
    pub height: f32,
    /// Initial distance from the focus along Z
    pub distance: f32,
    /// Scroll accumulator units per wheel pixel
    pub scroll_sensitivity: f32,
    /// Pixels per notch, for devices that report scrolling in lines
    pub scroll_line_pixels: f32,
    pub scroll_range: [f32; 2],
    pub focus: Vec3,
    /// Vertical field of view, in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for DriftSettings {
    fn default() -> Self {
        Self {
            smoothing: 0.05,
            reach: Vec2::new(15.0, 10.0),
            height: 15.0,
            distance: 40.0,
            scroll_sensitivity: 0.01,
            scroll_line_pixels: 100.0,
            scroll_range: [-20.0, 50.0],
            focus: Vec3::ZERO,
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl DriftSettings {
    pub fn initial_transform(&self) -> Transform {
        Transform::from_xyz(0.0, self.height, self.distance).looking_at(self.focus, Vec3::Y)
    }

    pub fn projection(&self) -> Projection {
        Projection::Perspective(PerspectiveProjection {
            fov: self.fov.to_radians(),
            near: self.near,
            far: self.far,
            ..default()
        })
    }

    /// Camera position for the current smoothed input; `z` is kept as is.
    pub fn camera_position(&self, input: &CameraInput, z: f32) -> Vec3 {
        Vec3::new(
            input.smoothed.x * self.reach.x,
            self.height + input.smoothed.y * self.reach.y + input.scroll,
            z,
        )
    }
}

/// Raw and smoothed pointer state plus the accumulated scroll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Resource, Reflect)]
#[reflect(Resource)]
pub struct CameraInput {
    /// Pointer in `[-1, 1]` on both axes, y pointing up
    pub pointer: Vec2,
    pub smoothed: Vec2,
    pub scroll: f32,
}

impl CameraInput {
    /// Records a cursor position given in window coordinates (origin top-left, y down).
    pub fn point_at(&mut self, cursor: Vec2, viewport: Vec2) {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return;
        }
        self.pointer = Vec2::new(
            cursor.x / viewport.x * 2.0 - 1.0,
            -(cursor.y / viewport.y) * 2.0 + 1.0,
        );
    }

    /// Accumulates a wheel delta, positive when scrolling down, in pixels.
    pub fn scroll_by(&mut self, delta_y: f32, settings: &DriftSettings) {
        let [min, max] = settings.scroll_range;
        self.scroll = (self.scroll + delta_y * settings.scroll_sensitivity).clamp(min, max);
    }

    pub fn ease(&mut self, factor: f32) {
        self.smoothed += (self.pointer - self.smoothed) * factor;
    }
}
