use crate::catalog::{self, CatalogEntry};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Inclusive-exclusive `[min, max)` sampling interval.
pub type Span = [f32; 2];

pub(crate) fn sample(rng: &mut impl rand::Rng, [min, max]: Span) -> f32 {
    min + rng.random::<f32>() * (max - min)
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Resource, Reflect)]
#[reflect(Resource)]
#[serde(rename_all = "kebab-case", default)]
pub struct SceneSettings {
    pub bodies: Vec<CatalogEntry>,
    /// Amplitude of the vertical planet oscillation.
    pub wobble: f32,
    /// Self-rotation of planet meshes about Y, radians per frame.
    pub planet_spin: f32,
    pub asteroid_belt: AsteroidBelt,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            bodies: catalog::default_catalog(),
            wobble: 0.1,
            planet_spin: 0.02,
            asteroid_belt: AsteroidBelt::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(rename_all = "kebab-case", default)]
pub struct AsteroidBelt {
    pub count: usize,
    pub distance: Span,
    pub height: Span,
    pub radius: Span,
    /// Radians per frame.
    pub speed: Span,
    /// Self-rotation about X and Y, radians per frame.
    pub spin: f32,
}

impl Default for AsteroidBelt {
    fn default() -> Self {
        Self {
            count: 200,
            distance: [18.0, 21.0],
            height: [-0.25, 0.25],
            radius: [0.05, 0.15],
            speed: [0.001, 0.002],
            spin: 0.01,
        }
    }
}
