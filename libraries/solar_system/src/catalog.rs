use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// One row of the body catalog.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(rename_all = "kebab-case")]
pub struct CatalogEntry {
    pub name: String,
    pub radius: f32,
    /// Orbital distance from the sun, in scene units.
    pub distance: f32,
    /// `0xRRGGBB`, sRGB.
    pub color: u32,
    /// Radians per frame.
    pub speed: f64,
}

impl CatalogEntry {
    pub fn new(name: &str, radius: f32, distance: f32, color: u32, speed: f64) -> Self {
        Self {
            name: name.to_string(),
            radius,
            distance,
            color,
            speed,
        }
    }

    pub fn has_rings(&self) -> bool {
        self.name == "Saturn"
    }

    pub fn color(&self) -> Color {
        hex_color(self.color)
    }
}

pub fn hex_color(hex: u32) -> Color {
    Color::srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

pub fn default_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("Mercury", 0.4, 7.0, 0x888888, 0.02),
        CatalogEntry::new("Venus", 0.7, 9.0, 0xffc649, 0.015),
        CatalogEntry::new("Earth", 0.8, 12.0, 0x4488ff, 0.01),
        CatalogEntry::new("Mars", 0.6, 15.0, 0xff4444, 0.008),
        CatalogEntry::new("Jupiter", 2.2, 22.0, 0xffaa44, 0.005),
        CatalogEntry::new("Saturn", 2.0, 28.0, 0xffdd88, 0.003),
        CatalogEntry::new("Uranus", 1.2, 35.0, 0x88ffff, 0.002),
        CatalogEntry::new("Neptune", 1.1, 40.0, 0x4444ff, 0.001),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_saturn_has_rings() {
        let ringed = default_catalog()
            .into_iter()
            .filter(CatalogEntry::has_rings)
            .map(|body| body.name)
            .collect::<Vec<_>>();
        assert_eq!(ringed, ["Saturn"]);
    }

    #[test]
    fn catalog_is_ordered_by_distance() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 8);
        assert!(catalog.windows(2).all(|w| w[0].distance < w[1].distance));
    }

    #[test]
    fn hex_colors_decode_channels() {
        let color = hex_color(0x4488ff).to_srgba();
        assert_eq!(color.to_u8_array_no_alpha(), [0x44, 0x88, 0xff]);
    }
}
