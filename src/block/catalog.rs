//! Display and material properties for each catalog entry.
//!
//! The table is indexed by `BlockType as usize`, so its order must match
//! `BlockType::ALL`.
use bevy::color::Color;

#[derive(Debug, Clone, Copy)]
pub struct BlockProperties {
    pub name: &'static str, // Identifier-safe name used in snapshot files
    pub label: &'static str, // Human readable name shown on the hotbar
    pub color: (f32, f32, f32), // sRGB base colour used by the renderer
    pub translucent: bool, // Rendered with alpha blending (foliage)
}

impl BlockProperties {
    /// Base colour as a Bevy `Color`, with alpha lowered for translucent blocks.
    #[must_use]
    pub fn base_color(&self) -> Color {
        let (r, g, b) = self.color;
        if self.translucent {
            Color::srgba(r, g, b, 0.85)
        } else {
            Color::srgb(r, g, b)
        }
    }
}

pub(crate) static PROPERTIES: [BlockProperties; 6] = [
    BlockProperties {
        name: "grass",
        label: "Grass",
        color: (0.36, 0.66, 0.25),
        translucent: false,
    },
    BlockProperties {
        name: "dirt",
        label: "Dirt",
        color: (0.53, 0.38, 0.24),
        translucent: false,
    },
    BlockProperties {
        name: "stone",
        label: "Stone",
        color: (0.5, 0.5, 0.52),
        translucent: false,
    },
    BlockProperties {
        name: "sand",
        label: "Sand",
        color: (0.86, 0.8, 0.55),
        translucent: false,
    },
    BlockProperties {
        name: "wood",
        label: "Wood",
        color: (0.45, 0.3, 0.16),
        translucent: false,
    },
    BlockProperties {
        name: "leaves",
        label: "Leaves",
        color: (0.2, 0.5, 0.18),
        translucent: true,
    },
];
