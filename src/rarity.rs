//! Rarity tiers and the visual vocabulary attached to them.
//!
//! Each tier fixes a hashrate sampling range and the palettes and
//! finishes the renderer may draw from. How many cards a tier gets is a
//! catalog concern and lives in `CatalogConfig`.

use serde::{Deserialize, Serialize};

/// Rarity buckets, ordered from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// All tiers in catalog order.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Lowercase key used in file names and the manifest.
    pub fn slug(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Hashrate sampling range in MH/s, inclusive on both ends.
    /// Adjacent tiers touch at the boundary; higher tiers sample higher.
    pub fn hashrate_range(&self) -> (f64, f64) {
        match self {
            Rarity::Common => (10.0, 120.0),
            Rarity::Uncommon => (120.0, 800.0),
            Rarity::Rare => (800.0, 4_000.0),
            Rarity::Epic => (4_000.0, 15_000.0),
            Rarity::Legendary => (15_000.0, 42_000.0),
        }
    }

    /// Background gradient pair: hot center color, dark rim color.
    pub fn bg_colors(&self) -> (&'static str, &'static str) {
        match self {
            Rarity::Common => ("#00FF66", "#07110A"),
            Rarity::Uncommon => ("#3AB2FF", "#050A14"),
            Rarity::Rare => ("#FFD36A", "#0B0A07"),
            Rarity::Epic => ("#FF5A00", "#120806"),
            Rarity::Legendary => ("#9AD9FF", "#05070C"),
        }
    }

    /// Accent colors the device layer pulls trims, rings and LEDs from.
    pub fn accent_pool(&self) -> &'static [&'static str] {
        match self {
            Rarity::Common => &["#00FF66", "#7CFF6B", "#B6FFC8", "#00D455"],
            Rarity::Uncommon => &["#3AB2FF", "#66D6FF", "#A8EAFF", "#1A7CFF"],
            Rarity::Rare => &["#FFD36A", "#FFDD88", "#FFF2C4", "#D6A100"],
            Rarity::Epic => &["#FF5A00", "#FF7A1A", "#FFB86B", "#FF3B00"],
            Rarity::Legendary => &["#FFD36A", "#FFF2C4", "#9AD9FF", "#FFFFFF"],
        }
    }

    /// Finishes this tier is allowed to roll. Pools narrow toward the
    /// shinier finishes as rarity climbs.
    pub fn material_pool(&self) -> &'static [Material] {
        match self {
            Rarity::Common | Rarity::Uncommon => {
                &[Material::Matte, Material::Anodized, Material::Carbon]
            }
            Rarity::Rare => &[Material::Anodized, Material::Metallic, Material::Carbon],
            Rarity::Epic => &[Material::Metallic, Material::Chrome],
            Rarity::Legendary => &[Material::Gold, Material::Chrome, Material::Diamond],
        }
    }
}

/// Chassis finish. `shine` drives the specular sweep, `grain` the noise
/// overlay alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    Matte,
    Anodized,
    Carbon,
    Metallic,
    Chrome,
    Gold,
    Diamond,
}

impl Material {
    pub fn shine(&self) -> f64 {
        match self {
            Material::Matte => 0.10,
            Material::Anodized => 0.22,
            Material::Carbon => 0.18,
            Material::Metallic => 0.35,
            Material::Chrome => 0.55,
            Material::Gold => 0.60,
            Material::Diamond => 0.48,
        }
    }

    pub fn grain(&self) -> f64 {
        match self {
            Material::Matte => 0.22,
            Material::Anodized => 0.12,
            Material::Carbon => 0.28,
            Material::Metallic => 0.10,
            Material::Chrome => 0.06,
            Material::Gold => 0.08,
            Material::Diamond => 0.10,
        }
    }
}
