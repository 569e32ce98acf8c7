//! Catalog output types: per-card records and the manifest document.
//!
//! These are the shapes the storefront inventory UI consumes; field
//! names serialize camelCase to match it.

use serde::{Deserialize, Serialize};

use crate::rarity::Rarity;

/// One generated card as recorded in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    /// Numeric card id, unique within the catalog
    pub id: u32,
    /// Stable slug used by the storefront inventory
    pub slug: String,
    /// Rarity bucket this id rolled
    pub rarity: Rarity,
    /// Display name
    pub name: String,
    /// Sampled hashrate in MH/s, rounded to display precision
    pub hashrate_mh: f64,
    /// Human-formatted hashrate
    pub hashrate_label: String,
    /// Derived comparison score
    pub power_score: u64,
    /// Public path of the rendered image
    pub image: String,
}

/// Id span covered by the catalog.
///
/// `base_gift_id` is the giveaway card every new account receives; it
/// sits below `start_id` and is never generated by this pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdRange {
    pub start_id: u32,
    pub end_id: u32,
    pub base_gift_id: u32,
}

/// Top-level manifest document written next to the images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub total: usize,
    pub range: IdRange,
    pub items: Vec<CardRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_record_serializes_camel_case() {
        let record = CardRecord {
            id: 42,
            slug: "gpu-42".to_string(),
            rarity: Rarity::Rare,
            name: "RTX Rare #42".to_string(),
            hashrate_mh: 1_250.0,
            hashrate_label: "1.25 GH/s".to_string(),
            power_score: 2_548,
            image: "/assets/gpus/gpu-042-rare.webp".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"hashrateMh\""));
        assert!(json.contains("\"hashrateLabel\""));
        assert!(json.contains("\"powerScore\""));
        assert!(json.contains("\"rarity\":\"rare\""));
    }

    #[test]
    fn manifest_round_trips() {
        let manifest = Manifest {
            total: 0,
            range: IdRange { start_id: 2, end_id: 420, base_gift_id: 1 },
            items: vec![],
        };
        let json = serde_json::to_string_pretty(&manifest).unwrap();
        assert!(json.contains("\"baseGiftId\": 1"));
        let back: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, manifest);
    }
}
