use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;

use super::block::{BlockDef, validate_block_defs};
use super::loader::ValidateAsset;
use crate::interaction::AutoPickupConfig;
use crate::item::{ItemDef, validate_item_defs};
use crate::pose::PoseConfig;

/// Asset loaded from base.blocks.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct BlockCatalogAsset {
    pub blocks: Vec<BlockDef>,
}

impl ValidateAsset for BlockCatalogAsset {
    const KIND: &'static str = "block catalog";

    fn validate(&self) -> Result<(), String> {
        validate_block_defs(&self.blocks)
    }
}

/// Asset loaded from base.items.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct ItemCatalogAsset {
    pub items: Vec<ItemDef>,
}

impl ValidateAsset for ItemCatalogAsset {
    const KIND: &'static str = "item catalog";

    fn validate(&self) -> Result<(), String> {
        validate_item_defs(&self.items)
    }
}

/// Asset loaded from drops.config.ron
#[derive(Asset, TypePath, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DropsConfigAsset {
    pub pose: PoseConfig,
    pub pickup: AutoPickupConfig,
}

impl ValidateAsset for DropsConfigAsset {
    const KIND: &'static str = "drops config";

    fn validate(&self) -> Result<(), String> {
        let threshold = self.pose.flat_height_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(format!("flat_height_threshold {threshold} out of range"));
        }
        if self.pose.stacking.step.iter().any(|s| !s.is_finite()) {
            return Err("stacking step must be finite".into());
        }
        let radius_sq = self.pickup.radius_sq;
        if radius_sq.is_nan() || radius_sq <= 0.0 {
            return Err(format!("pickup radius_sq {radius_sq} must be positive"));
        }
        Ok(())
    }
}
