//! Hot-reload systems for catalogs and drop config.

use bevy::asset::AssetEvent;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::RegistryHandles;
use super::assets::{BlockCatalogAsset, DropsConfigAsset, ItemCatalogAsset};
use super::block::BlockRegistry;
use crate::interaction::AutoPickupConfig;
use crate::item::{ItemRegistry, check_block_refs};
use crate::pose::PoseConfig;

pub(crate) fn hot_reload_config(
    mut events: MessageReader<AssetEvent<DropsConfigAsset>>,
    handles: Res<RegistryHandles>,
    assets: Res<Assets<DropsConfigAsset>>,
    mut pose: ResMut<PoseConfig>,
    mut pickup: ResMut<AutoPickupConfig>,
) {
    for event in events.read() {
        if let AssetEvent::Modified { id } = event
            && *id == handles.config.id()
            && let Some(asset) = assets.get(&handles.config)
        {
            *pose = asset.pose.clone();
            *pickup = asset.pickup.clone();
            info!(
                "Hot-reloaded drops config: stacking={:?}, spin_unit={:?}, pickup={}",
                pose.stacking.policy, pose.spin_unit, pickup.enabled
            );
        }
    }
}

/// Rebuilds both registries when either catalog changes, so item block
/// references are always checked against the current block list.
pub(crate) fn hot_reload_catalogs(
    mut block_events: MessageReader<AssetEvent<BlockCatalogAsset>>,
    mut item_events: MessageReader<AssetEvent<ItemCatalogAsset>>,
    handles: Res<RegistryHandles>,
    block_assets: Res<Assets<BlockCatalogAsset>>,
    item_assets: Res<Assets<ItemCatalogAsset>>,
    mut blocks: ResMut<BlockRegistry>,
    mut items: ResMut<ItemRegistry>,
) {
    // Drain both readers fully so no stale event triggers a second rebuild.
    let blocks_changed = block_events
        .read()
        .filter(|e| matches!(e, AssetEvent::Modified { id } if *id == handles.blocks.id()))
        .count()
        > 0;
    let items_changed = item_events
        .read()
        .filter(|e| matches!(e, AssetEvent::Modified { id } if *id == handles.items.id()))
        .count()
        > 0;
    if !blocks_changed && !items_changed {
        return;
    }

    let (Some(block_asset), Some(item_asset)) = (
        block_assets.get(&handles.blocks),
        item_assets.get(&handles.items),
    ) else {
        return;
    };

    let new_blocks = BlockRegistry::from_defs(block_asset.blocks.clone());
    if let Err(e) = check_block_refs(&item_asset.items, &new_blocks) {
        warn!("Ignoring catalog reload: {e}");
        return;
    }
    *blocks = new_blocks;
    *items = ItemRegistry::from_defs(item_asset.items.clone());
    info!(
        "Hot-reloaded catalogs ({} blocks, {} items)",
        blocks.len(),
        items.len()
    );
}
