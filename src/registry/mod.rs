pub mod assets;
pub mod block;
pub mod hot_reload;
pub mod loader;

use bevy::asset::LoadState;
use bevy::prelude::*;
use thiserror::Error;

use crate::interaction::AutoPickupConfig;
use crate::item::{ItemRegistry, check_block_refs};
use crate::pose::PoseConfig;
use crate::sets::DropSet;
use assets::{BlockCatalogAsset, DropsConfigAsset, ItemCatalogAsset};
use block::BlockRegistry;
use loader::RonLoader;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown block: {0}")]
    UnknownBlock(String),
    #[error("unknown item: {0}")]
    UnknownItem(String),
}

/// Application state: Loading waits for catalogs and config, Ready runs the
/// drop systems.
#[derive(States, Default, Debug, Clone, Eq, PartialEq, Hash)]
pub enum AppState {
    #[default]
    Loading,
    Ready,
}

/// Handles kept alive for the lifetime of the app so hot reload can match
/// modified assets.
#[derive(Resource)]
pub struct RegistryHandles {
    pub blocks: Handle<BlockCatalogAsset>,
    pub items: Handle<ItemCatalogAsset>,
    pub config: Handle<DropsConfigAsset>,
}

/// Loading problems already logged. Each kind is reported once, independently.
#[derive(Resource, Debug, Default)]
pub struct LoadIssues {
    pub failed_load: bool,
    pub dangling_refs: bool,
}

pub struct RegistryPlugin;

impl Plugin for RegistryPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<LoadIssues>()
            .init_asset::<BlockCatalogAsset>()
            .init_asset::<ItemCatalogAsset>()
            .init_asset::<DropsConfigAsset>()
            .register_asset_loader(RonLoader::<BlockCatalogAsset>::new(&["blocks.ron"]))
            .register_asset_loader(RonLoader::<ItemCatalogAsset>::new(&["items.ron"]))
            .register_asset_loader(RonLoader::<DropsConfigAsset>::new(&["config.ron"]))
            .add_systems(Startup, start_loading)
            .add_systems(Update, check_loading.run_if(in_state(AppState::Loading)))
            .add_systems(
                Update,
                (
                    hot_reload::hot_reload_config,
                    hot_reload::hot_reload_catalogs,
                )
                    .before(DropSet::Pose)
                    .run_if(in_state(AppState::Ready)),
            );
    }
}

fn start_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    let blocks = asset_server.load::<BlockCatalogAsset>("data/base.blocks.ron");
    let items = asset_server.load::<ItemCatalogAsset>("data/base.items.ron");
    let config = asset_server.load::<DropsConfigAsset>("data/drops.config.ron");
    commands.insert_resource(RegistryHandles {
        blocks,
        items,
        config,
    });
}

fn check_loading(
    mut commands: Commands,
    handles: Res<RegistryHandles>,
    asset_server: Res<AssetServer>,
    block_assets: Res<Assets<BlockCatalogAsset>>,
    item_assets: Res<Assets<ItemCatalogAsset>>,
    config_assets: Res<Assets<DropsConfigAsset>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut issues: ResMut<LoadIssues>,
) {
    if !issues.failed_load {
        for (name, state) in [
            ("base.blocks.ron", asset_server.load_state(&handles.blocks)),
            ("base.items.ron", asset_server.load_state(&handles.items)),
            ("drops.config.ron", asset_server.load_state(&handles.config)),
        ] {
            if let LoadState::Failed(err) = state {
                error!("Failed to load {name}: {err}");
                issues.failed_load = true;
            }
        }
    }

    let (Some(blocks), Some(items), Some(config)) = (
        block_assets.get(&handles.blocks),
        item_assets.get(&handles.items),
        config_assets.get(&handles.config),
    ) else {
        return; // not loaded yet
    };

    let block_registry = BlockRegistry::from_defs(blocks.blocks.clone());
    if let Err(e) = check_block_refs(&items.items, &block_registry) {
        if !issues.dangling_refs {
            error!("Item catalog refers to a missing block: {e}");
            issues.dangling_refs = true;
        }
        return;
    }

    let item_registry = ItemRegistry::from_defs(items.items.clone());
    info!(
        "Catalogs loaded: {} blocks, {} items; stacking {:?}, spin unit {:?}",
        block_registry.len(),
        item_registry.len(),
        config.pose.stacking.policy,
        config.pose.spin_unit,
    );
    commands.insert_resource(block_registry);
    commands.insert_resource(item_registry);
    commands.insert_resource::<PoseConfig>(config.pose.clone());
    commands.insert_resource::<AutoPickupConfig>(config.pickup.clone());
    next_state.set(AppState::Ready);
}
