//! Pose resolution for dropped items in a voxel world.
//!
//! A dropped item is a root entity ([`item::DroppedItem`]) with one model
//! child ([`item::ItemModel`]). Each frame the render plugin resolves the
//! child's local transform from the item's kind, its motion flags and the
//! block underneath it.

pub mod interaction;
pub mod item;
pub mod math;
pub mod pose;
pub mod registry;
pub mod render;
pub mod sets;
pub mod ui;
pub mod world;

#[cfg(test)]
mod test_helpers;

use bevy::prelude::*;

use sets::DropSet;

/// Everything needed to load catalogs, pose drops and request pickups.
/// The host supplies movement (`DropMotion`) and the voxel contents.
pub struct ItemDropPosePlugin;

impl Plugin for ItemDropPosePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (DropSet::Pose, DropSet::Interaction, DropSet::Ui).chain(),
        )
        .init_resource::<world::VoxelMap>()
        .add_plugins(registry::RegistryPlugin)
        .add_plugins(render::DropRenderPlugin)
        .add_plugins(interaction::InteractionPlugin);
    }
}
