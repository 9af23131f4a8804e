use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::probe::WorldProbe;
use super::voxel_map::VoxelMap;
use crate::item::{CatalogClassifier, ItemRegistry};
use crate::registry::block::{BlockCategory, BlockRegistry, FluidTag};

/// Bevy SystemParam bundling the read-only resources the drop systems query.
/// Use `as_ref()` to obtain a lightweight [`DropWorldRef`] for passing into
/// regular functions.
#[derive(SystemParam)]
pub struct DropWorld<'w> {
    pub map: Res<'w, VoxelMap>,
    pub blocks: Res<'w, BlockRegistry>,
    pub items: Res<'w, ItemRegistry>,
}

impl DropWorld<'_> {
    pub fn as_ref(&self) -> DropWorldRef<'_> {
        DropWorldRef {
            map: &self.map,
            blocks: &self.blocks,
            items: &self.items,
        }
    }
}

pub struct DropWorldRef<'a> {
    pub map: &'a VoxelMap,
    pub blocks: &'a BlockRegistry,
    pub items: &'a ItemRegistry,
}

impl<'a> DropWorldRef<'a> {
    pub fn classifier(&self) -> CatalogClassifier<'a> {
        CatalogClassifier {
            items: self.items,
            blocks: self.blocks,
        }
    }
}

impl WorldProbe for DropWorldRef<'_> {
    fn block_category_at(&self, pos: IVec3) -> BlockCategory {
        self.blocks.category(self.map.get(pos))
    }

    fn fluid_at(&self, pos: IVec3) -> Option<FluidTag> {
        self.blocks.fluid(self.map.get(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::fixtures;

    #[test]
    fn probe_reads_registry_through_map() {
        let blocks = fixtures::test_block_registry();
        let items = fixtures::test_item_registry();
        let mut map = VoxelMap::default();
        map.set(IVec3::new(0, 0, 0), blocks.by_name("soul_sand").unwrap());
        map.set(IVec3::new(1, 0, 0), blocks.by_name("water").unwrap());

        let world = DropWorldRef {
            map: &map,
            blocks: &blocks,
            items: &items,
        };
        assert_eq!(world.block_category_at(IVec3::ZERO), BlockCategory::SoulSand);
        assert!(world.is_water_at(IVec3::new(1, 0, 0)));
        assert!(!world.is_water_at(IVec3::new(2, 0, 0)));
        assert_eq!(
            world.block_category_at(IVec3::new(0, 50, 0)),
            BlockCategory::None
        );
    }
}
