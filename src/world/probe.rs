use bevy::prelude::*;

use crate::math::block_pos_of;
use crate::registry::block::{BlockCategory, FluidTag};

/// Block and fluid queries the pose system makes against the host world.
///
/// Unloaded or missing cells must answer as air: `BlockCategory::None` and no
/// water.
pub trait WorldProbe {
    fn block_category_at(&self, pos: IVec3) -> BlockCategory;

    fn fluid_at(&self, pos: IVec3) -> Option<FluidTag>;

    fn is_water_at(&self, pos: IVec3) -> bool {
        self.fluid_at(pos) == Some(FluidTag::Water)
    }
}

/// World state sampled at a dropped item's block position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvironmentFlags {
    /// Category of the block the item's position falls inside.
    pub ground_block: BlockCategory,
    pub above_water: bool,
}

impl EnvironmentFlags {
    pub fn sample(probe: &impl WorldProbe, position: Vec3) -> Self {
        let pos = block_pos_of(position);
        Self {
            ground_block: probe.block_category_at(pos),
            above_water: probe.is_water_at(pos),
        }
    }
}
