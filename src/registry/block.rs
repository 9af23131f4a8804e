use std::collections::HashMap;

use bevy::prelude::*;
use serde::Deserialize;

use super::RegistryError;
use crate::math::OutlineShape;

/// Compact block identifier. Index into BlockRegistry.defs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockId(pub u16);

impl BlockId {
    pub const AIR: BlockId = BlockId(0);
}

/// Blocks the drop pose treats specially.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum BlockCategory {
    /// Air, unloaded cells and anything without a block.
    #[default]
    None,
    SoulSand,
    Skull,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum FluidTag {
    Water,
    Lava,
}

fn default_category() -> BlockCategory {
    BlockCategory::Other
}

fn default_outline() -> OutlineShape {
    OutlineShape::full()
}

/// Properties of a single block type, deserialized from RON.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockDef {
    pub id: String,
    #[serde(default = "default_category")]
    pub category: BlockCategory,
    #[serde(default = "default_outline")]
    pub outline: OutlineShape,
    #[serde(default)]
    pub fluid: Option<FluidTag>,
}

/// Registry of all block definitions. Index 0 is air.
#[derive(Resource, Debug)]
pub struct BlockRegistry {
    defs: Vec<BlockDef>,
    name_to_id: HashMap<String, BlockId>,
}

impl BlockRegistry {
    /// Build registry from a list of BlockDefs. Order = BlockId index.
    pub fn from_defs(defs: Vec<BlockDef>) -> Self {
        let name_to_id = defs
            .iter()
            .enumerate()
            .map(|(i, d)| (d.id.clone(), BlockId(i as u16)))
            .collect();
        Self { defs, name_to_id }
    }

    pub fn get(&self, id: BlockId) -> Option<&BlockDef> {
        self.defs.get(id.0 as usize)
    }

    pub fn by_name(&self, name: &str) -> Result<BlockId, RegistryError> {
        self.name_to_id
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownBlock(name.to_string()))
    }

    /// Category of a block; unknown ids and air read as `None`.
    pub fn category(&self, id: BlockId) -> BlockCategory {
        if id == BlockId::AIR {
            return BlockCategory::None;
        }
        self.get(id).map_or(BlockCategory::None, |d| d.category)
    }

    /// Highest point of the block's outline in block units.
    pub fn outline_height(&self, id: BlockId) -> f32 {
        self.get(id).map_or(0.0, |d| d.outline.max_y())
    }

    pub fn fluid(&self, id: BlockId) -> Option<FluidTag> {
        self.get(id).and_then(|d| d.fluid)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

/// Checks a freshly parsed block list before it becomes a registry.
pub fn validate_block_defs(defs: &[BlockDef]) -> Result<(), String> {
    match defs.first() {
        Some(first) if first.id == "air" => {}
        _ => return Err("first block must be \"air\"".into()),
    }
    let mut seen = std::collections::HashSet::new();
    for def in defs {
        if !seen.insert(def.id.as_str()) {
            return Err(format!("duplicate block id \"{}\"", def.id));
        }
        if def.outline.0.iter().any(|b| !b.is_finite()) {
            return Err(format!("block \"{}\" has a non-finite outline box", def.id));
        }
        if def.outline.0.iter().any(|b| b.is_degenerate()) {
            return Err(format!("block \"{}\" has an inverted outline box", def.id));
        }
        if def.outline.0.iter().any(|b| b.max[1] < 0.0) {
            return Err(format!("block \"{}\" has a negative outline height", def.id));
        }
    }
    Ok(())
}
