use std::collections::HashMap;

use bevy::prelude::*;

use crate::registry::block::BlockId;

/// Sparse block storage for the cells dropped items rest in.
/// Cells that were never set read as air.
#[derive(Resource, Debug, Default)]
pub struct VoxelMap {
    cells: HashMap<IVec3, BlockId>,
}

impl VoxelMap {
    pub fn get(&self, pos: IVec3) -> BlockId {
        self.cells.get(&pos).copied().unwrap_or(BlockId::AIR)
    }

    /// Setting air removes the cell.
    pub fn set(&mut self, pos: IVec3, block: BlockId) {
        if block == BlockId::AIR {
            self.cells.remove(&pos);
        } else {
            self.cells.insert(pos, block);
        }
    }

    /// Fills the axis-aligned region `min..=max` with `block`.
    pub fn fill(&mut self, min: IVec3, max: IVec3, block: BlockId) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.set(IVec3::new(x, y, z), block);
                }
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (IVec3, BlockId)> + '_ {
        self.cells.iter().map(|(p, b)| (*p, *b))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_cell_is_air() {
        let map = VoxelMap::default();
        assert_eq!(map.get(IVec3::new(10, -4, 7)), BlockId::AIR);
    }

    #[test]
    fn set_and_clear() {
        let mut map = VoxelMap::default();
        let pos = IVec3::new(1, 2, 3);
        map.set(pos, BlockId(4));
        assert_eq!(map.get(pos), BlockId(4));
        map.set(pos, BlockId::AIR);
        assert_eq!(map.get(pos), BlockId::AIR);
        assert!(map.is_empty());
    }

    #[test]
    fn fill_is_inclusive() {
        let mut map = VoxelMap::default();
        map.fill(IVec3::new(0, 0, 0), IVec3::new(2, 0, 1), BlockId(1));
        assert_eq!(map.len(), 6);
        assert_eq!(map.get(IVec3::new(2, 0, 1)), BlockId(1));
        assert_eq!(map.get(IVec3::new(3, 0, 1)), BlockId::AIR);
    }
}
