use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

use crate::item::ItemId;

/// Dropped items posed during the current frame.
///
/// Cleared at the start of every frame by [`begin_render_frame`], so a second
/// pose pass in the same frame skips items that were already handled.
#[derive(Resource, Debug, Default)]
pub struct FrameRenderLedger {
    rendered: HashSet<Entity>,
    per_item: HashMap<ItemId, usize>,
    skipped: usize,
}

impl FrameRenderLedger {
    /// Records `entity` as rendered and returns how many items of the same type
    /// have been rendered this frame, itself included. `None` if the entity was
    /// already rendered this frame.
    pub fn claim(&mut self, entity: Entity, item: ItemId) -> Option<usize> {
        if !self.rendered.insert(entity) {
            self.skipped += 1;
            return None;
        }
        let count = self.per_item.entry(item).or_default();
        *count += 1;
        Some(*count)
    }

    pub fn clear(&mut self) {
        self.rendered.clear();
        self.per_item.clear();
        self.skipped = 0;
    }

    pub fn rendered(&self) -> usize {
        self.rendered.len()
    }

    /// Repeat requests turned away this frame.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn count_of(&self, item: ItemId) -> usize {
        self.per_item.get(&item).copied().unwrap_or(0)
    }
}

pub fn begin_render_frame(mut ledger: ResMut<FrameRenderLedger>) {
    ledger.clear();
}
