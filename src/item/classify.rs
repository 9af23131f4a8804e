//! Capability view of item handles used by the pose resolver.
//!
//! The resolver never inspects item definitions directly; it asks these four
//! questions and works from the answers.

use super::definition::ItemForm;
use super::registry::{ItemId, ItemRegistry};
use crate::registry::block::{BlockCategory, BlockId, BlockRegistry};

pub trait ItemClassifier {
    fn is_block_derived(&self, item: ItemId) -> bool;

    fn is_aliased_block(&self, item: ItemId) -> bool;

    /// Category of the block behind the item, `None` for plain items.
    fn block_category_of(&self, item: ItemId) -> BlockCategory;

    /// Vertical extent of the backing block's outline, `0.0` for plain items.
    fn collision_height(&self, item: ItemId) -> f32;

    fn traits(&self, item: ItemId) -> ItemTraits {
        ItemTraits {
            block_derived: self.is_block_derived(item),
            aliased: self.is_aliased_block(item),
            block_category: self.block_category_of(item),
            collision_height: self.collision_height(item),
        }
    }
}

/// Answers from [`ItemClassifier`] for one item, captured per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTraits {
    pub block_derived: bool,
    pub aliased: bool,
    pub block_category: BlockCategory,
    pub collision_height: f32,
}

impl ItemTraits {
    pub const PLAIN: ItemTraits = ItemTraits {
        block_derived: false,
        aliased: false,
        block_category: BlockCategory::None,
        collision_height: 0.0,
    };

    /// Block-backed and drawn with the block's own model.
    pub fn is_true_block(&self) -> bool {
        self.block_derived && !self.aliased
    }
}

/// Classifier backed by the loaded item and block catalogs.
pub struct CatalogClassifier<'a> {
    pub items: &'a ItemRegistry,
    pub blocks: &'a BlockRegistry,
}

impl CatalogClassifier<'_> {
    fn form(&self, item: ItemId) -> Option<&ItemForm> {
        self.items.get(item).map(|d| &d.form)
    }

    fn backing_block(&self, item: ItemId) -> Option<BlockId> {
        let name = self.form(item)?.block_name()?;
        self.blocks.by_name(name).ok()
    }
}

impl ItemClassifier for CatalogClassifier<'_> {
    fn is_block_derived(&self, item: ItemId) -> bool {
        matches!(
            self.form(item),
            Some(ItemForm::Block(_) | ItemForm::AliasedBlock(_))
        )
    }

    fn is_aliased_block(&self, item: ItemId) -> bool {
        matches!(self.form(item), Some(ItemForm::AliasedBlock(_)))
    }

    fn block_category_of(&self, item: ItemId) -> BlockCategory {
        self.backing_block(item)
            .map_or(BlockCategory::None, |b| self.blocks.category(b))
    }

    fn collision_height(&self, item: ItemId) -> f32 {
        self.backing_block(item)
            .map_or(0.0, |b| self.blocks.outline_height(b))
    }
}
