use std::collections::HashMap;

use bevy::prelude::*;

use super::definition::ItemDef;
use crate::registry::RegistryError;
use crate::registry::block::BlockRegistry;

/// Compact item identifier. Index into ItemRegistry.defs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ItemId(pub u16);

/// Registry of all item definitions. Inserted as a Resource after asset loading.
#[derive(Resource, Debug)]
pub struct ItemRegistry {
    defs: Vec<ItemDef>,
    name_to_id: HashMap<String, ItemId>,
}

impl ItemRegistry {
    /// Build registry from a list of ItemDefs. Order = ItemId index.
    pub fn from_defs(defs: Vec<ItemDef>) -> Self {
        let name_to_id = defs
            .iter()
            .enumerate()
            .map(|(i, d)| (d.id.clone(), ItemId(i as u16)))
            .collect();
        Self { defs, name_to_id }
    }

    pub fn get(&self, id: ItemId) -> Option<&ItemDef> {
        self.defs.get(id.0 as usize)
    }

    pub fn by_name(&self, name: &str) -> Result<ItemId, RegistryError> {
        self.name_to_id
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownItem(name.to_string()))
    }

    pub fn name_of(&self, id: ItemId) -> &str {
        self.get(id).map_or("<unknown>", |d| d.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &ItemDef)> {
        self.defs
            .iter()
            .enumerate()
            .map(|(i, d)| (ItemId(i as u16), d))
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

/// Checks a freshly parsed item list on its own.
pub fn validate_item_defs(defs: &[ItemDef]) -> Result<(), String> {
    let mut seen = std::collections::HashSet::new();
    for def in defs {
        if !seen.insert(def.id.as_str()) {
            return Err(format!("duplicate item id \"{}\"", def.id));
        }
        if def
            .model
            .ground_scale
            .iter()
            .any(|s| !(s.is_finite() && *s > 0.0))
        {
            return Err(format!("item \"{}\" has a non-positive ground scale", def.id));
        }
    }
    Ok(())
}

/// Every block an item names must exist in `blocks`.
pub fn check_block_refs(defs: &[ItemDef], blocks: &BlockRegistry) -> Result<(), RegistryError> {
    for block in defs.iter().filter_map(|d| d.form.block_name()) {
        blocks.by_name(block)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemForm, ModelDef};
    use crate::test_helpers::fixtures;

    #[test]
    fn registry_lookup_by_name() {
        let reg = fixtures::test_item_registry();
        assert_eq!(reg.by_name("stone").unwrap(), ItemId(0));
        assert_eq!(reg.name_of(ItemId(0)), "stone");
    }

    #[test]
    fn unknown_item_is_an_error() {
        let reg = fixtures::test_item_registry();
        assert!(matches!(
            reg.by_name("diamond"),
            Err(RegistryError::UnknownItem(name)) if name == "diamond"
        ));
        assert_eq!(reg.name_of(ItemId(500)), "<unknown>");
    }

    #[test]
    fn iter_preserves_order() {
        let reg = fixtures::test_item_registry();
        let ids: Vec<_> = reg.iter().map(|(id, _)| id).collect();
        assert_eq!(ids.len(), reg.len());
        assert_eq!(ids[0], ItemId(0));
        assert_eq!(ids[ids.len() - 1], ItemId(reg.len() as u16 - 1));
    }

    #[test]
    fn dangling_block_reference_is_reported() {
        let blocks = fixtures::test_block_registry();
        let defs = vec![ItemDef {
            id: "obsidian".into(),
            form: ItemForm::Block("obsidian".into()),
            model: ModelDef::default(),
        }];
        assert!(matches!(
            check_block_refs(&defs, &blocks),
            Err(RegistryError::UnknownBlock(name)) if name == "obsidian"
        ));
    }

    #[test]
    fn fixture_items_reference_known_blocks() {
        let blocks = fixtures::test_block_registry();
        let items = fixtures::test_item_defs();
        assert!(validate_item_defs(&items).is_ok());
        assert!(check_block_refs(&items, &blocks).is_ok());
    }

    #[test]
    fn validation_rejects_duplicate_items() {
        let mut defs = fixtures::test_item_defs();
        defs.push(defs[0].clone());
        assert!(validate_item_defs(&defs).unwrap_err().contains("duplicate"));
    }

    #[test]
    fn validation_rejects_zero_scale() {
        let defs = vec![ItemDef {
            id: "stick".into(),
            form: ItemForm::Plain,
            model: ModelDef {
                ground_scale: [0.5, 0.0, 0.5],
                has_depth: false,
            },
        }];
        assert!(validate_item_defs(&defs).is_err());
    }

    #[test]
    fn validation_rejects_non_finite_scale() {
        for scale in [[f32::NAN, 0.5, 0.5], [0.5, 0.5, f32::INFINITY]] {
            let defs = vec![ItemDef {
                id: "stick".into(),
                form: ItemForm::Plain,
                model: ModelDef {
                    ground_scale: scale,
                    has_depth: false,
                },
            }];
            assert!(validate_item_defs(&defs).is_err(), "{scale:?} accepted");
        }
    }
}
