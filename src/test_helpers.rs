pub mod fixtures {
    use bevy::asset::AssetPlugin;
    use bevy::prelude::*;

    use crate::interaction::AutoPickupConfig;
    use crate::item::{ItemDef, ItemForm, ItemRegistry, ModelDef};
    use crate::math::{OutlineShape, ShapeBox};
    use crate::pose::PoseConfig;
    use crate::registry::block::{BlockCategory, BlockDef, BlockRegistry, FluidTag};
    use crate::render::FrameRenderLedger;
    use crate::world::VoxelMap;

    fn block(id: &str, category: BlockCategory, outline: OutlineShape) -> BlockDef {
        BlockDef {
            id: id.into(),
            category,
            outline,
            fluid: None,
        }
    }

    fn slab(height: f32) -> OutlineShape {
        OutlineShape(vec![ShapeBox::slab(height)])
    }

    pub fn test_block_defs() -> Vec<BlockDef> {
        vec![
            block("air", BlockCategory::None, OutlineShape(vec![])),
            block("stone", BlockCategory::Other, OutlineShape::full()),
            block("dirt", BlockCategory::Other, OutlineShape::full()),
            block("carpet", BlockCategory::Other, slab(0.0625)),
            block("slab", BlockCategory::Other, slab(0.5)),
            block("soul_sand", BlockCategory::SoulSand, slab(0.875)),
            block("skeleton_skull", BlockCategory::Skull, slab(0.5)),
            BlockDef {
                fluid: Some(FluidTag::Water),
                ..block("water", BlockCategory::Other, OutlineShape(vec![]))
            },
            block("wheat", BlockCategory::Other, slab(0.125)),
        ]
    }

    pub fn test_block_registry() -> BlockRegistry {
        BlockRegistry::from_defs(test_block_defs())
    }

    fn block_model(scale: f32) -> ModelDef {
        ModelDef {
            ground_scale: [scale; 3],
            has_depth: true,
        }
    }

    /// Items referencing `test_block_defs`. "stone" is always `ItemId(0)`.
    pub fn test_item_defs() -> Vec<ItemDef> {
        vec![
            ItemDef {
                id: "stone".into(),
                form: ItemForm::Block("stone".into()),
                model: block_model(0.25),
            },
            ItemDef {
                id: "carpet".into(),
                form: ItemForm::Block("carpet".into()),
                model: block_model(0.25),
            },
            ItemDef {
                id: "skeleton_skull".into(),
                form: ItemForm::Block("skeleton_skull".into()),
                model: block_model(0.5),
            },
            ItemDef {
                id: "wheat_seeds".into(),
                form: ItemForm::AliasedBlock("wheat".into()),
                model: ModelDef::default(),
            },
            ItemDef {
                id: "stick".into(),
                form: ItemForm::Plain,
                model: ModelDef::default(),
            },
        ]
    }

    pub fn test_item_registry() -> ItemRegistry {
        ItemRegistry::from_defs(test_item_defs())
    }

    /// Asset plugin that never watches the disk or starts the processor.
    pub fn headless_asset_plugin() -> AssetPlugin {
        AssetPlugin {
            watch_for_changes_override: Some(false),
            use_asset_processor_override: Some(false),
            ..default()
        }
    }

    /// Headless app with catalogs and default config, but no drop plugins.
    pub fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(test_block_registry());
        app.insert_resource(test_item_registry());
        app.insert_resource(PoseConfig::default());
        app.insert_resource(AutoPickupConfig::default());
        app.init_resource::<VoxelMap>();
        app.init_resource::<FrameRenderLedger>();
        app
    }
}
