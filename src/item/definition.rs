use serde::Deserialize;

/// How an item relates to the block it may place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub enum ItemForm {
    /// Ordinary item with no block behind it.
    #[default]
    Plain,
    /// Block item drawn with the block's own model.
    Block(String),
    /// Block-backed item drawn like a plain item (seeds, crops).
    AliasedBlock(String),
}

impl ItemForm {
    pub fn block_name(&self) -> Option<&str> {
        match self {
            ItemForm::Plain => None,
            ItemForm::Block(name) | ItemForm::AliasedBlock(name) => Some(name),
        }
    }
}

fn default_ground_scale() -> [f32; 3] {
    [0.5, 0.5, 0.5]
}

/// Transform metadata baked into an item's model.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ModelDef {
    #[serde(default = "default_ground_scale")]
    pub ground_scale: [f32; 3],
    #[serde(default)]
    pub has_depth: bool,
}

impl Default for ModelDef {
    fn default() -> Self {
        Self {
            ground_scale: default_ground_scale(),
            has_depth: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemDef {
    pub id: String,
    #[serde(default)]
    pub form: ItemForm,
    #[serde(default)]
    pub model: ModelDef,
}
